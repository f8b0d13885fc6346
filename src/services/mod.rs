pub mod countdown;
pub mod quotes;
