pub mod counter;
pub mod lists;
