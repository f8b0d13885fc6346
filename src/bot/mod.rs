pub mod commands;
pub mod handlers;

/// Result type shared by every update handler in the dispatch tree.
pub type HandlerResult = anyhow::Result<()>;
