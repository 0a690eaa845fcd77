//! Command handlers for CLI operations

pub mod check;
pub mod forward;

pub use check::CheckCommandHandler;
pub use forward::ForwardCommandHandler;
