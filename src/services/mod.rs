pub mod forwarding;

pub use forwarding::{ForwardOutcome, Forwarder, MessageFormat};
