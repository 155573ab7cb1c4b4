//! escalapp-core: Shared infrastructure for EscalApp client crates.
pub mod envelope;
pub mod error;
pub mod observability;

pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
