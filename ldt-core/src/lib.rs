pub mod error;
pub mod types;
pub mod policy;

pub use error::{Error, Result};
pub use policy::{CommitLevel, Expiration, WritePolicy};
pub use types::*;
