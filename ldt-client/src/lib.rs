/// Client proxy for server-resident large data types (LDTs)
///
/// Each LDT kind (list, stack, set, map) is a thin handle over
/// [`LargeObjectBase`], which turns typed calls into remote function
/// invocations through a [`RemoteExecutor`].

pub mod executor;
pub mod convert;
pub mod large_object;
pub mod llist;
pub mod lstack;
pub mod lset;
pub mod lmap;
pub mod client;
pub mod memory;

// Re-export key types
pub use client::LdtClient;
pub use executor::RemoteExecutor;
pub use large_object::{LargeObject, LargeObjectBase};
pub use llist::LargeList;
pub use lmap::LargeMap;
pub use lset::LargeSet;
pub use lstack::LargeStack;
pub use memory::MemoryExecutor;
pub use ldt_core::{ConfigMap, Error, Key, Result, Value, WritePolicy};
