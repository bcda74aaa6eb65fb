/// Shared base for all large data types
use crate::convert::*;
use crate::executor::RemoteExecutor;
use ldt_core::{ConfigMap, Key, Result, Value, WritePolicy};
use std::fmt;
use std::sync::Arc;

/// Capability implemented by each LDT kind.
///
/// A kind supplies its server-side package name and its base; the operations
/// common to every kind are provided here and forward to the base.
pub trait LargeObject {
    /// Server-side package routing calls for this kind
    fn package_name(&self) -> &'static str;

    fn base(&self) -> &LargeObjectBase;

    /// Destroy the bin containing the LDT
    fn destroy(&self) -> Result<()> {
        self.base().destroy(self)
    }

    /// Number of elements; an absent result counts as 0
    fn size(&self) -> Result<i64> {
        self.base().size(self)
    }

    /// LDT configuration; `None` when the server returns no data
    fn get_config(&self) -> Result<Option<ConfigMap>> {
        self.base().get_config(self)
    }

    /// Set the maximum number of entries
    fn set_capacity(&self, capacity: i64) -> Result<()> {
        self.base().set_capacity(self, capacity)
    }

    /// Maximum number of entries
    fn get_capacity(&self) -> Result<i64> {
        self.base().get_capacity(self)
    }

    /// All elements; an absent result is an empty list
    fn scan(&self) -> Result<Vec<Value>> {
        self.base().scan(self)
    }
}

/// Identifies one LDT instance: the record, the bin and the call context.
///
/// Immutable once built. The handle owns no remote resource; dropping it
/// leaves the bin untouched.
#[derive(Clone)]
pub struct LargeObjectBase {
    executor: Arc<dyn RemoteExecutor>,
    policy: Arc<WritePolicy>,
    key: Arc<Key>,
    bin_name: Value,
    user_module: Value,
}

impl LargeObjectBase {
    /// Create a base bound to `key` and `bin_name`
    ///
    /// # Arguments
    /// * `executor` - Executor that performs the remote calls
    /// * `policy` - Write policy passed through on every call
    /// * `key` - Record holding the LDT
    /// * `bin_name` - Bin holding the LDT
    /// * `user_module` - Server routine that initializes the LDT config;
    ///   `None` or an empty name means no module
    pub fn new(
        executor: Arc<dyn RemoteExecutor>,
        policy: Arc<WritePolicy>,
        key: Arc<Key>,
        bin_name: &str,
        user_module: Option<&str>,
    ) -> Self {
        let user_module = match user_module {
            Some(module) if !module.is_empty() => Value::string(module),
            _ => Value::Nil,
        };

        Self {
            executor,
            policy,
            key,
            bin_name: Value::string(bin_name),
            user_module,
        }
    }

    pub fn key(&self) -> &Arc<Key> {
        &self.key
    }

    pub fn policy(&self) -> &Arc<WritePolicy> {
        &self.policy
    }

    pub fn bin_name(&self) -> &Value {
        &self.bin_name
    }

    pub fn user_module(&self) -> &Value {
        &self.user_module
    }

    /// Call `function` in the kind's package with the bin name followed by `args`
    pub fn execute<K: LargeObject + ?Sized>(
        &self,
        kind: &K,
        function: &str,
        args: &[Value],
    ) -> Result<Value> {
        let mut call_args = Vec::with_capacity(args.len() + 1);
        call_args.push(self.bin_name.clone());
        call_args.extend_from_slice(args);

        self.executor.execute(
            &self.policy,
            &self.key,
            kind.package_name(),
            function,
            &call_args,
        )
    }

    pub fn destroy<K: LargeObject + ?Sized>(&self, kind: &K) -> Result<()> {
        self.execute(kind, "destroy", &[]).map(|_| ())
    }

    pub fn size<K: LargeObject + ?Sized>(&self, kind: &K) -> Result<i64> {
        let ret = self.execute(kind, "size", &[])?;
        to_integer_or_zero("size", ret)
    }

    pub fn get_config<K: LargeObject + ?Sized>(&self, kind: &K) -> Result<Option<ConfigMap>> {
        let ret = self.execute(kind, "get_config", &[])?;
        to_optional_map("get_config", ret)
    }

    pub fn set_capacity<K: LargeObject + ?Sized>(&self, kind: &K, capacity: i64) -> Result<()> {
        self.execute(kind, "set_capacity", &[Value::Integer(capacity)])
            .map(|_| ())
    }

    /// Unlike `size`, an absent result is a shape mismatch, not 0
    pub fn get_capacity<K: LargeObject + ?Sized>(&self, kind: &K) -> Result<i64> {
        let ret = self.execute(kind, "get_capacity", &[])?;
        to_integer("get_capacity", ret)
    }

    pub fn scan<K: LargeObject + ?Sized>(&self, kind: &K) -> Result<Vec<Value>> {
        let ret = self.execute(kind, "scan", &[])?;
        to_list_or_empty("scan", ret)
    }
}

impl fmt::Debug for LargeObjectBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LargeObjectBase")
            .field("key", &self.key)
            .field("bin_name", &self.bin_name)
            .field("user_module", &self.user_module)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
