/// Large map of key/value entries
use crate::convert::to_optional_map;
use crate::executor::RemoteExecutor;
use crate::large_object::{LargeObject, LargeObjectBase};
use ldt_core::{ConfigMap, Key, Result, Value, WritePolicy};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LargeMap {
    base: LargeObjectBase,
}

impl LargeMap {
    pub fn new(
        executor: Arc<dyn RemoteExecutor>,
        policy: Arc<WritePolicy>,
        key: Arc<Key>,
        bin_name: &str,
        user_module: Option<&str>,
    ) -> Self {
        Self {
            base: LargeObjectBase::new(executor, policy, key, bin_name, user_module),
        }
    }

    pub fn put(&self, name: impl Into<Value>, value: impl Into<Value>) -> Result<()> {
        let module = self.base.user_module().clone();
        self.base
            .execute(self, "put", &[name.into(), value.into(), module])
            .map(|_| ())
    }

    /// Insert every entry of `entries` in one call
    pub fn put_map(&self, entries: ConfigMap) -> Result<()> {
        let module = self.base.user_module().clone();
        self.base
            .execute(self, "put_all", &[Value::Map(entries), module])
            .map(|_| ())
    }

    /// Single-entry map `{name: value}`, or `None` if `name` is not stored
    pub fn get(&self, name: impl Into<Value>) -> Result<Option<ConfigMap>> {
        let ret = self.base.execute(self, "get", &[name.into()])?;
        to_optional_map("get", ret)
    }

    pub fn remove(&self, name: impl Into<Value>) -> Result<()> {
        self.base.execute(self, "remove", &[name.into()]).map(|_| ())
    }
}

impl LargeObject for LargeMap {
    fn package_name(&self) -> &'static str {
        "lmap"
    }

    fn base(&self) -> &LargeObjectBase {
        &self.base
    }
}
