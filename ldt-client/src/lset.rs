/// Large set of unique values
use crate::convert::{to_bool, to_optional};
use crate::executor::RemoteExecutor;
use crate::large_object::{LargeObject, LargeObjectBase};
use ldt_core::{Key, Result, Value, WritePolicy};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LargeSet {
    base: LargeObjectBase,
}

impl LargeSet {
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

    pub fn add(&self, value: impl Into<Value>) -> Result<()> {
        let module = self.base.user_module().clone();
        self.base
            .execute(self, "add", &[value.into(), module])
            .map(|_| ())
    }

    pub fn add_all(&self, values: Vec<Value>) -> Result<()> {
        let module = self.base.user_module().clone();
        self.base
            .execute(self, "add_all", &[Value::List(values), module])
            .map(|_| ())
    }

    pub fn remove(&self, value: impl Into<Value>) -> Result<()> {
        self.base.execute(self, "remove", &[value.into()]).map(|_| ())
    }

    /// The stored value equal to `value`, if any
    pub fn get(&self, value: impl Into<Value>) -> Result<Option<Value>> {
        let ret = self.base.execute(self, "get", &[value.into()])?;
        Ok(to_optional(ret))
    }

    pub fn exists(&self, value: impl Into<Value>) -> Result<bool> {
        let ret = self.base.execute(self, "exists", &[value.into()])?;
        to_bool("exists", ret)
    }
}

impl LargeObject for LargeSet {
    fn package_name(&self) -> &'static str {
        "lset"
    }

    fn base(&self) -> &LargeObjectBase {
        &self.base
    }
}
