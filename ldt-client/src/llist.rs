/// Large ordered list
use crate::convert::to_list_or_empty;
use crate::executor::RemoteExecutor;
use crate::large_object::{LargeObject, LargeObjectBase};
use ldt_core::{Key, Result, Value, WritePolicy};
use std::sync::Arc;

/// Sorted list of values kept in a single bin
#[derive(Debug, Clone)]
pub struct LargeList {
    base: LargeObjectBase,
}

impl LargeList {
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

    /// Insert a value, creating the list if needed
    pub fn add(&self, value: impl Into<Value>) -> Result<()> {
        let module = self.base.user_module().clone();
        self.base
            .execute(self, "add", &[value.into(), module])
            .map(|_| ())
    }

    /// Insert several values in one call
    pub fn add_all(&self, values: Vec<Value>) -> Result<()> {
        let module = self.base.user_module().clone();
        self.base
            .execute(self, "add_all", &[Value::List(values), module])
            .map(|_| ())
    }

    pub fn remove(&self, value: impl Into<Value>) -> Result<()> {
        self.base.execute(self, "remove", &[value.into()]).map(|_| ())
    }

    /// Values equal to `value`; empty when none match
    pub fn find(&self, value: impl Into<Value>) -> Result<Vec<Value>> {
        let ret = self.base.execute(self, "find", &[value.into()])?;
        to_list_or_empty("find", ret)
    }
}

impl LargeObject for LargeList {
    fn package_name(&self) -> &'static str {
        "llist"
    }

    fn base(&self) -> &LargeObjectBase {
        &self.base
    }
}
