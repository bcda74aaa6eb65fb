/// Large stack (last in, first out)
use crate::convert::to_list_or_empty;
use crate::executor::RemoteExecutor;
use crate::large_object::{LargeObject, LargeObjectBase};
use ldt_core::{Key, Result, Value, WritePolicy};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LargeStack {
    base: LargeObjectBase,
}

impl LargeStack {
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

    pub fn push(&self, value: impl Into<Value>) -> Result<()> {
        let module = self.base.user_module().clone();
        self.base
            .execute(self, "push", &[value.into(), module])
            .map(|_| ())
    }

    /// Push values in order; the last one ends up on top
    pub fn push_all(&self, values: Vec<Value>) -> Result<()> {
        let module = self.base.user_module().clone();
        self.base
            .execute(self, "push_all", &[Value::List(values), module])
            .map(|_| ())
    }

    /// Top `count` values, newest first, without removing them
    pub fn peek(&self, count: i64) -> Result<Vec<Value>> {
        let ret = self.base.execute(self, "peek", &[Value::Integer(count)])?;
        to_list_or_empty("peek", ret)
    }

    /// Remove and return the top `count` values, newest first
    pub fn pop(&self, count: i64) -> Result<Vec<Value>> {
        let ret = self.base.execute(self, "pop", &[Value::Integer(count)])?;
        to_list_or_empty("pop", ret)
    }
}

impl LargeObject for LargeStack {
    fn package_name(&self) -> &'static str {
        "lstack"
    }

    fn base(&self) -> &LargeObjectBase {
        &self.base
    }
}
