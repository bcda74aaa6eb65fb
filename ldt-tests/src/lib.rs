/// Test utilities and helpers for LDT client testing
///
/// Provides stub executors that record every call and answer with canned
/// results, so tests can observe exactly what the proxy sends.

use ldt_client::{LargeList, LargeMap, LargeSet, LargeStack, RemoteExecutor};
use ldt_core::{Key, Result, Value, WritePolicy};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Once};

/// One call observed by a stub executor
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub policy: WritePolicy,
    pub key: Key,
    pub package: String,
    pub function: String,
    pub args: Vec<Value>,
}

/// Executor that records calls and answers from a per-function script.
///
/// Functions without a scripted answer return `Value::Nil`.
#[derive(Default)]
pub struct ScriptedExecutor {
    answers: Mutex<HashMap<String, Result<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answer `function` with `result` from now on
    pub fn answer(&self, function: &str, result: Result<Value>) {
        self.answers.lock().insert(function.to_string(), result);
    }

    /// Answer each of `functions` with `result`
    pub fn answer_all(&self, functions: &[&str], result: Result<Value>) {
        let mut answers = self.answers.lock();
        for function in functions {
            answers.insert(function.to_string(), result.clone());
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl RemoteExecutor for ScriptedExecutor {
    fn execute(
        &self,
        policy: &WritePolicy,
        key: &Key,
        package_name: &str,
        function_name: &str,
        args: &[Value],
    ) -> Result<Value> {
        self.calls.lock().push(RecordedCall {
            policy: policy.clone(),
            key: key.clone(),
            package: package_name.to_string(),
            function: function_name.to_string(),
            args: args.to_vec(),
        });

        self.answers
            .lock()
            .get(function_name)
            .cloned()
            .unwrap_or(Ok(Value::Nil))
    }
}

/// Executor that stores the last `set_capacity` value and echoes it back
/// from `get_capacity`; every other call returns `Value::Nil`.
#[derive(Default)]
pub struct CapacityEchoExecutor {
    capacity: Mutex<Option<Value>>,
}

impl CapacityEchoExecutor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl RemoteExecutor for CapacityEchoExecutor {
    fn execute(
        &self,
        _policy: &WritePolicy,
        _key: &Key,
        _package_name: &str,
        function_name: &str,
        args: &[Value],
    ) -> Result<Value> {
        match function_name {
            "set_capacity" => {
                *self.capacity.lock() = args.get(1).cloned();
                Ok(Value::Nil)
            }
            "get_capacity" => Ok(self.capacity.lock().clone().unwrap_or(Value::Nil)),
            _ => Ok(Value::Nil),
        }
    }
}

/// Function names shared by every LDT kind
pub const SHARED_FUNCTIONS: [&str; 6] = [
    "destroy",
    "size",
    "get_config",
    "set_capacity",
    "get_capacity",
    "scan",
];

/// Standard test key
pub fn test_key() -> Arc<Key> {
    Arc::new(Key::new("test", "ldt", "user#1"))
}

/// One handle of each kind over the same executor, key and policy
pub struct AllKinds {
    pub list: LargeList,
    pub stack: LargeStack,
    pub set: LargeSet,
    pub map: LargeMap,
}

impl AllKinds {
    pub fn new(executor: Arc<dyn RemoteExecutor>, bin_name: &str) -> Self {
        Self::with_context(executor, Arc::new(WritePolicy::default()), test_key(), bin_name)
    }

    pub fn with_context(
        executor: Arc<dyn RemoteExecutor>,
        policy: Arc<WritePolicy>,
        key: Arc<Key>,
        bin_name: &str,
    ) -> Self {
        Self {
            list: LargeList::new(executor.clone(), policy.clone(), key.clone(), bin_name, None),
            stack: LargeStack::new(executor.clone(), policy.clone(), key.clone(), bin_name, None),
            set: LargeSet::new(executor.clone(), policy.clone(), key.clone(), bin_name, None),
            map: LargeMap::new(executor, policy, key, bin_name, None),
        }
    }
}

static INIT_TRACING: Once = Once::new();

/// Install a fmt subscriber honoring `RUST_LOG`, once per process
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
