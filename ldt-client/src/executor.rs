/// Remote function execution seam
use ldt_core::{Key, Result, Value, WritePolicy};

/// Executes a named server-side function against a record.
///
/// `args[0]` is always the bin name. `Ok(Value::Nil)` means the call
/// succeeded but returned no data; on `Err` there is no result.
pub trait RemoteExecutor: Send + Sync {
    fn execute(
        &self,
        policy: &WritePolicy,
        key: &Key,
        package_name: &str,
        function_name: &str,
        args: &[Value],
    ) -> Result<Value>;
}

impl<F> RemoteExecutor for F
where
    F: Fn(&WritePolicy, &Key, &str, &str, &[Value]) -> Result<Value> + Send + Sync,
{
    fn execute(
        &self,
        policy: &WritePolicy,
        key: &Key,
        package_name: &str,
        function_name: &str,
        args: &[Value],
    ) -> Result<Value> {
        self(policy, key, package_name, function_name, args)
    }
}
