/// Entry point handing out LDT handles bound to one executor
use crate::executor::RemoteExecutor;
use crate::llist::LargeList;
use crate::lmap::LargeMap;
use crate::lset::LargeSet;
use crate::lstack::LargeStack;
use ldt_core::{Key, WritePolicy};
use std::sync::Arc;

/// LDT client
///
/// Cheap to clone; every handle it creates shares the same executor.
#[derive(Clone)]
pub struct LdtClient {
    executor: Arc<dyn RemoteExecutor>,
    default_policy: Arc<WritePolicy>,
}

impl LdtClient {
    /// Create a client over `executor` with the default write policy
    ///
    /// # Example
    /// ```
    /// # use ldt_client::{LdtClient, MemoryExecutor, Key, LargeObject};
    /// # use std::sync::Arc;
    /// let client = LdtClient::new(Arc::new(MemoryExecutor::new()));
    /// let key = Arc::new(Key::new("test", "demo", "user#1"));
    ///
    /// let list = client.large_list(None, key, "mylist", None);
    /// list.add(42i64).unwrap();
    /// assert_eq!(list.size().unwrap(), 1);
    /// ```
    pub fn new(executor: Arc<dyn RemoteExecutor>) -> Self {
        Self::with_policy(executor, WritePolicy::default())
    }

    /// Create a client whose handles use `policy` unless given another one
    pub fn with_policy(executor: Arc<dyn RemoteExecutor>, policy: WritePolicy) -> Self {
        Self {
            executor,
            default_policy: Arc::new(policy),
        }
    }

    pub fn default_policy(&self) -> &Arc<WritePolicy> {
        &self.default_policy
    }

    fn policy_or_default(&self, policy: Option<Arc<WritePolicy>>) -> Arc<WritePolicy> {
        policy.unwrap_or_else(|| self.default_policy.clone())
    }

    /// Large list stored in `bin_name` of `key`
    ///
    /// # Arguments
    /// * `policy` - Write policy, `None` for the client default
    /// * `key` - Record holding the list
    /// * `bin_name` - Bin holding the list
    /// * `user_module` - Initialization routine, `None` for defaults
    pub fn large_list(
        &self,
        policy: Option<Arc<WritePolicy>>,
        key: Arc<Key>,
        bin_name: &str,
        user_module: Option<&str>,
    ) -> LargeList {
        LargeList::new(
            self.executor.clone(),
            self.policy_or_default(policy),
            key,
            bin_name,
            user_module,
        )
    }

    /// Large stack stored in `bin_name` of `key`
    pub fn large_stack(
        &self,
        policy: Option<Arc<WritePolicy>>,
        key: Arc<Key>,
        bin_name: &str,
        user_module: Option<&str>,
    ) -> LargeStack {
        LargeStack::new(
            self.executor.clone(),
            self.policy_or_default(policy),
            key,
            bin_name,
            user_module,
        )
    }

    /// Large set stored in `bin_name` of `key`
    pub fn large_set(
        &self,
        policy: Option<Arc<WritePolicy>>,
        key: Arc<Key>,
        bin_name: &str,
        user_module: Option<&str>,
    ) -> LargeSet {
        LargeSet::new(
            self.executor.clone(),
            self.policy_or_default(policy),
            key,
            bin_name,
            user_module,
        )
    }

    /// Large map stored in `bin_name` of `key`
    pub fn large_map(
        &self,
        policy: Option<Arc<WritePolicy>>,
        key: Arc<Key>,
        bin_name: &str,
        user_module: Option<&str>,
    ) -> LargeMap {
        LargeMap::new(
            self.executor.clone(),
            self.policy_or_default(policy),
            key,
            bin_name,
            user_module,
        )
    }
}
