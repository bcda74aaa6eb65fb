/// Argument marshaling: what each operation sends to the executor
use ldt_client::{LargeList, LargeMap, LargeObject, LargeStack};
use ldt_core::{ConfigMap, Key, Value, WritePolicy};
use ldt_test_utils::{test_key, AllKinds, RecordedCall, ScriptedExecutor, SHARED_FUNCTIONS};
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn run_shared<K: LargeObject>(kind: &K, capacity: i64) {
    let _ = kind.destroy();
    let _ = kind.size();
    let _ = kind.get_config();
    let _ = kind.set_capacity(capacity);
    let _ = kind.get_capacity();
    let _ = kind.scan();
}

fn list_calls(key: Key, bin: &str, policy: WritePolicy, capacity: i64) -> Vec<RecordedCall> {
    let exec = ScriptedExecutor::new();
    let list = LargeList::new(exec.clone(), Arc::new(policy), Arc::new(key), bin, None);
    run_shared(&list, capacity);
    exec.calls()
}

/// Every operation of every kind, in a fixed order
fn all_kind_calls(
    key: Key,
    bin: &str,
    policy: WritePolicy,
    capacity: i64,
    element: Value,
) -> Vec<RecordedCall> {
    let exec = ScriptedExecutor::new();
    let kinds = AllKinds::with_context(exec.clone(), Arc::new(policy), Arc::new(key), bin);

    run_shared(&kinds.list, capacity);
    run_shared(&kinds.stack, capacity);
    run_shared(&kinds.set, capacity);
    run_shared(&kinds.map, capacity);

    let _ = kinds.list.add(element.clone());
    let _ = kinds.list.add_all(vec![element.clone()]);
    let _ = kinds.list.remove(element.clone());
    let _ = kinds.list.find(element.clone());

    let _ = kinds.stack.push(element.clone());
    let _ = kinds.stack.push_all(vec![element.clone()]);
    let _ = kinds.stack.peek(capacity);
    let _ = kinds.stack.pop(capacity);

    let _ = kinds.set.add(element.clone());
    let _ = kinds.set.add_all(vec![element.clone()]);
    let _ = kinds.set.remove(element.clone());
    let _ = kinds.set.get(element.clone());
    let _ = kinds.set.exists(element.clone());

    let mut entries = ConfigMap::new();
    entries.insert(element.clone(), Value::integer(capacity));
    let _ = kinds.map.put(element.clone(), capacity);
    let _ = kinds.map.put_map(entries);
    let _ = kinds.map.get(element.clone());
    let _ = kinds.map.remove(element);

    exec.calls()
}

#[test]
fn test_shared_function_names_and_args() {
    let exec = ScriptedExecutor::new();
    let kinds = AllKinds::new(exec.clone(), "mylist");

    run_shared(&kinds.list, 100);
    let calls = exec.calls();

    let functions: Vec<&str> = calls.iter().map(|c| c.function.as_str()).collect();
    assert_eq!(functions, SHARED_FUNCTIONS);

    for call in &calls {
        assert_eq!(call.package, "llist");
        assert_eq!(call.key, *test_key());
        assert_eq!(call.args[0], Value::string("mylist"));
    }
    assert_eq!(
        calls[3].args,
        vec![Value::string("mylist"), Value::integer(100)]
    );
    assert!(calls
        .iter()
        .filter(|c| c.function != "set_capacity")
        .all(|c| c.args.len() == 1));
}

#[test]
fn test_package_routing_per_kind() {
    let exec = ScriptedExecutor::new();
    let kinds = AllKinds::new(exec.clone(), "b");

    kinds.list.size().unwrap();
    kinds.stack.size().unwrap();
    kinds.set.size().unwrap();
    kinds.map.size().unwrap();

    let packages: Vec<String> = exec.calls().into_iter().map(|c| c.package).collect();
    assert_eq!(packages, vec!["llist", "lstack", "lset", "lmap"]);
}

#[test]
fn test_policy_passed_through_untouched() {
    let policy = WritePolicy::new()
        .with_timeout(Duration::from_millis(50))
        .with_send_key(true);
    let calls = list_calls(Key::new("test", "demo", 1i64), "b", policy.clone(), 1);

    assert_eq!(calls.len(), 6);
    assert!(calls.iter().all(|c| c.policy == policy));
}

#[test]
fn test_kind_specific_marshaling() {
    let exec = ScriptedExecutor::new();
    let policy = Arc::new(WritePolicy::default());
    let stack = LargeStack::new(exec.clone(), policy.clone(), test_key(), "s", Some("init"));
    let map = LargeMap::new(exec.clone(), policy, test_key(), "m", None);

    stack.push_all(vec![Value::integer(1), Value::integer(2)]).unwrap();
    stack.peek(2).unwrap();

    let mut entries = ConfigMap::new();
    entries.insert(Value::string("a"), Value::integer(1));
    map.put_map(entries.clone()).unwrap();
    map.put("b", 2i64).unwrap();

    let calls = exec.calls();
    assert_eq!(calls[0].function, "push_all");
    assert_eq!(
        calls[0].args,
        vec![
            Value::string("s"),
            Value::list(vec![Value::integer(1), Value::integer(2)]),
            Value::string("init"),
        ]
    );
    assert_eq!(calls[1].function, "peek");
    assert_eq!(calls[1].args, vec![Value::string("s"), Value::integer(2)]);
    assert_eq!(calls[2].function, "put_all");
    assert_eq!(
        calls[2].args,
        vec![Value::string("m"), Value::map(entries), Value::Nil]
    );
    assert_eq!(calls[3].function, "put");
    assert_eq!(
        calls[3].args,
        vec![Value::string("m"), Value::string("b"), Value::integer(2), Value::Nil]
    );
}

proptest! {
    /// Handles built from the same (key, bin, policy) send identical calls
    #[test]
    fn prop_marshaling_is_deterministic(
        user_key in "[a-z0-9#]{1,16}",
        bin in "[a-z]{1,14}",
        generation in 0u32..1000,
        capacity in any::<i64>(),
    ) {
        let policy = WritePolicy::new().with_generation(generation);
        let key = Key::new("test", "demo", user_key.as_str());

        let first = list_calls(key.clone(), &bin, policy.clone(), capacity);
        let second = list_calls(key, &bin, policy, capacity);

        prop_assert_eq!(first.len(), 6);
        prop_assert_eq!(first, second);
    }

    /// Same property over all four kinds and their own operations
    #[test]
    fn prop_all_kinds_marshal_deterministically(
        user_key in "[a-z0-9#]{1,16}",
        bin in "[a-z]{1,14}",
        generation in 0u32..1000,
        capacity in any::<i64>(),
        element in prop_oneof![
            any::<i64>().prop_map(Value::Integer),
            "[a-z]{0,8}".prop_map(Value::String),
        ],
    ) {
        let policy = WritePolicy::new().with_generation(generation);
        let key = Key::new("test", "demo", user_key.as_str());

        let first = all_kind_calls(key.clone(), &bin, policy.clone(), capacity, element.clone());
        let second = all_kind_calls(key, &bin, policy, capacity, element);

        prop_assert_eq!(first.len(), 4 * 6 + 17);
        prop_assert!(first.iter().all(|c| c.args[0] == Value::string(bin.as_str())));
        prop_assert_eq!(first, second);
    }
}
