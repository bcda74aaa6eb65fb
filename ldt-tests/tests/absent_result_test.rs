/// How each operation treats an absent (`Nil`) remote result
use ldt_client::{LargeList, LargeObject, LargeSet};
use ldt_core::{ConfigMap, Error, Value, WritePolicy};
use ldt_test_utils::{test_key, AllKinds, ScriptedExecutor};
use std::sync::Arc;

#[test]
fn test_size_absent_is_zero() {
    let exec = ScriptedExecutor::new();
    let kinds = AllKinds::new(exec.clone(), "b");

    assert_eq!(kinds.list.size().unwrap(), 0);
    assert_eq!(kinds.stack.size().unwrap(), 0);
    assert_eq!(kinds.set.size().unwrap(), 0);
    assert_eq!(kinds.map.size().unwrap(), 0);
}

#[test]
fn test_get_config_absent_is_none_not_empty() {
    let exec = ScriptedExecutor::new();
    let kinds = AllKinds::new(exec.clone(), "b");
    assert_eq!(kinds.list.get_config().unwrap(), None);

    exec.answer("get_config", Ok(Value::map(ConfigMap::new())));
    assert_eq!(kinds.list.get_config().unwrap(), Some(ConfigMap::new()));
}

#[test]
fn test_scan_absent_is_empty_not_none() {
    let exec = ScriptedExecutor::new();
    let kinds = AllKinds::new(exec.clone(), "b");

    let scanned = kinds.set.scan().unwrap();
    assert!(scanned.is_empty());

    exec.answer("scan", Ok(Value::list(vec![Value::integer(1)])));
    assert_eq!(kinds.set.scan().unwrap(), vec![Value::integer(1)]);
}

/// get_capacity does not default an absent result the way size does
#[test]
fn test_get_capacity_absent_is_mismatch() {
    let exec = ScriptedExecutor::new();
    let kinds = AllKinds::new(exec.clone(), "b");

    assert_eq!(kinds.list.size().unwrap(), 0);
    assert_eq!(
        kinds.list.get_capacity().unwrap_err(),
        Error::ShapeMismatch {
            function: "get_capacity",
            expected: "integer",
            found: "nil",
        }
    );

    exec.answer("get_capacity", Ok(Value::integer(0)));
    assert_eq!(kinds.list.get_capacity().unwrap(), 0);
}

#[test]
fn test_destroy_and_set_capacity_ignore_result() {
    let exec = ScriptedExecutor::new();
    exec.answer("destroy", Ok(Value::string("ok")));
    exec.answer("set_capacity", Ok(Value::integer(1)));
    let kinds = AllKinds::new(exec.clone(), "b");

    kinds.map.destroy().unwrap();
    kinds.map.set_capacity(10).unwrap();
}

#[test]
fn test_kind_specific_absent_results() {
    let exec = ScriptedExecutor::new();
    let kinds = AllKinds::new(exec.clone(), "b");

    assert!(kinds.list.find(1i64).unwrap().is_empty());
    assert!(kinds.stack.peek(3).unwrap().is_empty());
    assert!(kinds.stack.pop(3).unwrap().is_empty());
    assert_eq!(kinds.set.get(1i64).unwrap(), None);
    assert_eq!(kinds.map.get("k").unwrap(), None);

    // exists has no absent form
    assert!(kinds.set.exists(1i64).is_err());
}

#[test]
fn test_empty_module_encodes_as_nil() {
    let exec = ScriptedExecutor::new();
    let policy = Arc::new(WritePolicy::default());

    let none = LargeList::new(exec.clone(), policy.clone(), test_key(), "b", None);
    let empty = LargeList::new(exec.clone(), policy.clone(), test_key(), "b", Some(""));
    let named = LargeList::new(exec.clone(), policy, test_key(), "b", Some("init_list"));

    assert_eq!(none.base().user_module(), &Value::Nil);
    assert_eq!(empty.base().user_module(), &Value::Nil);
    assert_eq!(named.base().user_module(), &Value::string("init_list"));
    assert_ne!(empty.base().user_module(), named.base().user_module());

    empty.add(1i64).unwrap();
    named.add(1i64).unwrap();
    let calls = exec.calls();
    assert_eq!(
        calls[0].args,
        vec![Value::string("b"), Value::integer(1), Value::Nil]
    );
    assert_eq!(
        calls[1].args,
        vec![Value::string("b"), Value::integer(1), Value::string("init_list")]
    );
}

#[test]
fn test_module_not_sent_on_shared_operations() {
    let exec = ScriptedExecutor::new();
    let set = LargeSet::new(
        exec.clone(),
        Arc::new(WritePolicy::default()),
        test_key(),
        "tags",
        Some("init_set"),
    );

    set.size().unwrap();
    assert_eq!(exec.last_call().unwrap().args, vec![Value::string("tags")]);
}
