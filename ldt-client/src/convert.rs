/// Conversions from untyped remote results into the shapes each operation returns
use ldt_core::{ConfigMap, Error, Result, Value};

fn mismatch(function: &'static str, expected: &'static str, found: &Value) -> Error {
    Error::ShapeMismatch {
        function,
        expected,
        found: found.kind(),
    }
}

/// Integer result, `Nil` is a mismatch
pub fn to_integer(function: &'static str, value: Value) -> Result<i64> {
    match value {
        Value::Integer(n) => Ok(n),
        other => Err(mismatch(function, "integer", &other)),
    }
}

/// Integer result, `Nil` reads as 0
pub fn to_integer_or_zero(function: &'static str, value: Value) -> Result<i64> {
    match value {
        Value::Nil => Ok(0),
        other => to_integer(function, other),
    }
}

/// Map result, `Nil` reads as absent
pub fn to_optional_map(function: &'static str, value: Value) -> Result<Option<ConfigMap>> {
    match value {
        Value::Nil => Ok(None),
        Value::Map(m) => Ok(Some(m)),
        other => Err(mismatch(function, "map", &other)),
    }
}

/// List result, `Nil` reads as empty
pub fn to_list_or_empty(function: &'static str, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Nil => Ok(Vec::new()),
        Value::List(l) => Ok(l),
        other => Err(mismatch(function, "list", &other)),
    }
}

/// Any value, `Nil` reads as absent
pub fn to_optional(value: Value) -> Option<Value> {
    match value {
        Value::Nil => None,
        other => Some(other),
    }
}

/// Boolean result; servers report existence as 0/1 or as a bool
pub fn to_bool(function: &'static str, value: Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(b),
        Value::Integer(n) => Ok(n != 0),
        other => Err(mismatch(function, "bool", &other)),
    }
}
