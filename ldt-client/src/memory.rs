/// In-process executor implementing the server-side LDT packages
///
/// Keeps every LDT in memory, keyed by record and bin. Useful for tests and
/// local development without a server.
use crate::executor::RemoteExecutor;
use ldt_core::{ConfigMap, Error, Key, Result, Value, WritePolicy};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info};

const COMMON_FUNCTIONS: &[&str] = &[
    "destroy",
    "size",
    "get_config",
    "set_capacity",
    "get_capacity",
    "scan",
];

/// Functions that never modify state
const QUERY_FUNCTIONS: &[&str] = &[
    "size",
    "get_config",
    "get_capacity",
    "scan",
    "find",
    "peek",
    "get",
    "exists",
];

const LLIST_FUNCTIONS: &[&str] = &["add", "add_all", "remove", "find"];
const LSTACK_FUNCTIONS: &[&str] = &["push", "push_all", "peek", "pop"];
const LSET_FUNCTIONS: &[&str] = &["add", "add_all", "remove", "get", "exists"];
const LMAP_FUNCTIONS: &[&str] = &["put", "put_all", "get", "remove"];

fn package_functions(package: &str) -> Option<&'static [&'static str]> {
    match package {
        "llist" => Some(LLIST_FUNCTIONS),
        "lstack" => Some(LSTACK_FUNCTIONS),
        "lset" => Some(LSET_FUNCTIONS),
        "lmap" => Some(LMAP_FUNCTIONS),
        _ => None,
    }
}

#[derive(Debug, Clone)]
enum Collection {
    /// llist (sorted), lstack (top is last), lset (unique)
    Elements(Vec<Value>),
    /// lmap
    Entries(ConfigMap),
}

#[derive(Debug, Clone)]
struct StoredLdt {
    package: String,
    /// 0 = unlimited
    capacity: i64,
    module: Value,
    collection: Collection,
}

impl StoredLdt {
    fn new(package: &str, module: Value) -> Self {
        let collection = if package == "lmap" {
            Collection::Entries(ConfigMap::new())
        } else {
            Collection::Elements(Vec::new())
        };

        Self {
            package: package.to_string(),
            capacity: 0,
            module,
            collection,
        }
    }

    fn len(&self) -> usize {
        match &self.collection {
            Collection::Elements(e) => e.len(),
            Collection::Entries(m) => m.len(),
        }
    }

    fn check_package(&self, package: &str) -> Result<()> {
        if self.package != package {
            return Err(Error::PackageMismatch {
                expected: package.to_string(),
                found: self.package.clone(),
            });
        }
        Ok(())
    }

    fn check_room(&self, adding: usize) -> Result<()> {
        if self.capacity > 0 && (self.len() + adding) as i64 > self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
                size: self.len() as i64,
            });
        }
        Ok(())
    }

    fn config(&self) -> ConfigMap {
        let mut config = ConfigMap::new();
        config.insert(Value::string("package"), Value::string(self.package.as_str()));
        config.insert(Value::string("size"), Value::Integer(self.len() as i64));
        config.insert(Value::string("capacity"), Value::Integer(self.capacity));
        config.insert(Value::string("module"), self.module.clone());
        config
    }
}

/// In-memory LDT server
#[derive(Debug, Default)]
pub struct MemoryExecutor {
    bins: RwLock<HashMap<(Key, String), StoredLdt>>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of LDT bins currently stored
    pub fn bin_count(&self) -> usize {
        self.bins.read().len()
    }

    fn query(stored: &StoredLdt, function: &str, args: &[Value]) -> Result<Value> {
        let ret = match function {
            "size" => Value::Integer(stored.len() as i64),
            "get_config" => Value::Map(stored.config()),
            "get_capacity" => Value::Integer(stored.capacity),
            "scan" => match &stored.collection {
                Collection::Elements(e) if stored.package == "lstack" => {
                    Value::List(e.iter().rev().cloned().collect())
                }
                Collection::Elements(e) => Value::List(e.clone()),
                Collection::Entries(m) => Value::List(
                    m.iter()
                        .map(|(k, v)| Value::Map(single_entry(k.clone(), v.clone())))
                        .collect(),
                ),
            },
            "find" => {
                let target = arg(args, 0, function)?;
                Value::List(
                    elements(stored)?
                        .iter()
                        .filter(|v| *v == target)
                        .cloned()
                        .collect(),
                )
            }
            "peek" => {
                let count = count_arg(args, function)?;
                Value::List(elements(stored)?.iter().rev().take(count).cloned().collect())
            }
            "get" => {
                let target = arg(args, 0, function)?;
                match &stored.collection {
                    Collection::Elements(e) => e
                        .iter()
                        .find(|v| *v == target)
                        .cloned()
                        .unwrap_or(Value::Nil),
                    Collection::Entries(m) => match m.get(target) {
                        Some(v) => Value::Map(single_entry(target.clone(), v.clone())),
                        None => Value::Nil,
                    },
                }
            }
            "exists" => {
                let target = arg(args, 0, function)?;
                Value::Integer(elements(stored)?.contains(target) as i64)
            }
            other => {
                return Err(Error::UnknownFunction {
                    package: stored.package.clone(),
                    function: other.to_string(),
                })
            }
        };
        Ok(ret)
    }

    fn insert(stored: &mut StoredLdt, function: &str, values: Vec<Value>) -> Result<()> {
        stored.check_room(values.len())?;

        let package = stored.package.clone();
        let elements = match &mut stored.collection {
            Collection::Elements(e) => e,
            Collection::Entries(_) => return Err(wrong_collection(function)),
        };

        if package == "lset" {
            for (i, value) in values.iter().enumerate() {
                if elements.contains(value) || values[..i].contains(value) {
                    return Err(Error::Remote(format!("unique key violation: {}", value)));
                }
            }
        }

        for value in values {
            if package == "llist" {
                let pos = elements.partition_point(|v| v <= &value);
                elements.insert(pos, value);
            } else {
                elements.push(value);
            }
        }
        Ok(())
    }

    fn put(stored: &mut StoredLdt, function: &str, entries: ConfigMap) -> Result<()> {
        let adding = match &stored.collection {
            Collection::Entries(m) => entries.keys().filter(|k| !m.contains_key(*k)).count(),
            Collection::Elements(_) => return Err(wrong_collection(function)),
        };
        stored.check_room(adding)?;

        if let Collection::Entries(m) = &mut stored.collection {
            m.extend(entries);
        }
        Ok(())
    }

    fn mutate(
        bins: &mut HashMap<(Key, String), StoredLdt>,
        id: (Key, String),
        package: &str,
        function: &str,
        args: &[Value],
    ) -> Result<Value> {
        match function {
            "destroy" => {
                let stored = bins
                    .get(&id)
                    .ok_or_else(|| Error::BinNotFound(id.1.clone()))?;
                stored.check_package(package)?;
                bins.remove(&id);
                let (key, bin) = &id;
                info!(key = %key, bin = %bin, "Destroyed {}", package);
                Ok(Value::Nil)
            }
            "set_capacity" => {
                let capacity = match arg(args, 0, function)? {
                    Value::Integer(n) if *n >= 0 => *n,
                    other => {
                        return Err(Error::InvalidArgument(format!(
                            "capacity must be a non-negative integer, got {}",
                            other
                        )))
                    }
                };
                let stored = create_or_get(bins, id, package, Value::Nil)?;
                stored.capacity = capacity;
                Ok(Value::Nil)
            }
            "add" | "push" => {
                let value = arg(args, 0, function)?.clone();
                let module = args.get(1).cloned().unwrap_or(Value::Nil);
                let stored = create_or_get(bins, id, package, module)?;
                Self::insert(stored, function, vec![value])?;
                Ok(Value::Nil)
            }
            "add_all" | "push_all" => {
                let values = match arg(args, 0, function)? {
                    Value::List(l) => l.clone(),
                    other => return Err(expected_arg(function, "list", other)),
                };
                let module = args.get(1).cloned().unwrap_or(Value::Nil);
                let stored = create_or_get(bins, id, package, module)?;
                Self::insert(stored, function, values)?;
                Ok(Value::Nil)
            }
            "put" => {
                let name = arg(args, 0, function)?.clone();
                let value = arg(args, 1, function)?.clone();
                let module = args.get(2).cloned().unwrap_or(Value::Nil);
                let stored = create_or_get(bins, id, package, module)?;
                Self::put(stored, function, single_entry(name, value))?;
                Ok(Value::Nil)
            }
            "put_all" => {
                let entries = match arg(args, 0, function)? {
                    Value::Map(m) => m.clone(),
                    other => return Err(expected_arg(function, "map", other)),
                };
                let module = args.get(1).cloned().unwrap_or(Value::Nil);
                let stored = create_or_get(bins, id, package, module)?;
                Self::put(stored, function, entries)?;
                Ok(Value::Nil)
            }
            "remove" => {
                let target = arg(args, 0, function)?;
                let stored = existing_mut(bins, &id, package)?;
                let removed = match &mut stored.collection {
                    Collection::Elements(e) => match e.iter().position(|v| v == target) {
                        Some(pos) => {
                            e.remove(pos);
                            true
                        }
                        None => false,
                    },
                    Collection::Entries(m) => m.remove(target).is_some(),
                };
                if !removed {
                    return Err(Error::Remote(format!("value not found: {}", target)));
                }
                Ok(Value::Nil)
            }
            "pop" => {
                let count = count_arg(args, function)?;
                let stored = existing_mut(bins, &id, package)?;
                let elements = match &mut stored.collection {
                    Collection::Elements(e) => e,
                    Collection::Entries(_) => return Err(wrong_collection(function)),
                };
                let keep = elements.len().saturating_sub(count);
                let mut popped = elements.split_off(keep);
                popped.reverse();
                Ok(Value::List(popped))
            }
            other => Err(Error::UnknownFunction {
                package: package.to_string(),
                function: other.to_string(),
            }),
        }
    }
}

impl RemoteExecutor for MemoryExecutor {
    fn execute(
        &self,
        _policy: &WritePolicy,
        key: &Key,
        package_name: &str,
        function_name: &str,
        args: &[Value],
    ) -> Result<Value> {
        let supported = package_functions(package_name)
            .map(|fns| fns.contains(&function_name) || COMMON_FUNCTIONS.contains(&function_name))
            .unwrap_or(false);
        if !supported {
            return Err(Error::UnknownFunction {
                package: package_name.to_string(),
                function: function_name.to_string(),
            });
        }

        let (bin, rest) = match args.split_first() {
            Some((Value::String(bin), rest)) => (bin.clone(), rest),
            _ => {
                return Err(Error::InvalidArgument(
                    "first argument must be the bin name".to_string(),
                ))
            }
        };

        debug!(key = %key, bin = %bin, "Executing {}.{}", package_name, function_name);
        let id = (key.clone(), bin);

        if QUERY_FUNCTIONS.contains(&function_name) {
            let bins = self.bins.read();
            return match bins.get(&id) {
                Some(stored) => {
                    stored.check_package(package_name)?;
                    Self::query(stored, function_name, rest)
                }
                None if function_name == "exists" => Ok(Value::Integer(0)),
                None => Ok(Value::Nil),
            };
        }

        let mut bins = self.bins.write();
        let existed = bins.contains_key(&id);
        let result = Self::mutate(&mut bins, id.clone(), package_name, function_name, rest);

        // A failed first write must not leave an empty bin behind
        if result.is_err() && !existed {
            bins.remove(&id);
        }
        result
    }
}

fn create_or_get<'a>(
    bins: &'a mut HashMap<(Key, String), StoredLdt>,
    id: (Key, String),
    package: &str,
    module: Value,
) -> Result<&'a mut StoredLdt> {
    let stored = bins.entry(id).or_insert_with_key(|(key, bin)| {
        debug!(key = %key, bin = %bin, "Creating {}", package);
        StoredLdt::new(package, module)
    });
    stored.check_package(package)?;
    Ok(stored)
}

fn existing_mut<'a>(
    bins: &'a mut HashMap<(Key, String), StoredLdt>,
    id: &(Key, String),
    package: &str,
) -> Result<&'a mut StoredLdt> {
    let stored = bins
        .get_mut(id)
        .ok_or_else(|| Error::BinNotFound(id.1.clone()))?;
    stored.check_package(package)?;
    Ok(stored)
}

fn elements<'a>(stored: &'a StoredLdt) -> Result<&'a [Value]> {
    match &stored.collection {
        Collection::Elements(e) => Ok(e),
        Collection::Entries(_) => Err(wrong_collection("elements")),
    }
}

fn single_entry(name: Value, value: Value) -> ConfigMap {
    let mut m = ConfigMap::new();
    m.insert(name, value);
    m
}

fn arg<'a>(args: &'a [Value], idx: usize, function: &str) -> Result<&'a Value> {
    args.get(idx).ok_or_else(|| {
        Error::InvalidArgument(format!("{}: missing argument {}", function, idx + 1))
    })
}

/// Non-positive counts mean every element
fn count_arg(args: &[Value], function: &str) -> Result<usize> {
    match arg(args, 0, function)? {
        Value::Integer(n) if *n > 0 => Ok(*n as usize),
        Value::Integer(_) => Ok(usize::MAX),
        other => Err(expected_arg(function, "integer", other)),
    }
}

fn expected_arg(function: &str, expected: &str, found: &Value) -> Error {
    Error::InvalidArgument(format!(
        "{}: expected {} argument, got {}",
        function,
        expected,
        found.kind()
    ))
}

fn wrong_collection(function: &str) -> Error {
    Error::Remote(format!("{} not supported by this collection", function))
}
