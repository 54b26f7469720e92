//! Records are JSON objects with insertion-ordered keys.
//!
//! Property reads distinguish a missing key (`None`) from an explicit
//! `Value::Null`, which keeps `is_nil`/`is_null` meaningful on the result.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::collection::map;
use crate::combinator::partial1_ref;

pub type Record = Map<String, Value>;

/// Anything a property can be read from by name.
pub trait Props {
    fn prop(&self, name: &str) -> Option<&Value>;
}

impl Props for Record {
    fn prop(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

// non-objects have no properties
impl Props for Value {
    fn prop(&self, name: &str) -> Option<&Value> {
        self.as_object().and_then(|record| record.get(name))
    }
}

impl<P: Props + ?Sized> Props for &P {
    fn prop(&self, name: &str) -> Option<&Value> {
        (**self).prop(name)
    }
}

pub fn prop<'a, P: Props + ?Sized>(name: &str, item: &'a P) -> Option<&'a Value> {
    item.prop(name)
}

pub fn keys(record: &Record) -> Vec<String> {
    record.keys().cloned().collect()
}

pub fn values(record: &Record) -> Vec<Value> {
    record.values().cloned().collect()
}

pub fn entries(record: &Record) -> Vec<(String, Value)> {
    record.iter().map(|(key, value)| (key.clone(), value.clone())).collect()
}

pub fn from_entries<K, I>(entries: I) -> Record
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    entries.into_iter().map(|(key, value)| (key.into(), value)).collect()
}

/// Keep only the keys named in `props`, in the record's own key order.
pub fn pick<S: AsRef<str>>(props: &[S], record: &Record) -> Record {
    pick_by(|key| props.iter().any(|name| name.as_ref() == key), record)
}

/// Keep the keys `predicate` accepts. The predicate only sees the key.
pub fn pick_by<P>(predicate: P, record: &Record) -> Record
where
    P: Fn(&str) -> bool,
{
    record
        .iter()
        .filter(|(key, _)| predicate(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Drop the entries `predicate` accepts. Note the argument order: the record
/// comes first and the predicate sees `(value, key)`.
pub fn omit_by<P>(record: &Record, predicate: P) -> Record
where
    P: Fn(&Value, &str) -> bool,
{
    record
        .iter()
        .filter(|(key, value)| !predicate(value, key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// [`pick`] applied to every record.
pub fn project<S: AsRef<str>>(props: &[S], items: &[Record]) -> Vec<Record> {
    map(|record| pick(props, record), items)
}

fn prop_or_null<P: Props>(name: Arc<str>, item: &P) -> Value {
    item.prop(&name).cloned().unwrap_or(Value::Null)
}

/// A mapper reading property `name` off every item; a missing property comes
/// back as `Value::Null`.
pub fn map_to_prop<P: Props>(name: &str) -> impl Fn(&[P]) -> Vec<Value> + use<P> {
    partial1_ref(map::<P, Value, _>, partial1_ref(prop_or_null::<P>, Arc::<str>::from(name)))
}
