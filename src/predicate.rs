// used for the stringified emptiness check of json values
use serde_json::Value;

use crate::record::Record;

/// Null-ness as the library understands it.
///
/// `Value::Null` is null, a missing `Option` is undefined, and floats can
/// additionally be NaN. Plain values are none of these.
pub trait Nil {
    fn is_null(&self) -> bool {
        false
    }
    fn is_undefined(&self) -> bool {
        false
    }
    fn is_nan(&self) -> bool {
        false
    }
}

impl Nil for Value {
    fn is_null(&self) -> bool {
        Value::is_null(self)
    }
}

impl<T: Nil> Nil for Option<T> {
    fn is_null(&self) -> bool {
        self.as_ref().is_some_and(Nil::is_null)
    }
    fn is_undefined(&self) -> bool {
        match self {
            None => true,
            Some(value) => value.is_undefined(),
        }
    }
    fn is_nan(&self) -> bool {
        self.as_ref().is_some_and(Nil::is_nan)
    }
}

impl<T: Nil + ?Sized> Nil for &T {
    fn is_null(&self) -> bool {
        (**self).is_null()
    }
    fn is_undefined(&self) -> bool {
        (**self).is_undefined()
    }
    fn is_nan(&self) -> bool {
        (**self).is_nan()
    }
}

impl Nil for f64 {
    fn is_nan(&self) -> bool {
        f64::is_nan(*self)
    }
}

impl Nil for f32 {
    fn is_nan(&self) -> bool {
        f32::is_nan(*self)
    }
}

macro_rules! never_nil {
    ($($t:ty),*) => { $(impl Nil for $t {})* };
}
never_nil!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String, Record);

impl<T> Nil for [T] {}
impl<T> Nil for Vec<T> {}

/// True for null and undefined alike.
pub fn is_nil<T: Nil + ?Sized>(value: &T) -> bool {
    value.is_null() || value.is_undefined()
}

/// True only for an explicit null.
pub fn is_null<T: Nil + ?Sized>(value: &T) -> bool {
    value.is_null()
}

/// Emptiness: nothing there, no items, or only whitespace once rendered.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T> Blank for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

// An object renders as "[object Object]", so even an empty record is not
// blank; numbers and booleans never render empty either.
impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_blank(),
            Value::Array(items) => items.is_empty(),
            Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
        }
    }
}

impl Blank for Record {
    fn is_blank(&self) -> bool {
        false
    }
}

pub fn is_empty<T: Blank + ?Sized>(value: &T) -> bool {
    value.is_blank()
}

/// Strict equality: scalars compare by value, arrays and objects only equal
/// themselves (the same reference), never a structurally equal copy.
pub fn equals(value1: &Value, value2: &Value) -> bool {
    match (value1, value2) {
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => std::ptr::eq(value1, value2),
        _ => value1 == value2,
    }
}

/// True when `predicate` maps `first` and every item in `rest` to the same
/// key. An empty `rest` is never equal.
pub fn equal_by<T, K, P>(predicate: P, first: &T, rest: &[T]) -> bool
where
    K: PartialEq,
    P: Fn(&T) -> K,
{
    let key = predicate(first);
    !rest.is_empty() && rest.iter().all(|value| predicate(value) == key)
}

pub use equal_by as eq_by;

/// `value` unless it is nil or NaN, in which case `dfault`.
pub fn default_to<T: Nil>(dfault: T, value: Option<T>) -> T {
    match value {
        Some(value) if !is_nil(&value) && !value.is_nan() => value,
        _ => dfault,
    }
}
