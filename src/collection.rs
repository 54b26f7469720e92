// Slice utilities. Nothing here mutates its input; every transform hands back
// a freshly allocated Vec.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::combinator::partial1_ref;
use crate::error::{FpkitError, Result};

pub fn map<T, U, F>(func: F, items: &[T]) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    items.iter().map(func).collect()
}

pub fn filter<T, P>(predicate: P, items: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    items.iter().filter(|item| predicate(item)).cloned().collect()
}

pub fn find<T, P>(predicate: P, items: &[T]) -> Option<&T>
where
    P: Fn(&T) -> bool,
{
    items.iter().find(|item| predicate(item))
}

pub fn find_index<T, P>(predicate: P, items: &[T]) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    items.iter().position(predicate)
}

/// Call `func` with `(item, index, items)` for every item and hand the very
/// same slice back for chaining.
pub fn for_each<T, F>(mut func: F, items: &[T]) -> &[T]
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, item) in items.iter().enumerate() {
        func(item, index, items);
    }
    items
}

/// Copy of `items` where only the item at `index` went through `func`.
pub fn adjust<T, F>(index: usize, func: F, items: &[T]) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> T,
{
    items
        .iter()
        .enumerate()
        .map(|(i, item)| if i == index { func(item) } else { item.clone() })
        .collect()
}

/// Split `items` into chunks of `size`; the last one may be shorter.
pub fn batch<T: Clone>(size: usize, items: &[T]) -> Result<Vec<Vec<T>>> {
    if size == 0 {
        return Err(FpkitError::InvalidBatchSize(size));
    }
    Ok(items.chunks(size).map(<[T]>::to_vec).collect())
}

/// Stable sort into a new Vec.
pub fn sort<T, C>(mut compare: C, items: &[T]) -> Vec<T>
where
    T: Clone,
    C: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}

/// Drop every item equal to an earlier one, keeping first-seen order.
///
/// An item is kept when the first index holding an equal item is its own. A
/// value unequal to itself, such as a float NaN, never finds its index and is
/// dropped.
pub fn uniq<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    uniq_by(|item: &T, other: &T| item == other, items)
}

/// Keep the item at `i` only when `i` is the first index whose item
/// `predicate(items[i], _)` accepts.
///
/// With a reflexive predicate that means "first of its class wins". A
/// predicate that rejects an item paired with itself drops that item.
pub fn uniq_by<T, P>(predicate: P, items: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T, &T) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| items.iter().position(|other| predicate(item, other)) == Some(*index))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Membership by `PartialEq`. A NaN is never found, not even in a slice
/// holding one.
pub fn includes<T, S>(items: S, value: &T) -> bool
where
    T: PartialEq,
    S: AsRef<[T]>,
{
    items.as_ref().contains(value)
}

pub fn excludes<T, S>(items: S, value: &T) -> bool
where
    T: PartialEq,
    S: AsRef<[T]>,
{
    !includes(items, value)
}

/// A filter keeping the items that also appear in `reference`.
pub fn filter_by_inclusion_in<T>(reference: Vec<T>) -> impl Fn(&[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let reference: Arc<[T]> = reference.into();
    partial1_ref(filter::<T, _>, partial1_ref(includes::<T, Arc<[T]>>, reference))
}

/// A filter keeping the items that do not appear in `reference`.
pub fn filter_by_exclusion_from<T>(reference: Vec<T>) -> impl Fn(&[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let reference: Arc<[T]> = reference.into();
    partial1_ref(filter::<T, _>, partial1_ref(excludes::<T, Arc<[T]>>, reference))
}
