use std::cell::RefCell;

use fpkit::FpkitError;
use fpkit::collection::{
    adjust, batch, excludes, filter, filter_by_exclusion_from, filter_by_inclusion_in, find, find_index, for_each,
    includes, map, sort, uniq, uniq_by,
};
use serde_json::{Value, json};

#[test]
fn map_and_filter_return_new_vectors() {
    let items = [1, 2, 3, 4, 5];
    assert_eq!(map(|n| n * 2, &items), vec![2, 4, 6, 8, 10]);
    assert_eq!(filter(|n| n % 2 == 0, &items), vec![2, 4]);
    assert_eq!(items, [1, 2, 3, 4, 5], "input untouched");
}

#[test]
fn find_and_find_index() {
    let items = [1, 3, 23, 14, 52, 33, 28];
    assert_eq!(find(|n| n % 2 == 0, &items), Some(&14));
    assert_eq!(find_index(|n| n % 2 == 0, &items), Some(3));
    assert_eq!(find(|n| *n > 100, &items), None);
    assert_eq!(find_index(|n| *n > 100, &items), None);
}

#[test]
fn for_each_visits_in_order_and_hands_back_the_input() {
    let items = [1, 2, 3];
    let calls = RefCell::new(Vec::new());
    let returned = for_each(|item, index, all| calls.borrow_mut().push((*item, index, all.len())), &items);
    assert!(std::ptr::eq(returned, &items[..]));
    assert_eq!(calls.into_inner(), vec![(1, 0, 3), (2, 1, 3), (3, 2, 3)]);
}

#[test]
fn adjust_touches_only_the_index() {
    let items = [json!(1), json!(2), json!(3)];
    let adjusted = adjust(1, |_| json!("foo"), &items);
    assert_eq!(adjusted, vec![json!(1), json!("foo"), json!(3)]);
    assert_eq!(adjust(7, |_| json!("foo"), &items), items.to_vec(), "out of range is a copy");
}

#[test]
fn batch_chunks_with_a_short_tail() {
    let items = [1, 2, 3, 4, 5];
    assert_eq!(batch(2, &items).unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    assert_eq!(batch(5, &items).unwrap(), vec![vec![1, 2, 3, 4, 5]]);
    assert!(batch(3, &[] as &[i32]).unwrap().is_empty());
}

#[test]
fn batch_concatenates_back_to_the_input() {
    let items: Vec<u32> = (0..23).collect();
    for size in 1..=25 {
        let chunks = batch(size, &items).unwrap();
        assert_eq!(chunks.concat(), items, "size {size}");
        let (last, full) = chunks.split_last().unwrap();
        assert!(full.iter().all(|chunk| chunk.len() == size));
        assert!(!last.is_empty() && last.len() <= size);
    }
}

#[test]
fn batch_rejects_zero() {
    assert_eq!(batch(0, &[1, 2]), Err(FpkitError::InvalidBatchSize(0)));
}

#[test]
fn sort_returns_a_sorted_copy() {
    let items = vec![json!({"name": "xaa"}), json!({"name": "cba"}), json!({"name": "abc"}), json!({"name": "efs"})];
    let name = |item: &Value| item["name"].as_str().unwrap_or_default().to_string();
    let sorted = sort(|a, b| name(a).cmp(&name(b)), &items);
    assert_eq!(
        sorted,
        vec![json!({"name": "abc"}), json!({"name": "cba"}), json!({"name": "efs"}), json!({"name": "xaa"})]
    );
    assert_eq!(items[0], json!({"name": "xaa"}), "input untouched");
}

#[test]
fn sort_is_stable() {
    let items = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
    let sorted = sort(|a, b| a.0.cmp(&b.0), &items);
    assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
}

#[test]
fn uniq_keeps_first_seen_order() {
    assert_eq!(uniq(&['a', 'b', 'a', 'c', 'b']), vec!['a', 'b', 'c']);
    let mixed = [json!({"foo": "bar"}), json!(123), json!(true), json!("biz"), json!(123), json!({"foo": "bar"}), json!("biz")];
    assert_eq!(uniq(&mixed), vec![json!({"foo": "bar"}), json!(123), json!(true), json!("biz")]);
}

#[test]
fn uniq_drops_values_unequal_to_themselves() {
    let floats = [f64::NAN, 1.0, f64::NAN, 1.0, 2.0];
    assert_eq!(uniq(&floats), vec![1.0, 2.0]);
    assert!(!includes(&[f64::NAN], &f64::NAN));
}

#[test]
fn uniq_by_first_of_each_class_wins() {
    let items = [json!({"name": "foo", "n": 1}), json!({"name": "bar", "n": 2}), json!({"name": "foo", "n": 3})];
    let same_name = |a: &Value, b: &Value| a["name"] == b["name"];
    assert_eq!(uniq_by(same_name, &items), vec![items[0].clone(), items[1].clone()]);
}

#[test]
fn uniq_by_drops_items_a_predicate_never_pairs_with_themselves() {
    // a strict ordering never matches an item against itself
    let items = [3, 1, 2];
    assert!(uniq_by(|a: &i32, b: &i32| a < b, &items).is_empty());
    // 2 pairs with 3 before it reaches itself
    assert_eq!(uniq_by(|a: &i32, b: &i32| a <= b, &[1, 3, 2]), vec![1, 3]);
}

#[test]
fn membership() {
    let items = [1, 2, 3];
    assert!(includes(&items, &2));
    assert!(!includes(&items, &5));
    assert!(excludes(&items, &5));
    assert!(!excludes(&items, &2));
    assert!(includes(vec![1, 2, 3], &3));
    assert!(excludes(std::sync::Arc::<[i32]>::from(vec![1]), &3));
}

#[test]
fn filters_by_reference_membership() {
    let keep = filter_by_inclusion_in(vec![3, 7, 8]);
    let drop = filter_by_exclusion_from(vec![3, 7, 8]);
    let input = [1, 2, 7, 3, 9];
    assert_eq!(keep(&input), vec![7, 3]);
    assert_eq!(drop(&input), vec![1, 2, 9]);
    let owned = vec![8, 8, 1];
    assert_eq!(keep(&owned), vec![8, 8], "duplicates in the input survive");
}
