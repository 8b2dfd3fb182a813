use nllr_core::collections::{CollectionError, DynamicArray};

fn filled(n: usize) -> DynamicArray<usize> {
    (0..n).collect()
}

#[test]
fn invariant_size_tracks_net_appends_and_removes() {
    let mut array = DynamicArray::new();
    for i in 0..100 {
        array.append(i);
    }
    for _ in 0..37 {
        array.remove(0).unwrap();
    }
    assert_eq!(array.len(), 63);
    assert_eq!(*array.get(0).unwrap(), 37);
    assert_eq!(*array.get(62).unwrap(), 99);
}

#[test]
fn invariant_capacity_only_doubles_or_halves_and_never_below_eight() {
    let mut array = DynamicArray::new();
    let mut previous = array.capacity();
    assert_eq!(previous, 8);

    let check = |capacity: usize, previous: &mut usize| {
        assert!(capacity >= 8);
        assert!(
            capacity == *previous || capacity == *previous * 2 || capacity * 2 == *previous,
            "capacity jumped from {previous} to {capacity}"
        );
        assert!(capacity.is_power_of_two());
        *previous = capacity;
    };

    for i in 0..200 {
        array.append(i);
        check(array.capacity(), &mut previous);
    }
    while !array.is_empty() {
        array.remove(array.len() - 1).unwrap();
        check(array.capacity(), &mut previous);
    }
    assert_eq!(array.capacity(), 8);
}

#[test]
fn invariant_grows_past_three_quarters() {
    let mut array = filled(6);
    assert_eq!(array.capacity(), 8);
    array.append(6);
    assert_eq!(array.capacity(), 16);
}

#[test]
fn invariant_shrinks_below_one_quarter() {
    let mut array = filled(13);
    assert_eq!(array.capacity(), 32);
    while array.len() > 8 {
        array.remove(0).unwrap();
    }
    assert_eq!(array.capacity(), 32);
    array.remove(0).unwrap();
    assert_eq!(array.capacity(), 16);
}

#[test]
fn invariant_out_of_range_access_is_rejected() {
    let mut array = filled(3);
    assert_eq!(
        array.get(3),
        Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(
        array.remove(7),
        Err(CollectionError::IndexOutOfRange { index: 7, len: 3 })
    );
    // One past the end is not a valid slot to write either.
    assert_eq!(
        array.set(3, 9),
        Err(CollectionError::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(array.len(), 3);
}

#[test]
fn set_replaces_in_place() {
    let mut array = filled(3);
    let generation = array.generation();
    assert_eq!(array.set(1, 42), Ok(1));
    assert_eq!(array.as_slice(), &[0, 42, 2]);
    assert_eq!(array.generation(), generation);
}

#[test]
fn remove_value_takes_first_match_only() {
    let mut array: DynamicArray<&str> = ["a", "b", "a", "c"].into_iter().collect();
    assert_eq!(array.remove_value(&"a"), Some("a"));
    assert_eq!(array.as_slice(), &["b", "a", "c"]);
    assert_eq!(array.remove_value(&"z"), None);
    assert_eq!(array.len(), 3);
    assert_eq!(array.index_of(&"c"), Some(2));
    assert!(array.contains(&"a"));
    assert!(!array.contains(&"z"));
}

#[test]
fn clear_resets_capacity() {
    let mut array = filled(50);
    array.clear();
    assert!(array.is_empty());
    assert_eq!(array.capacity(), 8);
}

#[test]
fn invariant_cursor_fails_fast_on_outside_modification() {
    let mut array = filled(4);
    let mut cursor = array.cursor();
    assert_eq!(cursor.next(&array).unwrap(), Some(&0));

    array.append(4);

    assert!(matches!(
        cursor.has_next(&array),
        Err(CollectionError::ConcurrentModification { .. })
    ));
    assert!(matches!(
        cursor.next(&array),
        Err(CollectionError::ConcurrentModification { .. })
    ));
}

#[test]
fn invariant_cursor_remove_keeps_cursor_valid() {
    let mut array = filled(6);
    let mut cursor = array.cursor();

    while cursor.has_next(&array).unwrap() {
        let value = *cursor.next(&array).unwrap().unwrap();
        if value % 2 == 0 {
            cursor.remove(&mut array).unwrap();
        }
    }

    assert_eq!(array.as_slice(), &[1, 3, 5]);
    assert_eq!(cursor.next(&array).unwrap(), None);
}

#[test]
fn cursor_remove_requires_a_current_element() {
    let mut array = filled(2);
    let mut cursor = array.cursor();
    assert_eq!(cursor.remove(&mut array), Err(CollectionError::NoCurrentElement));

    cursor.next(&array).unwrap();
    cursor.remove(&mut array).unwrap();
    assert_eq!(cursor.remove(&mut array), Err(CollectionError::NoCurrentElement));
    assert_eq!(array.as_slice(), &[1]);
}
