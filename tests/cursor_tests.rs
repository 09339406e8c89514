use dynarray::{Cursor, DynArray};

#[test]
fn test_default_cursor_addresses_nothing() {
    let cursor = Cursor::default();

    assert!(cursor.is_end());
    assert_eq!(cursor.get(), None);
    assert_eq!(cursor.index(), 0);
}

#[test]
fn test_detached_cursor_matches_unallocated_arrays() {
    let empty = DynArray::new();

    // A zero-capacity array addresses no storage either
    assert_eq!(Cursor::default(), empty.begin());
    assert_eq!(
        PartialOrd::partial_cmp(&Cursor::default(), &empty.begin()),
        Some(std::cmp::Ordering::Equal)
    );
    assert_eq!(DynArray::new().begin(), empty.begin());

    let allocated = DynArray::from_slice(&[1]);
    assert_ne!(Cursor::default(), allocated.begin());
    assert_eq!(
        PartialOrd::partial_cmp(&Cursor::default(), &allocated.begin()),
        None
    );

    let mut cleared = DynArray::from_slice(&[1, 2]);
    cleared.clear();
    assert_ne!(Cursor::default(), cleared.begin()); // A retained buffer is storage
}

#[test]
fn test_begin_equals_end_when_empty() {
    let array = DynArray::new();

    assert_eq!(array.begin(), array.end());
    assert!(array.begin().is_end());
    assert_eq!(array.begin().get(), None);
    assert_eq!(array.end() - array.begin(), 0);
}

#[test]
fn test_begin_reads_first_element() {
    let array = DynArray::from_slice(&[10, 20, 30]);
    let cursor = array.begin();

    assert_eq!(cursor.index(), 0);
    assert_eq!(cursor.get(), Some(&10));
    assert!(!cursor.is_end());
}

#[test]
fn test_end_is_past_the_last_element() {
    let array = DynArray::from_slice(&[10, 20, 30]);
    let cursor = array.end();

    assert_eq!(cursor.index(), 3);
    assert!(cursor.is_end());
    assert_eq!(cursor.get(), None); // No element at the end position
}

#[test]
fn test_cursor_walks_the_half_open_range() {
    let array = DynArray::from_slice(&[10, 20, 30]);

    let mut cursor = array.begin();
    let mut seen = Vec::new();
    while let Some(value) = cursor.get() {
        seen.push(*value);
        cursor += 1;
    }

    assert_eq!(seen, [10, 20, 30]);
    assert!(cursor.is_end());
    assert_eq!(cursor, array.end());
}

#[test]
fn test_cursor_at_position() {
    let array = DynArray::from_slice(&[1, 2, 3]);

    assert_eq!(array.cursor(2).get(), Some(&3));
    assert!(array.cursor(3).is_end()); // len() is the valid end position
}

#[test]
#[should_panic(expected = "cursor index 4 out of range for array of length 3")]
fn test_cursor_past_end_position_panics() {
    let array = DynArray::from_slice(&[1, 2, 3]);
    let _ = array.cursor(4); // Should panic
}

#[test]
fn test_offset_stays_in_range() {
    let array = DynArray::from_slice(&[10, 20, 30]);
    let cursor = array.begin();

    assert_eq!(cursor.offset(1).unwrap().get(), Some(&20));
    assert!(cursor.offset(3).unwrap().is_end()); // Exactly the end position
    assert!(cursor.offset(4).is_none()); // Past the end
    assert!(cursor.offset(-1).is_none()); // Before the start
}

#[test]
fn test_offset_round_trip() {
    let array = DynArray::from_slice(&[10, 20, 30, 40]);

    let there = array.begin().offset(3).unwrap();
    let back = there.offset(-3).unwrap();

    assert_eq!(back, array.begin());
}

#[test]
fn test_add_and_sub_operators() {
    let array = DynArray::from_slice(&[10, 20, 30, 40]);

    let third = array.begin() + 2;
    assert_eq!(third.get(), Some(&30));

    let second = third - 1;
    assert_eq!(second.get(), Some(&20));

    assert_eq!(array.begin() + 4, array.end());
}

#[test]
#[should_panic(expected = "cursor offset 5 out of range at position 0 in an array of length 4")]
fn test_add_past_end_panics() {
    let array = DynArray::from_slice(&[10, 20, 30, 40]);
    let _ = array.begin() + 5; // Should panic
}

#[test]
#[should_panic(expected = "cursor offset -1 out of range at position 0 in an array of length 3")]
fn test_sub_before_begin_panics() {
    let array = DynArray::from_slice(&[1, 2, 3]);
    let _ = array.begin() - 1; // Should panic
}

#[test]
#[should_panic(expected = "cursor offset overflow")]
fn test_sub_offset_overflow_panics() {
    let array = DynArray::from_slice(&[1, 2, 3]);
    let _ = array.begin() - isize::MIN; // Should panic
}

#[test]
fn test_distance_between_cursors() {
    let array = DynArray::from_slice(&[10, 20, 30, 40]);

    assert_eq!(array.end() - array.begin(), 4);
    assert_eq!(array.begin() - array.end(), -4);

    let middle = array.begin() + 3;
    assert_eq!(middle - (array.begin() + 1), 2);
}

#[test]
#[should_panic(expected = "cannot take the distance between cursors into different arrays")]
fn test_distance_across_arrays_panics() {
    let first = DynArray::from_slice(&[1]);
    let second = DynArray::from_slice(&[2]);
    let _ = first.begin() - second.begin(); // Should panic
}

#[test]
fn test_equality_requires_the_same_array() {
    let array = DynArray::from_slice(&[1, 2, 3]);

    assert_eq!(array.begin(), array.cursor(0));
    assert_ne!(array.begin(), array.begin() + 1);

    let copy = array.clone();
    assert_ne!(array.begin(), copy.begin()); // Same position, different arrays
}

#[test]
fn test_ordering_within_one_array() {
    let array = DynArray::from_slice(&[1, 2, 3]);

    assert!(array.begin() < array.end());
    assert!(array.begin() + 1 > array.begin());
    assert!(array.begin() <= array.cursor(0));
}

#[test]
fn test_cursors_of_different_arrays_are_unordered() {
    let first = DynArray::from_slice(&[1]);
    let second = DynArray::from_slice(&[2]);

    // Named trait path: method syntax would select Iterator::partial_cmp
    assert_eq!(
        PartialOrd::partial_cmp(&first.begin(), &second.begin()),
        None
    );
    assert!(!(first.begin() < second.begin()));
    assert!(!(first.begin() >= second.begin()));
}

#[test]
fn test_cursor_is_copy() {
    let array = DynArray::from_slice(&[1, 2]);

    let first = array.begin();
    let mut second = first; // Copy, not move
    second += 1;

    assert_eq!(first.index(), 0);
    assert_eq!(second.index(), 1);
}

#[test]
fn test_cursor_iterates_front_to_back() {
    let array = DynArray::from_slice(&[1, 2, 3]);

    let collected: Vec<i32> = array.iter().copied().collect();
    assert_eq!(collected, [1, 2, 3]);

    for (position, value) in array.begin().enumerate() {
        assert_eq!(array[position], *value);
    }
}

#[test]
fn test_for_loop_over_borrow() {
    let array = DynArray::from_slice(&[1, 2, 3]);

    let mut total = 0;
    for value in &array {
        total += value;
    }

    assert_eq!(total, 6);
}

#[test]
fn test_for_loop_over_mutable_borrow() {
    let mut array = DynArray::from_slice(&[1, 2, 3]);

    for value in &mut array {
        *value += 1;
    }

    assert_eq!(array.as_slice(), &[2, 3, 4]);
}

#[test]
fn test_iterator_reports_exact_size() {
    let array = DynArray::from_slice(&[1, 2, 3]);
    let mut cursor = array.iter();

    assert_eq!(cursor.size_hint(), (3, Some(3)));
    assert_eq!(cursor.len(), 3);

    cursor.next();
    assert_eq!(cursor.size_hint(), (2, Some(2)));
    assert_eq!(cursor.len(), 2);
}

#[test]
fn test_iterator_stays_exhausted() {
    let array = DynArray::from_slice(&[1]);
    let mut cursor = array.iter();

    assert_eq!(cursor.next(), Some(&1));
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None); // Stays exhausted
    assert!(cursor.is_end());
}

#[test]
fn test_cursor_mut_writes_elements() {
    let mut array = DynArray::from_slice(&[1, 2, 3]);

    let mut cursor = array.cursor_mut(0);
    if let Some(value) = cursor.get_mut() {
        *value = 10;
    }
    cursor += 2;
    if let Some(value) = cursor.get_mut() {
        *value = 30;
    }

    assert_eq!(array.as_slice(), &[10, 2, 30]);
}

#[test]
fn test_cursor_mut_end_holds_no_element() {
    let mut array = DynArray::from_slice(&[1, 2]);
    let mut cursor = array.cursor_mut(2);

    assert!(cursor.is_end());
    assert_eq!(cursor.get(), None);
    assert_eq!(cursor.get_mut(), None);
}

#[test]
fn test_cursor_mut_offset_consumes() {
    let mut array = DynArray::from_slice(&[10, 20, 30]);

    let cursor = array.cursor_mut(0);
    let moved = cursor.offset(2).unwrap();
    assert_eq!(moved.get(), Some(&30));

    assert!(moved.offset(2).is_none()); // Past the end position
}

#[test]
fn test_cursor_mut_as_read_only_cursor() {
    let mut array = DynArray::from_slice(&[5, 6, 7]);
    let cursor = array.cursor_mut(1);

    let read = cursor.as_cursor();
    assert_eq!(read.index(), 1);
    assert_eq!(read.get(), Some(&6));
}

#[test]
#[should_panic(expected = "cursor offset 1 out of range at position 3 in an array of length 3")]
fn test_cursor_mut_move_past_end_panics() {
    let mut array = DynArray::from_slice(&[1, 2, 3]);
    let mut cursor = array.cursor_mut(3);
    cursor += 1; // Should panic
}

#[test]
#[should_panic(expected = "cursor offset overflow")]
fn test_cursor_mut_sub_offset_overflow_panics() {
    let mut array = DynArray::from_slice(&[1, 2, 3]);
    let mut cursor = array.cursor_mut(0);
    cursor -= isize::MIN; // Should panic
}

#[test]
#[should_panic(expected = "cursor index 1 out of range for array of length 0")]
fn test_cursor_mut_past_end_position_panics() {
    let mut array = DynArray::new();
    let _ = array.cursor_mut(1); // Should panic
}

#[test]
fn test_cursor_mut_walks_backward() {
    let mut array = DynArray::from_slice(&[1, 2, 3]);

    let mut cursor = array.cursor_mut(3);
    cursor -= 1;
    assert_eq!(cursor.get(), Some(&3));
    cursor -= 2;
    assert_eq!(cursor.get(), Some(&1));
}
