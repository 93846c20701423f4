use super::*;

const RESERVED: i32 = i32::MIN;

#[test]
fn chunked_default_for_unwritten_index() {
    let v = ChunkedVector::new(RESERVED);
    assert_eq!(v.safe_get(0), RESERVED);
    assert_eq!(v.safe_get(1_000_000), RESERVED);
    assert_eq!(v.size(), 0);
}

#[test]
fn chunked_safe_set_grows_size_and_is_readable() {
    let mut v = ChunkedVector::with_chunk_size(4, RESERVED);
    assert!(v.safe_set(0, 10));
    assert!(!v.safe_set(0, 11)); // no growth, already in range
    assert_eq!(v.safe_get(0), 11);

    // Crosses a chunk boundary.
    assert!(v.safe_set(9, 42));
    assert_eq!(v.size(), 10);
    assert_eq!(v.safe_get(9), 42);
    // Untouched slots within size still read as default.
    assert_eq!(v.safe_get(5), RESERVED);
}

#[test]
fn chunked_get_set_error_out_of_bounds() {
    let mut v = ChunkedVector::with_chunk_size(4, RESERVED);
    assert!(v.get(0).is_err());
    assert!(v.set(0, 1).is_err());
    v.safe_set(0, 7);
    assert_eq!(v.get(0).unwrap(), 7);
    v.set(0, 8).unwrap();
    assert_eq!(v.safe_get(0), 8);
}

#[test]
fn chunked_into_contiguous_preserves_contents() {
    let mut v = ChunkedVector::with_chunk_size(4, RESERVED);
    v.safe_set(0, 1);
    v.safe_set(3, 4);
    v.safe_set(7, 8);
    let size_before = v.size();

    let contiguous = v.into_contiguous(1.5);
    assert_eq!(contiguous.size(), size_before);
    assert_eq!(contiguous.safe_get(0), 1);
    assert_eq!(contiguous.safe_get(3), 4);
    assert_eq!(contiguous.safe_get(7), 8);
    assert_eq!(contiguous.safe_get(1), RESERVED);
}

#[test]
#[should_panic(expected = "power of two")]
fn chunked_rejects_non_power_of_two_chunk_size() {
    ChunkedVector::with_chunk_size(3, RESERVED);
}

#[test]
fn contiguous_rejects_bad_construction_args() {
    assert!(ContiguousVector::with_capacity(0, 1.5, RESERVED).is_err());
    assert!(ContiguousVector::with_capacity(4, 1.0, RESERVED).is_err());
    assert!(ContiguousVector::with_capacity(4, 0.5, RESERVED).is_err());
    assert!(ContiguousVector::with_capacity(4, 1.5, RESERVED).is_ok());
}

#[test]
fn contiguous_safe_set_grows_geometrically() {
    let mut v = ContiguousVector::with_capacity(4, 1.5, RESERVED).unwrap();
    assert!(!v.safe_set(2, 9)); // within initial capacity
    assert_eq!(v.size(), 4);

    assert!(v.safe_set(10, 99));
    assert!(v.size() > 10);
    assert_eq!(v.safe_get(10), 99);
    assert_eq!(v.safe_get(9), RESERVED);
}

#[test]
fn contiguous_get_set_error_out_of_bounds() {
    let mut v = ContiguousVector::with_capacity(2, 1.5, RESERVED).unwrap();
    assert!(v.get(5).is_err());
    assert!(v.set(5, 1).is_err());
    v.set(0, 5).unwrap();
    assert_eq!(v.get(0).unwrap(), 5);
}
