//! Comparison predicates over scalar values.

pub fn is_equal<V: PartialEq>(a: V, b: V) -> bool {
    a == b
}

pub fn is_not_equal<V: PartialEq>(a: V, b: V) -> bool {
    a != b
}

pub fn is_less<V: PartialOrd>(a: V, b: V) -> bool {
    a < b
}

pub fn is_less_or_equal<V: PartialOrd>(a: V, b: V) -> bool {
    a <= b
}

pub fn is_greater<V: PartialOrd>(a: V, b: V) -> bool {
    a > b
}

pub fn is_greater_or_equal<V: PartialOrd>(a: V, b: V) -> bool {
    a >= b
}

#[test]
fn test_scalar_predicates() {
    assert!(is_equal(3u8, 3));
    assert!(!is_equal(3u8, 4));
    assert!(is_not_equal(-1i32, 1));
    assert!(!is_not_equal(7u64, 7));

    assert!(is_less(1u16, 2));
    assert!(!is_less(2u16, 2));
    assert!(is_less_or_equal(2u16, 2));
    assert!(!is_less_or_equal(3u16, 2));

    assert!(is_greater(0i8, -1));
    assert!(!is_greater(-1i8, -1));
    assert!(is_greater_or_equal(-1i8, -1));
    assert!(!is_greater_or_equal(-2i8, -1));
}
