use std::cmp::Ordering;

use elemops::{
    Adapter, Addr, CharAdapter, FloatAdapter, IntAdapter, PointerAdapter, StringAdapter,
};

fn assert_ordered_equal<A: Adapter>(ops: &A, a: &A::Value, b: &A::Value) {
    assert_eq!(ops.compare(Some(a), Some(b)), Ordering::Equal);
    assert_eq!(ops.compare(Some(b), Some(a)), Ordering::Equal);
    assert!(ops.equals(Some(a), Some(b)));
}

fn assert_ordered_less<A: Adapter>(ops: &A, lesser: &A::Value, greater: &A::Value) {
    assert_eq!(ops.compare(Some(lesser), Some(greater)), Ordering::Less);
    assert_eq!(ops.compare(Some(greater), Some(lesser)), Ordering::Greater);
    assert!(!ops.equals(Some(lesser), Some(greater)));
}

fn assert_null_precedes<A: Adapter>(ops: &A, value: &A::Value) {
    assert_eq!(ops.compare(None, Some(value)), Ordering::Less);
    assert_eq!(ops.compare(Some(value), None), Ordering::Greater);
    assert_eq!(ops.compare(None, None), Ordering::Equal);
    assert!(ops.equals(None, None));
    assert!(!ops.equals(None, Some(value)));
}

#[test]
fn test_char_ordering() {
    assert_ordered_equal(&CharAdapter, &'a', &'a');
    assert_ordered_less(&CharAdapter, &'X', &'Y');
    assert_null_precedes(&CharAdapter, &'4');
}

#[test]
fn test_char_limits() {
    assert_ordered_less(&CharAdapter, &'\0', &char::MAX);
}

#[test]
fn test_int_ordering() {
    assert_ordered_equal(&IntAdapter, &40381, &40381);
    assert_ordered_less(&IntAdapter, &30, &90);
    assert_ordered_less(&IntAdapter, &-90, &-30);
    assert_null_precedes(&IntAdapter, &0);
}

#[test]
fn test_int_limits() {
    assert_ordered_less(&IntAdapter, &i32::MIN, &i32::MAX);
    assert_null_precedes(&IntAdapter, &i32::MIN);
}

#[test]
fn test_float_ordering() {
    assert_ordered_equal(&FloatAdapter, &123456789.987654321, &123456789.987654321);
    assert_ordered_less(&FloatAdapter, &-1.0, &1.0);
    assert_ordered_less(&FloatAdapter, &0.0, &f64::EPSILON);
    assert_null_precedes(&FloatAdapter, &f64::EPSILON);
}

#[test]
fn test_float_limits() {
    assert_ordered_less(&FloatAdapter, &-f64::MAX, &f64::MAX);
    assert_ordered_less(&FloatAdapter, &f64::MIN_POSITIVE, &f64::MAX);
    assert_ordered_less(&FloatAdapter, &f64::NEG_INFINITY, &f64::INFINITY);
    assert_null_precedes(&FloatAdapter, &f64::NEG_INFINITY);
}

#[test]
fn test_float_nan_is_unordered_but_total() {
    // NaN neither precedes nor follows, so it reports as equal
    assert_ordered_equal(&FloatAdapter, &f64::NAN, &1.0);
    assert_ordered_equal(&FloatAdapter, &f64::NAN, &f64::NAN);
    assert_ordered_equal(&FloatAdapter, &f64::NAN, &f64::INFINITY);
    // null still precedes a NaN element
    assert_null_precedes(&FloatAdapter, &f64::NAN);
}

#[test]
fn test_string_ordering() {
    assert_ordered_equal(&StringAdapter, &"abcdef".to_string(), &"abcdef".to_string());
    assert_ordered_less(&StringAdapter, &"aaa".to_string(), &"aab".to_string());
    assert_ordered_less(&StringAdapter, &"aaa".to_string(), &"aaaa".to_string());
    // a present "null" string is not the null slot
    assert_null_precedes(&StringAdapter, &"null".to_string());
}

#[test]
fn test_string_limits() {
    assert_ordered_less(&StringAdapter, &String::new(), &"1".to_string());
    assert_null_precedes(&StringAdapter, &String::new());
}

#[test]
fn test_pointer_ordering() {
    assert_ordered_equal(&PointerAdapter, &Addr::new(0x10), &Addr::new(0x10));
    assert_ordered_less(&PointerAdapter, &Addr::new(0x10), &Addr::new(0x20));
    assert_null_precedes(&PointerAdapter, &Addr::new(0));
}

#[test]
fn test_pointer_equality_is_identity() {
    let first = 7;
    let second = 7;
    assert_ordered_equal(&PointerAdapter, &Addr::of(&first), &Addr::of(&first));
    // equal referents at different addresses stay different elements
    assert!(!PointerAdapter.equals(
        Some(&Addr::of(&first)),
        Some(&Addr::of(&second))
    ));
}
