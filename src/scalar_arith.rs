//! Arithmetic helpers over scalar values.
//!
//! These mirror the built-in operators and exist for generic code which wants to pass
//! arithmetic around as plain functions.

use core::ops;

use num_traits::PrimInt;

use super::consts::Constants;
use super::scalar_cmp::is_greater;

pub fn add<V: ops::Add<Output = V>>(a: V, b: V) -> V {
    a + b
}

pub fn subtract<V: ops::Sub<Output = V>>(a: V, b: V) -> V {
    a - b
}

pub fn multiply<V: ops::Mul<Output = V>>(a: V, b: V) -> V {
    a * b
}

/// Divide `a` by `b`, truncating towards zero for integers.
pub fn divide<V: ops::Div<Output = V>>(a: V, b: V) -> V {
    a / b
}

pub fn modulo<V: ops::Rem<Output = V>>(a: V, b: V) -> V {
    a % b
}

pub fn negate<V: ops::Neg<Output = V>>(a: V) -> V {
    -a
}

/// `a` if greater than zero, its negation otherwise.
pub fn absolute_value<V: ops::Neg<Output = V> + PartialOrd + Constants + Copy>(a: V) -> V {
    if is_greater(a, V::ZERO) {
        a
    } else {
        -a
    }
}

/// Integer logarithm.
///
/// Returns the number of times `value` can be divided by `base` before dropping below `base`,
/// i.e. `floor(log_base(value))` for `value >= 1`. Evaluates to zero for `value <= 1`.
///
/// The running power of `base` is checked for overflow, so this terminates for any `value` up to
/// the type's maximum.
///
/// # Arguments
///
/// * `base` - The logarithm's base, must be greater than one.
/// * `value` - The logarithm's argument.
///
pub fn logarithm<V: PrimInt + Constants>(base: V, value: V) -> V {
    debug_assert!(base > V::ONE);
    if base <= V::ONE {
        return V::ZERO;
    }

    let mut result = V::ZERO;
    let mut power = base;
    while power <= value {
        result = result + V::ONE;
        power = match power.checked_mul(&base) {
            Some(power) => power,
            None => break,
        };
    }
    result
}

#[test]
fn test_scalar_arith() {
    assert_eq!(add(2u8, 3), 5);
    assert_eq!(subtract(2i32, 3), -1);
    assert_eq!(multiply(6u64, 7), 42);
    assert_eq!(divide(7u16, 2), 3);
    assert_eq!(divide(-7i16, 2), -3);
    assert_eq!(modulo(7u32, 3), 1);
    assert_eq!(negate(5i64), -5);
    assert_eq!(absolute_value(-5i8), 5);
    assert_eq!(absolute_value(5i8), 5);
    assert_eq!(absolute_value(0isize), 0);
}

#[test]
fn test_absolute_value() {
    assert_eq!(absolute_value(1i8), 1);
    assert_eq!(absolute_value(-1i8), 1);
    assert_eq!(absolute_value(i8::MAX), i8::MAX);
    assert_eq!(absolute_value(-i8::MAX), i8::MAX);
    assert_eq!(absolute_value(0i32), 0);
    assert_eq!(absolute_value(-1_000_000i64), 1_000_000);
    assert_eq!(absolute_value(i128::MIN + 1), i128::MAX);
}

#[test]
fn test_logarithm() {
    assert_eq!(logarithm(2u32, 0), 0);
    assert_eq!(logarithm(2u32, 1), 0);
    assert_eq!(logarithm(2u32, 2), 1);
    assert_eq!(logarithm(2u32, 63), 5);
    assert_eq!(logarithm(2u32, 64), 6);
    assert_eq!(logarithm(2u32, 127), 6);
    assert_eq!(logarithm(2u32, 128), 7);
    assert_eq!(logarithm(5u64, 624), 3);
    assert_eq!(logarithm(5u64, 625), 4);
    assert_eq!(logarithm(16usize, 4096), 3);
    assert_eq!(logarithm(10i64, 100000), 5);
}

#[test]
fn test_logarithm_near_max() {
    assert_eq!(logarithm(2u8, 255), 7);
    assert_eq!(logarithm(2u8, 128), 7);
    assert_eq!(logarithm(3u8, 255), 5);
    assert_eq!(logarithm(2u64, u64::MAX), 63);
    assert_eq!(logarithm(10u32, u32::MAX), 9);
}
