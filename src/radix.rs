//! Construction of fixed-width integers from digit sequences.
//!
//! A digit sequence is a slice of digit values, most significant first. It gets converted by
//! Horner's method: for each digit, the accumulator is multiplied by the radix and the digit
//! added, both with the carry propagated across all limbs in the widened [`Limb::Double`] type.

use core::convert;
use core::fmt;
use core::num::NonZeroUsize;

use super::limb::{add_l_c, mul_add_l_l_l_c, Limb};
use super::wide::WideInt;

/// `log2(10)`, the number of bits per decimal digit.
#[allow(clippy::excessive_precision)]
const LOG2_10: f64 = 3.32192809488736234787;

/// The supported radices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Radix {
    Octal = 8,
    Decimal = 10,
    Hexadecimal = 16,
    Base64 = 64,
}

impl Radix {
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Number of bits reserved for a value of `ndigits` digits.
    ///
    /// This is exact for the power of two radices. For decimal digits it is
    /// `1 + floor(ndigits * log2(10))`, that is, at least one guard bit above what a value of
    /// `ndigits` decimal digits can occupy.
    pub fn required_bits(self, ndigits: usize) -> usize {
        match self {
            Self::Octal => ndigits * 3,
            Self::Decimal => 1 + (ndigits as f64 * LOG2_10) as usize,
            Self::Hexadecimal => ndigits * 4,
            Self::Base64 => ndigits * 6,
        }
    }
}

impl convert::TryFrom<u32> for Radix {
    type Error = UnsupportedRadixError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hexadecimal),
            64 => Ok(Self::Base64),
            _ => Err(UnsupportedRadixError(value)),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct UnsupportedRadixError(pub u32);

impl fmt::Display for UnsupportedRadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported radix {}, expected one of 8, 10, 16 or 64", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnsupportedRadixError {}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FromDigitsError {
    Empty,
    InvalidDigit { index: usize, digit: u8 },
    Overflow,
}

impl fmt::Display for FromDigitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty digit sequence"),
            Self::InvalidDigit { index, digit } => {
                write!(f, "digit {} at index {} is out of range for the radix", digit, index)
            }
            Self::Overflow => f.write_str("value does not fit the bit width"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromDigitsError {}

fn check_digits(radix: Radix, digits: &[u8]) -> Result<(), FromDigitsError> {
    if digits.is_empty() {
        return Err(FromDigitsError::Empty);
    }
    match digits.iter().position(|digit| *digit >= radix.value()) {
        Some(index) => Err(FromDigitsError::InvalidDigit {
            index,
            digit: digits[index],
        }),
        None => Ok(()),
    }
}

/// Horner's method into `result`, which must be zero initially.
///
/// Returns whether any carry got lost past the most significant limb.
fn horner_mp<L: Limb>(result: &mut WideInt<L>, radix: Radix, digits: &[u8]) -> bool {
    let nlimbs = result.limb_count();
    let radix = L::from_digit(radix.value());
    let mut overflow = false;

    for digit in digits {
        let mut carry = L::ZERO;
        for j in 0..nlimbs {
            let mut result_val = result.load_l(j);
            (carry, result_val) = mul_add_l_l_l_c(L::ZERO, result_val, radix, carry);
            result.store_l(j, result_val);
        }
        overflow |= carry != L::ZERO;

        let mut carry = L::from_digit(*digit);
        for j in 0..nlimbs {
            let mut result_val = result.load_l(j);
            (carry, result_val) = add_l_c(result_val, carry);
            result.store_l(j, result_val);
        }
        overflow |= carry != L::ZERO;
    }
    overflow
}

/// Convert a digit sequence into a fixed-width integer of a given width.
///
/// Whatever does not fit the limbs for `bits` gets silently discarded, and bits beyond `bits`
/// in the most significant limb are kept as padding. Use [`checked_from_digits_in()`] to
/// detect either condition.
///
/// # Arguments
///
/// * `bits` - The result's bit width.
/// * `radix` - The radix `digits` are in.
/// * `digits` - The digit values, most significant first, each less than `radix`.
///
pub fn from_digits_in<L: Limb>(
    bits: NonZeroUsize,
    radix: Radix,
    digits: &[u8],
) -> Result<WideInt<L>, FromDigitsError> {
    check_digits(radix, digits)?;
    let mut result = WideInt::new(bits);
    horner_mp(&mut result, radix, digits);
    Ok(result)
}

/// Convert a digit sequence into a fixed-width integer of a given width, rejecting values which
/// don't fit.
///
/// Fails with [`FromDigitsError::Overflow`] if the value needs more than `bits` bits.
pub fn checked_from_digits_in<L: Limb>(
    bits: NonZeroUsize,
    radix: Radix,
    digits: &[u8],
) -> Result<WideInt<L>, FromDigitsError> {
    check_digits(radix, digits)?;
    let mut result = WideInt::new(bits);
    let overflow = horner_mp(&mut result, radix, digits);
    if overflow || result.highest_bit() > result.bits() {
        return Err(FromDigitsError::Overflow);
    }
    Ok(result)
}

/// Convert a digit sequence into a fixed-width integer.
///
/// The result width is derived from the radix and the number of digits alone, see
/// [`Radix::required_bits()`], and is always sufficient to hold the value.
///
/// # Arguments
///
/// * `radix` - The radix `digits` are in.
/// * `digits` - The digit values, most significant first, each less than `radix`.
///
pub fn from_digits<L: Limb>(radix: Radix, digits: &[u8]) -> Result<WideInt<L>, FromDigitsError> {
    let bits = NonZeroUsize::new(radix.required_bits(digits.len())).ok_or(FromDigitsError::Empty)?;
    from_digits_in(bits, radix, digits)
}

/// Like [`from_digits()`], but verifies that no carry got lost.
pub fn checked_from_digits<L: Limb>(
    radix: Radix,
    digits: &[u8],
) -> Result<WideInt<L>, FromDigitsError> {
    let bits = NonZeroUsize::new(radix.required_bits(digits.len())).ok_or(FromDigitsError::Empty)?;
    checked_from_digits_in(bits, radix, digits)
}

#[cfg(test)]
fn tst_decimal_digits(s: &str) -> Vec<u8> {
    s.bytes().map(|c| c - b'0').collect()
}

#[test]
fn test_required_bits() {
    assert_eq!(Radix::Octal.required_bits(2), 6);
    assert_eq!(Radix::Octal.required_bits(3), 9);
    assert_eq!(Radix::Octal.required_bits(8), 24);

    assert_eq!(Radix::Decimal.required_bits(2), 7);
    assert_eq!(Radix::Decimal.required_bits(4), 14);
    assert_eq!(Radix::Decimal.required_bits(9), 30);
    assert_eq!(Radix::Decimal.required_bits(39), 130);
    assert_eq!(Radix::Decimal.required_bits(78), 260);

    assert_eq!(Radix::Hexadecimal.required_bits(2), 8);
    assert_eq!(Radix::Hexadecimal.required_bits(8), 32);
    assert_eq!(Radix::Hexadecimal.required_bits(32), 128);

    assert_eq!(Radix::Base64.required_bits(2), 12);
    assert_eq!(Radix::Base64.required_bits(8), 48);
    assert_eq!(Radix::Base64.required_bits(64), 384);
}

#[test]
fn test_radix_try_from() {
    assert_eq!(Radix::try_from(8), Ok(Radix::Octal));
    assert_eq!(Radix::try_from(10), Ok(Radix::Decimal));
    assert_eq!(Radix::try_from(16), Ok(Radix::Hexadecimal));
    assert_eq!(Radix::try_from(64), Ok(Radix::Base64));
    assert_eq!(Radix::try_from(2), Err(UnsupportedRadixError(2)));
    assert_eq!(Radix::try_from(36), Err(UnsupportedRadixError(36)));
    assert_eq!(Radix::Hexadecimal.value(), 16);
}

#[test]
fn test_from_digits_decimal() {
    let v = from_digits::<u32>(Radix::Decimal, &tst_decimal_digits("1234567890")).unwrap();
    assert_eq!(v.load_l(0), 1234567890);
    assert_eq!(v.load_l(1), 0);

    // 2^128 - 1, with an extra limb for the guard bits.
    let v = from_digits::<u32>(
        Radix::Decimal,
        &tst_decimal_digits("340282366920938463463374607431768211455"),
    )
    .unwrap();
    assert_eq!(v.limbs(), &[!0, !0, !0, !0, 0]);
    assert_eq!(v.bits(), 130);
    assert_eq!(v.limb_count(), 5);
    assert_eq!(v.highest_bit(), 128);

    // 2^256 - 1
    let v = from_digits::<u32>(
        Radix::Decimal,
        &tst_decimal_digits(
            "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        ),
    )
    .unwrap();
    assert_eq!(v.limbs(), &[!0, !0, !0, !0, !0, !0, !0, !0, 0]);
    assert_eq!(v.bits(), 260);
    assert_eq!(v.limb_count(), 9);
    assert_eq!(v.highest_bit(), 256);
}

#[test]
fn test_from_digits_hexadecimal() {
    let v = from_digits::<u32>(Radix::Hexadecimal, &[0xf; 32]).unwrap();
    assert_eq!(v.limbs(), &[!0, !0, !0, !0]);
    assert_eq!(v.bits(), 128);

    let v = from_digits::<u32>(Radix::Hexadecimal, &[0xf, 0xf, 0xa, 0xa, 0xd, 0xf]).unwrap();
    assert_eq!(v.limbs(), &[0x00ffaadf]);

    let v = from_digits::<u8>(Radix::Hexadecimal, &[0xf, 0xf, 0xa, 0xa, 0xd, 0xf]).unwrap();
    assert_eq!(v.limbs(), &[0xdf, 0xaa, 0xff]);
}

#[test]
fn test_from_digits_octal_and_base64() {
    let v = from_digits::<u8>(Radix::Octal, &[7, 7, 7]).unwrap();
    assert_eq!(v.bits(), 9);
    assert_eq!(v.limbs(), &[255, 1]);

    let v = from_digits::<u16>(Radix::Octal, &[1, 0, 0, 0, 0, 0]).unwrap();
    assert_eq!(v.limbs(), &[0o100000, 0]);

    let v = from_digits::<u8>(Radix::Base64, &[1, 0]).unwrap();
    assert_eq!(v.bits(), 12);
    assert_eq!(v.limbs(), &[64, 0]);

    let v = from_digits::<u8>(Radix::Base64, &[63, 63]).unwrap();
    assert_eq!(v.limbs(), &[0xff, 0x0f]);
}

#[test]
fn test_from_digits_leading_zeros() {
    let v = from_digits::<u8>(Radix::Decimal, &[0, 0, 0, 2, 5, 5]).unwrap();
    assert_eq!(v.bits(), 20);
    assert!(v == 255u8);

    let v = from_digits::<u64>(Radix::Decimal, &[0]).unwrap();
    assert_eq!(v.bits(), 4);
    assert!(v.is_zero());
}

#[test]
fn test_from_digits_invalid() {
    assert_eq!(
        from_digits::<u32>(Radix::Decimal, &[]).unwrap_err(),
        FromDigitsError::Empty
    );
    assert_eq!(
        from_digits::<u32>(Radix::Hexadecimal, &[]).unwrap_err(),
        FromDigitsError::Empty
    );
    assert_eq!(
        from_digits::<u32>(Radix::Decimal, &[1, 2, 10]).unwrap_err(),
        FromDigitsError::InvalidDigit { index: 2, digit: 10 }
    );
    assert_eq!(
        from_digits::<u8>(Radix::Octal, &[8]).unwrap_err(),
        FromDigitsError::InvalidDigit { index: 0, digit: 8 }
    );
}

#[test]
fn test_from_digits_in() {
    let bits = NonZeroUsize::new(256).unwrap();
    let v = from_digits_in::<u64>(bits, Radix::Decimal, &tst_decimal_digits("18446744073709551616"))
        .unwrap();
    assert_eq!(v.bits(), 256);
    assert_eq!(v.limbs(), &[0, 1, 0, 0]);

    // Anything above the limbs gets dropped silently.
    let bits = NonZeroUsize::new(8).unwrap();
    let v = from_digits_in::<u8>(bits, Radix::Decimal, &tst_decimal_digits("258")).unwrap();
    assert_eq!(v.limbs(), &[2]);
    assert_eq!(
        checked_from_digits_in::<u8>(bits, Radix::Decimal, &tst_decimal_digits("258")).unwrap_err(),
        FromDigitsError::Overflow
    );

    // Fits the limb, but not the declared width.
    let bits = NonZeroUsize::new(4).unwrap();
    let v = from_digits_in::<u8>(bits, Radix::Hexadecimal, &[1, 0]).unwrap();
    assert_eq!(v.limbs(), &[0x10]);
    assert_eq!(
        checked_from_digits_in::<u8>(bits, Radix::Hexadecimal, &[1, 0]).unwrap_err(),
        FromDigitsError::Overflow
    );
    let v = checked_from_digits_in::<u8>(bits, Radix::Hexadecimal, &[0, 0xf]).unwrap();
    assert_eq!(v.limbs(), &[0xf]);
}

#[cfg(test)]
fn test_checked_from_digits_random<L: Limb>() {
    use super::test_helpers::{tst_rng, tst_to_biguint};
    use num_bigint::BigUint;
    use rand::Rng as _;

    let mut rng = tst_rng();
    for radix in [Radix::Octal, Radix::Decimal, Radix::Hexadecimal, Radix::Base64] {
        for _ in 0..50 {
            let ndigits = rng.gen_range(1..=100usize);
            let digits: Vec<u8> = (0..ndigits).map(|_| rng.gen_range(0..radix.value())).collect();

            let v = checked_from_digits::<L>(radix, &digits).unwrap();
            assert_eq!(v.bits(), radix.required_bits(ndigits));
            assert!(v == from_digits::<L>(radix, &digits).unwrap());
            let expected = BigUint::from_radix_be(&digits, radix.value() as u32).unwrap();
            assert_eq!(tst_to_biguint(&v), expected);
            assert!(v.highest_bit() <= v.bits());
        }
    }
}

#[test]
fn test_checked_from_digits_random_u8() {
    test_checked_from_digits_random::<u8>()
}

#[test]
fn test_checked_from_digits_random_u16() {
    test_checked_from_digits_random::<u16>()
}

#[test]
fn test_checked_from_digits_random_u32() {
    test_checked_from_digits_random::<u32>()
}

#[test]
fn test_checked_from_digits_random_u64() {
    test_checked_from_digits_random::<u64>()
}
