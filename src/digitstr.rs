//! Conversion of character strings into digit sequences.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use super::limb::Limb;
use super::radix::{from_digits, FromDigitsError, Radix};
use super::wide::WideInt;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum DigitsFromStrError {
    Empty,
    /// `index` is the byte offset of `c` in the input string.
    InvalidChar { index: usize, c: char },
}

impl fmt::Display for DigitsFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("no digits in string"),
            Self::InvalidChar { index, c } => {
                write!(f, "invalid digit character {:?} at offset {}", c, index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitsFromStrError {}

/// Value of a single digit character, if valid for `radix`.
///
/// Base 64 digits are from the standard RFC 4648 alphabet, `A-Z`, `a-z`, `0-9`, `+`, `/` in
/// ascending order of value.
pub fn digit_from_char(radix: Radix, c: char) -> Option<u8> {
    let c = u8::try_from(c).ok()?;
    match radix {
        Radix::Octal => match c {
            b'0'..=b'7' => Some(c - b'0'),
            _ => None,
        },
        Radix::Decimal => match c {
            b'0'..=b'9' => Some(c - b'0'),
            _ => None,
        },
        Radix::Hexadecimal => match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 0xa),
            b'A'..=b'F' => Some(c - b'A' + 0xa),
            _ => None,
        },
        Radix::Base64 => match c {
            b'A'..=b'Z' => Some(c - b'A'),
            b'a'..=b'z' => Some(c - b'a' + 26),
            b'0'..=b'9' => Some(c - b'0' + 52),
            b'+' => Some(62),
            b'/' => Some(63),
            _ => None,
        },
    }
}

/// Convert a string into a digit sequence, most significant digit first.
///
/// Hexadecimal strings may carry a `0x` or `0X` prefix.
pub fn digits_from_str(radix: Radix, s: &str) -> Result<Vec<u8>, DigitsFromStrError> {
    let (offset, digits_str) = match radix {
        Radix::Hexadecimal => match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(rest) => (2, rest),
            None => (0, s),
        },
        _ => (0, s),
    };
    if digits_str.is_empty() {
        return Err(DigitsFromStrError::Empty);
    }

    let mut digits = Vec::with_capacity(digits_str.len());
    for (i, c) in digits_str.char_indices() {
        match digit_from_char(radix, c) {
            Some(digit) => digits.push(digit),
            None => {
                return Err(DigitsFromStrError::InvalidChar {
                    index: offset + i,
                    c,
                })
            }
        }
    }
    Ok(digits)
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FromStrRadixError {
    Digits(DigitsFromStrError),
    Value(FromDigitsError),
}

impl From<DigitsFromStrError> for FromStrRadixError {
    fn from(value: DigitsFromStrError) -> Self {
        Self::Digits(value)
    }
}

impl From<FromDigitsError> for FromStrRadixError {
    fn from(value: FromDigitsError) -> Self {
        Self::Value(value)
    }
}

impl fmt::Display for FromStrRadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digits(e) => fmt::Display::fmt(e, f),
            Self::Value(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromStrRadixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Digits(e) => Some(e),
            Self::Value(e) => Some(e),
        }
    }
}

/// Parse a string into a fixed-width integer.
///
/// The width is derived from the number of digits, see [`Radix::required_bits()`]. For
/// hexadecimal strings, a `0x` prefix doesn't count towards it.
///
/// # Arguments
///
/// * `radix` - The radix `s` is in.
/// * `s` - The digit string, most significant digit first.
///
/// # Examples
///
/// ```
/// use fwint::{from_str_radix, Radix};
///
/// let v = from_str_radix::<u32>(Radix::Hexadecimal, "0xFFAADF").unwrap();
/// assert_eq!(v.bits(), 24);
/// assert_eq!(v.limbs(), &[0x00ffaadf]);
/// ```
pub fn from_str_radix<L: Limb>(radix: Radix, s: &str) -> Result<WideInt<L>, FromStrRadixError> {
    let digits = digits_from_str(radix, s)?;
    Ok(from_digits(radix, &digits)?)
}

#[test]
fn test_digit_from_char() {
    assert_eq!(digit_from_char(Radix::Octal, '7'), Some(7));
    assert_eq!(digit_from_char(Radix::Octal, '8'), None);
    assert_eq!(digit_from_char(Radix::Decimal, '9'), Some(9));
    assert_eq!(digit_from_char(Radix::Decimal, 'a'), None);
    assert_eq!(digit_from_char(Radix::Hexadecimal, 'a'), Some(0xa));
    assert_eq!(digit_from_char(Radix::Hexadecimal, 'F'), Some(0xf));
    assert_eq!(digit_from_char(Radix::Hexadecimal, 'g'), None);
    assert_eq!(digit_from_char(Radix::Base64, 'A'), Some(0));
    assert_eq!(digit_from_char(Radix::Base64, 'z'), Some(51));
    assert_eq!(digit_from_char(Radix::Base64, '0'), Some(52));
    assert_eq!(digit_from_char(Radix::Base64, '/'), Some(63));
    assert_eq!(digit_from_char(Radix::Base64, '='), None);
    assert_eq!(digit_from_char(Radix::Decimal, 'ä'), None);
}

#[test]
fn test_digits_from_str() {
    assert_eq!(digits_from_str(Radix::Decimal, "0129").unwrap(), [0, 1, 2, 9]);
    assert_eq!(digits_from_str(Radix::Octal, "0755").unwrap(), [0, 7, 5, 5]);
    assert_eq!(digits_from_str(Radix::Hexadecimal, "0x1aF").unwrap(), [1, 0xa, 0xf]);
    assert_eq!(digits_from_str(Radix::Hexadecimal, "0X1aF").unwrap(), [1, 0xa, 0xf]);
    assert_eq!(digits_from_str(Radix::Hexadecimal, "1aF").unwrap(), [1, 0xa, 0xf]);
    assert_eq!(digits_from_str(Radix::Base64, "Ba+/").unwrap(), [1, 26, 62, 63]);

    assert_eq!(digits_from_str(Radix::Decimal, ""), Err(DigitsFromStrError::Empty));
    assert_eq!(digits_from_str(Radix::Hexadecimal, "0x"), Err(DigitsFromStrError::Empty));
    assert_eq!(
        digits_from_str(Radix::Decimal, "12x4"),
        Err(DigitsFromStrError::InvalidChar { index: 2, c: 'x' })
    );
    assert_eq!(
        digits_from_str(Radix::Hexadecimal, "0x12g4"),
        Err(DigitsFromStrError::InvalidChar { index: 4, c: 'g' })
    );
    // The prefix is only recognized for hexadecimal.
    assert_eq!(
        digits_from_str(Radix::Decimal, "0x12"),
        Err(DigitsFromStrError::InvalidChar { index: 1, c: 'x' })
    );
}

#[test]
fn test_from_str_radix() {
    let v = from_str_radix::<u32>(Radix::Hexadecimal, "0xFFAADF").unwrap();
    assert_eq!(v.limbs(), &[0x00ffaadf]);

    let v = from_str_radix::<u32>(Radix::Hexadecimal, "0x1234567890ABCDEF1234567890abcdef")
        .unwrap();
    assert_eq!(v.bits(), 128);
    assert_eq!(v.limbs(), &[0x90abcdef, 0x12345678, 0x90abcdef, 0x12345678]);

    let v = from_str_radix::<u32>(Radix::Decimal, "1234567890").unwrap();
    assert_eq!(v.bits(), 34);
    assert_eq!(v.limbs(), &[1234567890, 0]);

    let v = from_str_radix::<u64>(Radix::Decimal, "18446744073709551616").unwrap();
    assert_eq!(v.limbs(), &[0, 1]);

    // Same value in every radix.
    let v8 = from_str_radix::<u8>(Radix::Octal, "377").unwrap();
    let v10 = from_str_radix::<u8>(Radix::Decimal, "255").unwrap();
    let v16 = from_str_radix::<u8>(Radix::Hexadecimal, "ff").unwrap();
    let v64 = from_str_radix::<u8>(Radix::Base64, "D/").unwrap();
    assert!(v8 == 255u8);
    assert!(v8 == v10);
    assert!(v10 == v16);
    assert!(v16 == v64);

    assert_eq!(
        from_str_radix::<u32>(Radix::Decimal, "").unwrap_err(),
        FromStrRadixError::Digits(DigitsFromStrError::Empty)
    );
    assert_eq!(
        from_str_radix::<u32>(Radix::Octal, "18").unwrap_err(),
        FromStrRadixError::Digits(DigitsFromStrError::InvalidChar { index: 1, c: '8' })
    );
}

#[test]
fn test_from_str_radix_error_display() {
    let e = from_str_radix::<u32>(Radix::Decimal, "1z").unwrap_err();
    assert_eq!(e.to_string(), "invalid digit character 'z' at offset 1");
    assert_eq!(
        FromStrRadixError::from(FromDigitsError::Overflow).to_string(),
        "value does not fit the bit width"
    );
}

#[cfg(feature = "std")]
#[test]
fn test_from_str_radix_error_source() {
    use std::error::Error as _;

    let e = from_str_radix::<u32>(Radix::Decimal, "1z").unwrap_err();
    assert_eq!(e.source().unwrap().to_string(), e.to_string());

    let e: Box<dyn std::error::Error> = Box::new(FromDigitsError::Overflow);
    assert!(e.source().is_none());
}
