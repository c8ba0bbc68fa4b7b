//! Fixed-width multiprecision unsigned integers.
//!
//! A [`WideInt`] carries its bit width along with a little endian sequence of [`Limb`]s. The
//! arithmetic primitives derive the width of their result from the operand widths alone, such
//! that no overflow can happen for values within their declared widths:
//!
//! - addition and subtraction: one bit more than the wider operand,
//! - multiplication: the sum of both operand widths.
//!
//! Values get constructed from limbs, from digit sequences in radix 8, 10, 16 or 64, or from
//! strings of such digits.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(test)]
mod test_helpers;

mod add_impl;
mod cmp_impl;
pub mod consts;
pub mod digitstr;
mod limb;
mod mul_impl;
pub mod radix;
pub mod scalar_arith;
pub mod scalar_cmp;
mod wide;

pub use limb::{add_l_c, add_l_l_c, find_last_set_bit_l, mul_add_l_l_l_c, sub_l_l_b, Limb};

pub use wide::{nlimbs_for_bits, FromLimbsError, WideInt};

pub use consts::{Constants, SizedConstants};

pub use add_impl::{
    add_mp_l, add_mp_mp, add_trunc_mp_mp, required_bits_add, required_bits_sub, sub_mp_l,
    sub_mp_mp, sub_trunc_mp_mp,
};

pub use cmp_impl::{eq_mp_l, eq_mp_mp};

pub use mul_impl::{mul_mp_l, mul_mp_mp, required_bits_mul};

pub use radix::{
    checked_from_digits, checked_from_digits_in, from_digits, from_digits_in, FromDigitsError,
    Radix, UnsupportedRadixError,
};

pub use digitstr::{from_str_radix, DigitsFromStrError, FromStrRadixError};
