//! Implementation of fixed-width integer addition related primitives.
//!
//! All variants walk the result's limbs from least to most significant, reading operand limbs
//! past their most significant one as zero, and drop whatever carry or borrow leaves the result's
//! most significant limb. The result widths differ:
//!
//! | Operation | Result width |
//! |---|---|
//! | [`add_mp_mp`], [`sub_mp_mp`] | `max(op0.bits(), op1.bits()) + 1` |
//! | [`add_trunc_mp_mp`], [`sub_trunc_mp_mp`] | `max(op0.bits(), op1.bits())` |
//!
//! Whenever the extra bit of the widening variants makes for an extra limb, the last carry ends
//! up in that limb, and for subtraction the last borrow turns that limb into all ones.

use core::num::NonZeroUsize;
use core::ops;

use super::limb::{add_l_l_c, sub_l_l_b, Limb};
use super::wide::WideInt;

/// Result width of [`add_mp_mp()`].
pub fn required_bits_add(op0_bits: NonZeroUsize, op1_bits: NonZeroUsize) -> NonZeroUsize {
    op0_bits.max(op1_bits).saturating_add(1)
}

/// Result width of [`sub_mp_mp()`].
pub fn required_bits_sub(op0_bits: NonZeroUsize, op1_bits: NonZeroUsize) -> NonZeroUsize {
    op0_bits.max(op1_bits).saturating_add(1)
}

fn add_mp_mp_into<L: Limb>(result: &mut WideInt<L>, op0: &WideInt<L>, op1: &WideInt<L>) {
    let mut carry = L::ZERO;
    for i in 0..result.limb_count() {
        let result_val;
        (carry, result_val) = add_l_l_c(op0.load_l(i), op1.load_l(i), carry);
        result.store_l(i, result_val);
    }
}

fn sub_mp_mp_into<L: Limb>(result: &mut WideInt<L>, op0: &WideInt<L>, op1: &WideInt<L>) {
    let mut borrow = L::ZERO;
    for i in 0..result.limb_count() {
        let result_val;
        (borrow, result_val) = sub_l_l_b(op0.load_l(i), op1.load_l(i), borrow);
        result.store_l(i, result_val);
    }
}

/// Add two fixed-width integers.
///
/// The result is one bit wider than the wider operand and can always accommodate the sum of
/// two operands whose padding bits are clear.
///
/// # Arguments
///
/// * `op0` - The first addend.
/// * `op1` - The second addend.
///
pub fn add_mp_mp<L: Limb>(op0: &WideInt<L>, op1: &WideInt<L>) -> WideInt<L> {
    let mut result = WideInt::new(required_bits_add(op0.bit_width(), op1.bit_width()));
    add_mp_mp_into(&mut result, op0, op1);
    result
}

/// Add two fixed-width integers, wrapping around.
///
/// The result is as wide as the wider operand, the final carry gets discarded.
pub fn add_trunc_mp_mp<L: Limb>(op0: &WideInt<L>, op1: &WideInt<L>) -> WideInt<L> {
    let mut result = WideInt::new(op0.bit_width().max(op1.bit_width()));
    add_mp_mp_into(&mut result, op0, op1);
    result
}

/// Subtract two fixed-width integers.
///
/// The result is one bit wider than the wider operand. If `op1 > op0`, the difference is the
/// two's complement representation confined to the result's limbs, that is, if the extra bit
/// made for an extra limb, that limb is all ones and serves as a borrow indicator rather than
/// as a digit.
///
/// # Arguments
///
/// * `op0` - The minuend.
/// * `op1` - The subtrahend.
///
pub fn sub_mp_mp<L: Limb>(op0: &WideInt<L>, op1: &WideInt<L>) -> WideInt<L> {
    let mut result = WideInt::new(required_bits_sub(op0.bit_width(), op1.bit_width()));
    sub_mp_mp_into(&mut result, op0, op1);
    result
}

/// Subtract two fixed-width integers, wrapping around.
///
/// The result is as wide as the wider operand, the final borrow gets discarded.
pub fn sub_trunc_mp_mp<L: Limb>(op0: &WideInt<L>, op1: &WideInt<L>) -> WideInt<L> {
    let mut result = WideInt::new(op0.bit_width().max(op1.bit_width()));
    sub_mp_mp_into(&mut result, op0, op1);
    result
}

// Add a limb to a fixed-width integer.
pub fn add_mp_l<L: Limb>(op0: &WideInt<L>, op1: L) -> WideInt<L> {
    add_mp_mp(op0, &WideInt::from_limb(op1))
}

// Subtract a limb from a fixed-width integer.
pub fn sub_mp_l<L: Limb>(op0: &WideInt<L>, op1: L) -> WideInt<L> {
    sub_mp_mp(op0, &WideInt::from_limb(op1))
}

impl<L: Limb> ops::Add<&WideInt<L>> for &WideInt<L> {
    type Output = WideInt<L>;

    fn add(self, rhs: &WideInt<L>) -> Self::Output {
        add_mp_mp(self, rhs)
    }
}

impl<L: Limb> ops::Add for WideInt<L> {
    type Output = WideInt<L>;

    fn add(self, rhs: WideInt<L>) -> Self::Output {
        add_mp_mp(&self, &rhs)
    }
}

impl<L: Limb> ops::Add<L> for &WideInt<L> {
    type Output = WideInt<L>;

    fn add(self, rhs: L) -> Self::Output {
        add_mp_l(self, rhs)
    }
}

impl<L: Limb> ops::Add<L> for WideInt<L> {
    type Output = WideInt<L>;

    fn add(self, rhs: L) -> Self::Output {
        add_mp_l(&self, rhs)
    }
}

impl<L: Limb> ops::Sub<&WideInt<L>> for &WideInt<L> {
    type Output = WideInt<L>;

    fn sub(self, rhs: &WideInt<L>) -> Self::Output {
        sub_mp_mp(self, rhs)
    }
}

impl<L: Limb> ops::Sub for WideInt<L> {
    type Output = WideInt<L>;

    fn sub(self, rhs: WideInt<L>) -> Self::Output {
        sub_mp_mp(&self, &rhs)
    }
}

impl<L: Limb> ops::Sub<L> for &WideInt<L> {
    type Output = WideInt<L>;

    fn sub(self, rhs: L) -> Self::Output {
        sub_mp_l(self, rhs)
    }
}

impl<L: Limb> ops::Sub<L> for WideInt<L> {
    type Output = WideInt<L>;

    fn sub(self, rhs: L) -> Self::Output {
        sub_mp_l(&self, rhs)
    }
}

#[test]
fn test_add_mp_mp_u8() {
    let sum = add_mp_mp(&tst_mk_wide!(u8, 8, [1]), &tst_mk_wide!(u8, 8, [1]));
    assert_eq!(sum.bits(), 9);
    assert_eq!(sum.limb_count(), 2);
    assert_eq!(sum.limbs(), &[2, 0]);

    let sum = add_mp_mp(&tst_mk_wide!(u8, 8, [128]), &tst_mk_wide!(u8, 8, [128]));
    assert_eq!(sum.limb_count(), 2);
    assert_eq!(sum.limbs(), &[0, 1]);

    let sum = add_mp_mp(&tst_mk_wide!(u8, 8, [1]), &tst_mk_wide!(u8, 16, [1]));
    assert_eq!(sum.bits(), 17);
    assert_eq!(sum.limbs(), &[2, 0, 0]);

    let sum = add_mp_mp(&tst_mk_wide!(u8, 8, [255]), &tst_mk_wide!(u8, 16, [0, 255]));
    assert_eq!(sum.limbs(), &[255, 255, 0]);
    assert_eq!(sum.highest_bit(), 16);

    // The carry ripples through all limbs into the extra one.
    let sum = add_mp_mp(&tst_mk_wide!(u8, 8, [1]), &tst_mk_wide!(u8, 24, [255, 255, 255]));
    assert_eq!(sum.limbs(), &[0, 0, 0, 1]);
    assert_eq!(sum.highest_bit(), 25);

    // Here the extra bit fits the existing limb.
    let sum = add_mp_mp(&tst_mk_wide!(u8, 7, [127]), &tst_mk_wide!(u8, 7, [127]));
    assert_eq!(sum.bits(), 8);
    assert_eq!(sum.limbs(), &[254]);
}

#[test]
fn test_add_mp_mp_u32() {
    let sum = add_mp_mp(
        &tst_mk_wide!(u32, 64, [!0, !0]),
        &tst_mk_wide!(u32, 64, [!0, !0]),
    );
    assert_eq!(sum.bits(), 65);
    assert_eq!(sum.limbs(), &[!1, !0, 1]);
}

#[test]
fn test_add_trunc_mp_mp() {
    let sum = add_trunc_mp_mp(&tst_mk_wide!(u8, 8, [128]), &tst_mk_wide!(u8, 8, [128]));
    assert_eq!(sum.bits(), 8);
    assert_eq!(sum.limbs(), &[0]);

    let sum = add_trunc_mp_mp(&tst_mk_wide!(u8, 8, [255]), &tst_mk_wide!(u8, 16, [1, 1]));
    assert_eq!(sum.bits(), 16);
    assert_eq!(sum.limbs(), &[0, 2]);

    let sum = add_trunc_mp_mp(&tst_mk_wide!(u16, 32, [!0, !0]), &tst_mk_wide!(u16, 16, [2]));
    assert_eq!(sum.limbs(), &[1, 0]);
}

#[test]
fn test_sub_mp_mp() {
    let diff = sub_mp_mp(&tst_mk_wide!(u8, 8, [5]), &tst_mk_wide!(u8, 8, [3]));
    assert_eq!(diff.bits(), 9);
    assert_eq!(diff.limbs(), &[2, 0]);

    // A borrow leaves an all ones indicator limb.
    let diff = sub_mp_mp(&tst_mk_wide!(u8, 8, [3]), &tst_mk_wide!(u8, 8, [5]));
    assert_eq!(diff.limbs(), &[254, 255]);

    let diff = sub_mp_mp(&tst_mk_wide!(u8, 16, [0, 1]), &tst_mk_wide!(u8, 8, [1]));
    assert_eq!(diff.bits(), 17);
    assert_eq!(diff.limbs(), &[255, 0, 0]);

    let diff = sub_mp_mp(&tst_mk_wide!(u8, 8, [0]), &tst_mk_wide!(u8, 16, [0, 1]));
    assert_eq!(diff.limbs(), &[0, 255, 255]);

    let diff = sub_mp_mp(&tst_mk_wide!(u32, 32, [7]), &tst_mk_wide!(u32, 32, [7]));
    assert_eq!(diff.limbs(), &[0, 0]);
    assert!(diff.is_zero());
}

#[test]
fn test_sub_trunc_mp_mp() {
    let diff = sub_trunc_mp_mp(&tst_mk_wide!(u8, 8, [3]), &tst_mk_wide!(u8, 8, [5]));
    assert_eq!(diff.bits(), 8);
    assert_eq!(diff.limbs(), &[254]);

    let diff = sub_trunc_mp_mp(&tst_mk_wide!(u16, 32, [0, 1]), &tst_mk_wide!(u16, 16, [1]));
    assert_eq!(diff.limbs(), &[!0, 0]);

    let diff = sub_trunc_mp_mp(&tst_mk_wide!(u64, 128, [0, 0]), &tst_mk_wide!(u64, 64, [1]));
    assert_eq!(diff.limbs(), &[!0, !0]);
}

#[test]
fn test_add_sub_mp_l() {
    let op0 = tst_mk_wide!(u8, 16, [255, 255]);
    let sum = add_mp_l(&op0, 1);
    assert_eq!(sum.bits(), 17);
    assert_eq!(sum.limbs(), &[0, 0, 1]);

    let op0 = tst_mk_wide!(u8, 4, [15]);
    let sum = add_mp_l(&op0, 255);
    assert_eq!(sum.bits(), 9);
    assert_eq!(sum.limbs(), &[14, 1]);

    let op0 = tst_mk_wide!(u16, 32, [0, 1]);
    let diff = sub_mp_l(&op0, 1);
    assert_eq!(diff.bits(), 33);
    assert_eq!(diff.limbs(), &[!0, 0, 0]);
}

#[test]
fn test_add_sub_operators() {
    let op0 = tst_mk_wide!(u8, 8, [200]);
    let op1 = tst_mk_wide!(u8, 16, [100, 1]);

    let sum = &op0 + &op1;
    assert_eq!(sum.bits(), 17);
    assert_eq!(sum.limbs(), &[44, 2, 0]);
    assert!(sum == op0.clone() + op1.clone());

    let sum = &op0 + 56u8;
    assert_eq!(sum.limbs(), &[0, 1]);
    assert!(sum == op0.clone() + 56u8);

    let diff = &op1 - &op0;
    assert_eq!(diff.bits(), 17);
    assert_eq!(diff.limbs(), &[156, 0, 0]);
    assert!(diff == op1.clone() - op0.clone());

    let diff = &op0 - 201u8;
    assert_eq!(diff.limbs(), &[255, 255]);
    assert!(diff == op0 - 201u8);
}

#[cfg(test)]
fn test_add_sub_random<L: Limb>() {
    use super::test_helpers::{tst_limbs_modulus, tst_random_wide, tst_rng, tst_to_biguint};
    use super::wide::nlimbs_for_bits;
    use rand::Rng as _;

    let mut rng = tst_rng();
    for _ in 0..200 {
        let op0_bits = rng.gen_range(1..=256usize);
        let op1_bits = rng.gen_range(1..=256usize);
        let op0 = tst_random_wide::<L>(&mut rng, op0_bits);
        let op1 = tst_random_wide::<L>(&mut rng, op1_bits);
        let a = tst_to_biguint(&op0);
        let b = tst_to_biguint(&op1);
        let max_bits = op0_bits.max(op1_bits);

        let sum = add_mp_mp(&op0, &op1);
        assert_eq!(sum.bits(), max_bits + 1);
        assert_eq!(sum.limb_count(), nlimbs_for_bits::<L>(max_bits + 1));
        assert_eq!(tst_to_biguint(&sum), &a + &b);

        let sum = add_trunc_mp_mp(&op0, &op1);
        assert_eq!(sum.bits(), max_bits);
        let modulus = tst_limbs_modulus::<L>(sum.limb_count());
        assert_eq!(tst_to_biguint(&sum), (&a + &b) % &modulus);

        let diff = sub_mp_mp(&op0, &op1);
        assert_eq!(diff.bits(), max_bits + 1);
        let modulus = tst_limbs_modulus::<L>(diff.limb_count());
        assert_eq!(tst_to_biguint(&diff), (&a + &modulus - &b) % &modulus);
        if a >= b {
            assert_eq!(tst_to_biguint(&diff), &a - &b);
        }

        let diff = sub_trunc_mp_mp(&op0, &op1);
        assert_eq!(diff.bits(), max_bits);
        let modulus = tst_limbs_modulus::<L>(diff.limb_count());
        assert_eq!(tst_to_biguint(&diff), (&a + &modulus - &b) % &modulus);
    }
}

#[test]
fn test_add_sub_random_u8() {
    test_add_sub_random::<u8>()
}

#[test]
fn test_add_sub_random_u16() {
    test_add_sub_random::<u16>()
}

#[test]
fn test_add_sub_random_u32() {
    test_add_sub_random::<u32>()
}

#[test]
fn test_add_sub_random_u64() {
    test_add_sub_random::<u64>()
}
