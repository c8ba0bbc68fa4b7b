//! Implementation of fixed-width integer multiplication primitives.

use core::num::NonZeroUsize;
use core::ops;

use super::limb::{mul_add_l_l_l_c, Limb};
use super::wide::WideInt;

/// Result width of [`mul_mp_mp()`].
pub fn required_bits_mul(op0_bits: NonZeroUsize, op1_bits: NonZeroUsize) -> NonZeroUsize {
    op0_bits.saturating_add(op1_bits.get())
}

/// Multiply two fixed-width integers.
///
/// The result is `op0.bits() + op1.bits()` wide, which always accommodates the full product of
/// operands with clear padding bits, so no overflow is possible. Each limb by limb product is
/// accumulated in the widened [`Limb::Double`] type.
///
/// # Arguments
///
/// * `op0` - The first factor.
/// * `op1` - The second factor.
///
pub fn mul_mp_mp<L: Limb>(op0: &WideInt<L>, op1: &WideInt<L>) -> WideInt<L> {
    let mut result = WideInt::new(required_bits_mul(op0.bit_width(), op1.bit_width()));
    let result_nlimbs = result.limb_count();
    let op0_nlimbs = op0.limb_count();
    let op1_nlimbs = op1.limb_count();
    debug_assert!(op1_nlimbs <= result_nlimbs);

    for j in 0..op1_nlimbs {
        let op1_val = op1.load_l(j);
        let mut carry = L::ZERO;
        // Don't write past the result's most significant limb.
        let nlimbs = op0_nlimbs.min(result_nlimbs - j);
        for i in 0..nlimbs {
            let mut result_val = result.load_l(i + j);
            (carry, result_val) = mul_add_l_l_l_c(result_val, op0.load_l(i), op1_val, carry);
            result.store_l(i + j, result_val);
        }
        if j + nlimbs < result_nlimbs {
            result.store_l(j + nlimbs, carry);
        }
    }
    result
}

// Multiply a fixed-width integer by a limb.
pub fn mul_mp_l<L: Limb>(op0: &WideInt<L>, op1: L) -> WideInt<L> {
    mul_mp_mp(op0, &WideInt::from_limb(op1))
}

impl<L: Limb> ops::Mul<&WideInt<L>> for &WideInt<L> {
    type Output = WideInt<L>;

    fn mul(self, rhs: &WideInt<L>) -> Self::Output {
        mul_mp_mp(self, rhs)
    }
}

impl<L: Limb> ops::Mul for WideInt<L> {
    type Output = WideInt<L>;

    fn mul(self, rhs: WideInt<L>) -> Self::Output {
        mul_mp_mp(&self, &rhs)
    }
}

impl<L: Limb> ops::Mul<L> for &WideInt<L> {
    type Output = WideInt<L>;

    fn mul(self, rhs: L) -> Self::Output {
        mul_mp_l(self, rhs)
    }
}

impl<L: Limb> ops::Mul<L> for WideInt<L> {
    type Output = WideInt<L>;

    fn mul(self, rhs: L) -> Self::Output {
        mul_mp_l(&self, rhs)
    }
}

#[test]
fn test_mul_mp_mp_u8() {
    // 128 * 128 = 64 << 8
    let prod = mul_mp_mp(&tst_mk_wide!(u8, 8, [128]), &tst_mk_wide!(u8, 8, [128]));
    assert_eq!(prod.bits(), 16);
    assert_eq!(prod.limb_count(), 2);
    assert_eq!(prod.limbs(), &[0, 64]);

    // 61051 * 72077 = 4400870627
    let prod = mul_mp_mp(
        &tst_mk_wide!(u8, 16, [123, 238]),
        &tst_mk_wide!(u8, 24, [141, 25, 1]),
    );
    assert_eq!(prod.bits(), 40);
    assert_eq!(prod.limb_count(), 5);
    assert_eq!(prod.limbs(), &[191, 92, 72, 6, 1]);

    // The product of the largest values of either width.
    let prod = mul_mp_mp(
        &tst_mk_wide!(u8, 16, [255, 255]),
        &tst_mk_wide!(u8, 16, [255, 255]),
    );
    assert_eq!(prod.limbs(), &[1, 0, 254, 255]);
}

#[test]
fn test_mul_mp_mp_unaligned_widths() {
    // 12 bit by 4 bit, 16 bit result in two u8 limbs.
    let prod = mul_mp_mp(&tst_mk_wide!(u8, 12, [0xff, 0x0f]), &tst_mk_wide!(u8, 4, [0xf]));
    assert_eq!(prod.bits(), 16);
    assert_eq!(prod.limbs(), &[0xf1, 0xef]);

    // 3 bit by 3 bit, a single limb result.
    let prod = mul_mp_mp(&tst_mk_wide!(u32, 3, [7]), &tst_mk_wide!(u32, 3, [7]));
    assert_eq!(prod.bits(), 6);
    assert_eq!(prod.limbs(), &[49]);
}

#[test]
fn test_mul_mp_mp_u64() {
    let prod = mul_mp_mp(
        &tst_mk_wide!(u64, 128, [!0, !0]),
        &tst_mk_wide!(u64, 64, [!0]),
    );
    assert_eq!(prod.bits(), 192);
    assert_eq!(prod.limbs(), &[1, !0, !1]);
}

#[test]
fn test_mul_mp_l() {
    let prod = mul_mp_l(&tst_mk_wide!(u16, 32, [0x1234, 0x5678]), 0x10);
    assert_eq!(prod.bits(), 48);
    assert_eq!(prod.limbs(), &[0x2340, 0x6781, 0x5]);

    let op0 = tst_mk_wide!(u8, 8, [128]);
    assert!(&op0 * 2u8 == tst_mk_wide!(u8, 9, [0, 1]));
    assert!(op0.clone() * 2u8 == &op0 * 2u8);
    let square = &op0 * &op0;
    assert_eq!(square.limbs(), &[0, 64]);
    assert!(square == op0.clone() * op0);
}

#[cfg(test)]
fn test_mul_random<L: Limb>() {
    use super::test_helpers::{tst_random_wide, tst_rng, tst_to_biguint};
    use super::wide::nlimbs_for_bits;
    use rand::Rng as _;

    let mut rng = tst_rng();
    for _ in 0..200 {
        let op0_bits = rng.gen_range(1..=256usize);
        let op1_bits = rng.gen_range(1..=256usize);
        let op0 = tst_random_wide::<L>(&mut rng, op0_bits);
        let op1 = tst_random_wide::<L>(&mut rng, op1_bits);

        let prod = mul_mp_mp(&op0, &op1);
        assert_eq!(prod.bits(), op0_bits + op1_bits);
        assert_eq!(prod.limb_count(), nlimbs_for_bits::<L>(op0_bits + op1_bits));
        let expected = tst_to_biguint(&op0) * tst_to_biguint(&op1);
        assert_eq!(tst_to_biguint(&prod), expected);
        assert!(prod.highest_bit() <= prod.bits());
    }
}

#[test]
fn test_mul_random_u8() {
    test_mul_random::<u8>()
}

#[test]
fn test_mul_random_u16() {
    test_mul_random::<u16>()
}

#[test]
fn test_mul_random_u32() {
    test_mul_random::<u32>()
}

#[test]
fn test_mul_random_u64() {
    test_mul_random::<u64>()
}
