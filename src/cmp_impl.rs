//! Implementation of fixed-width integer comparison primitives.
//!
//! Equality is by value: the shorter operand is zero-extended, so two values of different bit
//! widths compare equal iff they represent the same number, with limbs read verbatim, i.e.
//! padding bits included.

use subtle::{self, ConstantTimeEq};

use super::limb::Limb;
use super::scalar_cmp::is_not_equal;
use super::wide::WideInt;

/// Compare two fixed-width integers for `==`.
///
/// Evaluates to `true` iff `op0` is equal to `op1` in value. Returns early on the first
/// mismatching limb; use [`ConstantTimeEq::ct_eq`] where that matters.
///
/// # Arguments
///
/// * `op0` - The first operand.
/// * `op1` - The second operand.
///
pub fn eq_mp_mp<L: Limb>(op0: &WideInt<L>, op1: &WideInt<L>) -> bool {
    let nlimbs = op0.limb_count().max(op1.limb_count());
    for i in 0..nlimbs {
        if is_not_equal(op0.load_l(i), op1.load_l(i)) {
            return false;
        }
    }
    true
}

/// Compare a fixed-width integer against a single limb for `==`.
///
/// Evaluates to `true` iff the least significant limb of `op0` equals `op1` and all others are
/// zero.
pub fn eq_mp_l<L: Limb>(op0: &WideInt<L>, op1: L) -> bool {
    if is_not_equal(op0.load_l(0), op1) {
        return false;
    }
    for i in 1..op0.limb_count() {
        if is_not_equal(op0.load_l(i), L::ZERO) {
            return false;
        }
    }
    true
}

impl<L: Limb> PartialEq for WideInt<L> {
    fn eq(&self, other: &Self) -> bool {
        eq_mp_mp(self, other)
    }
}

impl<L: Limb> Eq for WideInt<L> {}

impl<L: Limb> PartialEq<L> for WideInt<L> {
    fn eq(&self, other: &L) -> bool {
        eq_mp_l(self, *other)
    }
}

impl<L: Limb> ConstantTimeEq for WideInt<L> {
    /// Runs in constant time for a given configuration of operand widths, i.e. execution time
    /// depends only on the limb counts, but not on the values.
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        let op0_nlimbs = self.limb_count();
        let op1_nlimbs = other.limb_count();
        let common_nlimbs = op0_nlimbs.min(op1_nlimbs);

        let mut is_eq = subtle::Choice::from(1);
        for i in 0..common_nlimbs {
            is_eq &= self.load_l(i).ct_eq(&other.load_l(i));
        }

        for i in common_nlimbs..op0_nlimbs {
            is_eq &= self.load_l(i).ct_eq(&L::ZERO);
        }

        for i in common_nlimbs..op1_nlimbs {
            is_eq &= other.load_l(i).ct_eq(&L::ZERO);
        }

        is_eq
    }
}

#[cfg(test)]
fn test_eq_mp_mp<L: Limb>() {
    let max = L::max_value();

    let op0 = tst_mk_wide!(L, 2 * L::BITS as usize, [L::ONE]);
    let op1 = tst_mk_wide!(L, 2 * L::BITS as usize, [L::ONE]);
    assert!(op0 == op1);
    assert_eq!(op0.ct_eq(&op1).unwrap_u8(), 1);

    // Different widths, same value.
    let op1 = tst_mk_wide!(L, 5 * L::BITS as usize, [L::ONE]);
    assert!(op0 == op1);
    assert!(op1 == op0);
    assert_eq!(op0.ct_eq(&op1).unwrap_u8(), 1);
    assert_eq!(op1.ct_eq(&op0).unwrap_u8(), 1);

    let op0 = tst_mk_wide!(L, 2 * L::BITS as usize, [L::ONE, L::TWO]);
    let op1 = tst_mk_wide!(L, 2 * L::BITS as usize, [L::ONE, L::TWO]);
    assert!(op0 == op1);
    let op1 = tst_mk_wide!(L, L::BITS as usize, [L::ONE]);
    assert!(op0 != op1);
    assert!(op1 != op0);
    assert_eq!(op0.ct_eq(&op1).unwrap_u8(), 0);
    assert_eq!(op1.ct_eq(&op0).unwrap_u8(), 0);

    let op0 = tst_mk_wide!(L, 2 * L::BITS as usize, [L::ONE]);
    let op1 = tst_mk_wide!(L, 2 * L::BITS as usize, [L::TWO]);
    assert!(op0 != op1);
    assert_eq!(op0.ct_eq(&op1).unwrap_u8(), 0);

    // A difference in the zero-extended part only.
    let op0 = tst_mk_wide!(L, 3 * L::BITS as usize, [max, L::ZERO, L::ONE]);
    let op1 = tst_mk_wide!(L, L::BITS as usize, [max]);
    assert!(op0 != op1);
    assert!(op1 != op0);
    assert_eq!(op1.ct_eq(&op0).unwrap_u8(), 0);
}

#[test]
fn test_eq_mp_mp_u8() {
    test_eq_mp_mp::<u8>()
}

#[test]
fn test_eq_mp_mp_u16() {
    test_eq_mp_mp::<u16>()
}

#[test]
fn test_eq_mp_mp_u32() {
    test_eq_mp_mp::<u32>()
}

#[test]
fn test_eq_mp_mp_u64() {
    test_eq_mp_mp::<u64>()
}

#[test]
fn test_eq_mp_mp_zero_padding() {
    let op0 = tst_mk_wide!(u8, 64, [255, 127]);
    assert!(op0 == op0.clone());
    for bits in 16..=128 {
        let op1 = WideInt::<u8>::from_limbs(bits, &[255, 127]).unwrap();
        assert!(op0 == op1);
        assert!(op1 == op0);
    }
}

#[test]
fn test_eq_mp_l() {
    let op0 = tst_mk_wide!(u8, 64, [42]);
    assert!(op0 == 42u8);
    assert!(op0 != 43u8);
    assert!(eq_mp_l(&op0, 42));

    let op0 = tst_mk_wide!(u8, 64, [42, 0, 0, 0, 0, 0, 0, 1]);
    assert!(op0 != 42u8);

    let op0 = WideInt::from_limb(!0u32);
    assert!(op0 == !0u32);
}
