//! The fixed-width multiprecision integer type, [`WideInt`].

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use super::consts::SizedConstants;
use super::limb::{find_last_set_bit_l, Limb};

/// Determine the number of `L` limbs needed for a given bit width.
///
/// # Arguments
///
/// * `bits` - The bit width.
///
pub fn nlimbs_for_bits<L: Limb>(bits: usize) -> usize {
    bits.div_ceil(L::BITS as usize)
}

#[test]
fn test_nlimbs_for_bits() {
    assert_eq!(nlimbs_for_bits::<u8>(0), 0);
    assert_eq!(nlimbs_for_bits::<u8>(1), 1);
    assert_eq!(nlimbs_for_bits::<u8>(8), 1);
    assert_eq!(nlimbs_for_bits::<u8>(9), 2);
    assert_eq!(nlimbs_for_bits::<u8>(64), 8);
    assert_eq!(nlimbs_for_bits::<u16>(24), 2);
    assert_eq!(nlimbs_for_bits::<u32>(130), 5);
    assert_eq!(nlimbs_for_bits::<u32>(128), 4);
    assert_eq!(nlimbs_for_bits::<u64>(65), 2);

    // No intermediate overflow near the top of the range.
    assert_eq!(nlimbs_for_bits::<u8>(usize::MAX), usize::MAX / 8 + 1);
    assert_eq!(nlimbs_for_bits::<u32>(usize::MAX), usize::MAX / 32 + 1);
    assert_eq!(nlimbs_for_bits::<u64>(usize::MAX), usize::MAX / 64 + 1);
    assert_eq!(nlimbs_for_bits::<u64>(usize::MAX - 63), usize::MAX / 64);
}

/// The bit width of a limb type, as a width.
pub(crate) fn limb_bits<L: Limb>() -> NonZeroUsize {
    NonZeroUsize::MIN.saturating_add(L::BITS as usize - 1)
}

/// An unsigned integer of a fixed bit width, stored as little-endian limbs.
///
/// The bit width is set at construction and never changes. It determines the number of limbs,
/// `ceil(bits / L::BITS)`. If the width is not a multiple of the limb width, the most significant
/// limb has excess high "padding" bits. These are not masked: they may hold ones, e.g. after a
/// subtraction wrapped around, and all operations treat the limbs as they are.
///
/// Values are immutable, arithmetic always produces a new value whose width is derived from the
/// operand widths alone, never from their magnitudes.
#[derive(Clone, Debug)]
pub struct WideInt<L: Limb> {
    bits: NonZeroUsize,
    limbs: Vec<L>,
}

impl<L: Limb> WideInt<L> {
    /// Create an all-zero value of the given width.
    pub fn new(bits: NonZeroUsize) -> Self {
        let mut limbs = Vec::new();
        limbs.resize(nlimbs_for_bits::<L>(bits.get()), L::ZERO);
        Self { bits, limbs }
    }

    /// Create a value from limbs in little-endian order.
    ///
    /// A limb list shorter than the limb count for `bits` gets zero-extended. The limbs are taken
    /// verbatim, including any padding bits above `bits` in the most significant one.
    ///
    /// # Arguments
    ///
    /// * `bits` - The bit width, must be non-zero.
    /// * `limbs` - The limbs, least significant first. At most `ceil(bits / L::BITS)` of them.
    ///
    pub fn from_limbs(bits: usize, limbs: &[L]) -> Result<Self, FromLimbsError> {
        let bits = NonZeroUsize::new(bits).ok_or(FromLimbsError::ZeroBitWidth)?;
        let mut result = Self::new(bits);
        if limbs.len() > result.limbs.len() {
            return Err(FromLimbsError::TooManyLimbs {
                max: result.limbs.len(),
                found: limbs.len(),
            });
        }
        result.limbs[..limbs.len()].copy_from_slice(limbs);
        Ok(result)
    }

    /// Promote a single limb to a one limb value of width [`Limb::BITS`].
    pub fn from_limb(v: L) -> Self {
        let mut result = Self::new(limb_bits::<L>());
        result.limbs[0] = v;
        result
    }

    pub fn bits(&self) -> usize {
        self.bits.get()
    }

    pub fn bit_width(&self) -> NonZeroUsize {
        self.bits
    }

    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    pub fn limbs(&self) -> &[L] {
        &self.limbs
    }

    pub fn into_limbs(self) -> Vec<L> {
        self.limbs
    }

    /// Load the limb at index `i`.
    ///
    /// Limbs past the most significant one read as zero, so that operands of different widths
    /// can be combined without explicit extension.
    pub fn load_l(&self, i: usize) -> L {
        match self.limbs.get(i) {
            Some(v) => *v,
            None => L::ZERO,
        }
    }

    pub(crate) fn store_l(&mut self, i: usize, value: L) {
        self.limbs[i] = value;
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|v| *v == L::ZERO)
    }

    /// Position of the most significant set bit, counting from one, or zero if no bit is set.
    ///
    /// Padding bits count: a value with any of them set reports a position above
    /// [`bits()`](Self::bits).
    pub fn highest_bit(&self) -> usize {
        let mut i = self.limbs.len();
        while i > 0 {
            i -= 1;
            let v = self.limbs[i];
            if v != L::ZERO {
                return i * L::BITS as usize + find_last_set_bit_l(v);
            }
        }
        0
    }

    fn from_constant(bits: NonZeroUsize, v: L) -> Self {
        let mut result = Self::new(bits);
        result.limbs[0] = v;
        result
    }
}

impl<L: Limb> SizedConstants for WideInt<L> {
    fn zero(bits: NonZeroUsize) -> Self {
        Self::from_constant(bits, L::ZERO)
    }

    fn one(bits: NonZeroUsize) -> Self {
        Self::from_constant(bits, L::ONE)
    }

    fn two(bits: NonZeroUsize) -> Self {
        Self::from_constant(bits, L::TWO)
    }

    fn three(bits: NonZeroUsize) -> Self {
        Self::from_constant(bits, L::THREE)
    }

    fn ten(bits: NonZeroUsize) -> Self {
        Self::from_constant(bits, L::TEN)
    }
}

impl<L: Limb> From<L> for WideInt<L> {
    fn from(value: L) -> Self {
        Self::from_limb(value)
    }
}

#[cfg(feature = "zeroize")]
impl<L: Limb + zeroize::DefaultIsZeroes> Zeroize for WideInt<L> {
    fn zeroize(&mut self) {
        self.limbs.as_mut_slice().zeroize();
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum FromLimbsError {
    ZeroBitWidth,
    TooManyLimbs { max: usize, found: usize },
}

impl fmt::Display for FromLimbsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBitWidth => f.write_str("bit width must be non-zero"),
            Self::TooManyLimbs { max, found } => {
                write!(f, "{} limbs given, but the bit width allows at most {}", found, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FromLimbsError {}

#[test]
fn test_from_limbs() {
    let v = WideInt::<u8>::from_limbs(64, &[255, 127]).unwrap();
    assert_eq!(v.bits(), 64);
    assert_eq!(v.limb_count(), 8);
    assert_eq!(v.limbs(), &[255, 127, 0, 0, 0, 0, 0, 0]);
    assert_eq!(v.load_l(1), 127);
    assert_eq!(v.load_l(8), 0);
    assert_eq!(v.load_l(100), 0);

    let v = WideInt::<u8>::from_limbs(8, &[]).unwrap();
    assert_eq!(v.limbs(), &[0]);
    assert_eq!(WideInt::<u8>::from_limbs(16, &[]).unwrap().limb_count(), 2);
    assert_eq!(WideInt::<u8>::from_limbs(32, &[]).unwrap().limb_count(), 4);
    assert_eq!(WideInt::<u32>::from_limbs(33, &[]).unwrap().limb_count(), 2);

    assert_eq!(
        WideInt::<u8>::from_limbs(0, &[]).unwrap_err(),
        FromLimbsError::ZeroBitWidth
    );
    assert_eq!(
        WideInt::<u8>::from_limbs(9, &[1, 2, 3]).unwrap_err(),
        FromLimbsError::TooManyLimbs { max: 2, found: 3 }
    );
}

#[test]
fn test_from_limbs_keeps_limbs_verbatim() {
    let limbs: [u16; 4] = [0xbeef, 0x0001, 0xffff, 0x8000];
    let v = WideInt::<u16>::from_limbs(64, &limbs).unwrap();
    assert_eq!(v.limbs(), &limbs);
    assert_eq!(v.clone().into_limbs(), limbs.to_vec());

    // Padding bits above the declared width are not masked.
    let v = WideInt::<u8>::from_limbs(12, &[0xff, 0xff]).unwrap();
    assert_eq!(v.limbs(), &[0xff, 0xff]);
    assert_eq!(v.highest_bit(), 16);
}

#[test]
fn test_from_limb() {
    let v = WideInt::from_limb(0xabu8);
    assert_eq!(v.bits(), 8);
    assert_eq!(v.limbs(), &[0xab]);

    let v: WideInt<u64> = (!0u64).into();
    assert_eq!(v.bits(), 64);
    assert_eq!(v.limbs(), &[!0]);
}

#[test]
fn test_highest_bit() {
    fn hb(limbs: &[u8]) -> usize {
        WideInt::<u8>::from_limbs(64, limbs).unwrap().highest_bit()
    }

    assert_eq!(hb(&[0]), 0);
    assert_eq!(hb(&[1]), 1);
    assert_eq!(hb(&[9]), 4);
    assert_eq!(hb(&[255]), 8);
    assert_eq!(hb(&[255, 127]), 15);
    assert_eq!(hb(&[255, 255, 255, 1]), 25);
    assert_eq!(hb(&[255, 255, 255, 255, 255, 255, 255, 63]), 62);
    assert_eq!(hb(&[0, 0, 0, 0, 0, 0, 0, 0x80]), 64);
    assert_eq!(hb(&[1, 0, 0, 0, 0, 0, 0, 0]), 1);
}

#[test]
fn test_highest_bit_top_declared_bit() {
    for bits in 1..=100usize {
        assert_eq!(WideInt::<u32>::new(NonZeroUsize::new(bits).unwrap()).highest_bit(), 0);

        let i = bits - 1;
        let mut limbs = [0u32; 4];
        limbs[i / 32] = 1 << (i % 32);
        let v = WideInt::<u32>::from_limbs(bits, &limbs[..nlimbs_for_bits::<u32>(bits)]).unwrap();
        assert_eq!(v.highest_bit(), bits);
    }
}

#[test]
fn test_sized_constants() {
    let bits = NonZeroUsize::new(64).unwrap();

    let v = WideInt::<u8>::zero(bits);
    assert_eq!(v.bits(), 64);
    assert_eq!(v.limb_count(), 8);
    assert_eq!(v.highest_bit(), 0);
    assert!(v.is_zero());

    let v = WideInt::<u8>::one(bits);
    assert_eq!(v.limb_count(), 8);
    assert_eq!(v.highest_bit(), 1);

    let v = WideInt::<u8>::two(bits);
    assert_eq!(v.limb_count(), 8);
    assert_eq!(v.highest_bit(), 2);

    let v = WideInt::<u8>::three(bits);
    assert_eq!(v.limb_count(), 8);
    assert_eq!(v.highest_bit(), 2);

    let v = WideInt::<u8>::ten(bits);
    assert_eq!(v.bits(), 64);
    assert_eq!(v.limbs(), &[10, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(v.highest_bit(), 4);
    assert!(!v.is_zero());
}

#[cfg(feature = "zeroize")]
#[test]
fn test_zeroize() {
    let mut v = WideInt::<u32>::from_limbs(96, &[1, 2, 3]).unwrap();
    v.zeroize();
    assert!(v.is_zero());
    assert_eq!(v.bits(), 96);
    assert_eq!(v.limb_count(), 3);
}
