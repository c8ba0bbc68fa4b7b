#![macro_use]

use num_bigint::BigUint;
use num_traits::NumCast;
use rand::{Rng, SeedableRng as _};
use rand_chacha::ChaCha8Rng;

use super::limb::Limb;
use super::wide::{nlimbs_for_bits, WideInt};

macro_rules! tst_mk_wide {
    ($lt:ty, $bits:expr, [$($limb:expr),* $(,)?]) => {{
        let limbs: &[$lt] = &[$($limb),*];
        crate::wide::WideInt::<$lt>::from_limbs($bits, limbs).unwrap()
    }};
}

pub fn tst_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5eed_f00d_cafe_d00d)
}

/// A random value whose padding bits above `bits` are clear.
pub fn tst_random_wide<L: Limb>(rng: &mut ChaCha8Rng, bits: usize) -> WideInt<L> {
    let nlimbs = nlimbs_for_bits::<L>(bits);
    let mut limbs = Vec::with_capacity(nlimbs);
    for _ in 0..nlimbs {
        let v: u64 = rng.gen();
        limbs.push(<L as NumCast>::from(v >> (64 - L::BITS)).unwrap());
    }
    let high_bits = bits % L::BITS as usize;
    if high_bits != 0 {
        limbs[nlimbs - 1] = limbs[nlimbs - 1] & ((L::ONE << high_bits) - L::ONE);
    }
    WideInt::from_limbs(bits, &limbs).unwrap()
}

pub fn tst_to_biguint<L: Limb>(v: &WideInt<L>) -> BigUint {
    let mut result = BigUint::from(0u32);
    for limb in v.limbs().iter().rev() {
        result = (result << L::BITS as usize) + BigUint::from(limb.to_u64().unwrap());
    }
    result
}

/// `2^(nlimbs * L::BITS)`, the modulus of arithmetic confined to `nlimbs` limbs.
pub fn tst_limbs_modulus<L: Limb>(nlimbs: usize) -> BigUint {
    BigUint::from(1u32) << (nlimbs * L::BITS as usize)
}
