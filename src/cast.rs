use super::float::{
    need_round_away_from_zero, overflow, shift_right_with_loss, LossFraction, RoundingMode, F16,
};
use super::float::{BIAS, EXP_BITS, EXP_MAX, LSB_EXP_MIN, MAN_BITS, PRECISION, QUIET_BIT};
use super::utils::mask;
use core::cmp::Ordering;

// Interchange parameters for the native formats (IEEE 754-2019, table 3.5).
const F32_EXP_BITS: usize = 8;
const F32_MAN_BITS: usize = 23;
const F32_BIAS: i32 = 127;
const F64_EXP_BITS: usize = 11;
const F64_MAN_BITS: usize = 52;
const F64_BIAS: i32 = 1023;

impl F16 {
    /// Load the integer `val` into the float. Notice that the number may
    /// overflow, or be rounded to the nearest even integer.
    pub fn from_u64(val: u64) -> Self {
        if val == 0 {
            return Self::zero(false);
        }
        narrow(false, 0, val, RoundingMode::NearestTiesToEven)
    }

    /// Load the integer `val` into the float. Notice that the number may
    /// overflow, or be rounded to the nearest even integer.
    pub fn from_i64(val: i64) -> Self {
        if val < 0 {
            return Self::from_u64(val.unsigned_abs()).neg();
        }
        Self::from_u64(val as u64)
    }

    /// Converts and returns the rounded integral part, using the rounding
    /// mode `rm`. NaNs become zero and the infinities saturate the i64
    /// range.
    pub fn to_i64(&self, rm: RoundingMode) -> i64 {
        if self.is_nan() || self.is_zero() {
            return 0;
        }

        if self.is_inf() {
            if self.get_sign() {
                return i64::MIN;
            }
            return i64::MAX;
        }

        let sign = self.get_sign();
        let (exp, mantissa) = self.decompose();
        let val = if exp < 0 {
            let (mut m, loss) = shift_right_with_loss(mantissa, (-exp) as usize);
            if !loss.is_exactly_zero() && need_round_away_from_zero(rm, sign, m & 1 == 1, loss) {
                m += 1;
            }
            m
        } else {
            // The largest exponent is 5, so this can't overflow.
            mantissa << exp
        };

        if sign {
            -(val as i64)
        } else {
            val as i64
        }
    }

    /// Loads and converts a native fp32 value. Notice that the number may
    /// overflow, or be rounded to the nearest even.
    pub fn from_f32(value: f32) -> Self {
        Self::from_f32_with_rm(value, RoundingMode::NearestTiesToEven)
    }

    /// Loads and converts a native fp32 value using the rounding mode `rm`.
    pub fn from_f32_with_rm(value: f32, rm: RoundingMode) -> Self {
        narrow_native(
            value.to_bits() as u64,
            F32_EXP_BITS,
            F32_MAN_BITS,
            F32_BIAS,
            rm,
        )
    }

    /// Loads and converts a native fp64 value. Notice that the number may
    /// overflow, or be rounded to the nearest even.
    pub fn from_f64(value: f64) -> Self {
        Self::from_f64_with_rm(value, RoundingMode::NearestTiesToEven)
    }

    /// Loads and converts a native fp64 value using the rounding mode `rm`.
    /// The value is rounded once, straight from the wide mantissa, so the
    /// result can differ from a conversion that stops at fp32 on the way.
    pub fn from_f64_with_rm(value: f64, rm: RoundingMode) -> Self {
        narrow_native(value.to_bits(), F64_EXP_BITS, F64_MAN_BITS, F64_BIAS, rm)
    }

    /// Converts this value to a native fp32. The widening is exact: every
    /// encoding, the denormals included, fits in the fp32 range.
    pub fn to_f32(&self) -> f32 {
        let sign = (self.get_sign() as u32) << (F32_EXP_BITS + F32_MAN_BITS);
        let biased_exp = self.biased_exp() as u32;
        let mantissa = self.mantissa_field() as u32;

        // NaN and Inf keep the all-ones exponent, with the payload moved
        // into the top mantissa bits.
        if biased_exp == mask(EXP_BITS) as u32 {
            let bits = sign
                | (mask(F32_EXP_BITS) as u32) << F32_MAN_BITS
                | mantissa << (F32_MAN_BITS - MAN_BITS);
            return f32::from_bits(bits);
        }

        if biased_exp == 0 {
            if mantissa == 0 {
                return f32::from_bits(sign);
            }
            // Denormal. Find the top bit and renormalize; the fp32 exponent
            // range has room for all of it.
            let msb = 31 - mantissa.leading_zeros() as i32;
            let value_exp = msb + LSB_EXP_MIN;
            let wide_biased = (value_exp + F32_BIAS) as u32;
            let wide_man = mantissa << (F32_MAN_BITS as i32 - msb) & mask(F32_MAN_BITS) as u32;
            return f32::from_bits(sign | wide_biased << F32_MAN_BITS | wide_man);
        }

        // Normal values translate by re-biasing the exponent.
        let wide_biased = biased_exp + (F32_BIAS - BIAS) as u32;
        f32::from_bits(sign | wide_biased << F32_MAN_BITS | mantissa << (F32_MAN_BITS - MAN_BITS))
    }

    /// Converts this value to a native fp64. Both widening steps are exact.
    pub fn to_f64(&self) -> f64 {
        self.to_f32() as f64
    }
}

/// Decode a native float from `bits`, given its interchange parameters, and
/// narrow it using the rounding mode `rm`.
fn narrow_native(bits: u64, exp_bits: usize, man_bits: usize, bias: i32, rm: RoundingMode) -> F16 {
    let sign = bits >> (exp_bits + man_bits) == 1;
    let biased_exp = ((bits >> man_bits) & ((1u64 << exp_bits) - 1)) as i32;
    let mantissa = bits & ((1u64 << man_bits) - 1);

    // Check for NaN/Inf.
    if biased_exp == (1 << exp_bits) - 1 {
        if mantissa == 0 {
            return F16::inf(sign);
        }
        // Keep the top payload bits and force the quiet bit, which is what
        // the hardware converters do.
        let payload = (mantissa >> (man_bits - MAN_BITS)) as u16;
        return F16::from_bits(F16::inf(sign).to_bits() | QUIET_BIT | payload);
    }

    if biased_exp == 0 {
        if mantissa == 0 {
            return F16::zero(sign);
        }
        // Denormals have no implicit bit, and the exponent of the bottom
        // mantissa bit is pinned to the lowest value in the range.
        return narrow(sign, 1 - bias - man_bits as i32, mantissa, rm);
    }

    // Normal numbers carry an implicit leading bit.
    let mantissa = mantissa | 1u64 << man_bits;
    narrow(sign, biased_exp - bias - man_bits as i32, mantissa, rm)
}

/// Build the value (-1)^sign * mantissa * 2^exp, where `exp` is the exponent
/// of the mantissa's least significant bit, rounding with `rm`. All of the
/// lossy conversions funnel through here. `mantissa` must not be zero.
fn narrow(sign: bool, exp: i32, mantissa: u64, rm: RoundingMode) -> F16 {
    debug_assert_ne!(mantissa, 0);
    let mut exp = exp;
    let mut mantissa = mantissa;

    // Step I - align the mantissa to the target precision, without letting
    // the exponent drop below the denormal range.
    let msb = 63 - mantissa.leading_zeros() as i32;
    let mut shift = msb - (PRECISION as i32 - 1);
    if exp + shift < LSB_EXP_MIN {
        shift = LSB_EXP_MIN - exp;
    }

    let loss = match shift.cmp(&0) {
        Ordering::Greater => {
            let res = shift_right_with_loss(mantissa, shift as usize);
            mantissa = res.0;
            exp += shift;
            res.1
        }
        Ordering::Less => {
            mantissa <<= -shift;
            exp += shift;
            LossFraction::ExactlyZero
        }
        Ordering::Equal => LossFraction::ExactlyZero,
    };

    // Step II - round the mantissa.
    if !loss.is_exactly_zero() && need_round_away_from_zero(rm, sign, mantissa & 1 == 1, loss) {
        mantissa += 1;
        // Did the mantissa overflow?
        if mantissa == 1u64 << PRECISION {
            mantissa >>= 1;
            exp += 1;
        }
    }

    // Every bit was shifted out and the remainder rounded down.
    if mantissa == 0 {
        return F16::zero(sign);
    }

    // Step III - encode. A mantissa without the top bit set is a denormal,
    // and the alignment step left its exponent at the bottom of the range.
    if mantissa < 1u64 << MAN_BITS {
        debug_assert_eq!(exp, LSB_EXP_MIN);
        return F16::from_bits((sign as u16) << (EXP_BITS + MAN_BITS) | mantissa as u16);
    }

    let value_exp = exp + MAN_BITS as i32;
    if value_exp > EXP_MAX {
        return overflow(sign, rm);
    }
    let biased = (value_exp + BIAS) as u16;
    F16::from_bits(
        (sign as u16) << (EXP_BITS + MAN_BITS)
            | biased << MAN_BITS
            | mantissa as u16 & mask(MAN_BITS) as u16,
    )
}

/// Narrows `value` to half precision, rounding to the nearest even, and
/// stores the encoding into `slot`. Values beyond the binary16 range become
/// a signed infinity, and values below half the smallest denormal become a
/// signed zero.
pub fn store_f16(value: f32, slot: &mut u16) {
    *slot = F16::from_f32(value).to_bits();
}

/// Loads the binary16 encoding in `slot` and widens it back to fp32. The
/// widening is exact.
pub fn load_f16(slot: u16) -> f32 {
    F16::from_bits(slot).to_f32()
}

#[test]
fn test_round_trip_native_float_cast() {
    // Exactly representable values round-trip bit for bit.
    let f = 1.5_f32;
    let a = F16::from_f32(f);
    assert_eq!(f, a.to_f32());

    assert!(F16::from_f32(f32::NAN).is_nan());
    assert!(!F16::from_f32(f32::NAN).is_inf());
    assert!(F16::from_f32(f32::INFINITY).is_inf());
    assert!(!F16::from_f32(f32::INFINITY).is_nan());
    assert!(F16::from_f32(f32::NEG_INFINITY).is_inf());
    assert!(F16::from_f32(f32::NEG_INFINITY).is_negative());

    // The zeros keep their sign through the round trip.
    assert_eq!(F16::from_f32(0.0).to_bits(), 0x0000);
    assert_eq!(F16::from_f32(-0.0).to_bits(), 0x8000);
    assert_eq!(F16::from_f32(0.0).to_f32().to_bits(), 0.0_f32.to_bits());
    assert_eq!(F16::from_f32(-0.0).to_f32().to_bits(), (-0.0_f32).to_bits());
}

#[test]
fn test_load_store_all_encodings() {
    // Widen and re-narrow every possible encoding: normals, denormals, the
    // zeros, the infinities and the NaNs.
    for bits in 0..=u16::MAX {
        let h = F16::from_bits(bits);
        let wide = h.to_f32();
        let back = F16::from_f32(wide);
        assert_eq!(h.is_nan(), wide.is_nan());
        assert_eq!(h.is_inf(), wide.is_infinite());
        assert_eq!(h.get_sign(), wide.is_sign_negative());
        if h.is_nan() {
            // Re-narrowing a NaN keeps the payload and forces the quiet bit.
            // NaN never compares equal, so check the class instead.
            assert_eq!(back.to_bits(), bits | QUIET_BIT);
            assert!(h.to_f64().is_nan());
        } else {
            assert_eq!(back.to_bits(), bits);
            assert_eq!(h.to_f64(), wide as f64);
        }
    }
}

#[test]
fn test_narrow_known_values() {
    assert_eq!(F16::from_f32(0.0).to_bits(), 0x0000);
    assert_eq!(F16::from_f32(-0.0).to_bits(), 0x8000);
    assert_eq!(F16::from_f32(1.0).to_bits(), 0x3C00);
    assert_eq!(F16::from_f32(-1.0).to_bits(), 0xBC00);
    assert_eq!(F16::from_f32(1.5).to_bits(), 0x3E00);
    assert_eq!(F16::from_f32(0.5).to_bits(), 0x3800);
    assert_eq!(F16::from_f32(2.0).to_bits(), 0x4000);
    assert_eq!(F16::from_f32(65504.0).to_bits(), 0x7BFF);
    // The smallest normal, 2^-14, and the smallest denormal, 2^-24.
    assert_eq!(F16::from_f32(0.00006103515625).to_bits(), 0x0400);
    assert_eq!(F16::from_f32(5.9604644775390625e-8).to_bits(), 0x0001);
    // Values that need rounding.
    assert_eq!(F16::from_f32(core::f32::consts::PI).to_bits(), 0x4248);
    assert_eq!(F16::from_f32(0.1).to_bits(), 0x2E66);
    assert_eq!(F16::from_f32(0.3).to_bits(), 0x34CD);
}

#[test]
fn test_widen_known_values() {
    assert_eq!(F16::from_bits(0x3C00).to_f32(), 1.0);
    assert_eq!(F16::from_bits(0x3E00).to_f32(), 1.5);
    assert_eq!(F16::from_bits(0xC000).to_f32(), -2.0);
    assert_eq!(F16::from_bits(0x7BFF).to_f32(), 65504.0);
    assert_eq!(F16::from_bits(0x0400).to_f32(), 0.00006103515625);
    // The largest denormal, 1023 * 2^-24, and the smallest one.
    assert_eq!(F16::from_bits(0x03FF).to_f32(), 0.00006097555160522461);
    assert_eq!(F16::from_bits(0x0001).to_f32(), 5.9604644775390625e-8);
    assert_eq!(F16::from_bits(0x8001).to_f32(), -5.9604644775390625e-8);
    assert_eq!(F16::from_bits(0x7C00).to_f32(), f32::INFINITY);
    assert_eq!(F16::from_bits(0xFC00).to_f32(), f32::NEG_INFINITY);
    assert!(F16::from_bits(0x7C01).to_f32().is_nan());
    assert!(F16::from_bits(0xFE00).to_f32().is_nan());
    // The widened zero keeps its sign bit.
    assert_eq!(F16::from_bits(0x8000).to_f32().to_bits(), 0x8000_0000);
    assert_eq!(F16::from_bits(0x0000).to_f32().to_bits(), 0x0000_0000);
}

#[test]
fn test_cast_from_integers() {
    assert_eq!(F16::from_i64(0).to_f32(), 0.);
    assert_eq!(F16::from_i64(1).to_bits(), 0x3C00);
    assert_eq!(F16::from_i64(-1).to_bits(), 0xBC00);

    // 2049 is the first integer that the 11-bit mantissa can't hold.
    assert_eq!(F16::from_u64(2048).to_f32(), 2048.0);
    assert_eq!(F16::from_u64(2049).to_f32(), 2048.0);
    assert_eq!(F16::from_u64(2050).to_f32(), 2050.0);
    assert_eq!(F16::from_u64(2051).to_f32(), 2052.0);

    // The range tops out at 65504; the rounding boundary to infinity
    // is 65520.
    assert_eq!(F16::from_i64(65500).to_f32(), 65504.0);
    assert_eq!(F16::from_i64(65504).to_f32(), 65504.0);
    assert_eq!(F16::from_i64(65519).to_f32(), 65504.0);
    assert!(F16::from_i64(65520).is_inf());
    assert!(F16::from_i64(65536).is_inf());
    assert!(F16::from_i64(-65520).is_inf());
    assert!(F16::from_i64(-65520).is_negative());
    assert_eq!(F16::from_i64(i64::MAX).to_f32(), f32::INFINITY);
    assert_eq!(F16::from_i64(i64::MIN).to_f32(), f32::NEG_INFINITY);

    for i in -100..100 {
        let a = F16::from_i64(i);
        let b = F16::from_f32(i as f32);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_narrow_overflow() {
    assert!(F16::from_f32(1e10).is_inf());
    assert!(!F16::from_f32(1e10).is_negative());
    assert!(F16::from_f32(-1e10).is_inf());
    assert!(F16::from_f32(-1e10).is_negative());
    assert!(F16::from_f32(f32::MAX).is_inf());
    assert!(F16::from_f32(f32::MIN).is_inf());
    assert_eq!(F16::from_f32(65519.0).to_bits(), 0x7BFF);
    assert!(F16::from_f32(65520.0).is_inf());
    assert!(F16::from_f64(1e300).is_inf());
    assert!(F16::from_f64(-1e300).is_negative());
}

#[test]
fn test_narrow_underflow() {
    // 2^-24 is the smallest denormal; it converts exactly.
    assert_eq!(F16::from_f32(5.9604644775390625e-8).to_bits(), 0x0001);
    // 2^-25 ties between zero and the smallest denormal; the even side wins.
    assert_eq!(F16::from_f32(2.9802322387695312e-8).to_bits(), 0x0000);
    assert_eq!(F16::from_f32(-2.9802322387695312e-8).to_bits(), 0x8000);
    // Just above the tie rounds up to the smallest denormal.
    assert_eq!(F16::from_f32(2.983e-8).to_bits(), 0x0001);
    // 1.5 * 2^-24 is another tie, and the even side is 2^-23.
    assert_eq!(F16::from_f32(8.940696716308594e-8).to_bits(), 0x0002);
    // Anything below the tie flushes to a signed zero.
    assert_eq!(F16::from_f32(1.0e-8).to_bits(), 0x0000);
    assert_eq!(F16::from_f32(-1.0e-8).to_bits(), 0x8000);
    assert_eq!(F16::from_f32(f32::MIN_POSITIVE).to_bits(), 0x0000);
    assert_eq!(F16::from_f32(f32::from_bits(1)).to_bits(), 0x0000);
}

#[test]
fn test_narrow_with_rounding_modes() {
    use RoundingMode::*;

    // 1 + 2^-11 sits exactly between 1.0 and the next value up, 1 + 2^-10.
    let tie = 1.00048828125_f32;
    assert_eq!(F16::from_f32_with_rm(tie, NearestTiesToEven).to_bits(), 0x3C00);
    assert_eq!(F16::from_f32_with_rm(tie, NearestTiesToAway).to_bits(), 0x3C01);
    assert_eq!(F16::from_f32_with_rm(tie, Zero).to_bits(), 0x3C00);
    assert_eq!(F16::from_f32_with_rm(tie, Positive).to_bits(), 0x3C01);
    assert_eq!(F16::from_f32_with_rm(tie, Negative).to_bits(), 0x3C00);
    assert_eq!(F16::from_f32_with_rm(-tie, NearestTiesToEven).to_bits(), 0xBC00);
    assert_eq!(F16::from_f32_with_rm(-tie, NearestTiesToAway).to_bits(), 0xBC01);
    assert_eq!(F16::from_f32_with_rm(-tie, Zero).to_bits(), 0xBC00);
    assert_eq!(F16::from_f32_with_rm(-tie, Positive).to_bits(), 0xBC00);
    assert_eq!(F16::from_f32_with_rm(-tie, Negative).to_bits(), 0xBC01);

    // Overflow saturates to the largest finite value in the modes that
    // can't reach infinity from below.
    assert!(F16::from_f32_with_rm(1e10, NearestTiesToEven).is_inf());
    assert!(F16::from_f32_with_rm(1e10, NearestTiesToAway).is_inf());
    assert_eq!(F16::from_f32_with_rm(1e10, Zero).to_bits(), 0x7BFF);
    assert!(F16::from_f32_with_rm(1e10, Positive).is_inf());
    assert_eq!(F16::from_f32_with_rm(1e10, Negative).to_bits(), 0x7BFF);
    assert_eq!(F16::from_f32_with_rm(-1e10, Zero).to_bits(), 0xFBFF);
    assert_eq!(F16::from_f32_with_rm(-1e10, Positive).to_bits(), 0xFBFF);
    assert!(F16::from_f32_with_rm(-1e10, Negative).is_inf());

    // A tiny nonzero value rounds up to the smallest denormal instead of
    // flushing to zero when the mode points away from it.
    assert_eq!(F16::from_f32_with_rm(1e-20, Positive).to_bits(), 0x0001);
    assert_eq!(F16::from_f32_with_rm(1e-20, Negative).to_bits(), 0x0000);
    assert_eq!(F16::from_f32_with_rm(1e-20, Zero).to_bits(), 0x0000);
    assert_eq!(F16::from_f32_with_rm(-1e-20, Negative).to_bits(), 0x8001);
    assert_eq!(F16::from_f32_with_rm(-1e-20, Positive).to_bits(), 0x8000);
}

#[test]
fn test_from_f64_single_rounding() {
    // 1 + 2^-11 + 2^-30: narrowing through fp32 first collapses the value
    // onto the tie point and rounds it down to 1.0; the direct conversion
    // sees the extra bit and rounds up.
    let v = f64::from_bits(0x3FF0_0200_0040_0000);
    assert_eq!(F16::from_f64(v).to_bits(), 0x3C01);
    assert_eq!(F16::from_f32(v as f32).to_bits(), 0x3C00);

    // Plain values land on the same encodings as the fp32 path.
    assert_eq!(F16::from_f64(1.5).to_bits(), 0x3E00);
    assert_eq!(F16::from_f64(-2.0).to_bits(), 0xC000);
    assert_eq!(F16::from_f64(65504.0).to_bits(), 0x7BFF);
    assert!(F16::from_f64(65520.0).is_inf());
    assert!(F16::from_f64(f64::NAN).is_nan());
    assert!(F16::from_f64(f64::NEG_INFINITY).is_inf());
    // fp64 denormals flush like every other tiny value.
    assert_eq!(F16::from_f64(f64::from_bits(1)).to_bits(), 0x0000);
    assert_eq!(F16::from_f64(-f64::from_bits(1)).to_bits(), 0x8000);
}

#[test]
fn test_nan_payload() {
    // The quiet bit is forced, and the top payload bits and the sign
    // survive the narrowing.
    let signaling = f32::from_bits(0x7F80_0001);
    let h = F16::from_f32(signaling);
    assert!(h.is_nan());
    assert_eq!(h.to_bits(), 0x7E00);

    let payload = f32::from_bits(0xFFC1_E000);
    let h = F16::from_f32(payload);
    assert!(h.is_nan());
    assert!(h.is_negative());
    assert_eq!(h.to_bits(), 0xFE0F);

    // NaN survives the round trip in both directions.
    assert!(F16::from_f32(F16::nan(true).to_f32()).is_nan());
    assert!(F16::nan(true).to_f32().is_nan());
    assert!(F16::nan(true).to_f32().is_sign_negative());
}

#[test]
fn test_rounding_to_integer() {
    // The low integers with round-to-zero.
    for i in 0..100 {
        let r = F16::from_f64(i as f64 + 0.1).to_i64(RoundingMode::Zero);
        assert_eq!(i, r);
    }

    // Integers that the mantissa holds exactly.
    for i in 0..100 {
        let val = i << 4;
        let r = F16::from_i64(val).to_i64(RoundingMode::Zero);
        assert_eq!(val, r);
    }

    use RoundingMode::NearestTiesToAway;
    assert_eq!(1, F16::from_f64(0.5).to_i64(NearestTiesToAway));
    assert_eq!(0, F16::from_f64(0.49).to_i64(NearestTiesToAway));
    assert_eq!(0, F16::from_f64(-0.49).to_i64(NearestTiesToAway));
    assert_eq!(-1, F16::from_f64(-0.5).to_i64(NearestTiesToAway));
    assert_eq!(2, F16::from_f64(1.5).to_i64(NearestTiesToAway));
    assert_eq!(3, F16::from_f64(2.5).to_i64(NearestTiesToAway));

    use RoundingMode::NearestTiesToEven;
    assert_eq!(0, F16::from_f64(0.5).to_i64(NearestTiesToEven));
    assert_eq!(2, F16::from_f64(1.5).to_i64(NearestTiesToEven));
    assert_eq!(2, F16::from_f64(2.5).to_i64(NearestTiesToEven));

    use RoundingMode::Zero;
    assert_eq!(0, F16::from_f64(0.9).to_i64(Zero));
    assert_eq!(1, F16::from_f64(1.1).to_i64(Zero));
    assert_eq!(99, F16::from_f64(99.2).to_i64(Zero));
    assert_eq!(0, F16::from_f64(-0.99).to_i64(Zero));
    assert_eq!(0, F16::from_f64(-0.5).to_i64(Zero));

    use RoundingMode::{Negative, Positive};
    assert_eq!(1, F16::from_f64(0.9).to_i64(Positive));
    assert_eq!(2, F16::from_f64(1.1).to_i64(Positive));
    assert_eq!(0, F16::from_f64(-0.99).to_i64(Positive));
    assert_eq!(-1, F16::from_f64(-1.5).to_i64(Positive));
    assert_eq!(-2, F16::from_f64(-1.5).to_i64(Negative));

    // Special values.
    assert_eq!(0, F16::nan(false).to_i64(NearestTiesToEven));
    assert_eq!(0, F16::zero(true).to_i64(NearestTiesToEven));
    assert_eq!(i64::MIN, F16::inf(true).to_i64(NearestTiesToEven));
    assert_eq!(i64::MAX, F16::inf(false).to_i64(NearestTiesToEven));
    // Every denormal is a fraction below one.
    assert_eq!(0, F16::smallest(false).to_i64(NearestTiesToEven));
    assert_eq!(1, F16::smallest(false).to_i64(Positive));
}

#[test]
fn test_store_load() {
    let mut slot: u16 = 0;
    store_f16(1.5, &mut slot);
    assert_eq!(slot, 0x3E00);
    assert_eq!(load_f16(slot), 1.5);

    store_f16(-0.0, &mut slot);
    assert_eq!(slot, 0x8000);
    assert_eq!(load_f16(slot).to_bits(), (-0.0_f32).to_bits());

    store_f16(1e10, &mut slot);
    assert_eq!(load_f16(slot), f32::INFINITY);
    store_f16(-1e10, &mut slot);
    assert_eq!(load_f16(slot), f32::NEG_INFINITY);

    store_f16(f32::NAN, &mut slot);
    assert!(load_f16(slot).is_nan());

    // A buffer of slots, written one element at a time.
    let values = [0.0_f32, -0.5, 655.0, 0.000001];
    let mut buf = [0u16; 4];
    for (v, slot) in values.iter().zip(buf.iter_mut()) {
        store_f16(*v, slot);
    }
    for (v, slot) in values.iter().zip(buf.iter()) {
        assert_eq!(load_f16(*slot), F16::from_f32(*v).to_f32());
    }
}

#[cfg(feature = "std")]
#[test]
fn test_narrow_special_values() {
    use super::utils;
    for v in utils::get_special_test_values() {
        let h = F16::from_f32(v);
        assert_eq!(v.is_nan(), h.is_nan());
        assert_eq!(v.is_sign_negative(), h.is_negative());
        if v.is_infinite() {
            assert!(h.is_inf());
        }
        if v.is_finite() && !h.is_inf() {
            // The round-trip error stays within half a ULP: 2^-11 relative
            // for the normals, plus the absolute denormal floor of 2^-25.
            let w = h.to_f32();
            assert!((w - v).abs() <= v.abs() / 2048.0 + 2.9802322387695312e-8);
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_rounding_brackets() {
    use super::utils::Lfsr;
    use RoundingMode::{Negative, Positive, Zero};

    // Narrowing a random fp32 with the directed modes must bracket the
    // value, and the nearest mode must pick the closer side of the two.
    let mut lfsr = Lfsr::new();
    let mut checked = 0;
    while checked < 20000 {
        let v = f32::from_bits(lfsr.get32());
        if !v.is_finite() {
            continue;
        }
        checked += 1;

        let lo = F16::from_f32_with_rm(v, Negative).to_f32();
        let hi = F16::from_f32_with_rm(v, Positive).to_f32();
        assert!(lo <= v && v <= hi);

        // Rounding toward zero never grows the magnitude.
        let z = F16::from_f32_with_rm(v, Zero).to_f32();
        assert!(z.abs() <= v.abs());

        let near = F16::from_f32(v);
        let nf = near.to_f32();
        assert!(nf == lo || nf == hi);
        if lo.is_finite() && hi.is_finite() {
            // Both differences are exact: they are short multiples of the
            // fp32 ulp at this exponent.
            let d_lo = v - lo;
            let d_hi = hi - v;
            if d_lo < d_hi {
                assert_eq!(nf, lo);
            } else if d_hi < d_lo {
                assert_eq!(nf, hi);
            } else if lo != hi {
                // A tie, so the even mantissa wins.
                assert_eq!(near.to_bits() & 1, 0);
            }
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_f64_rounding_brackets() {
    use super::utils::Lfsr;
    use RoundingMode::{Negative, Positive, Zero};

    // Random fp64 bit patterns cover the whole exponent range, so most
    // draws land outside the binary16 range and exercise the overflow and
    // underflow paths of the directed modes.
    for bits in Lfsr::new().take(10000) {
        let v = f64::from_bits(bits);
        if v.is_nan() {
            continue;
        }

        let lo = F16::from_f64_with_rm(v, Negative).to_f64();
        let hi = F16::from_f64_with_rm(v, Positive).to_f64();
        assert!(lo <= v && v <= hi);

        // Rounding toward zero never grows the magnitude.
        let z = F16::from_f64_with_rm(v, Zero).to_f64();
        assert!(z.abs() <= v.abs());

        // Rounding to nearest picks one of the two enclosing values.
        let near = F16::from_f64(v).to_f64();
        assert!(near == lo || near == hi);
    }
}
