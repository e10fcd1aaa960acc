use crate::utils::mask;
use core::cmp::Ordering;
use core::ops::Neg;

/// Defines the supported rounding modes.
/// See IEEE754-2019 Section 4.3 Rounding-direction attributes
#[derive(Debug, Clone, Copy)]
pub enum RoundingMode {
    NearestTiesToEven,
    NearestTiesToAway,
    Zero,
    Positive,
    Negative,
}

impl RoundingMode {
    /// Returns the rounding mode that's named by `s`, if there is one.
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "NearestTiesToEven" => Some(RoundingMode::NearestTiesToEven),
            "NearestTiesToAway" => Some(RoundingMode::NearestTiesToAway),
            "Zero" => Some(RoundingMode::Zero),
            "Positive" => Some(RoundingMode::Positive),
            "Negative" => Some(RoundingMode::Negative),
            _ => None,
        }
    }

    /// Returns the name of the rounding mode.
    pub fn as_string(&self) -> &'static str {
        match self {
            RoundingMode::NearestTiesToEven => "NearestTiesToEven",
            RoundingMode::NearestTiesToAway => "NearestTiesToAway",
            RoundingMode::Zero => "Zero",
            RoundingMode::Positive => "Positive",
            RoundingMode::Negative => "Negative",
        }
    }
}

/// Declare the different categories of the floating point number. These
/// categories are internal to the float, and can be accessed by the accessors:
/// is_inf, is_zero, is_nan, is_normal. Denormals count as Normal, because they
/// are finite nonzero values; use `is_denormal` to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Category {
    Infinity,
    NaN,
    Normal,
    Zero,
}

// IEEE 754-2019
// Table 3.5, binary interchange format parameters, for binary16.

/// The number of bits in the exponent field.
pub(crate) const EXP_BITS: usize = 5;
/// The number of bits in the mantissa field (the implicit bit not included).
pub(crate) const MAN_BITS: usize = 10;
/// The number of bits in the significand, including the implicit bit.
pub(crate) const PRECISION: usize = MAN_BITS + 1;
/// The exponent bias, as a positive number.
/// https://en.wikipedia.org/wiki/IEEE_754#Basic_and_interchange_formats
pub(crate) const BIAS: i32 = 15;
/// The lowest exponent of a normal value. Denormals share it.
pub(crate) const EXP_MIN: i32 = -BIAS + 1;
/// The highest exponent of a normal value. The biased field value above it
/// is used for signaling.
pub(crate) const EXP_MAX: i32 = (1 << EXP_BITS) - BIAS - 2;
/// The exponent of the least significant mantissa bit of the smallest
/// normal, which is also the exponent of every denormal value.
pub(crate) const LSB_EXP_MIN: i32 = EXP_MIN - MAN_BITS as i32;
/// The mantissa bit that marks a NaN as quiet.
pub(crate) const QUIET_BIT: u16 = 1 << (MAN_BITS - 1);

/// This is the main data structure of this library. It holds a half-precision
/// (IEEE-754 binary16) value as its raw 16-bit encoding: one sign bit, five
/// exponent bits and ten mantissa bits. The type stores bits, not a widened
/// value, so every encoding round-trips exactly, including denormals and the
/// NaN payloads.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct F16(u16);

impl F16 {
    /// Create a new value from the raw binary16 encoding `bits`.
    pub const fn from_bits(bits: u16) -> Self {
        F16(bits)
    }

    /// Returns the raw binary16 encoding.
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Returns a new zero float.
    pub fn zero(sign: bool) -> Self {
        F16((sign as u16) << (EXP_BITS + MAN_BITS))
    }

    /// Returns a new float with the value one.
    pub fn one(sign: bool) -> Self {
        let bits = ((sign as u16) << (EXP_BITS + MAN_BITS))
            | (BIAS as u16) << MAN_BITS;
        F16(bits)
    }

    /// Returns a new infinity float.
    pub fn inf(sign: bool) -> Self {
        let bits = ((sign as u16) << (EXP_BITS + MAN_BITS))
            | (mask(EXP_BITS) as u16) << MAN_BITS;
        F16(bits)
    }

    /// Returns a new NaN float (quiet, with an empty payload).
    pub fn nan(sign: bool) -> Self {
        F16(Self::inf(sign).0 | QUIET_BIT)
    }

    /// Returns the largest finite value (65504).
    pub fn largest(sign: bool) -> Self {
        let bits = ((sign as u16) << (EXP_BITS + MAN_BITS))
            | ((EXP_MAX + BIAS) as u16) << MAN_BITS
            | mask(MAN_BITS) as u16;
        F16(bits)
    }

    /// Returns the smallest nonzero value (the denormal 2^-24).
    pub fn smallest(sign: bool) -> Self {
        F16(((sign as u16) << (EXP_BITS + MAN_BITS)) | 1)
    }

    /// Returns the biased exponent field.
    pub(crate) fn biased_exp(&self) -> u16 {
        (self.0 >> MAN_BITS) & mask(EXP_BITS) as u16
    }

    /// Returns the mantissa field, without the implicit bit.
    pub(crate) fn mantissa_field(&self) -> u16 {
        self.0 & mask(MAN_BITS) as u16
    }

    /// Split a finite nonzero value into the exponent of its least
    /// significant mantissa bit and the mantissa itself, with the implicit
    /// bit added back for the normals.
    pub(crate) fn decompose(&self) -> (i32, u64) {
        debug_assert!(self.is_normal());
        let mantissa = self.mantissa_field() as u64;
        if self.biased_exp() == 0 {
            return (LSB_EXP_MIN, mantissa);
        }
        (
            self.biased_exp() as i32 - BIAS - MAN_BITS as i32,
            mantissa | 1u64 << MAN_BITS,
        )
    }

    /// Returns the sign of the float. True means negative.
    pub fn get_sign(&self) -> bool {
        (self.0 >> (EXP_BITS + MAN_BITS)) == 1
    }

    /// Returns true if the Float is negative
    pub fn is_negative(&self) -> bool {
        self.get_sign()
    }

    /// Returns true if the Float is +-inf.
    pub fn is_inf(&self) -> bool {
        self.biased_exp() == mask(EXP_BITS) as u16 && self.mantissa_field() == 0
    }

    /// Returns true if the Float is a +- NaN.
    pub fn is_nan(&self) -> bool {
        self.biased_exp() == mask(EXP_BITS) as u16 && self.mantissa_field() != 0
    }

    /// Returns true if the Float is a +- zero.
    pub fn is_zero(&self) -> bool {
        self.0 & mask(EXP_BITS + MAN_BITS) as u16 == 0
    }

    /// Returns true if this number is finite and nonzero (not Zero, NaN,
    /// Inf). Denormals are included; see `is_denormal`.
    pub fn is_normal(&self) -> bool {
        matches!(self.get_category(), Category::Normal)
    }

    /// Returns true if this number is denormal (the exponent field is zero
    /// and the mantissa is not).
    pub fn is_denormal(&self) -> bool {
        self.biased_exp() == 0 && self.mantissa_field() != 0
    }

    /// Returns the category of the float.
    pub fn get_category(&self) -> Category {
        if self.biased_exp() == mask(EXP_BITS) as u16 {
            if self.mantissa_field() == 0 {
                return Category::Infinity;
            }
            return Category::NaN;
        }
        if self.is_zero() {
            return Category::Zero;
        }
        Category::Normal
    }

    /// Returns a new float which has a flipped sign (negated value).
    pub fn neg(&self) -> Self {
        F16(self.0 ^ 1 << (EXP_BITS + MAN_BITS))
    }

    /// Prints the number using the internal representation.
    #[cfg(feature = "std")]
    pub fn dump(&self) {
        use std::println;
        let sign = if self.get_sign() { "-" } else { "+" };
        match self.get_category() {
            Category::NaN => {
                println!("[{}NaN payload=0x{:03x}]", sign, self.mantissa_field());
            }
            Category::Infinity => {
                println!("[{}Inf]", sign);
            }
            Category::Zero => {
                println!("[{}0.0]", sign);
            }
            Category::Normal => {
                let exp = if self.biased_exp() == 0 {
                    EXP_MIN
                } else {
                    self.biased_exp() as i32 - BIAS
                };
                println!(
                    "FP[{} E={:3} M=0x{:03x}]",
                    sign,
                    exp,
                    self.mantissa_field()
                );
            }
        }
    }
}

impl Neg for F16 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        F16::neg(&self)
    }
}

/// Reports the kind of values that are lost when we shift right bits. In some
/// context this used as the two guard bits.
#[derive(Debug, Clone, Copy)]
pub(crate) enum LossFraction {
    ExactlyZero,  //0000000
    LessThanHalf, //0xxxxxx
    ExactlyHalf,  //1000000
    MoreThanHalf, //1xxxxxx
}

impl LossFraction {
    pub fn is_exactly_zero(&self) -> bool {
        matches!(self, Self::ExactlyZero)
    }
    pub fn is_lt_half(&self) -> bool {
        matches!(self, Self::LessThanHalf) || self.is_exactly_zero()
    }
    pub fn is_exactly_half(&self) -> bool {
        matches!(self, Self::ExactlyHalf)
    }
    pub fn is_mt_half(&self) -> bool {
        matches!(self, Self::MoreThanHalf)
    }
    pub fn is_gte_half(&self) -> bool {
        self.is_mt_half() || self.is_exactly_half()
    }
}

//// Shift `val` right by `bits`, and report the loss.
pub(crate) fn shift_right_with_loss(
    val: u64,
    bits: usize,
) -> (u64, LossFraction) {
    if bits == 0 {
        return (val, LossFraction::ExactlyZero);
    }
    if bits >= 64 {
        // The whole value is shifted out. Bit 63 marks the halfway point
        // only when we shift by exactly 64; for wider shifts every bit sits
        // below it.
        let loss = if val == 0 {
            LossFraction::ExactlyZero
        } else if bits > 64 {
            LossFraction::LessThanHalf
        } else if val == 1 << 63 {
            LossFraction::ExactlyHalf
        } else if val >> 63 == 1 {
            LossFraction::MoreThanHalf
        } else {
            LossFraction::LessThanHalf
        };
        return (0, loss);
    }

    let half = 1u64 << (bits - 1);
    let rem = val & ((1u64 << bits) - 1);
    let loss = if rem == 0 {
        LossFraction::ExactlyZero
    } else if rem < half {
        LossFraction::LessThanHalf
    } else if rem == half {
        LossFraction::ExactlyHalf
    } else {
        LossFraction::MoreThanHalf
    };
    (val >> bits, loss)
}

#[test]
fn shift_right_fraction() {
    let res = shift_right_with_loss(0b10000000, 3);
    assert!(res.1.is_exactly_zero());

    let res = shift_right_with_loss(0b10000111, 3);
    assert!(res.1.is_mt_half());

    let res = shift_right_with_loss(0b10000100, 3);
    assert!(res.1.is_exactly_half());

    let res = shift_right_with_loss(0b10000001, 3);
    assert!(res.1.is_lt_half());

    // Shifts that drop the entire value.
    let res = shift_right_with_loss(1, 80);
    assert_eq!(res.0, 0);
    assert!(res.1.is_lt_half());

    let res = shift_right_with_loss(1 << 63, 64);
    assert!(res.1.is_exactly_half());

    let res = shift_right_with_loss(u64::MAX, 64);
    assert!(res.1.is_mt_half());
}

/// Returns true if we need to round away from zero (increment the mantissa),
/// having dropped `loss` from a result with the given `sign`, where `is_odd`
/// is the parity of the mantissa that remains.
pub(crate) fn need_round_away_from_zero(
    rm: RoundingMode,
    sign: bool,
    is_odd: bool,
    loss: LossFraction,
) -> bool {
    debug_assert!(!loss.is_exactly_zero());
    match rm {
        RoundingMode::Positive => !sign,
        RoundingMode::Negative => sign,
        RoundingMode::Zero => false,
        RoundingMode::NearestTiesToAway => loss.is_gte_half(),
        RoundingMode::NearestTiesToEven => {
            if loss.is_mt_half() {
                return true;
            }

            loss.is_exactly_half() && is_odd
        }
    }
}

/// The number overflowed. Returns the right value based on the rounding mode
/// and sign.
pub(crate) fn overflow(sign: bool, rm: RoundingMode) -> F16 {
    let inf = F16::inf(sign);
    let max = F16::largest(sign);

    match rm {
        RoundingMode::NearestTiesToEven => inf,
        RoundingMode::NearestTiesToAway => inf,
        RoundingMode::Zero => max,
        RoundingMode::Positive => {
            if sign {
                max
            } else {
                inf
            }
        }
        RoundingMode::Negative => {
            if sign {
                inf
            } else {
                max
            }
        }
    }
}

impl PartialEq for F16 {
    fn eq(&self, other: &Self) -> bool {
        // Widening to f32 is exact, so the native comparison gives the IEEE
        // behavior: NaN is unequal to everything, and -0.0 equals +0.0.
        self.to_f32() == other.to_f32()
    }
}

/// Page 66. Chapter 3. Floating-Point Formats and Environment
/// Table 3.8: Comparison predicates and the four relations.
impl PartialOrd for F16 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f32().partial_cmp(&other.to_f32())
    }
}

#[test]
fn test_constructors() {
    assert_eq!(F16::zero(false).to_bits(), 0x0000);
    assert_eq!(F16::zero(true).to_bits(), 0x8000);
    assert_eq!(F16::one(false).to_bits(), 0x3C00);
    assert_eq!(F16::one(true).to_bits(), 0xBC00);
    assert_eq!(F16::inf(false).to_bits(), 0x7C00);
    assert_eq!(F16::inf(true).to_bits(), 0xFC00);
    assert_eq!(F16::largest(false).to_bits(), 0x7BFF);
    assert_eq!(F16::smallest(false).to_bits(), 0x0001);
    assert_eq!(F16::smallest(true).to_bits(), 0x8001);
    assert!(F16::nan(false).is_nan());
    assert!(F16::nan(true).is_nan());
    assert!(F16::nan(true).is_negative());
    assert_eq!(F16::default().to_bits(), 0x0000);
}

#[test]
fn test_one_imm() {
    let x = F16::one(false);
    assert_eq!(x.to_f32(), 1.0);
    assert_eq!(x.neg().to_f32(), -1.0);
    assert_eq!((-x).to_f32(), -1.0);
}

#[test]
fn test_category() {
    // Check the category and value of the different special encodings.
    assert_eq!(F16::from_bits(0x7C00).get_category(), Category::Infinity);
    assert_eq!(F16::from_bits(0xFC00).get_category(), Category::Infinity);
    assert_eq!(F16::from_bits(0x7C01).get_category(), Category::NaN);
    assert_eq!(F16::from_bits(0x7E00).get_category(), Category::NaN);
    assert_eq!(F16::from_bits(0x0000).get_category(), Category::Zero);
    assert_eq!(F16::from_bits(0x8000).get_category(), Category::Zero);
    assert_eq!(F16::from_bits(0x3C00).get_category(), Category::Normal);
    assert_eq!(F16::from_bits(0x0001).get_category(), Category::Normal);

    // Denormals are Normal for category purposes, with a dedicated accessor.
    assert!(F16::from_bits(0x0001).is_denormal());
    assert!(F16::from_bits(0x03FF).is_denormal());
    assert!(!F16::from_bits(0x0400).is_denormal());
    assert!(!F16::from_bits(0x0000).is_denormal());

    assert!(F16::from_bits(0xFC00).is_inf());
    assert!(F16::from_bits(0xFC00).is_negative());
    assert!(!F16::from_bits(0xFC00).is_nan());
    assert!(F16::from_bits(0xFE00).is_nan());
    assert!(!F16::from_bits(0xFE00).is_inf());
    assert!(F16::from_bits(0x8000).is_zero());
    assert!(!F16::from_bits(0x8001).is_zero());
}

#[test]
fn test_comparisons() {
    use super::utils::Lfsr;

    // Flip the encoding of a non-NaN value into an integer key that orders
    // the same way the values do (sign-magnitude to two's complement).
    fn key(bits: u16) -> i32 {
        if bits & 0x8000 != 0 {
            -((bits & 0x7FFF) as i32)
        } else {
            (bits & 0x7FFF) as i32
        }
    }

    let mut lfsr = Lfsr::new();
    for _ in 0..50000 {
        let r = lfsr.get32();
        let a = F16::from_bits(r as u16);
        let b = F16::from_bits((r >> 16) as u16);
        if a.is_nan() || b.is_nan() {
            assert!(a.partial_cmp(&b).is_none());
            continue;
        }
        let expected = key(a.to_bits()).cmp(&key(b.to_bits()));
        assert_eq!(a.partial_cmp(&b), Some(expected));
    }
}

#[test]
fn test_nan_comparisons() {
    let nan = F16::nan(false);
    let one = F16::one(false);
    assert!(nan != nan);
    assert!(!(nan == nan));
    assert!(!(nan < one));
    assert!(!(nan > one));
    assert!(nan.partial_cmp(&nan).is_none());

    // The two zeros are equal, in both directions.
    assert!(F16::zero(true) == F16::zero(false));
    assert!(F16::zero(false) >= F16::zero(true));
}

#[test]
fn test_rounding_mode_names() {
    let names = [
        "NearestTiesToEven",
        "NearestTiesToAway",
        "Zero",
        "Positive",
        "Negative",
    ];
    for name in names {
        let rm = RoundingMode::from_string(name).unwrap();
        assert_eq!(rm.as_string(), name);
    }
    assert!(RoundingMode::from_string("Sideways").is_none());
    assert!(RoundingMode::from_string("").is_none());
}
