//! This module contains the implementation of string conversion.

use super::float::{Category, F16};
use core::fmt::{Debug, Display};

impl Display for F16 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.get_sign() { "-" } else { "" };
        match self.get_category() {
            Category::Infinity => write!(f, "{}Inf", sign),
            Category::NaN => write!(f, "{}NaN", sign),
            Category::Zero => write!(f, "{}0.0", sign),
            // Ten mantissa bits are not enough to print decimal digits
            // directly, so format the exact fp32 value instead.
            Category::Normal => write!(f, "{}", self.to_f32()),
        }
    }
}

impl Debug for F16 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "F16(0x{:04x} = {})", self.to_bits(), self)
    }
}

#[cfg(feature = "std")]
mod from {
    use core::fmt::{Debug, Display};
    use std::error::Error;

    use crate::F16;

    impl F16 {
        /// Try to construct a value from the string `value`. The text is
        /// parsed as an fp32 first and then narrowed, so the result is
        /// rounded twice, the way the hardware conversion path does it.
        pub fn try_from_str(value: &str) -> Result<Self, ParseError> {
            // Handle the empty case.
            if value.is_empty() {
                return Err(ParseError(ParseErrorKind::InputEmpty));
            }

            match value.parse::<f32>() {
                Ok(val) => Ok(Self::from_f32(val)),
                Err(_) => Err(ParseError(ParseErrorKind::ParsingNumberFailed)),
            }
        }
    }

    impl TryFrom<&str> for F16 {
        type Error = ParseError;

        fn try_from(value: &str) -> Result<Self, Self::Error> {
            Self::try_from_str(value)
        }
    }

    enum ParseErrorKind {
        InputEmpty,
        ParsingNumberFailed,
    }

    pub struct ParseError(ParseErrorKind);

    impl Error for ParseError {}

    impl Display for ParseError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            match self.0 {
                ParseErrorKind::ParsingNumberFailed => {
                    f.write_str("Failed parsing the floating point number")
                }
                ParseErrorKind::InputEmpty => {
                    f.write_str("The input provided was empty")
                }
            }
        }
    }

    impl Debug for ParseError {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            Display::fmt(&self, f)
        }
    }
}

#[cfg(feature = "std")]
#[test]
fn test_convert_to_string() {
    use std::format;
    use std::string::String;

    fn to_str(val: f64) -> String {
        format!("{}", F16::from_f64(val))
    }

    assert_eq!("0.0", to_str(0.));
    assert_eq!("-0.0", to_str(-0.));
    assert_eq!("4.5", to_str(4.5));
    assert_eq!("-1.5", to_str(-1.5));
    assert_eq!("256", to_str(256.));
    assert_eq!("Inf", to_str(65534.));
    assert_eq!("-Inf", to_str(-65534.));
    assert_eq!("NaN", to_str(f64::NAN));
    // The nearest binary16 values of 0.3 and 0.1, printed through fp32.
    assert_eq!("0.30004883", to_str(0.3));
    assert_eq!("0.099975586", to_str(0.1));
}

#[cfg(feature = "std")]
#[test]
fn test_from_string() {
    use std::string::ToString;

    assert_eq!("-3", F16::try_from("-3.0").unwrap().to_string());
    assert_eq!("30", F16::try_from("30").unwrap().to_string());
    assert_eq!("32", F16::try_from("3.2e1").unwrap().to_string());
    assert_eq!("Inf", F16::try_from("inf").unwrap().to_string());
    assert_eq!("NaN", F16::try_from("nan").unwrap().to_string());

    assert_eq!(F16::try_from("0.5").unwrap().to_bits(), 0x3800);
    assert_eq!(F16::try_from("5.2").unwrap().to_bits(), 0x4533);
    assert_eq!(F16::try_from("-0.0").unwrap().to_bits(), 0x8000);
    assert_eq!(F16::try_from("65504").unwrap().to_bits(), 0x7BFF);
    // Out-of-range values overflow, like every other narrowing.
    assert_eq!(F16::try_from("1e10").unwrap().to_bits(), 0x7C00);

    assert!(F16::try_from("abc.de").is_err());
    assert!(F16::try_from("e.-21").is_err());
    assert!(F16::try_from("").is_err());
}

#[cfg(feature = "std")]
#[test]
fn test_debug_format() {
    use std::format;

    assert_eq!(format!("{:?}", F16::from_bits(0x3E00)), "F16(0x3e00 = 1.5)");
    assert_eq!(format!("{:?}", F16::zero(true)), "F16(0x8000 = -0.0)");
    assert_eq!(format!("{:?}", F16::inf(false)), "F16(0x7c00 = Inf)");
}
