use crate::{f16_to_f32_vec, RoundingMode, F16};
use pyo3::prelude::*;
use std::format;
use std::string::String;
use std::string::ToString;
use std::vec::Vec;

/// A class representing an IEEE 754 binary16 value by its 16-bit encoding.
///
/// The class stores raw bits, so every encoding round-trips exactly,
/// including the denormals and the NaN payloads.
#[pyclass]
struct PyF16 {
    inner: F16,
}

#[pymethods]
impl PyF16 {
    /// Create a new value from a raw binary16 encoding.
    ///
    /// Args:
    ///     bits: The 16-bit encoding (sign, exponent, mantissa)
    #[new]
    fn new(bits: u16) -> Self {
        PyF16 {
            inner: F16::from_bits(bits),
        }
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
    fn __repr__(&self) -> String {
        self.__str__()
    }
    /// Returns the raw 16-bit encoding.
    fn bits(&self) -> u16 {
        self.inner.to_bits()
    }
    /// Returns the category of the float.
    fn get_category(&self) -> String {
        format!("{:?}", self.inner.get_category())
    }
    /// Returns true if the Float is negative.
    fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }
    /// Returns true if the Float is +-inf.
    fn is_inf(&self) -> bool {
        self.inner.is_inf()
    }
    /// Returns true if the Float is a +- NaN.
    fn is_nan(&self) -> bool {
        self.inner.is_nan()
    }
    /// Returns true if the Float is a +- zero.
    fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    /// Returns true if this number is finite and nonzero (not Zero, NaN, Inf).
    fn is_normal(&self) -> bool {
        self.inner.is_normal()
    }
    /// Returns true if this number is denormal.
    fn is_denormal(&self) -> bool {
        self.inner.is_denormal()
    }
    /// Convert to f64. The widening is exact.
    fn to_float64(&self) -> f64 {
        self.inner.to_f64()
    }
    /// Convert and return the rounded integral part, using the rounding
    /// mode named by `rm`: "NearestTiesToEven", "NearestTiesToAway",
    /// "Zero", "Positive", "Negative".
    fn to_int(&self, rm: &str) -> i64 {
        let rm = RoundingMode::from_string(rm);
        assert!(rm.is_some(), "Invalid rounding mode");
        self.inner.to_i64(rm.unwrap())
    }
    /// Returns the number with the sign flipped.
    fn neg(&self) -> PyF16 {
        PyF16 {
            inner: self.inner.neg(),
        }
    }
    /// Returns the number with the sign flipped.
    fn __neg__(&self) -> PyF16 {
        self.neg()
    }
    /// Returns true if the number is less than the other number.
    fn __lt__(&self, other: &PyF16) -> bool {
        self.inner < other.inner
    }
    /// Returns true if the number is less than or equal to the other number.
    fn __le__(&self, other: &PyF16) -> bool {
        self.inner <= other.inner
    }
    /// Returns true if the number is equal to the other number.
    fn __eq__(&self, other: &PyF16) -> bool {
        self.inner == other.inner
    }
    /// Returns true if the number is not equal to the other number.
    fn __ne__(&self, other: &PyF16) -> bool {
        self.inner != other.inner
    }
    /// Returns true if the number is greater than the other number.
    fn __gt__(&self, other: &PyF16) -> bool {
        self.inner > other.inner
    }
    /// Returns true if the number is greater than or equal to the other number.
    fn __ge__(&self, other: &PyF16) -> bool {
        self.inner >= other.inner
    }
    /// Prints the number using the internal representation.
    fn dump(&self) {
        self.inner.dump();
    }
} // impl PyF16

/// Returns a new value narrowed from the fp64 value 'val', rounding to the
/// nearest even.
///
/// Args:
///     val: The f64 value
#[pyfunction]
fn from_fp64(val: f64) -> PyResult<PyF16> {
    Ok(PyF16 {
        inner: F16::from_f64(val),
    })
}

/// Returns a new value narrowed from the fp64 value 'val' with the given
/// rounding mode.
///
/// Args:
///     val: The f64 value
///     rm: The rounding mode name
#[pyfunction]
fn from_fp64_with_rm(val: f64, rm: &str) -> PyResult<PyF16> {
    let rm = RoundingMode::from_string(rm);
    assert!(rm.is_some(), "Invalid rounding mode");
    Ok(PyF16 {
        inner: F16::from_f64_with_rm(val, rm.unwrap()),
    })
}

/// Returns a new value with the integer value 'val'.
///
/// Args:
///     val: The integer value
#[pyfunction]
fn from_i64(val: i64) -> PyResult<PyF16> {
    Ok(PyF16 {
        inner: F16::from_i64(val),
    })
}

/// Returns the number zero.
#[pyfunction]
fn zero() -> PyResult<PyF16> {
    Ok(PyF16 {
        inner: F16::zero(false),
    })
}

/// Returns a list of binary16 encodings narrowed from a list of fp64
/// values, rounding each one to the nearest even.
///
/// Args:
///     values: The list of f64 values
#[pyfunction]
fn narrow_list(values: Vec<f64>) -> PyResult<Vec<u16>> {
    Ok(values.iter().map(|v| F16::from_f64(*v).to_bits()).collect())
}

/// Returns a list of fp64 values widened from a list of binary16 encodings.
/// The widening is exact.
///
/// Args:
///     bits: The list of 16-bit encodings
#[pyfunction]
fn widen_list(bits: Vec<u16>) -> PyResult<Vec<f64>> {
    Ok(f16_to_f32_vec(&bits).iter().map(|v| *v as f64).collect())
}

#[pymodule]
fn _halfbits(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyF16>()?;

    // Add the functions to the module
    m.add_function(wrap_pyfunction!(from_fp64, m)?)?;
    m.add_function(wrap_pyfunction!(from_fp64_with_rm, m)?)?;
    m.add_function(wrap_pyfunction!(from_i64, m)?)?;
    m.add_function(wrap_pyfunction!(zero, m)?)?;
    m.add_function(wrap_pyfunction!(narrow_list, m)?)?;
    m.add_function(wrap_pyfunction!(widen_list, m)?)?;
    Ok(())
}
