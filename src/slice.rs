//! This module contains the conversion routines that operate on whole
//! buffers of values, the way image and weight data is usually stored.

extern crate alloc;

use super::float::F16;
use alloc::vec::Vec;

/// Narrows `src` into `dst`, element by element, rounding to the nearest
/// even. The slices must have the same length.
pub fn f32_to_f16_slice(src: &[f32], dst: &mut [u16]) {
    assert_eq!(src.len(), dst.len());
    for (v, out) in src.iter().zip(dst.iter_mut()) {
        *out = F16::from_f32(*v).to_bits();
    }
}

/// Widens the encodings in `src` into `dst`, element by element. The
/// widening is exact. The slices must have the same length.
pub fn f16_to_f32_slice(src: &[u16], dst: &mut [f32]) {
    assert_eq!(src.len(), dst.len());
    for (bits, out) in src.iter().zip(dst.iter_mut()) {
        *out = F16::from_bits(*bits).to_f32();
    }
}

/// Narrows `src` into a new buffer of binary16 encodings.
pub fn f32_to_f16_vec(src: &[f32]) -> Vec<u16> {
    src.iter().map(|v| F16::from_f32(*v).to_bits()).collect()
}

/// Widens the encodings in `src` into a new buffer of fp32 values.
pub fn f16_to_f32_vec(src: &[u16]) -> Vec<f32> {
    src.iter().map(|bits| F16::from_bits(*bits).to_f32()).collect()
}

/// Converts bytes into fp32 values, for pixel data that arrives as u8.
/// Every byte value is exactly representable. The slices must have the
/// same length.
pub fn u8_to_f32_slice(src: &[u8], dst: &mut [f32]) {
    assert_eq!(src.len(), dst.len());
    for (v, out) in src.iter().zip(dst.iter_mut()) {
        *out = *v as f32;
    }
}

/// Converts bytes into a new buffer of fp32 values.
pub fn u8_to_f32_vec(src: &[u8]) -> Vec<f32> {
    src.iter().map(|v| *v as f32).collect()
}

#[test]
fn test_slice_conversion() {
    let values = [0.0_f32, -0.0, 1.0, 1.5, -2.75, 65504.0, 0.1];
    let mut bits = [0u16; 7];
    f32_to_f16_slice(&values, &mut bits);
    assert_eq!(bits[0], 0x0000);
    assert_eq!(bits[1], 0x8000);
    assert_eq!(bits[2], 0x3C00);
    assert_eq!(bits[3], 0x3E00);
    assert_eq!(bits[4], 0xC180);
    assert_eq!(bits[5], 0x7BFF);

    let mut wide = [0f32; 7];
    f16_to_f32_slice(&bits, &mut wide);
    for (w, v) in wide.iter().zip(values.iter()) {
        assert_eq!(*w, F16::from_f32(*v).to_f32());
    }
    // The exactly representable prefix survives unchanged.
    assert_eq!(wide[..6], values[..6]);
}

#[test]
fn test_vec_conversion() {
    // Halves up to 64 are exact in binary16, so the round trip is clean.
    let values: Vec<f32> = (0..256).map(|i| i as f32 * 0.5 - 64.0).collect();
    let bits = f32_to_f16_vec(&values);
    let wide = f16_to_f32_vec(&bits);
    assert_eq!(values, wide);

    // The slice and vec paths produce the same encodings.
    let mut bits2 = [0u16; 256];
    f32_to_f16_slice(&values, &mut bits2);
    assert_eq!(bits[..], bits2[..]);
}

#[test]
fn test_u8_conversion() {
    let pixels = [0u8, 1, 127, 128, 255];
    let mut out = [0f32; 5];
    u8_to_f32_slice(&pixels, &mut out);
    assert_eq!(out, [0.0, 1.0, 127.0, 128.0, 255.0]);
    assert_eq!(u8_to_f32_vec(&pixels), [0.0, 1.0, 127.0, 128.0, 255.0]);
}

#[test]
fn test_slice_specials() {
    let values = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1e10, -1e-20];
    let bits = f32_to_f16_vec(&values);
    assert_eq!(bits[0], 0x7E00);
    assert_eq!(bits[1], 0x7C00);
    assert_eq!(bits[2], 0xFC00);
    assert_eq!(bits[3], 0x7C00);
    assert_eq!(bits[4], 0x8000);

    let wide = f16_to_f32_vec(&bits);
    assert!(wide[0].is_nan());
    assert_eq!(wide[1], f32::INFINITY);
    assert_eq!(wide[2], f32::NEG_INFINITY);
    assert_eq!(wide[3], f32::INFINITY);
    assert_eq!(wide[4].to_bits(), 0x8000_0000);
}
