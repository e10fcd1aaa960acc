//! This file contains simple helper functions and test helpers.

/// Returns a mask full of 1s, of `b` bits.
pub fn mask(b: usize) -> usize {
    (1 << (b)) - 1
}

#[test]
fn test_masking() {
    assert_eq!(mask(0), 0x0);
    assert_eq!(mask(1), 0x1);
    assert_eq!(mask(5), 31);
    assert_eq!(mask(10), 1023);
}

#[cfg(feature = "std")]
#[allow(dead_code)]
/// Returns list of interesting values that various tests use to catch edge
/// cases around the binary16 range.
pub fn get_special_test_values() -> [f32; 20] {
    [
        -f32::NAN,
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        f32::EPSILON,
        f32::MIN,
        f32::MAX,
        65504.0,               // Largest binary16 normal.
        65520.0,               // First value that rounds to infinity.
        0.00006103515625,      // 2^-14, the smallest binary16 normal.
        5.9604644775390625e-8, // 2^-24, the smallest binary16 denormal.
        2.9802322387695312e-8, // 2^-25, the tie below the smallest denormal.
        core::f32::consts::PI,
        core::f32::consts::LN_2,
        core::f32::consts::SQRT_2,
        core::f32::consts::E,
        0.0,
        -0.0,
        10.,
        -10.,
    ]
}

// Linear-feedback shift register. We use this as a random number generator for
// tests.
pub struct Lfsr {
    state: u32,
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new()
    }
}

impl Lfsr {
    /// Generate a new LFSR number generator.
    pub fn new() -> Lfsr {
        Lfsr { state: 0x13371337 }
    }

    pub fn next(&mut self) {
        let a = (self.state >> 24) & 1;
        let b = (self.state >> 23) & 1;
        let c = (self.state >> 22) & 1;
        let d = (self.state >> 17) & 1;
        let n = a ^ b ^ c ^ d ^ 1;
        self.state <<= 1;
        self.state |= n;
    }

    pub fn get32(&mut self) -> u32 {
        let mut res: u32 = 0;
        for _ in 0..32 {
            self.next();
            res <<= 1;
            res ^= self.state & 0x1;
        }
        res
    }

    pub fn get64(&mut self) -> u64 {
        ((self.get32() as u64) << 32) | self.get32() as u64
    }
}

// Implement `Iterator` for `Lfsr`.
impl Iterator for Lfsr {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.get64())
    }
}

#[test]
fn test_lfsr_balance() {
    let mut lfsr = Lfsr::new();

    // Count the number of items, and the number of 1s.
    let mut items = 0;
    let mut ones = 0;

    for _ in 0..10000 {
        let mut u = lfsr.get32();
        for _ in 0..32 {
            items += 1;
            ones += u & 1;
            u >>= 1;
        }
    }
    // Make sure that we have around 50% 1s and 50% zeros.
    assert!((ones as f64) < (0.55 * items as f64));
    assert!((ones as f64) > (0.45 * items as f64));
}

#[test]
fn test_repetition() {
    let mut lfsr = Lfsr::new();
    let first = lfsr.get32();
    let second = lfsr.get32();

    // Make sure that the items don't repeat themselves too frequently.
    for _ in 0..30000 {
        assert_ne!(first, lfsr.get32());
        assert_ne!(second, lfsr.get32());
    }
}
