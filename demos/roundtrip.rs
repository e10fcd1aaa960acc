use halfbits::{Category, F16};

///! Sweeps all 65536 binary16 encodings and prints a round-trip summary.
///!  cargo run --example roundtrip --release

fn main() {
    let mut normals = 0;
    let mut denormals = 0;
    let mut zeros = 0;
    let mut infinities = 0;
    let mut nans = 0;
    let mut exact = 0;

    for bits in 0..=u16::MAX {
        let h = F16::from_bits(bits);
        match h.get_category() {
            Category::Normal => {
                if h.is_denormal() {
                    denormals += 1;
                } else {
                    normals += 1;
                }
            }
            Category::Zero => zeros += 1,
            Category::Infinity => infinities += 1,
            Category::NaN => nans += 1,
        }

        // Signaling NaNs come back quiet; everything else is bit-exact.
        let back = F16::from_f32(h.to_f32());
        if back.to_bits() == bits {
            exact += 1;
        }
    }

    println!("normals:    {}", normals);
    println!("denormals:  {}", denormals);
    println!("zeros:      {}", zeros);
    println!("infinities: {}", infinities);
    println!("nans:       {}", nans);
    println!("bit-exact round trips: {} of 65536", exact);
}
