use std::env;

use halfbits::{load_f16, store_f16, F16};

///! Converts a number to binary16 and prints the encoding.
///!  cargo run --example convert --release 3.14159

fn main() {
    let args: Vec<String> = env::args().collect();

    let value: f32;

    match args.len() {
        2 => match args[1].parse::<f32>() {
            Ok(x) => value = x,
            Err(_) => {
                println!("Not a number");
                return;
            }
        },
        _ => {
            println!("Usage: convert [value]");
            return;
        }
    }

    let mut slot: u16 = 0;
    store_f16(value, &mut slot);
    let back = load_f16(slot);

    println!("fp32 input:      {}", value);
    println!("binary16:        0x{:04x}", slot);
    println!("fp32 round trip: {}", back);
    println!("error:           {}", (value - back).abs());
    F16::from_bits(slot).dump();
}
