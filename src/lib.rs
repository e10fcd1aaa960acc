mod cast;
mod float;
#[cfg(feature = "python")]
mod py;
mod slice;
mod string;
mod utils;

pub use self::cast::{load_f16, store_f16};
pub use self::float::{Category, RoundingMode, F16};
pub use self::slice::{
    f16_to_f32_slice, f16_to_f32_vec, f32_to_f16_slice, f32_to_f16_vec, u8_to_f32_slice,
    u8_to_f32_vec,
};
