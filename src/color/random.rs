use rand::Rng;

use super::mode::{DifficultyMode, PALETTE_BYTES};
use super::{HexColor, Rgb};

/// Draw a target color for `mode`.
///
/// Standard draws each of the six hex digits uniformly, which is the same as
/// drawing each channel byte uniformly. Constrained draws each channel from
/// [`PALETTE_BYTES`].
pub fn generate_random_color<R: Rng + ?Sized>(mode: DifficultyMode, rng: &mut R) -> HexColor {
    let mut channel = || match mode {
        DifficultyMode::Standard => {
            let hi: u8 = rng.gen_range(0..16);
            let lo: u8 = rng.gen_range(0..16);
            (hi << 4) | lo
        }
        DifficultyMode::Constrained => PALETTE_BYTES[rng.gen_range(0..PALETTE_BYTES.len())],
    };
    let r = channel();
    let g = channel();
    let b = channel();
    HexColor::from_rgb(Rgb::new(r, g, b))
}

/// [`generate_random_color`] using the thread-local RNG.
pub fn random_color(mode: DifficultyMode) -> HexColor {
    generate_random_color(mode, &mut rand::thread_rng())
}
