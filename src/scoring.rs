//! Similarity scoring between a target and a guess.
//!
//! The score is `10 * max(0, 1 - d / d_max)` where `d` is the Euclidean RGB
//! distance and `d_max` the black-to-white distance, rounded to two decimals
//! half away from zero.

use std::fmt;

use crate::color::HexColor;
use crate::error::ColorFormatError;

/// `sqrt(3 * 255^2)`, the distance between black and white.
pub const MAX_DISTANCE: f64 = 441.672_955_930_063_7;

/// Best possible score for a single round.
pub const MAX_ROUND_SCORE: f64 = 10.0;

/// Score `guess` against `target` on a 0-10 scale.
pub fn score(target: &HexColor, guess: &HexColor) -> f64 {
    let distance = target.to_rgb().distance(guess.to_rgb());
    let similarity = (1.0 - distance / MAX_DISTANCE).max(0.0);
    round_half_away(similarity * MAX_ROUND_SCORE, 2)
}

/// String entry point to [`score`]. Both inputs must pass `is_valid_color`.
pub fn score_hex(target: &str, guess: &str) -> Result<f64, ColorFormatError> {
    let target = HexColor::parse(target)?;
    let guess = HexColor::parse(guess)?;
    Ok(score(&target, &guess))
}

/// Round to `places` decimals, ties away from zero.
pub fn round_half_away(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Qualitative band a round score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Printer,
    Great,
    Close,
    Hemisphere,
    Miss,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        if score >= 9.5 {
            Verdict::Printer
        } else if score >= 8.0 {
            Verdict::Great
        } else if score >= 6.0 {
            Verdict::Close
        } else if score >= 3.0 {
            Verdict::Hemisphere
        } else {
            Verdict::Miss
        }
    }

    pub fn remark(self) -> &'static str {
        match self {
            Verdict::Printer => "Unbelievable. You are a printer.",
            Verdict::Great => "Great job. Almost perfect.",
            Verdict::Close => "Not bad. You're getting there.",
            Verdict::Hemisphere => "Right hemisphere. Wrong everything.",
            Verdict::Miss => "Are you even looking at the screen?",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.remark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> HexColor {
        HexColor::parse(s).unwrap()
    }

    #[test]
    fn identical_colors_score_ten() {
        for s in ["#3498DB", "#000000", "#FFFFFF", "#123456", "#F80"] {
            assert_eq!(score(&hex(s), &hex(s)), 10.0);
        }
    }

    #[test]
    fn black_versus_white_scores_zero() {
        assert_eq!(score(&HexColor::BLACK, &HexColor::WHITE), 0.0);
        assert_eq!(score_hex("#000000", "#FFFFFF").unwrap(), 0.0);
    }

    #[test]
    fn red_versus_green() {
        // d = sqrt(2) * 255 = 360.6245, similarity = 0.183503
        assert_eq!(score_hex("#FF0000", "#00FF00").unwrap(), 1.84);
    }

    #[test]
    fn small_offsets() {
        // d = 10 → 10 * (1 - 10 / 441.673) = 9.7736
        assert_eq!(score_hex("#000000", "#0A0000").unwrap(), 9.77);
        // d = sqrt(3) * 0x88 = 235.559 → 4.6667
        assert_eq!(score_hex("#000", "#888").unwrap(), 4.67);
    }

    #[test]
    fn symmetric_and_bounded() {
        let colors = ["#000000", "#FFFFFF", "#FF0000", "#00FF88", "#3498DB", "#808080", "#0F0F0F"];
        for a in colors {
            for b in colors {
                let ab = score_hex(a, b).unwrap();
                assert_eq!(ab, score_hex(b, a).unwrap());
                assert!((0.0..=10.0).contains(&ab));
                assert_eq!(round_half_away(ab, 2), ab);
            }
        }
    }

    #[test]
    fn malformed_input_fails_loudly() {
        let err = score_hex("#FF0000", "#FF00").unwrap_err();
        assert_eq!(err.input, "#FF00");
        assert!(score_hex("FF0000", "#FF0000").is_err());
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_half_away(2.5, 0), 3.0);
        assert_eq!(round_half_away(-2.5, 0), -3.0);
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(48.25, 1), 48.3);
    }

    #[test]
    fn verdict_bands() {
        assert_eq!(Verdict::from_score(10.0), Verdict::Printer);
        assert_eq!(Verdict::from_score(9.5), Verdict::Printer);
        assert_eq!(Verdict::from_score(9.49), Verdict::Great);
        assert_eq!(Verdict::from_score(8.0), Verdict::Great);
        assert_eq!(Verdict::from_score(6.0), Verdict::Close);
        assert_eq!(Verdict::from_score(3.0), Verdict::Hemisphere);
        assert_eq!(Verdict::from_score(2.99), Verdict::Miss);
        assert_eq!(Verdict::Miss.to_string(), "Are you even looking at the screen?");
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use crate::color::Rgb;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn score_is_bounded_and_symmetric(
                a in any::<(u8, u8, u8)>(),
                b in any::<(u8, u8, u8)>()
            ) {
                let x = HexColor::from_rgb(Rgb::new(a.0, a.1, a.2));
                let y = HexColor::from_rgb(Rgb::new(b.0, b.1, b.2));
                let s = score(&x, &y);
                prop_assert!((0.0..=MAX_ROUND_SCORE).contains(&s));
                prop_assert_eq!(s, score(&y, &x));
                prop_assert_eq!(score(&x, &x), MAX_ROUND_SCORE);
            }
        }
    }
}
