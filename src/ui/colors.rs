//! Shared color palette for the TUI.

use ratatui::style::Color;

use hexrecall::color::HexColor;

// ── Text over swatches ──────────────────────────────────────────────
pub const INK_ON_LIGHT: Color = Color::Rgb(0, 0, 0);
pub const INK_ON_DARK: Color = Color::Rgb(255, 255, 255);

// ── Score gradient ──────────────────────────────────────────────────
pub const SCORE_LOW: Color = Color::Rgb(180, 60, 60);
pub const SCORE_MID_LOW: Color = Color::Rgb(230, 160, 60);
pub const SCORE_MID_HIGH: Color = Color::Rgb(200, 200, 80);
pub const SCORE_HIGH: Color = Color::Rgb(80, 220, 120);

// ── Accent / chrome ─────────────────────────────────────────────────
pub const ACCENT_MUTED: Color = Color::Rgb(120, 120, 180);
pub const SHAKE: Color = Color::Rgb(230, 80, 80);
pub const MODAL_BG: Color = Color::Rgb(24, 24, 27);
pub const MODAL_TEXT_DIM: Color = Color::Rgb(150, 150, 160);

/// Terminal color for a game color.
pub fn swatch(color: HexColor) -> Color {
    let rgb = color.to_rgb();
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Readable text color over `background`.
pub fn ink(background: HexColor) -> Color {
    if background.is_dark() {
        INK_ON_DARK
    } else {
        INK_ON_LIGHT
    }
}

pub fn score_color(score: f64) -> Color {
    match score {
        s if s < 3.0 => SCORE_LOW,
        s if s < 6.0 => SCORE_MID_LOW,
        s if s < 8.0 => SCORE_MID_HIGH,
        _ => SCORE_HIGH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_copies_channels() {
        let c = HexColor::parse("#3498DB").unwrap();
        assert_eq!(swatch(c), Color::Rgb(0x34, 0x98, 0xDB));
    }

    #[test]
    fn ink_contrasts_background() {
        assert_eq!(ink(HexColor::BLACK), INK_ON_DARK);
        assert_eq!(ink(HexColor::WHITE), INK_ON_LIGHT);
    }

    #[test]
    fn score_gradient() {
        assert_eq!(score_color(0.0), SCORE_LOW);
        assert_eq!(score_color(2.99), SCORE_LOW);
        assert_eq!(score_color(3.0), SCORE_MID_LOW);
        assert_eq!(score_color(6.0), SCORE_MID_HIGH);
        assert_eq!(score_color(8.0), SCORE_HIGH);
        assert_eq!(score_color(10.0), SCORE_HIGH);
    }
}
