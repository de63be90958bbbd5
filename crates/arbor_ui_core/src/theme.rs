use gpui::{Hsla, Pixels, SharedString, hsla, px};

/// Design tokens: colors, typography, spacing, radii. Forest-dark palette.
pub struct ArborTheme {
    // Base
    pub bg_primary: Hsla,
    pub bg_secondary: Hsla,
    pub bg_tertiary: Hsla,
    pub bg_surface: Hsla,
    pub bg_overlay: Hsla,

    // Accent
    pub accent: Hsla,
    pub accent_muted: Hsla,
    pub accent_green: Hsla,
    pub accent_red: Hsla,
    pub accent_yellow: Hsla,

    // Text
    pub text_primary: Hsla,
    pub text_secondary: Hsla,
    pub text_muted: Hsla,

    // Borders
    pub border: Hsla,
    pub border_focus: Hsla,

    // Typography
    pub font_ui: SharedString,
    pub font_mono: SharedString,
    pub font_size_xs: Pixels,
    pub font_size_sm: Pixels,
    pub font_size_base: Pixels,
    pub font_size_lg: Pixels,
    pub font_size_xl: Pixels,

    // Spacing (4px grid)
    pub space_1: Pixels,
    pub space_2: Pixels,
    pub space_3: Pixels,
    pub space_4: Pixels,
    pub space_6: Pixels,
    pub space_8: Pixels,

    // Radii
    pub radius_sm: Pixels,
    pub radius_md: Pixels,
    pub radius_lg: Pixels,
}

impl ArborTheme {
    pub fn dark() -> Self {
        Self {
            // Base palette
            bg_primary: hex_to_hsla(0x10, 0x14, 0x12),
            bg_secondary: hex_to_hsla(0x15, 0x1B, 0x17),
            bg_tertiary: hex_to_hsla(0x20, 0x2A, 0x23),
            bg_surface: hex_to_hsla(0x19, 0x21, 0x1C),
            bg_overlay: hsla(0.0, 0.0, 0.0, 0.5),

            // Accents
            accent: hex_to_hsla(0x7F, 0xD9, 0x9A),
            accent_muted: hex_to_hsla(0x4E, 0x8A, 0x62),
            accent_green: hex_to_hsla(0xA6, 0xE3, 0xA1),
            accent_red: hex_to_hsla(0xE8, 0x7A, 0x90),
            accent_yellow: hex_to_hsla(0xF2, 0xD5, 0x9B),

            // Text
            text_primary: hex_to_hsla(0xE9, 0xF0, 0xEA),
            text_secondary: hex_to_hsla(0xB9, 0xC6, 0xBC),
            text_muted: hex_to_hsla(0x83, 0x93, 0x87),

            // Borders
            border: hex_to_hsla(0x2B, 0x38, 0x2F),
            border_focus: hsla(140.0 / 360.0, 0.6, 0.55, 0.5),

            // Typography
            font_ui: SharedString::from("Inter"),
            font_mono: SharedString::from("JetBrains Mono"),
            font_size_xs: px(11.0),
            font_size_sm: px(12.0),
            font_size_base: px(14.0),
            font_size_lg: px(16.0),
            font_size_xl: px(20.0),

            // Spacing (4px grid)
            space_1: px(4.0),
            space_2: px(8.0),
            space_3: px(12.0),
            space_4: px(16.0),
            space_6: px(24.0),
            space_8: px(32.0),

            // Radii
            radius_sm: px(4.0),
            radius_md: px(8.0),
            radius_lg: px(12.0),
        }
    }
}

/// Convert RGB bytes to GPUI Hsla color.
fn hex_to_hsla(r: u8, g: u8, b: u8) -> Hsla {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return hsla(0.0, 0.0, l, 1.0);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let h = if max == rf {
        ((gf - bf) / delta + if gf < bf { 6.0 } else { 0.0 }) / 6.0
    } else if max == gf {
        ((bf - rf) / delta + 2.0) / 6.0
    } else {
        ((rf - gf) / delta + 4.0) / 6.0
    };

    hsla(h, s, l, 1.0)
}
