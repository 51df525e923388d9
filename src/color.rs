use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Mix, Srgb};

// ---------------------------------------------------------------------------
// Dashboard theme
// ---------------------------------------------------------------------------

pub const BACKGROUND: Color32 = Color32::from_rgb(0xF4, 0xF6, 0xFB);
pub const SIDEBAR: Color32 = Color32::from_rgb(0x0B, 0x0F, 0x19);
pub const PRIMARY: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);
pub const TITLE: Color32 = Color32::from_rgb(0x0F, 0x17, 0x2A);
pub const MUTED: Color32 = Color32::from_rgb(0x64, 0x74, 0x8B);
pub const TRACK: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);
pub const CARD: Color32 = Color32::WHITE;
pub const ERROR: Color32 = Color32::from_rgb(220, 53, 69);

/// Card shadow tint at rest and when hovered.
pub const SHADOW: Color32 = Color32::from_rgba_premultiplied(15, 23, 42, 20);
pub const SHADOW_HOVER: Color32 = Color32::from_rgba_premultiplied(9, 25, 59, 64);

// ---------------------------------------------------------------------------
// Bar gradient
// ---------------------------------------------------------------------------

/// `n` colours fading from the primary blue to a pale tint, so the most
/// important feature gets the strongest colour.
pub fn bar_gradient(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    let strong: Hsl = to_srgb(PRIMARY).into_color();
    let pale = Hsl::new(strong.hue, 0.75, 0.82);
    (0..n)
        .map(|i| {
            let t = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
            let rgb: Srgb = strong.mix(pale, t).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

fn to_srgb(c: Color32) -> Srgb {
    Srgb::new(
        c.r() as f32 / 255.0,
        c.g() as f32 / 255.0,
        c.b() as f32 / 255.0,
    )
}
