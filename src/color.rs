use egui::Color32;

/// Blend two colors by averaging each RGB channel.
///
/// The average is rounded toward zero and the result is always opaque.
/// Blending is commutative but not associative, so repeatedly blending
/// into the same color drifts toward it.
pub fn blend(a: Color32, b: Color32) -> Color32 {
    Color32::from_rgb(
        average(a.r(), b.r()),
        average(a.g(), b.g()),
        average(a.b(), b.b()),
    )
}

fn average(a: u8, b: u8) -> u8 {
    ((u16::from(a) + u16::from(b)) / 2) as u8
}

/// Format a color as `#rrggbb`, ignoring alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
