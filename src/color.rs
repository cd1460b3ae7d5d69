use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Chart accent colors (matching the original dashboard palette)
// ---------------------------------------------------------------------------

/// Monthly trend line.
pub const MONTHLY: Color32 = Color32::from_rgb(31, 119, 180);
/// Seasonal bars.
pub const SEASONAL: Color32 = Color32::from_rgb(135, 206, 235);
/// Daily trend line.
pub const DAILY: Color32 = Color32::from_rgb(44, 160, 44);
/// Heatmap cells with no defined correlation.
pub const UNDEFINED: Color32 = Color32::from_rgb(96, 96, 96);

// ---------------------------------------------------------------------------
// Diverging colour map for the correlation heatmap
// ---------------------------------------------------------------------------

const COOL: (f32, f32, f32) = (0.13, 0.40, 0.67);
const WARM: (f32, f32, f32) = (0.70, 0.09, 0.17);

/// Map a correlation coefficient in [-1, 1] to an RdBu-style colour:
/// saturated blue at -1, white at 0, saturated red at +1.
pub fn diverging(r: f64) -> Color32 {
    let t = r.clamp(-1.0, 1.0) as f32;
    let white: LinSrgb = Srgb::new(1.0, 1.0, 1.0).into_linear();
    let end: LinSrgb = if t < 0.0 {
        Srgb::new(COOL.0, COOL.1, COOL.2).into_linear()
    } else {
        Srgb::new(WARM.0, WARM.1, WARM.2).into_linear()
    };
    let mixed = white.mix(end, t.abs());
    let rgb: Srgb = Srgb::from_linear(mixed);
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Pick black or white annotation text for readability on a cell colour.
pub fn annotation_for(cell: Color32) -> Color32 {
    let luma = 0.299 * cell.r() as f32 + 0.587 * cell.g() as f32 + 0.114 * cell.b() as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diverging_endpoints_and_midpoint() {
        assert_eq!(diverging(0.0), Color32::WHITE);

        let cold = diverging(-1.0);
        assert!(cold.b() > cold.r(), "negative end should be blue: {cold:?}");

        let hot = diverging(1.0);
        assert!(hot.r() > hot.b(), "positive end should be red: {hot:?}");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(diverging(5.0), diverging(1.0));
        assert_eq!(diverging(-5.0), diverging(-1.0));
    }
}
