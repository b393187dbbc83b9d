use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues,
/// starting at `hue_offset` degrees.
pub fn generate_palette(n: usize, hue_offset: f32) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (hue_offset + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0).round() as u8,
                (rgb.green * 255.0).round() as u8,
                (rgb.blue * 255.0).round() as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Trace colours
// ---------------------------------------------------------------------------

/// One colour per plotted trace.
#[derive(Debug, Clone, Copy)]
pub struct TraceColors {
    pub real: Color32,
    pub imag: Color32,
    pub spectrum: Color32,
}

impl Default for TraceColors {
    fn default() -> Self {
        // Start at blue so I, Q and the spectrum come out blue, magenta, green.
        match generate_palette(3, 210.0).as_slice() {
            &[real, imag, spectrum] => Self {
                real,
                imag,
                spectrum,
            },
            _ => Self {
                real: Color32::LIGHT_BLUE,
                imag: Color32::LIGHT_RED,
                spectrum: Color32::LIGHT_GREEN,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_size_and_distinct() {
        let colors = generate_palette(3, 210.0);
        assert_eq!(colors.len(), 3);
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
        assert!(generate_palette(0, 0.0).is_empty());
    }

    #[test]
    fn test_trace_colors_come_from_palette() {
        let colors = TraceColors::default();
        let palette = generate_palette(3, 210.0);
        assert_eq!(colors.real, palette[0]);
        assert_eq!(colors.imag, palette[1]);
        assert_eq!(colors.spectrum, palette[2]);
    }
}
