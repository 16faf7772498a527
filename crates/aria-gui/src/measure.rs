//! Text measurement seam for auto-fit sizing.
//!
//! This module provides a backend-agnostic trait for measuring a rendered
//! line of text, including the ink overhangs the fit test needs. It keeps the
//! core free of any specific text engine (cosmic-text, etc.). Backends like
//! `aria-gui-text` implement the trait; tests and headless demos can use the
//! built-in [`MonospaceMeasurer`].

/// Font style variant forwarded to the measurement backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

/// Font width class forwarded to the measurement backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontStretch {
    Condensed,
    #[default]
    Normal,
    Expanded,
}

/// CSS-style numeric font weight (400 = normal, 700 = bold).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: Self = Self(400);
    pub const BOLD: Self = Self(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Opaque font descriptor.
///
/// The core never interprets this; it is carried through to the measurement
/// backend unchanged. `family: None` means the backend's default face.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontSpec {
    pub family: Option<String>,
    pub style: FontStyle,
    pub weight: FontWeight,
    pub stretch: FontStretch,
}

impl FontSpec {
    /// Create a descriptor for the backend's default face.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font family name (backend-defined meaning).
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Set the style variant.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the numeric weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the width class.
    pub fn with_stretch(mut self, stretch: FontStretch) -> Self {
        self.stretch = stretch;
        self
    }
}

/// Request to measure a single line of text at one font size.
#[derive(Debug, Clone)]
pub struct MeasureRequest<'a> {
    pub text: &'a str,
    /// Font size in logical units.
    pub font_size: f32,
    pub font: &'a FontSpec,
    /// Multiplier from logical units to physical pixels for the target
    /// display. Backends shape at physical size and report logical metrics.
    pub pixel_scale: f32,
}

/// Measured metrics for one rendered line.
///
/// `width` and `height` are the nominal advance width and line box height.
/// The overhangs describe ink painting outside that box: above it
/// (`overhang_leading`), below it (`overhang_after`), and past the advance
/// width (`overhang_trailing`). Backends that cannot observe ink report
/// zeroes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    pub overhang_leading: f32,
    pub overhang_after: f32,
    pub overhang_trailing: f32,
}

impl TextMetrics {
    /// Metrics with no overhang, for backends with box-only information.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            overhang_leading: 0.0,
            overhang_after: 0.0,
            overhang_trailing: 0.0,
        }
    }

    /// Height the fit test compares against the label bounds.
    ///
    /// Ink bleeding past the nominal box on the ascent and descent sides is
    /// added; ink past the advance width extends sideways, not down, and is
    /// subtracted back out.
    pub fn fitted_height(&self) -> f32 {
        self.height + self.overhang_leading + self.overhang_after - self.overhang_trailing
    }
}

/// Backend-agnostic text measurement.
///
/// Implementations must be deterministic: the same request yields the same
/// metrics. Shaping caches are why the receiver is `&mut self`.
pub trait TextMeasurer {
    /// Measure a single line of text. Never fails; a backend with no usable
    /// face for the text reports zero metrics.
    fn measure(&mut self, request: MeasureRequest<'_>) -> TextMetrics;
}

/// Fixed-advance measurer for tests and headless use.
///
/// Every character advances `advance_em * font_size` and the line box is
/// `line_em * font_size` tall, with no overhangs. Widths grow strictly with
/// font size, which is all the auto-fit scan relies on.
#[derive(Clone, Copy, Debug)]
pub struct MonospaceMeasurer {
    /// Per-character advance as a fraction of the font size.
    pub advance_em: f32,
    /// Line box height as a fraction of the font size.
    pub line_em: f32,
}

impl MonospaceMeasurer {
    pub const fn new() -> Self {
        Self {
            advance_em: 0.6,
            line_em: 1.2,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&mut self, request: MeasureRequest<'_>) -> TextMetrics {
        let chars = request.text.chars().count() as f32;
        TextMetrics::new(
            chars * self.advance_em * request.font_size,
            self.line_em * request.font_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_height_applies_overhang_correction() {
        let metrics = TextMetrics {
            width: 100.0,
            height: 40.0,
            overhang_leading: 2.0,
            overhang_after: 3.0,
            overhang_trailing: 1.0,
        };

        assert_eq!(metrics.fitted_height(), 44.0);
    }

    #[test]
    fn monospace_scales_with_font_size_and_length() {
        let mut measurer = MonospaceMeasurer::new();
        let font = FontSpec::new();

        let small = measurer.measure(MeasureRequest {
            text: "Kupo!",
            font_size: 10.0,
            font: &font,
            pixel_scale: 1.0,
        });
        let large = measurer.measure(MeasureRequest {
            text: "Kupo!",
            font_size: 20.0,
            font: &font,
            pixel_scale: 1.0,
        });

        assert_eq!(small.width, 30.0);
        assert_eq!(small.height, 12.0);
        assert_eq!(large.width, 60.0);
        assert!(large.width > small.width);
    }
}
