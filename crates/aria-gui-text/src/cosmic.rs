//! `cosmic-text` implementation of the measurement trait.
//!
//! This is intentionally conservative and focused on what auto-fit needs:
//! shaping a single line (no wrapping) and reporting its advance width, line
//! box height, and ink overhangs.

use aria_gui::{FontSpec, FontStretch, FontStyle, MeasureRequest, TextMeasurer, TextMetrics};
use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Stretch, Style, SwashCache, Weight,
};

/// Concrete measurer backed by `cosmic-text`.
///
/// Holds the font database and the shaping/raster caches, so measurement
/// takes `&mut self`. Construction loads the system font database; call
/// [`CosmicMeasurer::load_font_data`] to add faces in environments without
/// system fonts.
pub struct CosmicMeasurer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl CosmicMeasurer {
    /// Create a measurer over the system font database.
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Add a font from raw bytes (TTF/OTF); cosmic-text parses and stores it.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.font_system.db_mut().load_font_data(data);
    }

    /// Number of font faces available to the shaper.
    pub fn face_count(&self) -> usize {
        self.font_system.db().faces().count()
    }

    /// Access the underlying `FontSystem` for further customization.
    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }

    fn attrs<'a>(&self, font: &'a FontSpec) -> Attrs<'a> {
        let mut attrs = Attrs::new()
            .style(match font.style {
                FontStyle::Normal => Style::Normal,
                FontStyle::Italic => Style::Italic,
                FontStyle::Oblique => Style::Oblique,
            })
            .weight(Weight(font.weight.0))
            .stretch(match font.stretch {
                FontStretch::Condensed => Stretch::Condensed,
                FontStretch::Normal => Stretch::Normal,
                FontStretch::Expanded => Stretch::Expanded,
            });

        if let Some(family) = font.family.as_deref() {
            attrs = attrs.family(Family::Name(family));
        }

        attrs
    }
}

impl Default for CosmicMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicMeasurer {
    fn measure(&mut self, request: MeasureRequest<'_>) -> TextMetrics {
        if request.text.is_empty() {
            return TextMetrics::default();
        }

        // Shape at physical pixels so hinting and pixel-grid decisions match
        // what the display will show, then report logical units back.
        let scale = if request.pixel_scale > 0.0 {
            request.pixel_scale
        } else {
            1.0
        };
        let font_px = request.font_size * scale;

        let metrics = Metrics::new(font_px, font_px * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        // Prevent wrapping: a marquee line is shaped at unconstrained width.
        buffer.set_size(
            &mut self.font_system,
            Some(f32::MAX),
            Some(metrics.line_height),
        );

        let attrs = self.attrs(request.font);
        buffer.set_text(
            &mut self.font_system,
            request.text,
            &attrs,
            Shaping::Advanced,
            None,
        );
        buffer.shape_until_scroll(&mut self.font_system, false);

        let mut out = TextMetrics::default();

        // One line requested; use the first run. No run means no usable face
        // for this text, which degrades to zero metrics.
        if let Some(run) = buffer.layout_runs().next() {
            let line_w = run.line_w;
            let line_h = run.line_height;
            let baseline = run.line_y;

            // Ink extents from rasterizer placements. Swash reports `left`
            // and `top` relative to the pen position, with `top` measured
            // upward from the baseline.
            let mut ink_top = f32::MAX;
            let mut ink_bottom = f32::MIN;
            let mut ink_right = f32::MIN;
            let mut any_ink = false;

            for glyph in run.glyphs.iter() {
                let physical = glyph.physical((0.0, 0.0), 1.0);
                let image = match self
                    .swash_cache
                    .get_image(&mut self.font_system, physical.cache_key)
                    .clone()
                {
                    Some(image) => image,
                    None => continue,
                };

                if image.placement.width == 0 || image.placement.height == 0 {
                    continue;
                }

                let left = physical.x as f32 + image.placement.left as f32;
                let top = baseline + physical.y as f32 - image.placement.top as f32;

                ink_top = ink_top.min(top);
                ink_bottom = ink_bottom.max(top + image.placement.height as f32);
                ink_right = ink_right.max(left + image.placement.width as f32);
                any_ink = true;
            }

            out.width = line_w / scale;
            out.height = line_h / scale;

            if any_ink {
                out.overhang_leading = (-ink_top).max(0.0) / scale;
                out.overhang_after = (ink_bottom - line_h).max(0.0) / scale;
                out.overhang_trailing = (ink_right - line_w).max(0.0) / scale;
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(measurer: &mut CosmicMeasurer, text: &str, font_size: f32) -> TextMetrics {
        let font = FontSpec::new();
        measurer.measure(MeasureRequest {
            text,
            font_size,
            font: &font,
            pixel_scale: 1.0,
        })
    }

    #[test]
    fn empty_text_measures_zero() {
        let mut measurer = CosmicMeasurer::new();
        assert_eq!(measure(&mut measurer, "", 24.0), TextMetrics::default());
    }

    #[test]
    fn measurement_is_deterministic() {
        let mut measurer = CosmicMeasurer::new();

        let first = measure(&mut measurer, "Kupo!", 24.0);
        let second = measure(&mut measurer, "Kupo!", 24.0);

        assert_eq!(first, second);
    }

    #[test]
    fn width_grows_with_font_size() {
        let mut measurer = CosmicMeasurer::new();
        // Without any font face there is nothing to compare.
        if measurer.face_count() == 0 {
            return;
        }

        let small = measure(&mut measurer, "Kupo!", 12.0);
        let large = measure(&mut measurer, "Kupo!", 48.0);

        assert!(small.width > 0.0);
        assert!(large.width > small.width);
        assert!(large.height > small.height);
    }

    #[test]
    fn pixel_scale_reports_logical_units() {
        let mut measurer = CosmicMeasurer::new();
        if measurer.face_count() == 0 {
            return;
        }

        let font = FontSpec::new();
        let logical = measurer.measure(MeasureRequest {
            text: "Kupo!",
            font_size: 24.0,
            font: &font,
            pixel_scale: 1.0,
        });
        let scaled = measurer.measure(MeasureRequest {
            text: "Kupo!",
            font_size: 24.0,
            font: &font,
            pixel_scale: 2.0,
        });

        // Shaping at 2x and dividing back should land close to the 1x
        // numbers; hinting may move them by a pixel or two.
        assert!((scaled.width - logical.width).abs() < 4.0);
        assert!((scaled.height - logical.height).abs() < 4.0);
    }
}
