//! Self-sizing, auto-scrolling text label.

use crate::fit::{fit, FitRequest, FitResult};
use crate::marquee::MarqueeSchedule;
use crate::measure::{FontSpec, TextMeasurer};
use crate::primitives::Extent;

/// A label that picks the largest fitting font size for its content and,
/// when allowed to overflow its width, scrolls it marquee-style.
///
/// The label owns no clock and never measures on its own. The host raises
/// [`MarqueeLabel::refit`] whenever content or bounds change, passing the
/// bounds and container width it queried at that moment, and drives the
/// resulting schedule from its own tick loop.
#[derive(Clone, Debug)]
pub struct MarqueeLabel {
    text: String,
    font: FontSpec,
    pixel_scale: f32,
    ignore_parent_width: bool,
    fit_result: Option<FitResult>,
    schedule: Option<MarqueeSchedule>,
}

impl MarqueeLabel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            font: FontSpec::default(),
            pixel_scale: 1.0,
            ignore_parent_width: true,
            fit_result: None,
            schedule: None,
        }
    }

    /// Set the font descriptor forwarded to the measurement backend.
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    /// Set the display's logical-to-physical pixel multiplier.
    pub fn with_pixel_scale(mut self, pixel_scale: f32) -> Self {
        self.pixel_scale = pixel_scale;
        self
    }

    /// Allow (`true`, the default) or forbid the label to overflow its
    /// allotted width.
    ///
    /// Overflowing labels skip the width constraint when sizing and get a
    /// scroll schedule; constrained labels shrink to fit and never scroll.
    pub fn with_ignore_parent_width(mut self, ignore: bool) -> Self {
        self.ignore_parent_width = ignore;
        self
    }

    pub fn set_ignore_parent_width(&mut self, ignore: bool) {
        self.ignore_parent_width = ignore;
    }

    pub fn ignore_parent_width(&self) -> bool {
        self.ignore_parent_width
    }

    /// Replace the label content.
    ///
    /// This is the content-changed notification. It does not measure; the
    /// host calls [`MarqueeLabel::refit`] once it can report real bounds.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Re-measure the content against `bounds` and rebuild the scroll
    /// schedule from the new measured width.
    ///
    /// A successful pass replaces both the fit result and the schedule; the
    /// new schedule starts over from its reset phase and any loop progress
    /// of the old one is discarded. Empty content or bounds the host has not
    /// reported yet leave the previous state untouched.
    ///
    /// `container_width` is the width of the immediate scroll-bounding
    /// container, queried by the host at call time.
    pub fn refit(
        &mut self,
        bounds: Extent,
        container_width: f32,
        measurer: &mut dyn TextMeasurer,
    ) {
        let request = FitRequest {
            text: &self.text,
            bounds,
            ignore_width: self.ignore_parent_width,
            font: &self.font,
            pixel_scale: self.pixel_scale,
        };

        let Some(result) = fit(&request, measurer) else {
            log::trace!("label refit deferred, content or bounds not measurable yet");
            return;
        };

        log::debug!(
            "label fitted at {}px, text width {:.1}",
            result.font_size(),
            result.text_width
        );

        self.schedule =
            MarqueeSchedule::build(result.text_width, container_width, self.ignore_parent_width);
        self.fit_result = Some(result);
    }

    /// Font size to render with. `None` until the first successful fit pass.
    pub fn font_size(&self) -> Option<f32> {
        self.fit_result.map(|result| result.font_size())
    }

    /// Result of the last successful fit pass.
    pub fn fit_result(&self) -> Option<&FitResult> {
        self.fit_result.as_ref()
    }

    /// Current scroll schedule. `None` until a fit pass happens, and always
    /// `None` for width-constrained labels.
    pub fn schedule(&self) -> Option<&MarqueeSchedule> {
        self.schedule.as_ref()
    }
}

impl Default for MarqueeLabel {
    fn default() -> Self {
        Self::new()
    }
}
