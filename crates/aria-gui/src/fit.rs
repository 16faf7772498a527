//! Largest-fit font size selection.
//!
//! Given a text string and the bounds the host reports for a label, pick the
//! largest size from a fixed candidate list whose rendered metrics fit. The
//! candidate list is tried in descending order, so the first acceptance is
//! already the best one and the scan stops there.

use crate::measure::{FontSpec, MeasureRequest, TextMeasurer, TextMetrics};
use crate::primitives::Extent;

/// Allowed font sizes, in logical units, tried largest-first.
///
/// Shared process-wide and never mutated. The strict descending order is what
/// makes the first fitting candidate optimal.
pub const FONT_SIZE_CANDIDATES: [f32; 16] = [
    72.0, 48.0, 36.0, 24.0, 22.0, 20.0, 18.0, 16.0, 14.0, 12.0, 11.0, 10.0, 9.0, 8.0, 7.0, 6.0,
];

/// Inputs for one auto-fit pass.
#[derive(Debug, Clone)]
pub struct FitRequest<'a> {
    pub text: &'a str,
    /// Label bounds as last reported by the host layout pass.
    pub bounds: Extent,
    /// Skip the width constraint. Labels that scroll instead of shrinking
    /// set this; see [`crate::MarqueeSchedule::build`].
    pub ignore_width: bool,
    pub font: &'a FontSpec,
    /// Logical-to-physical pixel multiplier for the target display.
    pub pixel_scale: f32,
}

/// Outcome of an auto-fit pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitResult {
    /// The candidate that satisfied the constraints, or `None` when even the
    /// smallest candidate overflows the bounds.
    pub chosen: Option<f32>,
    /// Measured advance width at [`FitResult::font_size`].
    pub text_width: f32,
    /// Measured overhang-corrected height at [`FitResult::font_size`].
    pub text_height: f32,
}

impl FitResult {
    /// Size to apply to the label.
    ///
    /// When nothing fit this falls back to the smallest candidate: the
    /// renderer clips or overflows, but the label still gets a usable size.
    pub fn font_size(&self) -> f32 {
        self.chosen
            .unwrap_or(FONT_SIZE_CANDIDATES[FONT_SIZE_CANDIDATES.len() - 1])
    }

    /// True when even the smallest candidate did not fit the bounds.
    pub fn overflows(&self) -> bool {
        self.chosen.is_none()
    }
}

/// Select the largest candidate font size whose rendered metrics fit
/// `request.bounds`.
///
/// A candidate is accepted when its overhang-corrected height fits the
/// bounds height and, unless `ignore_width` is set, its advance width fits
/// the bounds width.
///
/// Returns `None` when the request is not yet measurable: empty text, or
/// bounds the host has not reported yet (either dimension zero, which
/// happens on the first layout pass). Callers keep their previous result in
/// that case.
pub fn fit(request: &FitRequest<'_>, measurer: &mut dyn TextMeasurer) -> Option<FitResult> {
    if request.text.is_empty() || !request.bounds.has_area() {
        return None;
    }

    let mut metrics = TextMetrics::default();
    for &candidate in FONT_SIZE_CANDIDATES.iter() {
        metrics = measurer.measure(MeasureRequest {
            text: request.text,
            font_size: candidate,
            font: request.font,
            pixel_scale: request.pixel_scale,
        });

        let width_ok = request.ignore_width || metrics.width <= request.bounds.width;
        if width_ok && metrics.fitted_height() <= request.bounds.height {
            return Some(FitResult {
                chosen: Some(candidate),
                text_width: metrics.width,
                text_height: metrics.fitted_height(),
            });
        }
    }

    // Even the smallest candidate overflows. Keep its measurements and let
    // the renderer clip.
    Some(FitResult {
        chosen: None,
        text_width: metrics.width,
        text_height: metrics.fitted_height(),
    })
}
