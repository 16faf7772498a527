//! Marquee scrolling schedule for overflow-by-design labels.
//!
//! The schedule is plain data: three timed phases describing the label's
//! horizontal offset over time. The host's tick loop owns the clock and
//! either keys its animation subsystem by phase name or samples
//! [`MarqueeSchedule::position_at`] directly. The core never runs a timer.

use std::time::Duration;

/// Wait after a (re)build before any movement starts.
pub const INITIAL_DELAY: Duration = Duration::from_millis(2500);

/// Scroll speed in pixels per second. Travel time is distance divided by
/// this, so longer text takes proportionally longer.
pub const SCROLL_SPEED: f32 = 100.0;

/// Length of the re-anchoring reset phase.
pub const RESET_DURATION: Duration = Duration::from_millis(10);

/// Identity of one schedule phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueePhaseKind {
    /// Instantaneous jump back to zero. Re-anchors the positioning engine so
    /// the slide never starts from a stale offset left by a previous
    /// schedule.
    Reset,
    /// One drift from the resting position fully off-screen to the left.
    SlideToStart,
    /// The endless loop: re-enter from the container's right edge, exit past
    /// the left edge by the text's own width.
    ContinuousLoop,
}

impl MarqueePhaseKind {
    /// Stable name for hosts that key animations by string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarqueePhaseKind::Reset => "reset",
            MarqueePhaseKind::SlideToStart => "slide-to-start",
            MarqueePhaseKind::ContinuousLoop => "continuous-loop",
        }
    }
}

/// How often a phase plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

/// One timed segment of the schedule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarqueePhase {
    pub kind: MarqueePhaseKind,
    /// Offset from schedule start at which this phase begins.
    pub start_offset: Duration,
    pub duration: Duration,
    pub from_x: f32,
    pub to_x: f32,
    pub repeat: Repeat,
}

impl MarqueePhase {
    /// Horizontal offset `into_phase` after this phase began.
    ///
    /// `Once` phases hold their end value past their duration; `Forever`
    /// phases wrap around.
    fn position_at(&self, into_phase: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to_x;
        }

        let duration = self.duration.as_secs_f32();
        let t = match self.repeat {
            Repeat::Once => (into_phase.as_secs_f32() / duration).min(1.0),
            Repeat::Forever => (into_phase.as_secs_f32() % duration) / duration,
        };

        lerp(self.from_x, self.to_x, t)
    }
}

/// Linearly interpolate between two offsets.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// The full scroll timeline: reset, slide-to-start, then the endless loop.
///
/// Always exactly three phases, in that order, with monotonically
/// non-decreasing start offsets. Rebuilding produces a fresh schedule that
/// starts over from the reset phase; the replaced schedule's loop progress
/// is discarded.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeSchedule {
    phases: [MarqueePhase; 3],
}

impl MarqueeSchedule {
    /// Build the schedule for text `text_width` wide scrolling inside a
    /// container `container_width` wide.
    ///
    /// Returns `None` when `ignore_width` is false: a label sized to fit its
    /// allotted width never scrolls, so there is nothing to schedule.
    ///
    /// `container_width` must be the width of the label's immediate
    /// scroll-bounding container, queried by the host at build time. If the
    /// label sits in a width-constrained parent instead, the travel distance
    /// is wrong; the schedule stays well-formed and the result is a visual
    /// degradation only.
    pub fn build(text_width: f32, container_width: f32, ignore_width: bool) -> Option<Self> {
        if !ignore_width {
            return None;
        }

        let slide_duration = Duration::from_secs_f32(text_width / SCROLL_SPEED);
        let loop_duration = Duration::from_secs_f32((text_width + container_width) / SCROLL_SPEED);

        let reset = MarqueePhase {
            kind: MarqueePhaseKind::Reset,
            start_offset: Duration::ZERO,
            duration: RESET_DURATION,
            from_x: 0.0,
            to_x: 0.0,
            repeat: Repeat::Once,
        };

        let slide = MarqueePhase {
            kind: MarqueePhaseKind::SlideToStart,
            start_offset: INITIAL_DELAY,
            duration: slide_duration,
            from_x: 0.0,
            to_x: -text_width,
            repeat: Repeat::Once,
        };

        let scroll = MarqueePhase {
            kind: MarqueePhaseKind::ContinuousLoop,
            start_offset: INITIAL_DELAY + slide_duration,
            duration: loop_duration,
            from_x: container_width,
            to_x: -text_width,
            repeat: Repeat::Forever,
        };

        Some(Self {
            phases: [reset, slide, scroll],
        })
    }

    /// All phases in playback order.
    pub fn phases(&self) -> &[MarqueePhase] {
        &self.phases
    }

    pub fn reset(&self) -> &MarqueePhase {
        &self.phases[0]
    }

    pub fn slide_to_start(&self) -> &MarqueePhase {
        &self.phases[1]
    }

    pub fn continuous_loop(&self) -> &MarqueePhase {
        &self.phases[2]
    }

    /// Sample the label's horizontal offset `elapsed` after schedule start.
    ///
    /// The phase with the latest start offset not after `elapsed` governs;
    /// a finished `Once` phase keeps holding its end value until the next
    /// phase takes over, so the offset is continuous across segment
    /// boundaries.
    pub fn position_at(&self, elapsed: Duration) -> f32 {
        let mut active = &self.phases[0];
        for phase in &self.phases {
            if phase.start_offset <= elapsed {
                active = phase;
            }
        }

        active.position_at(elapsed - active.start_offset)
    }
}
