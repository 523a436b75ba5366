//! Ruler tick generation.
//!
//! Ticks are laid out by integer index so that zoom changes never
//! accumulate floating-point drift, and the whole sequence is rebuilt on
//! every call.

use designcanvas_core::constants;
use serde::Serialize;

use crate::coordinates::round_coordinate;
use crate::viewport::ZoomFactor;

/// Tick spacing policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickSpacing {
    /// Distance between consecutive ticks, in document units.
    pub minor: f64,
    /// Every Nth tick (counting from the origin) is major.
    pub major_every: u32,
}

impl Default for TickSpacing {
    fn default() -> Self {
        Self {
            minor: constants::DEFAULT_MINOR_TICK_SPACING,
            major_every: constants::DEFAULT_MAJOR_TICK_EVERY,
        }
    }
}

impl TickSpacing {
    fn is_usable(&self) -> bool {
        self.minor.is_finite() && self.minor > 0.0 && self.major_every > 0
    }
}

/// One ruler tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickMark {
    /// Index from the origin.
    pub index: usize,
    /// Position in document units.
    pub document: f64,
    /// Position in display pixels.
    pub position: f64,
    pub is_major: bool,
    /// Rounded document position; majors only.
    pub label: Option<i64>,
}

/// Generates the ticks for an axis of `axis_length` document units.
///
/// Produces `floor(axis_length / minor) + 1` ticks for any non-negative
/// length, so a zero-length axis yields just the origin tick. Negative or
/// non-finite lengths, unusable spacing, and axes needing more than
/// [`constants::MAX_LINES_PER_AXIS`] ticks yield no ticks.
pub fn generate(axis_length: f64, zoom: ZoomFactor, spacing: &TickSpacing) -> Vec<TickMark> {
    if !(axis_length.is_finite() && axis_length >= 0.0) || !spacing.is_usable() {
        return Vec::new();
    }

    let Some(count) = line_count(axis_length, spacing.minor) else {
        return Vec::new();
    };
    let z = zoom.get();
    let every = spacing.major_every as usize;

    (0..count)
        .map(|index| {
            let document = index as f64 * spacing.minor;
            let is_major = index % every == 0;
            TickMark {
                index,
                document,
                position: document * z,
                is_major,
                label: is_major.then(|| round_coordinate(document)),
            }
        })
        .collect()
}

/// Number of index positions from 0 to `length` inclusive, or `None` when
/// that exceeds the per-axis cap.
pub(crate) fn line_count(length: f64, spacing: f64) -> Option<usize> {
    let steps = (length / spacing).floor();
    if !steps.is_finite() || steps >= constants::MAX_LINES_PER_AXIS as f64 {
        return None;
    }
    Some(steps as usize + 1)
}
