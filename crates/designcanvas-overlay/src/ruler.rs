//! Ruler rendering.
//!
//! A ruler is rebuilt from [`OverlayState`] on every render: ticks come from
//! the canvas length on the ruler's axis at the current zoom, and the
//! guideline follows either a hover on this ruler or the pointer.

use designcanvas_core::{constants, Axis};
use serde::Serialize;

use crate::state::OverlayState;
use crate::ticks::{self, TickMark, TickSpacing};

/// Inset of minor ticks from the ruler's outer edge.
const MINOR_TICK_INSET: f64 = 2.0;
/// Distance of labels from the ruler's outer edge.
const LABEL_ACROSS: f64 = 16.0;
const HORIZONTAL_LABEL_SHIFT: f64 = -8.0;
const VERTICAL_LABEL_SHIFT: f64 = -6.0;
const VERTICAL_LABEL_ROTATION: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RulerOrientation {
    /// Along the top edge, measuring x.
    Horizontal,
    /// Along the left edge, measuring y.
    Vertical,
}

impl RulerOrientation {
    pub fn axis(&self) -> Axis {
        match self {
            RulerOrientation::Horizontal => Axis::X,
            RulerOrientation::Vertical => Axis::Y,
        }
    }
}

/// A tick placed on a ruler, in ruler-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulerTick {
    pub mark: TickMark,
    /// Offset along the ruler.
    pub along: f64,
    /// Offset of the tick's start from the outer edge.
    pub across: f64,
    pub length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulerLabel {
    pub text: String,
    pub along: f64,
    pub across: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

/// Marker for the coordinate currently being tracked on this ruler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RulerGuideline {
    /// Document coordinate.
    pub value: i64,
    /// Offset along the ruler.
    pub along: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulerRender {
    pub orientation: RulerOrientation,
    pub ticks: Vec<RulerTick>,
    pub labels: Vec<RulerLabel>,
    pub guideline: Option<RulerGuideline>,
}

impl RulerRender {
    pub fn major_count(&self) -> usize {
        self.ticks.iter().filter(|t| t.mark.is_major).count()
    }
}

#[derive(Debug, Clone)]
pub struct RulerView {
    orientation: RulerOrientation,
    /// Shift of the ruler's origin relative to the canvas origin.
    offset: f64,
    spacing: TickSpacing,
}

impl RulerView {
    pub fn new(orientation: RulerOrientation, offset: f64, spacing: TickSpacing) -> Self {
        Self {
            orientation,
            offset,
            spacing,
        }
    }

    pub fn orientation(&self) -> RulerOrientation {
        self.orientation
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn render(&self, state: &OverlayState) -> RulerRender {
        let axis = self.orientation.axis();
        let zoom = state.zoom();
        let marks = ticks::generate(state.canvas().length(axis), zoom, &self.spacing);

        let (label_shift, rotation) = match self.orientation {
            RulerOrientation::Horizontal => (HORIZONTAL_LABEL_SHIFT, 0.0),
            RulerOrientation::Vertical => (VERTICAL_LABEL_SHIFT, VERTICAL_LABEL_ROTATION),
        };

        let mut labels = Vec::new();
        let mut ruler_ticks = Vec::with_capacity(marks.len());
        for mark in marks {
            let along = mark.position + self.offset;
            if let Some(label) = mark.label {
                labels.push(RulerLabel {
                    text: label.to_string(),
                    along: along + label_shift,
                    across: LABEL_ACROSS,
                    rotation,
                });
            }
            let (across, length) = if mark.is_major {
                (0.0, constants::MAJOR_TICK_LENGTH)
            } else {
                (MINOR_TICK_INSET, constants::MINOR_TICK_LENGTH)
            };
            ruler_ticks.push(RulerTick {
                mark,
                along,
                across,
                length,
            });
        }

        RulerRender {
            orientation: self.orientation,
            ticks: ruler_ticks,
            labels,
            guideline: self.guideline(state),
        }
    }

    fn guideline(&self, state: &OverlayState) -> Option<RulerGuideline> {
        let axis = self.orientation.axis();
        let value = match state.ruler_hover() {
            Some(hover) if hover.axis == axis => hover.value,
            _ if state.pointer_over_surface() => {
                let mouse = state.mouse();
                match axis {
                    Axis::X => mouse.x,
                    Axis::Y => mouse.y,
                }
            }
            _ => return None,
        };
        Some(RulerGuideline {
            value,
            along: value as f64 * state.zoom().get() + self.offset,
        })
    }
}
