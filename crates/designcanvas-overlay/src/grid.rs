//! Grid line layout.
//!
//! Lines sit at integer multiples of the grid size measured from the canvas
//! origin, so the pattern does not shift as zoom changes. Every fifth line
//! (by default) is major.

use designcanvas_core::constants;
use designcanvas_settings::GridSettings;
use serde::Serialize;

use crate::ticks::line_count;
use crate::viewport::ZoomFactor;

const MAJOR_OPACITY: f64 = 0.4;
const MINOR_OPACITY: f64 = 0.2;

/// Direction a grid line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    /// Constant x, spanning the canvas height.
    Vertical,
    /// Constant y, spanning the canvas width.
    Horizontal,
}

/// Grid spacing policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridSpec {
    /// Cell size in document units.
    pub size: f64,
    pub major_every: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            size: constants::DEFAULT_GRID_SIZE,
            major_every: constants::DEFAULT_GRID_MAJOR_EVERY,
        }
    }
}

impl From<&GridSettings> for GridSpec {
    fn from(settings: &GridSettings) -> Self {
        Self {
            size: settings.size,
            major_every: settings.major_every,
        }
    }
}

/// Stroke weight for a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineWeight {
    pub width: f64,
    pub opacity: f64,
}

impl LineWeight {
    pub fn for_line(is_major: bool, settings: &GridSettings) -> Self {
        if is_major {
            Self {
                width: settings.major_line_width,
                opacity: MAJOR_OPACITY,
            }
        } else {
            Self {
                width: settings.minor_line_width,
                opacity: MINOR_OPACITY,
            }
        }
    }
}

/// One grid line in display pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub orientation: Orientation,
    pub index: usize,
    /// x for vertical lines, y for horizontal ones.
    pub position: f64,
    pub is_major: bool,
    /// Start of the span along the line.
    pub start: f64,
    /// End of the span along the line.
    pub end: f64,
}

fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Generates the grid for a `width` × `height` document-unit canvas.
///
/// Vertical lines come first, then horizontal ones, each in index order.
/// Empty when either axis would need more than
/// [`MAX_LINES_PER_AXIS`](designcanvas_core::constants::MAX_LINES_PER_AXIS) lines.
pub fn generate(width: f64, height: f64, spec: &GridSpec, zoom: ZoomFactor) -> Vec<GridLine> {
    if !(usable(width) && usable(height) && usable(spec.size)) || spec.major_every == 0 {
        return Vec::new();
    }

    let z = zoom.get();
    let cell = spec.size * z;
    let every = spec.major_every as usize;
    let (Some(vertical_count), Some(horizontal_count)) = (
        line_count(width, spec.size),
        line_count(height, spec.size),
    ) else {
        tracing::warn!(width, height, size = spec.size, "Grid too dense, skipping");
        return Vec::new();
    };

    let line = |orientation, index: usize, span: f64| GridLine {
        orientation,
        index,
        position: index as f64 * cell,
        is_major: index % every == 0,
        start: 0.0,
        end: span,
    };

    let mut lines = Vec::with_capacity(vertical_count + horizontal_count);
    lines.extend((0..vertical_count).map(|i| line(Orientation::Vertical, i, height * z)));
    lines.extend((0..horizontal_count).map(|i| line(Orientation::Horizontal, i, width * z)));
    lines
}

/// Cached grid that regenerates only when its inputs change.
#[derive(Debug, Clone)]
pub struct GridLayout {
    spec: GridSpec,
    key: Option<(f64, f64, f64)>,
    lines: Vec<GridLine>,
}

impl GridLayout {
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            key: None,
            lines: Vec::new(),
        }
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Replaces the spacing policy and drops the cached lines.
    pub fn set_spec(&mut self, spec: GridSpec) {
        self.spec = spec;
        self.key = None;
        self.lines.clear();
    }

    /// Regenerates for the given canvas size and zoom if either changed.
    ///
    /// Returns true if the lines were rebuilt.
    pub fn update(&mut self, width: f64, height: f64, zoom: ZoomFactor) -> bool {
        let key = (width, height, zoom.get());
        if self.key == Some(key) {
            return false;
        }
        self.lines = generate(width, height, &self.spec, zoom);
        self.key = Some(key);
        tracing::trace!("Grid rebuilt with {} lines", self.lines.len());
        true
    }

    pub fn lines(&self) -> &[GridLine] {
        &self.lines
    }

    pub fn majors(&self) -> impl Iterator<Item = &GridLine> {
        self.lines.iter().filter(|l| l.is_major)
    }

    pub fn minors(&self) -> impl Iterator<Item = &GridLine> {
        self.lines.iter().filter(|l| !l.is_major)
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(GridSpec::default())
    }
}
