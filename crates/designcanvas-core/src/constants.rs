//! Shared defaults for the overlay subsystem.

/// Grid spacing in document units.
pub const DEFAULT_GRID_SIZE: f64 = 20.0;

/// Smallest accepted grid or ruler spacing in document units.
pub const MIN_SPACING: f64 = 1.0;

/// Largest accepted canvas dimension in document units.
pub const MAX_CANVAS_DIMENSION: f64 = 100_000.0;

/// Upper bound on ticks or grid lines generated for one axis.
pub const MAX_LINES_PER_AXIS: usize = 1_000_000;

/// Every Nth grid line is drawn as a major line.
pub const DEFAULT_GRID_MAJOR_EVERY: u32 = 5;

/// Distance between ruler ticks in document units.
pub const DEFAULT_MINOR_TICK_SPACING: f64 = 10.0;

/// Every Nth ruler tick is major and labelled.
pub const DEFAULT_MAJOR_TICK_EVERY: u32 = 5;

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.25;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 4.0;

/// Zoom change applied by a single zoom-in or zoom-out request.
pub const ZOOM_STEP: f64 = 0.25;

/// Major ruler tick length in display pixels.
pub const MAJOR_TICK_LENGTH: f64 = 16.0;

/// Minor ruler tick length in display pixels.
pub const MINOR_TICK_LENGTH: f64 = 8.0;

/// Readout tooltip offset from the pointer, in screen pixels.
pub const READOUT_OFFSET_X: f64 = 10.0;
pub const READOUT_OFFSET_Y: f64 = -30.0;

/// Radius of the canvas-centre marker drawn by the axis guides.
pub const CENTER_MARKER_RADIUS: f64 = 4.0;
