//! # DesignCanvas Overlay
//!
//! Coordinate transforms and the overlay layers drawn on top of a design
//! canvas: rulers, grid, axis guides, pointer readout and the draggable
//! viewport frame. Shape rendering and hit-testing stay with the scene
//! canvas behind [`SceneCanvas`].
//!
//! ## Architecture
//!
//! ```text
//! CoordinateSpace ──> TickGenerator ──> RulerView
//!        │            GridLayout
//!        ▼
//!   OverlayState ──> AxisGuides / Readout / StatusReport
//!        │
//!   FrameView (drag listener on the session EventBus)
//! ```
//!
//! Views keep no state between renders; each call recomputes from
//! [`OverlayState`]. The grid is the exception and caches its lines until
//! size or zoom change.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use designcanvas_overlay::{EditorSession, MemoryScene};
//! use designcanvas_settings::Config;
//!
//! let mut session = EditorSession::new(Config::default(), MemoryScene::default())?;
//! session.select_screen_size("mobile")?;
//! session.pointer_entered();
//! let rulers = session.rulers();
//! println!("{}", session.status());
//! ```

pub mod coordinates;
pub mod editor;
pub mod error;
pub mod frame;
pub mod grid;
pub mod guides;
pub mod readout;
pub mod ruler;
pub mod scene;
pub mod state;
pub mod status;
pub mod ticks;
pub mod viewport;

pub use coordinates::{capture, ruler_offset_to_document, CoordinateSpace, MousePosition};
pub use editor::{EditorSession, Rulers};
pub use error::{OverlayError, OverlayResult};
pub use frame::{FramePosition, FrameRect, FrameView};
pub use grid::{GridLayout, GridLine, GridSpec, LineWeight, Orientation};
pub use guides::{AxisGuides, CenterMarker, GuideKind, GuideLine, GuideOverlay};
pub use readout::Readout;
pub use ruler::{RulerGuideline, RulerLabel, RulerOrientation, RulerRender, RulerTick, RulerView};
pub use scene::{MemoryScene, ObjectId, SceneCanvas, SceneObject, Shape, Tool, ToolState};
pub use state::{OverlayState, RulerHover};
pub use status::StatusReport;
pub use ticks::{TickMark, TickSpacing};
pub use viewport::{Viewport, ZoomBounds, ZoomFactor};
