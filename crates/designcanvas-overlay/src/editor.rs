//! Editor session.
//!
//! Wires the overlay pieces to a scene canvas: pointer input updates
//! [`OverlayState`], toolbar actions go to the scene and the viewport, and
//! every state change is announced on the session's [`EventBus`].

use std::sync::Arc;

use designcanvas_core::{
    AppEvent, Axis, CanvasError, CanvasSize, DocPoint, EventBus, EventBusError, OverlayEvent,
    PointerEvent, PointerKind, ScreenPoint, SurfaceRect,
};
use designcanvas_settings::{Config, RulerSettings};
use serde::Serialize;

use crate::coordinates::{self, MousePosition};
use crate::error::OverlayResult;
use crate::frame::FrameView;
use crate::grid::{GridLayout, GridLine, GridSpec, LineWeight};
use crate::guides::{AxisGuides, GuideOverlay};
use crate::readout::{self, Readout};
use crate::ruler::{RulerOrientation, RulerRender, RulerView};
use crate::scene::{ObjectId, SceneCanvas, Tool, ToolState};
use crate::state::{OverlayState, RulerHover};
use crate::status::StatusReport;
use crate::ticks::TickSpacing;
use crate::viewport::{Viewport, ZoomFactor};

/// Both rulers for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rulers {
    pub horizontal: RulerRender,
    pub vertical: RulerRender,
}

fn tick_spacing(settings: &RulerSettings) -> TickSpacing {
    TickSpacing {
        minor: settings.minor_spacing,
        major_every: settings.major_every,
    }
}

pub struct EditorSession<S: SceneCanvas> {
    config: Config,
    state: OverlayState,
    grid: GridLayout,
    horizontal_ruler: RulerView,
    vertical_ruler: RulerView,
    frame: FrameView,
    workspace: CanvasSize,
    preset: String,
    tools: ToolState,
    scene: S,
    bus: Arc<EventBus>,
}

impl<S: SceneCanvas> EditorSession<S> {
    /// Builds a session on the configured default screen preset.
    pub fn new(config: Config, mut scene: S) -> OverlayResult<Self> {
        config.validate()?;

        let preset = config
            .default_preset()
            .ok_or_else(|| CanvasError::UnknownScreenPreset {
                key: config.default_screen.clone(),
            })?;
        let canvas = preset.size()?;
        let label = preset.label.clone();
        let key = preset.key.clone();

        let viewport = Viewport::with_settings(canvas, &config.zoom)?;
        let zoom = viewport.zoom();
        let workspace = config.frame.workspace()?;

        scene.resize(canvas);
        scene.set_zoom(zoom.get());

        let spacing = tick_spacing(&config.rulers);
        let session = Self {
            state: OverlayState::new(viewport, config.grid.visible),
            grid: GridLayout::new(GridSpec::from(&config.grid)),
            horizontal_ruler: RulerView::new(
                RulerOrientation::Horizontal,
                config.rulers.horizontal_offset,
                spacing,
            ),
            vertical_ruler: RulerView::new(
                RulerOrientation::Vertical,
                config.rulers.vertical_offset,
                spacing,
            ),
            frame: FrameView::new(canvas, workspace, zoom, &label),
            workspace,
            preset: key,
            tools: ToolState::new(),
            scene,
            bus: Arc::new(EventBus::new()),
            config,
        };
        tracing::info!(
            "Editor session ready: {} canvas {} at {}",
            session.preset,
            canvas,
            zoom
        );
        Ok(session)
    }

    fn emit(&self, event: OverlayEvent) {
        let event = AppEvent::Overlay(event);
        if let Err(EventBusError::NoSubscribers) = self.bus.publish(event) {
            tracing::trace!("Overlay event dropped: no subscribers");
        }
    }

    // Pointer input

    /// Records a pointer move over the surface whose bounding rectangle is
    /// `surface`, as measured for this same event.
    pub fn pointer_moved(&mut self, screen: ScreenPoint, surface: SurfaceRect) -> MousePosition {
        let position = coordinates::capture(screen, &surface, self.state.zoom());
        self.state.record_pointer(position);
        position
    }

    /// Records a pointer move whose document position the scene canvas
    /// already resolved.
    pub fn scene_pointer_moved(&mut self, document: DocPoint, screen: ScreenPoint) -> MousePosition {
        let position = MousePosition::from_document(document, screen);
        self.state.record_pointer(position);
        position
    }

    pub fn pointer_entered(&mut self) {
        if !self.state.pointer_over_surface() {
            self.state.pointer_entered();
            self.emit(OverlayEvent::SurfaceHover { inside: true });
        }
    }

    pub fn pointer_left(&mut self) {
        if self.state.pointer_over_surface() {
            self.state.pointer_left();
            self.emit(OverlayEvent::SurfaceHover { inside: false });
        }
    }

    /// Records a hover `offset` screen pixels along the ruler for `axis`.
    pub fn ruler_hovered(&mut self, axis: Axis, offset: f64, screen: ScreenPoint) -> i64 {
        let value = coordinates::ruler_offset_to_document(offset, self.state.zoom());
        self.state.record_ruler_hover(RulerHover {
            axis,
            value,
            screen,
        });
        value
    }

    pub fn ruler_left(&mut self) {
        self.state.clear_ruler_hover();
    }

    /// Feeds a window-level pointer event.
    ///
    /// A press inside the frame starts a drag; the event is then published
    /// so an active drag sees moves and the release.
    pub fn dispatch_pointer(&mut self, event: PointerEvent) {
        if event.kind == PointerKind::Down {
            self.frame_pressed(event.position);
        }
        if let Err(EventBusError::NoSubscribers) = self.bus.publish(AppEvent::Pointer(event)) {
            tracing::trace!("Pointer event dropped: no subscribers");
        }
    }

    /// Starts a frame drag if `screen` lies inside the frame.
    pub fn frame_pressed(&mut self, screen: ScreenPoint) -> bool {
        self.frame.press(&self.bus, screen)
    }

    // Zoom

    pub fn zoom(&self) -> ZoomFactor {
        self.state.zoom()
    }

    /// Sets the zoom, clamped to the configured bounds.
    ///
    /// Returns true if the zoom changed.
    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        if !self.state.set_zoom(zoom) {
            return false;
        }
        self.zoom_changed();
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        if !self.state.viewport_mut().zoom_in() {
            return false;
        }
        self.zoom_changed();
        true
    }

    pub fn zoom_out(&mut self) -> bool {
        if !self.state.viewport_mut().zoom_out() {
            return false;
        }
        self.zoom_changed();
        true
    }

    fn zoom_changed(&mut self) {
        let zoom = self.state.zoom();
        self.scene.set_zoom(zoom.get());
        self.frame.resize(self.state.canvas(), self.workspace, zoom);
        tracing::info!("Zoom set to {}", zoom);
        self.emit(OverlayEvent::ZoomChanged { zoom: zoom.get() });
    }

    // Canvas size

    /// Switches to a named screen preset.
    pub fn select_screen_size(&mut self, key: &str) -> OverlayResult<CanvasSize> {
        let preset = self
            .config
            .preset(key)
            .ok_or_else(|| CanvasError::UnknownScreenPreset {
                key: key.to_string(),
            })?;
        let size = preset.size()?;
        let label = preset.label.clone();
        let key = preset.key.clone();
        self.apply_canvas(size, &label, key);
        Ok(size)
    }

    /// Switches to a custom size. Rejects non-finite or non-positive values.
    pub fn set_custom_size(&mut self, width: f64, height: f64) -> OverlayResult<CanvasSize> {
        let size = CanvasSize::new(width, height)?;
        let label = self
            .config
            .preset("custom")
            .map(|p| p.label.clone())
            .unwrap_or_else(|| "Custom".to_string());
        self.apply_canvas(size, &label, "custom".to_string());
        Ok(size)
    }

    fn apply_canvas(&mut self, size: CanvasSize, label: &str, key: String) {
        self.state.set_canvas_size(size);
        self.scene.resize(size);
        self.frame.resize(size, self.workspace, self.state.zoom());
        self.frame.set_label(label);
        tracing::info!("Canvas resized to {} ({})", size, key);
        self.preset = key.clone();
        self.emit(OverlayEvent::CanvasResized {
            size,
            preset: Some(key),
        });
    }

    /// Key of the active screen preset.
    pub fn preset(&self) -> &str {
        &self.preset
    }

    // Grid

    pub fn set_show_grid(&mut self, visible: bool) {
        if self.state.show_grid() != visible {
            self.state.set_show_grid(visible);
            self.emit(OverlayEvent::GridToggled { visible });
        }
    }

    /// Flips grid visibility and returns the new value.
    pub fn toggle_grid(&mut self) -> bool {
        let visible = !self.state.show_grid();
        self.set_show_grid(visible);
        visible
    }

    // Objects

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tools.set_tool(tool);
    }

    pub fn set_color(&mut self, color: &str) {
        self.tools.set_color(color);
    }

    /// Presses on the canvas with the active tool at a document point.
    ///
    /// A successful placement reverts the tool to [`Tool::Select`].
    pub fn place(&mut self, point: DocPoint) -> Option<ObjectId> {
        let id = self
            .scene
            .place(self.tools.active(), point, self.tools.color())?;
        tracing::debug!("Placed {} as {}", self.tools.active(), id);
        self.tools.placement_done();
        self.sync_objects();
        Some(id)
    }

    /// Removes every user object from the scene.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.scene.clear();
        tracing::info!("Canvas cleared, {} objects removed", removed);
        self.emit(OverlayEvent::CanvasCleared { removed });
        self.sync_objects();
        removed
    }

    /// Re-reads the scene's object count. Call after the scene changes
    /// through any path other than this session.
    pub fn sync_objects(&mut self) -> usize {
        let count = self.scene.object_count();
        if count != self.state.object_count() {
            self.state.set_object_count(count);
            self.emit(OverlayEvent::ObjectsChanged { count });
        }
        count
    }

    // Views

    pub fn status(&self) -> StatusReport {
        StatusReport::from_state(&self.state)
    }

    pub fn readout(&self) -> Option<Readout> {
        readout::compute(&self.state)
    }

    pub fn guides(&self) -> Option<GuideOverlay> {
        AxisGuides::compute(&self.state)
    }

    pub fn rulers(&self) -> Rulers {
        Rulers {
            horizontal: self.horizontal_ruler.render(&self.state),
            vertical: self.vertical_ruler.render(&self.state),
        }
    }

    /// Current grid lines; empty while the grid is hidden.
    pub fn grid_lines(&mut self) -> &[GridLine] {
        if !self.state.show_grid() {
            return &[];
        }
        let canvas = self.state.canvas();
        self.grid.update(canvas.width(), canvas.height(), self.state.zoom());
        self.grid.lines()
    }

    pub fn grid_weight(&self, line: &GridLine) -> LineWeight {
        LineWeight::for_line(line.is_major, &self.config.grid)
    }

    pub fn frame(&self) -> &FrameView {
        &self.frame
    }

    /// Frame caption, if enabled in the configuration.
    pub fn frame_label(&self) -> Option<String> {
        self.config.frame.show_label.then(|| self.frame.label())
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Mutable scene access. Follow external edits with
    /// [`EditorSession::sync_objects`].
    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }
}
