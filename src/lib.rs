//! # DesignCanvas
//!
//! Overlay subsystem for a browser-style design canvas editor: coordinate
//! transforms between document, display and screen space, rulers, grid,
//! axis guides, pointer readout and a draggable device-viewport frame.
//!
//! ## Architecture
//!
//! DesignCanvas is organized as a workspace with multiple crates:
//!
//! 1. **designcanvas-core** - Errors, geometry primitives, event bus
//! 2. **designcanvas-settings** - Configuration, presets, load/save
//! 3. **designcanvas-overlay** - Transforms, views and the editor session
//! 4. **designcanvas** - Re-exports and logging setup
//!
//! Shape rendering, hit-testing and selection belong to the scene canvas the
//! host plugs in through [`SceneCanvas`].

use std::path::Path;

pub use designcanvas_core::{
    constants, AppEvent, Axis, CanvasError, CanvasSize, DisplayPoint, DocPoint, Error, EventBus,
    EventFilter, OverlayEvent, PointerEvent, PointerKind, Result, ScreenPoint, Subscription,
    SurfaceRect,
};

pub use designcanvas_settings::{
    Config, ConfigError, FrameSettings, GridSettings, RulerSettings, ScreenPreset, SettingsError,
    ZoomSettings,
};

pub use designcanvas_overlay::{
    AxisGuides, CoordinateSpace, EditorSession, FramePosition, FrameView, GridLayout, GridLine,
    GuideOverlay, MemoryScene, MousePosition, OverlayError, OverlayState, Readout, RulerRender,
    RulerView, Rulers, SceneCanvas, StatusReport, TickMark, Tool, Viewport, ZoomFactor,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, INFO otherwise
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Initialize logging with one JSON object per line, for hosts that ship
/// logs to a collector.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_current_span(false))
        .try_init()?;

    Ok(())
}

/// Loads the configuration from `path`, or from the platform config
/// directory when `path` is `None`. A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path()?,
    };
    tracing::debug!("Using config path {}", path.display());
    Ok(Config::load_or_default(&path)?)
}

/// Builds an editor session over the in-memory scene.
pub fn memory_session(config: Config) -> anyhow::Result<EditorSession<MemoryScene>> {
    Ok(EditorSession::new(config, MemoryScene::default())?)
}
