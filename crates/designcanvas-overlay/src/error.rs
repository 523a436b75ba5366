//! Errors raised when building or reconfiguring an editor session.

use designcanvas_core::CanvasError;
use designcanvas_settings::{ConfigError, SettingsError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error(transparent)]
    Core(#[from] designcanvas_core::Error),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

impl OverlayError {
    pub fn is_unknown_preset(&self) -> bool {
        matches!(self, OverlayError::Core(e) if e.is_unknown_preset())
    }

    pub fn is_invalid_size(&self) -> bool {
        matches!(
            self,
            OverlayError::Core(designcanvas_core::Error::Canvas(
                CanvasError::InvalidCanvasSize { .. }
            ))
        )
    }
}

impl From<CanvasError> for OverlayError {
    fn from(err: CanvasError) -> Self {
        OverlayError::Core(err.into())
    }
}

impl From<ConfigError> for OverlayError {
    fn from(err: ConfigError) -> Self {
        OverlayError::Settings(err.into())
    }
}

pub type OverlayResult<T> = std::result::Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let err: OverlayError = CanvasError::UnknownScreenPreset {
            key: "watch".to_string(),
        }
        .into();
        assert!(err.is_unknown_preset());
        assert_eq!(err.to_string(), "Unknown screen size preset: watch");

        let err: OverlayError = CanvasError::InvalidCanvasSize {
            width: 0.0,
            height: 10.0,
        }
        .into();
        assert!(err.is_invalid_size());
        assert!(!err.is_unknown_preset());
    }
}
