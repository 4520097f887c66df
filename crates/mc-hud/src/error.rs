//! HUD errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("scale must be a finite number >= {min}, got {got}")]
    InvalidScale { min: f64, got: f64 },
}
