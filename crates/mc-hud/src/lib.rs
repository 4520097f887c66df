//! Heads-up display: the element host and the container viewer element.

pub mod colors;
pub mod container_viewer;
pub mod element;
pub mod error;
pub mod hud;
pub mod hud_box;
pub mod settings;

pub use colors::{ColorResolver, ContainerColors};
pub use container_viewer::ContainerViewer;
pub use element::{HudElement, HudRenderer};
pub use error::SettingsError;
pub use hud::Hud;
pub use hud_box::HudBox;
pub use settings::{Background, ContainerViewerSettings};
