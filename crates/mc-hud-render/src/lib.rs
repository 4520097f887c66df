//! Rendering primitives for HUD elements: colours, textures, the
//! [`Renderer2D`] contract and a recording implementation.

pub mod color;
pub mod recorder;
pub mod renderer;

pub use color::Color;
pub use recorder::{DrawCommand, DrawRecorder};
pub use renderer::{Renderer2D, TextureId};
