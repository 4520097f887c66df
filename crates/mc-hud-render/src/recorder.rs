//! A renderer that records draw requests instead of executing them.
//!
//! Used headless (the preview binary logs the recorded frame) and to assert
//! on what an element drew.

use std::fmt;

use tracing::trace;

use mc_hud_item::ItemStack;

use crate::color::Color;
use crate::renderer::{Renderer2D, TextureId};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BindTexture(TextureId),
    TexQuad {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    Quad {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
    },
    Item {
        name: String,
        count: u16,
        x: i32,
        y: i32,
        scale: f64,
        show_count: bool,
    },
}

impl DrawCommand {
    pub fn is_item(&self) -> bool {
        matches!(self, DrawCommand::Item { .. })
    }

    /// Whether this command belongs to a background (texture bind or quad).
    pub fn is_background(&self) -> bool {
        !self.is_item()
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCommand::BindTexture(t) => write!(f, "bind {}", t.path()),
            DrawCommand::TexQuad { x, y, width, height, color } => write!(
                f,
                "tex_quad ({x}, {y}) {width}x{height} rgba({}, {}, {}, {})",
                color.r, color.g, color.b, color.a
            ),
            DrawCommand::Quad { x, y, width, height, color } => write!(
                f,
                "quad ({x}, {y}) {width}x{height} rgba({}, {}, {}, {})",
                color.r, color.g, color.b, color.a
            ),
            DrawCommand::Item { name, count, x, y, scale, .. } => {
                write!(f, "item {name} x{count} at ({x}, {y}) scale {scale}")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct DrawRecorder {
    commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty for the next frame.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn item_draws(&self) -> usize {
        self.commands.iter().filter(|c| c.is_item()).count()
    }

    pub fn background_draws(&self) -> usize {
        self.commands.iter().filter(|c| c.is_background()).count()
    }

    fn push(&mut self, command: DrawCommand) {
        trace!(%command, "draw");
        self.commands.push(command);
    }
}

impl Renderer2D for DrawRecorder {
    fn bind_texture(&mut self, texture: TextureId) {
        self.push(DrawCommand::BindTexture(texture));
    }

    fn tex_quad(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.push(DrawCommand::TexQuad { x, y, width, height, color });
    }

    fn quad(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        self.push(DrawCommand::Quad { x, y, width, height, color });
    }

    fn draw_item(&mut self, item: &ItemStack, x: i32, y: i32, scale: f64, show_count: bool) {
        self.push(DrawCommand::Item {
            name: item.name.clone(),
            count: item.count,
            x,
            y,
            scale,
            show_count,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut rec = DrawRecorder::new();
        rec.bind_texture(TextureId::Container);
        rec.tex_quad(0, 0, 10, 10, Color::WHITE);
        rec.draw_item(&ItemStack::new("minecraft:stone", 3), 1, 2, 2.0, true);

        assert_eq!(rec.commands().len(), 3);
        assert_eq!(rec.commands()[0], DrawCommand::BindTexture(TextureId::Container));
        assert_eq!(rec.item_draws(), 1);
        assert_eq!(rec.background_draws(), 2);
    }

    #[test]
    fn take_clears() {
        let mut rec = DrawRecorder::new();
        rec.quad(0, 0, 1, 1, Color::BLACK);
        let frame = rec.take();
        assert_eq!(frame.len(), 1);
        assert!(rec.commands().is_empty());
    }

    #[test]
    fn works_through_mut_reference() {
        fn draw(mut r: impl Renderer2D) {
            r.quad(1, 1, 2, 2, Color::WHITE);
        }
        let mut rec = DrawRecorder::new();
        draw(&mut rec);
        assert_eq!(rec.background_draws(), 1);
    }

    #[test]
    fn display_is_readable() {
        let cmd = DrawCommand::Item {
            name: "minecraft:diamond".into(),
            count: 64,
            x: 20,
            y: 18,
            scale: 2.0,
            show_count: true,
        };
        assert_eq!(cmd.to_string(), "item minecraft:diamond x64 at (20, 18) scale 2");
        assert_eq!(
            DrawCommand::BindTexture(TextureId::ContainerTransparent).to_string(),
            "bind textures/container-transparent.png"
        );
    }
}
