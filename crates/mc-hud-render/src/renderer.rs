//! 2D drawing primitives the HUD draws with.

use mc_hud_item::ItemStack;

use crate::color::Color;

/// Textures HUD elements can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    /// Opaque container frame.
    Container,
    /// Container frame with a see-through body.
    ContainerTransparent,
}

impl TextureId {
    /// Resource path of the texture.
    pub fn path(self) -> &'static str {
        match self {
            TextureId::Container => "textures/container.png",
            TextureId::ContainerTransparent => "textures/container-transparent.png",
        }
    }
}

/// Immediate-mode 2D renderer, in screen pixels.
///
/// Implementations own GPU resources; callers only issue requests.
pub trait Renderer2D {
    /// Bind the texture used by subsequent [`Renderer2D::tex_quad`] calls.
    fn bind_texture(&mut self, texture: TextureId);

    /// Draw the bound texture stretched over a rectangle, multiplied by `color`.
    fn tex_quad(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw a solid rectangle.
    fn quad(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Draw an item icon with its top-left at `(x, y)`, magnified by `scale`.
    fn draw_item(&mut self, item: &ItemStack, x: i32, y: i32, scale: f64, show_count: bool);
}

impl<R: Renderer2D + ?Sized> Renderer2D for &mut R {
    fn bind_texture(&mut self, texture: TextureId) {
        (**self).bind_texture(texture)
    }

    fn tex_quad(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        (**self).tex_quad(x, y, width, height, color)
    }

    fn quad(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        (**self).quad(x, y, width, height, color)
    }

    fn draw_item(&mut self, item: &ItemStack, x: i32, y: i32, scale: f64, show_count: bool) {
        (**self).draw_item(item, x, y, scale, show_count)
    }
}
