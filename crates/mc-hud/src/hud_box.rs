//! Position and size of a HUD element on screen.

/// Screen rectangle of a HUD element.
///
/// The host owns the position (placement); the element sets the size every
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HudBox {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    pub fn set_pos(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
