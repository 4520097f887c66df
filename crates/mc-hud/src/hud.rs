//! HUD host: owns elements and drives them each frame.

use tracing::{debug, trace};

use mc_hud_game::PlayerHands;
use mc_hud_item::ContainerContents;
use mc_hud_render::Renderer2D;

use crate::element::{HudElement, HudRenderer};

struct HudEntry {
    element: Box<dyn HudElement>,
    active: bool,
}

/// Ordered set of HUD elements. Elements render in insertion order.
#[derive(Default)]
pub struct Hud {
    elements: Vec<HudEntry>,
    editor: bool,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element in its default active state. An element with the same
    /// name replaces the old one in place.
    pub fn add(&mut self, element: Box<dyn HudElement>) {
        let active = element.default_active();
        match self
            .elements
            .iter_mut()
            .find(|e| e.element.name() == element.name())
        {
            Some(entry) => {
                debug!(name = element.name(), "replacing HUD element");
                *entry = HudEntry { element, active };
            }
            None => {
                debug!(name = element.name(), active, "adding HUD element");
                self.elements.push(HudEntry { element, active });
            }
        }
    }

    /// Toggle an element. Returns `false` if no element has that name.
    pub fn set_active(&mut self, name: &str, active: bool) -> bool {
        match self.elements.iter_mut().find(|e| e.element.name() == name) {
            Some(entry) => {
                entry.active = active;
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.elements
            .iter()
            .any(|e| e.active && e.element.name() == name)
    }

    pub fn element(&self, name: &str) -> Option<&dyn HudElement> {
        self.elements
            .iter()
            .find(|e| e.element.name() == name)
            .map(|e| e.element.as_ref())
    }

    pub fn element_mut(&mut self, name: &str) -> Option<&mut (dyn HudElement + 'static)> {
        self.elements
            .iter_mut()
            .find(|e| e.element.name() == name)
            .map(|e| e.element.as_mut())
    }

    /// Editor mode: elements show placeholder content.
    pub fn set_editor(&mut self, editor: bool) {
        self.editor = editor;
    }

    pub fn is_editor(&self) -> bool {
        self.editor
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Run one frame: `update` then `render` for every active element.
    pub fn frame(
        &mut self,
        renderer: &mut dyn Renderer2D,
        player: Option<&dyn PlayerHands>,
        contents: &dyn ContainerContents,
    ) {
        let editor = self.editor;
        for entry in self.elements.iter_mut().filter(|e| e.active) {
            let mut ctx = HudRenderer::new(&mut *renderer, player, contents, editor);
            entry.element.update(&ctx);
            entry.element.render(&mut ctx);
            trace!(name = entry.element.name(), "rendered HUD element");
        }
    }
}
