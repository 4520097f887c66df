//! HUD element contract and the per-frame context elements draw with.

use mc_hud_game::PlayerHands;
use mc_hud_item::ContainerContents;
use mc_hud_render::Renderer2D;

use crate::hud_box::HudBox;

/// Everything an element may read or draw to during one frame.
///
/// Built by the host for each frame and dropped afterwards; elements must
/// not keep anything borrowed from it.
pub struct HudRenderer<'a> {
    renderer: &'a mut dyn Renderer2D,
    player: Option<&'a dyn PlayerHands>,
    contents: &'a dyn ContainerContents,
    in_editor: bool,
}

impl<'a> HudRenderer<'a> {
    pub fn new(
        renderer: &'a mut dyn Renderer2D,
        player: Option<&'a dyn PlayerHands>,
        contents: &'a dyn ContainerContents,
        in_editor: bool,
    ) -> Self {
        Self {
            renderer,
            player,
            contents,
            in_editor,
        }
    }

    /// Whether the HUD is shown in the editor, where elements draw
    /// placeholder content instead of live game state.
    pub fn is_in_editor(&self) -> bool {
        self.in_editor
    }

    /// The controlled player, if one exists this frame.
    pub fn player(&self) -> Option<&'a dyn PlayerHands> {
        self.player
    }

    pub fn contents(&self) -> &'a dyn ContainerContents {
        self.contents
    }

    pub fn renderer(&mut self) -> &mut (dyn Renderer2D + 'a) {
        &mut *self.renderer
    }
}

/// A HUD element. The host calls [`HudElement::update`] and then
/// [`HudElement::render`] once per frame while the element is active.
pub trait HudElement {
    /// Unique, kebab-case name.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Whether a freshly added element starts active.
    fn default_active(&self) -> bool {
        true
    }

    fn hud_box(&self) -> &HudBox;

    fn hud_box_mut(&mut self) -> &mut HudBox;

    /// Recompute size from current settings. Runs before `render`.
    fn update(&mut self, hud: &HudRenderer<'_>);

    fn render(&mut self, hud: &mut HudRenderer<'_>);
}
