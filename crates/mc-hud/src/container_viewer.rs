//! Container viewer: shows the contents of the held shulker box, chest or
//! ender chest as a 3x9 grid of item icons.

use std::borrow::Cow;

use tracing::trace;

use mc_hud_item::container::ENDER_CHEST;
use mc_hud_item::{empty_slots, ItemStack, CONTAINER_COLUMNS, CONTAINER_ROWS};
use mc_hud_render::{Renderer2D, TextureId};

use crate::colors::{ColorResolver, ContainerColors};
use crate::element::{HudElement, HudRenderer};
use crate::error::SettingsError;
use crate::hud_box::HudBox;
use crate::settings::{Background, ContainerViewerSettings};

/// Distance between neighbouring slots, unscaled.
const SLOT_STRIDE: f64 = 18.0;

pub struct ContainerViewer<C = ContainerColors> {
    settings: ContainerViewerSettings,
    colors: C,
    hud_box: HudBox,
}

impl ContainerViewer {
    pub const NAME: &'static str = "container-viewer";

    pub fn new(settings: ContainerViewerSettings) -> Result<Self, SettingsError> {
        Self::with_colors(settings, ContainerColors::default())
    }
}

impl Default for ContainerViewer {
    fn default() -> Self {
        Self {
            settings: ContainerViewerSettings::default(),
            colors: ContainerColors::default(),
            hud_box: HudBox::default(),
        }
    }
}

impl<C: ColorResolver> ContainerViewer<C> {
    pub fn with_colors(settings: ContainerViewerSettings, colors: C) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            colors,
            hud_box: HudBox::default(),
        })
    }

    pub fn settings(&self) -> &ContainerViewerSettings {
        &self.settings
    }

    /// Replace the settings. Invalid settings leave the current ones in place.
    pub fn set_settings(&mut self, settings: ContainerViewerSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Size the box for the current background and scale.
    pub fn layout(&mut self) -> (f64, f64) {
        let (width, height) = self.settings.background.size();
        let scale = self.settings.scale;
        self.hud_box.set_size(width * scale, height * scale);
        self.hud_box.size()
    }

    /// Pick the container to show this frame, if any.
    ///
    /// Editor preview always shows the ender chest. Otherwise the off-hand
    /// wins over the main hand, and a held container with nothing in it
    /// counts as not held.
    pub fn resolve_container<'a>(&self, hud: &HudRenderer<'a>) -> Option<Cow<'a, ItemStack>> {
        if hud.is_in_editor() {
            return Some(Cow::Owned(reference_container()));
        }

        if let Some(player) = hud.player() {
            let contents = hud.contents();
            for stack in [player.off_hand(), player.main_hand()] {
                if contents.has_items(stack) {
                    return Some(Cow::Borrowed(stack));
                }
            }
        }

        self.settings
            .echest_when_empty
            .then(|| Cow::Owned(reference_container()))
    }

    /// Screen position of the icon in `row`, `column`, truncated to whole pixels.
    pub fn slot_position(&self, row: usize, column: usize) -> (i32, i32) {
        let (origin_x, origin_y) = self.settings.background.slot_origin();
        let scale = self.settings.scale;
        let x = self.hud_box.x + (origin_x + column as f64 * SLOT_STRIDE) * scale;
        let y = self.hud_box.y + (origin_y + row as f64 * SLOT_STRIDE) * scale;
        (x as i32, y as i32)
    }

    fn draw_background<R: Renderer2D + ?Sized>(&self, renderer: &mut R, container: &ItemStack) {
        let x = self.hud_box.x as i32;
        let y = self.hud_box.y as i32;
        let w = self.hud_box.width as i32;
        let h = self.hud_box.height as i32;
        let color = self
            .colors
            .color_of(container)
            .with_alpha(self.settings.background_opacity);

        match self.settings.background {
            Background::Texture | Background::Outline => {
                let texture = if self.settings.background == Background::Texture {
                    TextureId::Container
                } else {
                    TextureId::ContainerTransparent
                };
                renderer.bind_texture(texture);
                renderer.tex_quad(x, y, w, h, color);
            }
            Background::Flat => renderer.quad(x, y, w, h, color),
            Background::None => {}
        }
    }
}

/// The container shown when previewing: a plain ender chest.
fn reference_container() -> ItemStack {
    ItemStack::new(ENDER_CHEST, 1)
}

impl<C: ColorResolver> HudElement for ContainerViewer<C> {
    fn name(&self) -> &'static str {
        ContainerViewer::NAME
    }

    fn description(&self) -> &'static str {
        "Displays held containers."
    }

    fn default_active(&self) -> bool {
        false
    }

    fn hud_box(&self) -> &HudBox {
        &self.hud_box
    }

    fn hud_box_mut(&mut self) -> &mut HudBox {
        &mut self.hud_box
    }

    fn update(&mut self, _hud: &HudRenderer<'_>) {
        self.layout();
    }

    fn render(&mut self, hud: &mut HudRenderer<'_>) {
        let Some(container) = self.resolve_container(hud) else {
            trace!("no container to show");
            return;
        };
        trace!(container = %container.name, "showing container");

        if self.settings.background != Background::None {
            self.draw_background(hud.renderer(), &container);
        }

        // Filled fresh every frame; contents can change every tick.
        let mut slots = empty_slots();
        hud.contents().items_in(&container, &mut slots);

        let scale = self.settings.scale;
        for row in 0..CONTAINER_ROWS {
            for column in 0..CONTAINER_COLUMNS {
                let stack = &slots[row * CONTAINER_COLUMNS + column];
                if stack.is_empty() {
                    continue;
                }
                let (x, y) = self.slot_position(row, column);
                hud.renderer().draw_item(stack, x, y, scale, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_hud_game::{EnderChestMemory, GameContents, PlayerHands, PlayerInventory};
    use mc_hud_game::inventory::{CONTAINER_INVENTORY, CONTAINER_OFFHAND};
    use mc_hud_item::container::UNDYED_SHULKER_BOX;
    use mc_hud_item::ItemTagContents;
    use mc_hud_nbt::{NbtCompound, NbtTag};
    use mc_hud_render::{Color, DrawCommand, DrawRecorder};

    fn shulker(name: &str, filled_slots: &[u8]) -> ItemStack {
        let items = filled_slots
            .iter()
            .map(|&slot| {
                NbtTag::Compound(ItemStack::new("minecraft:diamond", slot as u16 + 1).to_slot_entry(slot))
            })
            .collect();
        let mut tag = NbtCompound::new();
        tag.insert("Items".into(), NbtTag::List(items));
        ItemStack::new(name, 1).with_tag(tag)
    }

    fn viewer(background: Background, scale: f64) -> ContainerViewer {
        ContainerViewer::new(ContainerViewerSettings {
            scale,
            background,
            ..Default::default()
        })
        .unwrap()
    }

    fn player(off_hand: ItemStack, main_hand: ItemStack) -> PlayerInventory {
        let mut inv = PlayerInventory::new();
        inv.set_slot(CONTAINER_OFFHAND, 0, off_hand);
        inv.set_slot(CONTAINER_INVENTORY, 0, main_hand);
        inv
    }

    /// Run one update + render and return what was drawn.
    fn frame<C: ColorResolver>(
        viewer: &mut ContainerViewer<C>,
        player: Option<&dyn PlayerHands>,
        in_editor: bool,
        memory: &EnderChestMemory,
    ) -> Vec<DrawCommand> {
        let contents = GameContents::new(memory);
        let mut rec = DrawRecorder::new();
        let mut hud = HudRenderer::new(&mut rec, player, &contents, in_editor);
        viewer.update(&hud);
        viewer.render(&mut hud);
        rec.take()
    }

    fn resolve(
        viewer: &ContainerViewer,
        player: Option<&dyn PlayerHands>,
        in_editor: bool,
    ) -> Option<ItemStack> {
        let mut rec = DrawRecorder::new();
        let hud = HudRenderer::new(&mut rec, player, &ItemTagContents, in_editor);
        viewer.resolve_container(&hud).map(Cow::into_owned)
    }

    #[test]
    fn layout_scales_intrinsic_size() {
        for bg in Background::ALL {
            for scale in [1.0, 1.5, 2.0, 4.0] {
                let mut v = viewer(bg, scale);
                let (w, h) = bg.size();
                assert_eq!(v.layout(), (w * scale, h * scale));
            }
        }
        assert_eq!(viewer(Background::Texture, 2.0).layout(), (352.0, 134.0));
    }

    #[test]
    fn layout_is_idempotent() {
        let mut v = viewer(Background::Flat, 3.0);
        let first = v.layout();
        assert_eq!(v.layout(), first);
        assert_eq!(v.hud_box().size(), first);
    }

    #[test]
    fn layout_follows_settings_changes() {
        let mut v = viewer(Background::Texture, 2.0);
        v.layout();
        v.set_settings(ContainerViewerSettings {
            scale: 1.0,
            background: Background::None,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(v.layout(), (162.0, 54.0));
    }

    #[test]
    fn invalid_settings_are_rejected() {
        let bad = ContainerViewerSettings {
            scale: 0.0,
            ..Default::default()
        };
        assert!(ContainerViewer::new(bad.clone()).is_err());

        let mut v = viewer(Background::Flat, 2.0);
        assert!(v.set_settings(bad).is_err());
        assert_eq!(v.settings().scale, 2.0);
    }

    #[test]
    fn editor_always_shows_reference_container() {
        let v = viewer(Background::Texture, 2.0);
        let inv = player(shulker("minecraft:red_shulker_box", &[0]), ItemStack::empty());
        let resolved = resolve(&v, Some(&inv), true).unwrap();
        assert_eq!(resolved.name, ENDER_CHEST);
        // Even with no player at all.
        assert_eq!(resolve(&v, None, true).unwrap().name, ENDER_CHEST);
    }

    #[test]
    fn off_hand_wins_over_main_hand() {
        let v = viewer(Background::Texture, 2.0);
        let inv = player(
            shulker("minecraft:red_shulker_box", &[0, 1, 2]),
            shulker("minecraft:blue_shulker_box", &[5]),
        );
        let resolved = resolve(&v, Some(&inv), false).unwrap();
        assert_eq!(resolved.name, "minecraft:red_shulker_box");
    }

    #[test]
    fn main_hand_used_when_off_hand_not_a_container() {
        let v = viewer(Background::Texture, 2.0);
        let inv = player(
            ItemStack::new("minecraft:shield", 1),
            shulker("minecraft:blue_shulker_box", &[5]),
        );
        let resolved = resolve(&v, Some(&inv), false).unwrap();
        assert_eq!(resolved.name, "minecraft:blue_shulker_box");
    }

    #[test]
    fn empty_container_counts_as_not_held() {
        let mut v = viewer(Background::Texture, 2.0);
        let inv = player(shulker(UNDYED_SHULKER_BOX, &[]), ItemStack::empty());
        assert!(resolve(&v, Some(&inv), false).is_none());
        assert!(frame(&mut v, Some(&inv), false, &EnderChestMemory::new()).is_empty());

        // Falls through to a non-empty main hand.
        let inv = player(
            shulker(UNDYED_SHULKER_BOX, &[]),
            shulker("minecraft:lime_shulker_box", &[1]),
        );
        assert_eq!(
            resolve(&v, Some(&inv), false).unwrap().name,
            "minecraft:lime_shulker_box"
        );
    }

    #[test]
    fn fallback_to_ender_chest() {
        let mut v = viewer(Background::Texture, 2.0);
        let inv = player(ItemStack::empty(), ItemStack::empty());
        assert!(resolve(&v, Some(&inv), false).is_none());

        v.set_settings(ContainerViewerSettings {
            echest_when_empty: true,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resolve(&v, Some(&inv), false).unwrap().name, ENDER_CHEST);
        assert_eq!(resolve(&v, None, false).unwrap().name, ENDER_CHEST);
    }

    #[test]
    fn no_player_no_fallback_draws_nothing() {
        let mut v = viewer(Background::Texture, 2.0);
        assert!(frame(&mut v, None, false, &EnderChestMemory::new()).is_empty());
    }

    #[test]
    fn slot_positions_texture() {
        let mut v = viewer(Background::Texture, 1.0);
        v.hud_box_mut().set_pos(100.0, 50.0);
        assert_eq!(v.slot_position(1, 4), (100 + 80, 50 + 25));
        assert_eq!(v.slot_position(0, 0), (108, 57));
    }

    #[test]
    fn slot_positions_flat() {
        let mut v = viewer(Background::Flat, 1.0);
        v.hud_box_mut().set_pos(100.0, 50.0);
        assert_eq!(v.slot_position(0, 0), (101, 51));
        assert_eq!(v.slot_position(2, 8), (101 + 144, 51 + 36));
    }

    #[test]
    fn slot_positions_truncate() {
        let mut v = viewer(Background::Outline, 1.5);
        v.hud_box_mut().set_pos(0.0, 0.0);
        // (1 + 18) * 1.5 = 28.5
        assert_eq!(v.slot_position(1, 1), (28, 28));
    }

    #[test]
    fn one_icon_per_filled_slot() {
        let mut v = viewer(Background::Texture, 2.0);
        let filled = [0, 4, 9, 13, 26];
        let inv = player(shulker("minecraft:red_shulker_box", &filled), ItemStack::empty());
        let commands = frame(&mut v, Some(&inv), false, &EnderChestMemory::new());
        let items: Vec<_> = commands.iter().filter(|c| c.is_item()).collect();
        assert_eq!(items.len(), filled.len());

        // Slot 13 is row 1, column 4.
        assert!(items.iter().any(|c| matches!(
            c,
            DrawCommand::Item { x: 160, y: 50, count: 14, scale, show_count: true, .. } if *scale == 2.0
        )));
    }

    #[test]
    fn texture_background_is_tinted() {
        let mut v = ContainerViewer::new(ContainerViewerSettings {
            background_opacity: 100,
            ..Default::default()
        })
        .unwrap();
        v.hud_box_mut().set_pos(10.0, 20.0);
        let inv = player(shulker("minecraft:red_shulker_box", &[0]), ItemStack::empty());
        let commands = frame(&mut v, Some(&inv), false, &EnderChestMemory::new());

        assert_eq!(commands[0], DrawCommand::BindTexture(TextureId::Container));
        assert_eq!(
            commands[1],
            DrawCommand::TexQuad {
                x: 10,
                y: 20,
                width: 352,
                height: 134,
                color: Color::rgb(0xB0, 0x2E, 0x26).with_alpha(100),
            }
        );
        assert_eq!(commands.len(), 3);
    }

    #[test]
    fn outline_background_uses_transparent_texture() {
        let mut v = viewer(Background::Outline, 1.0);
        let inv = player(shulker(UNDYED_SHULKER_BOX, &[3]), ItemStack::empty());
        let commands = frame(&mut v, Some(&inv), false, &EnderChestMemory::new());
        assert_eq!(commands[0], DrawCommand::BindTexture(TextureId::ContainerTransparent));
        assert!(matches!(
            commands[1],
            DrawCommand::TexQuad { width: 162, height: 54, color: Color::WHITE, .. }
        ));
    }

    #[test]
    fn flat_background_is_a_quad() {
        let mut v = viewer(Background::Flat, 2.0);
        let inv = player(shulker(UNDYED_SHULKER_BOX, &[3]), ItemStack::empty());
        let commands = frame(&mut v, Some(&inv), false, &EnderChestMemory::new());
        assert!(matches!(
            commands[0],
            DrawCommand::Quad { width: 324, height: 108, .. }
        ));
        assert_eq!(commands.iter().filter(|c| c.is_background()).count(), 1);
    }

    #[test]
    fn no_background_draws_only_icons() {
        let mut v = viewer(Background::None, 2.0);
        let inv = player(shulker(UNDYED_SHULKER_BOX, &[0, 1, 2, 3]), ItemStack::empty());
        let commands = frame(&mut v, Some(&inv), false, &EnderChestMemory::new());
        assert_eq!(commands.len(), 4);
        assert!(commands.iter().all(DrawCommand::is_item));
    }

    #[test]
    fn editor_preview_draws_ender_chest_frame() {
        let mut v = viewer(Background::Texture, 2.0);
        let commands = frame(&mut v, None, true, &EnderChestMemory::new());
        // Empty memory: frame only.
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[1],
            DrawCommand::TexQuad { color, .. } if color == ContainerColors::DEFAULT_ENDER_CHEST
        ));
    }

    #[test]
    fn custom_color_resolver() {
        struct Always(Color);
        impl ColorResolver for Always {
            fn color_of(&self, _: &ItemStack) -> Color {
                self.0
            }
        }
        let mut v = ContainerViewer::with_colors(
            ContainerViewerSettings {
                background: Background::Flat,
                background_opacity: 7,
                ..Default::default()
            },
            Always(Color::BLACK),
        )
        .unwrap();
        let inv = player(shulker(UNDYED_SHULKER_BOX, &[0]), ItemStack::empty());
        let commands = frame(&mut v, Some(&inv), false, &EnderChestMemory::new());
        assert!(matches!(
            commands[0],
            DrawCommand::Quad { color: Color { r: 0, g: 0, b: 0, a: 7 }, .. }
        ));
    }

    fn remembered(slots: &[usize]) -> EnderChestMemory {
        EnderChestMemory::with_items(
            slots
                .iter()
                .map(|&slot| (slot, ItemStack::new("minecraft:elytra", 1))),
        )
    }

    fn drawn_items(commands: &[DrawCommand]) -> Vec<(&str, i32, i32)> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Item { name, x, y, .. } => Some((name.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn editor_preview_shows_remembered_ender_chest() {
        let mut v = viewer(Background::Texture, 2.0);
        let commands = frame(&mut v, None, true, &remembered(&[0, 13, 26]));
        assert_eq!(commands.len(), 5);
        assert_eq!(
            drawn_items(&commands),
            vec![
                ("minecraft:elytra", 16, 14),
                ("minecraft:elytra", 160, 50),
                ("minecraft:elytra", 304, 86),
            ]
        );
    }

    #[test]
    fn held_ender_chest_shows_memory() {
        let mut v = viewer(Background::Flat, 1.0);
        let inv = player(
            ItemStack::new(ENDER_CHEST, 1),
            shulker("minecraft:blue_shulker_box", &[5]),
        );

        let commands = frame(&mut v, Some(&inv), false, &remembered(&[2, 3]));
        assert!(matches!(
            commands[0],
            DrawCommand::Quad { color, .. } if color == ContainerColors::DEFAULT_ENDER_CHEST
        ));
        assert_eq!(
            drawn_items(&commands),
            vec![("minecraft:elytra", 37, 1), ("minecraft:elytra", 55, 1)]
        );

        // Nothing remembered: the ender chest is not a candidate.
        let commands = frame(&mut v, Some(&inv), false, &EnderChestMemory::new());
        assert!(matches!(
            commands[0],
            DrawCommand::Quad { color, .. } if color != ContainerColors::DEFAULT_ENDER_CHEST
        ));
        assert_eq!(drawn_items(&commands), vec![("minecraft:diamond", 91, 1)]);
    }

    #[test]
    fn short_main_inventory_draws_nothing() {
        let mut v = viewer(Background::Texture, 2.0);
        let mut inv = player(ItemStack::empty(), shulker("minecraft:red_shulker_box", &[0]));
        inv.select_hotbar(5);
        inv.main.truncate(3);
        assert!(frame(&mut v, Some(&inv), false, &EnderChestMemory::new()).is_empty());
    }
}
