mod config;
mod scenario;

use std::time::Duration;

use config::ClientConfig;
use mc_hud::{ContainerColors, ContainerViewer, Hud, HudElement};
use mc_hud_game::GameContents;
use mc_hud_render::DrawRecorder;
use tracing::{debug, error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let path = std::env::args().nth(1).unwrap_or_else(|| "hud.toml".into());
    let config = match ClientConfig::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load {path}: {e}");
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("MC-HUD preview v{} using {}", env!("CARGO_PKG_VERSION"), path);

    let section = &config.container_viewer;
    let mut colors = ContainerColors::default();
    if let Some(color) = section.ender_chest_color {
        colors.ender_chest = color;
    }
    let mut viewer = match ContainerViewer::with_colors(section.settings.clone(), colors) {
        Ok(v) => v,
        Err(e) => {
            error!("Invalid container viewer settings: {e}");
            std::process::exit(1);
        }
    };
    viewer.hud_box_mut().set_pos(section.x, section.y);
    info!(
        "Container viewer at ({}, {}), scale {}, background {:?}",
        section.x, section.y, section.settings.scale, section.settings.background
    );

    let mut hud = Hud::new();
    hud.add(Box::new(viewer));
    hud.set_active(ContainerViewer::NAME, true);
    hud.set_editor(config.hud.editor);

    let inventory = match config.player.inventory() {
        Ok(i) => i,
        Err(e) => {
            error!("Invalid item user data in [player]: {e}");
            std::process::exit(1);
        }
    };
    let memory = scenario::ender_chest_memory(&config.ender_chest);
    let contents = GameContents::new(&memory);
    let mut recorder = DrawRecorder::new();

    let mut interval = tokio::time::interval(Duration::from_millis(config.hud.frame_interval_ms.max(1)));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut frame: u64 = 0;
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
            _ = interval.tick() => {}
        }

        hud.frame(&mut recorder, Some(&inventory), &contents);
        frame += 1;

        let items = recorder.item_draws();
        let backgrounds = recorder.background_draws();
        for command in recorder.take() {
            debug!("{command}");
        }
        info!(frame, items, backgrounds, "Frame rendered");

        if config.hud.frames != 0 && frame >= config.hud.frames {
            break;
        }
    }

    info!("Preview finished after {frame} frames");
}
