#![warn(clippy::all)]

use anyhow::Context;
use torus_life::{App, Config, Session};

fn main() -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let session = Session::startup()?;

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(App::window_width(), App::window_height()))
            .with_resizable(false),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        Config::APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, session)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("event loop failed")
}
