#![windows_subsystem = "windows"]

mod app;
mod controller;
mod dialog;
mod egui_winit_wgpu_context;
mod event;
mod fonts;
mod format;
mod i18n;
mod icons;
mod main_window;
mod preferences;
mod shortcut;
mod stopwatch;
mod ui;
mod window;
mod window_icon;

use anyhow::Result;
use preferences::Preferences;

fn main() -> Result<()> {
    env_logger::init();

    let preferences = Preferences::from_env();

    select_language(&preferences);

    let app = app::App::new(&preferences)?;

    app.run();

    Ok(())
}

fn select_language(preferences: &Preferences) {
    let result = match preferences.language.as_deref() {
        Some(id) => match i18n::find_language(id) {
            Some(language) => {
                log::info!("Using language {}", language.label);
                i18n::select_locales(&[language.id])
            }
            None => {
                log::warn!("Unsupported language {:?}, using system languages", id);
                i18n::select_system_locales()
            }
        },
        None => i18n::select_system_locales(),
    };

    if let Err(err) = result {
        log::warn!("Failed to select language: {}", err);
    }
}
