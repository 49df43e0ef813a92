use crate::icons::{load_rgba, ICON_DIR};
use anyhow::Result;
use std::path::Path;
use winit::window::Icon;

const APP_ICON: &str = "app.png";

// winit ignores window icons on macOS, where the bundle icon is used.
pub fn window_icon(resource_dir: &Path) -> Option<Icon> {
    let path = resource_dir.join(ICON_DIR).join(APP_ICON);

    match window_icon_from_file(&path) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("Failed to load window icon {}: {}", path.display(), err);
            None
        }
    }
}

fn window_icon_from_file(path: &Path) -> Result<Icon> {
    let (width, height, data) = load_rgba(path)?;

    let icon = Icon::from_rgba(data, width, height)?;

    Ok(icon)
}
