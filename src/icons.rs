use anyhow::Result;
use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use std::{
    env,
    path::{Path, PathBuf},
};

pub const ICON_DIR: &str = "icons";
/// Folder used by earlier releases, with numbered file names.
pub const LEGACY_ICON_DIR: &str = "icon";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IconKind {
    Play,
    Pause,
    Reset,
    Save,
}

impl IconKind {
    pub const ALL: [IconKind; 4] = [Self::Play, Self::Pause, Self::Reset, Self::Save];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Play => "play.png",
            Self::Pause => "pause.png",
            Self::Reset => "reset.png",
            Self::Save => "save.png",
        }
    }

    pub fn legacy_file_name(self) -> &'static str {
        match self {
            Self::Play => "764.png",
            Self::Pause => "804.png",
            Self::Reset => "495.png",
            Self::Save => "4436.png",
        }
    }

    /// Every location the icon may live in, preferred first.
    pub fn candidates(self, resource_dir: &Path) -> [PathBuf; 2] {
        [
            resource_dir.join(ICON_DIR).join(self.file_name()),
            resource_dir.join(LEGACY_ICON_DIR).join(self.legacy_file_name()),
        ]
    }

    /// Shown in place of the image when it could not be loaded.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
            Self::Reset => "↺",
            Self::Save => "💾",
        }
    }

    pub fn size(self) -> f32 {
        match self {
            Self::Play | Self::Pause => 36.0,
            Self::Reset | Self::Save => 28.0,
        }
    }
}

#[derive(Default)]
pub struct IconSet {
    play: Option<TextureHandle>,
    pause: Option<TextureHandle>,
    reset: Option<TextureHandle>,
    save: Option<TextureHandle>,
}

impl IconSet {
    /// Loads every icon it can; missing or broken files are skipped with a
    /// warning.
    pub fn load(ctx: &Context, resource_dir: &Path) -> Self {
        let mut icons = Self::default();

        for kind in IconKind::ALL {
            let texture = load_first(&kind.candidates(resource_dir)).map(|(width, height, data)| {
                ctx.load_texture(
                    kind.file_name(),
                    ColorImage::from_rgba_unmultiplied([width as usize, height as usize], &data),
                    TextureOptions::LINEAR,
                )
            });

            *icons.slot_mut(kind) = texture;
        }

        icons
    }

    pub fn get(&self, kind: IconKind) -> Option<&TextureHandle> {
        match kind {
            IconKind::Play => self.play.as_ref(),
            IconKind::Pause => self.pause.as_ref(),
            IconKind::Reset => self.reset.as_ref(),
            IconKind::Save => self.save.as_ref(),
        }
    }

    fn slot_mut(&mut self, kind: IconKind) -> &mut Option<TextureHandle> {
        match kind {
            IconKind::Play => &mut self.play,
            IconKind::Pause => &mut self.pause,
            IconKind::Reset => &mut self.reset,
            IconKind::Save => &mut self.save,
        }
    }
}

fn load_first(paths: &[PathBuf]) -> Option<(u32, u32, Vec<u8>)> {
    for path in paths {
        match load_rgba(path) {
            Ok(image) => return Some(image),
            Err(err) => log::debug!("Cannot load icon {}: {}", path.display(), err),
        }
    }

    if let Some(path) = paths.first() {
        log::warn!("Cannot load icon {}, using text instead", path.display());
    }

    None
}

pub fn load_rgba(path: &Path) -> Result<(u32, u32, Vec<u8>)> {
    let image = image::open(path)?;

    let image = image.into_rgba8();

    let width = image.width();
    let height = image.height();
    let data = image.into_vec();

    Ok((width, height, data))
}

/// Directory that holds the optional `icons/` folder: the configured one,
/// then the executable's directory, then the working directory.
pub fn resource_dir(configured: Option<&Path>) -> PathBuf {
    if let Some(dir) = configured {
        return dir.to_path_buf();
    }

    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
