use egui::Color32;
use std::{env, path::PathBuf, time::Duration};

const DEFAULT_TICK_MS: u64 = 10;
const MAX_TICK_MS: u64 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                background: Color32::from_rgb(0x0E, 0x14, 0x1B),
                foreground: Color32::from_rgb(0xDD, 0xE5, 0xEE),
                accent: Color32::from_rgb(0xFF, 0xD5, 0x4F),
                accent_hover: Color32::from_rgb(0xFF, 0xC1, 0x07),
                on_accent: Color32::from_rgb(0x0E, 0x14, 0x1B),
            },
            Self::Light => Palette {
                background: Color32::from_rgb(0xF4, 0xF6, 0xF8),
                foreground: Color32::from_rgb(0x1B, 0x23, 0x2C),
                accent: Color32::from_rgb(0xFF, 0xD5, 0x4F),
                accent_hover: Color32::from_rgb(0xFF, 0xC1, 0x07),
                on_accent: Color32::from_rgb(0x1B, 0x23, 0x2C),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color32,
    pub foreground: Color32,
    pub accent: Color32,
    pub accent_hover: Color32,
    pub on_accent: Color32,
}

#[derive(Debug, PartialEq)]
pub struct Preferences {
    pub language: Option<String>,
    pub maximized: bool,
    pub resource_dir: Option<PathBuf>,
    pub theme: Theme,
    pub tick_interval: Duration,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: None,
            maximized: true,
            resource_dir: None,
            theme: Theme::default(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
        }
    }
}

impl Preferences {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds preferences from `FOCUSWATCH_*` variables. Values that do not
    /// parse are logged and left at their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut preferences = Self::default();

        if let Some(theme) = lookup("FOCUSWATCH_THEME") {
            match theme.trim().to_ascii_lowercase().as_str() {
                "dark" => preferences.theme = Theme::Dark,
                "light" => preferences.theme = Theme::Light,
                _ => log::warn!("Unknown theme {:?}, using default", theme),
            }
        }

        if let Some(tick) = lookup("FOCUSWATCH_TICK_MS") {
            match tick.trim().parse::<u64>() {
                Ok(ms) if (1..=MAX_TICK_MS).contains(&ms) => {
                    preferences.tick_interval = Duration::from_millis(ms)
                }
                _ => log::warn!("Invalid tick interval {:?}, using default", tick),
            }
        }

        if let Some(language) = lookup("FOCUSWATCH_LANG") {
            let language = language.trim();
            if !language.is_empty() {
                preferences.language = Some(language.to_owned());
            }
        }

        if let Some(dir) = lookup("FOCUSWATCH_RESOURCE_DIR") {
            if !dir.is_empty() {
                preferences.resource_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(maximized) = lookup("FOCUSWATCH_MAXIMIZED") {
            match maximized.trim().parse::<bool>() {
                Ok(maximized) => preferences.maximized = maximized,
                Err(_) => log::warn!("Invalid maximized flag {:?}, using default", maximized),
            }
        }

        preferences
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(Preferences::from_lookup(|_| None), Preferences::default());
        assert_eq!(
            Preferences::default().tick_interval,
            Duration::from_millis(10)
        );
    }

    #[test]
    fn reads_all_variables() {
        let preferences = Preferences::from_lookup(lookup(&[
            ("FOCUSWATCH_THEME", "Light"),
            ("FOCUSWATCH_TICK_MS", "25"),
            ("FOCUSWATCH_LANG", "ja"),
            ("FOCUSWATCH_RESOURCE_DIR", "/opt/focuswatch"),
            ("FOCUSWATCH_MAXIMIZED", "false"),
        ]));

        assert_eq!(
            preferences,
            Preferences {
                language: Some("ja".to_owned()),
                maximized: false,
                resource_dir: Some(PathBuf::from("/opt/focuswatch")),
                theme: Theme::Light,
                tick_interval: Duration::from_millis(25),
            }
        );
    }

    #[test]
    fn ignores_invalid_values() {
        let preferences = Preferences::from_lookup(lookup(&[
            ("FOCUSWATCH_THEME", "sepia"),
            ("FOCUSWATCH_TICK_MS", "0"),
            ("FOCUSWATCH_LANG", "  "),
            ("FOCUSWATCH_MAXIMIZED", "sometimes"),
        ]));

        assert_eq!(preferences, Preferences::default());

        let preferences =
            Preferences::from_lookup(lookup(&[("FOCUSWATCH_TICK_MS", "5000")]));
        assert_eq!(preferences.tick_interval, Duration::from_millis(10));
    }
}
