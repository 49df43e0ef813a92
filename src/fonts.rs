use anyhow::Result;
use egui::{FontData, FontDefinitions, FontFamily};
use font_kit::{
    family_name::FamilyName, handle::Handle, properties::Properties, source::SystemSource,
};
use std::fs::read;

// Families with Japanese coverage, tried in order before the generic sans-serif.
const CJK_FAMILIES: [&str; 5] = [
    "Yu Gothic UI",
    "Meiryo",
    "Hiragino Sans",
    "Noto Sans CJK JP",
    "Noto Sans JP",
];

pub fn append_font(fonts: &mut FontDefinitions, font_name: &str, font_data: FontData) {
    fonts.font_data.insert(font_name.to_owned(), font_data);

    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        if let Some(vec) = fonts.families.get_mut(&family) {
            vec.push(font_name.to_owned());
        }
    }
}

/// egui's bundled fonts plus a system font as the last fallback.
pub fn font_definitions() -> FontDefinitions {
    let mut fonts = FontDefinitions::default();

    match system_font() {
        Ok(font) => append_font(&mut fonts, "System", font),
        Err(err) => log::warn!("Failed to load system fonts: {}", err),
    }

    fonts
}

fn system_font() -> Result<FontData> {
    let mut families: Vec<FamilyName> = CJK_FAMILIES
        .iter()
        .map(|name| FamilyName::Title(name.to_string()))
        .collect();
    families.push(FamilyName::SansSerif);

    let handle = SystemSource::new().select_best_match(&families, &Properties::new())?;

    let buf: Vec<u8> = match handle {
        Handle::Memory { bytes, .. } => bytes.to_vec(),
        Handle::Path { path, .. } => read(path)?,
    };

    Ok(FontData::from_owned(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appended_font_is_last_fallback() {
        let mut fonts = FontDefinitions::default();
        append_font(&mut fonts, "Extra", FontData::from_static(&[]));

        assert!(fonts.font_data.contains_key("Extra"));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            assert_eq!(
                fonts.families[&family].last().map(String::as_str),
                Some("Extra")
            );
        }
    }
}
