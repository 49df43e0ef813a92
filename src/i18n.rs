use anyhow::Result;
use i18n_embed::{
    fluent::{fluent_language_loader, FluentLanguageLoader},
    unic_langid::LanguageIdentifier,
    DesktopLanguageRequester, LanguageLoader,
};
use lazy_static::lazy_static;
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "i18n/"]
struct Localizations;

lazy_static! {
    pub static ref LANGUAGE_LOADER: FluentLanguageLoader = {
        let loader: FluentLanguageLoader = fluent_language_loader!();

        if let Err(err) = loader.load_fallback_language(&Localizations) {
            log::error!("Failed to load fallback language: {}", err);
        }

        disable_isolation(&loader);

        loader
    };
}

pub struct Language {
    pub id: &'static str,
    pub label: &'static str,
}

pub const LANGUAGES: [Language; 2] = [
    Language {
        id: "en",
        label: "English (English)",
    },
    Language {
        id: "ja",
        label: "日本語 (Japanese)",
    },
];

pub fn find_language(id: &str) -> Option<&'static Language> {
    LANGUAGES
        .iter()
        .find(|language| language.id.eq_ignore_ascii_case(id))
}

pub fn select_locales(request_languages: &[&str]) -> Result<()> {
    let requested_languages: Vec<LanguageIdentifier> = request_languages
        .iter()
        .filter_map(|raw| raw.parse().ok())
        .collect();

    i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &requested_languages)?;

    disable_isolation(&LANGUAGE_LOADER);

    Ok(())
}

pub fn select_system_locales() -> Result<()> {
    let requested_languages = DesktopLanguageRequester::requested_languages();

    i18n_embed::select(&*LANGUAGE_LOADER, &Localizations, &requested_languages)?;

    disable_isolation(&LANGUAGE_LOADER);

    Ok(())
}

// Native message boxes render bidi isolation marks as boxes. The setting only
// reaches bundles that are already loaded, so it is reapplied after every load.
fn disable_isolation(loader: &FluentLanguageLoader) {
    loader.set_use_isolating(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n_embed_fl::fl;

    #[test]
    fn finds_supported_languages() {
        assert_eq!(find_language("ja").map(|l| l.id), Some("ja"));
        assert_eq!(find_language("EN").map(|l| l.id), Some("en"));
        assert!(find_language("xx").is_none());
    }

    #[test]
    fn fallback_messages_are_available() {
        let title = fl!(LANGUAGE_LOADER, "window-title");

        assert_eq!(title, "Stopwatch (Focus)");
    }

    #[test]
    fn arguments_are_not_isolated() {
        let text = fl!(LANGUAGE_LOADER, "dialog-save-done", elapsed = "01:01:01.23");

        assert_eq!(text, "Saved 01:01:01.23 (stub, no database connected).");
    }
}
