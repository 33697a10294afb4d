//! Static portfolio content
//!
//! Projects, skills, and site metadata are compiled in, the same data the
//! frontend sections render. Localized strings live in [`crate::i18n`]; this
//! module carries the language-independent records.

mod projects;
mod skills;

pub use projects::{filtered, projects, Category, Project, UnknownCategory};
pub use skills::{skill_categories, SkillCategory};

use serde::Serialize;

use crate::i18n::Locale;

/// Site-wide metadata advertised to the frontend. Theme selection itself
/// happens client-side; the API only names the available choices and the
/// browser storage key the frontend persists under.
#[derive(Debug, Clone, Serialize)]
pub struct SiteMeta {
    pub name: &'static str,
    pub locales: &'static [&'static str],
    pub default_locale: Locale,
    pub themes: &'static [&'static str],
    pub default_theme: &'static str,
    pub theme_storage_key: &'static str,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub fn site_meta(default_locale: Locale) -> SiteMeta {
    SiteMeta {
        name: "Abderraouf Abdallah",
        locales: &["en", "fr"],
        default_locale,
        themes: &["light", "dark"],
        default_theme: "dark",
        theme_storage_key: "theme",
        contact: ContactInfo {
            email: "devcode.raouf@gmail.com",
            phone: "+33 7 69 35 31 22",
            location: "Le Havre, France",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_meta_lists_both_locales_and_themes() {
        let meta = site_meta(Locale::En);
        assert_eq!(meta.locales, ["en", "fr"]);
        assert_eq!(meta.themes, ["light", "dark"]);
        assert!(meta.themes.contains(&meta.default_theme));
    }
}
