//! Bilingual string tables and resume timeline data
//!
//! Every user-facing string of the site lives here, keyed the same way the
//! frontend looks it up (`section.key`). The resume timeline is structured data
//! carried in its own namespace so it stays typed instead of round-tripping
//! through the flat table.

mod en;
mod fr;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Two-letter language selector. English is the fallback language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown locale: {0}")]
pub struct UnknownLocale(pub String);

/// One entry of the resume timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: u32,
    pub title: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: TimelineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Experience,
    Education,
}

/// Look up a flat string. Falls back to English before giving up.
pub fn text(locale: Locale, key: &str) -> Option<&'static str> {
    lookup(strings(locale), key).or_else(|| lookup(strings(Locale::En), key))
}

/// The whole flat table for a locale, for handing to the frontend in one call.
pub fn strings(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => en::STRINGS,
        Locale::Fr => fr::STRINGS,
    }
}

/// The localized resume timeline, newest first within each kind.
pub fn timeline(locale: Locale) -> &'static [TimelineEntry] {
    match locale {
        Locale::En => en::TIMELINE,
        Locale::Fr => fr::TIMELINE,
    }
}

fn lookup(
    table: &'static [(&'static str, &'static str)],
    key: &str,
) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("EN"), Some(Locale::En));
        assert_eq!(Locale::from_code("de"), None);
        assert!("es".parse::<Locale>().is_err());
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        for (key, _) in strings(Locale::En) {
            assert!(
                text(Locale::Fr, key).is_some(),
                "missing french translation for {key}"
            );
        }
        for (key, _) in strings(Locale::Fr) {
            assert!(
                text(Locale::En, key).is_some(),
                "missing english translation for {key}"
            );
        }
    }

    #[test]
    fn lookup_is_localized() {
        assert_eq!(text(Locale::En, "nav.home"), Some("Home"));
        assert_eq!(text(Locale::Fr, "nav.home"), Some("Accueil"));
        assert_eq!(text(Locale::En, "nav.nope"), None);
    }

    #[test]
    fn timelines_are_parallel() {
        let en = timeline(Locale::En);
        let fr = timeline(Locale::Fr);
        assert_eq!(en.len(), fr.len());
        for (a, b) in en.iter().zip(fr) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
        }
        assert!(en.iter().any(|e| e.kind == TimelineKind::Experience));
        assert!(en.iter().any(|e| e.kind == TimelineKind::Education));
    }
}
