
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use once_cell::sync::Lazy;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::errors::{Error, Result};

/// Languages a greeting module exists for. Tags are matched exactly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, Display, AsRefStr,
    EnumIterDerive,
)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    English,
    Chinese,
    Swedish,
}

static DEFAULT_MODULES: Lazy<BTreeMap<Language, PathBuf>> = Lazy::new(|| {
    BTreeMap::from([
        (Language::English, PathBuf::from("./eng/eng.so")),
        (Language::Chinese, PathBuf::from("./chi/chi.so")),
        (Language::Swedish, PathBuf::from("./swe/swe.so")),
    ])
});

impl Language {
    pub const DEFAULT: Language = Language::English;

    pub fn try_from(tag: &str) -> Result<Self> {
        Self::from_str(tag).map_err(|_| Error::unknown_language(tag))
    }

    /// Relative path of the shared object shipped for this language.
    pub fn default_module_path(&self) -> &'static Path {
        // Every variant has an entry.
        DEFAULT_MODULES[self].as_path()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}
