pub mod models;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, ConsoleLoggingConfigItem, DefaultLanguageConfigItem, FileLoggingConfigItem,
    LogDirConfigItem, ModulesConfigItem,
};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::language::Language;

pub const DEFAULT_CONFIG_FILE: &str = "greeter.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    DefaultLanguage,
    Modules,
    FileLoggingEnabled,
    ConsoleLoggingEnabled,
    LogDir,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub default_language: DefaultLanguageConfigItem,
    #[serde(default)]
    pub modules: ModulesConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
    #[serde(default)]
    pub console_logging_enabled: ConsoleLoggingConfigItem,
    #[serde(default)]
    pub log_dir: LogDirConfigItem,
}

/// Launcher settings. Validated once at load so lookups cannot fail later.
#[derive(Debug, Clone)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
    default_language: Language,
    modules: BTreeMap<Language, PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            data: ConfigFile::default(),
            default_language: Language::DEFAULT,
            modules: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Reads `greeter.json` from the working directory, or falls back to defaults when it is absent.
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(DEFAULT_CONFIG_FILE)
    }

    /// Only a file that does not exist falls back to defaults; any other
    /// failure to inspect it is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match fs::metadata(path.as_ref()) {
            Ok(_) => Self::load_from(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        let mut cfg = Self::from_file(data)?;
        cfg.path = Some(path);
        Ok(cfg)
    }

    pub fn from_file(data: ConfigFile) -> Result<Self> {
        let default_language = parse_language(data.default_language.get_value())?;
        let mut modules = BTreeMap::new();
        for (tag, module) in data.modules.get_value() {
            modules.insert(parse_language(tag)?, module.clone());
        }
        Ok(Self {
            path: None,
            data,
            default_language,
            modules,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Override from the config file, otherwise the shipped location.
    pub fn module_path(&self, language: Language) -> &Path {
        self.modules
            .get(&language)
            .map(PathBuf::as_path)
            .unwrap_or_else(|| language.default_module_path())
    }

    pub fn file_logging_enabled(&self) -> bool {
        *self.data.file_logging_enabled.get_value()
    }

    pub fn console_logging_enabled(&self) -> bool {
        *self.data.console_logging_enabled.get_value()
    }

    pub fn log_dir(&self) -> &Path {
        self.data.log_dir.get_value()
    }

    /// (key, description, value) triples in declaration order.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        ConfigKey::iter()
            .map(|key| {
                let (description, value) = match key {
                    ConfigKey::DefaultLanguage => (
                        self.data.default_language.description(),
                        self.default_language.to_string(),
                    ),
                    ConfigKey::Modules => (
                        self.data.modules.description(),
                        Language::iter()
                            .map(|lang| {
                                format!("{lang}={}", self.module_path(lang).display())
                            })
                            .collect::<Vec<_>>()
                            .join(", "),
                    ),
                    ConfigKey::FileLoggingEnabled => (
                        self.data.file_logging_enabled.description(),
                        self.file_logging_enabled().to_string(),
                    ),
                    ConfigKey::ConsoleLoggingEnabled => (
                        self.data.console_logging_enabled.description(),
                        self.console_logging_enabled().to_string(),
                    ),
                    ConfigKey::LogDir => (
                        self.data.log_dir.description(),
                        self.log_dir().display().to_string(),
                    ),
                };
                (key.to_string(), description.to_string(), value)
            })
            .collect()
    }
}

fn parse_language(tag: &str) -> Result<Language> {
    Language::try_from(tag).map_err(|_| {
        Error::config(format!(
            "Unknown language '{}'. Allowed languages: {}",
            tag,
            valid_csv::<Language>()
        ))
    })
}
