use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::language::Language;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultLanguageConfigItem {
    pub value: String,
    #[serde(default)]
    pub description: String,
}
impl Default for DefaultLanguageConfigItem {
    fn default() -> Self {
        Self {
            value: Language::DEFAULT.to_string(),
            description: "Language used unless exactly one argument is given".to_string(),
        }
    }
}
impl ConfigItem<String> for DefaultLanguageConfigItem {
    fn get_value(&self) -> &String {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

/// Per-language module path overrides, keyed by language tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModulesConfigItem {
    #[serde(default)]
    pub value: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pub description: String,
}
impl Default for ModulesConfigItem {
    fn default() -> Self {
        Self {
            value: BTreeMap::new(),
            description: "Module path overrides by language".to_string(),
        }
    }
}
impl ConfigItem<BTreeMap<String, PathBuf>> for ModulesConfigItem {
    fn get_value(&self) -> &BTreeMap<String, PathBuf> {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: bool,
    #[serde(default)]
    pub description: String,
}
impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: false,
            description: "Write a session log file".to_string(),
        }
    }
}
impl ConfigItem<bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleLoggingConfigItem {
    pub value: bool,
    #[serde(default)]
    pub description: String,
}
impl Default for ConsoleLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: false,
            description: "Echo log lines to stderr".to_string(),
        }
    }
}
impl ConfigItem<bool> for ConsoleLoggingConfigItem {
    fn get_value(&self) -> &bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogDirConfigItem {
    pub value: PathBuf,
    #[serde(default)]
    pub description: String,
}
impl Default for LogDirConfigItem {
    fn default() -> Self {
        Self {
            value: PathBuf::from("logs"),
            description: "Directory for session log files".to_string(),
        }
    }
}
impl ConfigItem<PathBuf> for LogDirConfigItem {
    fn get_value(&self) -> &PathBuf {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
