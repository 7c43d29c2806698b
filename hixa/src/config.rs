// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "hixa.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub interpreter: ConfigSectionInterpreter,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionInterpreter {
    /// Nested user function calls deeper than this raise a runtime error.
    pub max_call_depth: usize,
}

impl ConfigSectionInterpreter {
    pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;
}

impl Default for ConfigSectionInterpreter {
    fn default() -> Self {
        Self {
            max_call_depth: Self::DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config: ConfigRoot = toml::from_str("").unwrap();
        assert!(!config.log.debug);
        assert_eq!(config.interpreter.max_call_depth, 256);
    }

    #[test]
    fn sections_are_kebab_case() {
        let config: ConfigRoot = toml::from_str("[log]\ndebug = true\n\n[interpreter]\nmax-call-depth = 12\n").unwrap();
        assert!(config.log.debug);
        assert_eq!(config.interpreter.max_call_depth, 12);
    }

    #[test]
    fn missing_section_keeps_other_defaults() {
        let config: ConfigRoot = toml::from_str("[log]\ndebug = true\n").unwrap();
        assert_eq!(config.interpreter.max_call_depth, ConfigSectionInterpreter::DEFAULT_MAX_CALL_DEPTH);
    }
}
