// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for the keyspell command line.
//!
//! Settings are read from YAML or TOML (chosen by file extension). Every
//! field has a default, so an empty file is valid.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{KeySignature, Note, Spelling};
use crate::selection::Notation;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Root used when a command omits one (e.g., "C", "F#", "Bb")
    #[serde(default = "default_root")]
    pub default_root: String,
    /// Spelling of chromatic scales on C
    #[serde(default = "default_c_spelling")]
    pub c_spelling: Spelling,
    /// How accidentals are printed
    #[serde(default)]
    pub notation: Notation,
}

fn default_root() -> String {
    "C".to_string()
}
fn default_c_spelling() -> Spelling {
    Spelling::Flats
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_root: default_root(),
            c_spelling: default_c_spelling(),
            notation: Notation::default(),
        }
    }
}

impl Settings {
    /// Load settings from a `.yaml`/`.yml` or `.toml` file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let settings = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            _ => Self::from_yaml(&contents)?,
        };
        tracing::debug!(?path, ?settings, "loaded settings");
        Ok(settings)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document, treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse YAML configuration")
    }

    /// Parse settings from a TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML configuration")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }

    /// Save settings to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))
    }

    /// The configured default root
    pub fn root(&self) -> Result<Note> {
        let root = Note::parse(&self.default_root)
            .with_context(|| format!("Invalid default_root in config: {}", self.default_root))?;
        KeySignature::of(root)
            .with_context(|| format!("Invalid default_root in config: {}", self.default_root))?;
        Ok(root)
    }
}
