use anyhow::{Context, Result};
use dissection::api::CalloutStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// User settings loaded from an optional JSON file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub abbreviated_callouts: bool,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    /// Settings file (if any), with `--abbreviated` taking precedence.
    pub fn resolve(path: Option<&Path>, abbreviated: bool) -> Result<Self> {
        let mut settings = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        if abbreviated {
            settings.abbreviated_callouts = true;
        }
        Ok(settings)
    }

    pub fn style(&self) -> CalloutStyle {
        if self.abbreviated_callouts {
            CalloutStyle::Abbreviated
        } else {
            CalloutStyle::Verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_keys_default_to_verbose() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();
        let s = Settings::load(&path).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.style(), CalloutStyle::Verbose);
    }

    #[test]
    fn flag_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"abbreviated_callouts": false}"#).unwrap();
        let s = Settings::resolve(Some(&path), true).unwrap();
        assert_eq!(s.style(), CalloutStyle::Abbreviated);
        let s = Settings::resolve(Some(&path), false).unwrap();
        assert_eq!(s.style(), CalloutStyle::Verbose);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        let err = Settings::load(&path).unwrap_err();
        assert!(err.to_string().contains("parsing"));
        assert!(Settings::load(&dir.path().join("absent.json")).is_err());
    }
}
