//! Module argument file loading
//!
//! The automation engine hands a binary module the path of a JSON file holding
//! every argument. Keys prefixed with `_ansible_` carry engine settings such as
//! check mode; everything else must be a parameter the module declares.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};

const INTERNAL_PREFIX: &str = "_ansible_";
const CHECK_MODE_KEY: &str = "_ansible_check_mode";

/// Raw module arguments split from engine-internal settings
#[derive(Debug, Clone, Default)]
pub struct ModuleArgs {
    params: Map<String, Value>,
    check_mode: bool,
}

impl ModuleArgs {
    /// Build from an already-parsed JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(Error::config("module arguments must be a JSON object"));
        };

        let mut params = Map::new();
        let mut check_mode = false;

        for (key, value) in map {
            if key == CHECK_MODE_KEY {
                check_mode = value.as_bool().unwrap_or(false);
            } else if key.starts_with(INTERNAL_PREFIX) {
                debug!(key = %key, "Ignoring engine-internal argument");
            } else {
                params.insert(key, value);
            }
        }

        Ok(Self { params, check_mode })
    }

    /// Whether the engine asked for a dry run
    pub fn check_mode(&self) -> bool {
        self.check_mode
    }

    /// Force check mode on (e.g. from the command line)
    pub fn with_check_mode(mut self, check_mode: bool) -> Self {
        self.check_mode |= check_mode;
        self
    }

    /// Deserialize the parameters into `T`, rejecting names outside `allowed`
    pub fn parse<T: DeserializeOwned>(&self, allowed: &[&[&str]]) -> Result<T> {
        let mut unsupported: Vec<&str> = self
            .params
            .keys()
            .map(String::as_str)
            .filter(|key| !allowed.iter().any(|group| group.contains(key)))
            .collect();

        if !unsupported.is_empty() {
            unsupported.sort_unstable();
            return Err(Error::validation(format!(
                "Unsupported parameters: {}",
                unsupported.join(", ")
            )));
        }

        serde_json::from_value(Value::Object(self.params.clone()))
            .map_err(|e| Error::validation(e.to_string()))
    }
}

/// Load module arguments from a JSON file, or YAML when the extension says so
pub fn load_args(path: &Path) -> Result<ModuleArgs> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read argument file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    );

    let value: Value = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    ModuleArgs::from_value(value)
}
