//! Arguments of the `options_lldp_enable` module

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::connection::ConnectionParams;

/// Parameter names specific to `options_lldp_enable`
pub const LLDP_FIELDS: &[&str] = &["lldp_enable"];

/// Desired value of `lldp.enable`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum LldpSetting {
    On,
    Off,
}

impl LldpSetting {
    /// Value as ONTAP stores it
    pub fn as_str(&self) -> &'static str {
        match self {
            LldpSetting::On => "on",
            LldpSetting::Off => "off",
        }
    }
}

impl From<bool> for LldpSetting {
    fn from(enabled: bool) -> Self {
        if enabled {
            LldpSetting::On
        } else {
            LldpSetting::Off
        }
    }
}

impl fmt::Display for LldpSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LldpSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(LldpSetting::On),
            "off" => Ok(LldpSetting::Off),
            other => Err(format!(
                "value of lldp_enable must be one of: on, off, got: {}",
                other
            )),
        }
    }
}

// YAML 1.1 front-ends turn a bare `on`/`off` into a boolean, so both forms are accepted.
impl<'de> Deserialize<'de> for LldpSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Word(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(enabled) => Ok(enabled.into()),
            Raw::Word(word) => word.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Set options.lldp.enable on or off for all nodes in the cluster
#[derive(Clone, Debug, Deserialize, JsonSchema)]
pub struct LldpParams {
    /// Cluster connection
    #[serde(flatten)]
    pub connection: ConnectionParams,

    /// Whether LLDP should be on or off
    pub lldp_enable: LldpSetting,
}
