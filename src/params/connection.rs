//! Connection parameters shared by every module

use std::fmt;

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameter names accepted for the ONTAP connection, including aliases
pub const CONNECTION_FIELDS: &[&str] = &[
    "hostname",
    "username",
    "user",
    "password",
    "pass",
    "https",
    "validate_certs",
    "http_port",
];

/// How to reach and authenticate against the cluster management LIF
#[derive(Clone, Deserialize, JsonSchema)]
pub struct ConnectionParams {
    /// Cluster management hostname or IP address
    pub hostname: String,

    /// Cluster admin username
    #[serde(alias = "user")]
    pub username: String,

    /// Cluster admin password
    #[serde(alias = "pass")]
    pub password: String,

    /// Use HTTPS (the REST API is normally only served over HTTPS)
    #[serde(default = "default_true")]
    pub https: bool,

    /// Verify the cluster's TLS certificate
    #[serde(default = "default_true")]
    pub validate_certs: bool,

    /// Override the HTTP(S) port
    #[serde(default)]
    pub http_port: Option<u16>,
}

fn default_true() -> bool {
    true
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("https", &self.https)
            .field("validate_certs", &self.validate_certs)
            .field("http_port", &self.http_port)
            .finish()
    }
}

impl ConnectionParams {
    /// Base URL of the REST API, e.g. `https://cluster1:443`
    pub fn base_url(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        match self.http_port {
            Some(port) => format!("{}://{}:{}", scheme, self.hostname, port),
            None => format!("{}://{}", scheme, self.hostname),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ConnectionParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn defaults_to_https_with_cert_validation() {
        let params = parse(json!({
            "hostname": "cluster1",
            "username": "admin",
            "password": "netapp1!"
        }));

        assert!(params.https);
        assert!(params.validate_certs);
        assert_eq!(params.base_url(), "https://cluster1");
    }

    #[test]
    fn accepts_user_and_pass_aliases() {
        let params = parse(json!({
            "hostname": "10.0.0.5",
            "user": "admin",
            "pass": "netapp1!",
            "https": false,
            "http_port": 8080
        }));

        assert_eq!(params.username, "admin");
        assert_eq!(params.password, "netapp1!");
        assert_eq!(params.base_url(), "http://10.0.0.5:8080");
    }

    #[test]
    fn debug_output_redacts_password() {
        let params = parse(json!({
            "hostname": "cluster1",
            "username": "admin",
            "password": "netapp1!"
        }));

        let rendered = format!("{:?}", params);
        assert!(!rendered.contains("netapp1!"));
        assert!(rendered.contains("REDACTED"));
    }
}
