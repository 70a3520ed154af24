//! ONTAP REST API implementation of [`OntapApi`]

use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument};

use super::{BackupSettings, BackupSettingsChange, ClusterOption, OntapApi};
use crate::error::{Error, Result};
use crate::params::ConnectionParams;

const CONFIGURATION_BACKUP_PATH: &str = "/api/support/configuration-backup";
const CLI_OPTIONS_PATH: &str = "/api/private/cli/options";

/// Authenticated session against a cluster's REST API
#[derive(Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: SecretString,
}

/// Collection envelope used by ONTAP list responses
#[derive(Debug, Deserialize)]
struct Records<T> {
    #[serde(default = "Vec::new")]
    records: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

impl RestClient {
    /// Create a client for the cluster described by `connection`
    pub fn new(connection: &ConnectionParams) -> Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(!connection.validate_certs)
            .build()
            .map_err(|e| Error::MissingDependency(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: connection.base_url(),
            username: connection.username.clone(),
            password: SecretString::from(connection.password.clone()),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .http
            .get(self.endpoint(path))
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .query(query)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn patch_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<()> {
        let response = self
            .http
            .patch(self.endpoint(path))
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .query(query)
            .json(body)
            .send()
            .await?;

        check_status(response).await?;
        Ok(())
    }
}

/// Turn a non-success response into [`Error::Api`]
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(api_error(status, &body))
}

fn api_error(status: StatusCode, body: &str) -> Error {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: ErrorDetail {
                message,
                code: Some(code),
            },
        }) => format!("{} (code {})", message, code),
        Ok(ErrorBody { error }) => error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string(),
    };

    Error::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl OntapApi for RestClient {
    #[instrument(skip(self))]
    async fn get_backup_settings(&self) -> Result<BackupSettings> {
        let settings: BackupSettings = self
            .get_json(CONFIGURATION_BACKUP_PATH, &[("fields", "url,username")])
            .await?;
        debug!(url = ?settings.url, username = ?settings.username, "Fetched configuration backup settings");
        Ok(settings)
    }

    #[instrument(skip(self))]
    async fn modify_backup_settings(&self, change: &BackupSettingsChange) -> Result<()> {
        self.patch_json(CONFIGURATION_BACKUP_PATH, &[], change).await
    }

    #[instrument(skip_all)]
    async fn set_backup_password(&self, password: &SecretString) -> Result<()> {
        let body = json!({ "password": password.expose_secret() });
        self.patch_json(CONFIGURATION_BACKUP_PATH, &[], &body).await
    }

    #[instrument(skip(self))]
    async fn get_options(&self, name: &str) -> Result<Vec<ClusterOption>> {
        let response: Records<ClusterOption> = self
            .get_json(CLI_OPTIONS_PATH, &[("option_name", name), ("fields", "value")])
            .await?;
        debug!(records = response.records.len(), "Fetched cluster option records");
        Ok(response.records)
    }

    #[instrument(skip(self))]
    async fn modify_option(&self, name: &str, value: &str) -> Result<()> {
        let body = json!({ "value": value });
        self.patch_json(CLI_OPTIONS_PATH, &[("option_name", name)], &body)
            .await
    }
}
