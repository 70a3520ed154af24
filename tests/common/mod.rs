//! In-memory cluster used by the integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ontap_config_modules::api::{BackupSettings, BackupSettingsChange, ClusterOption, OntapApi};
use ontap_config_modules::{Error, Result};
use secrecy::{ExposeSecret, SecretString};

/// Every call the fake received, in order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    GetBackupSettings,
    ModifyBackupSettings(BackupSettingsChange),
    SetBackupPassword(String),
    GetOptions(String),
    ModifyOption(String, String),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Call::ModifyBackupSettings(_) | Call::SetBackupPassword(_) | Call::ModifyOption(..)
        )
    }

    fn kind(&self) -> Operation {
        match self {
            Call::GetBackupSettings => Operation::GetBackupSettings,
            Call::ModifyBackupSettings(_) => Operation::ModifyBackupSettings,
            Call::SetBackupPassword(_) => Operation::SetBackupPassword,
            Call::GetOptions(_) => Operation::GetOptions,
            Call::ModifyOption(..) => Operation::ModifyOption,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    GetBackupSettings,
    ModifyBackupSettings,
    SetBackupPassword,
    GetOptions,
    ModifyOption,
}

#[derive(Debug, Default)]
struct ClusterState {
    url: String,
    username: String,
    password: String,
    lldp: Vec<String>,
    calls: Vec<Call>,
    failure: Option<(Operation, usize, String)>,
}

/// Shared handle to a fake cluster; clones observe the same state
#[derive(Clone, Debug, Default)]
pub struct FakeArray {
    state: Arc<Mutex<ClusterState>>,
}

impl FakeArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backup_destination(self, url: &str, username: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.url = url.to_string();
            state.username = username.to_string();
        }
        self
    }

    /// One record per node, all holding `value`
    pub fn with_lldp(self, values: &[&str]) -> Self {
        self.state.lock().unwrap().lldp = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Fail the `occurrence`-th (1-based) call of `operation` with `message`
    pub fn fail_on(self, operation: Operation, occurrence: usize, message: &str) -> Self {
        self.state.lock().unwrap().failure = Some((operation, occurrence, message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn backup_destination(&self) -> (String, String, String) {
        let state = self.state.lock().unwrap();
        (state.url.clone(), state.username.clone(), state.password.clone())
    }

    pub fn lldp_values(&self) -> Vec<String> {
        self.state.lock().unwrap().lldp.clone()
    }

    /// Record the call and return the injected failure, if this is the one
    fn record(&self, call: Call) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        let kind = call.kind();
        state.calls.push(call);

        let seen = state.calls.iter().filter(|c| c.kind() == kind).count();
        match &state.failure {
            Some((operation, occurrence, message)) if *operation == kind && *occurrence == seen => {
                Err(Error::Api {
                    status: 500,
                    message: message.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl OntapApi for FakeArray {
    async fn get_backup_settings(&self) -> Result<BackupSettings> {
        self.record(Call::GetBackupSettings)?;
        let state = self.state.lock().unwrap();
        Ok(BackupSettings {
            url: Some(state.url.clone()),
            username: Some(state.username.clone()),
        })
    }

    async fn modify_backup_settings(&self, change: &BackupSettingsChange) -> Result<()> {
        self.record(Call::ModifyBackupSettings(change.clone()))?;
        let mut state = self.state.lock().unwrap();
        if let Some(url) = &change.url {
            state.url = url.clone();
        }
        if let Some(username) = &change.username {
            state.username = username.clone();
        }
        Ok(())
    }

    async fn set_backup_password(&self, password: &SecretString) -> Result<()> {
        let password = password.expose_secret().to_string();
        self.record(Call::SetBackupPassword(password.clone()))?;
        self.state.lock().unwrap().password = password;
        Ok(())
    }

    async fn get_options(&self, name: &str) -> Result<Vec<ClusterOption>> {
        self.record(Call::GetOptions(name.to_string()))?;
        let state = self.state.lock().unwrap();
        Ok(state
            .lldp
            .iter()
            .map(|value| ClusterOption {
                name: name.to_string(),
                value: value.clone(),
            })
            .collect())
    }

    async fn modify_option(&self, name: &str, value: &str) -> Result<()> {
        self.record(Call::ModifyOption(name.to_string(), value.to_string()))?;
        let mut state = self.state.lock().unwrap();
        for current in state.lldp.iter_mut() {
            *current = value.to_string();
        }
        Ok(())
    }
}
