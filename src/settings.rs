use crate::Result;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Server endpoint and admin credentials, loaded once per run.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Admin SOAP endpoint, e.g.
    /// `https://mail.example.net:7071/service/admin/soap`
    pub url: String,
    pub user: String,
    pub password: String,
}

impl Settings {
    /// Settings are loaded from the json file in the given path, with a
    /// `DLSYNC`-prefixed environment overlay.
    pub fn new(path: &Path) -> Result<Self> {
        Ok(Config::builder()
            .add_source(File::from(path).format(FileFormat::Json))
            .add_source(Environment::with_prefix("DLSYNC").separator("__"))
            .build()
            .and_then(|config| config.try_deserialize())?)
    }

    pub fn client(&self) -> Result<zimbra::Client> {
        Ok(zimbra::Client::new(&self.url)?)
    }
}

/// Desired state of a distribution list. The `id` field is accepted for
/// compatibility with existing files but lookup is by name; mutations use
/// the server-reported id.
#[derive(Debug, Deserialize, Serialize)]
pub struct DesiredList {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub members: Vec<String>,
}

impl DesiredList {
    pub fn new(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

pub fn read_json<'de, T: serde::Deserialize<'de>>(path: &Path) -> Result<T> {
    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Json))
        .build()
        .and_then(|config| config.try_deserialize())?;
    Ok(config)
}
