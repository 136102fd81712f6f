use crate::domain::UserId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    ReadError(String),

    #[error("Failed to write configuration: {0}")]
    WriteError(String),

    #[error("Invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("No user is bound in the configuration")]
    NoBoundUser,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacadeConfig {
    /// Last signed-in user; facades built from config bind to this id.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn load_config(&self) -> ConfigResult<FacadeConfig>;
    async fn save_config(&self, config: &FacadeConfig) -> ConfigResult<()>;
}
