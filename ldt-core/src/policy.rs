/// Write policy: timeout and consistency parameters passed through to the executor
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How many replicas must acknowledge a write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CommitLevel {
    #[default]
    CommitAll,
    CommitMaster,
}

/// Record time-to-live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Expiration {
    #[default]
    NamespaceDefault,
    NeverExpire,
    Seconds(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WritePolicy {
    /// Total transaction timeout (None = no limit)
    pub timeout: Option<Duration>,

    pub commit_level: CommitLevel,

    /// Send the user key along with its digest
    pub send_key: bool,

    pub expiration: Expiration,

    /// Expected record generation, 0 = ignore
    pub generation: u32,
}

impl Default for WritePolicy {
    fn default() -> Self {
        Self {
            timeout: None,
            commit_level: CommitLevel::CommitAll,
            send_key: false,
            expiration: Expiration::NamespaceDefault,
            generation: 0,
        }
    }
}

impl WritePolicy {
    /// Create a new policy with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_commit_level(mut self, level: CommitLevel) -> Self {
        self.commit_level = level;
        self
    }

    pub fn with_send_key(mut self, send_key: bool) -> Self {
        self.send_key = send_key;
        self
    }

    pub fn with_expiration(mut self, expiration: Expiration) -> Self {
        self.expiration = expiration;
        self
    }

    pub fn with_generation(mut self, generation: u32) -> Self {
        self.generation = generation;
        self
    }

    /// Validate policy values
    pub fn validate(&self) -> std::result::Result<(), String> {
        if let Some(timeout) = self.timeout {
            if timeout.is_zero() {
                return Err("timeout must be greater than 0 when set".to_string());
            }
        }

        if self.expiration == Expiration::Seconds(0) {
            return Err("expiration seconds must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Parse a policy from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: WritePolicy = serde_json::from_str(json)
            .map_err(|e| Error::InvalidArgument(format!("invalid policy: {}", e)))?;
        policy.validate().map_err(Error::InvalidArgument)?;
        Ok(policy)
    }
}
