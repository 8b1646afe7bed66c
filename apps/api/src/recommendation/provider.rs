//! Provider abstraction for recommendation generation.
//!
//! `Provider` is the per-process decision between the deterministic template
//! path and the remote analyzer. The remote side is a trait so the fallback
//! controller can be driven by stubs in tests.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::Config;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::analysis::AnalysisResult;
use crate::models::profile::Profile;
use crate::recommendation::remote::{AnthropicAnalyzer, RemoteAnalysisError};

/// Which provider the service is configured to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Demo,
    Real,
}

impl Mode {
    /// Real when a non-blank credential is present.
    pub fn from_credential(credential: Option<&str>) -> Self {
        match credential {
            Some(key) if !key.trim().is_empty() => Mode::Real,
            _ => Mode::Demo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Demo => "demo",
            Mode::Real => "real",
        }
    }
}

/// Remote generation backend. Implementations must return a schema-valid
/// result or an error, never partial data.
#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    async fn analyze(&self, profile: &Profile) -> Result<AnalysisResult, RemoteAnalysisError>;

    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;
}

/// The configured provider. Demo needs nothing; Real carries its analyzer.
#[derive(Clone)]
pub enum Provider {
    Demo,
    Real(Arc<dyn RemoteAnalyzer>),
}

impl Provider {
    /// Builds the provider for `config.mode()`. Only Real constructs a client.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        match (config.mode(), config.anthropic_api_key.as_deref()) {
            (Mode::Real, Some(key)) => {
                let llm = LlmClient::new(key.to_string(), config.anthropic_api_url.clone())?;
                Ok(Provider::Real(Arc::new(AnthropicAnalyzer::new(llm))))
            }
            _ => Ok(Provider::Demo),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Provider::Demo => Mode::Demo,
            Provider::Real(_) => Mode::Real,
        }
    }
}

impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Demo => f.write_str("Demo"),
            Provider::Real(remote) => write!(f, "Real({})", remote.name()),
        }
    }
}
