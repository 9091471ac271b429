//! Launch planning: decide what environment the gateway starts with.
//!
//! The launcher does exactly one conditional piece of work before handing
//! control to the gateway: if credential variables are present and no
//! explicit `NANOBOT_CONFIG` was supplied, it synthesizes a minimal
//! configuration blob carrying those credentials. An explicit configuration
//! always wins and is never touched.

pub mod exec;
pub mod providers;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{GatewayConfig, ProvidersConfig};
use self::providers::PROVIDERS;

/// Environment variable carrying the gateway's JSON configuration.
pub const CONFIG_ENV: &str = "NANOBOT_CONFIG";

/// Launcher error types
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Process replacement failed; the gateway never started.
    #[error("failed to exec gateway process `{command}`: {source}")]
    Exec {
        /// The invocation that was attempted
        command: String,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// The synthesized configuration could not be serialized.
    #[error("failed to serialize gateway configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The environment mutation to apply before exec, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    /// JSON blob to export as `NANOBOT_CONFIG`, or `None` to leave the
    /// environment untouched
    pub synthesized_config: Option<String>,

    /// Provider names included in the synthesized blob, for logging.
    /// Never contains key material.
    pub providers: Vec<&'static str>,
}

impl LaunchPlan {
    /// A plan that changes nothing.
    pub const fn passthrough() -> Self {
        Self {
            synthesized_config: None,
            providers: Vec::new(),
        }
    }

    /// Human-readable rendering for dry runs: the environment mutation that
    /// would be applied and the exec target. Reports provider names only,
    /// never key material.
    pub fn describe(&self) -> String {
        let mutation = if self.synthesized_config.is_some() {
            format!(
                "would export {CONFIG_ENV} with providers: {}",
                self.providers.join(", ")
            )
        } else {
            "environment unchanged".to_string()
        };
        format!("{mutation}\nwould exec: {}", exec::gateway_command_line())
    }
}

/// Build a launch plan from the ambient process environment.
pub fn plan_from_env() -> Result<LaunchPlan, LaunchError> {
    plan(|name| std::env::var(name).ok())
}

/// Build a launch plan from an arbitrary variable lookup.
///
/// Pure apart from logging, which keeps the branch logic testable without
/// touching the real environment. Rules:
///
/// 1. If `NANOBOT_CONFIG` is already set non-empty, leave it alone.
/// 2. Otherwise collect every provider whose credential variable (or alias,
///    in declared order) is set non-empty.
/// 3. If any were found, synthesize `{"providers": {...}}` with exactly
///    those entries; if none, change nothing.
pub fn plan(lookup: impl Fn(&str) -> Option<String>) -> Result<LaunchPlan, LaunchError> {
    if let Some(existing) = lookup(CONFIG_ENV).filter(|v| !v.is_empty()) {
        // Respect the operator's config, but flag obvious mistakes early;
        // the gateway will fall back to defaults on a parse failure.
        if serde_json::from_str::<serde_json::Value>(&existing).is_err() {
            warn!("{CONFIG_ENV} is set but is not valid JSON; passing through unchanged");
        }
        debug!("{CONFIG_ENV} already set, leaving environment untouched");
        return Ok(LaunchPlan::passthrough());
    }

    let mut providers = ProvidersConfig::default();
    let mut names = Vec::new();

    for entry in PROVIDERS {
        let key = entry
            .env_vars
            .iter()
            .find_map(|var| lookup(var).filter(|v| !v.is_empty()));
        if let Some(key) = key {
            entry.fill(&mut providers, key);
            names.push(entry.name);
        }
    }

    if providers.is_empty() {
        debug!("no credential variables set, leaving environment untouched");
        return Ok(LaunchPlan::passthrough());
    }

    let config = GatewayConfig { providers };
    let blob = serde_json::to_string(&config)?;
    debug!(providers = ?names, "synthesized gateway configuration from environment");

    Ok(LaunchPlan {
        synthesized_config: Some(blob),
        providers: names,
    })
}
