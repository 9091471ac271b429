//! Nanobot launcher - environment bootstrap for the nanobot gateway
//!
//! A thin startup shim that runs before the gateway: it inspects the ambient
//! environment, conditionally synthesizes the gateway's JSON configuration
//! blob from credential variables, and replaces its own process image with
//! the gateway invocation. It never supervises, retries, or persists
//! anything.
//!
//! # Architecture
//!
//! - **Config** (`config`): the slice of the gateway configuration schema
//!   the launcher can produce
//! - **Launcher** (`launcher`): launch planning and process replacement
//! - **CLI** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use nanobot_launcher::launcher;
//!
//! fn main() -> anyhow::Result<()> {
//!     let plan = launcher::plan_from_env()?;
//!     // Only returns on failure
//!     Err(launcher::exec::exec_gateway(&plan).into())
//! }
//! ```
//!
//! The gateway honors a `PORT` environment variable for its network
//! listener; the launcher neither sets nor validates it.

pub mod cli;
pub mod config;
pub mod launcher;

// Re-export commonly used types for convenience
pub use config::{GatewayConfig, ProviderConfig, ProvidersConfig};
pub use launcher::{plan, plan_from_env, LaunchError, LaunchPlan, CONFIG_ENV};
