//! Process replacement: hand control to the gateway.
//!
//! The launcher never supervises the gateway. On Unix the process image is
//! replaced outright, so the gateway inherits the launcher's PID, stdio, and
//! environment; exit codes are the gateway's own.

use std::process::Command;

use tracing::info;

use super::{LaunchError, LaunchPlan, CONFIG_ENV};

/// Interpreter used to run the gateway module.
pub const GATEWAY_PROGRAM: &str = "python";

/// Fixed module-style invocation of the gateway subcommand.
pub const GATEWAY_ARGS: &[&str] = &["-m", "nanobot", "gateway"];

/// Human-readable form of the gateway invocation.
pub fn gateway_command_line() -> String {
    format!("{} {}", GATEWAY_PROGRAM, GATEWAY_ARGS.join(" "))
}

/// Build the gateway invocation with the plan's environment mutation applied.
///
/// The returned command inherits the launcher's full environment; the only
/// addition is `NANOBOT_CONFIG` when the plan synthesized one.
pub fn gateway_command(plan: &LaunchPlan) -> Command {
    let mut command = Command::new(GATEWAY_PROGRAM);
    command.args(GATEWAY_ARGS);
    if let Some(blob) = &plan.synthesized_config {
        command.env(CONFIG_ENV, blob);
    }
    command
}

/// Replace the current process with the gateway.
///
/// Only returns on failure; on success the launcher ceases to exist.
#[cfg(unix)]
pub fn exec_gateway(plan: &LaunchPlan) -> LaunchError {
    use std::os::unix::process::CommandExt;

    info!(command = %gateway_command_line(), "transferring control to gateway");
    let source = gateway_command(plan).exec();
    LaunchError::Exec {
        command: gateway_command_line(),
        source,
    }
}

/// Run the gateway and exit with its status.
///
/// Windows has no exec(2); spawn-and-wait with a propagated exit code is the
/// nearest equivalent. Only returns on failure to start.
#[cfg(not(unix))]
pub fn exec_gateway(plan: &LaunchPlan) -> LaunchError {
    info!(command = %gateway_command_line(), "transferring control to gateway");
    match gateway_command(plan).status() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(source) => LaunchError::Exec {
            command: gateway_command_line(),
            source,
        },
    }
}
