//! High-level parse-then-execute entry points with logging.

use tracing::info;

use super::executor::{CliSession, execute_sequence};
use super::parser::parse_spec;
use crate::error::CommandError;

/// Runs custom command specifications against one session.
///
/// Thin orchestration over [`parse_spec`] and [`execute_sequence`]; owns the
/// session for the duration of the run.
pub struct CommandRunner<S> {
    session: S,
}

impl<S: CliSession> CommandRunner<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    /// Parse `spec` and execute it in the session's default mode.
    pub fn run_custom_command(&mut self, spec: &str) -> Result<String, CommandError> {
        info!(command = "run_custom_command", "start");
        let commands = parse_spec(spec)?;
        let output = execute_sequence(&commands, &mut self.session)?;
        info!(command = "run_custom_command", "completed");
        Ok(output)
    }

    /// Parse `spec` and execute it inside the device configuration mode.
    ///
    /// The session leaves configuration mode even when execution fails.
    pub fn run_custom_config_command(&mut self, spec: &str) -> Result<String, CommandError> {
        info!(command = "run_custom_config_command", "start");
        let commands = parse_spec(spec)?;
        self.session.enter_config_mode()?;
        let result = execute_sequence(&commands, &mut self.session);
        let left = self.session.leave_config_mode();
        let output = result?;
        left?;
        info!(command = "run_custom_config_command", "completed");
        Ok(output)
    }
}
