//! Sequential command execution over the session boundary.

use super::{ComplexCommand, PatternMap};
use crate::error::SessionError;

/// Boundary to the external CLI session/transport collaborator.
///
/// The executor passes pattern maps through unchanged and in order and
/// treats the returned output as opaque text. The session's own
/// output-matching loop reacts to action triggers (sending the mapped
/// response as a new line) and raises [`SessionError::ErrorPattern`] when an
/// error trigger matches.
pub trait CliSession {
    /// Send a command and block until its output has been fully consumed.
    fn send_command(
        &mut self,
        text: &str,
        action_map: &PatternMap,
        error_map: &PatternMap,
    ) -> Result<String, SessionError>;

    /// Send a bare line, e.g. an action response to an interactive prompt.
    fn send_line(&mut self, text: &str) -> Result<(), SessionError>;

    /// Switch the session into device configuration mode.
    fn enter_config_mode(&mut self) -> Result<(), SessionError> {
        Ok(())
    }

    /// Return the session to its default mode.
    fn leave_config_mode(&mut self) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Execute commands strictly in order, concatenating each command's output
/// followed by a line terminator.
///
/// Command N+1 is not sent until command N's output has been consumed and
/// any matched actions have completed. The first failure aborts the run.
pub fn execute_sequence<S: CliSession>(
    commands: &[ComplexCommand],
    session: &mut S,
) -> Result<String, SessionError> {
    let mut output = String::new();
    for command in commands {
        let chunk = session.send_command(&command.command, &command.action_map, &command.error_map)?;
        output.push_str(&chunk);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Session fake with one scripted output per expected command. Actions
    /// are applied the way a real session would: the first action pattern
    /// found in the output gets its response sent back as a line, then error
    /// patterns abort.
    struct ScriptedSession {
        outputs: Vec<String>,
        sent: Vec<String>,
        lines: Vec<String>,
    }

    impl ScriptedSession {
        fn new(outputs: &[&str]) -> Self {
            Self {
                outputs: outputs.iter().rev().map(|s| s.to_string()).collect(),
                sent: Vec::new(),
                lines: Vec::new(),
            }
        }
    }

    impl CliSession for ScriptedSession {
        fn send_command(
            &mut self,
            text: &str,
            action_map: &PatternMap,
            error_map: &PatternMap,
        ) -> Result<String, SessionError> {
            self.sent.push(text.to_string());
            let output = self.outputs.pop().expect("unscripted command");
            for (pattern, response) in action_map.iter() {
                if output.contains(pattern) {
                    self.send_line(response)?;
                    break;
                }
            }
            for (pattern, message) in error_map.iter() {
                if output.contains(pattern) {
                    return Err(SessionError::ErrorPattern {
                        pattern: pattern.to_string(),
                        message: message.to_string(),
                    });
                }
            }
            Ok(output)
        }

        fn send_line(&mut self, text: &str) -> Result<(), SessionError> {
            self.lines.push(text.to_string());
            Ok(())
        }
    }

    fn plain(text: &str) -> ComplexCommand {
        ComplexCommand::new(text)
    }

    #[test]
    fn sends_each_command_once_in_order() {
        let commands = vec![plain("a"), plain("b"), plain("c")];
        let mut session = ScriptedSession::new(&["out-a", "out-b", "out-c"]);
        let output = execute_sequence(&commands, &mut session).unwrap();
        assert_eq!(session.sent, vec!["a", "b", "c"]);
        assert_eq!(output, "out-a\nout-b\nout-c\n");
    }

    #[test]
    fn empty_sequence_produces_empty_output() {
        let mut session = ScriptedSession::new(&[]);
        assert_eq!(execute_sequence(&[], &mut session).unwrap(), "");
    }

    #[test]
    fn matched_action_sends_response_line() {
        let mut command = plain("show log");
        command.add_action("--More--", " ");
        let mut session = ScriptedSession::new(&["line1 --More--"]);
        execute_sequence(&[command], &mut session).unwrap();
        assert_eq!(session.lines, vec![" "]);
    }

    #[test]
    fn matched_error_aborts_and_later_commands_are_not_sent() {
        let mut failing = plain("write memory");
        failing.add_error("Read-only", "flash is read-only");
        let commands = vec![failing, plain("reload")];
        let mut session = ScriptedSession::new(&["error: Read-only filesystem", "never used"]);
        let err = execute_sequence(&commands, &mut session).unwrap_err();
        match err {
            SessionError::ErrorPattern { pattern, message } => {
                assert_eq!(pattern, "Read-only");
                assert_eq!(message, "flash is read-only");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(session.sent, vec!["write memory"]);
    }
}
