//! Command-specification parser.
//!
//! A specification is one or more sub-commands separated by `;`. Each
//! sub-command is either a bare command string or a command string followed
//! by marker literals:
//!
//! ```text
//! show version;reload action_map={'[yes/no]':'yes'} error_map={'Invalid':'reload failed'}
//! ```
//!
//! Marker names are matched case-insensitively. Any `*_map={...}` assignment
//! with a marker other than `action_map`/`error_map` aborts the whole parse.

use std::sync::LazyLock;

use regex::Regex;

use super::{ComplexCommand, literal};
use crate::error::ParseError;

pub const COMMAND_SEPARATOR: char = ';';
pub const ACTION_MARKER: &str = "action_map";
pub const ERROR_MARKER: &str = "error_map";

/// Shortest prefix before the first known marker assignment; group 1 is the
/// command text.
static COMMAND_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)^\s*(.*?)\s*(?:action_map|error_map)\s*=").unwrap());

/// Every `<ident>_map = {...}` assignment in a block, known marker or not.
static MARKER_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)([a-z][a-z0-9_]*_map)\s*=\s*(\{.+?\})").unwrap());

/// Parse a full specification string into an ordered command sequence.
///
/// This is the sole public parse entry point. Blocks without markers become
/// plain commands with empty maps; block order is preserved.
pub fn parse_spec(spec: &str) -> Result<Vec<ComplexCommand>, ParseError> {
    let spec = spec.trim().trim_matches(COMMAND_SEPARATOR);
    spec.split(COMMAND_SEPARATOR).map(parse_block).collect()
}

fn parse_block(block: &str) -> Result<ComplexCommand, ParseError> {
    let block = block.trim();
    let command_text = match COMMAND_TEXT.captures(block) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => block,
    };
    let mut command = ComplexCommand::new(command_text);

    for caps in MARKER_ASSIGN.captures_iter(block) {
        let marker = &caps[1];
        let body = &caps[2];
        match marker.to_ascii_lowercase().as_str() {
            ACTION_MARKER => {
                for (pattern, response) in literal::deserialize_pairs(body)?.iter() {
                    command.add_action(pattern, response);
                }
            }
            ERROR_MARKER => {
                for (pattern, message) in literal::deserialize_pairs(body)?.iter() {
                    command.add_error(pattern, message);
                }
            }
            _ => {
                return Err(ParseError::UnrecognizedMarker {
                    marker: marker.to_string(),
                });
            }
        }
    }
    Ok(command)
}
