use thiserror::Error;

/// Failures while parsing a command specification string.
///
/// All parse failures are fail-fast: no partial recovery is attempted and
/// the offending fragment or marker is carried on the error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A map-literal fragment did not split into exactly one pattern and
    /// one response.
    #[error("malformed map literal near \"{fragment}\"")]
    MalformedLiteral { fragment: String },

    /// A `*_map=` assignment used a marker other than `action_map` or
    /// `error_map`.
    #[error("unrecognized marker \"{marker}\", expected one of: action_map, error_map")]
    UnrecognizedMarker { marker: String },
}

/// Failures reported by the CLI session collaborator during execution.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Device output matched a registered error pattern. Raised by the
    /// session's output-matching loop and propagated unchanged.
    #[error("device reported error matching \"{pattern}\": {message}")]
    ErrorPattern { pattern: String, message: String },

    #[error("session transport failure: {0}")]
    Transport(String),
}

/// Combined failure surface of a parse-then-execute cycle.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Failures in the resource-standards layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StandardsError {
    /// First-generation shells carry no shell name and are not supported.
    #[error("first generation shells are not supported: shell name is required")]
    FirstGenShell,

    #[error("unavailable shell type \"{given}\", expected one of: {available}")]
    UnavailableShellType { given: String, available: String },

    #[error("unknown attribute \"{field}\" for resource model \"{model}\"")]
    UnknownAttribute { field: String, model: String },

    #[error("malformed port pair \"{pair}\", expected \"address::port\"")]
    MalformedPortPair { pair: String },
}
