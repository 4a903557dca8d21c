use miette::Diagnostic;
use thiserror::Error;

/// Main error type for teamart operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArtError {
    #[error("IO error: {0}")]
    #[diagnostic(code(teamart::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(teamart::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(teamart::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid palette: expected 3 colours, got {count}")]
    #[diagnostic(
        code(teamart::palette),
        help("A palette is exactly primary, secondary and tertiary")
    )]
    InvalidPalette { count: usize },

    #[error("Invalid pattern kind: {message}")]
    #[diagnostic(code(teamart::pattern))]
    InvalidPatternKind {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown team: {name}")]
    #[diagnostic(code(teamart::team))]
    UnknownTeam {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Encode error: {message}")]
    #[diagnostic(code(teamart::encode))]
    Encode { message: String },
}

pub type Result<T> = std::result::Result<T, ArtError>;
