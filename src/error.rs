use thiserror::Error;

/// Top-level error type for curvemorph.
#[derive(Debug, Error)]
pub enum CurvemorphError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    PathData(#[from] PathDataError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("{parameter} = {value} must not be negative")]
    NegativeSize { parameter: &'static str, value: f64 },

    #[error("{parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Errors reported by the strict path data parser.
#[derive(Debug, Error, PartialEq)]
pub enum PathDataError {
    #[error("unsupported command {command:?} at offset {offset}")]
    UnsupportedCommand { command: char, offset: usize },

    #[error("invalid arguments for command {command:?} at offset {offset}: {reason}")]
    InvalidArguments {
        command: char,
        offset: usize,
        reason: String,
    },

    #[error("path data must start with a moveto command, found {found:?}")]
    MissingMoveTo { found: char },
}

/// Errors related to invalid parameter objects.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Convenience type alias for results using [`CurvemorphError`].
pub type Result<T> = std::result::Result<T, CurvemorphError>;
