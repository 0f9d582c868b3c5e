use std::io;
use std::path::PathBuf;

use skewer_integers::ParseError;
use skewer_solve::SolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RayParseError {
    #[error("missing '@' between position and velocity")]
    MissingSeparator,

    #[error("expected 3 comma-separated {half} fields, found {found}")]
    FieldCount { half: &'static str, found: usize },

    #[error("{token:?} is not an integer")]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseError,
    },
}

#[derive(Error, Debug)]
pub enum SkewerError {
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input")]
    Read(#[source] io::Error),

    #[error("malformed ray on line {line}")]
    Parse {
        line: usize,
        #[source]
        source: RayParseError,
    },

    #[error("expected 3 rays, found {found}")]
    MissingInput { found: usize },

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("no line passes through all three rays")]
    NoSolution,
}

pub type Result<T> = std::result::Result<T, SkewerError>;
