//! Reading the three rays from a file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SkewerError};
use crate::ray::Ray;

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "data.txt";

/// Parses the first three lines of `reader` as rays.
///
/// Later lines are ignored.
///
/// # Errors
///
/// `MissingInput` if there are fewer than three lines, `Parse` (with the
/// 1-based line number) if one of them is not a ray, `Read` on I/O failure.
pub fn parse_rays(reader: impl BufRead) -> Result<[Ray; 3]> {
    let mut rays = Vec::with_capacity(3);
    for (idx, line) in reader.lines().take(3).enumerate() {
        let line = line.map_err(SkewerError::Read)?;
        let ray = line
            .parse::<Ray>()
            .map_err(|source| SkewerError::Parse {
                line: idx + 1,
                source,
            })?;
        rays.push(ray);
    }

    let found = rays.len();
    rays.try_into()
        .map_err(|_| SkewerError::MissingInput { found })
}

/// Reads three rays from the file at `path`.
///
/// # Errors
///
/// As [`parse_rays`]; I/O failures are reported with the path.
pub fn read_rays(path: impl AsRef<Path>) -> Result<[Ray; 3]> {
    let path = path.as_ref();
    let io_error = |source| SkewerError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let rays = parse_rays(BufReader::new(file)).map_err(|e| match e {
        SkewerError::Read(source) => io_error(source),
        other => other,
    })?;

    debug!(path = %path.display(), "read 3 rays");
    Ok(rays)
}
