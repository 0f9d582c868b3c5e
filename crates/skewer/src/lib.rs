//! # skewer
//!
//! Finds a line that meets three rays.
//!
//! Each ray is a point moving at constant velocity. The unknown line, a
//! position `(x, y, z)` and velocity `(vx, vy, vz)`, has to be at the same
//! place as ray `i` at some time `t_i`. That gives nine bilinear equations in
//! nine unknowns, which are solved exactly with Gröbner bases.
//!
//! ```no_run
//! use skewer::{first_interception, read_rays};
//! use skewer_solve::SolveConfig;
//!
//! let rays = read_rays("data.txt")?;
//! let line = first_interception(&rays, &SolveConfig::default())?;
//! println!("{}", line.position_sum());
//! # Ok::<(), skewer::SkewerError>(())
//! ```

pub mod cli;
pub mod equations;
pub mod error;
pub mod input;
pub mod intercept;
pub mod logger;
pub mod ray;

pub use cli::Cli;
pub use equations::{intercept_equations, Unknown, NUM_UNKNOWNS, UNKNOWN_NAMES};
pub use error::{RayParseError, Result, SkewerError};
pub use input::{parse_rays, read_rays, DEFAULT_INPUT};
pub use intercept::{find_interceptions, first_interception, sums_disagree, write_sums, Interception};
pub use ray::Ray;
