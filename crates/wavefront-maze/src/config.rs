//! Maze generation configuration and validation.
//!
//! [`MazeConfig`] is the input to seeded generation.
//! [`validate()`](MazeConfig::validate) rejects dimensions that cannot
//! hold the fixed start/target placement and wall probabilities outside
//! `[0, 1)`; out-of-range probabilities are never clamped.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;
use wavefront_core::{GenerateError, Grid};

use crate::generator;

/// Wall probability used when none is given.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.3;

/// Smallest accepted row or column count.
pub const MIN_DIMENSION: u32 = 3;

/// Parameters for one generated maze.
#[derive(Clone, Debug, PartialEq)]
pub struct MazeConfig {
    /// Number of rows, border included. Default: 10.
    pub rows: u32,
    /// Number of columns, border included. Default: 10.
    pub cols: u32,
    /// Probability that an interior cell is a wall, in `[0, 1)`.
    /// Default: [`DEFAULT_WALL_PROBABILITY`].
    pub wall_probability: f64,
    /// RNG seed. `None` draws a fresh seed per call to
    /// [`generate()`](Self::generate).
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// A `rows x cols` configuration with default probability and no seed.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the wall probability.
    pub fn with_wall_probability(mut self, p: f64) -> Self {
        self.wall_probability = p;
        self
    }

    /// Fix the RNG seed, making generation reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check dimensions and wall probability.
    ///
    /// # Errors
    ///
    /// - [`GenerateError::InvalidDimensions`] if either dimension is below
    ///   [`MIN_DIMENSION`], if the grid is exactly 3x3 (start and target
    ///   would coincide), or if the cell count overflows `usize`.
    /// - [`GenerateError::InvalidParameter`] if `wall_probability` is not
    ///   finite or lies outside `[0, 1)`.
    pub fn validate(&self) -> Result<(), GenerateError> {
        validate_dimensions(self.rows, self.cols)?;
        validate_wall_probability(self.wall_probability)
    }

    /// Validate, then generate a maze.
    ///
    /// Unseeded configurations draw a seed from the thread RNG and log it
    /// at debug level, so any maze can be regenerated with
    /// [`with_seed`](Self::with_seed).
    pub fn generate(&self) -> Result<Grid, GenerateError> {
        self.validate()?;
        let seed = self.seed.unwrap_or_else(rand::random);
        debug!(seed, rows = self.rows, cols = self.cols, "generating maze");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generator::build(self.rows, self.cols, self.wall_probability, &mut rng)
    }
}

pub(crate) fn validate_dimensions(rows: u32, cols: u32) -> Result<(), GenerateError> {
    let reason = if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
        "rows and cols must be at least 3"
    } else if rows == MIN_DIMENSION && cols == MIN_DIMENSION {
        "start and target would share cell (1, 1)"
    } else if (rows as usize).checked_mul(cols as usize).is_none() {
        "cell count overflows usize"
    } else {
        return Ok(());
    };
    Err(GenerateError::InvalidDimensions { rows, cols, reason })
}

pub(crate) fn validate_wall_probability(p: f64) -> Result<(), GenerateError> {
    if p.is_finite() && (0.0..1.0).contains(&p) {
        Ok(())
    } else {
        Err(GenerateError::InvalidParameter {
            name: "wall_probability",
            value: p,
        })
    }
}
