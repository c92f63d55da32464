use thiserror::Error;

/// Error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("Degenerate separation between particles {i} and {j}")]
    DegenerateGeometry { i: usize, j: usize },

    #[error("Zero-length vector has no direction")]
    ZeroVector,

    #[error("Separation {r} between particles {i} and {j} reaches the singular radius {singular_radius}")]
    SingularPotential {
        i: usize,
        j: usize,
        r: f64,
        singular_radius: f64,
    },

    #[error("Non-finite coordinate {coord} on axis {axis} cannot be folded")]
    NonFiniteCoordinate { axis: usize, coord: f64 },

    #[error("Particle {index} moved {displacement} along axis {axis} in one step, more than the box extent {extent}")]
    DivergentDisplacement {
        index: usize,
        axis: usize,
        displacement: f64,
        extent: f64,
    },

    #[error("Non-finite state for particle {index} after integration")]
    NonFiniteState { index: usize },

    #[error("Zero kinetic energy, cannot rescale velocities")]
    DegenerateEnsemble,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Monitor '{monitor}' changed the particle count from {before} to {after}")]
    MonitorResized {
        monitor: String,
        before: usize,
        after: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
