use thiserror::Error;

/// Errors raised while building a [Atoms](crate::atoms::Atoms) from an atomistic source.
#[derive(Debug, Error)]
pub enum StructureError {
    /// The source file couldn't be read.
    #[error("Unable to read structure file: {0}")]
    Io(#[from] std::io::Error),
    /// The source text is malformed.
    /// Parse { line, message } where line is 1-indexed.
    #[error("Unable to parse structure at line {line}: {message}")]
    Parse { line: usize, message: String },
    /// The lattice vectors are linearly dependent.
    #[error("Lattice doesn't span 3D space.")]
    SingularLattice,
}

impl StructureError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse { line,
                      message: message.into() }
    }
}

/// Errors raised while turning a k-point policy or spacing into k-points.
#[derive(Debug, Error)]
pub enum KpointError {
    /// A key in a density-mode policy that isn't a known generation scheme.
    #[error("Unsupported k-point generation scheme: \"{0}\".")]
    UnsupportedScheme(String),
    /// The policy holds no scheme so no grid can be chosen.
    #[error("The k-point policy is empty, at least one scheme is required.")]
    EmptyPolicy,
    /// A known scheme was given a value of the wrong shape.
    /// InvalidValue { key, expected }
    #[error("The value for the scheme \"{key}\" must be {expected}.")]
    InvalidValue { key: String, expected: &'static str },
    /// The k-point spacing must be a finite, positive number.
    #[error("The k-point spacing ({0}) must be a positive number.")]
    NonPositiveSpacing(f64),
    /// The spacing is so small the number of k-points along an axis overflows.
    #[error("The k-point spacing ({0:e}) is too small for a countable grid.")]
    SpacingTooFine(f64),
    /// The structure couldn't be built from its source.
    #[error(transparent)]
    Structure(#[from] StructureError),
    /// A density scheme or path generator reported a failure.
    #[error("K-point generation failed: {0}")]
    Scheme(String),
}
