extern crate thiserror;

use self::thiserror::Error;
use crate::geom::SampleError;

/// The ways an extraction can fail.
///
/// Malformed shapes are not errors: they produce no points, and problems in
/// path data are reported as warnings.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid SVG document: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Failed to read SVG file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Point density must be a positive number, got {density}.")]
    InvalidDensity { density: f64 },
    #[error(transparent)]
    Sample(#[from] SampleError),
}

#[test]
fn error_messages() {
    let err = ExtractError::InvalidDensity { density: -1.0 };
    assert_eq!(err.to_string(), "Point density must be a positive number, got -1.");

    let err: ExtractError = SampleError::TooManyPoints { limit: 10 }.into();
    assert_eq!(err.to_string(), "Sampling would produce more than 10 points.");
}
