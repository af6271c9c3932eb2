//! Error type shared by generation, configuration and export.

use thiserror::Error;

use crate::params::MIN_DIMENSION;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CaveError {
    #[error("width must be greater than {min}, got {0}", min = MIN_DIMENSION)]
    InvalidWidth(usize),
    #[error("height must be greater than {min}, got {0}", min = MIN_DIMENSION)]
    InvalidHeight(usize),
    #[error("fill ratio must be between 0.0 and 1.0, got {0}")]
    InvalidFillRatio(f64),
    #[error("map of {width}x{height} cells is too large")]
    InvalidSize { width: usize, height: usize },
    #[error("image scale {0} is out of range for this map")]
    InvalidScale(u32),
    #[error("requested image size {width}x{height} exceeds maximum {max_pixels} pixels")]
    ImageTooLarge {
        width: u64,
        height: u64,
        max_pixels: u64,
    },
    #[error("IO error: {0}")]
    Io(String),
    #[error("failed to save image: {0}")]
    Image(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CaveError {
    /// True for the caller-contract violations rejected before generation starts.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CaveError::InvalidWidth(_)
                | CaveError::InvalidHeight(_)
                | CaveError::InvalidFillRatio(_)
                | CaveError::InvalidSize { .. }
                | CaveError::InvalidScale(_)
                | CaveError::ImageTooLarge { .. }
        )
    }
}

impl From<std::io::Error> for CaveError {
    fn from(e: std::io::Error) -> Self {
        CaveError::Io(e.to_string())
    }
}

impl From<image::ImageError> for CaveError {
    fn from(e: image::ImageError) -> Self {
        CaveError::Image(e.to_string())
    }
}

impl From<serde_json::Error> for CaveError {
    fn from(e: serde_json::Error) -> Self {
        CaveError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_grouping() {
        assert!(CaveError::InvalidWidth(2).is_invalid_argument());
        assert!(CaveError::InvalidHeight(0).is_invalid_argument());
        assert!(CaveError::InvalidFillRatio(1.5).is_invalid_argument());
        assert!(CaveError::InvalidSize { width: usize::MAX, height: 3 }.is_invalid_argument());
        assert!(CaveError::InvalidScale(0).is_invalid_argument());
        assert!(!CaveError::Io("disk full".into()).is_invalid_argument());
    }

    #[test]
    fn test_messages_name_the_bad_value() {
        assert_eq!(
            CaveError::InvalidWidth(2).to_string(),
            "width must be greater than 2, got 2"
        );
        assert_eq!(
            CaveError::InvalidFillRatio(-0.5).to_string(),
            "fill ratio must be between 0.0 and 1.0, got -0.5"
        );
    }
}
