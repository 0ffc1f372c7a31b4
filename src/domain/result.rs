//! Result type alias for TubeHarvest

use super::errors::HarvestError;

/// Result type alias for TubeHarvest operations
///
/// # Examples
///
/// ```
/// use tubeharvest::domain::result::Result;
/// use tubeharvest::domain::errors::HarvestError;
///
/// fn failing_function() -> Result<()> {
///     Err(HarvestError::Validation("Invalid input".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, HarvestError>;
