/// Rival engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Numeric value of the most consistent rating level.
pub const RATING_NUMERIC_MIN: i8 = -2;

/// Numeric value of the most inconsistent rating level.
pub const RATING_NUMERIC_MAX: i8 = 2;

/// Largest possible diagnosticity range (Very Consistent to Very Inconsistent).
pub const MAX_DIAGNOSTICITY_RANGE: u8 = 4;

/// Minimum rated cells in a row for diagnosticity to be defined.
pub const MIN_DIAGNOSTICITY_CELLS: usize = 2;
