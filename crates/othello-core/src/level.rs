//! Game difficulty levels and search depth configuration.

use crate::types::Depth;

/// Represents a difficulty level with its associated search depth.
///
/// Higher levels search deeper and play stronger.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// Search depth in plies.
    pub depth: Depth,
}

/// Retrieves the configuration for a specific difficulty level.
///
/// # Arguments
///
/// * `lv` - The level index (0-2), where 0 is the weakest and 2 is the
///   strongest.
///
/// # Returns
///
/// A `Level` struct containing the search depth for that level.
///
/// # Panics
///
/// Panics if `lv` is outside the valid range of 0-2.
pub fn get_level(lv: usize) -> Level {
    if lv >= LEVELS.len() {
        panic!(
            "Invalid level: {}. Valid range is 0 to {}",
            lv,
            LEVELS.len() - 1
        );
    }
    LEVELS[lv]
}

/// Pre-configured difficulty levels from 0 (easiest) to 2 (hardest).
const LEVELS: [Level; 3] = [
    Level { depth: 1 },
    Level { depth: 3 },
    Level { depth: 5 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_depths() {
        assert_eq!(get_level(0).depth, 1);
        assert_eq!(get_level(1).depth, 3);
        assert_eq!(get_level(2).depth, 5);
    }

    #[test]
    #[should_panic(expected = "Invalid level")]
    fn test_level_out_of_range() {
        let _ = get_level(3);
    }
}
