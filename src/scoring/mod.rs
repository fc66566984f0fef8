// Public API
pub use distribution::{point_distribution, points_for_position, position_from_median};

// Internal modules
mod distribution;
