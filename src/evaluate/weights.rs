// Hand-tuned weights for the evaluation terms. The terms are summed, so each
// weight sets how many points one unit of its feature is worth.

/// Numerator of the nearest-food term `FOOD_WEIGHT / (distance + 1)`.
pub const FOOD_WEIGHT: f64 = 10.0;

/// Points per cell of distance to the nearest ghost.
pub const GHOST_DISTANCE_WEIGHT: f64 = 0.3;

/// Points per point of game score.
pub const SCORE_WEIGHT: f64 = 0.4;

/// Numerator of the capsule term `CAPSULE_WEIGHT / distance`.
pub const CAPSULE_WEIGHT: f64 = 10.0;

/// Points per remaining scared move, in the state evaluation.
pub const SCARED_TIME_WEIGHT: f64 = 1.0;

/// Points per remaining scared move, in the action evaluation.
pub const REFLEX_SCARED_TIME_WEIGHT: f64 = 0.2;

/// Returned for standing still or stepping next to a dangerous ghost. Far
/// below anything the other terms can add up to.
pub const DANGER_PENALTY: f64 = -5000.0;
