pub mod crossing;
pub mod predicates;

/// 3D vector type. Points on the unit sphere are unit-length vectors.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Error bound of the fast determinant filter in [`predicates::sign`].
///
/// Valid for unit-length inputs: a scalar triple product with magnitude
/// above this bound has a trustworthy sign; anything smaller is
/// re-evaluated exactly.
pub const MAX_DETERMINANT_ERROR: f64 = 1.8274 * f64::EPSILON;
