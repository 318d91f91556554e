use crate::error::GeometryError;
use crate::math::{Vector3, TOLERANCE};

/// Returns the unit-sphere point in the direction of `(x, y, z)`.
///
/// # Errors
///
/// Returns [`GeometryError::ZeroVector`] if the input has (near) zero
/// length and no direction.
pub fn point_from_coords(x: f64, y: f64, z: f64) -> Result<Vector3, GeometryError> {
    let v = Vector3::new(x, y, z);
    let norm = v.norm();
    if norm < TOLERANCE {
        return Err(GeometryError::ZeroVector);
    }
    Ok(v / norm)
}

/// Returns the unit-sphere point at the given latitude and longitude in
/// degrees. Latitude is measured from the equatorial plane, longitude
/// from the positive x axis toward positive y.
#[must_use]
pub fn point_from_lat_lng_degrees(lat: f64, lng: f64) -> Vector3 {
    let (lat, lng) = (lat.to_radians(), lng.to_radians());
    let cos_lat = lat.cos();
    Vector3::new(cos_lat * lng.cos(), cos_lat * lng.sin(), lat.sin())
}

/// The fixed reference origin that seeds all crossing-parity bookkeeping.
///
/// An arbitrary unit vector far from any symmetry of the sphere, so that
/// hand-constructed shapes are unlikely to pass exactly through it.
/// Every parity walk measures crossings along the arc from this point.
#[must_use]
pub fn origin_point() -> Vector3 {
    Vector3::new(
        -0.009_999_466_435_025_019_7,
        0.002_592_454_260_932_412_1,
        0.999_946_643_502_501_95,
    )
}
