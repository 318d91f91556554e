use crate::error::Result;
use crate::math::crossing::edge_or_vertex_crossing;
use crate::math::Vector3;
use crate::shape::Shape;

/// Ground-truth point-in-region test over any [`Shape`].
///
/// Counts crossings between each shape edge and the single arc from the
/// shape's reference point to `point`, flipping the reference point's
/// known containment once per crossing. O(`num_edges`) per query with no
/// acceleration structure, which keeps the result easy to trust when
/// validating indexed implementations against it.
///
/// Shapes without an interior contain nothing — including points lying
/// exactly on an edge; boundary proximity is a different query. A
/// polygon shape whose reference point misreports its containment
/// produces wrong answers, not an error: that is a producer contract
/// violation this oracle cannot detect.
///
/// # Errors
///
/// Propagates [`ShapeError`](crate::error::ShapeError) if the shape
/// misreports `num_edges`.
pub fn contains_brute_force<S: Shape + ?Sized>(shape: &S, point: &Vector3) -> Result<bool> {
    if !shape.has_interior() {
        return Ok(false);
    }

    let reference = shape.reference_point();
    if reference.point == *point {
        return Ok(reference.contained);
    }

    let mut inside = reference.contained;
    for id in 0..shape.num_edges() {
        let edge = shape.edge(id)?;
        // Zero-length edges never flip parity.
        if edge.is_degenerate() {
            continue;
        }
        if edge_or_vertex_crossing(&reference.point, point, &edge.v0, &edge.v1) {
            inside = !inside;
        }
    }
    Ok(inside)
}
