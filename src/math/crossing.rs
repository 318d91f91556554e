use super::predicates::{ordered_ccw, ortho, sign};
use super::Vector3;

/// Relationship between two directed great-circle arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// The arcs cross at a point interior to both.
    Cross,
    /// The arcs share a vertex; [`vertex_crossing`] decides the parity.
    Maybe,
    /// The arcs do not cross.
    DoNotCross,
}

/// Classifies the crossing between arc `AB` and arc `CD`.
///
/// Returns [`Crossing::Cross`] only for a proper crossing: a single point
/// interior to both arcs. Arcs sharing a vertex return
/// [`Crossing::Maybe`]; degenerate (zero-length) arcs never cross.
#[must_use]
pub fn crossing_sign(a: &Vector3, b: &Vector3, c: &Vector3, d: &Vector3) -> Crossing {
    if a == c || a == d || b == c || b == d {
        return Crossing::Maybe;
    }
    if a == b || c == d {
        return Crossing::DoNotCross;
    }

    // A proper crossing requires C and D on opposite sides of the great
    // circle through AB, A and B on opposite sides of the one through CD,
    // and all four orientations mutually consistent (which rules out the
    // antipodal intersection of the two circles).
    let acb = -sign(a, b, c);
    let bda = sign(a, b, d);
    if acb != bda {
        return Crossing::DoNotCross;
    }
    let cbd = -sign(c, d, b);
    if cbd != acb {
        return Crossing::DoNotCross;
    }
    let dac = sign(c, d, a);
    if dac == acb {
        Crossing::Cross
    } else {
        Crossing::DoNotCross
    }
}

/// Tie-break for arcs sharing one or both vertices.
///
/// Defined so that for any two edge chains passing through a common
/// vertex, the total crossing parity is the same as if the chains were
/// perturbed to miss the vertex: among the edges meeting at the shared
/// vertex, the one further counterclockwise from a fixed reference
/// direction counts. Both arcs must be non-degenerate.
#[must_use]
pub fn vertex_crossing(a: &Vector3, b: &Vector3, c: &Vector3, d: &Vector3) -> bool {
    if a == b || c == d {
        return false;
    }
    if a == c {
        return b == d || ordered_ccw(&ortho(a), d, b, a);
    }
    if b == d {
        return ordered_ccw(&ortho(b), c, a, b);
    }
    if a == d {
        return b == c || ordered_ccw(&ortho(a), c, b, a);
    }
    if b == c {
        return ordered_ccw(&ortho(b), d, a, b);
    }
    false
}

/// Combined crossing predicate used for parity counting: proper crossings
/// count, shared-vertex cases fall back to [`vertex_crossing`].
#[must_use]
pub fn edge_or_vertex_crossing(a: &Vector3, b: &Vector3, c: &Vector3, d: &Vector3) -> bool {
    match crossing_sign(a, b, c, d) {
        Crossing::Cross => true,
        Crossing::DoNotCross => false,
        Crossing::Maybe => vertex_crossing(a, b, c, d),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::point::point_from_lat_lng_degrees as pll;

    #[test]
    fn proper_crossing() {
        // An equatorial arc and a meridian arc crossing at (1, 0, 0).
        let a = pll(0.0, -10.0);
        let b = pll(0.0, 10.0);
        let c = pll(-10.0, 0.0);
        let d = pll(10.0, 0.0);
        assert_eq!(crossing_sign(&a, &b, &c, &d), Crossing::Cross);
        assert!(edge_or_vertex_crossing(&a, &b, &c, &d));
        // Orientation of either arc does not change the verdict.
        assert_eq!(crossing_sign(&b, &a, &c, &d), Crossing::Cross);
        assert_eq!(crossing_sign(&a, &b, &d, &c), Crossing::Cross);
    }

    #[test]
    fn disjoint_arcs_do_not_cross() {
        let a = pll(0.0, -10.0);
        let b = pll(0.0, 10.0);
        let c = pll(-10.0, 30.0);
        let d = pll(10.0, 30.0);
        assert_eq!(crossing_sign(&a, &b, &c, &d), Crossing::DoNotCross);
        assert!(!edge_or_vertex_crossing(&a, &b, &c, &d));
    }

    #[test]
    fn arc_ending_on_other_great_circle_does_not_cross_properly() {
        // D lies exactly on the great circle of AB but the arcs only
        // touch; the verdict must be deterministic, not Cross.
        let a = pll(0.0, -10.0);
        let b = pll(0.0, 10.0);
        let c = pll(-10.0, 30.0);
        let d = pll(0.0, 30.0);
        assert_ne!(crossing_sign(&a, &b, &c, &d), Crossing::Cross);
    }

    #[test]
    fn shared_vertex_is_maybe() {
        let a = pll(0.0, -10.0);
        let b = pll(0.0, 10.0);
        let d = pll(10.0, 0.0);
        assert_eq!(crossing_sign(&a, &b, &b, &d), Crossing::Maybe);
        assert_eq!(crossing_sign(&a, &b, &d, &a), Crossing::Maybe);
    }

    #[test]
    fn degenerate_arcs_never_cross() {
        let a = pll(0.0, -10.0);
        let b = pll(0.0, 10.0);
        let c = pll(10.0, 0.0);
        assert_eq!(crossing_sign(&a, &b, &c, &c), Crossing::DoNotCross);
        assert_eq!(crossing_sign(&c, &c, &a, &b), Crossing::DoNotCross);
        assert!(!vertex_crossing(&a, &b, &c, &c));
    }

    #[test]
    fn identical_and_reversed_arcs_count_once() {
        let a = pll(0.0, -10.0);
        let b = pll(0.0, 10.0);
        assert!(vertex_crossing(&a, &b, &a, &b));
        assert!(vertex_crossing(&a, &b, &b, &a));
    }

    #[test]
    fn chain_through_query_vertex_flips_parity_once() {
        // A chain c -> d -> e crossing the arc AB exactly at its interior
        // vertex d: exactly one of the two chain edges must register a
        // crossing, or parity would break at shape vertices.
        let a = pll(-10.0, 0.0);
        let b = pll(10.0, 0.0);
        let c = pll(0.0, -10.0);
        let d = pll(0.0, 0.0);
        let e = pll(0.0, 10.0);
        let first = edge_or_vertex_crossing(&a, &b, &c, &d);
        let second = edge_or_vertex_crossing(&a, &b, &d, &e);
        assert_ne!(first, second);
    }

    #[test]
    fn chain_touching_query_vertex_keeps_parity() {
        // A chain that reaches the arc AB at vertex d and bounces back to
        // the same side: zero or two crossings, never one.
        let a = pll(-10.0, 0.0);
        let b = pll(10.0, 0.0);
        let c = pll(0.0, -10.0);
        let d = pll(0.0, 0.0);
        let e = pll(0.0, -20.0);
        let first = edge_or_vertex_crossing(&a, &b, &c, &d);
        let second = edge_or_vertex_crossing(&a, &b, &d, &e);
        assert_eq!(first, second);
    }
}
