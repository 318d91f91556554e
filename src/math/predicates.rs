use robust::{orient2d, orient3d, Coord, Coord3D};

use super::{Vector3, MAX_DETERMINANT_ERROR};

/// Sign of the determinant `|a b c|` via the scalar triple product.
///
/// Returns `0` when the magnitude falls under [`MAX_DETERMINANT_ERROR`]
/// and rounding could have flipped the sign.
#[must_use]
pub fn triage_sign(a: &Vector3, b: &Vector3, c: &Vector3) -> i32 {
    let det = a.cross(b).dot(c);
    if det > MAX_DETERMINANT_ERROR {
        1
    } else if det < -MAX_DETERMINANT_ERROR {
        -1
    } else {
        0
    }
}

/// Exact sign of the determinant `|a b c|`; `0` only for an exactly
/// degenerate triple.
#[must_use]
pub fn exact_sign(a: &Vector3, b: &Vector3, c: &Vector3) -> i32 {
    let det = orient3d(
        coord3(a),
        coord3(b),
        coord3(c),
        Coord3D {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        },
    );
    sign_of(det)
}

/// Robust orientation of `c` relative to the great circle through `a`
/// and `b`.
///
/// Returns `+1` if `(a, b, c)` form a counterclockwise (positively
/// oriented) triple, `-1` if clockwise, and `0` only when two of the
/// points are identical. An exactly degenerate but pairwise-distinct
/// triple is resolved by a symbolic perturbation cascade, so no three
/// distinct points are ever reported as collinear. The result is
/// invariant under rotation of the arguments and negates under a swap.
#[must_use]
pub fn sign(a: &Vector3, b: &Vector3, c: &Vector3) -> i32 {
    let s = triage_sign(a, b, c);
    if s != 0 {
        return s;
    }
    expensive_sign(a, b, c)
}

/// Reports whether `(a, b, c)` appear in counterclockwise order when
/// viewed from `o`.
///
/// At least 2 of the 3 orientation conditions must hold, which keeps the
/// test total when one pair of arguments coincides.
#[must_use]
pub fn ordered_ccw(a: &Vector3, b: &Vector3, c: &Vector3, o: &Vector3) -> bool {
    let mut sum = 0;
    if sign(b, o, a) >= 0 {
        sum += 1;
    }
    if sign(c, o, b) >= 0 {
        sum += 1;
    }
    if sign(a, o, c) > 0 {
        sum += 1;
    }
    sum >= 2
}

/// Reports whether the wedge angle `∠ABC` contains its own vertex `B`.
///
/// "Contains" follows the same convention as crossing parity: among the
/// wedges meeting at a shared vertex, exactly one contains it. Used to
/// seed the interior state of a closed loop.
#[must_use]
pub fn angle_contains_vertex(a: &Vector3, b: &Vector3, c: &Vector3) -> bool {
    !ordered_ccw(&ortho(b), c, a, b)
}

/// Returns a deterministic unit vector orthogonal to `v`.
///
/// The companion vector is biased away from the coordinate axes so the
/// result avoids the sphere's symmetry points.
#[must_use]
pub fn ortho(v: &Vector3) -> Vector3 {
    let mut other = Vector3::new(0.012, 0.0053, 0.004_57);
    match largest_abs_component(v) {
        0 => other.z = 1.0,
        1 => other.x = 1.0,
        _ => other.y = 1.0,
    }
    v.cross(&other).normalize()
}

fn largest_abs_component(v: &Vector3) -> usize {
    let (x, y, z) = (v.x.abs(), v.y.abs(), v.z.abs());
    if x > y {
        if x > z {
            0
        } else {
            2
        }
    } else if y > z {
        1
    } else {
        2
    }
}

fn expensive_sign(a: &Vector3, b: &Vector3, c: &Vector3) -> i32 {
    if a == b || b == c || c == a {
        return 0;
    }

    // Sort the points lexicographically so the perturbation outcome does
    // not depend on argument order, tracking the permutation parity.
    let mut perm = 1;
    let (mut pa, mut pb, mut pc) = (a, b, c);
    if lex_greater(pa, pb) {
        std::mem::swap(&mut pa, &mut pb);
        perm = -perm;
    }
    if lex_greater(pb, pc) {
        std::mem::swap(&mut pb, &mut pc);
        perm = -perm;
    }
    if lex_greater(pa, pb) {
        std::mem::swap(&mut pa, &mut pb);
        perm = -perm;
    }

    let det = exact_sign(pa, pb, pc);
    if det != 0 {
        return perm * det;
    }
    perm * symbolically_perturbed_sign(pa, pb, pc)
}

/// Tie-break for exactly degenerate triples: each coordinate of each
/// point is treated as displaced by an infinitesimal, with magnitudes
/// ordered `a.z > a.y > a.x > b.z > ...`, and the first perturbation
/// coefficient with a non-zero (exact) sign decides. The final
/// coefficient is the constant 1, so the cascade never falls through.
///
/// Inputs must be pairwise distinct and lexicographically sorted.
fn symbolically_perturbed_sign(a: &Vector3, b: &Vector3, c: &Vector3) -> i32 {
    // Perturbations of a: the coefficients are the components of b × c.
    let mut s = det2_sign(b.x, b.y, c.x, c.y);
    if s != 0 {
        return s;
    }
    s = det2_sign(b.z, b.x, c.z, c.x);
    if s != 0 {
        return s;
    }
    s = det2_sign(b.y, b.z, c.y, c.z);
    if s != 0 {
        return s;
    }

    // Perturbations of b (first order, then mixed with those of a): the
    // leading coefficients are components of c × a, interleaved with
    // single components of c.
    s = det2_sign(c.x, c.y, a.x, a.y);
    if s != 0 {
        return s;
    }
    s = sign_of(c.x);
    if s != 0 {
        return s;
    }
    s = -sign_of(c.y);
    if s != 0 {
        return s;
    }
    s = det2_sign(c.z, c.x, a.z, a.x);
    if s != 0 {
        return s;
    }
    s = sign_of(c.z);
    if s != 0 {
        return s;
    }

    // Perturbations of c. The (c.y * a.z - c.z * a.y) coefficient is
    // implied zero by the checks above, so only the z component of a × b
    // remains before the constant term.
    s = det2_sign(a.x, a.y, b.x, b.y);
    if s != 0 {
        return s;
    }
    1
}

fn coord3(v: &Vector3) -> Coord3D<f64> {
    Coord3D {
        x: v.x,
        y: v.y,
        z: v.z,
    }
}

/// Exact sign of the 2x2 determinant `u0 * v1 - u1 * v0`.
fn det2_sign(u0: f64, u1: f64, v0: f64, v1: f64) -> i32 {
    let det = orient2d(
        Coord { x: 0.0, y: 0.0 },
        Coord { x: u0, y: u1 },
        Coord { x: v0, y: v1 },
    );
    sign_of(det)
}

fn sign_of(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

fn lex_greater(a: &Vector3, b: &Vector3) -> bool {
    (a.x, a.y, a.z) > (b.x, b.y, b.z)
}
