use std::f64::consts::PI;

use crate::error::{GeometryError, ShapeError};
use crate::geometry::point::origin_point;
use crate::math::crossing::edge_or_vertex_crossing;
use crate::math::predicates::{angle_contains_vertex, ortho};
use crate::math::Vector3;
use crate::shape::{Chain, ChainPosition, Dimension, Edge, ReferencePoint, Shape};

/// A simple spherical polygon: a closed chain of vertices connected by
/// great-circle arcs, with the interior on the left of each directed
/// edge (counterclockwise orientation).
///
/// The last vertex is implicitly connected back to the first. A
/// clockwise loop enclosing a small area is therefore interpreted as a
/// counterclockwise loop enclosing the rest of the sphere.
///
/// Vertices are not validated beyond the length minimum; duplicate
/// vertices or self-intersections produce deterministic but undefined
/// containment regions.
#[derive(Debug, Clone)]
pub struct Loop {
    vertices: Vec<Vector3>,
    /// Whether the interior contains the fixed origin point. Precomputed
    /// at construction and used to seed every parity walk.
    origin_inside: bool,
}

impl Loop {
    /// Creates a loop from the given vertex chain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] for fewer than 3
    /// vertices.
    pub fn new(vertices: Vec<Vector3>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices {
                needed: 3,
                got: vertices.len(),
            });
        }
        let mut l = Self {
            vertices,
            origin_inside: false,
        };
        l.init_origin_inside();
        Ok(l)
    }

    /// Creates a regular polygon loop: `num_vertices` vertices evenly
    /// spaced at angular distance `radius` (radians) around `center`,
    /// counterclockwise as seen from outside the sphere, so the interior
    /// is the spherical cap around `center`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRadius`] unless `radius` lies in
    /// `(0, pi)`, and [`GeometryError::TooFewVertices`] for fewer than 3
    /// vertices.
    #[allow(clippy::cast_precision_loss)]
    pub fn regular(
        center: Vector3,
        radius: f64,
        num_vertices: usize,
    ) -> Result<Self, GeometryError> {
        if !(radius > 0.0 && radius < PI) {
            return Err(GeometryError::InvalidRadius(radius));
        }
        // Right-handed orthonormal frame (u, w, center).
        let u = ortho(&center);
        let w = center.cross(&u).normalize();
        let (sin_r, cos_r) = radius.sin_cos();
        let mut vertices = Vec::with_capacity(num_vertices);
        for i in 0..num_vertices {
            let theta = 2.0 * PI * (i as f64) / (num_vertices as f64);
            let (sin_t, cos_t) = theta.sin_cos();
            let v = center * cos_r + (u * cos_t + w * sin_t) * sin_r;
            vertices.push(v.normalize());
        }
        Self::new(vertices)
    }

    /// Number of vertices (and edges) in the loop.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns vertex `i`, wrapping past the end so that
    /// `vertex(num_vertices())` closes the loop back to `vertex(0)`.
    #[must_use]
    pub fn vertex(&self, i: usize) -> Vector3 {
        self.vertices[i % self.vertices.len()]
    }

    /// The loop's vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    /// Whether the loop interior contains the fixed origin point.
    #[must_use]
    pub fn contains_origin(&self) -> bool {
        self.origin_inside
    }

    /// Dedicated point containment test for this loop.
    ///
    /// Walks every edge once, toggling parity for each crossing of the
    /// arc from the fixed origin to `p`. This is the loop's own
    /// containment definition; the generic shape oracle is validated
    /// against it.
    #[must_use]
    pub fn contains_point(&self, p: &Vector3) -> bool {
        let origin = origin_point();
        let mut inside = self.origin_inside;
        for i in 0..self.vertices.len() {
            let v0 = self.vertex(i);
            let v1 = self.vertex(i + 1);
            if edge_or_vertex_crossing(&origin, p, &v0, &v1) {
                inside = !inside;
            }
        }
        inside
    }

    /// Seeds `origin_inside` by first assuming the origin is outside,
    /// then checking whether the parity walk then agrees with the wedge
    /// containment of vertex 1, which is known independently of any
    /// reference point.
    fn init_origin_inside(&mut self) {
        let v1_wedge_inside = self.vertices[0] != self.vertices[1]
            && self.vertices[2] != self.vertices[1]
            && angle_contains_vertex(&self.vertices[0], &self.vertices[1], &self.vertices[2]);
        self.origin_inside = false;
        if v1_wedge_inside != self.contains_point(&self.vertex(1)) {
            self.origin_inside = true;
        }
    }
}

impl Shape for Loop {
    fn num_edges(&self) -> usize {
        self.vertices.len()
    }

    fn edge(&self, id: usize) -> Result<Edge, ShapeError> {
        if id >= self.num_edges() {
            return Err(ShapeError::EdgeOutOfRange {
                id,
                len: self.num_edges(),
            });
        }
        Ok(Edge::new(self.vertex(id), self.vertex(id + 1)))
    }

    fn dimension(&self) -> Dimension {
        Dimension::Polygon
    }

    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::origin(self.origin_inside)
    }

    fn num_chains(&self) -> usize {
        1
    }

    fn chain(&self, id: usize) -> Result<Chain, ShapeError> {
        if id >= 1 {
            return Err(ShapeError::ChainOutOfRange { id, len: 1 });
        }
        Ok(Chain {
            start: 0,
            length: self.num_edges(),
        })
    }

    fn chain_edge(&self, chain_id: usize, offset: usize) -> Result<Edge, ShapeError> {
        if chain_id >= 1 {
            return Err(ShapeError::ChainOutOfRange {
                id: chain_id,
                len: 1,
            });
        }
        if offset >= self.num_edges() {
            return Err(ShapeError::ChainOffsetOutOfRange {
                chain: chain_id,
                offset,
                len: self.num_edges(),
            });
        }
        self.edge(offset)
    }

    fn chain_position(&self, edge_id: usize) -> Result<ChainPosition, ShapeError> {
        if edge_id >= self.num_edges() {
            return Err(ShapeError::EdgeOutOfRange {
                id: edge_id,
                len: self.num_edges(),
            });
        }
        Ok(ChainPosition {
            chain_id: 0,
            offset: edge_id,
        })
    }
}
