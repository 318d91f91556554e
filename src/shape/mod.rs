pub mod edge_vector;
pub mod point_vector;
pub mod polygon;
pub mod polyline;

pub use edge_vector::EdgeVectorShape;
pub use point_vector::PointVectorShape;
pub use polygon::PolygonShape;
pub use polyline::PolylineShape;

use crate::error::ShapeError;
use crate::geometry::point::origin_point;
use crate::math::Vector3;

/// A directed great-circle arc between two unit-sphere points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start vertex.
    pub v0: Vector3,
    /// End vertex.
    pub v1: Vector3,
}

impl Edge {
    /// Creates a new directed edge.
    #[must_use]
    pub fn new(v0: Vector3, v1: Vector3) -> Self {
        Self { v0, v1 }
    }

    /// Whether both endpoints coincide. Degenerate edges are permitted in
    /// shapes but never contribute to crossing parity.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.v0 == self.v1
    }
}

/// A maximal run of connected edges within a shape, as a
/// (start offset, edge count) range over the shape's global edge ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    /// Global id of the chain's first edge.
    pub start: usize,
    /// Number of edges in the chain.
    pub length: usize,
}

/// The chain-local position of a global edge id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainPosition {
    /// Chain the edge belongs to.
    pub chain_id: usize,
    /// Offset of the edge within that chain.
    pub offset: usize,
}

/// Classification of a shape's geometry, governing interior semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// A set of points (degenerate edges); no interior.
    Point,
    /// A set of polylines; no interior.
    Polyline,
    /// A polygon; containment queries are meaningful.
    Polygon,
}

/// A point whose containment status with respect to a shape's interior
/// is known by construction; seeds the crossing-parity containment test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    /// The reference point itself.
    pub point: Vector3,
    /// Whether the shape's interior contains `point`.
    pub contained: bool,
}

impl ReferencePoint {
    /// Reference point at the fixed origin with the given containment.
    #[must_use]
    pub fn origin(contained: bool) -> Self {
        Self {
            point: origin_point(),
            contained,
        }
    }

    /// The fixed reference for shapes without an interior: never
    /// contained.
    #[must_use]
    pub fn not_contained() -> Self {
        Self::origin(false)
    }
}

/// Uniform read-oriented view over a collection of directed spherical
/// edges organized into chains.
///
/// Generic algorithms (containment, intersection) work against this
/// trait so they need not know the concrete representation: explicit
/// polygon, in-memory edge list, lazily computed boundary. Edge and
/// chain ids are dense indices starting at 0 and stay stable unless the
/// shape is explicitly mutated; append-only shapes never invalidate
/// previously returned ids.
pub trait Shape {
    /// Number of edges currently in the shape.
    fn num_edges(&self) -> usize;

    /// Returns the edge with the given global id.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::EdgeOutOfRange`] if `id >= num_edges()`.
    fn edge(&self, id: usize) -> Result<Edge, ShapeError>;

    /// The shape's dimension tag.
    fn dimension(&self) -> Dimension;

    /// Whether containment queries are meaningful: true exactly for
    /// two-dimensional (polygon) shapes. Point and polyline shapes
    /// contain nothing in the interior sense.
    fn has_interior(&self) -> bool {
        self.dimension() == Dimension::Polygon
    }

    /// A point with a priori known containment status.
    ///
    /// Shapes without an interior return
    /// [`ReferencePoint::not_contained`]. For polygon shapes the
    /// producer must keep the returned status consistent with the actual
    /// geometry; the containment oracle cannot detect a violation.
    fn reference_point(&self) -> ReferencePoint;

    /// Number of chains in the shape.
    fn num_chains(&self) -> usize;

    /// Returns the chain with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ChainOutOfRange`] if `id >= num_chains()`.
    fn chain(&self, id: usize) -> Result<Chain, ShapeError>;

    /// Returns the edge at `offset` within chain `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ChainOutOfRange`] or
    /// [`ShapeError::ChainOffsetOutOfRange`] if either index is out of
    /// range.
    fn chain_edge(&self, chain_id: usize, offset: usize) -> Result<Edge, ShapeError>;

    /// Maps a global edge id to its chain-local position.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::EdgeOutOfRange`] if `edge_id >= num_edges()`.
    fn chain_position(&self, edge_id: usize) -> Result<ChainPosition, ShapeError>;
}
