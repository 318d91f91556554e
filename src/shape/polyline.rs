use super::{Chain, ChainPosition, Dimension, Edge, ReferencePoint, Shape};
use crate::error::{GeometryError, ShapeError};
use crate::math::Vector3;

/// A connected polyline: `n` vertices joined by `n - 1` directed edges
/// forming a single chain.
///
/// One-dimensional; contains no interior points, so containment queries
/// always answer false even for points lying exactly on an edge.
#[derive(Debug, Clone)]
pub struct PolylineShape {
    vertices: Vec<Vector3>,
}

impl PolylineShape {
    /// Creates a polyline from the given vertex chain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooFewVertices`] for fewer than 2
    /// vertices.
    pub fn new(vertices: Vec<Vector3>) -> Result<Self, GeometryError> {
        if vertices.len() < 2 {
            return Err(GeometryError::TooFewVertices {
                needed: 2,
                got: vertices.len(),
            });
        }
        Ok(Self { vertices })
    }

    /// The polyline's vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }
}

impl Shape for PolylineShape {
    fn num_edges(&self) -> usize {
        self.vertices.len() - 1
    }

    fn edge(&self, id: usize) -> Result<Edge, ShapeError> {
        if id >= self.num_edges() {
            return Err(ShapeError::EdgeOutOfRange {
                id,
                len: self.num_edges(),
            });
        }
        Ok(Edge::new(self.vertices[id], self.vertices[id + 1]))
    }

    fn dimension(&self) -> Dimension {
        Dimension::Polyline
    }

    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::not_contained()
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
