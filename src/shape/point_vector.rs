use super::{Chain, ChainPosition, Dimension, Edge, ReferencePoint, Shape};
use crate::error::ShapeError;
use crate::math::Vector3;

/// A set of points on the sphere, exposed through the shape contract as
/// one degenerate edge `(p, p)` per point, each in its own chain.
///
/// Zero-dimensional: no interior, and its degenerate edges never affect
/// crossing parity.
#[derive(Debug, Clone, Default)]
pub struct PointVectorShape {
    points: Vec<Vector3>,
}

impl PointVectorShape {
    /// Creates a shape from the given points.
    #[must_use]
    pub fn new(points: Vec<Vector3>) -> Self {
        Self { points }
    }

    /// The points in the shape.
    #[must_use]
    pub fn points(&self) -> &[Vector3] {
        &self.points
    }
}

impl Shape for PointVectorShape {
    fn num_edges(&self) -> usize {
        self.points.len()
    }

    fn edge(&self, id: usize) -> Result<Edge, ShapeError> {
        self.points
            .get(id)
            .map(|p| Edge::new(*p, *p))
            .ok_or(ShapeError::EdgeOutOfRange {
                id,
                len: self.points.len(),
            })
    }

    fn dimension(&self) -> Dimension {
        Dimension::Point
    }

    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::not_contained()
    }

    fn num_chains(&self) -> usize {
        self.points.len()
    }

    fn chain(&self, id: usize) -> Result<Chain, ShapeError> {
        if id >= self.points.len() {
            return Err(ShapeError::ChainOutOfRange {
                id,
                len: self.points.len(),
            });
        }
        Ok(Chain {
            start: id,
            length: 1,
        })
    }

    fn chain_edge(&self, chain_id: usize, offset: usize) -> Result<Edge, ShapeError> {
        if chain_id >= self.points.len() {
            return Err(ShapeError::ChainOutOfRange {
                id: chain_id,
                len: self.points.len(),
            });
        }
        if offset >= 1 {
            return Err(ShapeError::ChainOffsetOutOfRange {
                chain: chain_id,
                offset,
                len: 1,
            });
        }
        self.edge(chain_id)
    }

    fn chain_position(&self, edge_id: usize) -> Result<ChainPosition, ShapeError> {
        if edge_id >= self.points.len() {
            return Err(ShapeError::EdgeOutOfRange {
                id: edge_id,
                len: self.points.len(),
            });
        }
        Ok(ChainPosition {
            chain_id: edge_id,
            offset: 0,
        })
    }
}
