use super::{Chain, ChainPosition, Dimension, Edge, ReferencePoint, Shape};
use crate::error::ShapeError;
use crate::math::Vector3;

/// An arbitrary collection of directed edges with no connectivity: every
/// edge forms its own single-edge chain.
///
/// Useful for bags of unrelated arcs — say, a collection of polylines
/// where memory efficiency does not matter, since shared vertices are
/// stored twice — and as the minimal mutable shape for exercising
/// generic algorithms.
#[derive(Debug, Clone, Default)]
pub struct EdgeVectorShape {
    edges: Vec<Edge>,
}

impl EdgeVectorShape {
    /// Creates an empty shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shape holding the single edge `(a, b)`.
    #[must_use]
    pub fn from_points(a: Vector3, b: Vector3) -> Self {
        Self {
            edges: vec![Edge::new(a, b)],
        }
    }

    /// Appends the edge `(a, b)` as a new single-edge chain.
    ///
    /// Ids are dense append-only indices: previously returned edge and
    /// chain ids stay valid across appends.
    pub fn add_edge(&mut self, a: Vector3, b: Vector3) {
        self.edges.push(Edge::new(a, b));
    }
}

impl Shape for EdgeVectorShape {
    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, id: usize) -> Result<Edge, ShapeError> {
        self.edges
            .get(id)
            .copied()
            .ok_or(ShapeError::EdgeOutOfRange {
                id,
                len: self.edges.len(),
            })
    }

    fn dimension(&self) -> Dimension {
        Dimension::Polyline
    }

    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::not_contained()
    }

    fn num_chains(&self) -> usize {
        self.edges.len()
    }

    fn chain(&self, id: usize) -> Result<Chain, ShapeError> {
        if id >= self.edges.len() {
            return Err(ShapeError::ChainOutOfRange {
                id,
                len: self.edges.len(),
            });
        }
        Ok(Chain {
            start: id,
            length: 1,
        })
    }

    fn chain_edge(&self, chain_id: usize, offset: usize) -> Result<Edge, ShapeError> {
        if chain_id >= self.edges.len() {
            return Err(ShapeError::ChainOutOfRange {
                id: chain_id,
                len: self.edges.len(),
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
        if edge_id >= self.edges.len() {
            return Err(ShapeError::EdgeOutOfRange {
                id: edge_id,
                len: self.edges.len(),
            });
        }
        Ok(ChainPosition {
            chain_id: edge_id,
            offset: 0,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn singleton_constructor() {
        let a = Vector3::x();
        let b = Vector3::y();
        let shape = EdgeVectorShape::from_points(a, b);

        assert_eq!(shape.num_edges(), 1);
        assert_eq!(shape.num_chains(), 1);
        let edge = shape.edge(0).unwrap();
        assert_eq!(edge.v0, a);
        assert_eq!(edge.v1, b);
        assert_eq!(shape.chain(0).unwrap(), Chain { start: 0, length: 1 });
    }

    #[test]
    fn append_keeps_earlier_ids_stable() {
        let a = Vector3::x();
        let b = Vector3::y();
        let c = Vector3::z();
        let mut shape = EdgeVectorShape::from_points(a, b);
        let before = shape.edge(0).unwrap();

        shape.add_edge(b, c);
        assert_eq!(shape.num_edges(), 2);
        assert_eq!(shape.num_chains(), 2);
        assert_eq!(shape.edge(0).unwrap(), before);
        assert_eq!(shape.edge(1).unwrap(), Edge::new(b, c));
        assert_eq!(
            shape.chain_position(1).unwrap(),
            ChainPosition { chain_id: 1, offset: 0 }
        );
    }

    #[test]
    fn accessors_are_idempotent() {
        let shape = EdgeVectorShape::from_points(Vector3::x(), Vector3::y());
        assert_eq!(shape.edge(0).unwrap(), shape.edge(0).unwrap());
        assert_eq!(shape.chain(0).unwrap(), shape.chain(0).unwrap());
    }

    #[test]
    fn out_of_range_access_fails() {
        let shape = EdgeVectorShape::from_points(Vector3::x(), Vector3::y());
        assert!(matches!(
            shape.edge(1),
            Err(ShapeError::EdgeOutOfRange { id: 1, len: 1 })
        ));
        assert!(matches!(
            shape.chain(3),
            Err(ShapeError::ChainOutOfRange { id: 3, len: 1 })
        ));
        assert!(matches!(
            shape.chain_edge(0, 1),
            Err(ShapeError::ChainOffsetOutOfRange { .. })
        ));
        assert!(matches!(
            shape.chain_position(1),
            Err(ShapeError::EdgeOutOfRange { .. })
        ));

        let empty = EdgeVectorShape::new();
        assert_eq!(empty.num_edges(), 0);
        assert!(matches!(empty.edge(0), Err(ShapeError::EdgeOutOfRange { .. })));
    }

    #[test]
    fn no_interior() {
        let shape = EdgeVectorShape::from_points(Vector3::x(), Vector3::y());
        assert_eq!(shape.dimension(), Dimension::Polyline);
        assert!(!shape.has_interior());
        assert!(!shape.reference_point().contained);
    }
}
