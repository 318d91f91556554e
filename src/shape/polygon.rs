use super::{Chain, ChainPosition, Dimension, Edge, ReferencePoint, Shape};
use crate::error::{GeometryError, ShapeError};
use crate::geometry::loops::Loop;

/// A polygon assembled from one or more loops, exposed as one chain per
/// loop.
///
/// Interior semantics are even-odd across loops: a point is contained
/// when an odd number of loops contain it, so any nested loop acts as a
/// hole regardless of its orientation. The reference point containment
/// is derived the same way, which keeps it consistent with crossing
/// parity by construction.
#[derive(Debug, Clone)]
pub struct PolygonShape {
    loops: Vec<Loop>,
    /// Global edge id of each loop's first edge; ascending.
    chain_starts: Vec<usize>,
    num_edges: usize,
    origin_inside: bool,
}

impl PolygonShape {
    /// Creates a polygon from the given loops.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPolygon`] if `loops` is empty.
    pub fn from_loops(loops: Vec<Loop>) -> Result<Self, GeometryError> {
        if loops.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }
        let mut chain_starts = Vec::with_capacity(loops.len());
        let mut num_edges = 0;
        let mut origin_inside = false;
        for l in &loops {
            chain_starts.push(num_edges);
            num_edges += l.num_vertices();
            origin_inside ^= l.contains_origin();
        }
        Ok(Self {
            loops,
            chain_starts,
            num_edges,
            origin_inside,
        })
    }

    /// The loops making up this polygon.
    #[must_use]
    pub fn loops(&self) -> &[Loop] {
        &self.loops
    }

    /// Maps a valid global edge id to (loop index, offset in loop).
    fn locate(&self, edge_id: usize) -> (usize, usize) {
        match self.chain_starts.binary_search(&edge_id) {
            Ok(i) => (i, 0),
            Err(i) => (i - 1, edge_id - self.chain_starts[i - 1]),
        }
    }
}

impl Shape for PolygonShape {
    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn edge(&self, id: usize) -> Result<Edge, ShapeError> {
        if id >= self.num_edges {
            return Err(ShapeError::EdgeOutOfRange {
                id,
                len: self.num_edges,
            });
        }
        let (chain_id, offset) = self.locate(id);
        self.loops[chain_id].edge(offset)
    }

    fn dimension(&self) -> Dimension {
        Dimension::Polygon
    }

    fn reference_point(&self) -> ReferencePoint {
        ReferencePoint::origin(self.origin_inside)
    }

    fn num_chains(&self) -> usize {
        self.loops.len()
    }

    fn chain(&self, id: usize) -> Result<Chain, ShapeError> {
        if id >= self.loops.len() {
            return Err(ShapeError::ChainOutOfRange {
                id,
                len: self.loops.len(),
            });
        }
        Ok(Chain {
            start: self.chain_starts[id],
            length: self.loops[id].num_vertices(),
        })
    }

    fn chain_edge(&self, chain_id: usize, offset: usize) -> Result<Edge, ShapeError> {
        if chain_id >= self.loops.len() {
            return Err(ShapeError::ChainOutOfRange {
                id: chain_id,
                len: self.loops.len(),
            });
        }
        let len = self.loops[chain_id].num_vertices();
        if offset >= len {
            return Err(ShapeError::ChainOffsetOutOfRange {
                chain: chain_id,
                offset,
                len,
            });
        }
        self.loops[chain_id].edge(offset)
    }

    fn chain_position(&self, edge_id: usize) -> Result<ChainPosition, ShapeError> {
        if edge_id >= self.num_edges {
            return Err(ShapeError::EdgeOutOfRange {
                id: edge_id,
                len: self.num_edges,
            });
        }
        let (chain_id, offset) = self.locate(edge_id);
        Ok(ChainPosition { chain_id, offset })
    }
}
