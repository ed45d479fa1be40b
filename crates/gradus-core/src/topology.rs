//! Peer topology for a grid size.
//!
//! A [`Topology`] is derived once per grid size: which box each coordinate
//! belongs to, the member coordinates of every box, the box's row and column
//! slices (its intersection with each grid row/column), and the precomputed
//! peer list of every coordinate (same row, column or box).
//!
//! The peer relation is symmetric and never changes for a grid's lifetime.

use crate::Coordinate;

/// The intersection of one box with one grid row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice {
    line: usize,
    cells: Vec<Coordinate>,
}

impl Slice {
    /// Returns the absolute index of the grid row/column this slice lies on.
    #[inline]
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the member coordinates in ascending order.
    #[must_use]
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }
}

/// One box of the grid together with its row and column slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxRegion {
    index: usize,
    cells: Vec<Coordinate>,
    row_slices: Vec<Slice>,
    col_slices: Vec<Slice>,
}

impl BoxRegion {
    /// Returns the box index (left to right, top to bottom).
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns all member coordinates in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    /// Returns the box's row slices, top to bottom.
    #[must_use]
    pub fn row_slices(&self) -> &[Slice] {
        &self.row_slices
    }

    /// Returns the box's column slices, left to right.
    #[must_use]
    pub fn col_slices(&self) -> &[Slice] {
        &self.col_slices
    }
}

/// Precomputed peer relationships for one grid size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    size: usize,
    box_size: usize,
    boxes: Vec<BoxRegion>,
    box_index: Vec<usize>,
    peers: Vec<Vec<Coordinate>>,
}

impl Topology {
    /// Builds the topology for a grid of `size` rows and columns.
    ///
    /// `size` must be a perfect square; [`Grid`](crate::Grid) construction
    /// validates this before calling.
    #[must_use]
    pub(crate) fn new(size: usize) -> Self {
        let box_size = integer_sqrt(size);
        debug_assert_eq!(box_size * box_size, size);

        let mut boxes = Vec::with_capacity(size);
        let mut box_index = vec![0; size * size];
        for index in 0..size {
            let base_row = (index / box_size) * box_size;
            let base_col = (index % box_size) * box_size;

            let mut cells = Vec::with_capacity(size);
            let mut row_slices = Vec::with_capacity(box_size);
            let mut col_slices: Vec<Slice> = (0..box_size)
                .map(|c| Slice {
                    line: base_col + c,
                    cells: Vec::with_capacity(box_size),
                })
                .collect();
            for r in base_row..base_row + box_size {
                let mut row_cells = Vec::with_capacity(box_size);
                for c in base_col..base_col + box_size {
                    let coordinate = Coordinate::new(r, c);
                    cells.push(coordinate);
                    row_cells.push(coordinate);
                    col_slices[c - base_col].cells.push(coordinate);
                    box_index[r * size + c] = index;
                }
                row_slices.push(Slice {
                    line: r,
                    cells: row_cells,
                });
            }
            boxes.push(BoxRegion {
                index,
                cells,
                row_slices,
                col_slices,
            });
        }

        let mut peers = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let mut list = Vec::with_capacity(3 * (size - 1));
                for c in 0..size {
                    if c != col {
                        list.push(Coordinate::new(row, c));
                    }
                }
                for r in 0..size {
                    if r != row {
                        list.push(Coordinate::new(r, col));
                    }
                }
                for &peer in &boxes[box_index[row * size + col]].cells {
                    // Box peers sharing the row or column are already listed.
                    if peer.row() != row && peer.col() != col {
                        list.push(peer);
                    }
                }
                peers.push(list);
            }
        }

        Self {
            size,
            box_size,
            boxes,
            box_index,
            peers,
        }
    }

    /// Returns the grid size this topology was built for.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the box side length (3 for a 9×9 grid).
    #[inline]
    #[must_use]
    pub const fn box_size(&self) -> usize {
        self.box_size
    }

    /// Returns all boxes in index order.
    #[must_use]
    pub fn boxes(&self) -> &[BoxRegion] {
        &self.boxes
    }

    /// Returns the box containing `coordinate`.
    #[must_use]
    pub fn box_of(&self, coordinate: Coordinate) -> &BoxRegion {
        &self.boxes[self.box_index[coordinate.row() * self.size + coordinate.col()]]
    }

    /// Returns every peer of `coordinate` (same row, column or box), each
    /// exactly once, excluding the coordinate itself.
    #[must_use]
    pub fn peers(&self, coordinate: Coordinate) -> &[Coordinate] {
        &self.peers[coordinate.row() * self.size + coordinate.col()]
    }
}

pub(crate) fn integer_sqrt(size: usize) -> usize {
    let mut root = 0;
    while (root + 1) * (root + 1) <= size {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_membership() {
        let topology = Topology::new(9);
        assert_eq!(topology.box_size(), 3);
        assert_eq!(topology.boxes().len(), 9);

        let center = topology.box_of(Coordinate::new(4, 4));
        assert_eq!(center.index(), 4);
        assert_eq!(center.cells().len(), 9);
        assert!(center.cells().contains(&Coordinate::new(3, 3)));
        assert!(center.cells().contains(&Coordinate::new(5, 5)));
        assert!(!center.cells().contains(&Coordinate::new(2, 4)));
    }

    #[test]
    fn test_slices() {
        let topology = Topology::new(9);
        let top_left = topology.box_of(Coordinate::new(0, 0));
        assert_eq!(top_left.row_slices().len(), 3);
        assert_eq!(top_left.col_slices().len(), 3);

        let first_row = &top_left.row_slices()[0];
        assert_eq!(first_row.line(), 0);
        assert_eq!(
            first_row.cells(),
            &[
                Coordinate::new(0, 0),
                Coordinate::new(0, 1),
                Coordinate::new(0, 2),
            ]
        );

        let first_col = &top_left.col_slices()[0];
        assert_eq!(first_col.line(), 0);
        assert_eq!(
            first_col.cells(),
            &[
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_peers_are_unique_and_symmetric() {
        let topology = Topology::new(9);
        let coordinate = Coordinate::new(4, 4);
        let peers = topology.peers(coordinate);

        // 8 row + 8 column + 4 remaining box peers
        assert_eq!(peers.len(), 20);
        let mut sorted = peers.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 20);
        assert!(!peers.contains(&coordinate));

        for &peer in peers {
            assert!(topology.peers(peer).contains(&coordinate));
        }
    }

    #[test]
    fn test_four_by_four() {
        let topology = Topology::new(4);
        assert_eq!(topology.box_size(), 2);
        assert_eq!(topology.peers(Coordinate::new(0, 0)).len(), 7);
    }
}
