use smallvec::SmallVec;

/// Single coordinate axis used for the board side and cell positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// 1-based cell identifier, increasing fastest along `y` for a fixed `x`.
pub type CellId = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Neighbour list of a single cell, never longer than the Moore neighbourhood.
pub type Neighbors = SmallVec<[Coord2; 8]>;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Maps a position on a `size`×`size` board to its id.
pub const fn cell_id(size: Coord, (x, y): Coord2) -> CellId {
    x as CellId * size as CellId + y as CellId + 1
}

/// Maps an id back to its position, `None` when the id is not on the board.
pub fn cell_coords(size: Coord, id: CellId) -> Option<Coord2> {
    if id == 0 || id > mult(size, size) {
        return None;
    }
    let index = id - 1;
    let side = CellCount::from(size);
    let x = (index / side).try_into().ok()?;
    let y = (index % side).try_into().ok()?;
    Some((x, y))
}

/// Visitation order of the Moore neighbourhood: `dx` ascending, then `dy` ascending.
const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds Moore neighbourhood of `center` on a `side`×`side` board, in visitation order.
pub fn neighbors_of(center: Coord2, side: Coord) -> Neighbors {
    let (x, y) = center;
    DISPLACEMENTS
        .iter()
        .filter_map(|&(dx, dy)| {
            let next = (x.checked_add_signed(dx)?, y.checked_add_signed(dy)?);
            (next.0 < side && next.1 < side).then_some(next)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_fastest_along_y() {
        assert_eq!(cell_id(3, (0, 0)), 1);
        assert_eq!(cell_id(3, (0, 2)), 3);
        assert_eq!(cell_id(3, (1, 0)), 4);
        assert_eq!(cell_id(3, (2, 2)), 9);
    }

    #[test]
    fn coords_round_trip_through_ids() {
        for x in 0..5 {
            for y in 0..5 {
                assert_eq!(cell_coords(5, cell_id(5, (x, y))), Some((x, y)));
            }
        }
    }

    #[test]
    fn coords_reject_ids_off_the_board() {
        assert_eq!(cell_coords(4, 0), None);
        assert_eq!(cell_coords(4, 17), None);
        assert_eq!(cell_coords(0, 1), None);
    }

    #[test]
    fn neighbor_counts_by_position() {
        assert_eq!(neighbors_of((1, 1), 3).len(), 8);
        assert_eq!(neighbors_of((0, 1), 3).len(), 5);
        assert_eq!(neighbors_of((2, 2), 3).len(), 3);
        assert!(neighbors_of((0, 0), 1).is_empty());
    }

    #[test]
    fn neighbors_iterate_dx_then_dy() {
        assert_eq!(
            neighbors_of((1, 1), 3).as_slice(),
            [
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }
}
