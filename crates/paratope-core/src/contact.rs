//! Atomic proximity between antibody residues and an antigen.

use crate::structure::Residue;
use std::collections::HashMap;

/// Distance in Angstroms under which an antibody atom counts as touching
/// the antigen.
pub const CONTACT_DISTANCE: f32 = 4.5;

/// Fixed-radius neighbor lookup over a set of atom positions.
///
/// Positions are hashed into a uniform grid whose cell edge equals the
/// search radius, so any sphere of that radius is covered by the 3x3x3
/// cell neighborhood around its center.
pub struct NeighborSearch {
    cell_size: f32,
    radius_sq: f32,
    cells: HashMap<[i32; 3], Vec<[f32; 3]>>,
}

impl NeighborSearch {
    /// Index `positions` for queries at `radius`. The radius must be
    /// positive.
    pub fn new(positions: impl IntoIterator<Item = [f32; 3]>, radius: f32) -> Self {
        let mut cells: HashMap<[i32; 3], Vec<[f32; 3]>> = HashMap::new();
        for pos in positions {
            cells.entry(cell_of(pos, radius)).or_default().push(pos);
        }
        NeighborSearch {
            cell_size: radius,
            radius_sq: radius * radius,
            cells,
        }
    }

    /// True if any indexed position lies within the search radius of `point`.
    pub fn any_within(&self, point: [f32; 3]) -> bool {
        let [ci, cj, ck] = cell_of(point, self.cell_size);
        for di in -1..=1 {
            for dj in -1..=1 {
                for dk in -1..=1 {
                    let Some(bucket) = self.cells.get(&[ci + di, cj + dj, ck + dk]) else {
                        continue;
                    };
                    for pos in bucket {
                        let dsq = (pos[0] - point[0]).powi(2)
                            + (pos[1] - point[1]).powi(2)
                            + (pos[2] - point[2]).powi(2);
                        if dsq <= self.radius_sq {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// True if any atom of `residue` is within the search radius of any
    /// indexed position.
    pub fn residue_in_contact(&self, residue: &Residue) -> bool {
        residue.atoms.iter().any(|atom| self.any_within(atom.coords))
    }
}

fn cell_of(pos: [f32; 3], cell_size: f32) -> [i32; 3] {
    [
        (pos[0] / cell_size).floor() as i32,
        (pos[1] / cell_size).floor() as i32,
        (pos[2] / cell_size).floor() as i32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::Atom;

    fn make_atom(name: &str, x: f32, y: f32, z: f32) -> Atom {
        Atom {
            name: name.to_string(),
            coords: [x, y, z],
        }
    }

    #[test]
    fn test_any_within() {
        let search = NeighborSearch::new([[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]], 4.5);
        assert!(search.any_within([3.0, 0.0, 0.0]));
        assert!(search.any_within([12.0, 3.0, 0.0]));
        assert!(!search.any_within([5.0, 0.0, 0.0]));
        assert!(!search.any_within([0.0, 20.0, 0.0]));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let search = NeighborSearch::new([[0.0, 0.0, 0.0]], 4.5);
        assert!(search.any_within([4.5, 0.0, 0.0]));
        assert!(!search.any_within([4.51, 0.0, 0.0]));
    }

    #[test]
    fn test_neighbors_across_cell_borders() {
        // indexed atom and query point land in adjacent grid cells
        let search = NeighborSearch::new([[4.4, 0.0, 0.0]], 4.5);
        assert!(search.any_within([4.6, 0.0, 0.0]));

        let search = NeighborSearch::new([[-0.1, -0.1, -0.1]], 4.5);
        assert!(search.any_within([0.1, 0.1, 0.1]));
    }

    #[test]
    fn test_residue_in_contact_any_atom() {
        let search = NeighborSearch::new([[0.0, 0.0, 0.0]], 4.5);
        let touching = Residue {
            seq_num: 1,
            name: "GLY".to_string(),
            atoms: vec![
                make_atom("N", 50.0, 0.0, 0.0),
                make_atom("CA", 2.0, 0.0, 0.0),
            ],
        };
        let distant = Residue {
            seq_num: 2,
            name: "GLY".to_string(),
            atoms: vec![make_atom("CA", 50.0, 0.0, 0.0)],
        };
        assert!(search.residue_in_contact(&touching));
        assert!(!search.residue_in_contact(&distant));
    }
}
