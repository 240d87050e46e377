use std::collections::HashMap;
use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Coordinate, Occupant};

/// Sparse map from coordinate to occupant. Missing keys are empty floor,
/// including everything outside `bounds`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Grid {
    bounds: BoundsOriginRoot,
    cells: HashMap<Coordinate, Occupant>,
}

impl Grid {
    pub fn new(bounds: BoundsOriginRoot) -> Self {
        Grid {
            bounds,
            cells: HashMap::new(),
        }
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Coordinate) -> Option<Occupant> {
        self.cells.get(pos).copied()
    }

    pub fn is_occupied(&self, pos: &Coordinate) -> bool {
        self.cells.contains_key(pos)
    }

    /// Returns whatever previously sat on `pos`.
    pub fn insert(&mut self, pos: Coordinate, occupant: Occupant) -> Option<Occupant> {
        self.cells.insert(pos, occupant)
    }

    pub fn remove(&mut self, pos: &Coordinate) -> Option<Occupant> {
        self.cells.remove(pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, Occupant)> + '_ {
        self.cells.iter().map(|(&pos, &occupant)| (pos, occupant))
    }

    /// Every coordinate holding `occupant`, sorted row-major.
    pub fn positions_of(&self, occupant: Occupant) -> Vec<Coordinate> {
        let mut positions: Vec<Coordinate> = self
            .iter()
            .filter(|&(_, o)| o == occupant)
            .map(|(pos, _)| pos)
            .collect();
        positions.sort_unstable_by_key(|c| (c.y, c.x));
        positions
    }

    pub fn count_of(&self, occupant: Occupant) -> usize {
        self.cells.values().filter(|&&o| o == occupant).count()
    }

    /// First wide-box half whose partner is missing or mismatched.
    pub fn find_unpaired_wide_box(&self) -> Option<Coordinate> {
        self.iter()
            .filter_map(|(pos, occupant)| {
                let offset = occupant.partner_offset()?;
                let expected = match occupant {
                    Occupant::WideBoxLeft => Occupant::WideBoxRight,
                    _ => Occupant::WideBoxLeft,
                };
                (self.get(&(pos + offset)) != Some(expected)).then_some(pos)
            })
            .min_by_key(|c| (c.y, c.x))
    }
}
