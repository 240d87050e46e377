use crate::core::bounds::BoundsOriginRoot;
use crate::core::grid::Grid;
use crate::core::{Coordinate, Occupant};
use crate::error::PuzzleError;

/// Doubles the x axis. Every occupied cell becomes two; single boxes become wide boxes.
///
/// Fails if the grid is not a narrow rectangle: occupants outside its bounds,
/// or wide boxes that would be split apart by a second widening.
pub fn widen(narrow: &Grid) -> Result<Grid, PuzzleError> {
    let bounds = narrow.bounds();
    let mut wide = Grid::new(BoundsOriginRoot::new(bounds.width() * 2, bounds.height()));

    let mut entries: Vec<(Coordinate, Occupant)> = narrow.iter().collect();
    entries.sort_unstable_by_key(|(c, _)| (c.y, c.x));

    for (pos, occupant) in entries {
        if !bounds.contains(&pos) {
            return Err(PuzzleError::OutOfBounds { at: pos });
        }
        let (left, right) = match occupant {
            Occupant::Wall => (Occupant::Wall, Occupant::Wall),
            Occupant::SingleBox => (Occupant::WideBoxLeft, Occupant::WideBoxRight),
            Occupant::WideBoxLeft | Occupant::WideBoxRight => {
                return Err(PuzzleError::AlreadyWide { at: pos });
            }
        };
        wide.insert(widen_position(pos), left);
        wide.insert(widen_position(pos) + Coordinate::new(1, 0), right);
    }

    Ok(wide)
}

/// The agent only takes the left cell of its widened pair.
pub fn widen_position(pos: Coordinate) -> Coordinate {
    Coordinate { x: pos.x * 2, y: pos.y }
}
