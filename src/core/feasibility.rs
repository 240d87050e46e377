use std::collections::HashSet;
use crate::core::grid::Grid;
use crate::core::{Coordinate, Direction, Occupant};

/// Whether whatever sits on `pos` can be shoved one cell towards `direction`,
/// along with everything it would push in turn. Never mutates the grid.
pub fn can_move_into(grid: &Grid, pos: Coordinate, direction: Direction) -> bool {
    let mut checked = HashSet::new();
    check_cell(grid, pos, direction, &mut checked)
}

/// Each occupied cell is checked at most once. Stacked wide boxes reach the
/// same box above through both halves; any failure already decides the whole
/// result, so a revisited cell can report success.
fn check_cell(grid: &Grid, pos: Coordinate, direction: Direction, checked: &mut HashSet<Coordinate>) -> bool {
    let Some(occupant) = grid.get(&pos) else {
        return true;
    };
    if !checked.insert(pos) {
        return true;
    }
    let target = pos + direction.delta();

    match occupant {
        Occupant::Wall => false,
        Occupant::WideBoxLeft if direction.is_vertical() => {
            check_cell(grid, target, direction, checked)
                && check_cell(grid, target + Direction::Right.delta(), direction, checked)
        }
        Occupant::WideBoxRight if direction.is_vertical() => {
            check_cell(grid, target, direction, checked)
                && check_cell(grid, target + Direction::Left.delta(), direction, checked)
        }
        // single boxes, and wide boxes moving along their own axis
        _ => check_cell(grid, target, direction, checked),
    }
}
