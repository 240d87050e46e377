use crate::core::feasibility::can_move_into;
use crate::core::grid::Grid;
use crate::core::{Coordinate, Direction, Occupant};

/// Shoves the object on `pos` one cell towards `direction`, displacing the far
/// end of the chain first.
///
/// Callers must have confirmed `can_move_into(grid, pos, direction)` on this exact
/// grid. Anything else is a broken invariant and panics.
pub fn move_object(grid: &mut Grid, pos: Coordinate, direction: Direction) {
    debug_assert!(
        can_move_into(grid, pos, direction),
        "move_object called on infeasible move at {:?} towards {:?}", pos, direction
    );
    move_occupant(grid, pos, direction);
}

fn move_occupant(grid: &mut Grid, pos: Coordinate, direction: Direction) {
    let Some(occupant) = grid.get(&pos) else {
        panic!("nothing to move at {:?}", pos);
    };

    match occupant {
        Occupant::Wall => panic!("tried to move a wall at {:?}", pos),
        Occupant::SingleBox => shift_cell(grid, pos, direction),
        Occupant::WideBoxLeft | Occupant::WideBoxRight => move_wide_box(grid, pos, occupant, direction),
    }
}

fn move_wide_box(grid: &mut Grid, pos: Coordinate, occupant: Occupant, direction: Direction) {
    let Some(offset) = occupant.partner_offset() else {
        panic!("{:?} at {:?} is not a wide box half", occupant, pos);
    };
    let partner = pos + offset;
    assert!(
        grid.get(&partner).is_some_and(|o| o.is_wide() && o != occupant),
        "wide box half at {:?} lost its partner at {:?}", pos, partner
    );

    // Vertical: partner half first, then the half that was pushed.
    // Horizontal: whichever half leads the direction of travel goes first.
    let partner_first = direction.is_vertical() || offset == direction.delta();
    let (first, second) = if partner_first { (partner, pos) } else { (pos, partner) };

    shift_cell(grid, first, direction);
    shift_cell(grid, second, direction);
}

/// Clears the cell ahead of `pos` (recursively) and relocates the occupant into it.
fn shift_cell(grid: &mut Grid, pos: Coordinate, direction: Direction) {
    let target = pos + direction.delta();
    if grid.is_occupied(&target) {
        move_occupant(grid, target, direction);
    }
    assert!(!grid.is_occupied(&target), "cell {:?} still occupied after clearing it", target);

    let Some(occupant) = grid.remove(&pos) else {
        panic!("occupant at {:?} vanished mid-move", pos);
    };
    grid.insert(target, occupant);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::bounds::BoundsOriginRoot;
    use Direction::*;

    fn grid_with(cells: &[((i32, i32), Occupant)]) -> Grid {
        let mut grid = Grid::new(BoundsOriginRoot::new(10, 10));
        for &((x, y), occupant) in cells {
            grid.insert(Coordinate::new(x, y), occupant);
        }
        grid
    }

    #[test]
    fn single_box_moves_one_cell() {
        let mut grid = grid_with(&[((2, 0), Occupant::SingleBox)]);
        move_object(&mut grid, Coordinate::new(2, 0), Right);

        assert_eq!(grid, grid_with(&[((3, 0), Occupant::SingleBox)]));
    }

    #[test]
    fn chain_moves_together() {
        let mut grid = grid_with(&[
            ((2, 0), Occupant::SingleBox),
            ((3, 0), Occupant::SingleBox),
            ((4, 0), Occupant::SingleBox),
        ]);
        move_object(&mut grid, Coordinate::new(2, 0), Right);

        assert_eq!(grid, grid_with(&[
            ((3, 0), Occupant::SingleBox),
            ((4, 0), Occupant::SingleBox),
            ((5, 0), Occupant::SingleBox),
        ]));
    }

    #[test]
    fn wide_box_pushed_horizontally_from_either_side() {
        let mut grid = grid_with(&[((2, 0), Occupant::WideBoxLeft), ((3, 0), Occupant::WideBoxRight)]);
        move_object(&mut grid, Coordinate::new(2, 0), Right);
        assert_eq!(grid, grid_with(&[((3, 0), Occupant::WideBoxLeft), ((4, 0), Occupant::WideBoxRight)]));

        move_object(&mut grid, Coordinate::new(4, 0), Left);
        move_object(&mut grid, Coordinate::new(3, 0), Left);
        assert_eq!(grid, grid_with(&[((1, 0), Occupant::WideBoxLeft), ((2, 0), Occupant::WideBoxRight)]));
    }

    #[test]
    fn wide_box_pushed_vertically_moves_both_halves() {
        let mut grid = grid_with(&[((2, 5), Occupant::WideBoxLeft), ((3, 5), Occupant::WideBoxRight)]);
        move_object(&mut grid, Coordinate::new(3, 5), Up);

        assert_eq!(grid, grid_with(&[((2, 4), Occupant::WideBoxLeft), ((3, 4), Occupant::WideBoxRight)]));
    }

    #[test]
    fn wide_box_pushes_staggered_boxes_above() {
        // [][]
        //  []
        let mut grid = grid_with(&[
            ((1, 4), Occupant::WideBoxLeft), ((2, 4), Occupant::WideBoxRight),
            ((3, 4), Occupant::WideBoxLeft), ((4, 4), Occupant::WideBoxRight),
            ((2, 5), Occupant::WideBoxLeft), ((3, 5), Occupant::WideBoxRight),
        ]);
        move_object(&mut grid, Coordinate::new(2, 5), Up);

        assert_eq!(grid, grid_with(&[
            ((1, 3), Occupant::WideBoxLeft), ((2, 3), Occupant::WideBoxRight),
            ((3, 3), Occupant::WideBoxLeft), ((4, 3), Occupant::WideBoxRight),
            ((2, 4), Occupant::WideBoxLeft), ((3, 4), Occupant::WideBoxRight),
        ]));
    }

    #[test]
    fn shared_box_above_is_moved_once() {
        //  []
        // [][]
        //  []
        let mut grid = grid_with(&[
            ((2, 3), Occupant::WideBoxLeft), ((3, 3), Occupant::WideBoxRight),
            ((1, 4), Occupant::WideBoxLeft), ((2, 4), Occupant::WideBoxRight),
            ((3, 4), Occupant::WideBoxLeft), ((4, 4), Occupant::WideBoxRight),
            ((2, 5), Occupant::WideBoxLeft), ((3, 5), Occupant::WideBoxRight),
        ]);
        move_object(&mut grid, Coordinate::new(3, 5), Up);

        assert_eq!(grid, grid_with(&[
            ((2, 2), Occupant::WideBoxLeft), ((3, 2), Occupant::WideBoxRight),
            ((1, 3), Occupant::WideBoxLeft), ((2, 3), Occupant::WideBoxRight),
            ((3, 3), Occupant::WideBoxLeft), ((4, 3), Occupant::WideBoxRight),
            ((2, 4), Occupant::WideBoxLeft), ((3, 4), Occupant::WideBoxRight),
        ]));
    }

    #[test]
    #[should_panic]
    fn moving_into_wall_panics() {
        let mut grid = grid_with(&[((2, 0), Occupant::SingleBox), ((3, 0), Occupant::Wall)]);
        move_object(&mut grid, Coordinate::new(2, 0), Right);
    }

    #[test]
    #[should_panic(expected = "nothing to move")]
    fn moving_empty_cell_panics() {
        let mut grid = grid_with(&[]);
        move_object(&mut grid, Coordinate::new(2, 0), Right);
    }
}
