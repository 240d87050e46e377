use crate::core::grid::Grid;
use crate::core::{Coordinate, Occupant};

pub fn gps_coordinate(pos: Coordinate) -> i64 {
    pos.x as i64 + 100 * pos.y as i64
}

/// Sums the GPS coordinate of every single box and every wide box (by its left half).
pub fn gps_sum(grid: &Grid) -> i64 {
    grid.iter()
        .filter(|&(_, o)| matches!(o, Occupant::SingleBox | Occupant::WideBoxLeft))
        .map(|(pos, _)| gps_coordinate(pos))
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::bounds::BoundsOriginRoot;

    #[test]
    fn gps_weights_rows_by_hundred() {
        assert_eq!(gps_coordinate(Coordinate::new(4, 1)), 104);
        assert_eq!(gps_coordinate(Coordinate::new(0, 0)), 0);
    }

    #[test]
    fn gps_sum_ignores_walls_and_right_halves() {
        let mut grid = Grid::new(BoundsOriginRoot::new(10, 10));
        grid.insert(Coordinate::new(0, 0), Occupant::Wall);
        grid.insert(Coordinate::new(2, 1), Occupant::SingleBox);
        grid.insert(Coordinate::new(5, 3), Occupant::WideBoxLeft);
        grid.insert(Coordinate::new(6, 3), Occupant::WideBoxRight);

        assert_eq!(gps_sum(&grid), 102 + 305);
    }
}
