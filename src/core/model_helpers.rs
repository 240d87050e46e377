use std::ops::{Add, Mul, Sub};
use crate::core::{Coordinate, Direction, Occupant};

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Coordinate {
        Coordinate { x, y }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: i32) -> Coordinate {
        Coordinate { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn delta(self) -> Coordinate {
        match self {
            Direction::Up => Coordinate { x: 0, y: -1 },
            Direction::Down => Coordinate { x: 0, y: 1 },
            Direction::Left => Coordinate { x: -1, y: 0 },
            Direction::Right => Coordinate { x: 1, y: 0 },
        }
    }

    /// Wide boxes lie along the horizontal axis, so only vertical moves couple both halves.
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    pub fn from_symbol(symbol: char) -> Option<Direction> {
        match symbol {
            '^' => Some(Direction::Up),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            '>' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        }
    }
}

impl Occupant {
    pub fn is_wide(self) -> bool {
        matches!(self, Occupant::WideBoxLeft | Occupant::WideBoxRight)
    }

    /// Offset from this half to the other half of its wide box, if it is one.
    pub fn partner_offset(self) -> Option<Coordinate> {
        match self {
            Occupant::WideBoxLeft => Some(Direction::Right.delta()),
            Occupant::WideBoxRight => Some(Direction::Left.delta()),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Occupant::Wall => '#',
            Occupant::SingleBox => 'O',
            Occupant::WideBoxLeft => '[',
            Occupant::WideBoxRight => ']',
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coordinate_arithmetic_is_componentwise() {
        let a = Coordinate::new(3, -2);
        let b = Coordinate::new(-1, 5);
        assert_eq!(a + b, Coordinate::new(2, 3));
        assert_eq!(a - b, Coordinate::new(4, -7));
        assert_eq!(a * 2, Coordinate::new(6, -4));
    }

    #[test]
    fn direction_symbols_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_symbol(dir.symbol()), Some(dir));
        }
        assert_eq!(Direction::from_symbol('x'), None);
    }

    #[test]
    fn opposite_directions_cancel() {
        assert_eq!(Direction::Up.delta() + Direction::Down.delta(), Coordinate::default());
        assert_eq!(Direction::Left.delta() + Direction::Right.delta(), Coordinate::default());
    }

    #[test]
    fn wide_halves_point_at_each_other() {
        let left = Coordinate::new(4, 1);
        let right = left + Occupant::WideBoxLeft.partner_offset().unwrap();
        assert_eq!(right, Coordinate::new(5, 1));
        assert_eq!(right + Occupant::WideBoxRight.partner_offset().unwrap(), left);
        assert_eq!(Occupant::SingleBox.partner_offset(), None);
        assert_eq!(Occupant::Wall.partner_offset(), None);
    }
}
