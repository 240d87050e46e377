use serde::Serialize;
use crate::core::Coordinate;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct BoundsOriginRoot {
    pub extent: Coordinate,
}

impl BoundsOriginRoot {
    pub fn new(x: i32, y: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Coordinate { x, y }
        }
    }

    pub fn width(&self) -> i32 {
        self.extent.x
    }

    pub fn height(&self) -> i32 {
        self.extent.y
    }

    pub fn contains(&self, pos: &Coordinate) -> bool {
        pos.x >= 0 && pos.x < self.extent.x && pos.y >= 0 && pos.y < self.extent.y
    }

    /// Row-major walk over every cell.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let extent = self.extent;
        (0..extent.y).flat_map(move |y| (0..extent.x).map(move |x| Coordinate { x, y }))
    }
}
