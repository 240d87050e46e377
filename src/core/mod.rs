mod model_helpers;
mod models;
mod bounds;
mod grid;
mod widen;
mod feasibility;
mod commit;
mod update;
mod score;

pub use models::{Coordinate, Direction, Occupant, UserAction, GameUpdate, GameChangeType};
pub use bounds::BoundsOriginRoot;
pub use grid::Grid;
pub use widen::{widen, widen_position};
pub use feasibility::can_move_into;
pub use commit::move_object;
pub use update::{step, apply_moves, RunStats, Warehouse};
pub use score::{gps_coordinate, gps_sum};
