use tracing::{debug, trace};
use crate::core::commit::move_object;
use crate::core::feasibility::can_move_into;
use crate::core::grid::Grid;
use crate::core::widen::{widen, widen_position};
use crate::core::{Coordinate, Direction, GameChangeType, GameUpdate, UserAction};
use crate::error::PuzzleError;

/// The whole mutable simulation state: the grid and where the agent stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warehouse {
    pub grid: Grid,
    pub agent: Coordinate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub applied: usize,
    pub blocked: usize,
    pub pushes: usize,
}

impl Warehouse {
    pub fn new(grid: Grid, agent: Coordinate) -> Self {
        let warehouse = Warehouse { grid, agent };
        warehouse.assert_agent_clear();
        warehouse
    }

    pub fn widened(&self) -> Result<Warehouse, PuzzleError> {
        Ok(Warehouse::new(widen(&self.grid)?, widen_position(self.agent)))
    }

    fn assert_agent_clear(&self) {
        assert!(
            !self.grid.is_occupied(&self.agent),
            "agent at {:?} overlaps {:?}", self.agent, self.grid.get(&self.agent)
        );
    }
}

/// One agent move: check the whole chain, then commit it, or leave everything as it was.
pub fn step(warehouse: &mut Warehouse, action: UserAction) -> GameUpdate {
    let UserAction::Move(direction) = action;
    let target = warehouse.agent + direction.delta();

    if !can_move_into(&warehouse.grid, target, direction) {
        trace!(?direction, agent = ?warehouse.agent, "move blocked");
        return GameUpdate::Blocked;
    }

    let pushing = warehouse.grid.is_occupied(&target);
    if pushing {
        move_object(&mut warehouse.grid, target, direction);
    }
    warehouse.agent = target;
    warehouse.assert_agent_clear();

    trace!(?direction, agent = ?warehouse.agent, pushing, "moved");
    GameUpdate::Moved(if pushing {
        GameChangeType::AgentAndBoxMove
    } else {
        GameChangeType::AgentMove
    })
}

pub fn apply_moves(warehouse: &mut Warehouse, moves: &[Direction]) -> RunStats {
    let mut stats = RunStats::default();
    for &direction in moves {
        match step(warehouse, UserAction::Move(direction)) {
            GameUpdate::Moved(GameChangeType::AgentMove) => stats.applied += 1,
            GameUpdate::Moved(GameChangeType::AgentAndBoxMove) => {
                stats.applied += 1;
                stats.pushes += 1;
            }
            GameUpdate::Blocked => stats.blocked += 1,
        }
    }
    debug!(?stats, agent = ?warehouse.agent, "move sequence exhausted");
    stats
}
