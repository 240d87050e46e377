use clap::ValueEnum;
use serde::Serialize;
use crate::core::{GameChangeType, Warehouse};

pub struct GameRenderState {
    pub warehouse: Warehouse,
    pub topology: Topology,
    pub moves_made: usize,
    pub blocked: bool,
    pub last_change: Option<GameChangeType>,
}

/// Which grid a run simulates: the input as written, or its widened twin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Narrow,
    Wide,
}
