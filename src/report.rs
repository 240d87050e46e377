use serde::Serialize;
use crate::core::{gps_sum, Coordinate, Occupant, RunStats, Warehouse};
use crate::models::Topology;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunReport {
    pub topology: Topology,
    pub moves_applied: usize,
    pub moves_blocked: usize,
    pub pushes: usize,
    pub final_agent: Coordinate,
    pub boxes: Vec<Coordinate>,
    pub gps_sum: i64,
}

impl RunReport {
    pub fn new(topology: Topology, warehouse: &Warehouse, stats: RunStats) -> Self {
        let mut boxes = warehouse.grid.positions_of(Occupant::SingleBox);
        boxes.extend(warehouse.grid.positions_of(Occupant::WideBoxLeft));
        boxes.sort_unstable_by_key(|c| (c.y, c.x));
        RunReport {
            topology,
            moves_applied: stats.applied,
            moves_blocked: stats.blocked,
            pushes: stats.pushes,
            final_agent: warehouse.agent,
            boxes,
            gps_sum: gps_sum(&warehouse.grid),
        }
    }
}

pub fn get_json_data(reports: &[RunReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::console_interface::parse_level;
    use crate::core::{apply_moves, gps_coordinate};
    use crate::core::Direction::*;

    #[test]
    fn report_serializes_final_state() {
        let mut warehouse = parse_level("#@O.#").unwrap();
        let stats = apply_moves(&mut warehouse, &[Right, Right]);
        let report = RunReport::new(Topology::Narrow, &warehouse, stats);

        assert_eq!(report.moves_applied, 1);
        assert_eq!(report.moves_blocked, 1);
        assert_eq!(report.pushes, 1);
        assert_eq!(report.boxes, vec![Coordinate::new(3, 0)]);
        assert_eq!(report.gps_sum, 3);

        let json: serde_json::Value = serde_json::from_str(&get_json_data(&[report]).unwrap()).unwrap();
        assert_eq!(json[0]["topology"], "narrow");
        assert_eq!(json[0]["final_agent"]["x"], 2);
        assert_eq!(json[0]["gps_sum"], 3);
    }

    #[test]
    fn narrow_report_lists_wide_boxes_counted_in_gps() {
        let mut warehouse = parse_level("#@O.[].#").unwrap();
        let stats = apply_moves(&mut warehouse, &[Right]);
        let report = RunReport::new(Topology::Narrow, &warehouse, stats);

        assert_eq!(report.boxes, vec![Coordinate::new(3, 0), Coordinate::new(4, 0)]);
        let listed: i64 = report.boxes.iter().map(|&c| gps_coordinate(c)).sum();
        assert_eq!(report.gps_sum, listed);
    }
}
