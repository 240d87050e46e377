// Warehouse push simulator.
// Input: a grid block ('#' wall, 'O' box, '[' ']' wide box, '@' agent, '.' floor)
// followed by a block of moves ('^' 'v' '<' '>').

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use PushEngine::console_interface::ConsoleInput::*;
use PushEngine::console_interface::{
    cleanup_terminal, handle_input, parse_input, parse_input_with_topology, render_game,
    render_warehouse_to_string, setup_terminal,
};
use PushEngine::core::{apply_moves, step, Direction, GameUpdate, Warehouse};
use PushEngine::models::{GameRenderState, Topology};
use PushEngine::report::{get_json_data, RunReport};

#[derive(Parser, Debug)]
#[command(name = "push-engine", version, about = "Simulates an agent pushing boxes around a warehouse grid")]
struct Cli {
    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply the input's move sequence and print the GPS sum of the final boxes
    Run {
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = TopologyArg::Both)]
        topology: TopologyArg,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Print the final grid
        #[arg(long)]
        show: bool,
    },
    /// Drive the agent by hand in the terminal
    Interactive {
        input: PathBuf,
        #[arg(long)]
        wide: bool,
    },
    /// Print the widened grid
    Widen {
        input: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TopologyArg {
    Narrow,
    Wide,
    Both,
}

impl TopologyArg {
    fn topologies(self) -> Vec<Topology> {
        match self {
            TopologyArg::Narrow => vec![Topology::Narrow],
            TopologyArg::Wide => vec![Topology::Wide],
            TopologyArg::Both => vec![Topology::Narrow, Topology::Wide],
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run { input, topology, json, show } => {
            run_simulation(&input, topology, json, show)?;
        }
        Command::Interactive { input, wide } => {
            let topology = if wide { Topology::Wide } else { Topology::Narrow };
            run_interactive(&input, topology)?;
        }
        Command::Widen { input } => {
            let (warehouse, _moves) = parse_input(&std::fs::read_to_string(&input)?)?;
            print!("{}", render_warehouse_to_string(&warehouse.widened()?));
        }
    }

    Ok(())
}

fn load(input: &Path, topology: Topology) -> Result<(Warehouse, Vec<Direction>), Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(input)?;
    let (warehouse, moves) = parse_input_with_topology(&text, topology)?;
    info!(path = %input.display(), ?topology, moves = moves.len(), "loaded puzzle");
    Ok((warehouse, moves))
}

fn run_simulation(
    input: &Path,
    topology: TopologyArg,
    json: bool,
    show: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut reports = Vec::new();

    for topology in topology.topologies() {
        let (mut warehouse, moves) = load(input, topology)?;

        let start_time = std::time::Instant::now();
        let stats = apply_moves(&mut warehouse, &moves);
        info!(?topology, elapsed = ?start_time.elapsed(), applied = stats.applied, "simulation finished");
        if stats.blocked > 0 {
            warn!(?topology, blocked = stats.blocked, "some moves were blocked");
        }

        if show && !json {
            print!("{}", render_warehouse_to_string(&warehouse));
        }
        reports.push(RunReport::new(topology, &warehouse, stats));
    }

    if json {
        println!("{}", get_json_data(&reports)?);
    } else {
        for report in &reports {
            match report.topology {
                Topology::Narrow => println!("Sum of box GPS values: {}", report.gps_sum),
                Topology::Wide => println!("Sum of wide box GPS values: {}", report.gps_sum),
            }
        }
    }

    Ok(())
}

fn run_interactive(input: &Path, topology: Topology) -> Result<(), Box<dyn std::error::Error>> {
    let (warehouse, _moves) = load(input, topology)?;
    let mut terminal = setup_terminal()?;

    let mut state = GameRenderState {
        warehouse,
        topology,
        moves_made: 0,
        blocked: false,
        last_change: None,
    };
    render_game(&mut terminal, &state)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(UserAction(user_action)) => {
                let update = step(&mut state.warehouse, user_action);
                match update {
                    GameUpdate::Moved(change_type) => {
                        state.moves_made += 1;
                        state.blocked = false;
                        state.last_change = Some(change_type);
                    }
                    GameUpdate::Blocked => state.blocked = true,
                }
                render_game(&mut terminal, &state)?;
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(err) => {
                warn!(%err, "error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}
