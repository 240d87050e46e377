use crate::core::{BoundsOriginRoot, Coordinate, Direction, Grid, Occupant, UserAction, Warehouse};
use crate::error::PuzzleError;
use crate::models::{GameRenderState, Topology};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use tracing::debug;

const WALL: char = '#';
const AGENT: char = '@';
const EMPTY: char = '.';

/// Decodes a grid block. Every non-blank line is a row.
pub fn parse_level(s: &str) -> Result<Warehouse, PuzzleError> {
    let rows: Vec<&str> = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .collect();
    parse_rows(&rows)
}

/// Decodes a direction block. Whitespace and line breaks are ignored.
pub fn parse_moves(s: &str) -> Result<Vec<Direction>, PuzzleError> {
    let moves = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(index, symbol)| {
            Direction::from_symbol(symbol).ok_or(PuzzleError::UnknownDirection { symbol, index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if moves.is_empty() {
        return Err(PuzzleError::MissingMoves);
    }
    Ok(moves)
}

/// Decodes a full puzzle: the leading rows containing walls form the grid,
/// everything after them is the move sequence.
pub fn parse_input(s: &str) -> Result<(Warehouse, Vec<Direction>), PuzzleError> {
    let mut lines = s
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .skip_while(|line| line.is_empty())
        .peekable();

    let mut rows = Vec::new();
    while let Some(line) = lines.next_if(|line| line.contains(WALL)) {
        rows.push(line);
    }
    let warehouse = parse_rows(&rows)?;

    let remaining: String = lines.collect();
    let moves = parse_moves(&remaining)?;

    Ok((warehouse, moves))
}

pub fn parse_input_with_topology(s: &str, topology: Topology) -> Result<(Warehouse, Vec<Direction>), PuzzleError> {
    let (warehouse, moves) = parse_input(s)?;
    let warehouse = match topology {
        Topology::Narrow => warehouse,
        Topology::Wide => warehouse.widened()?,
    };
    Ok((warehouse, moves))
}

fn parse_rows(rows: &[&str]) -> Result<Warehouse, PuzzleError> {
    let Some(first) = rows.first() else {
        return Err(PuzzleError::EmptyGrid);
    };
    let width = first.chars().count();

    let mut grid = Grid::new(BoundsOriginRoot::new(width as i32, rows.len() as i32));
    let mut agent: Option<Coordinate> = None;

    for (y, row) in rows.iter().enumerate() {
        let found = row.chars().count();
        if found != width {
            return Err(PuzzleError::NonRectangular { row: y, expected: width, found });
        }

        for (x, symbol) in row.chars().enumerate() {
            let pos = Coordinate::new(x as i32, y as i32);
            let occupant = match symbol {
                WALL => Occupant::Wall,
                'O' => Occupant::SingleBox,
                '[' => Occupant::WideBoxLeft,
                ']' => Occupant::WideBoxRight,
                EMPTY => continue,
                AGENT => {
                    if let Some(first) = agent {
                        return Err(PuzzleError::MultipleAgents { first, second: pos });
                    }
                    agent = Some(pos);
                    continue;
                }
                _ => return Err(PuzzleError::UnknownSymbol { symbol, row: y, column: x }),
            };
            grid.insert(pos, occupant);
        }
    }

    if let Some(at) = grid.find_unpaired_wide_box() {
        return Err(PuzzleError::UnpairedWideBox { at });
    }
    let agent = agent.ok_or(PuzzleError::MissingAgent)?;

    debug!(
        width,
        height = rows.len(),
        walls = grid.count_of(Occupant::Wall),
        boxes = grid.count_of(Occupant::SingleBox) + grid.count_of(Occupant::WideBoxLeft),
        "decoded grid"
    );
    Ok(Warehouse::new(grid, agent))
}

pub fn render_warehouse_to_string(warehouse: &Warehouse) -> String {
    let bounds = warehouse.grid.bounds();
    let mut result = String::new();
    for y in 0..bounds.height() {
        for x in 0..bounds.width() {
            let pos = Coordinate::new(x, y);
            let ch = match warehouse.grid.get(&pos) {
                Some(occupant) => {
                    assert_ne!(pos, warehouse.agent, "agent overlaps {:?}", occupant);
                    occupant.symbol()
                }
                None if pos == warehouse.agent => AGENT,
                None => EMPTY,
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let title = match state.topology {
            Topology::Narrow => "Warehouse",
            Topology::Wide => "Warehouse (wide)",
        };
        let game_paragraph = Paragraph::new(render_warehouse_to_string(&state.warehouse))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let mut status = format!(
            "Controls: WASD or Arrow keys to move, Q to quit | Moves: {} | GPS: {}",
            state.moves_made,
            crate::core::gps_sum(&state.warehouse.grid),
        );
        if state.blocked {
            status.push_str(" | Blocked");
        } else if let Some(change_type) = &state.last_change {
            status.push_str(&format!(" | Last: {:?}", change_type));
        }

        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}
