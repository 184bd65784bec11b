use clap::Parser;
use colored::Colorize;

use trisolitaire::{exhaustive_search, Coord, GameState, Move};

/// Exhaustively play every legal move sequence of triangular peg solitaire
/// and report the totals.
#[derive(Parser)]
#[command(name = "trisolitaire")]
#[command(about = "Exhaustive search over triangular peg solitaire")]
#[command(version)]
struct Cli {
    /// Number of rows on the triangular board
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..))]
    rows: u8,

    /// Initially empty hole, as "row,hole"
    #[arg(long, default_value = "3,2", value_parser = parse_coord)]
    empty: Coord,

    /// Replay the first recorded solution step by step
    #[arg(long)]
    replay: bool,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, hole) = s
        .split_once(',')
        .ok_or_else(|| String::from("expected \"row,hole\""))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("bad row index: {e}"))?;
    let hole = hole
        .trim()
        .parse()
        .map_err(|e| format!("bad hole index: {e}"))?;

    Coord::new(row, hole).map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start = GameState::new_board(cli.rows, cli.empty);
    let report = exhaustive_search(&start);

    println!("Games played:    {}", report.games_played);
    println!("Solutions found: {}", report.solutions.len());
    println!("Time elapsed:    {}ms", report.elapsed.as_millis());

    if cli.replay {
        match report.solutions.first() {
            Some(solution) => replay_solution(&start, solution),
            None => println!("\nNo solution to replay."),
        }
    }
}

/// Print each position of the solution with the upcoming jump highlighted,
/// ending with the final one-peg board.
fn replay_solution(start: &GameState, solution: &[Move]) {
    let mut state = start.clone();
    for &mv in solution {
        println!("\njump {mv}");
        print!("{}", render_with_move(&state, mv));
        state = state
            .apply_move(mv)
            .expect("recorded solutions replay cleanly");
    }
    println!("\n{state}");
}

/// Board rendering with the jump's three holes marked: source on blue,
/// jumped peg on red, landing hole on green.
fn render_with_move(state: &GameState, mv: Move) -> String {
    let mut out = format!("Game with {} pegs:\n", state.pegs_remaining());
    for row in 1..=state.row_count() {
        for _ in 0..(state.row_count() - row) {
            out.push(' ');
        }
        for hole in 1..=row {
            let coord = Coord::new(row, hole).expect("holes 1..=row are valid");
            let cell = if state.is_occupied(coord) { " *" } else { " O" };

            if coord == mv.from {
                out.push_str(&cell.on_blue().to_string());
            } else if coord == mv.jumped {
                out.push_str(&cell.on_red().to_string());
            } else if coord == mv.to {
                out.push_str(&cell.on_green().to_string());
            } else {
                out.push_str(cell);
            }
        }
        out.push('\n');
    }
    out
}
