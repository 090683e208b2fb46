use clap::Parser;
use std::io::{self, Write};
use tripeg_solver::coords::Cell;
use tripeg_solver::engine::Board;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of rows in the triangle
    #[clap(default_value_t = 4)]
    rows: usize,
}

fn main() {
    let args = Args::parse();

    // Undo works by keeping a snapshot of every position reached.
    let mut history = vec![Board::new(args.rows)];
    println!("Triangular peg solitaire: jump pegs until only one remains.");

    loop {
        let board = history
            .last()
            .expect("history always holds the current board")
            .clone();
        println!("---------------------");
        println!("Pegs remaining: {}", board.peg_count());
        println!("{}", board);

        if board.is_solved() {
            println!("Solved in {} moves!", board.moves().len());
            break;
        }
        if !board.moves().is_empty() && !board.has_jump() {
            println!("No jumps left with {} pegs on the board.", board.peg_count());
            break;
        }

        if board.moves().is_empty() {
            print!("Pick a peg to remove (e.g. '5' or '2,1'), or 'q' to quit: ");
        } else {
            print!("Enter a jump as 'src dest', 'u' to undo, 'q' to quit: ");
        }
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }
        let trimmed = input.trim();

        if trimmed == "q" {
            println!("Thanks for playing!");
            break;
        }
        if trimmed == "u" {
            if history.len() > 1 {
                history.pop();
                println!("Move undone.");
            } else {
                println!("Nothing to undo.");
            }
            continue;
        }

        let mut next = board.clone();
        let outcome = if next.moves().is_empty() {
            trimmed.parse::<Cell>().and_then(|cell| next.remove(cell))
        } else {
            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            if parts.len() != 2 {
                println!("Invalid input format. Use 'src dest', 'u', or 'q'.");
                continue;
            }
            parts[0].parse::<Cell>().and_then(|src| {
                parts[1]
                    .parse::<Cell>()
                    .and_then(|dest| next.jump(src, &[dest]))
            })
        };

        match outcome {
            Ok(()) => history.push(next),
            Err(err) => println!("Invalid move: {}", err),
        }
    }
}
