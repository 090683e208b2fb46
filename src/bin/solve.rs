use clap::Parser;
use tripeg_solver::coords::Cell;
use tripeg_solver::engine::Board;
use tripeg_solver::solver::solve;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Skip symmetric starting locations for the opening removal
    #[clap(short = 'i', long)]
    ignore_symmetry: bool,

    /// Remove this cell before searching (an index like "5" or a coordinate like "2,1")
    #[clap(short, long)]
    start: Option<Cell>,

    /// Number of rows in the triangle
    #[clap(default_value_t = 4)]
    rows: usize,
}

fn main() {
    let args = Args::parse();

    let mut board = Board::new(args.rows);
    if let Some(start) = args.start {
        if let Err(err) = board.remove(start) {
            eprintln!("Invalid starting cell {}: {}", start, err);
            std::process::exit(2);
        }
    }

    println!("Starting board:\n{}\n", board);

    let solutions = solve(&board, args.ignore_symmetry);
    if solutions.is_empty() {
        println!("No solutions");
    } else {
        for solution in &solutions {
            println!("{}", solution);
        }
    }
}
