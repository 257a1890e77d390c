//! This is the command line tool that plays the guessing game: type your
//! choices one at a time and the program tries to predict each one before
//! you make it. The scoring lives here, not in the library.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{Arg, ArgAction, Command};
use mindreader::session::Session;
use mindreader::Symbol;

use std::io::{BufRead, Write};

/// Tracks how well the predictions line up with what the user actually
/// typed. The prediction for a symbol is scored before the symbol is
/// recorded.
struct Scoreboard {
    inputs: usize,
    predictions: usize,
    correct: usize,
}

impl Scoreboard {
    fn new() -> Self {
        Self {
            inputs: 0,
            predictions: 0,
            correct: 0,
        }
    }

    fn score(&mut self, predicted: Option<Symbol>, actual: Symbol) {
        self.inputs += 1;
        if let Some(sym) = predicted {
            self.predictions += 1;
            if sym == actual {
                self.correct += 1;
            }
        }
    }

    fn ratio(&self) -> f64 {
        if self.predictions == 0 {
            return 0.0;
        }
        self.correct as f64 / self.predictions as f64
    }
}

fn symbol_name(sym: Symbol) -> &'static str {
    match sym {
        Symbol::Black => "black",
        Symbol::White => "white",
    }
}

/// Parse one token of user input. Returns None for input that is not a
/// symbol.
fn parse_symbol(token: &str) -> Option<Symbol> {
    match token.trim().to_lowercase().as_str() {
        "b" | "black" => Some(Symbol::Black),
        "w" | "white" => Some(Symbol::White),
        _ => None,
    }
}

/// Feed one symbol to the session: guess first, record second, report.
fn play_one(session: &mut Session, board: &mut Scoreboard, sym: Symbol) {
    let guess = session.predict_next();
    board.score(guess, sym);

    match sym {
        Symbol::Black => session.record_black(),
        Symbol::White => session.record_white(),
    }

    match guess {
        Some(g) if g == sym => log::info!("Guessed {} - correct", symbol_name(g)),
        Some(g) => log::info!("Guessed {} - wrong", symbol_name(g)),
        None => log::info!("No guess yet"),
    }
}

fn report(board: &Scoreboard) {
    println!(
        "{} inputs, {} guesses, {} correct ({:.2})",
        board.inputs,
        board.predictions,
        board.correct,
        board.ratio()
    );
}

/// Replay a pre-recorded string of 'b' and 'w' characters.
fn replay(sequence: &str) {
    let mut session = Session::new();
    let mut board = Scoreboard::new();

    for ch in sequence.chars() {
        if let Some(sym) = parse_symbol(&ch.to_string()) {
            play_one(&mut session, &mut board, sym);
        } else {
            log::info!("Skipping '{}'", ch);
        }
    }
    report(&board);
}

/// Read choices from stdin until EOF or 'q'.
fn interactive() {
    let mut session = Session::new();
    let mut board = Scoreboard::new();
    let stdin = std::io::stdin();

    println!("Type b or w and press enter. I will try to read your mind.");
    print!("> ");
    std::io::stdout().flush().expect("Can't flush stdout");

    for line in stdin.lock().lines() {
        let line = line.expect("Can't read from stdin");
        let token = line.trim();

        if token == "q" || token == "quit" {
            break;
        }
        if let Some(sym) = parse_symbol(token) {
            play_one(&mut session, &mut board, sym);
            report(&board);
        } else if !token.is_empty() {
            println!("Unknown input '{}'. Use b, w or q.", token);
        }
        print!("> ");
        std::io::stdout().flush().expect("Can't flush stdout");
    }

    println!("Final score:");
    report(&board);
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every guess")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("SEQUENCE")
                .help("Replay a string of choices, e.g. 'bwbwbw'")
                .required(false)
                .index(1),
        )
        .get_matches();

    let mut builder = env_logger::builder();
    builder.format_timestamp(None);
    if matches.get_flag("verbose") {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();

    if let Some(sequence) = matches.get_one::<String>("SEQUENCE") {
        replay(sequence);
    } else {
        interactive();
    }
}
