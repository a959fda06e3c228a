#![deny(clippy::all)]

use clap::{App, Arg, ArgMatches};

use thiserror::Error;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub mod input;
pub mod parity;
pub mod report;

use input::{InputError, Prompt};
use puzzle::{Layout, Puzzle, PuzzleError, SearchOptions, Strategy};

type Error = anyhow::Error;

/// Which strategies to run on each instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(Strategy),
    All,
}

impl Selection {
    fn parse(text: &str) -> Result<Self, PuzzleError> {
        if text.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            text.parse().map(Selection::One)
        }
    }

    pub fn strategies(self) -> Vec<Strategy> {
        match self {
            Selection::One(strategy) => vec![strategy],
            Selection::All => Strategy::all().collect(),
        }
    }
}

/// Settings collected from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub start: Option<Layout>,
    pub goal: Option<Layout>,
    pub selection: Option<Selection>,
    pub options: SearchOptions,

    /// Statistics file to append reports to, if any.
    pub output: Option<PathBuf>,
}

impl Config {
    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let options = SearchOptions {
            frontier: matches.value_of("frontier").unwrap_or("heap").parse()?,
            closed: matches.value_of("closed").unwrap_or("hashed").parse()?,
            progress: matches
                .value_of("progress")
                .map(|p| p.parse::<usize>())
                .transpose()?,
        };

        let output = if matches.is_present("no-save") {
            None
        } else {
            Some(PathBuf::from(
                matches.value_of("output").unwrap_or(report::STATISTICS_FILE),
            ))
        };

        Ok(Config {
            start: matches.value_of("start").map(input::parse_board).transpose()?,
            goal: matches.value_of("goal").map(input::parse_board).transpose()?,
            selection: matches.value_of("strategy").map(Selection::parse).transpose()?,
            options,
            output,
        })
    }

}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("The parities do not match ({0} start inversions, {1} goal inversions); the goal can not be reached")]
    ParityMismatch(usize, usize),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error("Unable to write output")]
    Io(#[from] io::Error),
}

/// Check, solve and report a single instance with every selected strategy.
pub fn run_instance<W: Write>(
    start: Layout,
    goal: Layout,
    selection: Selection,
    config: &Config,
    out: &mut W,
) -> Result<(), AppError> {
    parity::check(&start, &goal)?;

    if start == goal {
        writeln!(out, "The start state is already the goal.")?;
        return Ok(());
    }

    let puzzle = Puzzle::new(start, goal);
    for strategy in selection.strategies() {
        writeln!(out, "{}", strategy.name())?;
        let solution = puzzle.solve(strategy, &config.options)?;
        let text = report::render(strategy, &solution);
        write!(out, "{}", text)?;

        if let Some(path) = &config.output {
            report::append_report(path, &text)?;
        }
    }
    Ok(())
}

/// Ask for whatever the command line left out, solve, and repeat
/// for as long as the user wants to play.
pub fn interactive<R: BufRead, W: Write>(
    config: &Config,
    prompt: &mut Prompt<R, W>,
) -> Result<(), AppError> {
    writeln!(prompt.output(), "Welcome to the searching 8-puzzle!")?;
    loop {
        let start = match config.start {
            Some(start) => start,
            None => prompt.board("Start")?,
        };
        let goal = match config.goal {
            Some(goal) => goal,
            None => prompt.board("Goal")?,
        };
        let selection = match config.selection {
            Some(selection) => selection,
            None => Selection::One(prompt.strategy()?),
        };

        match run_instance(start, goal, selection, config, prompt.output()) {
            Err(AppError::ParityMismatch(a, b)) => {
                writeln!(prompt.output(), "{}", AppError::ParityMismatch(a, b))?
            }
            result => result?,
        }

        if !prompt.play_again()? {
            return Ok(());
        }
    }
}

fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("Eight Puzzle")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Solve 3x3 sliding-tile puzzles with uninformed and heuristic search")
        .arg(
            Arg::with_name("start")
                .short("s")
                .long("start")
                .value_name("BOARD")
                .help("Start board, e.g. 123405786")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("goal")
                .short("g")
                .long("goal")
                .value_name("BOARD")
                .help("Goal board, e.g. 123456780")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("strategy")
                .short("a")
                .long("strategy")
                .value_name("NAME")
                .help("bfs, greedy, astar-misplaced, astar-manhattan, a-d or all")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("frontier")
                .long("frontier")
                .possible_values(&["linear", "heap"])
                .default_value("heap")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("closed")
                .long("closed")
                .possible_values(&["linear", "hashed"])
                .default_value("hashed")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("progress")
                .long("progress")
                .value_name("N")
                .help("Print search progress to stderr every N nodes")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("File to append statistics to")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-save")
                .long("no-save")
                .help("Do not append statistics to a file"),
        )
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();
    let config = Config::from_matches(&matches)?;

    if let (Some(start), Some(goal)) = (config.start, config.goal) {
        let selection = config
            .selection
            .unwrap_or(Selection::One(Strategy::AStarManhattan));
        run_instance(start, goal, selection, &config, &mut io::stdout())?;
    } else {
        let stdin = io::stdin();
        let mut prompt = Prompt::new(stdin.lock(), io::stdout());
        interactive(&config, &mut prompt)?;
    }
    Ok(())
}
