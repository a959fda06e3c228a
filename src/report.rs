//! Text reports of a finished search, and their persistence.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use itertools::Itertools;
use puzzle::{Board, Solution, Statistics, Strategy};

/// Boards drawn side by side on each line of the move list.
const BOARDS_PER_ROW: usize = 6;

const HEADER: &str = "  Nodes Expanded  |  Size of Closed List   |  Max Frontier List Size  |  Solution Length  |  Tree Depth  ";
const DIVIDER: &str = "------------------+------------------------+--------------------------+-------------------+---------------";
const RULE: &str = "----------------------------------------------------------------------------------------------------------";
const END: &str = "~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~";

/// Default file statistics are appended to.
pub const STATISTICS_FILE: &str = "Search Performance Statistics.txt";

fn title(name: &str) -> String {
    let bar = "=".repeat(name.len());
    format!("+{}+\n|{}|\n+{}+\n", bar, name, bar)
}

/// The counter table for a single run.
pub fn table(statistics: &Statistics) -> String {
    format!(
        "{}\n{}\n{:>17} | {:>22} | {:>24} | {:>17} | {:>14} \n{}\n",
        HEADER,
        DIVIDER,
        statistics.nodes_expanded,
        statistics.closed_list_size,
        statistics.max_frontier_size,
        statistics.solution_length,
        statistics.tree_depth,
        RULE
    )
}

/// Draw the solution boards, start to goal, left to right.
pub fn moves(path: &[Board<'_>]) -> String {
    path.chunks(BOARDS_PER_ROW)
        .map(|row| {
            let drawings: Vec<Vec<String>> = row
                .iter()
                .map(|board| board.to_string().lines().map(str::to_string).collect())
                .collect();
            let height = drawings.iter().map(Vec::len).max().unwrap_or(0);
            (0..height)
                .map(|line| {
                    drawings
                        .iter()
                        .map(|d| format!("    {}", d[line]))
                        .join("")
                })
                .join("\n")
        })
        .join("\n\n")
}

/// Render a complete report for one strategy's solution.
pub fn render(strategy: Strategy, solution: &Solution<Board<'_>>) -> String {
    format!(
        "{}\n{}\nSolution Move List: (read START to GOAL, left to right)\n{}\n\n{}\n\n",
        title(strategy.name()),
        table(&solution.statistics),
        moves(&solution.path),
        END
    )
}

/// Append a report to a statistics file, creating it if necessary.
pub fn append_report(path: &Path, text: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())
}
