//! Interactive command loop.
//!
//! The loop presents a numbered menu, reads whitespace separated answers
//! and keeps running until the user chooses to exit or the input ends.
//! No failure ends the loop: errors are printed and the menu is shown again.

use crate::algo::{dijkstra::DisplayDistance, Query};
use crate::datastr::graph::*;
use crate::error::GraphError;
use crate::generator;
use crate::graph_pair::{Comparison, GraphPair};
use crate::io::load_edge_list;
use std::{
    collections::VecDeque,
    io::{prelude::*, Result},
    path::Path,
    str::FromStr,
};

const MENU: &str = "Menu:
1. Load graph from file
2. Generate random graph
3. Display graph
4. Run Dijkstra
5. Exit
";

const NOT_INITIALIZED: &str = "The graph has not been initialized yet.";

/// Holds at most one pair of graphs.
/// Loading or generating builds the new pair completely before it replaces the old one,
/// so a failed attempt leaves the previous graphs usable.
#[derive(Debug, Default)]
pub struct Session {
    graphs: Option<GraphPair>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graphs(&self) -> Option<&GraphPair> {
        self.graphs.as_ref()
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> std::result::Result<&GraphPair, GraphError> {
        let graphs = load_edge_list(path)?;
        Ok(&*self.graphs.insert(graphs))
    }

    pub fn generate(&mut self, num_nodes: usize, density: u32) -> std::result::Result<&GraphPair, GraphError> {
        let graphs = generator::generate_random(num_nodes, density)?;
        Ok(&*self.graphs.insert(graphs))
    }

    /// Drop the current graphs, if any.
    pub fn clear(&mut self) {
        self.graphs = None;
    }
}

/// Whitespace separated tokens across lines, like reading with `>>` from a stream.
struct Tokens<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Tokens { input, pending: VecDeque::new() }
    }

    /// The next token or `None` at the end of the input.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

enum Answer<T> {
    Value(T),
    Invalid(String),
    EndOfInput,
}

struct Menu<R, W> {
    tokens: Tokens<R>,
    out: W,
    session: Session,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    fn prompt<T: FromStr>(&mut self, question: &str) -> Result<Answer<T>> {
        write!(self.out, "{}", question)?;
        self.out.flush()?;
        Ok(match self.tokens.next_token()? {
            None => Answer::EndOfInput,
            Some(token) => match token.parse() {
                Ok(value) => Answer::Value(value),
                Err(_) => Answer::Invalid(token),
            },
        })
    }

    /// Returns `false` once the loop should stop.
    fn step(&mut self) -> Result<bool> {
        write!(self.out, "{}", MENU)?;
        let choice = match self.prompt::<u32>("Choose an option: ")? {
            Answer::Value(choice) => choice,
            Answer::Invalid(token) => {
                writeln!(self.out, "Unknown option: {}", token)?;
                return Ok(true);
            }
            Answer::EndOfInput => return Ok(false),
        };

        match choice {
            1 => self.load(),
            2 => self.generate(),
            3 => self.display(),
            4 => self.run_dijkstra(),
            5 => {
                self.session.clear();
                Ok(false)
            }
            _ => {
                writeln!(self.out, "Unknown option: {}", choice)?;
                Ok(true)
            }
        }
    }

    fn load(&mut self) -> Result<bool> {
        let path = match self.prompt::<String>("Enter file name: ")? {
            Answer::Value(path) => path,
            Answer::Invalid(_) | Answer::EndOfInput => return Ok(false),
        };
        match self.session.load_file(&path) {
            Ok(graphs) => writeln!(self.out, "Loaded graph with {} vertices and {} edges.", graphs.num_nodes(), graphs.list().num_arcs())?,
            Err(GraphError::Io(e)) => writeln!(self.out, "Could not open file {}: {}", path, e)?,
            Err(e) => writeln!(self.out, "Could not read graph from {}: {}", path, e)?,
        }
        Ok(true)
    }

    fn generate(&mut self) -> Result<bool> {
        let num_nodes = match self.prompt::<usize>("Enter the number of vertices: ")? {
            Answer::Value(num_nodes) => num_nodes,
            Answer::Invalid(token) => return self.invalid_number(&token),
            Answer::EndOfInput => return Ok(false),
        };
        let density = match self.prompt::<u32>("Enter the graph density (in %): ")? {
            Answer::Value(density) => density,
            Answer::Invalid(token) => return self.invalid_number(&token),
            Answer::EndOfInput => return Ok(false),
        };
        match self.session.generate(num_nodes, density) {
            Ok(graphs) => writeln!(self.out, "Generated graph with {} vertices and {} edges.", graphs.num_nodes(), graphs.list().num_arcs())?,
            Err(e) => writeln!(self.out, "Could not generate graph: {}", e)?,
        }
        Ok(true)
    }

    fn display(&mut self) -> Result<bool> {
        match self.session.graphs() {
            Some(graphs) => graphs.display(&mut self.out)?,
            None => writeln!(self.out, "{}", NOT_INITIALIZED)?,
        }
        Ok(true)
    }

    fn run_dijkstra(&mut self) -> Result<bool> {
        if self.session.graphs().is_none() {
            writeln!(self.out, "{}", NOT_INITIALIZED)?;
            return Ok(true);
        }
        let from = match self.prompt::<NodeId>("Enter the source vertex: ")? {
            Answer::Value(from) => from,
            Answer::Invalid(token) => return self.invalid_number(&token),
            Answer::EndOfInput => return Ok(false),
        };
        let to = match self.prompt::<NodeId>("Enter the target vertex: ")? {
            Answer::Value(to) => to,
            Answer::Invalid(token) => return self.invalid_number(&token),
            Answer::EndOfInput => return Ok(false),
        };

        let comparison = match self.session.graphs() {
            Some(graphs) if graphs.contains_node(from) && graphs.contains_node(to) => graphs.run_and_compare(Query { from, to }),
            Some(graphs) => {
                writeln!(self.out, "Vertices must be between 0 and {}.", graphs.num_nodes() as i64 - 1)?;
                return Ok(true);
            }
            None => return Ok(true),
        };
        self.print_comparison(&comparison)?;
        Ok(true)
    }

    fn print_comparison(&mut self, comparison: &Comparison) -> Result<()> {
        let Comparison { from, to, list, matrix } = comparison;
        writeln!(self.out, "Running time (adjacency list): {:.3} ms", list.running_time_ms)?;
        writeln!(self.out, "Running time (adjacency matrix): {:.3} ms", matrix.running_time_ms)?;
        writeln!(self.out, "Shortest distance from {} to {} (adjacency list): {}", from, to, DisplayDistance(list.distance))?;
        writeln!(self.out, "Shortest distance from {} to {} (adjacency matrix): {}", from, to, DisplayDistance(matrix.distance))?;
        if !comparison.agrees() {
            writeln!(
                self.out,
                "The representations disagree: parallel edges with different weights, the matrix only keeps the last one."
            )?;
        }
        Ok(())
    }

    fn invalid_number(&mut self, token: &str) -> Result<bool> {
        writeln!(self.out, "Not a valid number: {}", token)?;
        Ok(true)
    }
}

/// Run the menu loop on `input` and `out` until the user exits or the input ends.
/// Only fails on errors of the underlying reader or writer.
pub fn run<R: BufRead, W: Write>(input: R, out: W) -> Result<()> {
    let mut menu = Menu {
        tokens: Tokens::new(input),
        out,
        session: Session::new(),
    };
    while menu.step()? {}
    menu.out.flush()
}
