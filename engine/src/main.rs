//! Interactive menu comparing Dijkstra on an adjacency list and an adjacency matrix.

use dijkstra_compare::menu;
use std::{error::Error, io};

fn main() -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(stdin.lock(), stdout.lock())?;
    Ok(())
}
