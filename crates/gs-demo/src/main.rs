//! `gs-demo` — clicks through the demo view from the command line.
//!
//! ```text
//! gs-demo input=50 left input=100 top read
//! ```
//!
//! Prints the result span once every read has come back.

use gs_demo::{Action, DemoConfig, DemoView, SimulatedGrid};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    env_logger::init();

    let actions = match std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<Action>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(actions) => actions,
        Err(e) => {
            eprintln!("gs-demo error: {e}");
            eprintln!("  valid actions: input=<n>, input=, top, left, both, read");
            std::process::exit(1);
        }
    };

    let grid = Arc::new(SimulatedGrid::spawn("grid", &DemoConfig::default()));
    let mut view = DemoView::new(grid);
    for action in actions {
        log::debug!("{action:?}");
        view.apply(action);
    }

    if let Err(e) = view.settle().await {
        eprintln!("gs-demo error: {e}");
        std::process::exit(1);
    }
    println!("Left,Top (in pixels): {}", view.result_text());
}
