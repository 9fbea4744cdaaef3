//! Demo for the grid scroller: a simulated grid client and a small view that
//! drives it with the same buttons a user would click.

pub mod client;
pub mod config;
pub mod view;

pub use client::SimulatedGrid;
pub use config::DemoConfig;
pub use view::{Action, ButtonId, DemoError, DemoView};
