//! The demo view: a number field, four buttons, and a result span.
//!
//! | Button | Effect |
//! |---|---|
//! | `top`  | scroll vertically to the field value |
//! | `left` | scroll horizontally to the field value |
//! | `both` | scroll both axes to the field value |
//! | `read` | read the position back into the result span |
//!
//! An empty field counts as `0`.

use crate::client::SimulatedGrid;
use gs_core::{ScrollError, ScrollPosition};
use gs_scroller::GridScroller;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};

#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Scroll(#[from] ScrollError),

    #[error("read task failed: {0}")]
    Task(#[from] JoinError),

    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

/// Element ids of the view's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    Top,
    Left,
    Both,
    Read,
}

impl FromStr for ButtonId {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(ButtonId::Top),
            "left" => Ok(ButtonId::Left),
            "both" => Ok(ButtonId::Both),
            "read" => Ok(ButtonId::Read),
            other => Err(DemoError::UnknownAction(other.to_string())),
        }
    }
}

/// One user interaction: typing into the field or clicking a button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Input(Option<f64>),
    Click(ButtonId),
}

impl FromStr for Action {
    type Err = DemoError;

    /// `input=<n>`, `input=` (clears the field), or a button id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(value) = s.strip_prefix("input=") else {
            return s.parse().map(Action::Click);
        };
        if value.trim().is_empty() {
            return Ok(Action::Input(None));
        }
        value
            .trim()
            .parse()
            .map(|n| Action::Input(Some(n)))
            .map_err(|_| DemoError::InvalidNumber(value.to_string()))
    }
}

pub struct DemoView {
    scroller: GridScroller<Arc<SimulatedGrid>>,
    input: Option<f64>,
    result: Arc<Mutex<String>>,
    reads: Vec<JoinHandle<Result<(), ScrollError>>>,
}

impl DemoView {
    pub fn new(grid: Arc<SimulatedGrid>) -> Self {
        Self {
            scroller: GridScroller::new(grid),
            input: None,
            result: Arc::new(Mutex::new(ScrollPosition::ORIGIN.to_string())),
            reads: Vec::new(),
        }
    }

    pub fn grid(&self) -> &SimulatedGrid {
        self.scroller.target()
    }

    pub fn set_input(&mut self, value: Option<f64>) {
        self.input = value;
    }

    pub fn click(&mut self, button: ButtonId) {
        let value = self.input;
        match button {
            ButtonId::Top => self.scroller.scroll_top(value),
            ButtonId::Left => self.scroller.scroll_left(value),
            ButtonId::Both => self.scroller.scroll(value, value),
            ButtonId::Read => {
                let result = Arc::clone(&self.result);
                let handle = self.scroller.read_scroll(move |position| {
                    *result.lock().unwrap_or_else(PoisonError::into_inner) = position.to_string();
                });
                self.reads.push(handle);
            }
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Input(value) => self.set_input(value),
            Action::Click(button) => self.click(button),
        }
    }

    /// Text of the result span, `left,top` in pixels.
    pub fn result_text(&self) -> String {
        self.result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Wait for every read clicked so far to come back.
    ///
    /// Every outstanding read is awaited even when an earlier one fails; the
    /// first failure is returned. Never returns while a read is still
    /// unanswered by a connected client.
    pub async fn settle(&mut self) -> Result<(), DemoError> {
        let mut first_err = None;
        for handle in self.reads.drain(..) {
            let outcome = match handle.await {
                Ok(result) => result.map_err(DemoError::from),
                Err(err) => Err(DemoError::from(err)),
            };
            if let Err(err) = outcome {
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }

    /// Number of reads clicked but not yet settled.
    pub fn pending_reads(&self) -> usize {
        self.reads.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_actions() {
        assert_eq!("top".parse::<Action>().unwrap(), Action::Click(ButtonId::Top));
        assert_eq!("read".parse::<Action>().unwrap(), Action::Click(ButtonId::Read));
        assert_eq!(
            "input=12.5".parse::<Action>().unwrap(),
            Action::Input(Some(12.5))
        );
        assert_eq!("input=".parse::<Action>().unwrap(), Action::Input(None));
    }

    #[test]
    fn rejects_bad_actions() {
        assert!(matches!(
            "scroll".parse::<Action>(),
            Err(DemoError::UnknownAction(a)) if a == "scroll"
        ));
        assert!(matches!(
            "input=ten".parse::<Action>(),
            Err(DemoError::InvalidNumber(n)) if n == "ten"
        ));
    }
}
