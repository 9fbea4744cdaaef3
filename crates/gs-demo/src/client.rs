//! A simulated grid client standing in for the browser.
//!
//! Commands travel over an unbounded channel to a tokio task that owns the
//! client-side scroll state, so they are applied strictly in dispatch order.
//! Offsets are clamped to the scrollable extent the way a real scroll
//! container clamps `scrollLeft` / `scrollTop`.

use crate::config::DemoConfig;
use gs_core::{ClientCommand, ScriptConfig, ScrollAxis, ScrollPosition};
use gs_scroller::pending::{self, Resolver};
use gs_scroller::{PendingResult, ScriptTarget, TargetId};
use serde_json::{Value, json};
use tokio::sync::{mpsc, oneshot};

enum Message {
    Command {
        command: ClientCommand,
        resolver: Resolver,
    },
    Snapshot(oneshot::Sender<ScrollPosition>),
    AnswerNextRead(Value),
    Disconnect,
}

/// Server-side handle to one simulated grid.
#[derive(Debug)]
pub struct SimulatedGrid {
    id: TargetId,
    tx: mpsc::UnboundedSender<Message>,
}

impl SimulatedGrid {
    /// Start the client task on the ambient tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn spawn(id: &str, config: &DemoConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = TargetId::new(id);
        let client = Client {
            id: id.clone(),
            position: ScrollPosition::ORIGIN,
            max_scroll: config.max_scroll(),
            script: ScriptConfig::default(),
            next_answer: None,
        };
        tokio::spawn(client.run(rx));
        Self { id, tx }
    }

    /// Drop the connection. Commands dispatched before this call are still
    /// applied in order; commands dispatched afterwards are lost: writes have
    /// no effect, reads are never answered.
    pub fn disconnect(&self) {
        let _ = self.tx.send(Message::Disconnect);
    }

    /// Answer the next read dispatched after this call with `value` instead
    /// of the current position, like a client whose grid markup changed.
    pub fn answer_next_read_with(&self, value: Value) {
        let _ = self.tx.send(Message::AnswerNextRead(value));
    }

    /// Client-side position after every command dispatched so far.
    /// `None` once disconnected.
    pub async fn state(&self) -> Option<ScrollPosition> {
        let (tx, rx) = oneshot::channel();
        self.tx.send(Message::Snapshot(tx)).ok()?;
        rx.await.ok()
    }
}

impl ScriptTarget for SimulatedGrid {
    fn target_id(&self) -> TargetId {
        self.id.clone()
    }

    fn execute(&self, command: ClientCommand) -> PendingResult {
        let (resolver, pending) = pending::channel();
        if self
            .tx
            .send(Message::Command { command, resolver })
            .is_err()
        {
            // The resolver went down with the unsent message.
            log::debug!("{}: client gone, dropped {command:?}", self.id);
        }
        pending
    }
}

struct Client {
    id: TargetId,
    position: ScrollPosition,
    max_scroll: (f64, f64),
    script: ScriptConfig,
    next_answer: Option<Value>,
}

impl Client {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Message>) {
        while let Some(message) = rx.recv().await {
            match message {
                Message::Command { command, resolver } => self.apply(command, resolver),
                Message::Snapshot(tx) => {
                    let _ = tx.send(self.position);
                }
                Message::AnswerNextRead(value) => self.next_answer = Some(value),
                Message::Disconnect => {
                    log::debug!("{}: client disconnected", self.id);
                    break;
                }
            }
        }
    }

    fn apply(&mut self, command: ClientCommand, resolver: Resolver) {
        let invocation = command.invocation(&self.script);
        log::trace!("{}: {} {:?}", self.id, invocation.script, invocation.args);

        let (max_left, max_top) = self.max_scroll;
        match command {
            ClientCommand::SetAxis {
                axis: ScrollAxis::Left,
                value,
            } => {
                self.position = ScrollPosition::new(clamp(value, max_left), self.position.top());
            }
            ClientCommand::SetAxis {
                axis: ScrollAxis::Top,
                value,
            } => {
                self.position = ScrollPosition::new(self.position.left(), clamp(value, max_top));
            }
            ClientCommand::SetBoth { left, top } => {
                self.position = ScrollPosition::new(clamp(left, max_left), clamp(top, max_top));
            }
            ClientCommand::ReadPosition => {
                let answer = self
                    .next_answer
                    .take()
                    .unwrap_or_else(|| json!([self.position.left(), self.position.top()]));
                resolver.resolve(answer);
            }
        }
    }
}

/// Browsers treat `NaN` as `0` and clamp everything else into range.
fn clamp(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gs_scroller::GridScroller;
    use pretty_assertions::assert_eq;

    #[test]
    fn clamp_handles_out_of_range() {
        assert_eq!(clamp(-5.0, 100.0), 0.0);
        assert_eq!(clamp(250.0, 100.0), 100.0);
        assert_eq!(clamp(f64::INFINITY, 100.0), 100.0);
        assert_eq!(clamp(f64::NAN, 100.0), 0.0);
        assert_eq!(clamp(42.5, 100.0), 42.5);
    }

    #[tokio::test]
    async fn applies_commands_in_order() {
        let grid = SimulatedGrid::spawn("grid", &DemoConfig::default());
        let scroller = GridScroller::new(&grid);

        scroller.scroll(Some(50.0), Some(100.0));
        scroller.scroll_left(Some(10.0));
        assert_eq!(grid.state().await, Some(ScrollPosition::new(10.0, 100.0)));
        assert_eq!(
            scroller.read_position().await,
            Ok(ScrollPosition::new(10.0, 100.0))
        );
    }

    #[tokio::test]
    async fn offsets_beyond_content_are_clamped() {
        let grid = SimulatedGrid::spawn("grid", &DemoConfig::default());
        let scroller = GridScroller::new(&grid);

        scroller.scroll(Some(-20.0), Some(1.0e9));
        assert_eq!(grid.state().await, Some(ScrollPosition::new(0.0, 35672.0)));
    }

    #[tokio::test]
    async fn overridden_answer_applies_to_one_read() {
        let grid = SimulatedGrid::spawn("grid", &DemoConfig::default());
        let scroller = GridScroller::new(&grid);

        scroller.scroll(Some(3.0), Some(4.0));
        grid.answer_next_read_with(json!("broken"));
        assert!(matches!(
            scroller.read_position().await,
            Err(gs_core::ScrollError::InvalidResponse(_))
        ));
        assert_eq!(
            scroller.read_position().await,
            Ok(ScrollPosition::new(3.0, 4.0))
        );
    }

    #[tokio::test]
    async fn disconnected_client_drops_everything() {
        let grid = SimulatedGrid::spawn("grid", &DemoConfig::default());
        let scroller = GridScroller::new(&grid);

        scroller.scroll(Some(5.0), Some(5.0));
        grid.disconnect();
        scroller.scroll(Some(9.0), Some(9.0));

        let result = scroller
            .read_scroll(|_| panic!("continuation must not run"))
            .await
            .unwrap();
        assert_eq!(result, Ok(()));
        assert_eq!(grid.state().await, None);
    }
}
