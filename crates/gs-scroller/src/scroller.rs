//! The grid scroller: a target-bound wrapper over the three client commands.

use crate::pending::PendingResult;
use crate::target::{ScriptTarget, TargetId};
use gs_core::{ClientCommand, ScrollAxis, ScrollError, ScrollPosition, decode_position};
use std::future::Future;
use tokio::task::JoinHandle;

/// Sets and reads the pixel scroll position of one grid.
///
/// The grid is bound at construction and never changes. Writing an absent
/// offset (`None`) scrolls that axis back to `0`.
#[derive(Debug, Clone)]
pub struct GridScroller<T> {
    target: T,
}

impl<T: ScriptTarget> GridScroller<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    /// Bind to a grid that may be absent.
    ///
    /// # Errors
    /// [`ScrollError::MissingTarget`] when `target` is `None`.
    pub fn try_new(target: Option<T>) -> Result<Self, ScrollError> {
        target.map(Self::new).ok_or(ScrollError::MissingTarget)
    }

    /// The wrapped grid.
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    /// Set both offsets in one step.
    pub fn scroll(&self, left: Option<f64>, top: Option<f64>) {
        self.dispatch(ClientCommand::scroll(left, top));
    }

    /// Set both offsets from a position. `None` resets to the top-left corner.
    pub fn scroll_to(&self, position: Option<ScrollPosition>) {
        self.dispatch(ClientCommand::scroll_to(position));
    }

    /// Set only the horizontal offset.
    pub fn scroll_left(&self, value: Option<f64>) {
        self.dispatch(ClientCommand::scroll_axis(ScrollAxis::Left, value));
    }

    /// Set only the vertical offset.
    pub fn scroll_top(&self, value: Option<f64>) {
        self.dispatch(ClientCommand::scroll_axis(ScrollAxis::Top, value));
    }

    fn dispatch(&self, command: ClientCommand) {
        log::debug!("{}: {command:?}", self.target.target_id());
        // Writes are fire-and-forget; nobody waits for the client's answer.
        drop(self.target.execute(command));
    }

    /// Read the current position and hand it to `on_read`.
    ///
    /// This is a round trip to the client. `on_read` runs at most once, on a
    /// tokio task, and only for a well-formed answer. If the client cannot be
    /// reached it is never called and no error is raised.
    ///
    /// The returned task finishes with [`ScrollError::InvalidResponse`] when
    /// the client answers with something other than `[left, top]`. The error
    /// is also logged, since callers often detach the task.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime.
    pub fn read_scroll<F>(&self, on_read: F) -> JoinHandle<Result<(), ScrollError>>
    where
        F: FnOnce(ScrollPosition) + Send + 'static,
    {
        let id = self.target.target_id();
        let pending = self.request_position(&id);
        tokio::spawn(async move {
            match settle(pending, &id).await {
                Some(Ok(position)) => {
                    on_read(position);
                    Ok(())
                }
                Some(Err(err)) => {
                    log::error!("{id}: {err}");
                    Err(err)
                }
                None => Ok(()),
            }
        })
    }

    /// Read the current position.
    ///
    /// The request is dispatched immediately, so it observes every write
    /// issued before this call. If the client cannot be reached the future
    /// never completes; wrap it in `tokio::time::timeout` when that matters.
    pub fn read_position(
        &self,
    ) -> impl Future<Output = Result<ScrollPosition, ScrollError>> + Send + use<T> {
        let id = self.target.target_id();
        let pending = self.request_position(&id);
        async move {
            match settle(pending, &id).await {
                Some(result) => result,
                None => std::future::pending().await,
            }
        }
    }

    fn request_position(&self, id: &TargetId) -> PendingResult {
        log::debug!("{id}: {:?}", ClientCommand::ReadPosition);
        self.target.execute(ClientCommand::ReadPosition)
    }
}

/// Await a read answer and decode it. `None` when the client never answers.
async fn settle(
    pending: PendingResult,
    id: &TargetId,
) -> Option<Result<ScrollPosition, ScrollError>> {
    let Some(value) = pending.settled().await else {
        log::warn!("{id}: client unreachable, scroll position not read");
        return None;
    };
    Some(decode_position(&value).map_err(ScrollError::from))
}

// ─── Free-function forms ──────────────────────────────────────────────────

/// Set both offsets of `target`. See [`GridScroller::scroll`].
pub fn scroll<T: ScriptTarget + ?Sized>(target: &T, left: Option<f64>, top: Option<f64>) {
    GridScroller::new(target).scroll(left, top);
}

/// Set both offsets of `target` from a position. See [`GridScroller::scroll_to`].
pub fn scroll_to<T: ScriptTarget + ?Sized>(target: &T, position: Option<ScrollPosition>) {
    GridScroller::new(target).scroll_to(position);
}

/// Set the horizontal offset of `target`.
pub fn scroll_left<T: ScriptTarget + ?Sized>(target: &T, value: Option<f64>) {
    GridScroller::new(target).scroll_left(value);
}

/// Set the vertical offset of `target`.
pub fn scroll_top<T: ScriptTarget + ?Sized>(target: &T, value: Option<f64>) {
    GridScroller::new(target).scroll_top(value);
}

/// Read the position of `target`. See [`GridScroller::read_scroll`].
pub fn read_scroll<T, F>(target: &T, on_read: F) -> JoinHandle<Result<(), ScrollError>>
where
    T: ScriptTarget + ?Sized,
    F: FnOnce(ScrollPosition) + Send + 'static,
{
    GridScroller::new(target).read_scroll(on_read)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pending;
    use pretty_assertions::assert_eq;

    #[derive(Debug)]
    struct Detached;

    impl ScriptTarget for Detached {
        fn target_id(&self) -> TargetId {
            TargetId::new("detached")
        }

        fn execute(&self, _command: ClientCommand) -> PendingResult {
            PendingResult::unreachable()
        }
    }

    #[test]
    fn try_new_rejects_missing_target() {
        let err = GridScroller::<Detached>::try_new(None).unwrap_err();
        assert_eq!(err, ScrollError::MissingTarget);
        assert_eq!(err.to_string(), "a grid is required");
    }

    #[test]
    fn try_new_binds_present_target() {
        let scroller = GridScroller::try_new(Some(Detached)).unwrap();
        assert_eq!(scroller.target().target_id(), TargetId::new("detached"));
    }

    #[test]
    fn writes_to_unreachable_client_are_silent() {
        let scroller = GridScroller::new(Detached);
        scroller.scroll(Some(1.0), Some(2.0));
        scroller.scroll_left(None);
        scroller.scroll_top(Some(3.0));
        scroller.scroll_to(None);
    }

    #[tokio::test]
    async fn settle_decodes_answer() {
        let (resolver, pending) = pending::channel();
        resolver.resolve(serde_json::json!([4, 5]));
        let id = TargetId::new("grid");
        assert_eq!(
            settle(pending, &id).await,
            Some(Ok(ScrollPosition::new(4.0, 5.0)))
        );
    }
}
