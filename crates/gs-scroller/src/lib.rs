//! Grid Scroller — sets and reads the pixel scroll position of a grid's
//! internal scrollable container.
//!
//! Writes are fire-and-forget commands. Reads are a round trip to the client:
//! the command is dispatched, the client answers later, and the answer is
//! decoded into a [`ScrollPosition`]. An unreachable client never answers,
//! so a read against it never completes and never fails.

pub mod pending;
pub mod scroller;
pub mod target;

pub use gs_core::{ClientCommand, ScrollAxis, ScrollError, ScrollPosition};
pub use pending::{PendingResult, Resolver};
pub use scroller::{GridScroller, read_scroll, scroll, scroll_left, scroll_to, scroll_top};
pub use target::{ScriptTarget, TargetId};
