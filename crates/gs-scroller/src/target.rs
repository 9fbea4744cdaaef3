//! The seam to the host UI framework.

use crate::pending::PendingResult;
use gs_core::ClientCommand;
use std::fmt;
use std::sync::Arc;

/// Stable identity of a target element, used for logging and routing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        TargetId(id.into())
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A UI element whose client side can execute [`ClientCommand`]s.
///
/// Implementations must hand commands to the client in the order `execute`
/// is called: a read issued right after a write has to observe that write.
/// An unreachable client is not an error. Writes are dropped and the
/// returned [`PendingResult`] is never answered.
pub trait ScriptTarget {
    fn target_id(&self) -> TargetId;

    /// Queue `command` for the client and return its eventual answer.
    fn execute(&self, command: ClientCommand) -> PendingResult;
}

impl<T: ScriptTarget + ?Sized> ScriptTarget for &T {
    fn target_id(&self) -> TargetId {
        (**self).target_id()
    }

    fn execute(&self, command: ClientCommand) -> PendingResult {
        (**self).execute(command)
    }
}

impl<T: ScriptTarget + ?Sized> ScriptTarget for Arc<T> {
    fn target_id(&self) -> TargetId {
        (**self).target_id()
    }

    fn execute(&self, command: ClientCommand) -> PendingResult {
        (**self).execute(command)
    }
}

impl<T: ScriptTarget + ?Sized> ScriptTarget for Box<T> {
    fn target_id(&self) -> TargetId {
        (**self).target_id()
    }

    fn execute(&self, command: ClientCommand) -> PendingResult {
        (**self).execute(command)
    }
}
