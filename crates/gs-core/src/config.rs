//! Script rendering configuration.

/// Configuration for rendering [`ClientCommand`](crate::ClientCommand)s to
/// client-side script.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptConfig {
    /// Expression (evaluated with `this` bound to the grid element) that
    /// yields the internal scrollable container. Default: **`this.$.table`**.
    pub container: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            container: "this.$.table".to_string(),
        }
    }
}
