//! The fixed vocabulary of commands a grid's client side understands.
//!
//! Every command targets the grid's internal scrollable container. Writes are
//! full overwrites of the named properties: an absent offset means `0`, never
//! "leave unchanged".

use crate::config::ScriptConfig;
use crate::position::ScrollPosition;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// One scroll axis of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollAxis {
    /// Horizontal / x.
    Left,
    /// Vertical / y.
    Top,
}

impl ScrollAxis {
    /// The DOM property backing this axis.
    pub fn property(self) -> &'static str {
        match self {
            ScrollAxis::Left => "scrollLeft",
            ScrollAxis::Top => "scrollTop",
        }
    }
}

impl fmt::Display for ScrollAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

/// A command dispatched to the client for one grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ClientCommand {
    /// Assign a single scroll property. The other axis is not touched.
    SetAxis { axis: ScrollAxis, value: f64 },
    /// Assign both scroll properties in one step.
    SetBoth { left: f64, top: f64 },
    /// Answer with `[scrollLeft, scrollTop]`.
    ReadPosition,
}

impl ClientCommand {
    /// Write both axes, substituting `0` for absent offsets.
    pub fn scroll(left: Option<f64>, top: Option<f64>) -> Self {
        ClientCommand::SetBoth {
            left: left.unwrap_or(0.0),
            top: top.unwrap_or(0.0),
        }
    }

    /// Write one axis, substituting `0` for an absent offset.
    pub fn scroll_axis(axis: ScrollAxis, value: Option<f64>) -> Self {
        ClientCommand::SetAxis {
            axis,
            value: value.unwrap_or(0.0),
        }
    }

    /// Write both axes from a position; `None` resets to the origin.
    pub fn scroll_to(position: Option<ScrollPosition>) -> Self {
        let position = position.unwrap_or(ScrollPosition::ORIGIN);
        ClientCommand::SetBoth {
            left: position.left(),
            top: position.top(),
        }
    }

    /// Whether the client answers this command with a value worth awaiting.
    pub fn expects_response(&self) -> bool {
        matches!(self, ClientCommand::ReadPosition)
    }

    /// Render to client script plus positional arguments (`$0`, `$1`, ...).
    ///
    /// Property names are only ever taken from [`ScrollAxis`], never from
    /// caller input. Non-finite offsets serialize as `null`.
    pub fn invocation(&self, config: &ScriptConfig) -> Invocation {
        let container = &config.container;
        match *self {
            ClientCommand::SetAxis { axis, value } => Invocation {
                script: format!("{container}[$1] = $0;"),
                args: vec![json!(value), json!(axis.property())],
            },
            ClientCommand::SetBoth { left, top } => Invocation {
                script: format!("{container}.scrollLeft = $0; {container}.scrollTop = $1;"),
                args: vec![json!(left), json!(top)],
            },
            ClientCommand::ReadPosition => Invocation {
                script: format!("return [{container}.scrollLeft, {container}.scrollTop]"),
                args: Vec::new(),
            },
        }
    }
}

/// A command rendered for a host that ships script to the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub script: String,
    pub args: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absent_offsets_become_zero() {
        assert_eq!(
            ClientCommand::scroll(None, None),
            ClientCommand::scroll(Some(0.0), Some(0.0))
        );
        assert_eq!(
            ClientCommand::scroll(Some(37.0), None),
            ClientCommand::SetBoth {
                left: 37.0,
                top: 0.0
            }
        );
        assert_eq!(
            ClientCommand::scroll_axis(ScrollAxis::Top, None),
            ClientCommand::SetAxis {
                axis: ScrollAxis::Top,
                value: 0.0
            }
        );
    }

    #[test]
    fn scroll_to_none_resets_both_axes() {
        assert_eq!(
            ClientCommand::scroll_to(None),
            ClientCommand::scroll(Some(0.0), Some(0.0))
        );
        assert_eq!(
            ClientCommand::scroll_to(Some(ScrollPosition::new(5.0, 6.0))),
            ClientCommand::scroll(Some(5.0), Some(6.0))
        );
    }

    #[test]
    fn only_reads_expect_a_response() {
        assert!(ClientCommand::ReadPosition.expects_response());
        assert!(!ClientCommand::scroll(None, None).expects_response());
        assert!(!ClientCommand::scroll_axis(ScrollAxis::Left, Some(1.0)).expects_response());
    }

    #[test]
    fn renders_single_axis_write() {
        let inv = ClientCommand::scroll_axis(ScrollAxis::Left, Some(120.0))
            .invocation(&ScriptConfig::default());
        assert_eq!(inv.script, "this.$.table[$1] = $0;");
        assert_eq!(inv.args, vec![json!(120.0), json!("scrollLeft")]);
    }

    #[test]
    fn renders_both_axes_write() {
        let inv = ClientCommand::scroll(Some(1.5), Some(2.0)).invocation(&ScriptConfig::default());
        assert_eq!(
            inv.script,
            "this.$.table.scrollLeft = $0; this.$.table.scrollTop = $1;"
        );
        assert_eq!(inv.args, vec![json!(1.5), json!(2.0)]);
    }

    #[test]
    fn renders_non_finite_offsets_as_null() {
        let inv = ClientCommand::scroll(Some(f64::NAN), Some(f64::INFINITY))
            .invocation(&ScriptConfig::default());
        assert_eq!(inv.args, vec![Value::Null, Value::Null]);

        let inv = ClientCommand::scroll_axis(ScrollAxis::Top, Some(f64::NEG_INFINITY))
            .invocation(&ScriptConfig::default());
        assert_eq!(inv.args, vec![Value::Null, json!("scrollTop")]);
    }

    #[test]
    fn renders_read_against_custom_container() {
        let config = ScriptConfig {
            container: "this.shadowRoot.querySelector('#scroller')".to_string(),
        };
        let inv = ClientCommand::ReadPosition.invocation(&config);
        assert_eq!(
            inv.script,
            "return [this.shadowRoot.querySelector('#scroller').scrollLeft, \
             this.shadowRoot.querySelector('#scroller').scrollTop]"
        );
        assert!(inv.args.is_empty());
    }

    #[test]
    fn serializes_with_op_tag() {
        let value = serde_json::to_value(ClientCommand::scroll_axis(ScrollAxis::Top, Some(3.0)))
            .unwrap();
        assert_eq!(
            value,
            json!({ "op": "set_axis", "axis": "Top", "value": 3.0 })
        );
    }
}
