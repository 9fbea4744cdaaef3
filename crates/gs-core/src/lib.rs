pub mod command;
pub mod config;
pub mod decode;
pub mod error;
pub mod position;

pub use command::{ClientCommand, Invocation, ScrollAxis};
pub use config::ScriptConfig;
pub use decode::decode_position;
pub use error::{ParsePositionError, ResponseError, ScrollError};
pub use position::ScrollPosition;
