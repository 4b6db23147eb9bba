//! Common Framework
//!
//! 提供 parser-framework 和 json-parser 之间的共同组件：输入状态与位置。

pub mod input_state;
pub mod position;

pub use input_state::{InputState, END_OF_FILE};
pub use position::{Position, PositionSnapshot};
