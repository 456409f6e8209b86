//! 拓扑导出
//!
//! 把构建好的拓扑交给外部仿真器：
//! - **回放**：按插入顺序调用 `add_host` / `add_switch` / `add_link`
//! - **JSON**：节点和链路的结构化描述

mod dump;
mod format;
mod replay;

pub use dump::{DumpLink, DumpNode, TopologyDump};
pub use format::{OutputFormat, render};
pub use replay::{Emulator, ScriptEmulator, replay};
