//! 拓扑数据模型
//!
//! 此模块包含节点、链路、自动命名和拓扑构建器。

// 子模块声明
mod error;
mod id;
mod link;
mod naming;
mod node;
mod topology;

// 重新导出公共接口
pub use error::{Result, TopoError};
pub use id::{LinkId, NodeId, TopoId};
pub use link::{Link, LinkOpts};
pub use naming::Namer;
pub use node::{Node, NodeKind};
pub use topology::Topology;
