//! 节点类型
//!
//! 定义网络节点：主机和交换机。

use serde::{Deserialize, Serialize};

use super::id::NodeId;

/// 节点类型（创建时确定，之后不可更改）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Host,
    Switch,
}

/// 拓扑中的一个节点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    name: String,
    kind: NodeKind,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// 获取节点标识符
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// 获取节点名称
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_host(&self) -> bool {
        self.kind == NodeKind::Host
    }

    pub fn is_switch(&self) -> bool {
        self.kind == NodeKind::Switch
    }
}
