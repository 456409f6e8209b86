//! 链路类型
//!
//! 定义无向链路及其可选的流量控制参数。

use serde::{Deserialize, Serialize};

use super::id::{LinkId, NodeId};

/// 链路参数（交给仿真器的 tc 选项；拓扑本身不解释这些值）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkOpts {
    /// 链路带宽（Mbps），None 表示使用仿真器默认值
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_mbps: Option<u64>,
    /// 单向传播时延（微秒）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_us: Option<u64>,
}

/// 网络链路：两个不同节点之间的无向连接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: LinkId,
    pub a: NodeId,
    pub b: NodeId,
    pub opts: LinkOpts,
}

impl Link {
    pub(crate) fn new(id: LinkId, a: NodeId, b: NodeId, opts: LinkOpts) -> Self {
        Self { id, a, b, opts }
    }

    /// 链路的两个端点（按添加时的顺序）
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// 端点之一为 `node` 时返回另一端
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }

    /// 无向比较：忽略端点顺序
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}
