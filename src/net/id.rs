//! 标识符类型
//!
//! 定义拓扑、节点和链路的唯一标识符。

use std::sync::atomic::{AtomicU64, Ordering};

/// 拓扑实例标识符
///
/// 每个 `Topology` 创建时分配一个，用来拒绝来自其他拓扑的节点引用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopoId(pub u64);

impl TopoId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        TopoId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// 节点标识符（所属拓扑 + 插入序号）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub topo: TopoId,
    pub index: usize,
}

/// 链路标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(pub usize);
