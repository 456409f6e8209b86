//! 拓扑的 JSON 描述

use serde::{Deserialize, Serialize};

use crate::net::{LinkOpts, NodeKind, Topology};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpNode {
    /// 插入序号
    pub id: usize,
    pub name: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpLink {
    /// 端点名称
    pub a: String,
    pub b: String,
    #[serde(flatten)]
    pub opts: LinkOpts,
}

/// 拓扑的 JSON 描述（节点、链路均为插入顺序）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologyDump {
    pub nodes: Vec<DumpNode>,
    pub links: Vec<DumpLink>,
}

impl TopologyDump {
    pub fn from_topology(topo: &Topology) -> Self {
        let nodes = topo
            .nodes()
            .iter()
            .map(|n| DumpNode {
                id: n.id().index,
                name: n.name().to_string(),
                kind: n.kind(),
            })
            .collect::<Vec<_>>();
        let links = topo
            .links()
            .iter()
            .map(|l| DumpLink {
                a: nodes[l.a.index].name.clone(),
                b: nodes[l.b.index].name.clone(),
                opts: l.opts,
            })
            .collect::<Vec<_>>();
        Self { nodes, links }
    }
}
