//! 拓扑构建与只读视图
//!
//! `Topology` 持有节点、链路和自动命名计数器。所有构建操作要么完整生效，
//! 要么返回错误且不修改任何状态。

use std::collections::HashMap;

use tracing::{debug, trace};

use super::error::{Result, TopoError};
use super::id::{LinkId, NodeId, TopoId};
use super::link::{Link, LinkOpts};
use super::naming::Namer;
use super::node::{Node, NodeKind};

/// 网络拓扑
#[derive(Debug)]
pub struct Topology {
    id: TopoId,
    nodes: Vec<Node>,
    links: Vec<Link>,
    by_name: HashMap<String, usize>,
    adjacency: Vec<Vec<LinkId>>,
    namer: Namer,
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}

impl Topology {
    /// 创建空拓扑
    pub fn new() -> Self {
        Self {
            id: TopoId::fresh(),
            nodes: Vec::new(),
            links: Vec::new(),
            by_name: HashMap::new(),
            adjacency: Vec::new(),
            namer: Namer::default(),
        }
    }

    pub fn id(&self) -> TopoId {
        self.id
    }

    /// 添加主机节点；`None` 时自动命名（`h0, h1, ...`）
    pub fn add_host<'a>(&mut self, name: impl Into<Option<&'a str>>) -> Result<NodeId> {
        self.add_node(NodeKind::Host, name.into())
    }

    /// 添加交换机节点；`None` 时自动命名（`s0, s1, ...`）
    pub fn add_switch<'a>(&mut self, name: impl Into<Option<&'a str>>) -> Result<NodeId> {
        self.add_node(NodeKind::Switch, name.into())
    }

    #[tracing::instrument(skip(self), fields(topo = self.id.0))]
    fn add_node(&mut self, kind: NodeKind, name: Option<&str>) -> Result<NodeId> {
        let name = match name {
            Some(n) => {
                if n.is_empty() {
                    return Err(TopoError::InvalidName(n.to_string()));
                }
                if self.by_name.contains_key(n) {
                    return Err(TopoError::DuplicateName(n.to_string()));
                }
                n.to_string()
            }
            None => self.reserve_name(kind),
        };

        let id = NodeId {
            topo: self.id,
            index: self.nodes.len(),
        };
        debug!(name = %name, ?kind, index = id.index, "添加节点");
        self.by_name.insert(name.clone(), id.index);
        self.nodes.push(Node::new(id, name, kind));
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// 从计数器取名，跳过已被手动占用的名称。被跳过的计数值不会再使用。
    fn reserve_name(&mut self, kind: NodeKind) -> String {
        loop {
            let candidate = match kind {
                NodeKind::Host => self.namer.next_host_name(),
                NodeKind::Switch => self.namer.next_switch_name(),
            };
            if !self.by_name.contains_key(&candidate) {
                return candidate;
            }
            trace!(name = %candidate, "自动名称已被占用，跳过");
        }
    }

    /// 连接两个节点（无向链路，使用默认参数）
    pub fn add_link(&mut self, a: NodeId, b: NodeId) -> Result<LinkId> {
        self.add_link_with(a, b, LinkOpts::default())
    }

    /// 连接两个节点并指定链路参数
    #[tracing::instrument(skip(self), fields(topo = self.id.0))]
    pub fn add_link_with(&mut self, a: NodeId, b: NodeId, opts: LinkOpts) -> Result<LinkId> {
        self.check_member(a)?;
        self.check_member(b)?;
        if a == b {
            return Err(TopoError::SelfLink(a));
        }

        let id = LinkId(self.links.len());
        debug!(
            a = %self.nodes[a.index].name(),
            b = %self.nodes[b.index].name(),
            link = id.0,
            "添加链路"
        );
        self.links.push(Link::new(id, a, b, opts));
        self.adjacency[a.index].push(id);
        self.adjacency[b.index].push(id);
        Ok(id)
    }

    fn check_member(&self, id: NodeId) -> Result<()> {
        if id.topo != self.id || id.index >= self.nodes.len() {
            return Err(TopoError::UnknownNode(id));
        }
        Ok(())
    }

    /// 所有节点（插入顺序）
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// 所有链路（插入顺序）
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// 按名称查找节点
    pub fn lookup(&self, name: &str) -> Result<&Node> {
        self.by_name
            .get(name)
            .map(|&idx| &self.nodes[idx])
            .ok_or_else(|| TopoError::NotFound(name.to_string()))
    }

    /// 按标识符取节点；不属于本拓扑时返回 None
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.check_member(id).ok().map(|_| &self.nodes[id.index])
    }

    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.get(id.0)
    }

    pub fn hosts(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_host())
    }

    pub fn switches(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_switch())
    }

    pub fn host_count(&self) -> usize {
        self.hosts().count()
    }

    pub fn switch_count(&self) -> usize {
        self.switches().count()
    }

    /// 节点度数（并行链路分别计数）
    pub fn degree(&self, id: NodeId) -> Result<usize> {
        self.check_member(id)?;
        Ok(self.adjacency[id.index].len())
    }

    /// 相邻节点（按链路插入顺序，并行链路会重复出现）
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        self.check_member(id)?;
        Ok(self.adjacency[id.index]
            .iter()
            .filter_map(|l| self.links[l.0].other(id))
            .collect())
    }

    /// 本拓扑的命名计数器（只读）
    pub fn namer(&self) -> &Namer {
        &self.namer
    }
}
