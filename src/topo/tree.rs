//! 平衡 k 叉树拓扑构建
//!
//! 根交换机向下展开 `layers` 层交换机，每个最底层交换机再挂 `fan_out` 个主机。
//! 名称按创建顺序分配（深度优先，先序），与节点在树中的位置无关。

use tracing::{debug, info};

use crate::net::{NodeId, Result, TopoError, Topology};

/// 生成的节点总数上限（交换机 + 主机）。
///
/// 这是资源上限而不是形状约束：每个节点都持有名称、邻接表和索引项，
/// 超过上限的参数（例如 `layers=11, fan_out=4`，约 2240 万个节点）
/// 在创建任何节点之前就以 `InvalidParameter` 拒绝。
pub const MAX_GENERATED_NODES: u64 = 1 << 24;

/// 树拓扑配置（未校验）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeOpts {
    /// 根以下的交换机层数
    pub layers: i64,
    /// 每个交换机的子节点数
    pub fan_out: i64,
}

impl Default for TreeOpts {
    fn default() -> Self {
        Self {
            layers: 1,
            fan_out: 3,
        }
    }
}

impl TreeOpts {
    pub fn validate(&self) -> Result<TreeParams> {
        if self.layers < 0 {
            return Err(TopoError::invalid(
                "layers",
                format!("must be >= 0, got {}", self.layers),
            ));
        }
        if self.fan_out < 1 {
            return Err(TopoError::invalid(
                "fan_out",
                format!("must be >= 1, got {}", self.fan_out),
            ));
        }
        let layers = u32::try_from(self.layers)
            .map_err(|_| TopoError::invalid("layers", format!("{} is too large", self.layers)))?;
        let params = TreeParams {
            layers,
            fan_out: self.fan_out as u64,
        };

        let total = params
            .expected_switches()
            .zip(params.expected_hosts())
            .and_then(|(s, h)| s.checked_add(h));
        match total {
            Some(n) if n <= MAX_GENERATED_NODES => Ok(params),
            _ => Err(TopoError::invalid(
                params.oversize_culprit(),
                format!(
                    "layers={} fan_out={} exceeds {} nodes",
                    layers, params.fan_out, MAX_GENERATED_NODES
                ),
            )),
        }
    }
}

/// 已校验的树参数：`fan_out >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    layers: u32,
    fan_out: u64,
}

impl TreeParams {
    /// 超出上限时归咎的参数：只有一层主机就已超限时是 `fan_out`，否则是 `layers`
    fn oversize_culprit(&self) -> &'static str {
        let one_level = self.fan_out.checked_add(1);
        match one_level {
            Some(n) if self.fan_out == 1 || n <= MAX_GENERATED_NODES => "layers",
            _ => "fan_out",
        }
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    pub fn fan_out(&self) -> u64 {
        self.fan_out
    }

    /// `fan_out^(layers+1)`，溢出时为 None
    pub fn expected_hosts(&self) -> Option<u64> {
        self.fan_out.checked_pow(self.layers.checked_add(1)?)
    }

    /// `1 + fan_out + ... + fan_out^layers`，溢出时为 None
    pub fn expected_switches(&self) -> Option<u64> {
        if self.fan_out == 1 {
            return u64::from(self.layers).checked_add(1);
        }
        let mut total: u64 = 0;
        let mut level: u64 = 1;
        for i in 0..=self.layers {
            total = total.checked_add(level)?;
            if i < self.layers {
                level = level.checked_mul(self.fan_out)?;
            }
        }
        Some(total)
    }
}

/// 生成的树拓扑以及各类节点的标识符
#[derive(Debug)]
pub struct TreeTopology {
    pub params: TreeParams,
    pub root: NodeId,
    /// 所有交换机（创建顺序，含根）
    pub switches: Vec<NodeId>,
    /// 所有主机（创建顺序）
    pub hosts: Vec<NodeId>,
    pub topo: Topology,
}

impl TreeTopology {
    pub fn into_topology(self) -> Topology {
        self.topo
    }
}

/// 一次展开新建的节点
#[derive(Debug, Default, Clone)]
pub struct Expansion {
    pub switches: Vec<NodeId>,
    pub hosts: Vec<NodeId>,
}

/// 生成树拓扑。参数非法时返回 `InvalidParameter`，不会返回部分拓扑。
pub fn generate(layers: i64, fan_out: i64) -> Result<Topology> {
    build_tree(&TreeOpts { layers, fan_out }).map(TreeTopology::into_topology)
}

#[tracing::instrument]
pub fn build_tree(opts: &TreeOpts) -> Result<TreeTopology> {
    let params = opts.validate()?;

    let mut topo = Topology::new();
    let root = topo.add_switch(None)?;
    let mut expansion = expand_tree(&mut topo, root, &params)?;
    expansion.switches.insert(0, root);

    info!(
        switches = expansion.switches.len(),
        hosts = expansion.hosts.len(),
        links = topo.links().len(),
        "树拓扑生成完成"
    );

    Ok(TreeTopology {
        params,
        root,
        switches: expansion.switches,
        hosts: expansion.hosts,
        topo,
    })
}

struct Frame {
    node: NodeId,
    remaining: u32,
    children_left: u64,
}

/// 在已有交换机 `root` 下展开一棵树，沿用拓扑当前的命名计数器。
///
/// 使用显式栈代替递归，创建顺序与递归先序展开完全一致：
/// 每个子交换机创建并连接后立即展开，再创建它的下一个兄弟。
#[tracing::instrument(skip(topo), fields(topo = topo.id().0))]
pub fn expand_tree(topo: &mut Topology, root: NodeId, params: &TreeParams) -> Result<Expansion> {
    let root_node = topo.node(root).ok_or(TopoError::UnknownNode(root))?;
    if !root_node.is_switch() {
        return Err(TopoError::invalid(
            "root",
            format!("{} is not a switch", root_node.name()),
        ));
    }

    let fan_out = params.fan_out;
    let mut out = Expansion::default();
    let mut stack = vec![Frame {
        node: root,
        remaining: params.layers,
        children_left: fan_out,
    }];

    while let Some(top) = stack.last_mut() {
        if top.remaining == 0 {
            let node = top.node;
            stack.pop();
            for _ in 0..fan_out {
                let host = topo.add_host(None)?;
                topo.add_link(node, host)?;
                out.hosts.push(host);
            }
            continue;
        }
        if top.children_left == 0 {
            stack.pop();
            continue;
        }
        top.children_left -= 1;
        let parent = top.node;
        let remaining = top.remaining - 1;

        let child = topo.add_switch(None)?;
        topo.add_link(parent, child)?;
        out.switches.push(child);
        debug!(depth = params.layers - remaining, "展开交换机");
        stack.push(Frame {
            node: child,
            remaining,
            children_left: fan_out,
        });
    }

    Ok(out)
}
