//! 拓扑描述（JSON 配置）
//!
//! `tree` 描述交给树生成器，`explicit` 描述按主机、交换机、链路的顺序手工连线。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::net::{LinkOpts, Topology};

use super::tree::{TreeOpts, build_tree};

/// 拓扑描述（JSON 配置）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TopologySpec {
    /// 平衡树：根以下 `layers` 层交换机，每层 `fan_out` 个子节点
    Tree {
        #[serde(default = "default_layers")]
        layers: i64,
        #[serde(default = "default_fan_out")]
        fan_out: i64,
    },
    /// 手工连线：先添加主机，再添加交换机，最后按顺序添加链路
    Explicit {
        #[serde(default)]
        hosts: Vec<String>,
        #[serde(default)]
        switches: Vec<String>,
        #[serde(default)]
        links: Vec<LinkSpec>,
    },
}

fn default_layers() -> i64 {
    TreeOpts::default().layers
}

fn default_fan_out() -> i64 {
    TreeOpts::default().fan_out
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: String,
    pub b: String,
    #[serde(flatten)]
    pub opts: LinkOpts,
}

/// 读取或构建拓扑描述时的错误
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse topology spec: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Topo(#[from] crate::net::TopoError),
}

impl TopologySpec {
    pub fn from_json_str(raw: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// 按描述构建拓扑；任何一步失败都不返回拓扑
    pub fn build(&self) -> Result<Topology, SpecError> {
        match self {
            TopologySpec::Tree { layers, fan_out } => {
                let opts = TreeOpts {
                    layers: *layers,
                    fan_out: *fan_out,
                };
                Ok(build_tree(&opts)?.into_topology())
            }
            TopologySpec::Explicit {
                hosts,
                switches,
                links,
            } => {
                let mut topo = Topology::new();
                for name in hosts {
                    topo.add_host(name.as_str())?;
                }
                for name in switches {
                    topo.add_switch(name.as_str())?;
                }
                for link in links {
                    let a = topo.lookup(&link.a)?.id();
                    let b = topo.lookup(&link.b)?.id();
                    topo.add_link_with(a, b, link.opts)?;
                }
                info!(
                    hosts = topo.host_count(),
                    switches = topo.switch_count(),
                    links = topo.links().len(),
                    "手工拓扑构建完成"
                );
                Ok(topo)
            }
        }
    }
}
