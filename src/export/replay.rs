//! 拓扑回放
//!
//! 通过外部仿真器的构建接口（添加主机、添加交换机、添加链路）重建拓扑。

use std::convert::Infallible;

use tracing::debug;

use crate::net::{LinkOpts, NodeKind, Topology};

/// 外部仿真器的构建接口
pub trait Emulator {
    type Handle: Clone;
    type Error;

    fn add_host(&mut self, name: &str) -> Result<Self::Handle, Self::Error>;
    fn add_switch(&mut self, name: &str) -> Result<Self::Handle, Self::Error>;
    fn add_link(&mut self, a: &Self::Handle, b: &Self::Handle) -> Result<(), Self::Error>;

    /// 带链路参数的连接；不支持链路参数的仿真器忽略它们
    fn add_link_with(
        &mut self,
        a: &Self::Handle,
        b: &Self::Handle,
        opts: &LinkOpts,
    ) -> Result<(), Self::Error> {
        let _ = opts;
        self.add_link(a, b)
    }
}

/// 先按插入顺序创建所有节点，再按插入顺序创建所有链路。
///
/// 返回的句柄与 `topo.nodes()` 一一对应。仿真器报错时立即停止。
#[tracing::instrument(skip_all, fields(topo = topo.id().0))]
pub fn replay<E: Emulator>(topo: &Topology, emu: &mut E) -> Result<Vec<E::Handle>, E::Error> {
    let mut handles = Vec::with_capacity(topo.nodes().len());
    for node in topo.nodes() {
        let handle = match node.kind() {
            NodeKind::Host => emu.add_host(node.name())?,
            NodeKind::Switch => emu.add_switch(node.name())?,
        };
        handles.push(handle);
    }
    for link in topo.links() {
        emu.add_link_with(&handles[link.a.index], &handles[link.b.index], &link.opts)?;
    }
    debug!(
        nodes = handles.len(),
        links = topo.links().len(),
        "拓扑回放完成"
    );
    Ok(handles)
}

/// 把构建调用记录成文本行，例如 `add_switch s0`、`add_link s0 h0`
#[derive(Debug, Default)]
pub struct ScriptEmulator {
    pub lines: Vec<String>,
}

impl ScriptEmulator {
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

impl Emulator for ScriptEmulator {
    type Handle = String;
    type Error = Infallible;

    fn add_host(&mut self, name: &str) -> Result<String, Infallible> {
        self.lines.push(format!("add_host {name}"));
        Ok(name.to_string())
    }

    fn add_switch(&mut self, name: &str) -> Result<String, Infallible> {
        self.lines.push(format!("add_switch {name}"));
        Ok(name.to_string())
    }

    fn add_link(&mut self, a: &String, b: &String) -> Result<(), Infallible> {
        self.add_link_with(a, b, &LinkOpts::default())
    }

    fn add_link_with(&mut self, a: &String, b: &String, opts: &LinkOpts) -> Result<(), Infallible> {
        let mut line = format!("add_link {a} {b}");
        if let Some(bw) = opts.bandwidth_mbps {
            line.push_str(&format!(" bw_mbps={bw}"));
        }
        if let Some(delay) = opts.delay_us {
            line.push_str(&format!(" delay_us={delay}"));
        }
        self.lines.push(line);
        Ok(())
    }
}
