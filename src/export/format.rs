//! 命令行输出格式：构建脚本或 JSON

use crate::net::Topology;

use super::dump::TopologyDump;
use super::replay::{ScriptEmulator, replay};

/// 命令行输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// 每行一个构建调用
    #[default]
    Script,
    /// `TopologyDump` JSON
    Json,
}

pub fn render(topo: &Topology, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Script => {
            let mut emu = ScriptEmulator::default();
            match replay(topo, &mut emu) {
                Ok(_) => {}
                Err(never) => match never {},
            }
            Ok(emu.render())
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&TopologyDump::from_topology(topo))?;
            out.push('\n');
            Ok(out)
        }
    }
}
