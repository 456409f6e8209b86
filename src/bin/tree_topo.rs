//! 树拓扑生成
//!
//! 生成平衡树拓扑并输出构建脚本或 JSON

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use topogen_rs::export::{OutputFormat, render};
use topogen_rs::topo::{TreeOpts, build_tree};

#[derive(Debug, Parser)]
#[command(name = "tree_topo", about = "生成平衡树拓扑：根交换机 + layers 层交换机 + 叶子主机")]
struct Args {
    /// 根以下的交换机层数
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    layers: i64,
    /// 每个交换机的子节点数
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    fan_out: i64,
    #[arg(long, value_enum, default_value_t = OutputFormat::Script)]
    format: OutputFormat,
    /// 输出文件，默认写到 stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), String> {
    let opts = TreeOpts {
        layers: args.layers,
        fan_out: args.fan_out,
    };
    let tree = build_tree(&opts).map_err(|e| e.to_string())?;
    let text = render(&tree.topo, args.format).map_err(|e| format!("render topology: {e}"))?;
    match &args.out {
        Some(path) => {
            fs::write(path, text).map_err(|e| format!("write {}: {e}", path.display()))?
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
