//! 按 JSON 描述构建拓扑
//!
//! 读取 tree / explicit 拓扑描述并输出构建脚本或 JSON

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use topogen_rs::export::{OutputFormat, render};
use topogen_rs::topo::TopologySpec;

#[derive(Debug, Parser)]
#[command(name = "spec_topo", about = "按 JSON 描述构建拓扑（tree 或 explicit）")]
struct Args {
    /// 拓扑描述 JSON 文件路径
    #[arg(long)]
    spec: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Script)]
    format: OutputFormat,
    /// 输出文件，默认写到 stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

fn run(args: &Args) -> Result<(), String> {
    let spec = TopologySpec::from_path(&args.spec).map_err(|e| e.to_string())?;
    let topo = spec.build().map_err(|e| e.to_string())?;
    let text = render(&topo, args.format).map_err(|e| format!("render topology: {e}"))?;
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
