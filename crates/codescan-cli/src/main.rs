use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codescan_core::scan_and_report;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "codescan", version, about = "页面文本编码提取器")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描输入文本并输出报告
    Scan {
        /// 输入文件（已渲染的纯文本）；缺省从标准输入整读
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { input } => {
            info!(?input, "starting scan");

            // 获取宿主文本快照（文件或标准输入，一次整读）
            let text = read_input_text(input.as_deref()).context("read input text")?;

            // 报告行写向标准输出（缓冲）；日志走 tracing，互不混写
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            let stats = scan_and_report(&text, &mut out).context("scan and report failed")?;
            out.flush().ok();

            info!(matches_found = stats.matches_found, "scan finished");
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级，如：RUST_LOG=debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 读取输入文本：指定 --input 则整读文件，否则读完标准输入
fn read_input_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read file {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
