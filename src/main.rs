// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use route_asset_analyzer::{AnalyzeOptions, ReportFormat, SyntaxMode, analyze_file, report};

/// CLI 引数定義
#[derive(Parser, Debug)]
#[command(
    name = "route-asset-analyzer",
    version,
    about = "SPA のルーター定義 (routes 配列) を静的解析してルート資産レポートを出力する CLI ツール"
)]
struct Cli {
    /// 解析対象のルーター定義ファイル (ディレクトリならその中から探す)
    /// 例: `route-asset-analyzer ./src/router/index.js`
    #[arg(value_name = "ROUTER_FILE")]
    router_file: PathBuf,

    /// 出力形式
    #[arg(
        short,
        long,
        value_enum,
        default_value = "console",
        env = "ROUTE_ANALYZER_FORMAT"
    )]
    format: ReportFormat,

    /// 出力先ファイル (省略時は標準出力)
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// ソースの構文 (auto なら拡張子から判定)
    #[arg(long, value_enum, default_value = "auto")]
    syntax: SyntaxMode,

    /// 集計の代わりにルートごとの一覧を出力する
    #[arg(long)]
    list: bool,

    /// 色付けを無効にする
    #[arg(long)]
    no_color: bool,

    /// ログの詳細度 (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for AnalyzeOptions {
    fn from(cli: Cli) -> Self {
        // ファイル出力に ANSI エスケープを混ぜない
        let color = !cli.no_color && cli.out.is_none();
        AnalyzeOptions {
            input: cli.router_file,
            format: cli.format,
            out: cli.out,
            syntax: cli.syntax,
            list: cli.list,
            color,
        }
    }
}

fn main() -> Result<()> {
    // 1) CLI 引数をパースし、ログを初期化
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // 2) 解析して出力
    run(&AnalyzeOptions::from(cli))
}

fn run(options: &AnalyzeOptions) -> Result<()> {
    let input = options.resolve_input()?;
    info!("analyzing {}", input.display());

    let analysis = analyze_file(&input, options.syntax.resolve(&input))
        .with_context(|| format!("failed to analyze {}", input.display()))?;

    // routes が無いのは致命的ではない (空のレポートを出す)
    if !analysis.routes_found {
        eprintln!(
            "⚠️ No static `routes` array found in {}",
            input.display()
        );
    }

    let rendered = if options.list {
        report::render_listing(&analysis.routes)
    } else {
        report::render(options.format, &analysis, options.color)?
    };

    match &options.out {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            info!("report written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// RUST_LOG があればそれを優先し、無ければ -v の数でレベルを決める
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,route_asset_analyzer={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
