//! # 应用图标生成工具 — 命令行入口
//!
//! 本文件仅负责日志初始化、参数解析与配置合并，生成逻辑见 `iconset` 模块。

use std::path::PathBuf;

use appicon_forge::error::AppError;
use appicon_forge::iconset::{GeneratorConfig, IconsetGenerator};
use appicon_forge::settings::load_settings;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "appicon-forge",
    about = "Generate iOS/macOS app-icon sets and launch screens from one source image"
)]
struct Args {
    /// Source image (any common bitmap format, at least 1024x1024).
    #[arg(value_name = "SOURCE")]
    source: Option<PathBuf>,

    /// Asset catalog root; set directories are created inside it.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Override the iOS app-icon set directory.
    #[arg(long, value_name = "DIR")]
    ios_dir: Option<PathBuf>,

    /// Override the macOS app-icon set directory.
    #[arg(long, value_name = "DIR")]
    macos_dir: Option<PathBuf>,

    /// Override the launch-screen image set directory.
    #[arg(long, value_name = "DIR")]
    launch_dir: Option<PathBuf>,

    /// JSON settings file; command-line flags take precedence.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Render macOS icons without writing their Contents.json.
    #[arg(long)]
    skip_macos_manifest: bool,
}

fn build_config(args: Args) -> Result<GeneratorConfig, AppError> {
    let mut config = GeneratorConfig::default();

    if let Some(path) = &args.config {
        load_settings(path)?.apply_to(&mut config)?;
    }

    if let Some(root) = &args.output {
        let iconset = config.iconset.clone();
        config = GeneratorConfig::under_root(config.source_path.clone(), root);
        config.iconset = iconset;
    }
    if let Some(source) = args.source {
        config.source_path = source;
    }
    if let Some(dir) = args.ios_dir {
        config.ios_dir = dir;
    }
    if let Some(dir) = args.macos_dir {
        config.macos_dir = dir;
    }
    if let Some(dir) = args.launch_dir {
        config.launch_dir = dir;
    }
    if args.skip_macos_manifest {
        config.iconset.emit_desktop_manifest = false;
    }

    Ok(config)
}

fn run(args: Args) -> Result<(), AppError> {
    let config = build_config(args)?;
    let summary = IconsetGenerator::new(config.clone())?.run()?;

    log::info!(
        "所有图标与启动图已生成：iOS {} 个，macOS {} 个，启动图 {} 张",
        summary.ios_icons,
        summary.macos_icons,
        summary.launch_images
    );
    log::info!("- {}", config.ios_dir.display());
    log::info!("- {}", config.macos_dir.display());
    log::info!("- {}", config.launch_dir.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run(Args::parse()) {
        log::error!("❌ 生成失败: {err}");
        std::process::exit(err.exit_code());
    }
}
