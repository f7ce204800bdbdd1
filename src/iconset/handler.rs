//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconsetGenerator` 只负责流程编排，处理链路固定为：
//! 1. 加载并校验源图（失败时不创建任何目录、不写任何文件）
//! 2. 创建三个输出目录（已存在则跳过）
//! 3. iOS 图标集 + 清单
//! 4. macOS 图标集 + 清单（可配置关闭清单）
//! 5. 启动图 + 清单
//!
//! ## 实现思路
//!
//! - 全程同步、单线程，任何错误立即中止，不做部分成功。
//! - 记录 `load/ios/macos/launch/total` 阶段耗时，便于性能诊断。

use std::path::PathBuf;
use std::time::Instant;

use super::launch_screen::render_launch_screens;
use super::loader::load_source;
use super::manifest::write_manifest;
use super::renderer::render_icon_set;
use super::size_table::{IOS_ICON_SIZES, MACOS_ICON_SIZES};
use super::{GeneratorConfig, IconError};
use crate::storage::ensure_dir;

/// 一次运行的产出统计。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ios_icons: usize,
    pub macos_icons: usize,
    pub launch_images: usize,
    /// 已写出的清单路径，按写出顺序。
    pub manifests: Vec<PathBuf>,
}

/// 图标资源生成器。
pub struct IconsetGenerator {
    config: GeneratorConfig,
}

impl IconsetGenerator {
    /// 创建生成器，非法阈值在此处即被拒绝。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use appicon_forge::iconset::{GeneratorConfig, IconsetGenerator};
    ///
    /// let summary = IconsetGenerator::new(GeneratorConfig::default())?.run()?;
    /// println!("{} 个 iOS 图标", summary.ios_icons);
    /// # Ok::<(), appicon_forge::iconset::IconError>(())
    /// ```
    pub fn new(config: GeneratorConfig) -> Result<Self, IconError> {
        config.iconset.validate()?;
        Ok(Self { config })
    }

    /// 执行完整生成流程。
    pub fn run(&self) -> Result<RunSummary, IconError> {
        let config = &self.config;
        let iconset = &config.iconset;
        let total_start = Instant::now();
        let mut summary = RunSummary::default();

        let load_start = Instant::now();
        let source = load_source(&config.source_path, iconset)?;
        let load_elapsed = load_start.elapsed();

        for dir in [&config.ios_dir, &config.macos_dir, &config.launch_dir] {
            ensure_dir(dir)?;
        }

        let ios_start = Instant::now();
        let ios_manifest = render_icon_set(&source, IOS_ICON_SIZES, &config.ios_dir, iconset)?;
        summary.ios_icons = ios_manifest.len();
        summary
            .manifests
            .push(write_manifest(&config.ios_dir, &ios_manifest)?);
        let ios_elapsed = ios_start.elapsed();

        let macos_start = Instant::now();
        let macos_manifest =
            render_icon_set(&source, MACOS_ICON_SIZES, &config.macos_dir, iconset)?;
        summary.macos_icons = macos_manifest.len();
        if iconset.emit_desktop_manifest {
            summary
                .manifests
                .push(write_manifest(&config.macos_dir, &macos_manifest)?);
        } else {
            log::info!(
                "⏭️ 已按配置跳过 macOS 清单 - 目录: {}",
                config.macos_dir.display()
            );
        }
        let macos_elapsed = macos_start.elapsed();

        let launch_start = Instant::now();
        let launch_manifest = render_launch_screens(&source, &config.launch_dir, iconset)?;
        summary.launch_images = launch_manifest.len();
        summary
            .manifests
            .push(write_manifest(&config.launch_dir, &launch_manifest)?);
        let launch_elapsed = launch_start.elapsed();

        log::info!(
            "✅ 图标资源生成完成 - load={}ms ios={}ms macos={}ms launch={}ms total={}ms",
            load_elapsed.as_millis(),
            ios_elapsed.as_millis(),
            macos_elapsed.as_millis(),
            launch_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(summary)
    }
}
