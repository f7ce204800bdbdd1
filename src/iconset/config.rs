//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `IconsetConfig`，输入/输出路径集中到 `GeneratorConfig`。
//! `Default` 即生产可用的取值，测试可按需缩小启动图画布以控制耗时。
//!
//! ## 实现思路
//!
//! - `IconsetConfig::validate` 在流水线开始前拒绝非法阈值。
//! - `GeneratorConfig::under_root` 按资源目录惯例拼出三个输出目录。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::IconError;

/// 默认源图路径。
pub const DEFAULT_SOURCE_PATH: &str = "source.png";
/// 源图宽、高的下限，配置只能调高不能调低。
pub const MIN_SOURCE_DIMENSION: u32 = 1024;
/// 默认资源目录根。
pub const DEFAULT_OUTPUT_ROOT: &str = "../Assets.xcassets";
pub const IOS_SET_DIR: &str = "AppIconIOS.appiconset";
pub const MACOS_SET_DIR: &str = "AppIconMacOS.appiconset";
pub const LAUNCH_SET_DIR: &str = "LaunchScreen.imageset";

/// 启动图画布：尺寸与倍率标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchCanvas {
    pub width: u32,
    pub height: u32,
    /// `1x` / `2x` / `3x`
    pub scale_label: &'static str,
}

impl LaunchCanvas {
    pub const fn square(side: u32, scale_label: &'static str) -> Self {
        Self {
            width: side,
            height: side,
            scale_label,
        }
    }

    /// 固定文件名 `LaunchScreen@{label}.png`。
    pub fn filename(&self) -> String {
        format!("LaunchScreen@{}.png", self.scale_label)
    }
}

/// 生产用启动图画布（1x / 2x / 3x）。
pub const DEFAULT_LAUNCH_CANVASES: [LaunchCanvas; 3] = [
    LaunchCanvas::square(2732, "1x"),
    LaunchCanvas::square(5464, "2x"),
    LaunchCanvas::square(8196, "3x"),
];

/// 渲染策略配置。
#[derive(Debug, Clone)]
pub struct IconsetConfig {
    /// 源图宽、高的最小值（像素），不得低于 `MIN_SOURCE_DIMENSION`。
    pub min_source_dimension: u32,
    /// 缩放滤镜。图标质量要求高质量卷积滤镜，默认 Lanczos3。
    pub resize_filter: FilterType,
    /// 圆角半径占较短边的比例。
    pub corner_radius_ratio: f32,
    /// 启动图画布列表。
    pub launch_canvases: Vec<LaunchCanvas>,
    /// 是否为 macOS 图标目录写出 `Contents.json`。
    pub emit_desktop_manifest: bool,
    /// 清单 `info.author` 字段。
    pub manifest_author: String,
}

impl Default for IconsetConfig {
    fn default() -> Self {
        Self {
            min_source_dimension: MIN_SOURCE_DIMENSION,
            resize_filter: FilterType::Lanczos3,
            corner_radius_ratio: 0.2,
            launch_canvases: DEFAULT_LAUNCH_CANVASES.to_vec(),
            emit_desktop_manifest: true,
            manifest_author: "xcode".to_string(),
        }
    }
}

impl IconsetConfig {
    /// 校验阈值是否合法。
    pub fn validate(&self) -> Result<(), IconError> {
        if self.min_source_dimension < MIN_SOURCE_DIMENSION {
            return Err(IconError::InvalidConfig(format!(
                "min_source_dimension 不能低于 {}：{}",
                MIN_SOURCE_DIMENSION, self.min_source_dimension
            )));
        }
        if !(self.corner_radius_ratio > 0.0 && self.corner_radius_ratio <= 0.5) {
            return Err(IconError::InvalidConfig(format!(
                "corner_radius_ratio 必须在 (0, 0.5] 之间：{}",
                self.corner_radius_ratio
            )));
        }
        if self
            .launch_canvases
            .iter()
            .any(|canvas| canvas.width < 2 || canvas.height < 2)
        {
            return Err(IconError::InvalidConfig("启动图画布宽高不能小于 2".to_string()));
        }
        Ok(())
    }
}

/// 一次完整生成所需的输入与输出位置。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub source_path: PathBuf,
    pub ios_dir: PathBuf,
    pub macos_dir: PathBuf,
    pub launch_dir: PathBuf,
    pub iconset: IconsetConfig,
}

impl GeneratorConfig {
    /// 以资源目录根拼出三个输出目录。
    pub fn under_root(source_path: impl Into<PathBuf>, root: &Path) -> Self {
        Self {
            source_path: source_path.into(),
            ios_dir: root.join(IOS_SET_DIR),
            macos_dir: root.join(MACOS_SET_DIR),
            launch_dir: root.join(LAUNCH_SET_DIR),
            iconset: IconsetConfig::default(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::under_root(DEFAULT_SOURCE_PATH, Path::new(DEFAULT_OUTPUT_ROOT))
    }
}
