//! 配置文件模块
//!
//! 可选的 JSON 配置文件，所有字段都可省略；省略的字段保持默认值，
//! 命令行参数在此之后应用，优先级最高。

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use serde::Deserialize;

use crate::error::AppError;
use crate::iconset::GeneratorConfig;

/// 配置文件内容。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    pub source: Option<PathBuf>,
    /// 资源目录根，三个子目录按默认名称拼接。
    pub output_root: Option<PathBuf>,
    pub ios_dir: Option<PathBuf>,
    pub macos_dir: Option<PathBuf>,
    pub launch_dir: Option<PathBuf>,
    pub min_source_dimension: Option<u32>,
    pub corner_radius_ratio: Option<f32>,
    /// `lanczos3` 或 `catmull-rom`
    pub resize_filter: Option<String>,
    pub emit_desktop_manifest: Option<bool>,
    pub manifest_author: Option<String>,
}

/// 读取并解析配置文件。
pub fn load_settings(path: &Path) -> Result<GeneratorSettings, AppError> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Config(format!("读取配置文件 '{}' 失败: {}", path.display(), e))
    })?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<GeneratorSettings, AppError> {
    serde_json::from_str(content).map_err(|e| AppError::Config(format!("解析配置文件失败: {}", e)))
}

impl GeneratorSettings {
    /// 将已设置的字段覆盖到 `config` 上。
    pub fn apply_to(&self, config: &mut GeneratorConfig) -> Result<(), AppError> {
        if let Some(root) = &self.output_root {
            let iconset = config.iconset.clone();
            *config = GeneratorConfig::under_root(config.source_path.clone(), root);
            config.iconset = iconset;
        }
        if let Some(source) = &self.source {
            config.source_path = source.clone();
        }
        if let Some(dir) = &self.ios_dir {
            config.ios_dir = dir.clone();
        }
        if let Some(dir) = &self.macos_dir {
            config.macos_dir = dir.clone();
        }
        if let Some(dir) = &self.launch_dir {
            config.launch_dir = dir.clone();
        }

        let iconset = &mut config.iconset;
        if let Some(min) = self.min_source_dimension {
            iconset.min_source_dimension = min;
        }
        if let Some(ratio) = self.corner_radius_ratio {
            iconset.corner_radius_ratio = ratio;
        }
        if let Some(filter) = &self.resize_filter {
            iconset.resize_filter = parse_filter(filter)?;
        }
        if let Some(emit) = self.emit_desktop_manifest {
            iconset.emit_desktop_manifest = emit;
        }
        if let Some(author) = &self.manifest_author {
            iconset.manifest_author = author.clone();
        }
        Ok(())
    }
}

/// 解析滤镜名。最近邻与双线性不满足图标质量要求，不开放。
pub fn parse_filter(name: &str) -> Result<FilterType, AppError> {
    match name.trim().to_lowercase().as_str() {
        "lanczos3" | "lanczos" => Ok(FilterType::Lanczos3),
        "catmull-rom" | "catmullrom" => Ok(FilterType::CatmullRom),
        other => Err(AppError::Config(format!(
            "不支持的缩放滤镜：{}（可选：lanczos3 / catmull-rom）",
            other
        ))),
    }
}
