//! # 清单模块
//!
//! ## 设计思路
//!
//! 每个输出目录对应一份 `Contents.json`：有序的图片记录 + 固定元数据。
//! 记录以“累加器”值的形式在每次渲染调用间传递（传入、追加、返回），
//! 不存在多处别名共享的可变结构，顺序与渲染顺序一致。
//!
//! 不去重，也不校验文件名唯一性，这由尺寸表保证。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::IconError;
use super::size_table::{IconTarget, Idiom, Platform};

/// 清单文件名。
pub const MANIFEST_FILENAME: &str = "Contents.json";
/// 清单格式版本。
pub const MANIFEST_VERSION: u32 = 1;

/// 单条图片记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub idiom: Idiom,
    /// 启动图记录没有 `size`。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    pub scale: String,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
}

impl ImageRecord {
    /// 图标记录：设备类型、`{w}x{h}`、`{scale}x`、文件名、可选平台。
    pub fn for_icon(target: &IconTarget) -> Self {
        Self {
            idiom: target.idiom,
            size: Some(target.size_label()),
            scale: target.scale_label(),
            filename: target.filename(),
            platform: target.platform,
        }
    }

    /// 启动图记录：固定 `universal`，只有文件名与倍率。
    pub fn for_launch_screen(filename: String, scale_label: &str) -> Self {
        Self {
            idiom: Idiom::Universal,
            size: None,
            scale: scale_label.to_string(),
            filename,
            platform: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub version: u32,
    pub author: String,
}

/// `{ images: [...], info: { version, author } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ImageRecord>,
    pub info: ManifestInfo,
}

impl Manifest {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            images: Vec::new(),
            info: ManifestInfo {
                version: MANIFEST_VERSION,
                author: author.into(),
            },
        }
    }

    /// 追加一条记录并交还累加器。
    pub fn with_record(mut self, record: ImageRecord) -> Self {
        self.images.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// 两空格缩进的 JSON，与打包工具链自身的写法一致。
    pub fn to_json(&self) -> Result<String, IconError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| IconError::Manifest(format!("序列化清单失败：{}", e)))
    }
}

/// 将清单写入 `dir/Contents.json`，返回写入路径。
pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<PathBuf, IconError> {
    let path = dir.join(MANIFEST_FILENAME);
    let json = manifest.to_json()?;

    fs::write(&path, json)
        .map_err(|e| IconError::FileSystem(format!("写入清单 '{}' 失败：{}", path.display(), e)))?;

    log::info!("📝 已写入清单 {}（{} 条记录）", path.display(), manifest.len());
    Ok(path)
}
