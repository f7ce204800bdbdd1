//! 输出目录管理模块
//!
//! # 设计思路
//!
//! 所有写盘前的目录准备都经过这里：目录不存在时自动 `create_dir_all`，
//! 已存在则直接返回，重复运行不受影响。
//!
//! # 实现思路
//!
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。
//! - 路径存在但不是目录时报错，避免后续写文件时才失败。

use std::fs;
use std::path::Path;

use crate::iconset::IconError;

/// 确保输出目录存在（幂等）。
///
/// # 返回
/// - `Ok(())` — 目录可写入
/// - `Err(IconError::FileSystem)` — 无法创建，或同名路径不是目录
pub fn ensure_dir(dir: &Path) -> Result<(), IconError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(IconError::FileSystem(format!(
            "输出路径 '{}' 已存在且不是目录",
            dir.display()
        )));
    }

    fs::create_dir_all(dir).map_err(|e| {
        IconError::FileSystem(format!("创建输出目录 '{}' 失败: {}", dir.display(), e))
    })?;
    log::debug!("📂 已创建输出目录 {}", dir.display());
    Ok(())
}
