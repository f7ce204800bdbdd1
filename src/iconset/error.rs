//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 图标生成链路中的所有失败都收敛到单一枚举 `IconError`，调用侧可按分支匹配。
//! 三类业务错误（源图缺失 / 分辨率不足 / 尺寸不符）均为致命错误，不做重试与跳过。

use std::path::PathBuf;

/// 图标生成统一错误类型。
///
/// 在 crate 顶层会被上转为 `AppError`，由 CLI 打印后以非零码退出。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// 源图路径无法解析。
    #[error("源图不存在：{}", .0.display())]
    MissingSource(PathBuf),

    /// 源图宽或高低于最小分辨率，此时不会渲染任何文件。
    #[error("源图分辨率不足：{width}x{height}（要求至少 {min}x{min}）")]
    InsufficientResolution { width: u32, height: u32, min: u32 },

    /// 严格尺寸约束被破坏（512x512@2x 必须是 1024x1024）。
    #[error("图标尺寸不符：期望 {}x{}，实际 {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("清单错误：{0}")]
    Manifest(String),

    #[error("配置错误：{0}")]
    InvalidConfig(String),
}
