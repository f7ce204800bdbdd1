//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义 crate 级统一的 `AppError` 枚举，CLI 入口统一返回 `Result<T, AppError>`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::iconset::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（加载 / 渲染 / 清单）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件不可用或格式错误
    #[error("配置错误: {0}")]
    Config(String),
}

impl AppError {
    /// 进程退出码：配置问题 2，其余 1。
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Icon(IconError::InvalidConfig(_)) => 2,
            _ => 1,
        }
    }
}
