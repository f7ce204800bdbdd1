//! # 应用图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs   CLI (clap) + env_logger                        │
//! │     │  settings ── 可选 JSON 配置文件                      │
//! │     ↓                                                    │
//! │  iconset::IconsetGenerator                                │
//! │     ├─ loader         源图加载 + 分辨率校验               │
//! │     ├─ size_table     iOS / macOS 固定规格                │
//! │     ├─ renderer       缩放 · 圆角 · 写 PNG                │
//! │     ├─ launch_screen  启动图合成                          │
//! │     └─ manifest       Contents.json                       │
//! │     ↓                                                    │
//! │  storage ── 输出目录（幂等创建）                          │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，CLI 的返回类型 |
//! | [`iconset`] | 图标、启动图与清单的完整生成流水线 |
//! | [`settings`] | JSON 配置文件解析与覆盖 |
//! | [`storage`] | 输出目录的检查与自动创建 |

pub mod error;
pub mod iconset;
pub mod settings;
pub mod storage;
