//! # 图标资源模块（iconset）
//!
//! ## 设计思路
//!
//! 该模块把“源图加载 → 尺寸表展开 → 缩放/圆角 → 写盘 → 清单”按职责拆分为多个子模块，
//! 数据单向流动：尺寸表 → 渲染 → 清单 → 磁盘。
//!
//! - `config`：渲染策略与输入/输出路径
//! - `error`：统一错误类型
//! - `source` / `loader`：源图模型与加载校验
//! - `size_table`：各平台固定规格
//! - `pipeline`：高质量缩放与居中适配
//! - `mask`：圆角遮罩与 alpha 替换
//! - `renderer`：单个图标与整张表的渲染
//! - `manifest`：`Contents.json` 累加与写出
//! - `launch_screen`：启动图合成
//! - `handler`：整条流程编排
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（CLI 参数 + 配置文件）
//!    ↓
//! handler.rs（编排 + 阶段耗时日志）
//!    ├─ loader.rs（路径 / 解码 / 分辨率校验）
//!    ├─ renderer.rs ── pipeline.rs / mask.rs
//!    ├─ launch_screen.rs ── pipeline.rs
//!    └─ manifest.rs（Contents.json）
//!    ↓
//! 返回 AppError，CLI 以非零码退出
//! ```

mod config;
mod error;
mod handler;
pub mod launch_screen;
mod loader;
pub mod manifest;
pub mod mask;
pub mod pipeline;
pub mod renderer;
pub mod size_table;
mod source;

pub use config::{
    DEFAULT_LAUNCH_CANVASES, DEFAULT_OUTPUT_ROOT, DEFAULT_SOURCE_PATH, GeneratorConfig,
    IOS_SET_DIR, IconsetConfig, LAUNCH_SET_DIR, LaunchCanvas, MACOS_SET_DIR,
    MIN_SOURCE_DIMENSION,
};
pub use error::IconError;
pub use handler::{IconsetGenerator, RunSummary};
pub use loader::load_source;
pub use manifest::{ImageRecord, MANIFEST_FILENAME, Manifest, write_manifest};
pub use size_table::{
    IOS_ICON_SIZES, IconTarget, Idiom, LogicalSize, MACOS_ICON_SIZES, Platform, SizeSpec,
};
pub use source::SourceImage;
