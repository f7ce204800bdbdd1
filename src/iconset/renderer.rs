//! # 图标渲染模块
//!
//! ## 设计思路
//!
//! 每个 (规格, 倍率) 组合独立渲染一次、写盘一次，不复用中间结果。
//! 清单累加器按值传入并返回，保证记录顺序与渲染顺序一致。
//!
//! ## 实现思路
//!
//! 1. 计算目标像素尺寸 `round(logical * scale)`
//! 2. 严格尺寸校验（512x512@2x 必须为 1024x1024），在写盘前完成
//! 3. 高质量滤镜缩放
//! 4. 桌面图标应用圆角遮罩
//! 5. 写出 PNG，追加清单记录

use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::manifest::{ImageRecord, Manifest};
use super::mask::apply_rounded_corners;
use super::pipeline::resize_exact;
use super::size_table::{IconTarget, LogicalSize, SizeSpec, expand_targets};
use super::source::SourceImage;
use super::{IconError, IconsetConfig};

/// 受严格尺寸约束的规格：逻辑 512x512 在 2 倍下必须恰好是 1024x1024。
const STRICT_LOGICAL_SIZE: LogicalSize = LogicalSize::square(512.0);
const STRICT_SCALE: u32 = 2;
const STRICT_PIXELS: (u32, u32) = (1024, 1024);

/// 校验严格尺寸约束，其他规格直接通过。
pub fn verify_strict_dimensions(target: &IconTarget, actual: (u32, u32)) -> Result<(), IconError> {
    let is_strict_target = target.size == STRICT_LOGICAL_SIZE && target.scale == STRICT_SCALE;
    if is_strict_target && actual != STRICT_PIXELS {
        return Err(IconError::DimensionMismatch {
            expected: STRICT_PIXELS,
            actual,
        });
    }
    Ok(())
}

/// 只渲染像素，不写盘。
pub fn render_icon_pixels(
    source: &SourceImage,
    target: &IconTarget,
    config: &IconsetConfig,
) -> Result<RgbaImage, IconError> {
    let (width, height) = target.pixel_dimensions();
    verify_strict_dimensions(target, (width, height))?;

    let resized = resize_exact(source.pixels(), width, height, config.resize_filter);
    let icon = if target.idiom.wants_rounded_corners() {
        apply_rounded_corners(&resized, config.corner_radius_ratio, config.resize_filter)
    } else {
        resized
    };

    verify_strict_dimensions(target, icon.dimensions())?;
    Ok(icon)
}

/// 渲染单个图标并写入 `out_dir`，返回追加了该记录的清单。
pub fn render_icon(
    source: &SourceImage,
    target: &IconTarget,
    out_dir: &Path,
    config: &IconsetConfig,
    manifest: Manifest,
) -> Result<Manifest, IconError> {
    let icon = render_icon_pixels(source, target, config)?;

    let filename = target.filename();
    write_png(&icon, &out_dir.join(&filename))?;

    log::debug!(
        "🖼️ {} -> {}x{}",
        filename,
        icon.width(),
        icon.height()
    );

    Ok(manifest.with_record(ImageRecord::for_icon(target)))
}

/// 按表内顺序渲染整张尺寸表。
pub fn render_icon_set(
    source: &SourceImage,
    table: &[SizeSpec],
    out_dir: &Path,
    config: &IconsetConfig,
) -> Result<Manifest, IconError> {
    let manifest = expand_targets(table).iter().try_fold(
        Manifest::new(config.manifest_author.as_str()),
        |manifest, target| render_icon(source, target, out_dir, config, manifest),
    )?;

    log::info!(
        "✅ 图标集渲染完成 - 目录: {} 数量: {}",
        out_dir.display(),
        manifest.len()
    );

    Ok(manifest)
}

pub(crate) fn write_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| IconError::Encode(format!("保存图片 '{}' 失败：{}", path.display(), e)))
}
