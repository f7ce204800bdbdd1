//! # 圆角遮罩模块
//!
//! 桌面图标的轮廓完全由遮罩决定：生成单通道硬边遮罩（内部 255、外部 0），
//! 再用它整体替换图像原有的 alpha 通道。原 alpha 数据被丢弃，不做混合。

use image::imageops::FilterType;
use image::{GrayImage, Luma, RgbaImage};

use super::pipeline::fit_center;

const OPAQUE: u8 = 255;
const TRANSPARENT: u8 = 0;

/// 圆角半径：较短边 × `ratio`。
pub fn corner_radius(width: u32, height: u32, ratio: f32) -> f32 {
    width.min(height) as f32 * ratio
}

/// 生成 `width x height` 的圆角矩形遮罩。
///
/// 以像素中心采样，落在圆角矩形内为不透明，否则全透明。
pub fn rounded_rect_mask(width: u32, height: u32, radius: f32) -> GrayImage {
    let w = width as f32;
    let h = height as f32;
    let r = radius.clamp(0.0, w.min(h) / 2.0);

    GrayImage::from_fn(width, height, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // 最近的圆角圆心
        let cx = px.clamp(r, w - r);
        let cy = py.clamp(r, h - r);
        let dx = px - cx;
        let dy = py - cy;

        if dx * dx + dy * dy <= r * r {
            Luma([OPAQUE])
        } else {
            Luma([TRANSPARENT])
        }
    })
}

/// 应用圆角：图像先居中适配到遮罩尺寸，再用遮罩替换 alpha。
pub fn apply_rounded_corners(image: &RgbaImage, ratio: f32, filter: FilterType) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mask = rounded_rect_mask(width, height, corner_radius(width, height, ratio));

    let mut fitted = fit_center(image, mask.width(), mask.height(), filter);
    replace_alpha(&mut fitted, &mask);
    fitted
}

/// 用遮罩整体替换 alpha 通道。
pub(crate) fn replace_alpha(image: &mut RgbaImage, mask: &GrayImage) {
    for (pixel, alpha) in image.pixels_mut().zip(mask.pixels()) {
        pixel.0[3] = alpha.0[0];
    }
}
