//! # 像素变换流水线模块
//!
//! ## 设计思路
//!
//! 所有缩放都集中在这里，保证图标与启动图使用同一套高质量滤镜。
//! 优先使用 `fast_image_resize` 的卷积实现（SIMD + alpha 预乘），
//! 失败时回退 `image::imageops::resize`，两者使用同一滤镜语义。
//!
//! ## 实现思路
//!
//! - `resize_exact`：缩放到精确像素尺寸
//! - `fit_center`：等比覆盖目标尺寸后居中裁剪（宽高比不一致时）
//! - `fit_within`：计算等比缩放后不超过边界框的尺寸（不裁剪）

use fast_image_resize as fr;
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgba, RgbaImage};

use super::IconError;

/// 缩放到精确尺寸。
pub fn resize_exact(image: &RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }

    match resize_with_fast_image_resize(image, width, height, filter) {
        Ok(resized) => resized,
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            imageops::resize(image, width, height, filter)
        }
    }
}

/// 等比覆盖 `width x height` 后居中裁剪，输出尺寸恰好为目标尺寸。
pub fn fit_center(image: &RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    let (src_width, src_height) = image.dimensions();
    if (src_width, src_height) == (width, height) {
        return image.clone();
    }

    let (x, y, crop_width, crop_height) = center_crop_region(src_width, src_height, width, height);
    if (crop_width, crop_height) == (src_width, src_height) {
        return resize_exact(image, width, height, filter);
    }

    let cropped = imageops::crop_imm(image, x, y, crop_width, crop_height).to_image();
    resize_exact(&cropped, width, height, filter)
}

/// 源图中与目标宽高比一致、居中的最大裁剪区域 `(x, y, w, h)`。
pub(crate) fn center_crop_region(
    src_width: u32,
    src_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32, u32, u32) {
    let (sw, sh) = (src_width as u64, src_height as u64);
    let (tw, th) = (target_width.max(1) as u64, target_height.max(1) as u64);

    let (crop_width, crop_height) = if sw * th > sh * tw {
        // 源图更宽，裁左右
        let w = ((sh * tw) as f64 / th as f64).round() as u64;
        (w.clamp(1, sw), sh)
    } else {
        let h = ((sw * th) as f64 / tw as f64).round() as u64;
        (sw, h.clamp(1, sh))
    };

    let x = (sw - crop_width) / 2;
    let y = (sh - crop_height) / 2;
    (x as u32, y as u32, crop_width as u32, crop_height as u32)
}

/// 等比缩放后恰好放进 `bound_width x bound_height` 的尺寸（可放大，不裁剪）。
pub fn fit_within(
    (width, height): (u32, u32),
    (bound_width, bound_height): (u32, u32),
) -> (u32, u32) {
    let ratio = (bound_width as f64 / width.max(1) as f64)
        .min(bound_height as f64 / height.max(1) as f64);

    let fitted_width = ((width as f64 * ratio).round() as u32).clamp(1, bound_width.max(1));
    let fitted_height = ((height as f64 * ratio).round() as u32).clamp(1, bound_height.max(1));
    (fitted_width, fitted_height)
}

fn resize_with_fast_image_resize(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<RgbaImage, IconError> {
    let (src_width, src_height) = image.dimensions();

    let src_image = fr::images::ImageRef::new(
        src_width,
        src_height,
        image.as_raw(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options = fr::ResizeOptions::new().resize_alg(to_resize_alg(filter));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_resize_alg(filter: FilterType) -> fr::ResizeAlg {
    let fast_filter = match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    };
    fr::ResizeAlg::Convolution(fast_filter)
}
