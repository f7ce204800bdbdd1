//! # 启动图合成模块
//!
//! ## 设计思路
//!
//! 三个固定画布（1x / 2x / 3x）各自生成一张不透明黑底图，源图等比缩放到
//! 画布宽高的一半以内（不裁剪）后居中贴上。源图透明区域透出黑色背景，
//! 输出始终完全不透明。
//!
//! 清单是手写的三条 `universal` 记录，与尺寸表无关。

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::config::LaunchCanvas;
use super::manifest::{ImageRecord, Manifest};
use super::pipeline::{fit_within, resize_exact};
use super::renderer::write_png;
use super::source::SourceImage;
use super::{IconError, IconsetConfig};

const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// 源图在画布上的摆放：左上角与缩放后尺寸。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// 计算居中摆放位置，缩放后的源图不超过画布宽高的一半。
pub fn placement_for(source: (u32, u32), canvas: &LaunchCanvas) -> Placement {
    let (width, height) = fit_within(source, (canvas.width / 2, canvas.height / 2));
    Placement {
        x: (canvas.width - width) / 2,
        y: (canvas.height - height) / 2,
        width,
        height,
    }
}

/// 合成单张启动图。
pub fn compose_launch_screen(
    source: &SourceImage,
    canvas: &LaunchCanvas,
    filter: FilterType,
) -> RgbaImage {
    let placement = placement_for(source.dimensions(), canvas);
    let scaled = resize_exact(source.pixels(), placement.width, placement.height, filter);

    let mut background = RgbaImage::from_pixel(canvas.width, canvas.height, BACKGROUND);
    composite_over(&mut background, &scaled, placement.x, placement.y);
    background
}

/// 按源图 alpha 混合到不透明底图上，结果 alpha 恒为 255。
fn composite_over(bottom: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    imageops::overlay(bottom, top, x as i64, y as i64);

    // blend 以浮点计算 alpha 后截断，半透明像素可能落到 254
    let right = (x + top.width()).min(bottom.width());
    let lower = (y + top.height()).min(bottom.height());
    for py in y..lower {
        for px in x..right {
            bottom.get_pixel_mut(px, py).0[3] = 255;
        }
    }
}

/// 渲染全部启动图并写入 `out_dir`，返回对应清单。
pub fn render_launch_screens(
    source: &SourceImage,
    out_dir: &Path,
    config: &IconsetConfig,
) -> Result<Manifest, IconError> {
    let mut manifest = Manifest::new(config.manifest_author.as_str());

    for canvas in &config.launch_canvases {
        let composed = compose_launch_screen(source, canvas, config.resize_filter);
        let filename = canvas.filename();
        let path = out_dir.join(&filename);
        write_png(&composed, &path)?;

        log::info!(
            "🚀 已保存启动图 {}（{}x{}）",
            path.display(),
            canvas.width,
            canvas.height
        );

        let record = ImageRecord::for_launch_screen(filename, canvas.scale_label);
        manifest = manifest.with_record(record);
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn source_of(width: u32, height: u32, pixel: Rgba<u8>) -> SourceImage {
        SourceImage::from_rgba(RgbaImage::from_pixel(width, height, pixel), 1)
            .expect("valid source")
    }

    /// 非黑像素的包围盒 `(min_x, min_y, max_x, max_y)`。
    fn lit_bounds(image: &RgbaImage) -> (u32, u32, u32, u32) {
        let mut bounds = (u32::MAX, u32::MAX, 0, 0);
        for (x, y, pixel) in image.enumerate_pixels() {
            if pixel.0[..3] != [0u8, 0, 0] {
                bounds.0 = bounds.0.min(x);
                bounds.1 = bounds.1.min(y);
                bounds.2 = bounds.2.max(x);
                bounds.3 = bounds.3.max(y);
            }
        }
        bounds
    }

    #[test]
    fn default_canvases_place_square_source_at_half_size() {
        for canvas in crate::iconset::config::DEFAULT_LAUNCH_CANVASES {
            let placement = placement_for((1024, 1024), &canvas);
            assert_eq!(placement.width, canvas.width / 2);
            assert_eq!(placement.x, canvas.width / 4);
        }
    }

    #[test]
    fn composed_square_source_is_centered() {
        let canvas = LaunchCanvas::square(64, "1x");
        let composed = compose_launch_screen(
            &source_of(128, 128, Rgba([255, 255, 255, 255])),
            &canvas,
            FilterType::Lanczos3,
        );

        assert_eq!(composed.dimensions(), (64, 64));
        assert_eq!(lit_bounds(&composed), (16, 16, 47, 47));
        assert_eq!(composed.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn wide_source_keeps_aspect_ratio() {
        let canvas = LaunchCanvas::square(64, "2x");
        let composed = compose_launch_screen(
            &source_of(256, 128, Rgba([255, 255, 255, 255])),
            &canvas,
            FilterType::Lanczos3,
        );

        assert_eq!(lit_bounds(&composed), (16, 24, 47, 39));
    }

    #[test]
    fn transparent_source_shows_black_background() {
        let canvas = LaunchCanvas::square(32, "3x");
        let composed = compose_launch_screen(
            &source_of(64, 64, Rgba([255, 0, 0, 0])),
            &canvas,
            FilterType::Lanczos3,
        );

        assert!(composed.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn half_transparent_source_blends_towards_black() {
        let mut bottom = RgbaImage::from_pixel(2, 2, BACKGROUND);
        let top = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 0, 128]));

        composite_over(&mut bottom, &top, 1, 1);

        assert_eq!(bottom.get_pixel(1, 1).0, [100, 50, 0, 255]);
        assert_eq!(bottom.get_pixel(0, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn every_alpha_level_composites_to_opaque() {
        let mut bottom = RgbaImage::from_pixel(256, 1, BACKGROUND);
        let top = RgbaImage::from_fn(256, 1, |x, _| Rgba([255, 255, 255, x as u8]));

        composite_over(&mut bottom, &top, 0, 0);

        for (x, _, pixel) in bottom.enumerate_pixels() {
            assert_eq!(pixel.0[3], 255, "alpha level {x}");
            assert!(pixel.0[0].abs_diff(x as u8) <= 1, "alpha level {x}: {:?}", pixel);
        }
    }

    #[test]
    fn render_launch_screens_writes_fixed_filenames() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut config = IconsetConfig::default();
        config.launch_canvases = vec![
            LaunchCanvas::square(40, "1x"),
            LaunchCanvas::square(80, "2x"),
            LaunchCanvas::square(120, "3x"),
        ];

        let manifest = render_launch_screens(
            &source_of(100, 100, Rgba([9, 9, 9, 255])),
            dir.path(),
            &config,
        )
        .expect("render launch screens");

        let names: Vec<&str> = manifest.images.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(
            names,
            vec!["LaunchScreen@1x.png", "LaunchScreen@2x.png", "LaunchScreen@3x.png"]
        );
        assert!(manifest.images.iter().all(|r| r.size.is_none()));

        let written = image::open(dir.path().join("LaunchScreen@3x.png")).expect("read launch png");
        assert_eq!((written.width(), written.height()), (120, 120));
    }

    proptest! {
        #[test]
        fn placement_fits_half_canvas_and_is_centered(
            width in 1u32..4000,
            height in 1u32..4000,
            side in 4u32..9000,
        ) {
            let canvas = LaunchCanvas::square(side, "1x");
            let p = placement_for((width, height), &canvas);

            prop_assert!(p.width.max(p.height) <= side / 2);
            let center_x = p.x as f64 + p.width as f64 / 2.0;
            let center_y = p.y as f64 + p.height as f64 / 2.0;
            prop_assert!((center_x - side as f64 / 2.0).abs() <= 1.0);
            prop_assert!((center_y - side as f64 / 2.0).abs() <= 1.0);
        }
    }
}
