//! # 源图模型
//!
//! `SourceImage` 是加载并校验后的 RGBA 源图，构造后只读，每次渲染都从它借用像素。

use image::RgbaImage;

use super::IconError;

/// 校验通过的源图。
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

impl SourceImage {
    /// 从 RGBA 缓冲构造，宽或高小于 `min_dimension` 时拒绝。
    pub fn from_rgba(pixels: RgbaImage, min_dimension: u32) -> Result<Self, IconError> {
        let (width, height) = pixels.dimensions();
        if width < min_dimension || height < min_dimension {
            return Err(IconError::InsufficientResolution {
                width,
                height,
                min: min_dimension,
            });
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}
