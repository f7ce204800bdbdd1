//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 加载阶段负责三件事：路径存在性检查、解码并统一为带透明通道的 RGBA、
//! 最小分辨率校验。任何一步失败都立即返回，后续阶段不会创建任何输出。
//!
//! ## 实现思路
//!
//! 1. 路径不可解析 → `MissingSource`
//! 2. 按内容猜测格式后解码（不依赖扩展名）
//! 3. 无 alpha 通道的色彩模式转换为 RGBA8
//! 4. 宽高校验 → `InsufficientResolution`

use std::path::Path;

use image::{DynamicImage, ImageReader};

use super::source::SourceImage;
use super::{IconError, IconsetConfig};

/// 从磁盘加载源图并完成校验。
///
/// # 示例
/// ```rust,ignore
/// use appicon_forge::iconset::{load_source, IconsetConfig};
///
/// let source = load_source(std::path::Path::new("source.png"), &IconsetConfig::default())?;
/// assert!(source.width() >= 1024);
/// # Ok::<(), appicon_forge::iconset::IconError>(())
/// ```
pub fn load_source(path: &Path, config: &IconsetConfig) -> Result<SourceImage, IconError> {
    log::info!("📁 开始读取源图 - 路径: {}", path.display());

    if !path.is_file() {
        return Err(IconError::MissingSource(path.to_path_buf()));
    }

    let decoded = decode_file(path)?;
    let rgba = normalize_to_rgba(decoded);
    let source = SourceImage::from_rgba(rgba, config.min_source_dimension)?;

    log::info!(
        "✅ 源图读取成功 - 尺寸: {}x{}",
        source.width(),
        source.height()
    );

    Ok(source)
}

fn decode_file(path: &Path) -> Result<DynamicImage, IconError> {
    let reader = ImageReader::open(path)
        .map_err(|e| IconError::FileSystem(format!("无法打开源图：{}", e)))?
        .with_guessed_format()
        .map_err(|e| IconError::Decode(format!("无法识别图片格式：{}", e)))?;

    reader
        .decode()
        .map_err(|e| IconError::Decode(format!("源图解码失败：{}", e)))
}

/// 统一为 8 位 RGBA。
fn normalize_to_rgba(image: DynamicImage) -> image::RgbaImage {
    match image {
        DynamicImage::ImageRgba8(rgba) => rgba,
        other => {
            if !other.color().has_alpha() {
                log::debug!("🎨 源图不含透明通道（{:?}），转换为 RGBA", other.color());
            }
            other.to_rgba8()
        }
    }
}
