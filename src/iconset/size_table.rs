//! # 尺寸表模块
//!
//! ## 设计思路
//!
//! 各平台需要的图标规格是固定数据，用 `const` 数组承载不可变的强类型记录，
//! 而不是运行时拼装的嵌套字典。每条记录 × 每个倍率 = 一个 `IconTarget`。
//!
//! 调用方需保证同一目录下的规格不产生重名文件，这里不做去重校验。

use serde::{Deserialize, Serialize};

/// 逻辑尺寸（point），部分规格为小数（如 83.5）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalSize {
    pub width: f32,
    pub height: f32,
}

impl LogicalSize {
    pub const fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// `{w}x{h}`，整数值去掉 `.0`，小数保留。
    pub fn label(&self) -> String {
        format!("{}x{}", format_points(self.width), format_points(self.height))
    }
}

fn format_points(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// 设备类型标签，序列化为打包工具链识别的字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Idiom {
    #[serde(rename = "iphone")]
    Phone,
    #[serde(rename = "ipad")]
    Tablet,
    #[serde(rename = "ios-marketing")]
    Storefront,
    #[serde(rename = "mac")]
    DesktopIcon,
    #[serde(rename = "universal")]
    Universal,
}

impl Idiom {
    /// 桌面（Finder）图标需要圆角轮廓。
    pub fn wants_rounded_corners(self) -> bool {
        matches!(self, Self::DesktopIcon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Macos,
}

/// 单条规格：逻辑尺寸 + 倍率列表 + 设备类型 + 可选平台标签。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSpec {
    pub size: LogicalSize,
    pub scales: &'static [u32],
    pub idiom: Idiom,
    pub platform: Option<Platform>,
}

impl SizeSpec {
    const fn new(side: f32, scales: &'static [u32], idiom: Idiom) -> Self {
        Self {
            size: LogicalSize::square(side),
            scales,
            idiom,
            platform: None,
        }
    }

    /// 按倍率展开为渲染目标，保持表内顺序。
    pub fn targets(&self) -> impl Iterator<Item = IconTarget> + '_ {
        self.scales.iter().map(move |&scale| IconTarget {
            size: self.size,
            scale,
            idiom: self.idiom,
            platform: self.platform,
        })
    }
}

/// 一个 (规格, 倍率) 组合。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconTarget {
    pub size: LogicalSize,
    pub scale: u32,
    pub idiom: Idiom,
    pub platform: Option<Platform>,
}

impl IconTarget {
    /// 目标像素尺寸：`round(logical * scale)`，至少 1 像素。
    pub fn pixel_dimensions(&self) -> (u32, u32) {
        let scale = self.scale as f64;
        let width = (self.size.width as f64 * scale).round().max(1.0) as u32;
        let height = (self.size.height as f64 * scale).round().max(1.0) as u32;
        (width, height)
    }

    /// `{w}x{h}@{scale}x.png`
    pub fn filename(&self) -> String {
        format!("{}@{}x.png", self.size.label(), self.scale)
    }

    pub fn size_label(&self) -> String {
        self.size.label()
    }

    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

/// iOS 图标规格。
pub const IOS_ICON_SIZES: &[SizeSpec] = &[
    // 通知
    SizeSpec::new(20.0, &[2, 3], Idiom::Phone),
    // 设置
    SizeSpec::new(29.0, &[1, 2, 3], Idiom::Phone),
    // Spotlight
    SizeSpec::new(40.0, &[2, 3], Idiom::Phone),
    SizeSpec::new(60.0, &[2, 3], Idiom::Phone),
    SizeSpec::new(76.0, &[1, 2], Idiom::Tablet),
    // iPad Pro
    SizeSpec::new(83.5, &[2], Idiom::Tablet),
    // App Store
    SizeSpec::new(1024.0, &[1], Idiom::Storefront),
];

/// macOS（Finder）图标规格。
pub const MACOS_ICON_SIZES: &[SizeSpec] = &[
    SizeSpec::new(16.0, &[1, 2], Idiom::DesktopIcon),
    SizeSpec::new(32.0, &[1, 2], Idiom::DesktopIcon),
    SizeSpec::new(128.0, &[1, 2], Idiom::DesktopIcon),
    SizeSpec::new(256.0, &[1, 2], Idiom::DesktopIcon),
    SizeSpec::new(512.0, &[1, 2], Idiom::DesktopIcon),
];

/// 展开整张表。
pub fn expand_targets(table: &[SizeSpec]) -> Vec<IconTarget> {
    table.iter().flat_map(|spec| spec.targets()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn filename_strips_integer_suffix() {
        let target = IOS_ICON_SIZES[0].targets().next().expect("20pt has a scale");
        assert_eq!(target.filename(), "20x20@2x.png");
        assert_eq!(target.size_label(), "20x20");
        assert_eq!(target.scale_label(), "2x");
    }

    #[test]
    fn filename_keeps_fractional_points() {
        let target = IOS_ICON_SIZES[5].targets().next().expect("83.5pt has a scale");
        assert_eq!(target.filename(), "83.5x83.5@2x.png");
        assert_eq!(target.pixel_dimensions(), (167, 167));
    }

    #[test]
    fn ios_table_expands_to_expected_count() {
        let targets = expand_targets(IOS_ICON_SIZES);
        let scale_total: usize = IOS_ICON_SIZES.iter().map(|spec| spec.scales.len()).sum();
        assert_eq!(targets.len(), 13);
        assert_eq!(targets.len(), scale_total);
    }

    #[test]
    fn macos_table_expands_to_expected_count() {
        let targets = expand_targets(MACOS_ICON_SIZES);
        assert_eq!(targets.len(), 10);
        assert!(targets.iter().all(|t| t.idiom.wants_rounded_corners()));
    }

    #[test]
    fn only_desktop_idiom_wants_rounded_corners() {
        assert!(expand_targets(IOS_ICON_SIZES)
            .iter()
            .all(|t| !t.idiom.wants_rounded_corners()));
    }

    #[test]
    fn filenames_are_unique_per_table() {
        for table in [IOS_ICON_SIZES, MACOS_ICON_SIZES] {
            let targets = expand_targets(table);
            let names: HashSet<String> = targets.iter().map(IconTarget::filename).collect();
            assert_eq!(names.len(), targets.len());
        }
    }

    #[test]
    fn idiom_serializes_to_catalog_strings() {
        let json = serde_json::to_string(&[
            Idiom::Phone,
            Idiom::Tablet,
            Idiom::Storefront,
            Idiom::DesktopIcon,
            Idiom::Universal,
        ])
        .expect("serialize idioms");
        assert_eq!(json, r#"["iphone","ipad","ios-marketing","mac","universal"]"#);
        assert_eq!(serde_json::to_string(&Platform::Macos).expect("serialize"), r#""macos""#);
    }

    proptest! {
        #[test]
        fn pixel_dimensions_are_rounded_products(half_points in 2u32..2048, scale in 1u32..4) {
            let side = half_points as f32 / 2.0;
            let target = IconTarget {
                size: LogicalSize::square(side),
                scale,
                idiom: Idiom::Phone,
                platform: None,
            };
            let expected = (side as f64 * scale as f64).round() as u32;
            prop_assert_eq!(target.pixel_dimensions(), (expected, expected));
        }
    }
}
