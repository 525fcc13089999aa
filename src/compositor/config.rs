//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `CompositorConfig`，保证一次合成的行为可观测、可测试。
//! 入口不接受任何参数，`Default` 即为生产配置。
//!
//! ## 实现思路
//!
//! - `Default` 提供与站点约定一致的路径与阈值。
//! - `for_project_root` 将相对路径解析到指定项目根目录（测试隔离用）。
//! - `validate` 在流水线开始前集中校验，尽早失败。

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use super::IconError;

/// 浅色背景阈值：R、G、B 均不低于该值的像素视为背景。
pub const DEFAULT_LIGHT_THRESHOLD: u8 = 235;
/// 图标放大倍数，让图标在 favicon 中显得略大。
pub const DEFAULT_ICON_SCALE: f64 = 1.15;
/// ICO 单帧允许的最大边长。
pub const MAX_ICON_DIMENSION: u32 = 256;

/// 图标合成配置。
#[derive(Debug, Clone)]
pub struct CompositorConfig {
    /// 源图片路径。
    pub source_path: PathBuf,
    /// 必写输出路径（public 资源目录）。
    pub primary_output: PathBuf,
    /// 可选输出路径：父目录不存在时静默跳过。
    pub secondary_outputs: Vec<PathBuf>,
    /// 背景移除阈值（0~255）。
    pub light_threshold: u8,
    /// 宽高统一缩放倍数。
    pub icon_scale: f64,
    /// 缩放与多尺寸帧生成使用的滤镜。
    pub resize_filter: FilterType,
    /// 额外嵌入的小尺寸帧边长（仅嵌入小于画布边长的部分）。
    pub icon_sizes: Vec<u32>,
}

impl Default for CompositorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("public").join("favicon.png"),
            primary_output: PathBuf::from("public").join("favicon.ico"),
            secondary_outputs: vec![PathBuf::from("dist").join("favicon.ico")],
            light_threshold: DEFAULT_LIGHT_THRESHOLD,
            icon_scale: DEFAULT_ICON_SCALE,
            resize_filter: FilterType::Lanczos3,
            icon_sizes: vec![16, 32, 48],
        }
    }
}

impl CompositorConfig {
    /// 以默认配置为基础，将所有路径解析到 `root` 之下。
    pub fn for_project_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let defaults = Self::default();

        Self {
            source_path: root.join(&defaults.source_path),
            primary_output: root.join(&defaults.primary_output),
            secondary_outputs: defaults
                .secondary_outputs
                .iter()
                .map(|path| root.join(path))
                .collect(),
            ..defaults
        }
    }

    /// 全部输出路径：必写路径在前，可选路径在后。
    pub fn output_paths(&self) -> Vec<PathBuf> {
        std::iter::once(self.primary_output.clone())
            .chain(self.secondary_outputs.iter().cloned())
            .collect()
    }

    /// 校验配置是否可用于一次合成。
    pub fn validate(&self) -> Result<(), IconError> {
        if !self.icon_scale.is_finite() || self.icon_scale <= 0.0 {
            return Err(IconError::InvalidConfig(format!(
                "icon_scale 必须为正的有限数（当前：{}）",
                self.icon_scale
            )));
        }

        if self.primary_output.as_os_str().is_empty() {
            return Err(IconError::InvalidConfig("primary_output 不能为空".to_string()));
        }

        if let Some(size) = self
            .icon_sizes
            .iter()
            .find(|size| !(1..=MAX_ICON_DIMENSION).contains(*size))
        {
            return Err(IconError::InvalidConfig(format!(
                "icon_sizes 中的 {} 超出范围（1~{}）",
                size, MAX_ICON_DIMENSION
            )));
        }

        Ok(())
    }
}
