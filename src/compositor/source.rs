//! # 数据模型与中间结果
//!
//! ## 设计思路
//!
//! 将“流水线中间数据”和“一次合成的结果汇总”解耦：
//! - `Bitmap` 表示解码后的 RGBA 像素网格，在各阶段之间按值移交
//! - `Padding` 表示补成正方形画布时四边的透明像素数
//! - `WriteReport` / `CompositionReport` 表示输出阶段与整条链路的结果

use std::path::PathBuf;

/// RGBA8 位图。各阶段以所有权移交的方式串联，避免隐式别名。
pub type Bitmap = image::RgbaImage;

/// 补齐正方形画布时四边的透明像素数。
///
/// 奇数补齐量时，多出的 1 像素落在下/右侧。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

/// 写入阶段输出。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// 已写入的路径。
    pub written: Vec<PathBuf>,
    /// 父目录不存在而跳过的路径。
    pub skipped: Vec<PathBuf>,
}

/// 纯计算阶段（去背景 → 缩放补齐 → 编码）的产物。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedIcon {
    /// 正方形画布边长（像素）。
    pub side: u32,
    /// 容器内各帧边长，从大到小。
    pub frame_sizes: Vec<u32>,
    /// ICO 容器字节。
    pub bytes: Vec<u8>,
}

/// 一次完整合成的汇总结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionReport {
    pub source_width: u32,
    pub source_height: u32,
    pub side: u32,
    pub frame_sizes: Vec<u32>,
    pub byte_len: usize,
    pub writes: WriteReport,
}
