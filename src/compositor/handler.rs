//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconCompositor` 只负责流程编排，处理链路固定为：
//! 1. 校验配置
//! 2. 加载并解码源图片
//! 3. 去背景 → 缩放补齐 → 编码（纯计算，见 `compose`）
//! 4. 写入全部目标路径
//!
//! ## 实现思路
//!
//! - 位图在各阶段之间按值移交，阶段内独占缓冲。
//! - 记录 `load/compose/write/total` 阶段耗时，便于诊断。
//! - 源图片缺失时在任何写入之前返回错误。

use std::time::Instant;

use super::source::{Bitmap, ComposedIcon, CompositionReport};
use super::{
    encode_icon, frame_sizes, load_source, scale_and_square, strip_background, write_artifact,
    CompositorConfig, IconError,
};

/// 图标合成器。
pub struct IconCompositor {
    config: CompositorConfig,
}

impl IconCompositor {
    /// 根据配置创建合成器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use favicon_compositor::compositor::{CompositorConfig, IconCompositor};
    ///
    /// let compositor = IconCompositor::new(CompositorConfig::default())?;
    /// let report = compositor.run()?;
    /// # Ok::<(), favicon_compositor::compositor::IconError>(())
    /// ```
    pub fn new(config: CompositorConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// 去背景、缩放补齐并编码为 ICO，不涉及任何文件 I/O。
    pub fn compose(&self, bitmap: Bitmap) -> Result<ComposedIcon, IconError> {
        let stripped = strip_background(bitmap, self.config.light_threshold);
        let canvas = scale_and_square(stripped, self.config.icon_scale, self.config.resize_filter)?;
        let side = canvas.width();

        let bytes = encode_icon(&canvas, &self.config.icon_sizes, self.config.resize_filter)?;

        Ok(ComposedIcon {
            side,
            frame_sizes: frame_sizes(side, &self.config.icon_sizes),
            bytes,
        })
    }

    /// 处理主入口：读取源图片，合成 ICO，并写入全部目标路径。
    pub fn run(&self) -> Result<CompositionReport, IconError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let bitmap = load_source(&self.config.source_path)?;
        let (source_width, source_height) = bitmap.dimensions();
        let load_elapsed = load_start.elapsed();

        let compose_start = Instant::now();
        let composed = self.compose(bitmap)?;
        let compose_elapsed = compose_start.elapsed();

        let write_start = Instant::now();
        let writes = write_artifact(&composed.bytes, &self.config.output_paths())?;
        let write_elapsed = write_start.elapsed();

        let total_elapsed = total_start.elapsed();
        log::info!(
            "✅ 图标合成完成 - {}x{} -> {}x{} 帧: {:?} load={}ms compose={}ms write={}ms total={}ms",
            source_width,
            source_height,
            composed.side,
            composed.side,
            composed.frame_sizes,
            load_elapsed.as_millis(),
            compose_elapsed.as_millis(),
            write_elapsed.as_millis(),
            total_elapsed.as_millis()
        );

        Ok(CompositionReport {
            source_width,
            source_height,
            side: composed.side,
            frame_sizes: composed.frame_sizes,
            byte_len: composed.bytes.len(),
            writes,
        })
    }
}
