//! # 图标合成模块（compositor）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载 → 去背景 → 缩放补齐 → ICO 编码 → 多目标写入”
//! 按职责拆分为多个子模块，每个阶段都是独立可测的函数。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责源文件存在性、签名校验与解码
//! - `pipeline`：负责阈值去背景、缩放与透明补齐
//! - `encoder`：负责多分辨率 ICO 编码
//! - `writer`：负责多目标写入与可选目标跳过
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性 + 签名 + 解码为 RGBA）
//!    ├─ pipeline.rs（去背景 + 缩放 + 补齐正方形）
//!    ├─ encoder.rs（多帧 ICO）
//!    └─ writer.rs（public 必写 / dist 可选）
//!    ↓
//! 返回 AppError 给入口
//! ```

mod config;
mod encoder;
mod error;
mod handler;
mod loader;
mod pipeline;
mod source;
mod writer;

pub use config::{CompositorConfig, DEFAULT_ICON_SCALE, DEFAULT_LIGHT_THRESHOLD, MAX_ICON_DIMENSION};
pub use encoder::{encode_icon, frame_sizes};
pub use error::IconError;
pub use handler::IconCompositor;
pub use loader::load_source;
pub use pipeline::{scale_and_square, scaled_dimensions, square_padding, strip_background};
pub use source::{Bitmap, ComposedIcon, CompositionReport, Padding, WriteReport};
pub use writer::write_artifact;
