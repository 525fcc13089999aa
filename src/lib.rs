//! # favicon 图标合成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  public/favicon.png                                      │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ load_source（解码为 RGBA8）
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↓            compositor                            │
//! │  strip_background ── 浅色像素 alpha 置 0                 │
//! │       ↓                                                  │
//! │  scale_and_square ── 等比放大 + 透明补齐正方形           │
//! │       ↓                                                  │
//! │  encode_icon ─────── 多分辨率 ICO                        │
//! │       ↓                                                  │
//! │  write_artifact ──── public 必写 / dist 存在才写         │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↓
//!   public/favicon.ico（+ dist/favicon.ico）
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，入口的返回类型 |
//! | [`compositor`] | 源图加载、去背景、缩放补齐、ICO 编码、多目标写入 |

pub mod compositor;
pub mod error;
