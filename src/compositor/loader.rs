//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 源图片缺失是整条链路中唯一的“预期内致命错误”，必须在任何处理之前识别。
//! 其余校验（签名、解码）尽早失败，保证后续阶段只面对合法的 RGBA 数据。
//!
//! ## 实现思路
//!
//! - 存在性检查 → `NotFound`
//! - 读取字节 + `infer` 签名嗅探：仅拒绝“已识别且不是图片”的内容，
//!   未识别的签名（如 PNM、QOI）交给解码器判断
//! - `image` 解码并统一转换为 RGBA8（缺失的 alpha 通道补为不透明）

use std::path::Path;

use super::source::Bitmap;
use super::IconError;

/// 读取并解码源图片。
pub fn load_source(path: impl AsRef<Path>) -> Result<Bitmap, IconError> {
    let path = path.as_ref();
    log::info!("📁 开始读取源图片 - 路径: {}", path.display());

    if !path.exists() {
        return Err(IconError::NotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| IconError::FileSystem(format!("无法读取源图片：{}", e)))?;
    validate_image_signature(&bytes)?;

    let decoded = image::load_from_memory(&bytes)
        .map_err(|e| IconError::Decode(format!("图片解码失败：{}", e)))?;
    let bitmap = decoded.to_rgba8();

    log::info!(
        "✅ 源图片解码成功 - 尺寸: {}x{} 原始色彩: {:?}",
        bitmap.width(),
        bitmap.height(),
        decoded.color()
    );

    Ok(bitmap)
}

fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
    if bytes.is_empty() {
        return Err(IconError::Decode("图片内容为空".to_string()));
    }

    let Some(kind) = infer::get(bytes) else {
        log::debug!("🔍 未识别的文件签名，交由解码器判断");
        return Ok(());
    };

    if kind.matcher_type() != infer::MatcherType::Image {
        return Err(IconError::Decode(format!(
            "文件签名不是图片类型：{}",
            kind.mime_type()
        )));
    }

    Ok(())
}
