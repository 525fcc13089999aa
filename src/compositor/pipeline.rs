//! # 去背景与缩放补齐流水线模块
//!
//! ## 设计思路
//!
//! 每个阶段都是“接收位图所有权 → 返回位图”的纯函数，位图在阶段间显式移交，
//! 不存在跨阶段共享的可变缓冲。
//!
//! ## 实现思路
//!
//! 1. 逐像素阈值判断，命中则仅将 alpha 置 0
//! 2. 宽高按同一倍数缩放并四舍五入（尺寸未变时跳过重采样）
//! 3. 以透明像素补齐为正方形：上/左取 floor，下/右取 ceil

use fast_image_resize as fr;
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba};

use super::source::{Bitmap, Padding};
use super::IconError;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// 将浅色背景像素改为全透明。
///
/// 仅当 R、G、B 均不低于 `threshold` 时将 alpha 置 0，其余通道与其余像素保持不变。
pub fn strip_background(mut bitmap: Bitmap, threshold: u8) -> Bitmap {
    let mut removed: u64 = 0;

    for pixel in bitmap.pixels_mut() {
        let [r, g, b, _] = pixel.0;
        if r >= threshold && g >= threshold && b >= threshold {
            pixel.0[3] = 0;
            removed += 1;
        }
    }

    log::debug!(
        "🧹 背景移除完成 - 阈值: {} 透明化像素: {}/{}",
        threshold,
        removed,
        u64::from(bitmap.width()) * u64::from(bitmap.height())
    );

    bitmap
}

/// 按倍数计算缩放后的宽高（四舍五入，至少 1 像素）。
pub fn scaled_dimensions(width: u32, height: u32, scale: f64) -> (u32, u32) {
    let scale_one = |value: u32| -> u32 {
        let scaled = (f64::from(value) * scale).round();
        if scaled < 1.0 {
            1
        } else if scaled > f64::from(u32::MAX) {
            u32::MAX
        } else {
            scaled as u32
        }
    };

    (scale_one(width), scale_one(height))
}

/// 计算将 `width x height` 补齐为正方形所需的四边透明边距。
pub fn square_padding(width: u32, height: u32) -> Padding {
    let side = width.max(height);
    let pad_x = side - width;
    let pad_y = side - height;

    Padding {
        top: pad_y / 2,
        bottom: pad_y - pad_y / 2,
        left: pad_x / 2,
        right: pad_x - pad_x / 2,
    }
}

/// 缩放后补齐为透明正方形画布。
pub fn scale_and_square(
    bitmap: Bitmap,
    scale: f64,
    filter: FilterType,
) -> Result<Bitmap, IconError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(IconError::InvalidConfig(format!(
            "缩放倍数必须为正的有限数（当前：{}）",
            scale
        )));
    }

    let (width, height) = bitmap.dimensions();
    let (scaled_width, scaled_height) = scaled_dimensions(width, height, scale);

    let scaled = if (scaled_width, scaled_height) == (width, height) {
        bitmap
    } else {
        resize_exact(bitmap, scaled_width, scaled_height, filter)?
    };

    let padding = square_padding(scaled_width, scaled_height);
    let side = scaled_width.max(scaled_height);

    log::info!(
        "🧩 缩放补齐：{}x{} -> {}x{} -> {}x{}（padding={:?}, filter={:?}）",
        width,
        height,
        scaled_width,
        scaled_height,
        side,
        side,
        padding,
        filter
    );

    if padding.left == 0 && padding.right == 0 && padding.top == 0 && padding.bottom == 0 {
        return Ok(scaled);
    }

    let mut canvas = Bitmap::from_pixel(side, side, TRANSPARENT);
    image::imageops::replace(
        &mut canvas,
        &scaled,
        i64::from(padding.left),
        i64::from(padding.top),
    );

    Ok(canvas)
}

/// 精确缩放到目标尺寸；`fast_image_resize` 失败时回退 `image::imageops::resize`。
pub(crate) fn resize_exact(
    bitmap: Bitmap,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<Bitmap, IconError> {
    match resize_with_fast_image_resize(&bitmap, target_width, target_height, filter) {
        Ok(resized) => Ok(resized),
        Err(err) => {
            log::warn!(
                "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                err
            );
            Ok(resize_premultiplied(bitmap, target_width, target_height, filter))
        }
    }
}

/// 预乘 alpha 后用 `image::imageops::resize` 缩放，再还原。
///
/// 已透明化的浅色像素仍保留原 RGB，不预乘会在边缘渗出白边。
pub(crate) fn resize_premultiplied(
    mut bitmap: Bitmap,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Bitmap {
    for pixel in bitmap.pixels_mut() {
        let alpha = u32::from(pixel.0[3]);
        for channel in &mut pixel.0[..3] {
            *channel = ((u32::from(*channel) * alpha + 127) / 255) as u8;
        }
    }

    let mut resized = image::imageops::resize(&bitmap, target_width, target_height, filter);

    for pixel in resized.pixels_mut() {
        let alpha = u32::from(pixel.0[3]);
        for channel in &mut pixel.0[..3] {
            *channel = if alpha == 0 {
                0
            } else {
                ((u32::from(*channel) * 255 + alpha / 2) / alpha).min(255) as u8
            };
        }
    }

    resized
}

fn resize_with_fast_image_resize(
    bitmap: &Bitmap,
    target_width: u32,
    target_height: u32,
    filter: FilterType,
) -> Result<Bitmap, IconError> {
    let (src_width, src_height) = bitmap.dimensions();

    let src_image = fr::images::Image::from_vec_u8(
        src_width,
        src_height,
        bitmap.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

    let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

    let mut resizer = fr::Resizer::new();
    let options =
        fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(to_fast_filter(filter)));

    resizer
        .resize(&src_image, &mut dst_image, Some(&options))
        .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
}

fn to_fast_filter(filter: FilterType) -> fr::FilterType {
    match filter {
        FilterType::Nearest => fr::FilterType::Box,
        FilterType::Triangle => fr::FilterType::Bilinear,
        FilterType::CatmullRom => fr::FilterType::CatmullRom,
        FilterType::Gaussian => fr::FilterType::Mitchell,
        FilterType::Lanczos3 => fr::FilterType::Lanczos3,
    }
}
