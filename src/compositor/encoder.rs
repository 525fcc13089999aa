//! # ICO 编码模块
//!
//! ## 设计思路
//!
//! 将正方形画布序列化为多分辨率 ICO 容器。画布本身作为最大帧原样嵌入，
//! 配置中更小的尺寸按需降采样后追加，帧顺序固定（从大到小），保证输出逐字节可复现。
//!
//! ## 实现思路
//!
//! - 先校验正方形与 1~256 边长限制（`ico` 对越界尺寸直接 panic，必须前置拦截）
//! - 逐帧 `IconDirEntry::encode`，写入内存缓冲

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::imageops::FilterType;

use super::config::MAX_ICON_DIMENSION;
use super::pipeline::resize_exact;
use super::source::Bitmap;
use super::IconError;

/// 计算容器内的帧尺寸：画布边长 + 所有小于边长的配置尺寸，去重后从大到小排列。
pub fn frame_sizes(side: u32, sizes: &[u32]) -> Vec<u32> {
    let mut frames: Vec<u32> = sizes.iter().copied().filter(|size| *size < side).collect();
    frames.push(side);
    frames.sort_unstable_by(|a, b| b.cmp(a));
    frames.dedup();
    frames
}

/// 将正方形位图编码为 ICO 字节。
pub fn encode_icon(
    square: &Bitmap,
    sizes: &[u32],
    filter: FilterType,
) -> Result<Vec<u8>, IconError> {
    let (width, height) = square.dimensions();
    if width != height {
        return Err(IconError::Encode(format!(
            "ICO 画布必须为正方形（当前：{}x{}）",
            width, height
        )));
    }

    if width == 0 || width > MAX_ICON_DIMENSION {
        return Err(IconError::Encode(format!(
            "ICO 画布尺寸超出格式限制：{}x{}（允许：1~{}）",
            width, height, MAX_ICON_DIMENSION
        )));
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for size in frame_sizes(width, sizes) {
        let frame = if size == width {
            square.clone()
        } else {
            resize_exact(square.clone(), size, size, filter)?
        };

        let image = IconImage::from_rgba_data(size, size, frame.into_raw());
        let entry = IconDirEntry::encode(&image)
            .map_err(|e| IconError::Encode(format!("编码 {}x{} 帧失败：{}", size, size, e)))?;
        icon_dir.add_entry(entry);

        log::debug!("🧱 ICO 帧：{}x{}", size, size);
    }

    let mut bytes = Vec::new();
    icon_dir
        .write(&mut bytes)
        .map_err(|e| IconError::Encode(format!("写入 ICO 容器失败：{}", e)))?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    fn checkerboard(side: u32) -> Bitmap {
        Bitmap::from_fn(side, side, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([200, 40, 40, 255])
            } else {
                Rgba([10, 20, 30, 128])
            }
        })
    }

    #[test]
    fn frame_sizes_are_descending_unique_and_bounded_by_side() {
        assert_eq!(frame_sizes(115, &[16, 32, 48]), vec![115, 48, 32, 16]);
        assert_eq!(frame_sizes(32, &[48, 32, 16, 16]), vec![32, 16]);
        assert_eq!(frame_sizes(8, &[16, 32]), vec![8]);
    }

    #[test]
    fn encoded_container_roundtrips_native_frame() {
        let canvas = checkerboard(40);
        let bytes = encode_icon(&canvas, &[16, 32, 48], FilterType::Triangle).expect("encode icon");

        let icon_dir = IconDir::read(Cursor::new(bytes)).expect("read icon dir");
        let widths: Vec<u32> = icon_dir.entries().iter().map(|entry| entry.width()).collect();
        assert_eq!(widths, vec![40, 32, 16]);

        let native = icon_dir.entries()[0].decode().expect("decode native frame");
        assert_eq!((native.width(), native.height()), (40, 40));
        assert_eq!(native.rgba_data(), canvas.as_raw().as_slice());
    }

    #[test]
    fn encoding_is_byte_identical_across_runs() {
        let canvas = checkerboard(48);
        let first = encode_icon(&canvas, &[16, 32], FilterType::Lanczos3).expect("first encode");
        let second = encode_icon(&canvas, &[16, 32], FilterType::Lanczos3).expect("second encode");

        assert_eq!(first, second);
    }

    #[test]
    fn non_square_bitmap_is_rejected() {
        let bitmap = Bitmap::new(10, 12);

        assert!(matches!(
            encode_icon(&bitmap, &[], FilterType::Nearest),
            Err(IconError::Encode(_))
        ));
    }

    #[test]
    fn oversized_canvas_is_rejected() {
        let bitmap = Bitmap::new(257, 257);

        assert!(matches!(
            encode_icon(&bitmap, &[16], FilterType::Nearest),
            Err(IconError::Encode(_))
        ));
    }

    #[test]
    fn max_size_canvas_is_accepted() {
        let bitmap = Bitmap::from_pixel(256, 256, Rgba([0, 0, 0, 0]));
        let bytes = encode_icon(&bitmap, &[], FilterType::Nearest).expect("encode 256 canvas");

        let icon_dir = IconDir::read(Cursor::new(bytes)).expect("read icon dir");
        assert_eq!(icon_dir.entries().len(), 1);
        assert_eq!(icon_dir.entries()[0].width(), 256);
    }
}
