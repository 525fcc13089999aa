//! # 产物写入模块
//!
//! 同一份字节写入多个目标路径。父目录不存在的目标（例如尚未构建的 `dist/`）
//! 视为“可选目标”直接跳过，不算错误。

use std::path::{Path, PathBuf};

use super::source::WriteReport;
use super::IconError;

/// 将 `bytes` 写入 `paths` 中每个父目录已存在的路径。
pub fn write_artifact(bytes: &[u8], paths: &[PathBuf]) -> Result<WriteReport, IconError> {
    let mut report = WriteReport::default();

    for path in paths {
        if !parent_exists(path) {
            log::debug!("⏭️ 目标目录不存在，跳过：{}", path.display());
            report.skipped.push(path.clone());
            continue;
        }

        std::fs::write(path, bytes).map_err(|e| {
            IconError::FileSystem(format!("写入 {} 失败：{}", path.display(), e))
        })?;

        log::info!("💾 已写入 {}（{} 字节）", path.display(), bytes.len());
        report.written.push(path.clone());
    }

    Ok(report)
}

fn parent_exists(path: &Path) -> bool {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.is_dir(),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("favicon-writer-test-{nanos}"));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn writes_existing_targets_and_skips_missing_parents() {
        let dir = unique_temp_dir();
        std::fs::create_dir_all(dir.join("public")).expect("create public");

        let primary = dir.join("public").join("favicon.ico");
        let secondary = dir.join("dist").join("favicon.ico");
        let report = write_artifact(b"ico-bytes", &[primary.clone(), secondary.clone()])
            .expect("write artifact");

        assert_eq!(report.written, vec![primary.clone()]);
        assert_eq!(report.skipped, vec![secondary.clone()]);
        assert_eq!(std::fs::read(&primary).expect("read primary"), b"ico-bytes");
        assert!(!secondary.exists());
        assert!(!dir.join("dist").exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn writes_same_bytes_to_every_existing_target() {
        let dir = unique_temp_dir();
        std::fs::create_dir_all(dir.join("public")).expect("create public");
        std::fs::create_dir_all(dir.join("dist")).expect("create dist");

        let paths = vec![dir.join("public").join("favicon.ico"), dir.join("dist").join("favicon.ico")];
        let report = write_artifact(&[1, 2, 3], &paths).expect("write artifact");

        assert_eq!(report.written, paths);
        assert!(report.skipped.is_empty());
        for path in &paths {
            assert_eq!(std::fs::read(path).expect("read target"), vec![1, 2, 3]);
        }

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn bare_file_name_counts_as_existing_parent() {
        assert!(parent_exists(Path::new("favicon.ico")));
    }

    #[test]
    fn write_into_directory_path_is_file_system_error() {
        let dir = unique_temp_dir();
        let target = dir.join("occupied");
        std::fs::create_dir_all(&target).expect("create occupying dir");

        let result = write_artifact(b"x", &[target]);

        assert!(matches!(result, Err(IconError::FileSystem(_))));
        let _ = std::fs::remove_dir_all(dir);
    }
}
