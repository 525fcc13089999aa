//! # favicon 图标合成工具 — 命令行入口
//!
//! 无参数运行，以当前工作目录为项目根目录：
//! 读取 `public/favicon.png`，写出 `public/favicon.ico`，
//! 若 `dist/` 已存在则同时写出 `dist/favicon.ico`。

use favicon_compositor::compositor::{CompositorConfig, IconCompositor};
use favicon_compositor::error::AppError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let root = std::env::current_dir()?;
    IconCompositor::new(CompositorConfig::for_project_root(&root))?.run()?;
    Ok(())
}
