//! # 进度条工具
//!
//! 封装 `indicatif`，为逐帧分类提供进度条。
//!
//! ## 依赖关系
//! - 被 `commands/colorize.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

/// 少于该帧数时不显示进度条
const MIN_FRAMES_FOR_BAR: usize = 50;

/// 创建逐帧处理进度条
///
/// 短轨迹返回隐藏的进度条，调用方无需区分。
pub fn create_frame_bar(frames: usize, message: &str) -> ProgressBar {
    if frames < MIN_FRAMES_FOR_BAR {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} frames ({per_sec}, {eta}) {msg}",
        )
        .unwrap()
        .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
