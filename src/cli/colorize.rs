//! # 着色命令 CLI 定义
//!
//! 读取扩展 XYZ 轨迹，按氧原子质子化状态着色后写出。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/colorize.rs`

use crate::protonation::DEFAULT_OH_CUTOFF;
use clap::Args;
use std::path::PathBuf;

/// 着色命令参数
#[derive(Args, Debug)]
pub struct ColorizeArgs {
    /// Input trajectory followed by the output path: <input_xyz_file> <output_xyz_file>
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Maximum O-H distance counted as a bond
    #[arg(long, default_value_t = DEFAULT_OH_CUTOFF)]
    pub cutoff: f64,

    /// Print species statistics every N frames
    #[arg(long, default_value_t = 10)]
    pub stats_every: usize,

    /// Also write per-frame species counts to this CSV file
    #[arg(long)]
    pub stats_csv: Option<PathBuf>,

    /// Number of parallel jobs for classification (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
