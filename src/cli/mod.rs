//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `protonation-analyzer <input> <output> [--cutoff] [--stats-every] [--stats-csv] [--jobs]`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: colorize

pub mod colorize;

use clap::Parser;

/// protonation-analyzer - 轨迹质子化状态着色工具
#[derive(Parser)]
#[command(name = "protonation-analyzer")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Color oxygen atoms in an extended XYZ trajectory by protonation state (OH-, H2O, H3O+)",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub args: colorize::ColorizeArgs,
}
