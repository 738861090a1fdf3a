//! # protonation-analyzer - 轨迹质子化状态着色工具
//!
//! 读取扩展 XYZ 分子动力学轨迹，按氧原子周围的氢配位数识别
//! OH⁻ (1 H)、H2O (2 H)、H3O+ (3 H)，并为每个原子追加 `color:R:3` 属性，
//! 供 OVITO 等可视化软件直接着色。
//!
//! ## 用法
//! ```text
//! protonation-analyzer <input_xyz_file> <output_xyz_file> [--cutoff 1.3] [--stats-csv stats.csv]
//! ```
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/          (命令行参数定义)
//!   ├── commands/     (命令执行逻辑)
//!   │     ├── parsers/      (扩展 XYZ 解析)
//!   │     ├── protonation/  (距离、分类、着色、导出)
//!   │     └── models/       (数据模型)
//!   ├── utils/        (工具函数)
//!   └── error.rs      (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod protonation;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error_chain(&e);
        std::process::exit(1);
    }
}
