//! # 美化输出工具
//!
//! 提供统一的终端输出样式，物种计数按着色方案上色。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 模块使用
//! - 使用 `models/species.rs` 的 SpeciesStats
//! - 使用 `colored` crate

use crate::models::SpeciesStats;

use colored::Colorize;
use std::error::Error;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印错误及其完整的 source 链
pub fn print_error_chain(err: &dyn Error) {
    print_error(&err.to_string());
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("      {} {}", "caused by:".dimmed(), cause);
        source = cause.source();
    }
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印单帧物种统计，计数颜色与输出轨迹的着色一致
pub fn print_frame_stats(frame: usize, stats: &SpeciesStats) {
    println!(
        "{} Frame {} stats: {}={}, {}={}, {}={}, {}={}",
        "[*]".blue().bold(),
        frame,
        "OH-".blue(),
        stats.oh_minus,
        "H2O".red(),
        stats.h2o,
        "H3O+".truecolor(255, 128, 0),
        stats.h3o_plus,
        "other".magenta(),
        stats.other
    );
}
