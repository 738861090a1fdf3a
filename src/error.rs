//! # 统一错误处理模块
//!
//! 定义 protonation-analyzer 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分级
//! - `FrameError`: 单帧结构错误（原子数行非法、帧被截断等），终止后续帧的处理
//! - `AnalyzerError`: 顶层错误（文件 I/O、参数、CSV），由 `main.rs` 报告并以非零状态退出
//!
//! 原子行 token 不足属于可恢复情况，不在此定义，见 `parsers::extxyz::AtomLine`。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 单帧结构错误
///
/// `frame` 为 0 起始的帧序号，`line` 为 1 起始的输入行号。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    /// 原子数行不是非负整数（包括 `-1` 这类负数，不会被当作空帧）
    #[error("frame {frame}, line {line}: invalid atom count '{text}'")]
    InvalidAtomCount {
        frame: usize,
        line: usize,
        text: String,
    },

    #[error("frame {frame}, line {line}: missing header line")]
    MissingHeader { frame: usize, line: usize },

    #[error(
        "frame {frame}, line {line}: frame declares {declared} atoms but only {available} lines remain"
    )]
    TruncatedFrame {
        frame: usize,
        line: usize,
        declared: usize,
        available: usize,
    },

    #[error("frame {frame}, line {line}: invalid atom record ({reason})")]
    InvalidAtomRecord {
        frame: usize,
        line: usize,
        reason: String,
    },
}

/// protonation-analyzer 统一错误类型
#[derive(Error, Debug)]
pub enum AnalyzerError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file {path} not found")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AnalyzerError>;
