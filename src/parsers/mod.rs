//! # 解析器模块
//!
//! 提供扩展 XYZ 轨迹格式的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: extxyz

pub mod extxyz;

pub use extxyz::parse_trajectory_file;
