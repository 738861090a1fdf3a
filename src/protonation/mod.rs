//! # 质子化状态分析模块
//!
//! 根据氧原子周围的氢配位数识别 OH⁻ / H2O / H3O+，并生成着色轨迹。
//!
//! ## 子模块
//! - `distance`: 最小镜像距离计算
//! - `classifier`: 物种分类
//! - `colors`: 着色表
//! - `export`: 轨迹与统计导出
//!
//! ## 依赖关系
//! - 被 `commands/colorize.rs` 使用
//! - 使用 `models/`

pub mod classifier;
pub mod colors;
pub mod distance;
pub mod export;

pub use classifier::{SpeciesClassifier, DEFAULT_OH_CUTOFF};
pub use colors::ColorTable;
