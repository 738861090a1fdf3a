//! # 数据模型模块
//!
//! 定义轨迹帧与质子化物种分类结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `protonation/` 和 `commands/` 使用
//! - 子模块: frame, species

pub mod frame;
pub mod species;

pub use frame::{Atom, CellDimensions, Frame};
pub use species::{FrameClassification, OxygenCoordination, ProtonationSpecies, SpeciesStats};
