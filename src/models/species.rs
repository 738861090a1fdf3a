//! # 质子化物种模型
//!
//! 由氧原子的氢配位数推导的离散物种标签，以及单帧分类结果。
//!
//! | 配位数 | 物种 |
//! |--------|------|
//! | 1      | OH⁻  |
//! | 2      | H2O  |
//! | 3      | H3O+ |
//! | 其他   | other |
//!
//! ## 依赖关系
//! - 被 `protonation/classifier.rs` 构造
//! - 被 `protonation/colors.rs`, `protonation/export.rs` 使用

use std::fmt;

/// 氧原子的质子化状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtonationSpecies {
    /// OH⁻
    Hydroxide,
    /// H2O
    Water,
    /// H3O+
    Hydronium,
    /// 配位数为 0 或 ≥4
    Other,
}

impl ProtonationSpecies {
    pub fn from_coordination(count: usize) -> Self {
        match count {
            1 => ProtonationSpecies::Hydroxide,
            2 => ProtonationSpecies::Water,
            3 => ProtonationSpecies::Hydronium,
            _ => ProtonationSpecies::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProtonationSpecies::Hydroxide => "OH-",
            ProtonationSpecies::Water => "H2O",
            ProtonationSpecies::Hydronium => "H3O+",
            ProtonationSpecies::Other => "other",
        }
    }
}

impl fmt::Display for ProtonationSpecies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 单个氧原子的配位信息
#[derive(Debug, Clone, PartialEq)]
pub struct OxygenCoordination {
    pub position: [f64; 3],

    /// 截断距离内的氢原子数
    pub coordination: usize,

    /// 成键氢原子的编号
    pub bonded_hydrogens: Vec<i64>,
}

impl OxygenCoordination {
    pub fn species(&self) -> ProtonationSpecies {
        ProtonationSpecies::from_coordination(self.coordination)
    }
}

/// 单帧物种计数，用于诊断输出和 CSV 导出
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeciesStats {
    pub oh_minus: usize,
    pub h2o: usize,
    pub h3o_plus: usize,
    pub other: usize,
}

impl SpeciesStats {
    pub fn record(&mut self, species: ProtonationSpecies) {
        match species {
            ProtonationSpecies::Hydroxide => self.oh_minus += 1,
            ProtonationSpecies::Water => self.h2o += 1,
            ProtonationSpecies::Hydronium => self.h3o_plus += 1,
            ProtonationSpecies::Other => self.other += 1,
        }
    }
}

impl fmt::Display for SpeciesStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OH-={}, H2O={}, H3O+={}, other={}",
            self.oh_minus, self.h2o, self.h3o_plus, self.other
        )
    }
}

/// 单帧分类结果
///
/// `oxygens` 按帧内原子下标索引，与 `Frame::atoms` 等长；
/// 氧原子对应 `Some`，其余原子为 `None`。
#[derive(Debug, Clone, Default)]
pub struct FrameClassification {
    pub oxygens: Vec<Option<OxygenCoordination>>,
    pub stats: SpeciesStats,
}

impl FrameClassification {
    /// 按帧内下标查询氧原子配位信息
    pub fn oxygen(&self, index: usize) -> Option<&OxygenCoordination> {
        self.oxygens.get(index).and_then(|o| o.as_ref())
    }

    /// 配位数不在 {1, 2, 3} 的氧原子
    pub fn anomalies(&self) -> Vec<&OxygenCoordination> {
        self.oxygens
            .iter()
            .flatten()
            .filter(|o| o.species() == ProtonationSpecies::Other)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coordination() {
        assert_eq!(
            ProtonationSpecies::from_coordination(0),
            ProtonationSpecies::Other
        );
        assert_eq!(
            ProtonationSpecies::from_coordination(1),
            ProtonationSpecies::Hydroxide
        );
        assert_eq!(
            ProtonationSpecies::from_coordination(2),
            ProtonationSpecies::Water
        );
        assert_eq!(
            ProtonationSpecies::from_coordination(3),
            ProtonationSpecies::Hydronium
        );
        assert_eq!(
            ProtonationSpecies::from_coordination(4),
            ProtonationSpecies::Other
        );
    }

    #[test]
    fn test_stats_display() {
        let mut stats = SpeciesStats::default();
        stats.record(ProtonationSpecies::Water);
        stats.record(ProtonationSpecies::Water);
        stats.record(ProtonationSpecies::Hydronium);
        assert_eq!(stats.to_string(), "OH-=0, H2O=2, H3O+=1, other=0");
    }

    #[test]
    fn test_anomalies() {
        let oxygen = |position: [f64; 3], coordination: usize| OxygenCoordination {
            position,
            coordination,
            bonded_hydrogens: (0..coordination as i64).collect(),
        };
        let classification = FrameClassification {
            oxygens: vec![
                Some(oxygen([0.0, 0.0, 0.0], 2)),
                None,
                Some(oxygen([5.0, 5.0, 5.0], 0)),
                Some(oxygen([1.0, 2.0, 3.0], 4)),
            ],
            stats: SpeciesStats::default(),
        };

        let positions: Vec<[f64; 3]> = classification
            .anomalies()
            .iter()
            .map(|o| o.position)
            .collect();
        assert_eq!(positions, vec![[5.0, 5.0, 5.0], [1.0, 2.0, 3.0]]);
    }
}
