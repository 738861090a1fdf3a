//! # 质子化物种分类器
//!
//! 对每个氧原子统计截断距离内的氢原子数（配位数），并映射为物种标签。
//!
//! ## 算法概述
//! 1. 按物种预筛选帧内的氢原子
//! 2. 对每个氧原子遍历全部氢原子，距离 ≤ 截断距离即视为成键
//! 3. 配位数 1/2/3 -> OH⁻/H2O/H3O+，其余归为 other
//!
//! 穷举 O(n_O × n_H)，距离判定与 `distance::distance` 逐位一致。
//!
//! ## 依赖关系
//! - 被 `commands/colorize.rs` 调用
//! - 使用 `protonation/distance.rs`
//! - 使用 `models/` 的 Atom, Frame, FrameClassification

use crate::models::{
    Atom, CellDimensions, Frame, FrameClassification, OxygenCoordination, SpeciesStats,
};
use crate::protonation::distance;

/// 默认 O-H 成键截断距离
pub const DEFAULT_OH_CUTOFF: f64 = 1.3;

/// 物种分类器
#[derive(Debug, Clone, Copy)]
pub struct SpeciesClassifier {
    /// O-H 成键最大距离（与坐标同单位）
    cutoff: f64,
}

impl Default for SpeciesClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_OH_CUTOFF)
    }
}

impl SpeciesClassifier {
    pub fn new(cutoff: f64) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// 分类一整帧
    pub fn classify_frame(&self, frame: &Frame) -> FrameClassification {
        self.classify(&frame.atoms, frame.cell.as_ref())
    }

    /// 分类原子列表
    ///
    /// 返回结果中 `oxygens[i]` 对应 `atoms[i]`，且仅氧原子为 `Some`。
    pub fn classify(
        &self,
        atoms: &[Atom],
        cell: Option<&CellDimensions>,
    ) -> FrameClassification {
        let hydrogens: Vec<&Atom> = atoms.iter().filter(|a| a.is_hydrogen()).collect();

        let mut stats = SpeciesStats::default();
        let oxygens: Vec<Option<OxygenCoordination>> = atoms
            .iter()
            .map(|atom| {
                if !atom.is_oxygen() {
                    return None;
                }

                let bonded_hydrogens: Vec<i64> = hydrogens
                    .iter()
                    .filter(|h| {
                        distance::distance(&atom.position, &h.position, cell) <= self.cutoff
                    })
                    .map(|h| h.id)
                    .collect();

                let info = OxygenCoordination {
                    position: atom.position,
                    coordination: bonded_hydrogens.len(),
                    bonded_hydrogens,
                };
                stats.record(info.species());
                Some(info)
            })
            .collect();

        FrameClassification { oxygens, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProtonationSpecies;

    fn box10() -> CellDimensions {
        CellDimensions::new(10.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_hydroxide() {
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.0], 1),
            Atom::new("H", [0.0, 0.0, 0.9], 2),
        ];
        let result = SpeciesClassifier::default().classify(&atoms, Some(&box10()));

        let o = result.oxygen(0).unwrap();
        assert_eq!(o.coordination, 1);
        assert_eq!(o.bonded_hydrogens, vec![2]);
        assert_eq!(o.species(), ProtonationSpecies::Hydroxide);
        assert!(result.oxygen(1).is_none());
        assert_eq!(result.stats.oh_minus, 1);
    }

    #[test]
    fn test_water() {
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.0], 1),
            Atom::new("H", [0.0, 0.0, 0.9], 2),
            Atom::new("H", [1.0, 0.0, 0.0], 3),
        ];
        let result = SpeciesClassifier::default().classify(&atoms, Some(&box10()));
        assert_eq!(result.oxygen(0).unwrap().species(), ProtonationSpecies::Water);
        assert_eq!(result.stats.h2o, 1);
    }

    #[test]
    fn test_hydronium_and_other() {
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.0], 1),
            Atom::new("H", [0.9, 0.0, 0.0], 2),
            Atom::new("H", [0.0, 0.9, 0.0], 3),
            Atom::new("H", [0.0, 0.0, 0.9], 4),
            // 远离所有氢原子的氧
            Atom::new("O", [5.0, 5.0, 5.0], 5),
        ];
        let result = SpeciesClassifier::default().classify(&atoms, None);

        assert_eq!(
            result.oxygen(0).unwrap().species(),
            ProtonationSpecies::Hydronium
        );
        assert_eq!(result.oxygen(4).unwrap().coordination, 0);
        assert_eq!(result.oxygen(4).unwrap().species(), ProtonationSpecies::Other);
        assert_eq!(result.stats.h3o_plus, 1);
        assert_eq!(result.stats.other, 1);
    }

    #[test]
    fn test_four_hydrogens_is_other() {
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.0], 1),
            Atom::new("H", [0.9, 0.0, 0.0], 2),
            Atom::new("H", [-0.9, 0.0, 0.0], 3),
            Atom::new("H", [0.0, 0.9, 0.0], 4),
            Atom::new("H", [0.0, -0.9, 0.0], 5),
        ];
        let result = SpeciesClassifier::default().classify(&atoms, None);
        assert_eq!(result.oxygen(0).unwrap().coordination, 4);
        assert_eq!(result.stats.other, 1);
    }

    #[test]
    fn test_periodic_bond_across_boundary() {
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.0], 1),
            Atom::new("H", [9.5, 0.0, 0.0], 2),
        ];
        let classifier = SpeciesClassifier::default();

        let periodic = classifier.classify(&atoms, Some(&box10()));
        assert_eq!(periodic.oxygen(0).unwrap().coordination, 1);

        let open = classifier.classify(&atoms, None);
        assert_eq!(open.oxygen(0).unwrap().coordination, 0);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let atoms = vec![
            Atom::new("O", [0.0, 0.0, 0.0], 1),
            Atom::new("H", [1.25, 0.0, 0.0], 2),
        ];
        let result = SpeciesClassifier::new(1.25).classify(&atoms, None);
        assert_eq!(result.oxygen(0).unwrap().coordination, 1);

        let result = SpeciesClassifier::new(1.0).classify(&atoms, None);
        assert_eq!(result.oxygen(0).unwrap().coordination, 0);
    }

    #[test]
    fn test_every_oxygen_has_entry() {
        let atoms = vec![
            Atom::new("Xe", [2.0, 2.0, 2.0], 1),
            Atom::new("O", [0.0, 0.0, 0.0], 2),
            Atom::new("O", [3.0, 0.0, 0.0], 3),
            Atom::new("H", [3.0, 0.0, 1.0], 4),
        ];
        let result = SpeciesClassifier::default().classify(&atoms, None);

        assert_eq!(result.oxygens.len(), atoms.len());
        assert_eq!(result.oxygens.iter().filter(|o| o.is_some()).count(), 2);
        assert_eq!(result.stats.h2o + result.stats.oh_minus + result.stats.other, 2);
    }
}
