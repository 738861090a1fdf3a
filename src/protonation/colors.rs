//! # 着色表
//!
//! 物种/元素标签到 RGB 三元组（[0, 1] 区间）的固定映射，运行期间只读。
//!
//! | 键     | 颜色   | RGB             |
//! |--------|--------|-----------------|
//! | Xe     | Grey   | 0.5 0.5 0.5     |
//! | H      | White  | 1.0 1.0 1.0     |
//! | OH⁻    | Blue   | 0.0 0.0 1.0     |
//! | H2O    | Red    | 1.0 0.0 0.0     |
//! | H3O+   | Orange | 1.0 0.5 0.0     |
//! | 异常氧 | Magenta| 1.0 0.0 1.0     |
//! | 其他   | Grey   | 0.5 0.5 0.5     |
//!
//! ## 依赖关系
//! - 被 `protonation/export.rs` 和 `commands/colorize.rs` 使用
//! - 使用 `models/species.rs`

use crate::models::{Atom, OxygenCoordination, ProtonationSpecies};
use std::fmt;

/// RGB 颜色
pub type Rgb = [f64; 3];

/// 着色表的键
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorKey {
    Xe,
    H,
    OhMinus,
    H2O,
    H3OPlus,
    /// 配位数不在 {1, 2, 3} 的氧原子
    Other,
    /// 表中没有的元素标签
    Element(String),
}

impl ColorKey {
    /// 非氧原子按标签直接查表
    pub fn from_label(label: &str) -> Self {
        match label {
            "Xe" => ColorKey::Xe,
            "H" => ColorKey::H,
            "OH-" => ColorKey::OhMinus,
            "H2O" => ColorKey::H2O,
            "H3O+" => ColorKey::H3OPlus,
            other => ColorKey::Element(other.to_string()),
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorKey::Xe => write!(f, "Xe"),
            ColorKey::H => write!(f, "H"),
            ColorKey::OhMinus => write!(f, "OH-"),
            ColorKey::H2O => write!(f, "H2O"),
            ColorKey::H3OPlus => write!(f, "H3O+"),
            ColorKey::Other => write!(f, "O (other)"),
            ColorKey::Element(label) => write!(f, "{}", label),
        }
    }
}

impl From<ProtonationSpecies> for ColorKey {
    fn from(species: ProtonationSpecies) -> Self {
        match species {
            ProtonationSpecies::Hydroxide => ColorKey::OhMinus,
            ProtonationSpecies::Water => ColorKey::H2O,
            ProtonationSpecies::Hydronium => ColorKey::H3OPlus,
            ProtonationSpecies::Other => ColorKey::Other,
        }
    }
}

/// 图例条目
#[derive(Debug, Clone)]
pub struct LegendEntry {
    /// 显示名取自 `ColorKey` 的 Display
    pub key: ColorKey,
    pub description: &'static str,
    pub color_name: &'static str,
    pub rgb: Rgb,
}

/// 着色表
#[derive(Debug, Clone)]
pub struct ColorTable {
    xenon: Rgb,
    hydrogen: Rgb,
    oh_minus: Rgb,
    h2o: Rgb,
    h3o_plus: Rgb,
    anomaly: Rgb,
    fallback: Rgb,
}

impl Default for ColorTable {
    fn default() -> Self {
        ColorTable {
            xenon: [0.5, 0.5, 0.5],
            hydrogen: [1.0, 1.0, 1.0],
            oh_minus: [0.0, 0.0, 1.0],
            h2o: [1.0, 0.0, 0.0],
            h3o_plus: [1.0, 0.5, 0.0],
            anomaly: [1.0, 0.0, 1.0],
            fallback: [0.5, 0.5, 0.5],
        }
    }
}

impl ColorTable {
    pub fn get(&self, key: &ColorKey) -> Rgb {
        match key {
            ColorKey::Xe => self.xenon,
            ColorKey::H => self.hydrogen,
            ColorKey::OhMinus => self.oh_minus,
            ColorKey::H2O => self.h2o,
            ColorKey::H3OPlus => self.h3o_plus,
            ColorKey::Other => self.anomaly,
            ColorKey::Element(_) => self.fallback,
        }
    }

    /// 单个原子的颜色
    ///
    /// 氧原子按配位物种着色，缺少配位信息时按异常处理；其余原子按标签查表。
    pub fn color_for(&self, atom: &Atom, coordination: Option<&OxygenCoordination>) -> Rgb {
        let key = if atom.is_oxygen() {
            coordination
                .map(|c| ColorKey::from(c.species()))
                .unwrap_or(ColorKey::Other)
        } else {
            ColorKey::from_label(&atom.species)
        };
        self.get(&key)
    }

    /// 汇总输出使用的图例
    pub fn legend(&self) -> Vec<LegendEntry> {
        vec![
            LegendEntry {
                key: ColorKey::OhMinus,
                description: "1 hydrogen",
                color_name: "Blue",
                rgb: self.oh_minus,
            },
            LegendEntry {
                key: ColorKey::H2O,
                description: "2 hydrogens",
                color_name: "Red",
                rgb: self.h2o,
            },
            LegendEntry {
                key: ColorKey::H3OPlus,
                description: "3 hydrogens",
                color_name: "Orange",
                rgb: self.h3o_plus,
            },
            LegendEntry {
                key: ColorKey::Other,
                description: "0 or 4+ hydrogens",
                color_name: "Magenta",
                rgb: self.anomaly,
            },
            LegendEntry {
                key: ColorKey::H,
                description: "Hydrogen",
                color_name: "White",
                rgb: self.hydrogen,
            },
            LegendEntry {
                key: ColorKey::Xe,
                description: "Xenon",
                color_name: "Grey",
                rgb: self.xenon,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oxygen_with(coordination: usize) -> OxygenCoordination {
        OxygenCoordination {
            position: [0.0; 3],
            coordination,
            bonded_hydrogens: (0..coordination as i64).collect(),
        }
    }

    #[test]
    fn test_oxygen_colors() {
        let table = ColorTable::default();
        let o = Atom::new("O", [0.0; 3], 1);

        assert_eq!(table.color_for(&o, Some(&oxygen_with(1))), [0.0, 0.0, 1.0]);
        assert_eq!(table.color_for(&o, Some(&oxygen_with(2))), [1.0, 0.0, 0.0]);
        assert_eq!(table.color_for(&o, Some(&oxygen_with(3))), [1.0, 0.5, 0.0]);
        assert_eq!(table.color_for(&o, Some(&oxygen_with(0))), [1.0, 0.0, 1.0]);
        assert_eq!(table.color_for(&o, Some(&oxygen_with(5))), [1.0, 0.0, 1.0]);
        assert_eq!(table.color_for(&o, None), [1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_element_colors() {
        let table = ColorTable::default();
        let h = Atom::new("H", [0.0; 3], 1);
        let xe = Atom::new("Xe", [0.0; 3], 2);
        let na = Atom::new("Na", [0.0; 3], 3);

        assert_eq!(table.color_for(&h, None), [1.0, 1.0, 1.0]);
        assert_eq!(table.color_for(&xe, None), [0.5, 0.5, 0.5]);
        assert_eq!(table.color_for(&na, None), [0.5, 0.5, 0.5]);
        assert_eq!(
            ColorKey::from_label("Na"),
            ColorKey::Element("Na".to_string())
        );
    }

    #[test]
    fn test_legend_labels_and_colors() {
        let table = ColorTable::default();
        let legend = table.legend();

        let labels: Vec<String> = legend.iter().map(|e| e.key.to_string()).collect();
        assert_eq!(labels, vec!["OH-", "H2O", "H3O+", "O (other)", "H", "Xe"]);

        // 图例颜色与实际着色一致
        for entry in &legend {
            assert_eq!(table.get(&entry.key), entry.rgb);
        }
        assert_eq!(ColorKey::Element("Na".to_string()).to_string(), "Na");
    }
}
