//! # 轨迹帧数据模型
//!
//! 一帧扩展 XYZ 轨迹：原子数、注释行（header）、原子记录。
//! 帧内数据在渲染完成后即被丢弃，不跨帧保留。
//!
//! ## 依赖关系
//! - 被 `parsers/extxyz.rs` 构造
//! - 被 `protonation/` 消费
//! - 无外部模块依赖

/// 原子记录
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 物种/元素标签（如 "O", "H", "Xe"）
    pub species: String,

    /// 笛卡尔坐标 [x, y, z]
    pub position: [f64; 3],

    /// 原子编号，帧内唯一（不做全局校验）
    pub id: i64,
}

impl Atom {
    pub fn new(species: impl Into<String>, position: [f64; 3], id: i64) -> Self {
        Atom {
            species: species.into(),
            position,
            id,
        }
    }

    pub fn is_oxygen(&self) -> bool {
        self.species == "O"
    }

    pub fn is_hydrogen(&self) -> bool {
        self.species == "H"
    }
}

/// 正交晶胞边长 (Lx, Ly, Lz)
///
/// 仅支持对角晶格，三个边长均为正数。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDimensions {
    pub lengths: [f64; 3],
}

impl CellDimensions {
    /// 边长非正或非有限时返回 `None`
    pub fn new(lx: f64, ly: f64, lz: f64) -> Option<Self> {
        let lengths = [lx, ly, lz];
        if lengths.iter().all(|l| l.is_finite() && *l > 0.0) {
            Some(CellDimensions { lengths })
        } else {
            None
        }
    }
}

/// 轨迹中的一帧
#[derive(Debug, Clone)]
pub struct Frame {
    /// 帧序号（0 起始）
    pub index: usize,

    /// 原子数行声明的原子数
    pub declared_atoms: usize,

    /// 注释行（已去除首尾空白）
    pub header: String,

    /// 周期性晶胞；缺失时不做周期修正
    pub cell: Option<CellDimensions>,

    /// 成功解析的原子
    pub atoms: Vec<Atom>,
}

impl Frame {
    /// 因 token 不足被丢弃的原子行数
    pub fn dropped_lines(&self) -> usize {
        self.declared_atoms - self.atoms.len()
    }

    /// 统计某一物种的原子数
    pub fn count_species(&self, species: &str) -> usize {
        self.atoms.iter().filter(|a| a.species == species).count()
    }
}
