//! # 扩展 XYZ 轨迹解析器
//!
//! 将整份轨迹文本切分为帧，并从注释行中提取正交晶胞。
//!
//! ## 扩展 XYZ 格式说明
//! ```text
//! <atom_count>
//! Lattice="Lx 0 0 0 Ly 0 0 0 Lz" Properties=species:S:1:pos:R:3:id:I:1 ...
//! <species> <x> <y> <z> <id> [...]
//! ...（共 atom_count 行）
//! ```
//!
//! ## 解析状态机
//! `原子数行 -> 注释行 -> 原子块 -> (下一帧)`，直到输入耗尽或遇到结构错误。
//! - 原子数行非整数、注释行缺失、剩余行数不足：`FrameError`，终止整个解析
//! - 原子行 token 少于 5 个：静默丢弃该行，帧继续
//! - 原子行坐标/编号无法解析为数值：`FrameError`
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/frame.rs`
//! - 使用 `regex` 匹配 Lattice 属性

use crate::error::{AnalyzerError, FrameError, Result};
use crate::models::{Atom, CellDimensions, Frame};

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// 原子行至少需要 species x y z id 五列
const MIN_ATOM_TOKENS: usize = 5;

/// 对角晶格 `Lattice="Lx 0 0 0 Ly 0 0 0 Lz"`，非对角项必须是字面零
fn lattice_regex() -> &'static Regex {
    static LATTICE: OnceLock<Regex> = OnceLock::new();
    LATTICE.get_or_init(|| {
        let zero = r"0(?:\.0*)?";
        let pattern = format!(
            r#"Lattice="([0-9.]+)\s+{z}\s+{z}\s+{z}\s+([0-9.]+)\s+{z}\s+{z}\s+{z}\s+([0-9.]+)""#,
            z = zero
        );
        Regex::new(&pattern).expect("lattice pattern is a valid regex")
    })
}

/// 从注释行提取晶胞边长
///
/// 只识别严格对角的正交晶格；其他写法（旋转晶胞、非零非对角项、缺失属性）
/// 一律返回 `None`，由调用方负责提示用户。
pub fn extract_cell_dimensions(header: &str) -> Option<CellDimensions> {
    let caps = lattice_regex().captures(header)?;
    let lx: f64 = caps[1].parse().ok()?;
    let ly: f64 = caps[2].parse().ok()?;
    let lz: f64 = caps[3].parse().ok()?;
    CellDimensions::new(lx, ly, lz)
}

/// 单行原子记录的解析结果
#[derive(Debug, Clone, PartialEq)]
pub enum AtomLine {
    Parsed(Atom),
    /// token 不足，丢弃
    TooShort,
    /// token 足够但数值无法解析
    Invalid(String),
}

/// 解析原子行 `species x y z id [...]`，多余列忽略
pub fn parse_atom_line(line: &str) -> AtomLine {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < MIN_ATOM_TOKENS {
        return AtomLine::TooShort;
    }

    let mut position = [0.0; 3];
    for (axis, token) in parts[1..4].iter().enumerate() {
        match token.parse::<f64>() {
            Ok(v) => position[axis] = v,
            Err(_) => {
                return AtomLine::Invalid(format!("could not parse coordinate '{}'", token));
            }
        }
    }

    let id = match parts[4].parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return AtomLine::Invalid(format!("could not parse atom id '{}'", parts[4]));
        }
    };

    AtomLine::Parsed(Atom::new(parts[0], position, id))
}

/// 逐帧读取轨迹
///
/// 产生 `Result<Frame, FrameError>`，第一次出错后不再产生任何帧。
pub struct TrajectoryReader<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    frame_index: usize,
    finished: bool,
}

impl<'a> TrajectoryReader<'a> {
    pub fn new(content: &'a str) -> Self {
        TrajectoryReader {
            lines: content.lines().collect(),
            pos: 0,
            frame_index: 0,
            finished: false,
        }
    }

    fn read_frame(&mut self) -> std::result::Result<Frame, FrameError> {
        let frame = self.frame_index;
        let count_line = self.lines[self.pos];

        let declared_atoms: usize =
            count_line
                .trim()
                .parse()
                .map_err(|_| FrameError::InvalidAtomCount {
                    frame,
                    line: self.pos + 1,
                    text: count_line.trim().to_string(),
                })?;

        let header_idx = self.pos + 1;
        let header = self
            .lines
            .get(header_idx)
            .ok_or(FrameError::MissingHeader {
                frame,
                line: header_idx + 1,
            })?
            .trim()
            .to_string();

        let block_start = header_idx + 1;
        let available = self.lines.len() - block_start;
        if available < declared_atoms {
            return Err(FrameError::TruncatedFrame {
                frame,
                line: self.pos + 1,
                declared: declared_atoms,
                available,
            });
        }

        let mut atoms = Vec::with_capacity(declared_atoms);

        for (offset, line) in self.lines[block_start..block_start + declared_atoms]
            .iter()
            .enumerate()
        {
            match parse_atom_line(line) {
                AtomLine::Parsed(atom) => atoms.push(atom),
                AtomLine::TooShort => {}
                AtomLine::Invalid(reason) => {
                    return Err(FrameError::InvalidAtomRecord {
                        frame,
                        line: block_start + offset + 1,
                        reason,
                    });
                }
            }
        }

        self.pos = block_start + declared_atoms;
        self.frame_index += 1;

        Ok(Frame {
            index: frame,
            declared_atoms,
            cell: extract_cell_dimensions(&header),
            header,
            atoms,
        })
    }
}

impl Iterator for TrajectoryReader<'_> {
    type Item = std::result::Result<Frame, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        // 末尾的空白行视为输入结束
        if self.lines[self.pos..].iter().all(|l| l.trim().is_empty()) {
            self.finished = true;
            return None;
        }

        let result = self.read_frame();
        if result.is_err() {
            self.finished = true;
        }
        Some(result)
    }
}

/// 整份轨迹的解析结果
///
/// `frames` 为出错前所有完整解析的帧；`error` 为终止解析的结构错误（如有）。
#[derive(Debug, Default)]
pub struct ParsedTrajectory {
    pub frames: Vec<Frame>,
    pub error: Option<FrameError>,
}

/// 从字符串内容解析轨迹
pub fn parse_trajectory(content: &str) -> ParsedTrajectory {
    let mut parsed = ParsedTrajectory::default();

    for result in TrajectoryReader::new(content) {
        match result {
            Ok(frame) => parsed.frames.push(frame),
            Err(e) => parsed.error = Some(e),
        }
    }

    parsed
}

/// 读取并解析轨迹文件（整份读入内存）
pub fn parse_trajectory_file(path: &Path) -> Result<ParsedTrajectory> {
    let content = fs::read_to_string(path).map_err(|e| AnalyzerError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(parse_trajectory(&content))
}
