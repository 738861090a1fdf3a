//! # 着色轨迹导出
//!
//! 将分类结果写回扩展 XYZ 文本，并可选导出逐帧物种统计。
//!
//! ## 输出格式
//! - 注释行：含 `Properties=` 且尚未声明颜色时，在 `id:I:1` 后追加 `:color:R:3`
//! - 原子数行：实际写出的原子数（已扣除被丢弃的原子行）
//! - 原子行：`species x y z id r g b`，空格分隔，实数使用最短往返表示
//!
//! ## 依赖关系
//! - 被 `commands/colorize.rs` 调用
//! - 使用 `protonation/colors.rs` 的 ColorTable
//! - 使用 `csv` 库写入统计文件

use crate::error::{AnalyzerError, Result};
use crate::models::{Frame, FrameClassification, SpeciesStats};
use crate::protonation::colors::ColorTable;

use serde::Serialize;
use std::fs;
use std::path::Path;

const COLOR_PROPERTY: &str = "color:R:3";
const ID_PROPERTY: &str = "id:I:1";

/// 在注释行中声明颜色属性
///
/// 已声明 `color:R:3` 或没有 `Properties=` 时原样返回，重复调用不会重复追加。
pub fn augment_header(header: &str) -> String {
    if !header.contains(COLOR_PROPERTY) && header.contains("Properties=") {
        header.replace(ID_PROPERTY, &format!("{}:{}", ID_PROPERTY, COLOR_PROPERTY))
    } else {
        header.to_string()
    }
}

/// 实数的默认文本表示，整数值保留 `.0`
pub fn format_real(value: f64) -> String {
    format!("{:?}", value)
}

/// 渲染一帧
pub fn render_frame(
    frame: &Frame,
    classification: &FrameClassification,
    table: &ColorTable,
) -> String {
    let mut result = String::new();
    result.push_str(&format!("{}\n", frame.atoms.len()));
    result.push_str(&format!("{}\n", augment_header(&frame.header)));

    for (i, atom) in frame.atoms.iter().enumerate() {
        let color = table.color_for(atom, classification.oxygen(i));
        result.push_str(&format!(
            "{} {} {} {} {} {} {} {}\n",
            atom.species,
            format_real(atom.position[0]),
            format_real(atom.position[1]),
            format_real(atom.position[2]),
            atom.id,
            format_real(color[0]),
            format_real(color[1]),
            format_real(color[2]),
        ));
    }

    result
}

/// 一次性写出整个输出缓冲区
pub fn write_output(output_path: &Path, content: &str) -> Result<()> {
    fs::write(output_path, content).map_err(|e| AnalyzerError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })
}

/// CSV 中的一行
#[derive(Debug, Serialize)]
struct StatsRecord {
    frame: usize,
    oh_minus: usize,
    h2o: usize,
    h3o_plus: usize,
    other: usize,
}

/// 导出逐帧物种统计为 CSV 格式
pub fn stats_to_csv(stats: &[SpeciesStats], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for (frame, s) in stats.iter().enumerate() {
        wtr.serialize(StatsRecord {
            frame,
            oh_minus: s.oh_minus,
            h2o: s.h2o,
            h3o_plus: s.h3o_plus,
            other: s.other,
        })?;
    }

    wtr.flush().map_err(|e| AnalyzerError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
