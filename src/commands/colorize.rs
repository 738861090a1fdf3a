//! # 着色命令实现
//!
//! 逐帧识别 OH⁻ / H2O / H3O+ 并写出带颜色属性的轨迹。
//!
//! ## 功能
//! - 整份读入轨迹，解析到第一个结构错误为止
//! - 并行分类与渲染各帧，输出顺序与输入一致
//! - 按间隔打印物种统计，可选导出 CSV
//! - 一次性写出输出文件
//!
//! ## 错误处理
//! - 帧结构错误：报告帧号与行号，丢弃其后的所有帧，已解析的帧照常写出
//! - 文件 I/O 错误：向上传递给 `main.rs`
//!
//! ## 依赖关系
//! - 使用 `cli/colorize.rs` 定义的参数
//! - 使用 `parsers/extxyz.rs`, `protonation/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::cli::colorize::ColorizeArgs;
use crate::error::{AnalyzerError, Result};
use crate::models::{Frame, SpeciesStats};
use crate::parsers;
use crate::protonation::export;
use crate::protonation::{ColorTable, SpeciesClassifier};
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::path::Path;
use tabled::{Table, Tabled};

/// 单帧处理结果
struct RenderedFrame {
    stats: SpeciesStats,
    text: String,
}

/// 执行着色命令
pub fn execute(args: ColorizeArgs) -> Result<()> {
    let table = ColorTable::default();

    let (input, output_path) = match args.paths.as_slice() {
        [input, output_path] => (input, output_path),
        _ => {
            print_usage(&table);
            return Ok(());
        }
    };

    validate_args(&args)?;

    if !input.exists() {
        return Err(AnalyzerError::FileNotFound {
            path: input.display().to_string(),
        });
    }

    output::print_header("Protonation State Analysis");
    output::print_info(&format!(
        "Processing {} to {}...",
        input.display(),
        output_path.display()
    ));

    let trajectory = parsers::parse_trajectory_file(input)?;
    let frames = trajectory.frames;

    for index in frames_without_cell(&frames) {
        output::print_warning(&format!(
            "No cell dimensions found in frame {}, not using PBC",
            index
        ));
    }

    let classifier = SpeciesClassifier::new(args.cutoff);

    if let Some(first) = frames.first() {
        output::print_info(&format!(
            "Frame 0 has {} atoms ({} O, {} H), O-H cutoff {}",
            first.atoms.len(),
            first.count_species("O"),
            first.count_species("H"),
            classifier.cutoff()
        ));

        let classification = classifier.classify_frame(first);
        for oxygen in classification.anomalies() {
            output::print_warning(&format!(
                "Frame 0: O at ({:.3}, {:.3}, {:.3}) has {} H within cutoff",
                oxygen.position[0],
                oxygen.position[1],
                oxygen.position[2],
                oxygen.coordination
            ));
        }
    }

    let rendered = process_frames(&frames, &classifier, &table, args.jobs)?;

    for (i, frame) in rendered.iter().enumerate() {
        if i % args.stats_every == 0 {
            output::print_frame_stats(i, &frame.stats);
        }
    }

    if let Some(err) = &trajectory.error {
        output::print_error(&format!("Error processing trajectory: {}", err));
        output::print_warning(&format!(
            "Remaining frames discarded; writing the {} frame(s) read before the error",
            frames.len()
        ));
    }

    let content: String = rendered.iter().map(|r| r.text.as_str()).collect();
    export::write_output(output_path, &content)?;

    if let Some(csv_path) = &args.stats_csv {
        let stats: Vec<SpeciesStats> = rendered.iter().map(|r| r.stats).collect();
        export::stats_to_csv(&stats, csv_path)?;
        output::print_success(&format!(
            "Per-frame statistics saved to '{}'",
            csv_path.display()
        ));
    }

    let dropped: usize = frames.iter().map(|f| f.dropped_lines()).sum();
    if dropped > 0 {
        output::print_skip(&format!("{} malformed atom line(s) skipped", dropped));
    }

    output::print_done(&format!("Successfully processed {} frames", frames.len()));
    print_legend(&table, output_path);

    Ok(())
}

/// 检查数值参数
fn validate_args(args: &ColorizeArgs) -> Result<()> {
    if !args.cutoff.is_finite() || args.cutoff <= 0.0 {
        return Err(AnalyzerError::InvalidArgument(format!(
            "--cutoff must be a positive number, got {}",
            args.cutoff
        )));
    }

    if args.stats_every == 0 {
        return Err(AnalyzerError::InvalidArgument(
            "--stats-every must be at least 1".to_string(),
        ));
    }

    Ok(())
}

/// 缺少晶胞信息的帧序号，每帧对应一条警告
fn frames_without_cell(frames: &[Frame]) -> Vec<usize> {
    frames
        .iter()
        .filter(|frame| frame.cell.is_none())
        .map(|frame| frame.index)
        .collect()
}

/// 并行分类并渲染所有帧
fn process_frames(
    frames: &[Frame],
    classifier: &SpeciesClassifier,
    table: &ColorTable,
    jobs: usize,
) -> Result<Vec<RenderedFrame>> {
    let num_threads = if jobs == 0 { num_cpus::get() } else { jobs };

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| {
            AnalyzerError::InvalidArgument(format!(
                "Cannot start {} worker threads: {}",
                num_threads, e
            ))
        })?;

    let pb = progress::create_frame_bar(frames.len(), "Classifying");

    let rendered: Vec<RenderedFrame> = pool.install(|| {
        frames
            .par_iter()
            .map(|frame| {
                let classification = classifier.classify_frame(frame);
                let text = export::render_frame(frame, &classification, table);
                pb.inc(1);
                RenderedFrame {
                    stats: classification.stats,
                    text,
                }
            })
            .collect()
    });

    pb.finish_and_clear();

    Ok(rendered)
}

/// 参数个数不对时的用法说明
fn print_usage(table: &ColorTable) {
    println!("Usage: protonation-analyzer <input_xyz_file> <output_xyz_file>");
    println!("  Colors oxygen atoms based on their protonation state:");
    for entry in table.legend().iter().take(3) {
        println!(
            "  - {} ({}): {}",
            entry.key, entry.description, entry.color_name
        );
    }
}

/// 打印着色图例
fn print_legend(table: &ColorTable, output_path: &Path) {
    #[derive(Tabled)]
    struct LegendRow {
        #[tabled(rename = "Species")]
        species: String,
        #[tabled(rename = "Criterion")]
        criterion: String,
        #[tabled(rename = "Color")]
        color: String,
        #[tabled(rename = "RGB")]
        rgb: String,
    }

    let rows: Vec<LegendRow> = table
        .legend()
        .into_iter()
        .map(|entry| LegendRow {
            species: entry.key.to_string(),
            criterion: entry.description.to_string(),
            color: entry.color_name.to_string(),
            rgb: format!("{:?}", entry.rgb),
        })
        .collect();

    output::print_header(&format!(
        "Color scheme used in '{}'",
        output_path.display()
    ));
    println!("{}", Table::new(&rows));
}
