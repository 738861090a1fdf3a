//! # 周期性距离计算
//!
//! 正交晶胞下的最小镜像约定：逐轴独立修正，每轴至多平移一个晶胞长度。
//! 假设原子对在任一轴上的坐标差不超过一个完整晶胞长度。
//!
//! ## 依赖关系
//! - 被 `protonation/classifier.rs` 使用
//! - 使用 `models/frame.rs` 的 CellDimensions

use crate::models::CellDimensions;

/// 单轴最小镜像修正
pub fn minimum_image_delta(delta: f64, length: f64) -> f64 {
    if delta.abs() > 0.5 * length {
        delta - delta.signum() * length
    } else {
        delta
    }
}

/// 位移向量 a - b；给定晶胞时施加最小镜像修正
pub fn displacement(a: &[f64; 3], b: &[f64; 3], cell: Option<&CellDimensions>) -> [f64; 3] {
    let mut delta = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];

    if let Some(cell) = cell {
        for (d, &length) in delta.iter_mut().zip(cell.lengths.iter()) {
            *d = minimum_image_delta(*d, length);
        }
    }

    delta
}

/// 两点间距离；无晶胞时为普通欧氏距离
pub fn distance(a: &[f64; 3], b: &[f64; 3], cell: Option<&CellDimensions>) -> f64 {
    let d = displacement(a, b, cell);
    (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic(l: f64) -> CellDimensions {
        CellDimensions::new(l, l, l).unwrap()
    }

    #[test]
    fn test_euclidean_without_cell() {
        let d = distance(&[0.0, 0.0, 0.0], &[3.0, 4.0, 0.0], None);
        assert!((d - 5.0).abs() < 1e-12);

        // 无晶胞时不做任何折叠
        let d = distance(&[0.0, 0.0, 0.0], &[9.5, 0.0, 0.0], None);
        assert!((d - 9.5).abs() < 1e-12);
    }

    #[test]
    fn test_minimum_image_across_boundary() {
        let cell = cubic(10.0);
        let d = distance(&[0.0, 0.0, 0.0], &[9.5, 0.0, 0.0], Some(&cell));
        assert!((d - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_minimum_image_per_axis() {
        let cell = CellDimensions::new(10.0, 20.0, 30.0).unwrap();
        let delta = displacement(&[0.0, 0.0, 0.0], &[7.0, 6.0, -4.0], Some(&cell));

        // 仅 x 轴超过半个晶胞长度
        assert!((delta[0] - 3.0).abs() < 1e-12);
        assert!(delta[0].abs() <= 5.0);
        assert!((delta[1] - (-6.0)).abs() < 1e-12);
        assert!((delta[2] - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_translation_by_cell_vector() {
        let cell = CellDimensions::new(8.0, 8.0, 8.0).unwrap();
        let a = [1.0, 2.0, 3.0];
        let b = [1.5, 2.25, 3.75];
        let reference = distance(&a, &b, Some(&cell));

        for axis in 0..3 {
            for shift in [8.0, -8.0] {
                let mut moved = b;
                moved[axis] += shift;
                let d = distance(&a, &moved, Some(&cell));
                assert!((d - reference).abs() < 1e-12, "axis {} shift {}", axis, shift);
            }
        }
    }

    #[test]
    fn test_half_box_not_wrapped() {
        // 恰好半个晶胞长度时不修正
        assert_eq!(minimum_image_delta(5.0, 10.0), 5.0);
        assert_eq!(minimum_image_delta(-5.0, 10.0), -5.0);
        assert_eq!(minimum_image_delta(-6.0, 10.0), 4.0);
    }
}
