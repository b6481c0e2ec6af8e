use nalgebra::{Point3, Vector3};

/// RMSD between two equally long, position-paired coordinate sets.
///
/// Returns `None` when the sets differ in length or are empty.
pub fn paired_rmsd(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}

/// Mean position of a non-empty point set.
pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Some(Point3::from(sum / points.len() as f64))
}

/// Root-mean-square deviation of a point set from a reference position.
pub fn rms_deviation_from(points: &[Point3<f64>], reference: &Point3<f64>) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let squared_sum: f64 = points.iter().map(|p| (p - reference).norm_squared()).sum();
    (squared_sum / points.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_rmsd_of_identical_sets_is_zero() {
        let coords = vec![Point3::new(1.0, 2.0, 3.0), Point3::new(-1.0, 0.0, 4.0)];
        assert_eq!(paired_rmsd(&coords, &coords), Some(0.0));
    }

    #[test]
    fn paired_rmsd_of_translated_point_is_displacement_norm() {
        let a = vec![Point3::new(0.0, 0.0, 0.0)];
        let b = vec![Point3::new(3.0, 4.0, 0.0)];
        let rmsd = paired_rmsd(&a, &b).unwrap();
        assert!((rmsd - 5.0).abs() < 1e-12);
    }

    #[test]
    fn paired_rmsd_rejects_length_mismatch() {
        let a = vec![Point3::new(0.0, 0.0, 0.0)];
        assert_eq!(paired_rmsd(&a, &[]), None);
    }

    #[test]
    fn centroid_is_mean_position() {
        let points = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0)];
        assert_eq!(centroid(&points), Some(Point3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn rms_deviation_of_symmetric_pair() {
        let points = vec![Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let center = centroid(&points).unwrap();
        assert!((rms_deviation_from(&points, &center) - 1.0).abs() < 1e-12);
    }
}
