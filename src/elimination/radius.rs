//! Helpers for choosing a maximum distance when the caller only knows how many samples it wants.

use crate::Vector3;

/// The largest radius achievable by `count` Poisson-disk samples packed into a domain of the given
/// area (2D) or volume (3D), assuming hexagonal or face-centered cubic packing. Returns `None` for
/// other dimensions, a zero count or a non-positive domain size.
///
/// # Arguments
///
/// * `dimensions`: 2 or 3
/// * `count`: the number of samples
/// * `domain_size`: area or volume of the sampling domain
///
/// returns: Option<f64>
///
/// # Examples
///
/// ```
/// use sample_elim::elimination::radius::max_poisson_disk_radius;
/// let r = max_poisson_disk_radius(3, 1000, 1.0).unwrap();
/// assert!((r - 0.0561).abs() < 1e-4);
/// ```
pub fn max_poisson_disk_radius(dimensions: usize, count: usize, domain_size: f64) -> Option<f64> {
    if count == 0 || domain_size.is_nan() || domain_size <= 0.0 {
        return None;
    }

    let sample_size = domain_size / count as f64;
    match dimensions {
        2 => Some((sample_size / (2.0 * 3f64.sqrt())).sqrt()),
        3 => Some((sample_size / (4.0 * std::f64::consts::SQRT_2)).cbrt()),
        _ => None,
    }
}

/// A maximum distance suited to eliminating down to `count` samples inside a box of the given
/// extent: twice the maximum Poisson-disk radius. A box with one flat axis is treated as a 2D
/// domain. Returns `None` if more than one axis is flat.
pub fn default_maximum_distance(count: usize, extent: &Vector3) -> Option<f64> {
    let open = extent.iter().copied().filter(|e| *e > 0.0).collect::<Vec<_>>();
    let r = match open.len() {
        3 => max_poisson_disk_radius(3, count, open.iter().product()),
        2 => max_poisson_disk_radius(2, count, open.iter().product()),
        _ => None,
    }?;
    Some(2.0 * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn radius_in_the_unit_square() {
        let r = max_poisson_disk_radius(2, 100, 1.0).unwrap();
        assert_relative_eq!(r, (0.01 / (2.0 * 3f64.sqrt())).sqrt());
    }

    #[test]
    fn radius_shrinks_with_count() {
        let a = max_poisson_disk_radius(3, 100, 1.0).unwrap();
        let b = max_poisson_disk_radius(3, 800, 1.0).unwrap();
        assert_relative_eq!(a / b, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn unsupported_inputs() {
        assert_eq!(max_poisson_disk_radius(4, 10, 1.0), None);
        assert_eq!(max_poisson_disk_radius(3, 0, 1.0), None);
        assert_eq!(max_poisson_disk_radius(3, 10, 0.0), None);
    }

    #[test]
    fn flat_box_uses_area() {
        let flat = default_maximum_distance(100, &Vector3::new(1.0, 1.0, 0.0)).unwrap();
        let expected = 2.0 * max_poisson_disk_radius(2, 100, 1.0).unwrap();
        assert_relative_eq!(flat, expected);
        assert_eq!(default_maximum_distance(100, &Vector3::new(1.0, 0.0, 0.0)), None);
    }

    #[test]
    fn solid_box_uses_volume() {
        let d = default_maximum_distance(100, &Vector3::new(2.0, 1.0, 0.5)).unwrap();
        let expected = 2.0 * max_poisson_disk_radius(3, 100, 1.0).unwrap();
        assert_relative_eq!(d, expected);
    }
}
