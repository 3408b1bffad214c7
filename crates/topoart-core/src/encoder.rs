//! Complement coding and sample validation.
//!
//! A raw sample `x ∈ [0,1]^d` becomes `[x, 1 − x] ∈ [0,1]^(2d)`. Every coded
//! vector therefore has the same L1 norm `d`, which keeps category boxes from
//! collapsing toward the origin under min-based learning.

use crate::error::{Result, TopoArtError};

/// Widen `x` to `[x, 1 − x]`.
///
/// Range is not checked; run [`validate_sample`] first at any untrusted
/// boundary.
pub fn complement_code(x: &[f64]) -> Vec<f64> {
    let mut coded = Vec::with_capacity(x.len() * 2);
    coded.extend_from_slice(x);
    coded.extend(x.iter().map(|v| 1.0 - v));
    coded
}

/// Check that `x` is non-empty, finite, inside `[0, 1]`, and (when
/// `expected_dim` is known) of the expected width.
///
/// `index` is the sample's position within the caller's input and is only used
/// for error reporting.
pub fn validate_sample(index: usize, x: &[f64], expected_dim: Option<usize>) -> Result<()> {
    if x.is_empty() {
        return Err(TopoArtError::InvalidInput {
            index,
            reason: "sample has no components".into(),
        });
    }
    if let Some(expected) = expected_dim {
        if x.len() != expected {
            return Err(TopoArtError::DimensionMismatch { expected, got: x.len() });
        }
    }
    for (j, &v) in x.iter().enumerate() {
        if !v.is_finite() {
            return Err(TopoArtError::InvalidInput {
                index,
                reason: format!("component {j} is not finite ({v})"),
            });
        }
        if !(0.0..=1.0).contains(&v) {
            return Err(TopoArtError::InvalidInput {
                index,
                reason: format!("component {j} = {v} lies outside [0, 1]"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubles_width_with_complements() {
        let coded = complement_code(&[0.2, 1.0, 0.0]);
        assert_eq!(coded.len(), 6);
        assert_eq!(&coded[..3], &[0.2, 1.0, 0.0]);
        assert!((coded[3] - 0.8).abs() < 1e-12);
        assert_eq!(coded[4], 0.0);
        assert_eq!(coded[5], 1.0);
    }

    #[test]
    fn coded_norm_equals_raw_dimension() {
        let coded = complement_code(&[0.13, 0.77, 0.5, 0.01]);
        let norm: f64 = coded.iter().sum();
        assert!((norm - 4.0).abs() < 1e-12);
    }

    #[test]
    fn validation_rejects_bad_components() {
        assert!(validate_sample(0, &[0.0, 0.5, 1.0], None).is_ok());
        assert!(matches!(
            validate_sample(3, &[0.5, f64::NAN], None),
            Err(TopoArtError::InvalidInput { index: 3, .. })
        ));
        assert!(matches!(
            validate_sample(0, &[1.2], None),
            Err(TopoArtError::InvalidInput { .. })
        ));
        assert!(matches!(
            validate_sample(0, &[-0.0001], None),
            Err(TopoArtError::InvalidInput { .. })
        ));
        assert!(matches!(
            validate_sample(0, &[], None),
            Err(TopoArtError::InvalidInput { .. })
        ));
    }

    #[test]
    fn validation_checks_width_before_values() {
        let err = validate_sample(0, &[0.1, 7.0, 0.2], Some(2)).unwrap_err();
        assert!(matches!(err, TopoArtError::DimensionMismatch { expected: 2, got: 3 }));
    }
}
