//! Numeric input adaptation and validation.

use crate::error::PlotError;

/// Trait for types that can be converted into a one-dimensional series of
/// plot values.
pub trait Series {
    /// Convert into a vector of f64 values.
    fn into_series(self) -> Vec<f64>;
}

impl Series for Vec<f64> {
    fn into_series(self) -> Vec<f64> {
        self
    }
}

impl Series for &Vec<f64> {
    fn into_series(self) -> Vec<f64> {
        self.clone()
    }
}

impl Series for &[f64] {
    fn into_series(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl Series for Vec<f32> {
    fn into_series(self) -> Vec<f64> {
        self.into_iter().map(|x| x as f64).collect()
    }
}

impl Series for Vec<i32> {
    fn into_series(self) -> Vec<f64> {
        self.into_iter().map(|x| x as f64).collect()
    }
}

impl Series for Vec<i64> {
    fn into_series(self) -> Vec<f64> {
        self.into_iter().map(|x| x as f64).collect()
    }
}

impl Series for Vec<usize> {
    fn into_series(self) -> Vec<f64> {
        self.into_iter().map(|x| x as f64).collect()
    }
}

impl<const N: usize> Series for [f64; N] {
    fn into_series(self) -> Vec<f64> {
        self.to_vec()
    }
}

impl<const N: usize> Series for [i32; N] {
    fn into_series(self) -> Vec<f64> {
        self.iter().map(|x| *x as f64).collect()
    }
}

/// Validate that x and y form a plottable pair.
///
/// Inputs are one-dimensional by construction of [`Series`]; the remaining
/// checks are equal length and non-emptiness.
pub fn validate_xy(x: &[f64], y: &[f64]) -> Result<(), PlotError> {
    if x.len() != y.len() {
        return Err(PlotError::ShapeMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(PlotError::EmptyData);
    }
    Ok(())
}

/// (min, max) over the finite values of a series.
pub(crate) fn series_range(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_equal_lengths() {
        assert!(validate_xy(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).is_ok());
    }

    #[test]
    fn test_validate_shape_mismatch() {
        let err = validate_xy(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
        match err {
            PlotError::ShapeMismatch { x_len, y_len } => {
                assert_eq!((x_len, y_len), (3, 2));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty() {
        assert!(matches!(
            validate_xy(&[], &[]).unwrap_err(),
            PlotError::EmptyData
        ));
    }

    #[test]
    fn test_integer_series_conversion() {
        assert_eq!(vec![1i32, 2, 3].into_series(), vec![1.0, 2.0, 3.0]);
        assert_eq!([4i32, 5].into_series(), vec![4.0, 5.0]);
    }

    #[test]
    fn test_series_range_skips_non_finite() {
        let (min, max) = series_range(&[1.0, f64::NAN, 5.0, 3.0]);
        assert_eq!((min, max), (1.0, 5.0));
    }
}
