//! Wrapper da primitiva de inversão.

use ndarray::Array2;
use ndarray_linalg::{Determinant, Inverse};

use crate::types::config::InvertConfig;
use crate::types::errors::{MatcacheError, MatcacheResult};

/// Inverte uma matriz quadrada densa.
///
/// A fatoração e a inversão em si são do LAPACK, via
/// [`ndarray_linalg::Inverse`]; este wrapper só aplica as verificações
/// opcionais pedidas em `options` antes de delegar.
///
/// # Erros
/// - [`MatcacheError::NonFinite`] se `check_finite` está ativo e a matriz
///   contém NaN ou infinito.
/// - [`MatcacheError::Singular`] se `singular_epsilon > 0` e o determinante
///   fica dentro do limiar.
/// - [`MatcacheError::Linalg`] para matrizes não quadradas ou singulares
///   detectadas pelo LAPACK, repassado sem tradução.
pub fn invert(matrix: &Array2<f64>, options: &InvertConfig) -> MatcacheResult<Array2<f64>> {
    if options.check_finite && matrix.iter().any(|v| !v.is_finite()) {
        return Err(MatcacheError::NonFinite);
    }

    if options.singular_epsilon > 0.0 {
        let det = matrix.det()?;
        if det.abs() <= options.singular_epsilon {
            return Err(MatcacheError::Singular(det));
        }
    }

    Ok(matrix.inv()?)
}
