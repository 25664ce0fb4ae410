//! Ponto de entrada memoizado da inversão.

use ndarray::Array2;

use crate::cache::CachedMatrixHolder;
use crate::solve::invert;
use crate::types::config::InvertConfig;
use crate::types::errors::MatcacheResult;

/// Retorna a inversa da matriz primária do holder, calculando-a no máximo
/// uma vez por época.
///
/// No hit o slot é devolvido como está, sem mutação e sem aviso. No miss
/// um aviso informativo é emitido via `tracing`, a primitiva de inversão é
/// chamada com `options` repassado sem interpretação, e o resultado é
/// gravado no slot antes de ser devolvido.
///
/// Uma inversão que falha deixa o slot ausente: a próxima chamada tenta de
/// novo, então trocar a primária por uma matriz invertível recupera o
/// holder normalmente.
pub fn cache_solve<'a>(
    holder: &'a mut CachedMatrixHolder,
    options: &InvertConfig,
) -> MatcacheResult<&'a Array2<f64>> {
    if holder.cached_inverse().is_none() {
        let (rows, cols) = holder.primary().dim();
        tracing::info!("cache miss: calculando inversa da matriz {rows}x{cols}");

        let inverse = invert(holder.primary(), options)?;
        holder.set_cached_inverse(inverse);
        holder.record_miss();
    } else {
        holder.record_hit();
    }

    Ok(&holder
        .cached_inverse()
        .expect("infallible: slot populated above")
        .matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::errors::MatcacheError;
    use ndarray::array;

    fn options() -> InvertConfig {
        InvertConfig::default()
    }

    fn assert_close(a: &Array2<f64>, b: &Array2<f64>) {
        assert_eq!(a.dim(), b.dim());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-9, "expected {y}, got {x}");
        }
    }

    #[test]
    fn test_miss_computes_and_populates_slot() {
        let mut holder = CachedMatrixHolder::new(array![[2.0, 0.0], [0.0, 2.0]]);
        assert!(holder.cached_inverse().is_none());

        let inv = cache_solve(&mut holder, &options())
            .expect("Failed to solve")
            .clone();

        assert_close(&inv, &array![[0.5, 0.0], [0.0, 0.5]]);
        let cached = holder.cached_inverse().expect("slot should be populated");
        assert_close(&cached.matrix, &inv);
    }

    #[test]
    fn test_single_computation_per_epoch() {
        let mut holder = CachedMatrixHolder::new(array![[2.0, 0.0], [0.0, 2.0]]);

        let first = cache_solve(&mut holder, &options())
            .expect("Failed to solve")
            .clone();
        let second = cache_solve(&mut holder, &options())
            .expect("Failed to solve")
            .clone();

        assert_close(&first, &second);

        // Uma única computação: exatamente um miss, depois só hits.
        let stats = holder.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_hit_returns_slot_untouched() {
        // Um valor plantado manualmente prova que o hit não recalcula:
        // cache_solve devolve o que está no slot, consistente ou não.
        let mut holder = CachedMatrixHolder::new(array![[2.0, 0.0], [0.0, 2.0]]);
        let sentinel = array![[7.0, 7.0], [7.0, 7.0]];
        holder.set_cached_inverse(sentinel.clone());

        let result = cache_solve(&mut holder, &options()).expect("Failed to solve");
        assert_eq!(result, &sentinel);
    }

    #[test]
    fn test_set_primary_triggers_recompute() {
        let mut holder = CachedMatrixHolder::new(array![[2.0, 0.0], [0.0, 2.0]]);
        cache_solve(&mut holder, &options()).expect("Failed to solve");

        holder.set_primary(array![[4.0, 0.0], [0.0, 4.0]]);
        assert!(holder.cached_inverse().is_none());

        let inv = cache_solve(&mut holder, &options())
            .expect("Failed to solve")
            .clone();
        assert_close(&inv, &array![[0.25, 0.0], [0.0, 0.25]]);
        assert_eq!(holder.stats().misses, 2);
    }

    #[test]
    fn test_roundtrip_against_identity() {
        let m = array![[4.0, 7.0, 2.0], [3.0, 5.0, 1.0], [8.0, 2.0, 6.0]];
        let mut holder = CachedMatrixHolder::new(m.clone());

        let inv = cache_solve(&mut holder, &options())
            .expect("Failed to solve")
            .clone();

        let product = m.dot(&inv);
        assert_close(&product, &Array2::eye(3));
    }

    #[test]
    fn test_failure_does_not_poison_slot() {
        let mut holder = CachedMatrixHolder::new(array![[1.0, 2.0], [2.0, 4.0]]);

        let result = cache_solve(&mut holder, &options());
        assert!(matches!(result, Err(MatcacheError::Linalg(_))));
        assert!(holder.cached_inverse().is_none());

        // Corrigir a primária recupera o holder: o slot continua ausente e
        // a próxima chamada computa normalmente.
        holder.set_primary(array![[2.0, 0.0], [0.0, 2.0]]);
        let inv = cache_solve(&mut holder, &options())
            .expect("Failed to solve")
            .clone();
        assert_close(&inv, &array![[0.5, 0.0], [0.0, 0.5]]);
    }

    #[test]
    fn test_options_reach_the_primitive() {
        let strict = InvertConfig {
            check_finite: true,
            singular_epsilon: 1e-3,
        };
        let mut holder = CachedMatrixHolder::new(array![[1e-3, 0.0], [0.0, 1e-3]]);

        let result = cache_solve(&mut holder, &strict);
        assert!(matches!(result, Err(MatcacheError::Singular(_))));
        assert!(holder.cached_inverse().is_none());
    }
}
