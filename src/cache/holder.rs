//! Holder de matriz com slot único de cache para a inversa.

use chrono::{DateTime, Utc};
use ndarray::Array2;

/// Inversa em cache.
#[derive(Debug, Clone)]
pub struct CachedInverse {
    /// A matriz inversa armazenada.
    pub matrix: Array2<f64>,

    /// Momento em que foi cacheada.
    pub cached_at: DateTime<Utc>,
}

impl CachedInverse {
    /// Cria uma nova inversa em cache.
    pub fn new(matrix: Array2<f64>) -> Self {
        Self {
            matrix,
            cached_at: Utc::now(),
        }
    }
}

/// Estatísticas do cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Holder de uma matriz primária e de um slot de cache para a sua inversa.
///
/// O slot tem exatamente dois estados: ausente (`None`) ou populado. Ele
/// nasce ausente e volta a ausente a cada [`set_primary`], que é o único
/// gatilho de invalidação. A chave do cache é a identidade da primária mais
/// recente, nunca igualdade de conteúdo: trocar a primária por uma matriz
/// semanticamente idêntica ainda invalida o slot.
///
/// [`set_primary`]: CachedMatrixHolder::set_primary
#[derive(Debug, Clone)]
pub struct CachedMatrixHolder {
    primary: Array2<f64>,
    cached_inverse: Option<CachedInverse>,
    hits: u64,
    misses: u64,
}

impl CachedMatrixHolder {
    /// Cria um holder com a matriz primária inicial e o slot ausente.
    pub fn new(primary: Array2<f64>) -> Self {
        Self {
            primary,
            cached_inverse: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Troca a matriz primária e invalida o slot de cache.
    ///
    /// Sempre bem-sucedida; nenhuma validação de forma ou invertibilidade
    /// acontece aqui.
    pub fn set_primary(&mut self, new_value: Array2<f64>) {
        self.primary = new_value;
        self.cached_inverse = None;
    }

    /// Retorna a matriz primária atual.
    pub fn primary(&self) -> &Array2<f64> {
        &self.primary
    }

    /// Sobrescreve o slot de cache com a inversa fornecida.
    ///
    /// O valor não é verificado contra a primária: a consistência
    /// matemática é obrigação de quem chama (na prática, de
    /// [`cache_solve`](crate::cache_solve)).
    pub fn set_cached_inverse(&mut self, value: Array2<f64>) {
        self.cached_inverse = Some(CachedInverse::new(value));
    }

    /// Retorna a inversa em cache, se o slot estiver populado.
    pub fn cached_inverse(&self) -> Option<&CachedInverse> {
        self.cached_inverse.as_ref()
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }
}

impl Default for CachedMatrixHolder {
    /// Holder vazio: primária 0x0 e slot ausente.
    fn default() -> Self {
        Self::new(Array2::zeros((0, 0)))
    }
}
