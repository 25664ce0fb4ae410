//! # Matcache
//!
//! Cache de memoização de slot único para inversão de matrizes densas.
//!
//! Um [`CachedMatrixHolder`] guarda uma matriz primária e, de forma
//! preguiçosa, a sua inversa. [`cache_solve`] calcula a inversa no máximo
//! uma vez por época: o intervalo entre duas trocas da matriz primária.
//! A inversão em si é delegada ao LAPACK via `ndarray-linalg`.
//!
//! ## Módulos
//!
//! - [`cache`] - Holder de slot único com invalidação na troca da primária
//! - [`solve`] - Primitiva de inversão e o ponto de entrada memoizado
//! - [`cli`] - Interface de linha de comando (feature `cli`)
//! - [`types`] - Configuração e tipos de erro compartilhados

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod solve;
pub mod types;

pub use cache::{CacheStats, CachedInverse, CachedMatrixHolder};
pub use solve::{cache_solve, invert};
pub use types::config::Config;
pub use types::errors::{MatcacheError, MatcacheResult};
