//! Cache de slot único para a inversa da matriz primária.
//!
//! Este módulo implementa o holder que guarda uma matriz primária e um
//! único slot de cache para a sua inversa. O slot é invalidado sempre que
//! a primária é trocada, evitando recomputações dentro de uma mesma época.

mod holder;

pub use holder::{CacheStats, CachedInverse, CachedMatrixHolder};
