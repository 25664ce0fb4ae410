//! Inversão de matrizes com memoização.
//!
//! [`invert`] embrulha a primitiva de inversão do `ndarray-linalg`;
//! [`cache_solve`] é o ponto de entrada memoizado que calcula a inversa
//! no máximo uma vez por época do holder.

mod engine;
mod invert;

pub use engine::cache_solve;
pub use invert::invert;
