//! Tipos compartilhados do Matcache.

pub mod config;
pub mod errors;
