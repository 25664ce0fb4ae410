//! Tipos de erro do Matcache.

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Tipo de resultado padrão do Matcache.
pub type MatcacheResult<T> = Result<T, MatcacheError>;

/// Erros possíveis no Matcache.
#[derive(Error, Debug)]
pub enum MatcacheError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Configuração não encontrada em: {0}")]
    ConfigNotFound(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Falha na inversão: {0}")]
    Linalg(#[from] LinalgError),

    #[error("Matriz contém valores não finitos (NaN ou infinito)")]
    NonFinite,

    #[error("Matriz numericamente singular (det = {0:e})")]
    Singular(f64),

    #[error("Matriz malformada: {0}")]
    MatrixShape(String),

    #[error("{0}")]
    Other(String),
}

impl MatcacheError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
