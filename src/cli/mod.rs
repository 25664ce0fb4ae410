//! Interface de linha de comando do Matcache.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Matcache - inversão de matrizes com cache de slot único.
#[derive(Parser, Debug)]
#[command(name = "matcache")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "matcache.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inverte uma matriz lida de um arquivo JSON (`-` para stdin).
    Invert {
        /// Arquivo com a matriz em JSON (`[[...],[...]]`).
        file: PathBuf,

        /// Resolve N vezes no mesmo holder para demonstrar o cache.
        #[arg(short, long, default_value_t = 1)]
        repeat: u64,
    },

    /// Roda o cenário de demonstração do cache.
    Demo,

    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Mostra versão.
    Version,
}
