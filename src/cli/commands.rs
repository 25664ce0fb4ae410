//! Implementação dos comandos CLI do Matcache.

use std::io::Read;
use std::path::{Path, PathBuf};

use ndarray::{array, Array2};

use crate::cache::CachedMatrixHolder;
use crate::solve::cache_solve;
use crate::types::config::Config;
use crate::types::errors::{MatcacheError, MatcacheResult};

/// Inverts a matrix read from a JSON file, optionally several times
/// through the same holder to demonstrate the cache.
pub fn invert_cmd(file: &Path, repeat: u64, config: &Config) -> MatcacheResult<()> {
    let matrix = read_matrix(file)?;
    let mut holder = CachedMatrixHolder::new(matrix);

    for _ in 0..repeat.max(1) {
        cache_solve(&mut holder, &config.invert)?;
    }

    let inverse = holder
        .cached_inverse()
        .map(|c| &c.matrix)
        .ok_or_else(|| MatcacheError::other("cache vazio após resolução"))?;

    println!("{}", serde_json::to_string_pretty(&to_rows(inverse))?);

    let stats = holder.stats();
    tracing::info!(
        "cache: {} hit(s), {} miss(es), taxa de acerto {:.0}%",
        stats.hits,
        stats.misses,
        stats.hit_rate() * 100.0
    );

    Ok(())
}

/// Runs the canonical demonstration scenario.
pub fn demo(config: &Config) -> MatcacheResult<()> {
    let m = array![[2.0, 0.0], [0.0, 2.0]];
    println!("Primária: {:?}", to_rows(&m));

    let mut holder = CachedMatrixHolder::new(m);
    println!(
        "Slot de cache após a construção: {}",
        slot_state(&holder)
    );

    let first = cache_solve(&mut holder, &config.invert)?.clone();
    println!("Primeira chamada (computa): {:?}", to_rows(&first));
    println!("Slot de cache agora: {}", slot_state(&holder));

    let second = cache_solve(&mut holder, &config.invert)?.clone();
    println!("Segunda chamada (cache): {:?}", to_rows(&second));

    let stats = holder.stats();
    println!("Estatísticas: {} hit(s), {} miss(es)", stats.hits, stats.misses);

    Ok(())
}

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> MatcacheResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("matcache.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Configuration created at: {}", config_path.display());

    Ok(())
}

/// Prints name and version.
pub fn version() {
    println!("matcache v{}", env!("CARGO_PKG_VERSION"));
}

/// Reads a matrix from a JSON file, `-` meaning stdin.
fn read_matrix(file: &Path) -> MatcacheResult<Array2<f64>> {
    let content = if file == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(file)?
    };

    let rows: Vec<Vec<f64>> = serde_json::from_str(&content)?;
    from_rows(rows)
}

/// Converts row vectors into an `Array2`, rejecting ragged or empty input.
///
/// Squareness is deliberately not checked here: that is the inversion
/// primitive's contract, not the parser's.
fn from_rows(rows: Vec<Vec<f64>>) -> MatcacheResult<Array2<f64>> {
    let nrows = rows.len();
    let ncols = rows.first().map(Vec::len).unwrap_or(0);

    if nrows == 0 || ncols == 0 {
        return Err(MatcacheError::MatrixShape("matriz vazia".to_string()));
    }
    if rows.iter().any(|r| r.len() != ncols) {
        return Err(MatcacheError::MatrixShape(
            "linhas com comprimentos diferentes".to_string(),
        ));
    }

    let data: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((nrows, ncols), data)
        .map_err(|e| MatcacheError::MatrixShape(e.to_string()))
}

fn to_rows(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    matrix.outer_iter().map(|row| row.to_vec()).collect()
}

fn slot_state(holder: &CachedMatrixHolder) -> &'static str {
    if holder.cached_inverse().is_some() {
        "populado"
    } else {
        "ausente"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_valid() {
        let m = from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("Failed to parse");
        assert_eq!(m.dim(), (2, 2));
        assert_eq!(m[[1, 0]], 3.0);
    }

    #[test]
    fn test_from_rows_non_square_is_accepted() {
        // A forma retangular é válida aqui; quadrada é contrato da inversão.
        let m = from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .expect("Failed to parse");
        assert_eq!(m.dim(), (2, 3));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(result, Err(MatcacheError::MatrixShape(_))));
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(matches!(
            from_rows(vec![]),
            Err(MatcacheError::MatrixShape(_))
        ));
        assert!(matches!(
            from_rows(vec![vec![]]),
            Err(MatcacheError::MatrixShape(_))
        ));
    }

    #[test]
    fn test_to_rows_roundtrip() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let m = from_rows(rows.clone()).expect("Failed to parse");
        assert_eq!(to_rows(&m), rows);
    }
}
