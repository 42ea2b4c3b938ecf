use super::types::Pool;
use super::Result;
use crate::core::error::RouterError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

/// Anything that can hand the router a snapshot of pools.
pub trait PoolSource {
    fn fetch_pools(&self) -> Result<Vec<Pool>>;
}

/// Pools persisted on disk, as JSON (`.json`) or CSV (`.csv`).
#[derive(Debug, Clone)]
pub struct FilePoolSource {
    path: PathBuf,
}

impl FilePoolSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PoolSource for FilePoolSource {
    fn fetch_pools(&self) -> Result<Vec<Pool>> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let pools = match extension.as_deref() {
            Some("json") => read_pools_from_json(&self.path)?,
            Some("csv") => read_pools_from_csv(&self.path)?,
            _ => {
                return Err(
                    RouterError::UnsupportedPoolFile(self.path.display().to_string()).into(),
                )
            }
        };
        info!(path = %self.path.display(), pools = pools.len(), "loaded pools");
        Ok(pools)
    }
}

pub fn read_pools_from_json<P: AsRef<Path>>(pool_file_path: P) -> Result<Vec<Pool>> {
    let path = pool_file_path.as_ref();
    let pool_list_json = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read pool file {}", path.display()))?;
    let pool_list: PoolList = serde_json::from_str(&pool_list_json)
        .with_context(|| format!("Malformed pool list in {}", path.display()))?;
    Ok(pool_list.pools)
}

pub fn write_pools_to_json<P: AsRef<Path>>(pool_file_path: P, pools: &[Pool]) -> Result<()> {
    let pool_list = PoolList {
        pools: pools.to_vec(),
    };
    let json = serde_json::to_string_pretty(&pool_list)?;

    fs::write(pool_file_path, json).context("Error writing pool data on disk")?;
    Ok(())
}

// Header: token_a,token_b,reserve_a,reserve_b,fee_rate,id,pool_idx
pub fn read_pools_from_csv<P: AsRef<Path>>(pool_file_path: P) -> Result<Vec<Pool>> {
    let path = pool_file_path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Couldn't open pool file {}", path.display()))?;
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    let mut pools = vec![];
    for (line, record) in reader.deserialize::<Pool>().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let pool = record.with_context(|| {
            format!("Malformed pool on line {} of {}", line + 2, path.display())
        })?;
        pools.push(pool);
    }
    Ok(pools)
}

// On-disk JSON layout: { "pools": [ ... ] }
#[derive(Serialize, Deserialize, Debug, Clone)]
struct PoolList {
    pools: Vec<Pool>,
}
