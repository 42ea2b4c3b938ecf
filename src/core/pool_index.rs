use super::types::{PairKey, Pool};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Pools keyed by token pair. Every pool is filed under both orderings, and
/// parallel pools on the same pair are kept as separate entries in the
/// order they were supplied.
#[derive(Debug, Default)]
pub struct PoolIndex {
    pairs: HashMap<PairKey, Vec<Arc<Pool>>>,
    // Pair keys starting at each token, in the order the pair first appeared
    partners: HashMap<String, Vec<PairKey>>,
    pool_count: usize,
}

impl PoolIndex {
    pub fn new(pools: Vec<Pool>) -> Self {
        let mut index = PoolIndex::default();
        for pool in pools {
            index.add_pool(Arc::new(pool));
        }
        debug!(
            pools = index.pool_count,
            tokens = index.partners.len(),
            "built pool index"
        );
        index
    }

    // Register under both orderings so lookup works from either side
    fn add_pool(&mut self, pool: Arc<Pool>) {
        let key = PairKey::new(&pool.token_a, &pool.token_b);
        let reversed = key.reversed();

        if key == reversed {
            self.file_under(key, pool);
        } else {
            self.file_under(key, pool.clone());
            self.file_under(reversed, pool);
        }
        self.pool_count += 1;
    }

    fn file_under(&mut self, key: PairKey, pool: Arc<Pool>) {
        let pools = self.pairs.entry(key.clone()).or_default();
        if pools.is_empty() {
            self.partners.entry(key.0.clone()).or_default().push(key);
        }
        pools.push(pool);
    }

    /// Every pool touching `token`, with the token on its other side.
    /// Pairs come in first-seen order, pools within a pair in input order.
    pub fn neighbors<'a>(
        &'a self,
        token: &str,
    ) -> impl Iterator<Item = (&'a str, &'a Arc<Pool>)> + 'a {
        self.partners
            .get(token)
            .into_iter()
            .flatten()
            .flat_map(move |key| {
                self.pairs
                    .get(key)
                    .into_iter()
                    .flatten()
                    .map(move |pool| (key.1.as_str(), pool))
            })
    }

    /// All pools joining `token_a` and `token_b`, in either order. This is the
    /// pair lookup for callers that already know both tokens.
    pub fn pools_between(&self, token_a: &str, token_b: &str) -> &[Arc<Pool>] {
        self.pairs
            .get(&PairKey::new(token_a, token_b))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn pool_count(&self) -> usize {
        self.pool_count
    }

    pub fn is_empty(&self) -> bool {
        self.pool_count == 0
    }
}
