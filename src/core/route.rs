use super::constants::DEFAULT_MAX_HOPS;
use super::pool_index::PoolIndex;
use super::types::{normalize_token, Pool, Route};
use num_bigint::BigUint;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, trace};

impl PoolIndex {
    /// Best single-path route with the default hop bound.
    pub fn best_route(
        &self,
        token_in: &str,
        token_out: &str,
        amount_in: &BigUint,
    ) -> Option<Route> {
        self.find_best_route(token_in, token_out, amount_in, DEFAULT_MAX_HOPS)
    }

    /// Exhaustive depth-bounded search for the path with the largest output.
    ///
    /// Tokens never repeat within a path. Candidates are compared with strict
    /// greater-than, so among equal outputs the first one discovered wins;
    /// discovery follows `neighbors` order: pairs as first declared, then
    /// parallel pools in declaration order.
    pub fn find_best_route(
        &self,
        token_in: &str,
        token_out: &str,
        amount_in: &BigUint,
        max_hops: usize,
    ) -> Option<Route> {
        let source = normalize_token(token_in);
        let target = normalize_token(token_out);
        if source == target {
            return None;
        }

        let mut search = Search {
            index: self,
            target: &target,
            max_hops,
            amount_in,
            visited: HashSet::from([source.as_str()]),
            path: vec![source.as_str()],
            pools: Vec::new(),
            best: None,
        };
        search.explore(&source, amount_in, 0);

        match &search.best {
            Some(route) => debug!(
                token_in = %source,
                token_out = %target,
                hops = route.pools.len(),
                amount_out = %route.output_amount,
                "found route"
            ),
            None => debug!(token_in = %source, token_out = %target, max_hops, "no route"),
        }
        search.best
    }
}

// Transient state of one query: the current path plus the best complete route so far
struct Search<'a> {
    index: &'a PoolIndex,
    target: &'a str,
    max_hops: usize,
    amount_in: &'a BigUint,
    visited: HashSet<&'a str>,
    path: Vec<&'a str>,
    pools: Vec<&'a Arc<Pool>>,
    best: Option<Route>,
}

impl<'a> Search<'a> {
    fn explore(&mut self, current: &'a str, amount: &BigUint, depth: usize) {
        if depth >= self.max_hops {
            return;
        }

        let index = self.index;
        for (other, pool) in index.neighbors(current) {
            if self.visited.contains(other) {
                continue;
            }
            let amount_out = pool.get_amount_out(amount, current);

            if other == self.target {
                self.offer(other, pool, amount_out);
                continue;
            }

            self.visited.insert(other);
            self.path.push(other);
            self.pools.push(pool);

            self.explore(other, &amount_out, depth + 1);

            self.pools.pop();
            self.path.pop();
            self.visited.remove(other);
        }
    }

    fn offer(&mut self, last: &str, pool: &Arc<Pool>, amount_out: BigUint) {
        let improves = match &self.best {
            Some(best) => amount_out > best.output_amount,
            None => true,
        };
        trace!(
            path = ?self.path,
            last,
            amount_out = %amount_out,
            improves,
            "candidate route"
        );
        if !improves {
            return;
        }

        let mut path: Vec<String> = self.path.iter().map(|token| token.to_string()).collect();
        path.push(last.to_string());
        let mut pools: Vec<Arc<Pool>> = self.pools.iter().map(|pool| Arc::clone(pool)).collect();
        pools.push(Arc::clone(pool));

        self.best = Some(Route {
            path,
            pools,
            amount_in: self.amount_in.clone(),
            output_amount: amount_out,
        });
    }
}

/// Replays `amount_in` along `path` through `pools`, returning the amount
/// held after each hop. `None` if the pools do not line up with the path.
pub fn simulate_path(
    path: &[String],
    pools: &[Arc<Pool>],
    amount_in: &BigUint,
) -> Option<Vec<BigUint>> {
    if pools.is_empty() || path.len() != pools.len() + 1 {
        return None;
    }

    let mut amounts = Vec::with_capacity(pools.len());
    let mut current = amount_in.clone();
    for (tokens, pool) in path.windows(2).zip(pools) {
        let (token_in, token_out) = (&tokens[0], &tokens[1]);
        if !pool.contains(token_in) || pool.other_token(token_in) != token_out {
            return None;
        }
        current = pool.get_amount_out(&current, token_in);
        amounts.push(current.clone());
    }
    Some(amounts)
}

impl Route {
    pub fn hops(&self) -> usize {
        self.pools.len()
    }

    pub fn token_in(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    pub fn token_out(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Output after each hop, recomputed from the route's own pools.
    pub fn hop_amounts(&self) -> Vec<BigUint> {
        simulate_path(&self.path, &self.pools, &self.amount_in).unwrap_or_default()
    }
}
