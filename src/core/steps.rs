use super::types::{Route, SwapStep};

/// Turn a route into per-hop swap instructions.
pub fn to_swap_steps(route: &Route) -> Vec<SwapStep> {
    let amounts_out = route.hop_amounts();

    let mut amount_in = route.amount_in.clone();
    let mut steps = Vec::with_capacity(route.pools.len());
    for ((tokens, pool), amount_out) in route
        .path
        .windows(2)
        .zip(&route.pools)
        .zip(amounts_out)
    {
        steps.push(SwapStep {
            pool_id: pool.id.clone(),
            pool_idx: pool.pool_idx,
            token_in: tokens[0].clone(),
            token_out: tokens[1].clone(),
            base: pool.token_a.clone(),
            quote: pool.token_b.clone(),
            base_in: pool.token_a == tokens[0],
            fee_bps: pool.fee_bps(),
            amount_in,
            amount_out: amount_out.clone(),
        });
        amount_in = amount_out;
    }
    steps
}
