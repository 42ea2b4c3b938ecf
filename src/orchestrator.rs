use super::core::indexer::pool::{FilePoolSource, PoolSource};
use super::core::pool_index::PoolIndex;
use super::core::steps::to_swap_steps;
use super::core::types::{normalize_token, parse_amount, Route};
use super::core::RouterError;
use super::types::{RouteRequest, RouteResponse, RouterConfig, StepResponse};
use anyhow::{Context, Result};
use num_bigint::BigUint;
use tracing::{info, warn};

/// A request that passed validation, ready to hand to the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub token_in: String,
    pub token_out: String,
    pub amount_in: BigUint,
    pub max_hops: usize,
}

pub fn validate_request(
    config: &RouterConfig,
    request: &RouteRequest,
) -> Result<ValidatedRequest> {
    let token_in = normalize_token(&request.token_in);
    let token_out = normalize_token(&request.token_out);
    if token_in.is_empty() || token_out.is_empty() {
        return Err(RouterError::EmptyToken.into());
    }

    let amount_in = parse_amount(&request.amount_in)?;

    let max_hops = request.max_hops.unwrap_or(config.max_hops);
    if max_hops > config.max_hops_limit {
        return Err(RouterError::HopLimitExceeded {
            requested: max_hops,
            limit: config.max_hops_limit,
        }
        .into());
    }

    Ok(ValidatedRequest {
        token_in,
        token_out,
        amount_in,
        max_hops,
    })
}

pub fn load_pool_index(config: &RouterConfig) -> Result<PoolIndex> {
    load_pool_index_from(&FilePoolSource::new(config.pool_file_path()))
}

pub fn load_pool_index_from<S: PoolSource>(source: &S) -> Result<PoolIndex> {
    let pools = source
        .fetch_pools()
        .context("Error fetching pools while building pool index")?;
    let index = PoolIndex::new(pools);
    if index.is_empty() {
        warn!("pool source returned no pools; every route request will miss");
    }
    Ok(index)
}

/// `Ok(None)` when the request is valid but no route connects the tokens.
pub fn get_best_route(
    config: &RouterConfig,
    index: &PoolIndex,
    request: &RouteRequest,
) -> Result<Option<RouteResponse>> {
    let request = validate_request(config, request)?;
    let route = index.find_best_route(
        &request.token_in,
        &request.token_out,
        &request.amount_in,
        request.max_hops,
    );

    Ok(route.map(|route| {
        info!(
            token_in = %request.token_in,
            token_out = %request.token_out,
            amount_in = %request.amount_in,
            amount_out = %route.output_amount,
            hops = route.hops(),
            "quoted route"
        );
        build_response(&route)
    }))
}

pub fn build_response(route: &Route) -> RouteResponse {
    let steps = to_swap_steps(route)
        .into_iter()
        .map(|step| StepResponse {
            pool_id: step.pool_id,
            pool_idx: step.pool_idx,
            token_in: step.token_in,
            token_out: step.token_out,
            base: step.base,
            quote: step.quote,
            base_in: step.base_in,
            fee_bps: step.fee_bps,
            amount_in: step.amount_in.to_string(),
            amount_out: step.amount_out.to_string(),
        })
        .collect();

    RouteResponse {
        token_in: route.token_in().to_string(),
        token_out: route.token_out().to_string(),
        amount_in: route.amount_in.to_string(),
        amount_out: route.output_amount.to_string(),
        hops: route.hops(),
        path: route.path.clone(),
        steps,
    }
}
