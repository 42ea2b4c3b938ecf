use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RouterConfig {
    pub working_dir: String,
    pub pool_file: String,
    pub max_hops: usize, // used when a request does not name a bound
    pub max_hops_limit: usize, // largest bound a request may ask for
    pub listen_address: String,
    pub log_level: String,
}

#[derive(Serialize, Deserialize, ToSchema, IntoParams, Clone, Debug)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RouteRequest {
    #[schema(example = "0x6969696969696969696969696969696969696969")]
    pub token_in: String,

    #[schema(example = "0x2f6f07cdcf3588944bf4c42ac74ff24bf56e7590")]
    pub token_out: String,

    #[schema(example = "10000000000")]
    pub amount_in: String,

    #[schema(example = 3, nullable = true)]
    pub max_hops: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StepResponse {
    pub pool_id: String,
    pub pool_idx: u64,
    pub token_in: String,
    pub token_out: String,
    pub base: String,
    pub quote: String,
    pub base_in: bool,
    pub fee_bps: u32,
    pub amount_in: String,
    pub amount_out: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub token_in: String,
    pub token_out: String,
    pub amount_in: String,
    pub amount_out: String,
    pub hops: usize,
    pub path: Vec<String>,
    pub steps: Vec<StepResponse>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ReloadResponse {
    pub pools: usize,
}
