use super::constants::{BPS_SCALE, FEE_SCALE};
use super::types::{normalize_token, FeeRate, Pool};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

impl Pool {
    pub fn new(
        token_a: &str,
        token_b: &str,
        reserve_a: BigUint,
        reserve_b: BigUint,
        fee_rate: FeeRate,
    ) -> Self {
        Pool {
            token_a: normalize_token(token_a),
            token_b: normalize_token(token_b),
            reserve_a,
            reserve_b,
            fee_rate,
            id: String::new(),
            pool_idx: 0,
        }
    }

    /// Attach the venue identifiers that downstream swap encoders need.
    pub fn with_id(mut self, id: &str, pool_idx: u64) -> Self {
        self.id = id.to_string();
        self.pool_idx = pool_idx;
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.token_a == token || self.token_b == token
    }

    /// Token on the far side of the pool when entering with `token_in`.
    pub fn other_token(&self, token_in: &str) -> &str {
        if self.token_a == token_in {
            &self.token_b
        } else {
            &self.token_a
        }
    }

    /// (reserve_in, reserve_out) for a swap entering with `token_in`.
    pub fn reserves_for(&self, token_in: &str) -> (&BigUint, &BigUint) {
        if self.token_a == token_in {
            (&self.reserve_a, &self.reserve_b)
        } else {
            (&self.reserve_b, &self.reserve_a)
        }
    }

    /// Output of swapping `amount_in` of `token_in` through this pool.
    pub fn get_amount_out(&self, amount_in: &BigUint, token_in: &str) -> BigUint {
        let (reserve_in, reserve_out) = self.reserves_for(token_in);
        get_amount_out(amount_in, reserve_in, reserve_out, &self.fee_rate)
    }

    pub fn fee_bps(&self) -> u32 {
        // fee < 1, so this never exceeds BPS_SCALE
        self.fee_rate.taken(BPS_SCALE).to_u32().unwrap_or(BPS_SCALE)
    }
}

/// Constant-product output for one hop, all floor division:
///
/// amount_in_with_fee = amount_in * floor((1 - fee) * 1000) / 1000
/// amount_out = amount_in_with_fee * reserve_out / (reserve_in + amount_in_with_fee)
///
/// An empty pool with nothing coming in yields zero rather than dividing by zero.
pub fn get_amount_out(
    amount_in: &BigUint,
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    fee_rate: &FeeRate,
) -> BigUint {
    let fee_denominator = BigUint::from(FEE_SCALE);
    let amount_in_with_fee = amount_in * fee_rate.retained(FEE_SCALE) / &fee_denominator;

    let numerator = &amount_in_with_fee * reserve_out;
    let denominator = reserve_in + &amount_in_with_fee;

    if denominator.is_zero() {
        return BigUint::ZERO;
    }
    numerator / denominator
}
