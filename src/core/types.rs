use super::error::RouterError;
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Canonical form of a token identifier: trimmed and lowercased.
pub fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Ordered token pair used as a lookup key. The index stores every pool
/// under both orderings so either direction resolves.
#[derive(Serialize, Deserialize, Hash, Eq, PartialEq, Clone, Debug)]
pub struct PairKey(pub String, pub String);

impl PairKey {
    pub fn new(from: &str, to: &str) -> Self {
        PairKey(from.to_string(), to.to_string())
    }

    pub fn reversed(&self) -> Self {
        PairKey(self.1.clone(), self.0.clone())
    }
}

/// Exact decimal fee fraction, `units / 10^decimals`, always in [0, 1).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FeeRepr", into = "String")]
pub struct FeeRate {
    units: BigUint,
    decimals: u32,
}

// Pool files may carry the fee as a JSON number or as text
#[derive(Deserialize)]
#[serde(untagged)]
enum FeeRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<FeeRepr> for FeeRate {
    type Error = RouterError;

    fn try_from(repr: FeeRepr) -> Result<Self, Self::Error> {
        match repr {
            FeeRepr::Number(value) => FeeRate::try_from(value),
            FeeRepr::Text(text) => text.parse(),
        }
    }
}

impl TryFrom<f64> for FeeRate {
    type Error = RouterError;

    // Shortest round-trip decimal of the float, so 0.003 is exactly 3/1000
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(RouterError::InvalidFeeRate(value.to_string()));
        }
        value.to_string().parse()
    }
}

impl FromStr for FeeRate {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || RouterError::InvalidFeeRate(s.to_string());

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if whole.chars().any(|c| c != '0') {
            return Err(invalid());
        }

        let fraction = fraction.trim_end_matches('0');
        let decimals = u32::try_from(fraction.len()).map_err(|_| invalid())?;
        let units = if fraction.is_empty() {
            BigUint::ZERO
        } else {
            BigUint::from_str(fraction).map_err(|_| invalid())?
        };

        Ok(FeeRate { units, decimals })
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decimals == 0 {
            return write!(f, "0");
        }
        write!(
            f,
            "0.{:0>width$}",
            self.units.to_string(),
            width = self.decimals as usize
        )
    }
}

impl From<FeeRate> for String {
    fn from(fee: FeeRate) -> Self {
        fee.to_string()
    }
}

impl FeeRate {
    pub fn zero() -> Self {
        FeeRate {
            units: BigUint::ZERO,
            decimals: 0,
        }
    }

    fn denominator(&self) -> BigUint {
        BigUint::from(10u32).pow(self.decimals)
    }

    /// Share of the input kept for the swap, floored to `scale` resolution:
    /// `floor((1 - fee) * scale)`.
    pub fn retained(&self, scale: u32) -> BigUint {
        let denominator = self.denominator();
        (&denominator - &self.units) * BigUint::from(scale) / denominator
    }

    /// Fee taken by the pool, floored to `scale` resolution: `floor(fee * scale)`.
    pub fn taken(&self, scale: u32) -> BigUint {
        &self.units * BigUint::from(scale) / self.denominator()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    #[serde(deserialize_with = "deserialize_token")]
    pub token_a: String,
    #[serde(deserialize_with = "deserialize_token")]
    pub token_b: String,
    #[serde(with = "decimal")]
    pub reserve_a: BigUint,
    #[serde(with = "decimal")]
    pub reserve_b: BigUint,
    pub fee_rate: FeeRate,
    #[serde(default)]
    pub id: String, // External pool identifier, not used by the search
    #[serde(default)]
    pub pool_idx: u64,
}

#[derive(Clone, Debug)]
pub struct Route {
    pub path: Vec<String>, // ["A", "B", "C"] for route A->B->C
    pub pools: Vec<Arc<Pool>>,
    pub amount_in: BigUint,
    pub output_amount: BigUint,
}

/// One hop of a route, in the shape swap encoders consume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SwapStep {
    pub pool_id: String,
    pub pool_idx: u64,
    pub token_in: String,
    pub token_out: String,
    pub base: String,
    pub quote: String,
    pub base_in: bool,
    pub fee_bps: u32,
    #[serde(with = "decimal")]
    pub amount_in: BigUint,
    #[serde(with = "decimal")]
    pub amount_out: BigUint,
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let token = String::deserialize(deserializer)?;
    let token = normalize_token(&token);
    if token.is_empty() {
        return Err(serde::de::Error::custom(RouterError::EmptyToken));
    }
    Ok(token)
}

// Amounts travel as base-10 strings; JSON numbers cannot hold on-chain reserves
pub(crate) mod decimal {
    use super::RouterError;
    use num_bigint::BigUint;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse_amount(&text).map_err(serde::de::Error::custom)
    }

    pub fn parse_amount(text: &str) -> Result<BigUint, RouterError> {
        let text = text.trim();
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
            return Err(RouterError::InvalidAmount(text.to_string()));
        }
        text.parse::<BigUint>()
            .map_err(|_| RouterError::InvalidAmount(text.to_string()))
    }
}

pub use decimal::parse_amount;
