/// Hop bound used when a query does not name one.
pub const DEFAULT_MAX_HOPS: usize = 3;

// Fee resolution is fixed at three decimal digits (per mille)
pub const FEE_SCALE: u32 = 1000;

// Basis points, used when handing fees to downstream swap encoders
pub const BPS_SCALE: u32 = 10000;
