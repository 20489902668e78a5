//! Static fee table.
//!
//! The fee depends only on how many inputs a transaction spends, with a
//! floor so small transactions are never under-priced.

/// Fee charged per input, in zatoshi.
pub const BASE_FEE: u64 = 5_000;

/// Input count below which the fee stops shrinking.
pub const MIN_FEE_INPUTS: usize = 3;

/// Required fee for a transaction spending `input_count` inputs.
///
/// `fee(n) = max(n, 3) * 5000`
pub fn fee(input_count: usize) -> u64 {
    input_count.max(MIN_FEE_INPUTS) as u64 * BASE_FEE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_floor() {
        assert_eq!(fee(0), 15_000);
        assert_eq!(fee(1), 15_000);
        assert_eq!(fee(3), 15_000);
    }

    #[test]
    fn test_fee_scales_with_inputs() {
        assert_eq!(fee(4), 20_000);
        assert_eq!(fee(10), 50_000);
    }
}
