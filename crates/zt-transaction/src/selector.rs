//! Greedy first-fit coin selection.
//!
//! Candidates are taken in the order the caller supplies them. Each new
//! input can raise the fee, so the running target grows by the fee delta
//! before the candidate's value is applied against it. Selection stops as
//! soon as the target is covered.

use std::ops::ControlFlow;

use crate::fee::fee;
use crate::utxo::UnspentOutput;

/// Accumulator for the selection fold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Inputs picked so far, in candidate order.
    pub selected: Vec<UnspentOutput>,
    /// Value still needed to cover amount plus fee.
    pub remaining: u64,
    /// Fee for the inputs selected so far.
    pub current_fee: u64,
}

impl Selection {
    /// Start a selection targeting `amount`.
    pub fn new(amount: u64) -> Self {
        Selection {
            selected: Vec::new(),
            remaining: amount,
            current_fee: 0,
        }
    }

    /// Fold one candidate into the selection, returning the next state.
    ///
    /// Breaks without consuming the candidate once the target is covered.
    pub fn step(self, candidate: &UnspentOutput) -> ControlFlow<Self, Self> {
        if self.remaining == 0 {
            return ControlFlow::Break(self);
        }

        let Selection {
            mut selected,
            remaining,
            current_fee,
        } = self;
        selected.push(candidate.clone());

        let next_fee = fee(selected.len());
        let remaining = remaining.saturating_add(next_fee - current_fee);
        let used = candidate.satoshis.min(remaining);

        ControlFlow::Continue(Selection {
            selected,
            remaining: remaining - used,
            current_fee: next_fee,
        })
    }

    /// Total value of the selected inputs.
    pub fn total(&self) -> u64 {
        self.selected.iter().map(|u| u.satoshis).sum()
    }

    /// Whether the selected inputs cover the target.
    pub fn is_covered(&self) -> bool {
        self.remaining == 0
    }
}

/// Pick inputs from `candidates` until `amount` plus fee is covered.
///
/// Returns every candidate when funds are insufficient; the shortfall is
/// detected later by the change computation. An `amount` of zero selects
/// nothing.
pub fn select_utxos(candidates: &[UnspentOutput], amount: u64) -> Selection {
    match candidates
        .iter()
        .try_fold(Selection::new(amount), Selection::step)
    {
        ControlFlow::Break(done) | ControlFlow::Continue(done) => done,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zt_primitives::chainhash::Hash;

    fn utxo(n: u8, satoshis: u64) -> UnspentOutput {
        UnspentOutput {
            address: "tmP9jLgTnhDdKdWJCm4BT2t6acGnxqP14yU".to_string(),
            txid: Hash::new([n; 32]),
            output_index: n as u32,
            satoshis,
        }
    }

    #[test]
    fn test_select_golden_set() {
        let utxos = vec![utxo(1, 400_000), utxo(2, 300_000), utxo(3, 500_000)];
        let sel = select_utxos(&utxos, 1_000_000);
        assert_eq!(sel.selected.len(), 3);
        assert_eq!(sel.current_fee, 15_000);
        assert!(sel.is_covered());
        assert_eq!(sel.total(), 1_200_000);
    }

    #[test]
    fn test_select_stops_when_covered() {
        let utxos = vec![utxo(1, 2_000_000), utxo(2, 300_000)];
        let sel = select_utxos(&utxos, 1_000_000);
        assert_eq!(sel.selected.len(), 1);
        assert_eq!(sel.selected[0].output_index, 1);
        assert_eq!(sel.current_fee, 15_000);
    }

    #[test]
    fn test_select_fee_growth_pulls_extra_input() {
        // Four inputs cost 20000, so the fourth raises the target by 5000.
        let utxos = vec![
            utxo(1, 10_000),
            utxo(2, 10_000),
            utxo(3, 10_000),
            utxo(4, 10_000),
            utxo(5, 10_000),
        ];
        let sel = select_utxos(&utxos, 21_000);
        assert_eq!(sel.selected.len(), 5);
        assert_eq!(sel.current_fee, 25_000);
        assert!(sel.is_covered());
        assert!(sel.total() >= 21_000 + sel.current_fee);
    }

    #[test]
    fn test_select_insufficient_returns_all() {
        let utxos = vec![utxo(1, 100), utxo(2, 200)];
        let sel = select_utxos(&utxos, 1_000_000);
        assert_eq!(sel.selected.len(), 2);
        assert!(!sel.is_covered());
    }

    #[test]
    fn test_select_zero_amount_selects_nothing() {
        let utxos = vec![utxo(1, 100)];
        let sel = select_utxos(&utxos, 0);
        assert!(sel.selected.is_empty());
        assert_eq!(sel.current_fee, 0);
    }

    #[test]
    fn test_select_huge_amount_saturates() {
        let utxos = vec![utxo(1, 400_000), utxo(2, 300_000)];
        let sel = select_utxos(&utxos, u64::MAX - 1);
        assert_eq!(sel.selected.len(), 2);
        assert!(!sel.is_covered());
        assert_eq!(sel.current_fee, 15_000);
    }

    #[test]
    fn test_select_empty_candidates() {
        let sel = select_utxos(&[], 5);
        assert!(sel.selected.is_empty());
        assert_eq!(sel.remaining, 5);
    }
}
