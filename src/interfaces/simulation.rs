//! Generated purchase streams for running the register without an input file.

use crate::config::SimulationConfig;
use crate::domain::bills::Bills;
use crate::domain::denomination::Denomination;
use crate::domain::transaction::Purchase;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Costs replayed by `--test-data`.
pub const TEST_DATA: [u64; 8] = [6, 10, 17, 20, 31, 36, 40, 41];

/// Random item costs are drawn from this range (upper bound exclusive).
pub const MIN_COST: u64 = 2;
pub const MAX_COST: u64 = 49;

/// Bills a customer hands over for an item costing `cost`.
///
/// A single when the cost is odd, a five when it ends in 8 or 9, a ten when
/// `cost % 20` is above 13, and one twenty under $20 or two otherwise. Costs of
/// $42 and up are therefore underpaid.
pub fn payment_for(cost: u64) -> Bills {
    let ones = u32::from(cost % 2 == 1);
    let fives = u32::from(cost % 10 > 7);
    let tens = u32::from(cost % 20 > 13);
    let twenties = if cost < 20 { 1 } else { 2 };

    Bills::new()
        .with(Denomination::Twenty, twenties)
        .with(Denomination::Ten, tens)
        .with(Denomination::Five, fives)
        .with(Denomination::One, ones)
}

enum Costs {
    Random { rng: StdRng, remaining: usize },
    Fixed(std::vec::IntoIter<u64>),
}

/// Iterator over generated purchases.
pub struct PurchaseGenerator {
    costs: Costs,
}

impl PurchaseGenerator {
    /// `count` purchases with random costs; seeded when `seed` is given.
    pub fn random(count: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            costs: Costs::Random {
                rng,
                remaining: count,
            },
        }
    }

    /// Purchases for each of the given costs, in order.
    pub fn fixed(costs: impl IntoIterator<Item = u64>) -> Self {
        Self {
            costs: Costs::Fixed(costs.into_iter().collect::<Vec<_>>().into_iter()),
        }
    }

    /// The `TEST_DATA` sequence.
    pub fn test_data() -> Self {
        Self::fixed(TEST_DATA)
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        if config.test_data {
            Self::test_data()
        } else {
            Self::random(config.transactions, config.seed)
        }
    }
}

impl Iterator for PurchaseGenerator {
    type Item = Purchase;

    fn next(&mut self) -> Option<Self::Item> {
        let cost = match &mut self.costs {
            Costs::Random { rng, remaining } => {
                if *remaining == 0 {
                    return None;
                }
                *remaining -= 1;
                rng.gen_range(MIN_COST..MAX_COST)
            }
            Costs::Fixed(costs) => costs.next()?,
        };
        Some(Purchase::new(cost, payment_for(cost)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_rule() {
        assert_eq!(payment_for(6), Bills::new().with(Denomination::Twenty, 1));
        assert_eq!(
            payment_for(17),
            Bills::new()
                .with(Denomination::Twenty, 1)
                .with(Denomination::Ten, 1)
                .with(Denomination::One, 1)
        );
        assert_eq!(
            payment_for(39),
            Bills::new()
                .with(Denomination::Twenty, 2)
                .with(Denomination::Ten, 1)
                .with(Denomination::Five, 1)
                .with(Denomination::One, 1)
        );
        assert_eq!(payment_for(42).total(), 40);
    }

    #[test]
    fn test_random_costs_stay_in_range() {
        let purchases: Vec<Purchase> = PurchaseGenerator::random(500, Some(7)).collect();
        assert_eq!(purchases.len(), 500);
        assert!(
            purchases
                .iter()
                .all(|p| (MIN_COST..MAX_COST).contains(&p.cost))
        );
    }

    #[test]
    fn test_seed_is_reproducible() {
        let first: Vec<u64> = PurchaseGenerator::random(20, Some(42))
            .map(|p| p.cost)
            .collect();
        let second: Vec<u64> = PurchaseGenerator::random(20, Some(42))
            .map(|p| p.cost)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_test_data_sequence() {
        let config = SimulationConfig {
            test_data: true,
            ..Default::default()
        };
        let costs: Vec<u64> = PurchaseGenerator::from_config(&config)
            .map(|p| p.cost)
            .collect();
        assert_eq!(costs, TEST_DATA.to_vec());
    }
}
