use super::denomination::Denomination;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Bill counts keyed by denomination.
///
/// Used for the till's stock, a customer's tendered payment and the change
/// handed back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bills {
    pub twenties: u32,
    pub tens: u32,
    pub fives: u32,
    pub ones: u32,
}

impl Bills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, denomination: Denomination, count: u32) -> Self {
        *self.slot_mut(denomination) = count;
        self
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        match denomination {
            Denomination::One => self.ones,
            Denomination::Five => self.fives,
            Denomination::Ten => self.tens,
            Denomination::Twenty => self.twenties,
        }
    }

    pub fn add(&mut self, denomination: Denomination, count: u32) {
        *self.slot_mut(denomination) += count;
    }

    /// Dollar value of all bills.
    pub fn total(&self) -> u64 {
        self.iter()
            .map(|(d, count)| d.value() * u64::from(count))
            .sum()
    }

    /// Counts from the largest denomination down.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u32)> + '_ {
        Denomination::ALL_DESCENDING
            .into_iter()
            .map(|d| (d, self.count(d)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, count)| count == 0)
    }

    pub(crate) fn slot_mut(&mut self, denomination: Denomination) -> &mut u32 {
        match denomination {
            Denomination::One => &mut self.ones,
            Denomination::Five => &mut self.fives,
            Denomination::Ten => &mut self.tens,
            Denomination::Twenty => &mut self.twenties,
        }
    }
}

impl Index<Denomination> for Bills {
    type Output = u32;

    fn index(&self, denomination: Denomination) -> &Self::Output {
        match denomination {
            Denomination::One => &self.ones,
            Denomination::Five => &self.fives,
            Denomination::Ten => &self.tens,
            Denomination::Twenty => &self.twenties,
        }
    }
}

impl FromIterator<(Denomination, u32)> for Bills {
    fn from_iter<I: IntoIterator<Item = (Denomination, u32)>>(iter: I) -> Self {
        let mut bills = Bills::new();
        for (denomination, count) in iter {
            bills.add(denomination, count);
        }
        bills
    }
}
