use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four bill values the till holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Denomination {
    One,
    Five,
    Ten,
    Twenty,
}

impl Denomination {
    /// Order in which change is disbursed.
    pub const ALL_DESCENDING: [Denomination; 4] = [
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::One,
    ];

    /// Face value in dollars.
    pub const fn value(self) -> u64 {
        match self {
            Denomination::One => 1,
            Denomination::Five => 5,
            Denomination::Ten => 10,
            Denomination::Twenty => 20,
        }
    }

    /// Plural name used in till summaries ("twenties", "ones").
    pub const fn plural(self) -> &'static str {
        match self {
            Denomination::One => "ones",
            Denomination::Five => "fives",
            Denomination::Ten => "tens",
            Denomination::Twenty => "twenties",
        }
    }

    /// Largest denomination whose value does not exceed `amount`.
    ///
    /// Amounts below one dollar still map to `One`, the smallest bill that
    /// could have settled them.
    pub fn largest_fitting(amount: u64) -> Self {
        Self::ALL_DESCENDING
            .into_iter()
            .find(|d| d.value() <= amount)
            .unwrap_or(Denomination::One)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.value())
    }
}
