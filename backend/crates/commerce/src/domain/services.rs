//! Domain Services
//!
//! Pure order arithmetic and set logic over game ids.

use kernel::id::GameId;
use std::collections::HashSet;

use crate::domain::entities::PricedLine;

/// Only single copies can be bought
pub const ALLOWED_QUANTITY: i64 = 1;

pub fn total_quantity(items: &[PricedLine]) -> u32 {
    items.iter().map(|i| i.quantity).sum()
}

pub fn total_price(items: &[PricedLine]) -> f64 {
    items.iter().map(|i| i.price).sum()
}

/// Requested games the customer already owns, in request order, without repeats
pub fn already_owned(owned: &[GameId], requested: &[GameId]) -> Vec<GameId> {
    let owned: HashSet<&GameId> = owned.iter().collect();
    let mut seen = HashSet::new();
    requested
        .iter()
        .filter(|g| owned.contains(g) && seen.insert(**g))
        .copied()
        .collect()
}

pub fn has_duplicates(requested: &[GameId]) -> bool {
    let mut seen = HashSet::with_capacity(requested.len());
    !requested.iter().all(|g| seen.insert(*g))
}
