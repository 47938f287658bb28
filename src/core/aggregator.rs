use crate::domain::model::{Offer, Outcome};
use std::cmp::Ordering;

/// Picks the cheapest offer out of a batch of call outcomes.
///
/// `Absent` and `Failed` outcomes are dropped uniformly; `None` means no
/// merchant produced an offer. Pure and order-independent: ties on price
/// resolve by merchant id, then offer id, so the winner is identical no
/// matter how the concurrent calls happened to complete.
pub fn select_winner(outcomes: Vec<Outcome>) -> Option<Offer> {
    tracing::debug!("Searching for winner offer among {} outcomes", outcomes.len());

    let winner = outcomes
        .into_iter()
        .filter_map(|outcome| match outcome {
            Outcome::Offer(offer) => Some(offer),
            Outcome::Absent | Outcome::Failed(_) => None,
        })
        .min_by(compare_offers);

    match &winner {
        Some(offer) => tracing::debug!(
            "Winner offer {} at price {} from merchant {}",
            offer.id,
            offer.price(),
            offer.merchant_id()
        ),
        None => tracing::debug!("No winner offer found"),
    }

    winner
}

// Prices are validated finite and non-negative before they get here, so
// total_cmp is a plain numeric order.
fn compare_offers(a: &Offer, b: &Offer) -> Ordering {
    a.price()
        .total_cmp(&b.price())
        .then_with(|| a.merchant_id().cmp(b.merchant_id()))
        .then_with(|| a.id.cmp(&b.id))
}
