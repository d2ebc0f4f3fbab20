use crate::types::{HotelStatistics, ReviewRecord};
use thiserror::Error;

/// Why a detected review card produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("card has no title, positive or negative text")]
    NoContent,
}

/// Per-card extraction result, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum CardOutcome {
    Parsed(ReviewRecord),
    Skipped { index: usize, reason: SkipReason },
}

/// Everything extracted from one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedPage {
    /// Only what this page makes observable; `total_reviews` may be unset.
    pub hotel_stats: HotelStatistics,
    pub cards: Vec<CardOutcome>,
}

impl ParsedPage {
    pub fn reviews(&self) -> impl Iterator<Item = &ReviewRecord> {
        self.cards.iter().filter_map(|card| match card {
            CardOutcome::Parsed(review) => Some(review),
            CardOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = (usize, SkipReason)> + '_ {
        self.cards.iter().filter_map(|card| match card {
            CardOutcome::Skipped { index, reason } => Some((*index, *reason)),
            CardOutcome::Parsed(_) => None,
        })
    }

    pub fn into_parts(self) -> (HotelStatistics, Vec<ReviewRecord>) {
        let reviews = self
            .cards
            .into_iter()
            .filter_map(|card| match card {
                CardOutcome::Parsed(review) => Some(review),
                CardOutcome::Skipped { .. } => None,
            })
            .collect();
        (self.hotel_stats, reviews)
    }
}
