use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reserved scale bounds for a category score. Never filled by extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub lower: Option<f64>,
    pub higher: Option<f64>,
}

/// One category sub-rating (e.g. "Staff" → 9.1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: f64,
    /// Label text as displayed on the page.
    pub translation: String,
    #[serde(default)]
    pub bounds: ScoreBounds,
}

/// Hotel-level aggregate statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelStatistics {
    pub total_reviews: Option<u64>,
    #[serde(default)]
    pub scores: BTreeMap<String, ScoreEntry>,
}

impl HotelStatistics {
    /// Fill fields still unknown here from a later page. First observation wins.
    pub fn absorb(&mut self, other: HotelStatistics) {
        if self.total_reviews.is_none() {
            self.total_reviews = other.total_reviews;
        }
        if self.scores.is_empty() {
            self.scores = other.scores;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub name: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub room_type: Option<String>,
    /// Reserved; never filled by extraction.
    pub check_in: Option<String>,
    /// Reserved; never filled by extraction.
    pub check_out: Option<String>,
    pub nights: Option<u32>,
    pub customer_type: Option<String>,
}

/// A single guest review, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub score: Option<f64>,
    /// UNIX timestamp (UTC seconds), only from machine-readable dates.
    pub review_date: Option<i64>,
    pub title: String,
    pub positive_content: String,
    pub negative_content: String,
    pub language: Option<String>,
    pub guest: Guest,
    pub booking: Booking,
    #[serde(default)]
    pub photos: Vec<String>,
}

impl ReviewRecord {
    /// A card without title and without any sentiment text is not a review.
    pub fn has_content(&self) -> bool {
        !(self.title.is_empty()
            && self.positive_content.is_empty()
            && self.negative_content.is_empty())
    }
}

/// Accumulated output of one scrape run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeResult {
    pub hotel_stats: HotelStatistics,
    pub reviews: Vec<ReviewRecord>,
}
