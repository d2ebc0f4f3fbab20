use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use rust_xlsxwriter::Workbook;
use serde::Serialize;

use super::types::Cell;
use crate::error::{Result, ScrapeError};
use crate::types::{HotelStatistics, ReviewRecord};

/// JSON shape of one exported review: hotel statistics first, then the review.
#[derive(Serialize)]
struct ExportRecord<'a> {
    #[serde(rename = "hotelStats")]
    hotel_stats: &'a HotelStatistics,
    #[serde(flatten)]
    review: &'a ReviewRecord,
}

/// Project a review (plus the hotel statistics) onto dotted column names.
///
/// Columns depend only on `stats`, so every row of a dataset lines up.
pub fn flatten_review(stats: &HotelStatistics, review: &ReviewRecord) -> Vec<(String, Cell)> {
    let mut row = Vec::with_capacity(16 + stats.scores.len());
    row.push((
        "hotelStats.totalReviews".to_string(),
        Cell::opt_integer(stats.total_reviews),
    ));
    for (key, entry) in &stats.scores {
        row.push((format!("hotelStats.scores.{key}"), Cell::Number(entry.score)));
    }

    let mut push = |name: &str, cell: Cell| row.push((name.to_string(), cell));
    push("score", Cell::opt_number(review.score));
    push("reviewDate", Cell::opt_integer(review.review_date));
    push("title", Cell::text(&review.title));
    push("positiveContent", Cell::text(&review.positive_content));
    push("negativeContent", Cell::text(&review.negative_content));
    push("language", Cell::opt_text(review.language.as_deref()));
    push("guest.name", Cell::opt_text(review.guest.name.as_deref()));
    push("guest.country", Cell::opt_text(review.guest.country.as_deref()));
    push("guest.type", Cell::opt_text(review.guest.kind.as_deref()));
    push("booking.roomType", Cell::opt_text(review.booking.room_type.as_deref()));
    push("booking.checkIn", Cell::opt_text(review.booking.check_in.as_deref()));
    push("booking.checkOut", Cell::opt_text(review.booking.check_out.as_deref()));
    push("booking.nights", Cell::opt_integer(review.booking.nights));
    push("booking.customerType", Cell::opt_text(review.booking.customer_type.as_deref()));
    push("photos", Cell::Text(review.photos.join(";")));

    row
}

/// Header row for a dataset, even when it has no reviews.
pub(super) fn header(stats: &HotelStatistics) -> Vec<String> {
    flatten_review(stats, &ReviewRecord::default())
        .into_iter()
        .map(|(name, _)| name)
        .collect()
}

pub(super) fn write_json(path: &Path, stats: &HotelStatistics, reviews: &[ReviewRecord]) -> Result<()> {
    let records: Vec<ExportRecord> = reviews
        .iter()
        .map(|review| ExportRecord {
            hotel_stats: stats,
            review,
        })
        .collect();

    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, &records)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub(super) fn write_csv(path: &Path, stats: &HotelStatistics, reviews: &[ReviewRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header(stats))?;
    for review in reviews {
        writer.write_record(
            flatten_review(stats, review)
                .iter()
                .map(|(_, cell)| cell.to_field()),
        )?;
    }
    writer.flush()?;
    Ok(())
}

pub(super) fn write_xlsx(path: &Path, stats: &HotelStatistics, reviews: &[ReviewRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in header(stats).iter().enumerate() {
        worksheet.write_string(0, column(col)?, name)?;
    }

    for (idx, review) in reviews.iter().enumerate() {
        let row = u32::try_from(idx + 1)
            .map_err(|_| ScrapeError::config("too many reviews for a worksheet"))?;
        for (col, (_, cell)) in flatten_review(stats, review).iter().enumerate() {
            let col = column(col)?;
            match cell {
                Cell::Empty => {}
                Cell::Text(s) => {
                    worksheet.write_string(row, col, s)?;
                }
                Cell::Number(n) => {
                    worksheet.write_number(row, col, *n)?;
                }
                Cell::Integer(i) => {
                    worksheet.write_number(row, col, *i as f64)?;
                }
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn column(idx: usize) -> Result<u16> {
    u16::try_from(idx).map_err(|_| ScrapeError::config("too many columns for a worksheet"))
}
