//! Batch purchase processing.
//!
//! Streams purchase rows from CSV, submits each one to the ticket service
//! and collects the outcomes for CSV output. Rows are independent purchases;
//! nothing is shared between them.

use crate::error::Result;
use crate::money::Money;
use crate::request::{AccountId, PurchaseRecord, TicketTypeRequest};
use crate::service::TicketService;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Serialize;
use std::io::{Read, Write};

/// How a submitted purchase ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    /// Payment made and seats reserved.
    Completed,

    /// The purchase was refused; `detail` carries the reason.
    Rejected,
}

/// Outcome of one purchase row, ready for CSV output.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseOutcome {
    /// Purchasing account id.
    pub account: AccountId,

    /// Completed or rejected.
    pub status: PurchaseStatus,

    /// Total charged; empty for rejected purchases.
    pub price: Option<Money>,

    /// Seats reserved; empty for rejected purchases.
    pub seats: Option<u32>,

    /// Rejection reason; empty for completed purchases.
    pub detail: String,
}

/// The batch purchase engine.
///
/// Wraps a [`TicketService`] and processes a CSV of purchase rows in the
/// order they are received.
///
/// # Output Ordering
///
/// Outcomes are written in input row order, which keeps output deterministic
/// and lets callers line results up with their submission.
pub struct BatchEngine {
    service: TicketService,
    outcomes: Vec<PurchaseOutcome>,
}

impl BatchEngine {
    /// Creates an engine around the given service.
    pub fn new(service: TicketService) -> Self {
        BatchEngine {
            service,
            outcomes: Vec::new(),
        }
    }

    /// Processes purchases from a CSV reader in streaming fashion.
    ///
    /// Records are read one at a time to minimize memory usage. Rows that
    /// cannot be read or parsed are logged at warn level and skipped; rows
    /// that fail the purchase rules become rejected outcomes.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<PurchaseRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Some(purchase) = record.parse() {
                        self.process_purchase(purchase.account, &purchase.tickets, row_num);
                    } else {
                        warn!("Row {}: Failed to parse purchase record", row_num);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Submits a single purchase and records its outcome.
    fn process_purchase(
        &mut self,
        account: AccountId,
        tickets: &[TicketTypeRequest],
        row: usize,
    ) {
        match self.service.purchase_tickets(account, tickets) {
            Ok(info) => {
                debug!(
                    "Row {}: Completed purchase for account {} ({} / {} seats)",
                    row, account, info.total_price, info.total_seats
                );
                self.outcomes.push(PurchaseOutcome {
                    account,
                    status: PurchaseStatus::Completed,
                    price: Some(info.total_price),
                    seats: Some(info.total_seats),
                    detail: String::new(),
                });
            }
            Err(e) => {
                warn!("Row {}: Rejected purchase for account {}: {}", row, account, e);
                self.outcomes.push(PurchaseOutcome {
                    account,
                    status: PurchaseStatus::Rejected,
                    price: None,
                    seats: None,
                    detail: e.to_string(),
                });
            }
        }
    }

    /// Writes collected outcomes to CSV, in input order.
    ///
    /// All monetary values are formatted with exactly 2 decimal places.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        for outcome in &self.outcomes {
            csv_writer.serialize(outcome)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
