//! Error types for the ticket engine.
//!
//! Every failure branch surfaces as one [`TicketError`] variant carrying a
//! human-readable message. Validation errors are precise and user-facing;
//! gateway failures are deliberately opaque. Messages never contain commas
//! since they are emitted into CSV cells.

use crate::request::AccountId;
use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TicketError>;

/// Errors that can occur while validating or completing a purchase.
#[derive(Error, Debug)]
pub enum TicketError {
    /// Account identifiers below 1 are never valid
    #[error("invalid account id {0}")]
    InvalidAccount(AccountId),

    /// A purchase with no ticket requests at all
    #[error("at least one ticket must be requested")]
    EmptyRequest,

    /// More tickets requested than one order may carry
    #[error("cannot purchase {requested} tickets when at most {limit} are allowed per order")]
    TicketLimitExceeded { requested: u64, limit: u32 },

    /// Child or infant tickets requested without an accompanying adult
    #[error("child and infant tickets cannot be purchased without an adult ticket")]
    MissingAdult,

    /// A payment or seat-reservation call failed; the cause is logged, not exposed
    #[error("the purchase could not be completed; please try again later")]
    ExternalServiceFailure,

    /// Totals could not be computed from input that should already be validated
    #[error("internal inconsistency while totalling the order")]
    InternalInconsistency,

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: ticket-engine <purchases.csv>")]
    MissingArgument,
}
