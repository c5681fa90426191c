//! Purchase request models for CSV parsing and internal representation.

use crate::money::Money;
use serde::Deserialize;

/// Opaque purchaser identifier. Valid account ids start at 1; the signed
/// type lets invalid ids reach validation instead of failing at parse time.
pub type AccountId = i64;

/// Ticket categories sold by the box office.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketType {
    /// Full-price ticket occupying one seat.
    Adult,

    /// Reduced-price ticket occupying one seat.
    Child,

    /// Free ticket; infants sit on an adult's lap.
    Infant,
}

impl TicketType {
    /// Whether tickets of this type consume a reservable seat.
    pub fn occupies_seat(&self) -> bool {
        match self {
            TicketType::Adult | TicketType::Child => true,
            TicketType::Infant => false,
        }
    }
}

/// One line of a purchase: a ticket category and how many of it.
///
/// A single purchase may carry many of these, in any order; the order never
/// affects the priced outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    /// Requested ticket category.
    pub ticket_type: TicketType,

    /// Number of tickets of that category.
    pub count: u32,
}

impl TicketTypeRequest {
    /// Creates a new ticket request line.
    pub fn new(ticket_type: TicketType, count: u32) -> Self {
        TicketTypeRequest { ticket_type, count }
    }
}

/// Totals derived from a validated purchase. Immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketInformation {
    /// Amount to charge to the payment gateway.
    pub total_price: Money,

    /// Seats to reserve; infants hold no seat.
    pub total_seats: u32,
}

/// Raw purchase row as read from CSV.
///
/// One row is one purchase: `account,adult,child,infant`. Count cells are
/// string-based for lenient whitespace handling and may be empty or absent,
/// which both mean zero tickets of that category.
#[derive(Debug, Deserialize)]
pub struct PurchaseRecord {
    /// Purchasing account id.
    pub account: AccountId,

    /// Requested adult ticket count.
    pub adult: Option<String>,

    /// Requested child ticket count.
    pub child: Option<String>,

    /// Requested infant ticket count.
    pub infant: Option<String>,
}

impl PurchaseRecord {
    /// Parses the raw CSV row into a typed purchase.
    ///
    /// Returns `None` if any count cell is present but not a non-negative
    /// integer. Zero counts produce no request line, so a row of zeros
    /// parses to an empty purchase.
    pub fn parse(&self) -> Option<ParsedPurchase> {
        let mut tickets = Vec::new();

        for (ticket_type, cell) in [
            (TicketType::Adult, &self.adult),
            (TicketType::Child, &self.child),
            (TicketType::Infant, &self.infant),
        ] {
            let count = Self::parse_count(cell)?;
            if count > 0 {
                tickets.push(TicketTypeRequest::new(ticket_type, count));
            }
        }

        Some(ParsedPurchase {
            account: self.account,
            tickets,
        })
    }

    /// Parses one count cell; empty or missing cells count as zero.
    fn parse_count(cell: &Option<String>) -> Option<u32> {
        let raw = match cell {
            Some(raw) => raw.trim(),
            None => return Some(0),
        };
        if raw.is_empty() {
            return Some(0);
        }
        raw.parse::<u32>().ok()
    }
}

/// A parsed purchase ready for validation and pricing.
#[derive(Debug, Clone)]
pub struct ParsedPurchase {
    /// Purchasing account id.
    pub account: AccountId,

    /// Requested ticket lines in column order.
    pub tickets: Vec<TicketTypeRequest>,
}
