//! Pricing policy injected into the service at construction.

use crate::money::Money;
use crate::request::TicketType;

/// Per-type ticket prices and the per-order ticket limit.
///
/// Injected rather than hard-coded so tests can vary prices and limits
/// without touching the purchase logic.
#[derive(Debug, Clone)]
pub struct TicketConfig {
    /// Price of one adult ticket.
    pub adult_price: Money,

    /// Price of one child ticket.
    pub child_price: Money,

    /// Price of one infant ticket.
    pub infant_price: Money,

    /// Maximum tickets allowed in a single order, infants included.
    pub max_tickets: u32,
}

impl Default for TicketConfig {
    fn default() -> Self {
        TicketConfig {
            adult_price: Money::from(20),
            child_price: Money::from(10),
            infant_price: Money::ZERO,
            max_tickets: 20,
        }
    }
}

impl TicketConfig {
    /// Looks up the unit price for a ticket type.
    pub fn price(&self, ticket_type: TicketType) -> Money {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }
}
