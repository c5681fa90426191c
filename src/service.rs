//! Purchase rules and orchestration.
//!
//! Validates a purchase, totals its price and seats, then charges the
//! payment gateway and reserves seats, in that order. The whole flow is one
//! synchronous call with no state kept between purchases.

use crate::config::TicketConfig;
use crate::error::{Result, TicketError};
use crate::gateway::{PaymentGateway, SeatReservation};
use crate::money::Money;
use crate::request::{AccountId, TicketInformation, TicketType, TicketTypeRequest};
use log::{debug, error};

/// The ticket purchase service.
///
/// Owns the pricing policy and the two external collaborators, both injected
/// at construction so callers and tests control what a purchase talks to.
///
/// # Validation Order
///
/// Rules are checked in a fixed order so callers observe a stable error for
/// requests that break more than one rule: account id, then emptiness, then
/// the ticket limit, then adult presence.
pub struct TicketService {
    config: TicketConfig,
    payments: Box<dyn PaymentGateway>,
    seating: Box<dyn SeatReservation>,
}

impl TicketService {
    /// Creates a service with the given pricing policy and collaborators.
    pub fn new(
        config: TicketConfig,
        payments: Box<dyn PaymentGateway>,
        seating: Box<dyn SeatReservation>,
    ) -> Self {
        TicketService {
            config,
            payments,
            seating,
        }
    }

    /// Completes a purchase end to end.
    ///
    /// Validates the request, totals price and seats, charges the payment
    /// gateway and reserves the seats. Returns the computed totals once both
    /// collaborators have accepted the purchase.
    ///
    /// Gateway failures surface as [`TicketError::ExternalServiceFailure`]
    /// with the underlying cause logged, never exposed. A seat reservation
    /// that fails after a successful payment is not compensated.
    pub fn purchase_tickets(
        &self,
        account: AccountId,
        tickets: &[TicketTypeRequest],
    ) -> Result<TicketInformation> {
        self.validate(account, tickets)?;
        let info = self.tally(tickets)?;

        debug!(
            "account {}: priced {} for {} seats",
            account, info.total_price, info.total_seats
        );

        self.payments
            .make_payment(account, info.total_price)
            .map_err(|cause| {
                error!("payment failed for account {}: {}", account, cause);
                TicketError::ExternalServiceFailure
            })?;

        self.seating
            .reserve_seats(account, info.total_seats)
            .map_err(|cause| {
                error!("seat reservation failed for account {}: {}", account, cause);
                TicketError::ExternalServiceFailure
            })?;

        Ok(info)
    }

    /// Checks the purchase rules without side effects.
    pub fn validate(&self, account: AccountId, tickets: &[TicketTypeRequest]) -> Result<()> {
        if account < 1 {
            return Err(TicketError::InvalidAccount(account));
        }

        if tickets.is_empty() {
            return Err(TicketError::EmptyRequest);
        }

        // Summed in u64 so pathological counts cannot wrap past the limit.
        let requested: u64 = tickets.iter().map(|t| u64::from(t.count)).sum();
        if requested > u64::from(self.config.max_tickets) {
            return Err(TicketError::TicketLimitExceeded {
                requested,
                limit: self.config.max_tickets,
            });
        }

        if !tickets
            .iter()
            .any(|t| t.ticket_type == TicketType::Adult)
        {
            return Err(TicketError::MissingAdult);
        }

        Ok(())
    }

    /// Totals price and seats in a single pass.
    ///
    /// Infants add nothing to either total. Accumulation is commutative, so
    /// permuting the request lines yields identical totals. Only called on
    /// validated input; a seat count that overflows anyway is a contract
    /// violation signaled as [`TicketError::InternalInconsistency`].
    pub fn tally(&self, tickets: &[TicketTypeRequest]) -> Result<TicketInformation> {
        let mut total_price = Money::ZERO;
        let mut total_seats: u32 = 0;

        for request in tickets {
            total_price += self.config.price(request.ticket_type) * request.count;
            if request.ticket_type.occupies_seat() {
                total_seats = total_seats
                    .checked_add(request.count)
                    .ok_or(TicketError::InternalInconsistency)?;
            }
        }

        Ok(TicketInformation {
            total_price,
            total_seats,
        })
    }
}
