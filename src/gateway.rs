//! External collaborator contracts.
//!
//! The engine consumes these interfaces; it never implements the real
//! providers. Implementations may fail with any error, which the service
//! logs and collapses into one opaque failure for the caller.

use crate::money::Money;
use crate::request::AccountId;
use log::info;

/// Whatever the underlying provider client raises.
pub type GatewayError = Box<dyn std::error::Error + Send + Sync>;

/// Charges an account for a completed purchase.
pub trait PaymentGateway {
    fn make_payment(&self, account: AccountId, amount: Money) -> Result<(), GatewayError>;
}

/// Reserves seats for a completed purchase.
pub trait SeatReservation {
    fn reserve_seats(&self, account: AccountId, seats: u32) -> Result<(), GatewayError>;
}

/// Stand-in payment provider that records the call in the log and succeeds.
pub struct LoggingPaymentGateway;

impl PaymentGateway for LoggingPaymentGateway {
    fn make_payment(&self, account: AccountId, amount: Money) -> Result<(), GatewayError> {
        info!("charging account {} an amount of {}", account, amount);
        Ok(())
    }
}

/// Stand-in seat reservation provider that records the call in the log and succeeds.
pub struct LoggingSeatReservation;

impl SeatReservation for LoggingSeatReservation {
    fn reserve_seats(&self, account: AccountId, seats: u32) -> Result<(), GatewayError> {
        info!("reserving {} seats for account {}", seats, account);
        Ok(())
    }
}
