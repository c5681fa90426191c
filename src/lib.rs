//! # Ticket Engine
//!
//! Validates and prices ticket purchases, then delegates payment and seat
//! reservation to external providers.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Monetary totals use 2 decimal places via `rust_decimal`
//! - **Fixed rule order**: Account, emptiness, ticket limit, adult presence
//! - **Injected collaborators**: Pricing policy and gateways are constructor arguments
//! - **Opaque external failures**: Gateway causes are logged, never surfaced
//!
//! ## Example
//!
//! ```no_run
//! use ticket_engine::{
//!     LoggingPaymentGateway, LoggingSeatReservation, TicketConfig, TicketService,
//!     TicketType, TicketTypeRequest,
//! };
//!
//! let service = TicketService::new(
//!     TicketConfig::default(),
//!     Box::new(LoggingPaymentGateway),
//!     Box::new(LoggingSeatReservation),
//! );
//! let info = service
//!     .purchase_tickets(1, &[TicketTypeRequest::new(TicketType::Adult, 2)])
//!     .unwrap();
//! assert_eq!(info.total_seats, 2);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod money;
pub mod request;
pub mod service;

pub use config::TicketConfig;
pub use engine::{BatchEngine, PurchaseOutcome, PurchaseStatus};
pub use error::{Result, TicketError};
pub use gateway::{
    GatewayError, LoggingPaymentGateway, LoggingSeatReservation, PaymentGateway, SeatReservation,
};
pub use money::Money;
pub use request::{
    AccountId, ParsedPurchase, PurchaseRecord, TicketInformation, TicketType, TicketTypeRequest,
};
pub use service::TicketService;
