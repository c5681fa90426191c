//! Purchase rule tests exercised through the public service API.
//!
//! Each test wires the service with recording fakes so both the returned
//! totals and the calls reaching the external collaborators are observable.

use std::cell::RefCell;
use std::rc::Rc;
use ticket_engine::{
    AccountId, GatewayError, Money, PaymentGateway, SeatReservation, TicketConfig, TicketError,
    TicketService, TicketType, TicketTypeRequest,
};

#[derive(Default)]
struct RecordingPayments {
    calls: Rc<RefCell<Vec<(AccountId, Money)>>>,
    fail: bool,
}

impl PaymentGateway for RecordingPayments {
    fn make_payment(&self, account: AccountId, amount: Money) -> Result<(), GatewayError> {
        if self.fail {
            return Err("gateway timeout".into());
        }
        self.calls.borrow_mut().push((account, amount));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSeating {
    calls: Rc<RefCell<Vec<(AccountId, u32)>>>,
    fail: bool,
}

impl SeatReservation for RecordingSeating {
    fn reserve_seats(&self, account: AccountId, seats: u32) -> Result<(), GatewayError> {
        if self.fail {
            return Err("auditorium offline".into());
        }
        self.calls.borrow_mut().push((account, seats));
        Ok(())
    }
}

struct Fixture {
    service: TicketService,
    payments: Rc<RefCell<Vec<(AccountId, Money)>>>,
    seating: Rc<RefCell<Vec<(AccountId, u32)>>>,
}

fn fixture() -> Fixture {
    fixture_with_failures(false, false)
}

fn fixture_with_failures(fail_payment: bool, fail_seating: bool) -> Fixture {
    let payments = RecordingPayments {
        fail: fail_payment,
        ..RecordingPayments::default()
    };
    let seating = RecordingSeating {
        fail: fail_seating,
        ..RecordingSeating::default()
    };
    let payment_calls = Rc::clone(&payments.calls);
    let seating_calls = Rc::clone(&seating.calls);

    Fixture {
        service: TicketService::new(
            TicketConfig::default(),
            Box::new(payments),
            Box::new(seating),
        ),
        payments: payment_calls,
        seating: seating_calls,
    }
}

fn tickets(lines: &[(TicketType, u32)]) -> Vec<TicketTypeRequest> {
    lines.iter()
        .map(|&(ticket_type, count)| TicketTypeRequest::new(ticket_type, count))
        .collect()
}

// ==================== HAPPY PATHS ====================

#[test]
fn test_mixed_purchase_prices_and_reserves() {
    let f = fixture();
    let request = tickets(&[
        (TicketType::Adult, 10),
        (TicketType::Child, 5),
        (TicketType::Infant, 2),
    ]);

    let info = f.service.purchase_tickets(1, &request).unwrap();

    assert_eq!(info.total_price, Money::from(250));
    assert_eq!(info.total_seats, 15);
    assert_eq!(f.payments.borrow().as_slice(), &[(1, Money::from(250))]);
    assert_eq!(f.seating.borrow().as_slice(), &[(1, 15)]);
}

#[test]
fn test_only_adults() {
    let f = fixture();
    let info = f
        .service
        .purchase_tickets(1, &tickets(&[(TicketType::Adult, 10)]))
        .unwrap();

    assert_eq!(info.total_price, Money::from(200));
    assert_eq!(info.total_seats, 10);
}

#[test]
fn test_repeated_type_entries_accumulate() {
    let f = fixture();
    let info = f
        .service
        .purchase_tickets(
            1,
            &tickets(&[
                (TicketType::Adult, 2),
                (TicketType::Adult, 2),
                (TicketType::Adult, 2),
            ]),
        )
        .unwrap();

    assert_eq!(info.total_price, Money::from(120));
    assert_eq!(info.total_seats, 6);
}

#[test]
fn test_exactly_at_ticket_limit() {
    let f = fixture();
    let info = f
        .service
        .purchase_tickets(1, &tickets(&[(TicketType::Adult, 20)]))
        .unwrap();

    assert_eq!(info.total_seats, 20);
}

#[test]
fn test_infants_are_free_and_seatless() {
    let f = fixture();
    let info = f
        .service
        .purchase_tickets(1, &tickets(&[(TicketType::Adult, 1), (TicketType::Infant, 5)]))
        .unwrap();

    assert_eq!(info.total_price, Money::from(20));
    assert_eq!(info.total_seats, 1);
}

// ==================== VALIDATION FAILURES ====================

#[test]
fn test_invalid_account_rejected_before_empty_check() {
    let f = fixture();
    let err = f.service.purchase_tickets(0, &[]).unwrap_err();
    assert!(matches!(err, TicketError::InvalidAccount(0)));
}

#[test]
fn test_negative_account_rejected() {
    let f = fixture();
    let err = f
        .service
        .purchase_tickets(-3, &tickets(&[(TicketType::Adult, 1)]))
        .unwrap_err();
    assert!(matches!(err, TicketError::InvalidAccount(-3)));
}

#[test]
fn test_empty_request_rejected() {
    let f = fixture();
    let err = f.service.purchase_tickets(1, &[]).unwrap_err();
    assert!(matches!(err, TicketError::EmptyRequest));
}

#[test]
fn test_child_without_adult_rejected() {
    let f = fixture();
    let err = f
        .service
        .purchase_tickets(1, &tickets(&[(TicketType::Child, 5)]))
        .unwrap_err();
    assert!(matches!(err, TicketError::MissingAdult));
}

#[test]
fn test_child_and_infant_without_adult_rejected() {
    let f = fixture();
    let err = f
        .service
        .purchase_tickets(
            1,
            &tickets(&[(TicketType::Child, 5), (TicketType::Infant, 2)]),
        )
        .unwrap_err();
    assert!(matches!(err, TicketError::MissingAdult));
}

#[test]
fn test_over_limit_reports_attempt_and_limit() {
    let f = fixture();
    let err = f
        .service
        .purchase_tickets(
            1,
            &tickets(&[
                (TicketType::Adult, 20),
                (TicketType::Adult, 2),
                (TicketType::Adult, 2),
            ]),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        TicketError::TicketLimitExceeded {
            requested: 24,
            limit: 20
        }
    ));
    let message = err.to_string();
    assert!(message.contains("24"));
    assert!(message.contains("20"));
}

#[test]
fn test_limit_wins_over_missing_adult() {
    let f = fixture();
    let err = f
        .service
        .purchase_tickets(
            1,
            &tickets(&[(TicketType::Child, 5), (TicketType::Infant, 20)]),
        )
        .unwrap_err();
    assert!(matches!(err, TicketError::TicketLimitExceeded { .. }));
}

#[test]
fn test_rejected_purchase_never_reaches_gateways() {
    let f = fixture();
    f.service
        .purchase_tickets(1, &tickets(&[(TicketType::Child, 5)]))
        .unwrap_err();

    assert!(f.payments.borrow().is_empty());
    assert!(f.seating.borrow().is_empty());
}

// ==================== AGGREGATION PROPERTIES ====================

#[test]
fn test_totals_are_invariant_under_permutation() {
    let f = fixture();
    let permutations: [[(TicketType, u32); 3]; 6] = [
        [(TicketType::Adult, 10), (TicketType::Child, 5), (TicketType::Infant, 2)],
        [(TicketType::Adult, 10), (TicketType::Infant, 2), (TicketType::Child, 5)],
        [(TicketType::Child, 5), (TicketType::Adult, 10), (TicketType::Infant, 2)],
        [(TicketType::Child, 5), (TicketType::Infant, 2), (TicketType::Adult, 10)],
        [(TicketType::Infant, 2), (TicketType::Adult, 10), (TicketType::Child, 5)],
        [(TicketType::Infant, 2), (TicketType::Child, 5), (TicketType::Adult, 10)],
    ];

    let reference = f.service.tally(&tickets(&permutations[0])).unwrap();
    for permutation in &permutations[1..] {
        let info = f.service.tally(&tickets(permutation)).unwrap();
        assert_eq!(info, reference);
    }
}

#[test]
fn test_price_is_linear_in_counts() {
    let f = fixture();
    for adults in 1..=4u32 {
        for children in 0..=4u32 {
            let info = f
                .service
                .tally(&tickets(&[
                    (TicketType::Adult, adults),
                    (TicketType::Child, children),
                ]))
                .unwrap();

            assert_eq!(
                info.total_price,
                Money::from(20 * adults + 10 * children)
            );
            assert_eq!(info.total_seats, adults + children);
        }
    }
}

// ==================== EXTERNAL FAILURES ====================

#[test]
fn test_payment_failure_surfaces_opaquely() {
    let f = fixture_with_failures(true, false);
    let err = f
        .service
        .purchase_tickets(1, &tickets(&[(TicketType::Adult, 2)]))
        .unwrap_err();

    assert!(matches!(err, TicketError::ExternalServiceFailure));
    assert!(!err.to_string().contains("timeout"));
    assert!(f.seating.borrow().is_empty());
}

#[test]
fn test_reservation_failure_after_payment_is_not_compensated() {
    let f = fixture_with_failures(false, true);
    let err = f
        .service
        .purchase_tickets(1, &tickets(&[(TicketType::Adult, 2)]))
        .unwrap_err();

    assert!(matches!(err, TicketError::ExternalServiceFailure));
    assert!(!err.to_string().contains("auditorium"));
    assert_eq!(f.payments.borrow().as_slice(), &[(1, Money::from(40))]);
}
