//! Checkout Flow
//!
//! The two async operations the widget performs: the order read at mount
//! and the payment write on submit. Both settle exactly once - no retries,
//! no timeouts - and collapse their errors the way the UI needs them:
//! the read swallows failure (the widget renders a zero amount), the write
//! reduces to a success/failure outcome for the notification banners.

use std::cell::Cell;
use std::rc::Rc;

use crate::form::CardInput;
use crate::gateway::CheckoutGateway;
use crate::order::Order;
use crate::payment::CardPaymentRequest;

/// Outcome of a payment submission, as the UI sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure,
}

/// Liveness flag tying an async operation to the widget's lifetime.
///
/// The web layer revokes the guard on component cleanup; a response that
/// arrives afterwards must be discarded instead of touching disposed state.
#[derive(Clone, Debug)]
pub struct LivenessGuard(Rc<Cell<bool>>);

impl Default for LivenessGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl LivenessGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    /// Mark the owner as torn down
    pub fn revoke(&self) {
        self.0.set(false);
    }

    /// Whether results may still be applied
    pub fn is_live(&self) -> bool {
        self.0.get()
    }
}

/// Fetch the order record for display.
///
/// Failure is recovered locally: logged, not surfaced. Callers render a
/// zero amount when no order comes back.
pub async fn load_order(gateway: &dyn CheckoutGateway, order_id: &str) -> Option<Order> {
    match gateway.fetch_order(order_id).await {
        Ok(order) => Some(order),
        Err(err) => {
            tracing::warn!(order_id, error = %err, "order fetch failed");
            None
        }
    }
}

/// Submit a card payment for the order.
///
/// The payload is built fresh from the current input. Any error - transport
/// or backend rejection - reduces to [`SubmitOutcome::Failure`] with no
/// detail surfaced to the user.
pub async fn submit_payment(
    gateway: &dyn CheckoutGateway,
    order_id: &str,
    input: &CardInput,
) -> SubmitOutcome {
    let request = CardPaymentRequest::from_input(input);
    match gateway.submit_payment(order_id, &request).await {
        Ok(()) => SubmitOutcome::Success,
        Err(err) => {
            tracing::warn!(order_id, error = %err, "payment submission failed");
            SubmitOutcome::Failure
        }
    }
}
