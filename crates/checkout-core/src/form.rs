//! Form Engine
//!
//! Holds the card-entry state and drives it through a pure reducer over
//! discrete events, so the UI layer never mutates form state directly.
//!
//! Validation timing differs per field on purpose, matching typical
//! card-entry UX: number and CVV surface errors as the user types, expiry
//! is masked while typing and only validated on blur. The submit gate does
//! not rely on that displayed state - `is_valid()` recomputes validity from
//! the current values on every call.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::input::format_expiry_input;
use crate::validate::{self, FieldErrors};

/// How long a success/failure notification stays visible before auto-hiding
pub const NOTICE_AUTO_HIDE: Duration = Duration::from_millis(3000);

/// User-entered card fields.
///
/// Lives only in form state; discarded after submission or teardown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInput {
    /// Formatted card number ("4444 4444 4444 4444")
    pub number: String,

    /// Expiry in MM/YY shape
    pub expiry: String,

    /// 3-digit security code
    pub cvv: String,

    /// Whether to store the card with the shop
    pub save_card: bool,
}

/// Discrete events the form reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// Card number input changed
    NumberChanged(String),

    /// CVV input changed
    CvvChanged(String),

    /// Expiry input changed (raw value, before masking)
    ExpiryChanged(String),

    /// Expiry input lost focus
    ExpiryBlurred,

    /// Save-card checkbox toggled
    SaveCardToggled(bool),

    /// A payment request is about to be sent
    SubmitStarted,

    /// The in-flight payment request settled (either way)
    SubmitSettled,
}

/// Complete state of the card form
#[derive(Clone, Debug, Default)]
pub struct FormState {
    /// Current field values
    pub input: CardInput,

    /// Errors currently shown next to fields (display timing applies)
    pub errors: FieldErrors,

    /// True while a payment request is in flight
    pub submitting: bool,
}

impl FormState {
    /// Apply one event to the form state
    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::NumberChanged(value) => {
                self.input.number = value;
                self.errors.number = validate::validate_card_number(&self.input.number);
            }
            FormEvent::CvvChanged(value) => {
                self.input.cvv = value;
                self.errors.cvv = validate::validate_cvv(&self.input.cvv);
            }
            FormEvent::ExpiryChanged(raw) => {
                self.input.expiry = format_expiry_input(&self.input.expiry, &raw);
            }
            FormEvent::ExpiryBlurred => {
                self.errors.expiry = validate::validate_expiry(&self.input.expiry);
            }
            FormEvent::SaveCardToggled(checked) => {
                self.input.save_card = checked;
            }
            FormEvent::SubmitStarted => {
                if self.can_submit() {
                    self.submitting = true;
                }
            }
            FormEvent::SubmitSettled => {
                self.submitting = false;
            }
        }
    }

    /// Aggregate validity over the current values
    pub fn is_valid(&self) -> bool {
        validate::validate(&self.input).is_empty()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }
}
