//! # checkout-core
//!
//! Domain logic for the card checkout widget: the order model, field
//! validation, input masking, the form-state reducer, and the checkout
//! flow (order loader and payment submission) behind a gateway trait.
//!
//! No UI and no HTTP live here - `checkout-web` renders the state this
//! crate manages, and `checkout-client` implements the gateway over HTTP.

pub mod error;
pub mod flow;
pub mod form;
pub mod gateway;
pub mod input;
pub mod order;
pub mod payment;
pub mod validate;

pub use error::{CheckoutError, Result};
pub use flow::{LivenessGuard, SubmitOutcome};
pub use form::{CardInput, FormEvent, FormState, NOTICE_AUTO_HIDE};
pub use gateway::{CheckoutGateway, MockGateway};
pub use input::CardBrand;
pub use order::{CaptureMethod, Order, OrderStatus};
pub use payment::CardPaymentRequest;
pub use validate::{FieldError, FieldErrors};
