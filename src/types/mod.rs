//! Message and outcome types.

mod message;
mod outcome;

pub use message::RawMessage;
pub use outcome::{DeliveryFailure, DeliveryOutcome};
