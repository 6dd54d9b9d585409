//! Release publishing orchestration.

mod publisher;

pub use publisher::{PublishOutcome, Publisher};
