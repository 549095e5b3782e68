//! Endpoint methods on [`Client`](crate::Client), one module per family.
//!
//! Each method builds an [`ApiRequest`](crate::ApiRequest), runs it through
//! the generic invoker, and normalizes the response: list envelopes are
//! unwrapped, status flags are checked, and follow-up lookups are chained
//! where the service answers with an identifier only.

mod activities;
mod address_book;
mod addresses;
mod geocoding;
mod notes;
mod optimizations;
mod orders;
mod routes;
mod territories;
mod tracking;
mod users;
mod vehicles;

use crate::{Error, Result};

/// Turns a failed status flag into [`Error::Rejected`].
pub(crate) fn ensure(ok: bool, message: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(rejected(message))
    }
}

pub(crate) fn rejected(message: &str) -> Error {
    tracing::warn!(reason = message, "Service rejected the operation");
    Error::Rejected(message.to_string())
}
