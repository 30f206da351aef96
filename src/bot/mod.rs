//! Bot module - Core bot functionality.
//!
//! Wires the /start and payment handlers into a throttled dispatcher and
//! runs it by polling or behind a webhook.

pub mod dispatcher;
mod runtime;
pub mod webhook;

pub use dispatcher::build_dispatcher;
pub use runtime::run;
