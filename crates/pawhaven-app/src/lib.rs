// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application core for Pawhaven: session store, access guard, and the
//! pet registration flow.
//!
//! Everything here is written against the capability traits in
//! `pawhaven-core`; no HTTP or persistence details leak into this crate.

pub mod guard;
pub mod registration;
pub mod session;

pub use guard::{decide, evaluate, GuardDecision, Route};
pub use registration::{RegistrationFlow, SubmissionReceipt};
pub use session::SessionStore;
