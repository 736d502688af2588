// SPDX-FileCopyrightText: 2026 Pawhaven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supabase-compatible backend implementation for Pawhaven.
//!
//! One [`SupabaseClient`] implements all three capability traits from
//! `pawhaven-core`: [`AuthBackend`](pawhaven_core::AuthBackend) against
//! GoTrue, [`ObjectStore`](pawhaven_core::ObjectStore) against the storage
//! API, and [`RecordStore`](pawhaven_core::RecordStore) against PostgREST.
//!
//! The backend is never reimplemented here: this crate is wire plumbing,
//! session persistence, and verbatim error surfacing.

pub mod auth;
pub mod client;
pub mod persist;
pub mod rest;
pub mod storage;
pub mod types;

pub use client::SupabaseClient;
