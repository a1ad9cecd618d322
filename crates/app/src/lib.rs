//! # invoicer-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that infrastructure must implement:
//!   - `RecordIdAllocator` — hands out unique, increasing record ids
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ServiceRecordCatalog` — create records, price them, build invoices
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (the atomic `SequentialIdAllocator`)
//!
//! ## Dependency rule
//! Depends on `invoicer-domain` only (plus `tracing`).
//! Never imports the composition root. The binary depends on *this* crate,
//! not the reverse.

pub mod id_allocator;
pub mod ports;
pub mod services;
