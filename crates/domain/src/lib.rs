//! # invoicer-domain
//!
//! Pure domain model for the invoicer billing core.
//!
//! ## Responsibilities
//! - Foundational types: typed record identifiers, error conventions
//! - Define **Service types** (regular, after-hours, emergency, discount)
//! - Define **Fee rules** and the per-type **Fee schedule**
//! - Define **Service records** (one billable event) and their **Invoices**
//! - Contain all fee arithmetic and invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or external IO crates.
//! Identifier allocation is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod fee;
pub mod id;
pub mod invoice;
pub mod service_record;
pub mod service_type;
