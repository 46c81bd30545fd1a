// Copyright 2026 StreamTable Project Authors. Licensed under Apache-2.0.

//! The statement-conversion stage of the StreamTable SQL front end.
//!
//! A validated [`Statement`](stmt::Statement) goes in, a backend-agnostic
//! [`Operation`](convert::Operation) comes out. This crate never executes
//! anything: every operation only *describes* what should happen, and the
//! planner and catalog it consults are read-only collaborators.

#![deny(unused_must_use)]

pub mod catalog;
pub mod convert;
pub mod parser;
pub mod planner;
pub mod stmt;
pub mod types;

pub use self::convert::{ConvertError, Converter, Operation};
