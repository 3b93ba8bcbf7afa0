//! Payroll Engine for company salary expense reporting.
//!
//! This crate models a small company payroll: employees of a closed set of
//! employment kinds (salaried, full-time, part-time) with per-kind salary
//! calculation, and a [`models::Company`] aggregate that holds a roster,
//! reports it as line-oriented text, and sums it to a total salary expense.

#![warn(missing_docs)]

pub mod error;
pub mod models;
