//! Core data models for the Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod company;
mod employee;

pub use company::Company;
pub use employee::{Employee, EmploymentKind};
