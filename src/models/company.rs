//! Company model: the aggregate owner of an employee roster.
//!
//! This module defines the Company struct, which collects employees in
//! insertion order, reports them to an output collaborator, and reduces
//! the roster to a total salary expense.

use std::io::Write;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PayrollResult;

use super::Employee;

/// Header line written before the roster in [`Company::display_employees`].
const ROSTER_HEADER: &str = "Company Employees:";

/// An aggregate owner of a roster of employees.
///
/// The roster is append-only: employees are added one at a time and never
/// removed or mutated. Insertion order is preserved and duplicate employee
/// ids are permitted (uniqueness is the caller's concern).
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Company, Employee};
/// use rust_decimal::Decimal;
///
/// let mut company = Company::new();
/// company.add_employee(Employee::full_time(
///     "Alice",
///     "E001",
///     Decimal::from(50_000),
///     Decimal::from(10_000),
/// ));
/// company.add_employee(Employee::part_time(
///     "Bob",
///     "E002",
///     Decimal::from(20),
///     Decimal::from(100),
/// ));
/// assert_eq!(company.calculate_total_salary(), Decimal::from(62_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// The employees on the payroll, in insertion order.
    employees: Vec<Employee>,
}

impl Company {
    /// Creates a company with an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee to the end of the roster.
    ///
    /// No uniqueness check is performed; adding two employees with the
    /// same id keeps both.
    pub fn add_employee(&mut self, employee: Employee) {
        debug!(
            employee_id = %employee.employee_id,
            roster_size = self.employees.len() + 1,
            "Added employee to roster"
        );
        self.employees.push(employee);
    }

    /// Returns the roster in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Writes the roster report to the given output collaborator.
    ///
    /// The report is a header line, each employee's description line in
    /// insertion order, then one trailing blank line. An empty roster
    /// produces only the header and the blank line.
    ///
    /// # Errors
    ///
    /// Returns [`PayrollError::ReportWrite`](crate::error::PayrollError)
    /// if the collaborator rejects a write.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Company;
    ///
    /// let company = Company::new();
    /// let mut out = Vec::new();
    /// company.display_employees(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "Company Employees:\n\n");
    /// ```
    pub fn display_employees<W: Write>(&self, out: &mut W) -> PayrollResult<()> {
        writeln!(out, "{}", ROSTER_HEADER)?;
        for employee in &self.employees {
            writeln!(out, "{}", employee)?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Calculates the total salary expense of the company.
    ///
    /// Sums [`Employee::compute_salary`] over the roster; an empty roster
    /// totals zero. Pure reporting, no mutation.
    pub fn calculate_total_salary(&self) -> Decimal {
        let total = self
            .employees
            .iter()
            .map(Employee::compute_salary)
            .sum::<Decimal>();
        debug!(
            roster_size = self.employees.len(),
            total = %total,
            "Calculated total salary expense"
        );
        total
    }
}
