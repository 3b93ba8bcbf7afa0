//! Example run of the payroll engine.
//!
//! Builds a small company roster, prints it, and reports the total salary
//! expense.

use std::io::{self, Write};

use rust_decimal::Decimal;

use payroll_engine::error::PayrollResult;
use payroll_engine::models::{Company, Employee};

fn main() -> PayrollResult<()> {
    let mut company = Company::new();

    company.add_employee(Employee::full_time(
        "Alice",
        "E001",
        Decimal::from(50_000),
        Decimal::from(10_000),
    ));
    company.add_employee(Employee::part_time(
        "Bob",
        "E002",
        Decimal::from(20),
        Decimal::from(100),
    ));

    let mut stdout = io::stdout().lock();
    company.display_employees(&mut stdout)?;
    writeln!(
        stdout,
        "Total Salary Expense: Ksh.{}",
        company.calculate_total_salary()
    )?;

    Ok(())
}
