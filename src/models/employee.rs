//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentKind enum for
//! representing workers in the payroll system. The employment kinds form a
//! closed set: salary calculation dispatches over them with a `match`
//! rather than an open class hierarchy.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the kind of employment arrangement.
///
/// Each kind carries the fields specific to its salary calculation;
/// identity and base salary live on [`Employee`] itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "employment_type", rename_all = "snake_case")]
pub enum EmploymentKind {
    /// Salaried employment paying the base salary with no adjustments.
    Salaried,
    /// Full-time employment paying the base salary plus benefits.
    FullTime {
        /// The benefits amount added on top of the base salary.
        benefits: Decimal,
    },
    /// Part-time employment paid by the hour.
    PartTime {
        /// The rate paid per hour worked.
        hourly_rate: Decimal,
        /// The number of hours worked.
        hours_worked: Decimal,
    },
}

/// Represents an employee on a company payroll.
///
/// Fields are fixed at construction; the engine has no mutation path for
/// an employee once created. Inputs are not validated (negative salaries
/// and empty names are accepted unchanged), matching the permissive
/// behavior of the payroll domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's display name.
    pub name: String,
    /// Identifier for the employee, expected (but not enforced) to be
    /// unique within a company.
    pub employee_id: String,
    /// The stored salary figure before kind-specific adjustments. For
    /// part-time employees this is derived at construction from
    /// `hourly_rate * hours_worked` and used for description only.
    pub base_salary: Decimal,
    /// The employment arrangement and its calculation fields.
    #[serde(flatten)]
    pub kind: EmploymentKind,
}

impl Employee {
    /// Creates a salaried employee paying `base_salary` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Carol", "E003", Decimal::from(30_000));
    /// assert_eq!(employee.compute_salary(), Decimal::from(30_000));
    /// ```
    pub fn new(
        name: impl Into<String>,
        employee_id: impl Into<String>,
        base_salary: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
            base_salary,
            kind: EmploymentKind::Salaried,
        }
    }

    /// Creates a full-time employee paying `base_salary + benefits`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let alice =
    ///     Employee::full_time("Alice", "E001", Decimal::from(50_000), Decimal::from(10_000));
    /// assert_eq!(alice.compute_salary(), Decimal::from(60_000));
    /// ```
    pub fn full_time(
        name: impl Into<String>,
        employee_id: impl Into<String>,
        base_salary: Decimal,
        benefits: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
            base_salary,
            kind: EmploymentKind::FullTime { benefits },
        }
    }

    /// Creates a part-time employee paying `hourly_rate * hours_worked`.
    ///
    /// The stored base salary is derived from the same product at
    /// construction. [`compute_salary`](Self::compute_salary) recomputes
    /// from the rate and hours each call and never reads the stored value,
    /// so the two cannot diverge while fields are immutable.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let bob = Employee::part_time("Bob", "E002", Decimal::from(20), Decimal::from(100));
    /// assert_eq!(bob.base_salary, Decimal::from(2_000));
    /// assert_eq!(bob.compute_salary(), Decimal::from(2_000));
    /// ```
    pub fn part_time(
        name: impl Into<String>,
        employee_id: impl Into<String>,
        hourly_rate: Decimal,
        hours_worked: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
            base_salary: hourly_rate * hours_worked,
            kind: EmploymentKind::PartTime {
                hourly_rate,
                hours_worked,
            },
        }
    }

    /// Computes the payable salary for this employee.
    ///
    /// The result is recomputed on demand from the employee's fields and
    /// never cached:
    ///
    /// - `Salaried` pays the base salary unchanged.
    /// - `FullTime` pays the base salary plus benefits.
    /// - `PartTime` pays `hourly_rate * hours_worked`, ignoring the stored
    ///   base salary.
    ///
    /// This is a pure function over immutable fields: no side effects, and
    /// repeated calls return the same value.
    pub fn compute_salary(&self) -> Decimal {
        match &self.kind {
            EmploymentKind::Salaried => self.base_salary,
            EmploymentKind::FullTime { benefits } => self.base_salary + benefits,
            EmploymentKind::PartTime {
                hourly_rate,
                hours_worked,
            } => hourly_rate * hours_worked,
        }
    }

    /// Returns the employee's fixed-format description line.
    ///
    /// The format is stable and consumed verbatim by roster reports:
    /// the base line `Employee ID: <id>, Name: <name>, Base Salary:
    /// Ksh.<base_salary>` is prefixed and suffixed with the kind-specific
    /// fields. Equivalent to the [`Display`](fmt::Display) impl.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let bob = Employee::part_time("Bob", "E002", Decimal::from(20), Decimal::from(100));
    /// assert_eq!(
    ///     bob.describe(),
    ///     "Part-Time Employee: Employee ID: E002, Name: Bob, Base Salary: Ksh.2000, \
    ///      Hourly Rate: Ksh.20, Hours Worked: 100"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Returns true if the employee is employed full-time.
    pub fn is_full_time(&self) -> bool {
        matches!(self.kind, EmploymentKind::FullTime { .. })
    }

    /// Returns true if the employee is employed part-time.
    pub fn is_part_time(&self) -> bool {
        matches!(self.kind, EmploymentKind::PartTime { .. })
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            EmploymentKind::Salaried => {}
            EmploymentKind::FullTime { .. } => write!(f, "Full-Time Employee: ")?,
            EmploymentKind::PartTime { .. } => write!(f, "Part-Time Employee: ")?,
        }

        write!(
            f,
            "Employee ID: {}, Name: {}, Base Salary: Ksh.{}",
            self.employee_id, self.name, self.base_salary
        )?;

        match &self.kind {
            EmploymentKind::Salaried => Ok(()),
            EmploymentKind::FullTime { benefits } => write!(f, ", Benefits: Ksh.{}", benefits),
            EmploymentKind::PartTime {
                hourly_rate,
                hours_worked,
            } => write!(
                f,
                ", Hourly Rate: Ksh.{}, Hours Worked: {}",
                hourly_rate, hours_worked
            ),
        }
    }
}
