//! Timecard Payroll
//!
//! This crate computes employee payroll from clock-in and clock-out events.
//! Records are built from `[first_name, family_name, title, pay_per_hour]`
//! tuples, clock events are logged as `"<date> <HHMM>"` values, and wages
//! are derived per date, per employee and across a roster.
//!
//! # Example
//!
//! ```
//! use timecard_payroll::*;
//! use rust_decimal::Decimal;
//!
//! let mut roster = create_employee_records(vec![
//!     ("Ben", "Bray", "Manager", Decimal::from(12)),
//!     ("Ann", "Ray", "Clerk", Decimal::from(20)),
//! ]);
//!
//! let ben = find_employee_by_first_name_mut(&mut roster, "Ben").unwrap();
//! create_time_in_event(ben, "2014-05-13 0900")?;
//! create_time_out_event(ben, "2014-05-13 1700")?;
//!
//! assert_eq!(calculate_payroll(&roster), Decimal::from(96));
//! # Ok::<(), PayrollError>(())
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod roster;

pub use calculation::{
    PayrollCalculator, all_wages_for, calculate_payroll, hours_worked_on_date, wage_lines,
    wages_earned_on_date,
};
pub use clock::{create_time_in_event, create_time_out_event};
pub use config::WageRules;
pub use error::{PayrollError, PayrollResult};
pub use models::{
    ClockStamp, EmployeeFields, EmployeeRecord, EventType, TimeEvent, create_employee_record,
    create_employee_records,
};
pub use roster::{find_employee_by_first_name, find_employee_by_first_name_mut};
