//! Core data models for timecard payroll.
//!
//! This module contains the employee record, its time events, and the wage
//! breakdown types, along with record construction.

mod employee;
mod payroll_summary;
mod time_event;

pub use employee::{EmployeeFields, EmployeeRecord, create_employee_record, create_employee_records};
pub use payroll_summary::{EmployeeWages, PayrollSummary, WageLine};
pub use time_event::{ClockStamp, EventType, TimeEvent};
