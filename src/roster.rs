//! Roster lookup.

use crate::models::EmployeeRecord;

/// Returns the first record whose first name equals `first_name` exactly.
///
/// Matching is case-sensitive. When several employees share a first name,
/// the earliest in the roster wins.
///
/// # Examples
///
/// ```
/// use timecard_payroll::{create_employee_records, find_employee_by_first_name};
/// use rust_decimal::Decimal;
///
/// let roster = create_employee_records(vec![
///     ("Loki", "Laufeysson-Odinsson", "HR Representative", Decimal::from(35)),
///     ("Natalia", "Romanov", "CEO", Decimal::from(150)),
/// ]);
///
/// let found = find_employee_by_first_name(&roster, "Natalia").unwrap();
/// assert_eq!(found.family_name, "Romanov");
/// assert!(find_employee_by_first_name(&roster, "Thor").is_none());
/// ```
pub fn find_employee_by_first_name<'a>(
    records: &'a [EmployeeRecord],
    first_name: &str,
) -> Option<&'a EmployeeRecord> {
    records.iter().find(|record| record.first_name == first_name)
}

/// Mutable counterpart of [`find_employee_by_first_name`], for logging
/// events against a looked-up record.
pub fn find_employee_by_first_name_mut<'a>(
    records: &'a mut [EmployeeRecord],
    first_name: &str,
) -> Option<&'a mut EmployeeRecord> {
    records
        .iter_mut()
        .find(|record| record.first_name == first_name)
}
