//! Domain entities - The table that drives a run and the report it produces

mod report;
mod variable_table;

pub use report::{ReportRow, SlotReport};
pub use variable_table::{VariableRow, VariableTable};

#[cfg(test)]
pub(crate) use variable_table::tests as fixtures;
