//! Table layouts for terminal output.

use prettytable::{format as TableFormat, Table};
use strum::IntoEnumIterator;

use crate::bytecode::{Literal, Operation, NOP_CODE};

lazy_static! {
  pub static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}

/// The instruction alphabet with each symbol's program-memory code, followed by the
/// fill code for unused addresses.
pub fn alphabet_table() -> Table {
  let mut table = Table::new();

  table.set_format(*TABLE_DISPLAY_FORMAT);
  table.set_titles(row![ubc->"Symbol", ubc->"Code", ubl->"Operation"]);

  for operation in Operation::iter() {
    table.add_row(row![
      c->operation.symbol(),
      c->operation.literal(),
      operation.mnemonic()
    ]);
  }
  table.add_row(row![c->"", c->Literal(NOP_CODE), "Nop (default)"]);

  table
}
