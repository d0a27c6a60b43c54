/*!
  Emits a cleaned program as a Verilog `case` block that loads program memory.

  The block is meant to be pasted into the interpreter's program ROM:

  ```text
  // --- BEGIN AUTO-GENERATED CODE ---
  // PROGRAM LENGTH (PROG_LEN) should be set to: 3
  case (iptr)
    0: prog_wr <= 8'h2B; // +
    1: prog_wr <= 8'h2B; // +
    2: prog_wr <= 8'h2D; // -
    default: prog_wr <= 8'h00; // NOP
  endcase
  // --- END AUTO-GENERATED CODE ---
  ```

  Every line carries the caller's indentation; the case arms get two more spaces.
  The text is consumed by other tools, so it must stay byte-for-byte stable.
*/

use std::fmt::{Display, Formatter, Write};

use crate::address::Address;
use crate::bytecode::{Literal, Operation, NOP_CODE};
use crate::error::Result;
use crate::program::Program;

pub const BEGIN_MARKER : &str = "// --- BEGIN AUTO-GENERATED CODE ---";
pub const END_MARKER   : &str = "// --- END AUTO-GENERATED CODE ---";
pub const SELECTOR     : &str = "iptr";
pub const TARGET       : &str = "prog_wr";

/// Extra indentation of case arms relative to `case`/`endcase`.
const ARM_INDENT: usize = 2;

/// One arm of the case statement: `<address>: prog_wr <= <code>; // <symbol>`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CaseEntry {
  pub address   : Address,
  pub operation : Operation,
}

impl Display for CaseEntry {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}: {} <= {}; // {}",
      self.address, TARGET, self.operation.literal(), self.operation.symbol()
    )
  }
}

/// The output of one generation: the block text and how many instructions it loads.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GeneratedBlock {
  pub text              : String,
  pub instruction_count : usize,
}

#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CaseTable {
  entries: Vec<CaseEntry>,
}

impl CaseTable {

  pub fn from_program(program: &Program) -> CaseTable {
    let entries = program
      .addressed()
      .map(|(address, operation)| CaseEntry { address, operation })
      .collect();
    CaseTable { entries }
  }

  pub fn entries(&self) -> &[CaseEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Lays the table out as text, indenting every line by `indent_width` spaces.
  pub fn render(&self, indent_width: usize) -> GeneratedBlock {
    let indent     = " ".repeat(indent_width);
    let arm_indent = " ".repeat(indent_width + ARM_INDENT);
    let count      = self.len();
    let mut text   = String::new();

    // Writing into a `String` cannot fail.
    let _ = writeln!(text, "{}{}", indent, BEGIN_MARKER);
    let _ = writeln!(text, "{}// PROGRAM LENGTH (PROG_LEN) should be set to: {}", indent, count);
    let _ = writeln!(text, "{}case ({})", indent, SELECTOR);

    for entry in &self.entries {
      #[cfg(feature = "trace_generation")]
      log::trace!("{} -> {}", entry.address, crate::bytecode::Annotated(entry.operation));
      let _ = writeln!(text, "{}{}", arm_indent, entry);
    }

    let _ = writeln!(text, "{}default: {} <= {}; // NOP", arm_indent, TARGET, Literal(NOP_CODE));
    let _ = writeln!(text, "{}endcase", indent);
    let _ = writeln!(text, "{}{}", indent, END_MARKER);

    GeneratedBlock { text, instruction_count: count }
  }
}

/**
  Translates `source` into a case block indented by `indent_width` spaces.

  Characters outside the instruction alphabet are comments and are skipped, so this
  accepts any input. Returns the block and the number of instructions in it, which
  is also the value the block's header tells the user to set `PROG_LEN` to.
*/
pub fn generate(source: &str, indent_width: usize) -> (String, usize) {
  let block = CaseTable::from_program(&Program::clean(source)).render(indent_width);
  log::debug!("generated case table with {} entries", block.instruction_count);
  (block.text, block.instruction_count)
}

/// As `generate`, but fails on the first character that is neither an instruction
/// nor whitespace.
pub fn generate_strict(source: &str, indent_width: usize) -> Result<(String, usize)> {
  let block = CaseTable::from_program(&Program::clean_strict(source)?).render(indent_width);
  Ok((block.text, block.instruction_count))
}
