/*!
  Memory sizing for a hardware interpreter core.

  The core keeps four memories:

    Program memory:  one entry per instruction
    Data memory:     one 8-bit cell per data address
    Jump table:      for every instruction, the address of its matching bracket
    Bracket stack:   addresses of the open `[`s while the jump table is built

  Jump table and bracket stack entries are program addresses, so their width is
  `ceil(log2(program capacity))`. With a packed program memory each instruction
  takes 3 bits (eight operations), and at most every other instruction can be an
  unmatched `[`, which halves the bracket stack. The byte-wide layout stores the
  raw 8-bit code and gives the bracket stack one entry per instruction.

  All sizes are in bits. Nothing here looks at a generated table; the estimate only
  depends on the chosen capacities.
*/

mod size;

pub use size::parse_capacity;

use std::fmt::{Display, Formatter};

use prettytable::Table;
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString};

use crate::address::address_bits;
use crate::error::{Error, Result};
use crate::report::TABLE_DISPLAY_FORMAT;

/// Width of one data memory cell.
pub const DATA_CELL_BITS: u64 = 8;

/// The largest program whose last address still fits in 15 bits.
pub const DEFAULT_PROGRAM_CAPACITY: u64 = (1 << 15) - 1;

/// How program memory and the bracket stack are laid out.
#[derive(StrumDisplay, EnumString, EnumIter, Clone, Copy, Eq, PartialEq, Debug, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Scheme {
  /// 3-bit instructions, bracket stack half the program capacity.
  Packed,
  /// 8-bit instructions, bracket stack as large as the jump table.
  Byte,
}

impl Default for Scheme {
  fn default() -> Self {
    Scheme::Packed
  }
}

impl Scheme {
  pub fn bits_per_instruction(&self) -> u64 {
    match self {
      Scheme::Packed => 3,
      Scheme::Byte   => 8,
    }
  }

  pub fn bracket_stack_entries(&self, program_capacity: u64) -> u64 {
    match self {
      Scheme::Packed => program_capacity / 2,
      Scheme::Byte   => program_capacity,
    }
  }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct MemoryEstimate {
  pub scheme               : Scheme,
  pub program_capacity     : u64,
  pub data_capacity        : u64,
  pub program_address_bits : u32,
  pub data_address_bits    : u32,
  pub program_memory       : u64,
  pub data_memory          : u64,
  pub jump_table           : u64,
  pub bracket_stack        : u64,
}

impl MemoryEstimate {

  pub fn new(program_capacity: u64, data_capacity: u64, scheme: Scheme) -> Result<MemoryEstimate> {
    if program_capacity == 0 {
      return Err(Error::ZeroCapacity { name: "Program" });
    }
    if data_capacity == 0 {
      return Err(Error::ZeroCapacity { name: "Data" });
    }

    let program_address_bits = address_bits(program_capacity);
    let data_address_bits    = address_bits(data_capacity);

    let product = |entries: u64, width: u64, what: &str| {
      entries.checked_mul(width).ok_or_else(|| Error::CapacityOverflow {
        expression: format!("{} x {} bits ({})", entries, width, what)
      })
    };

    let estimate = MemoryEstimate {
      scheme,
      program_capacity,
      data_capacity,
      program_address_bits,
      data_address_bits,
      program_memory : product(program_capacity, scheme.bits_per_instruction(), "program memory")?,
      data_memory    : product(data_capacity, DATA_CELL_BITS, "data memory")?,
      jump_table     : product(program_capacity, program_address_bits as u64, "jump table")?,
      bracket_stack  : product(
        scheme.bracket_stack_entries(program_capacity),
        program_address_bits as u64,
        "bracket stack"
      )?,
    };
    // Reject totals that don't fit now so `total()` can't overflow later.
    estimate.checked_total().ok_or_else(|| Error::CapacityOverflow {
      expression: "total memory".to_string()
    })?;

    log::debug!("{:?}", estimate);
    Ok(estimate)
  }

  fn checked_total(&self) -> Option<u64> {
    self.program_memory
        .checked_add(self.data_memory)?
        .checked_add(self.jump_table)?
        .checked_add(self.bracket_stack)
  }

  pub fn total(&self) -> u64 {
    self.program_memory + self.data_memory + self.jump_table + self.bracket_stack
  }

  /// Each memory with its size, in report order, ending with the total.
  pub fn memories(&self) -> [(&'static str, u64); 5] {
    [
      ("Program Memory",       self.program_memory),
      ("Data Memory",          self.data_memory),
      ("Jump Table Memory",    self.jump_table),
      ("Bracket Stack Memory", self.bracket_stack),
      ("Total Memory Needed",  self.total()),
    ]
  }

  fn make_memory_table(&self) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Memory", ubr->"Bits", ubr->"Kibit"]);

    for (name, bits) in self.memories().iter() {
      table.add_row(row![r->name, r->bits, r->kibibits(*bits)]);
    }
    table
  }
}

fn kibibits(bits: u64) -> String {
  format!("{:.2}", bits as f64 / 1024.0)
}

impl Display for MemoryEstimate {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(
      f,
      "prog_len = {} and data_len = {} ({} scheme):",
      self.program_capacity, self.data_capacity, self.scheme
    )?;
    writeln!(
      f,
      "Program address: {} bits, data address: {} bits",
      self.program_address_bits, self.data_address_bits
    )?;
    write!(f, "{}", self.make_memory_table())
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_capacity_packed(){
    let estimate = MemoryEstimate::new(
      DEFAULT_PROGRAM_CAPACITY, DEFAULT_PROGRAM_CAPACITY, Scheme::Packed
    ).unwrap();
    assert_eq!(estimate.program_address_bits, 15);
    assert_eq!(estimate.data_address_bits, 15);
    assert_eq!(estimate.program_memory, 32_767 * 3);
    assert_eq!(estimate.data_memory, 32_767 * 8);
    assert_eq!(estimate.jump_table, 32_767 * 15);
    assert_eq!(estimate.bracket_stack, 16_383 * 15);
    assert_eq!(estimate.total(), 98_301 + 262_136 + 491_505 + 245_745);
  }

  #[test]
  fn byte_scheme(){
    let estimate = MemoryEstimate::new(1024, 30_000, Scheme::Byte).unwrap();
    assert_eq!(estimate.program_address_bits, 10);
    assert_eq!(estimate.data_address_bits, 15);
    assert_eq!(estimate.program_memory, 1024 * 8);
    assert_eq!(estimate.bracket_stack, estimate.jump_table);
  }

  #[test]
  fn single_cell(){
    let estimate = MemoryEstimate::new(1, 1, Scheme::Packed).unwrap();
    assert_eq!(estimate.program_address_bits, 0);
    assert_eq!(estimate.jump_table, 0);
    assert_eq!(estimate.bracket_stack, 0);
    assert_eq!(estimate.total(), 3 + 8);
  }

  #[test]
  fn zero_capacity(){
    assert!(matches!(
      MemoryEstimate::new(0, 10, Scheme::Packed),
      Err(Error::ZeroCapacity { name: "Program" })
    ));
    assert!(matches!(
      MemoryEstimate::new(10, 0, Scheme::Byte),
      Err(Error::ZeroCapacity { name: "Data" })
    ));
  }

  #[test]
  fn overflow(){
    assert!(matches!(
      MemoryEstimate::new(u64::MAX, 1, Scheme::Byte),
      Err(Error::CapacityOverflow { .. })
    ));
  }

  #[test]
  fn scheme_names(){
    use std::str::FromStr;
    assert_eq!(Scheme::from_str("packed").unwrap(), Scheme::Packed);
    assert_eq!(Scheme::from_str("byte").unwrap(), Scheme::Byte);
    assert_eq!(Scheme::default().to_string(), "packed");
  }

  #[test]
  fn report(){
    let estimate = MemoryEstimate::new(2048, 2048, Scheme::Packed).unwrap();
    let text = estimate.to_string();
    assert!(text.starts_with("prog_len = 2048 and data_len = 2048 (packed scheme):\n"));
    assert!(text.contains("Program address: 11 bits, data address: 11 bits"));
    assert!(text.contains("Jump Table Memory"));
    // 2048 * 8 data bits
    assert!(text.contains("16.00"));
  }
}
