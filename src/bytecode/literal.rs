//! Verilog sized literals for 8-bit program words.

use std::fmt::{Display, Formatter};

/// An 8-bit word as a Verilog literal: `8'h` followed by two uppercase hex digits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal(pub u8);

impl Display for Literal {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "8'h{:02X}", self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bytecode::NOP_CODE;

  #[test]
  fn two_uppercase_digits(){
    assert_eq!(Literal(0x2B).to_string(), "8'h2B");
    assert_eq!(Literal(0x5d).to_string(), "8'h5D");
    assert_eq!(Literal(0x0A).to_string(), "8'h0A");
    assert_eq!(Literal(0xFF).to_string(), "8'hFF");
  }

  #[test]
  fn nop(){
    assert_eq!(Literal(NOP_CODE).to_string(), "8'h00");
  }
}
