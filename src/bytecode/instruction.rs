use std::convert::TryFrom;
use std::fmt::{Display, Formatter};

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display as StrumDisplay, EnumCount, EnumIter, IntoStaticStr};

use super::Literal;

/// Code loaded for every address past the end of the program.
pub const NOP_CODE: u8 = 0x00;

/**
  Operations of the interpreter core.

  The discriminant of each variant is the 8-bit code the hardware decodes, which is
  simply the character code of the operation's source symbol. Keeping the two equal
  means `symbol()` and `code()` never need a lookup table: the table *is* the enum.
*/
#[derive(
  StrumDisplay, IntoStaticStr, EnumIter, EnumCount, TryFromPrimitive, IntoPrimitive,
  Clone,        Copy,          Eq,       PartialEq, Debug,            Hash
)]
#[repr(u8)]
pub enum Operation {
  Increment    = 0x2B, // +
  Decrement    = 0x2D, // -
  MoveRight    = 0x3E, // >
  MoveLeft     = 0x3C, // <
  Output       = 0x2E, // .
  Input        = 0x2C, // ,
  JumpForward  = 0x5B, // [
  JumpBackward = 0x5D, // ]
}

impl Operation {
  pub fn code(&self) -> u8 {
    Into::<u8>::into(*self)
  }

  /// The source character this operation is written as.
  pub fn symbol(&self) -> char {
    char::from(self.code())
  }

  pub fn literal(&self) -> Literal {
    Literal(self.code())
  }

  pub fn mnemonic(&self) -> &'static str {
    self.into()
  }

  /**
    Recognizes a source character. Anything outside the alphabet yields `None`.

    Characters above U+00FF are rejected before narrowing to a byte, so no
    multi-byte character can alias an alphabet code.
  */
  pub fn from_symbol(c: char) -> Option<Operation> {
    let byte = u8::try_from(c).ok()?;
    Operation::try_from(byte).ok()
  }
}

/// Pairs an operation with its code the way a case line comments it, e.g. `8'h2B (+)`.
pub struct Annotated(pub Operation);

impl Display for Annotated {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} ({})", self.0.literal(), self.0.symbol())
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use strum::{EnumCount, IntoEnumIterator};

  #[test]
  fn codes_are_character_codes(){
    let expected = [
      ('+', 0x2B), ('-', 0x2D), ('>', 0x3E), ('<', 0x3C),
      ('.', 0x2E), (',', 0x2C), ('[', 0x5B), (']', 0x5D),
    ];
    for (symbol, code) in expected.iter() {
      let operation = Operation::from_symbol(*symbol).unwrap();
      assert_eq!(operation.code(), *code);
      assert_eq!(operation.symbol(), *symbol);
    }
  }

  #[test]
  fn alphabet_has_eight_symbols(){
    assert_eq!(Operation::COUNT, 8);
    let recognized = (0u8..=255)
      .filter(|b| Operation::from_symbol(char::from(*b)).is_some())
      .count();
    assert_eq!(recognized, 8);
  }

  #[test]
  fn rejects_non_alphabet(){
    assert_eq!(Operation::from_symbol('a'), None);
    assert_eq!(Operation::from_symbol(' '), None);
    assert_eq!(Operation::from_symbol('\0'), None);
    // U+012B narrows to 0x2B if truncated.
    assert_eq!(Operation::from_symbol('\u{012B}'), None);
    assert_eq!(Operation::from_symbol('🦀'), None);
  }

  #[test]
  fn nop_is_not_an_operation(){
    assert!(Operation::try_from(NOP_CODE).is_err());
    assert!(Operation::iter().all(|op| op.code() != NOP_CODE));
  }

  #[test]
  fn mnemonics(){
    assert_eq!(Operation::JumpForward.mnemonic(), "JumpForward");
    assert_eq!(format!("{}", Operation::Output), "Output");
    assert_eq!(format!("{}", Annotated(Operation::MoveLeft)), "8'h3C (<)");
  }
}
