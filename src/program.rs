/*!
  A source program reduced to its instructions.

  Brainfuck has no comment syntax; any character outside the eight-symbol alphabet
  is a comment. Cleaning keeps the alphabet characters in their original order and
  drops everything else. The permissive `Program::clean` never fails. The opt-in
  `Program::clean_strict` allows only whitespace between instructions and reports
  where the first stray character sits.
*/

use std::slice::Iter;

use crate::address::Address;
use crate::bytecode::Operation;
use crate::chariter::CharIter;
use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Program {
  operations: Vec<Operation>,
}

impl Program {

  /// Keeps only the alphabet characters of `source`.
  pub fn clean(source: &str) -> Program {
    let operations: Vec<Operation> = source.chars().filter_map(Operation::from_symbol).collect();
    log::debug!(
      "cleaned {} source chars down to {} instructions",
      source.chars().count(),
      operations.len()
    );
    Program { operations }
  }

  /// Like `clean`, but any character that is neither an instruction nor whitespace
  /// is an error.
  pub fn clean_strict(source: &str) -> Result<Program> {
    let mut chars      = CharIter::new(source);
    let mut operations = Vec::new();

    loop {
      let (line, column) = chars.location();
      let c = match chars.next() {
        Some(c) => c,
        None => break
      };

      match Operation::from_symbol(c) {
        Some(operation) => operations.push(operation),
        None if c.is_whitespace() => {},
        None => {
          return Err(Error::UnknownSymbol { line, column, symbol: c });
        }
      }
    }

    Ok(Program { operations })
  }

  pub fn len(&self) -> usize {
    self.operations.len()
  }

  pub fn is_empty(&self) -> bool {
    self.operations.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, Operation> {
    self.operations.iter()
  }

  /// Each instruction paired with its address, in program order.
  pub fn addressed(&self) -> impl Iterator<Item = (Address, Operation)> + '_ {
    self.operations
        .iter()
        .enumerate()
        .map(|(i, operation)| (Address(i), *operation))
  }

  /// The cleaned program written back out as source text.
  pub fn to_source(&self) -> String {
    self.operations.iter().map(Operation::symbol).collect()
  }
}
