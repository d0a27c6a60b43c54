/*!
  Turns Brainfuck programs into Verilog program-memory initialisers, and sizes the
  memories a hardware Brainfuck core needs.

  ```
  let (text, count) = bfcase::generate("++-", 4);
  assert_eq!(count, 3);
  assert!(text.contains("      2: prog_wr <= 8'h2D; // -\n"));
  ```
*/

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

mod address;
mod chariter;
mod error;

pub mod bytecode;
pub mod capacity;
pub mod generator;
pub mod program;
pub mod programs;
pub mod report;

pub use address::{address_bits, Address};
pub use error::{Error, Result};
pub use generator::{generate, generate_strict, CaseEntry, CaseTable, GeneratedBlock};
pub use program::Program;
