/*!

  The interpreter core fetches one 8-bit word per instruction from program memory.
  The word loaded for an instruction is the character code of its source symbol,
  so `+` is `0x2B`, `[` is `0x5B`, and so on. Addresses past the end of the loaded
  program read `NOP_CODE` (`0x00`), which the core treats as "do nothing".

  Only the eight alphabet symbols have codes. Every other character of a source
  program is a comment and never reaches program memory.

  Codes are written into Verilog as sized hexadecimal literals, `8'h2B`. That
  notation lives in `Literal` so the generator and the `alphabet` listing agree.

*/

mod instruction;
mod literal;

pub use instruction::{Annotated, Operation, NOP_CODE};
pub use literal::Literal;
