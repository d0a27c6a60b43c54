//! Program memory addresses, with the address-width arithmetic the capacity
//! estimator needs.

use std::fmt::{Display, Formatter};
use std::ops::Add;

// `AddressNumberType` is `usize`, as it is naturally an index into the cleaned program.
pub type AddressNumberType = usize;

/// The zero-based position of an instruction in the cleaned program, which is also
/// the `iptr` value that selects it in the generated case table.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Debug, Default)]
pub struct Address(pub AddressNumberType);

impl Address {
  pub fn idx(&self) -> AddressNumberType {
    self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Increment an address
impl Add<AddressNumberType> for Address {
  type Output = Address;
  fn add(self, rhs: AddressNumberType) -> Address {
    Address(self.0 + rhs)
  }
}

/**
  Number of address bits needed to select one of `cells` cells, i.e. `ceil(log2(cells))`.

  A single cell needs no address lines at all. Zero cells has no meaningful width and
  is reported as zero too; callers that care reject it first.
*/
pub fn address_bits(cells: u64) -> u32 {
  match cells {
    0 | 1 => 0,
    n => u64::BITS - (n - 1).leading_zeros(),
  }
}
