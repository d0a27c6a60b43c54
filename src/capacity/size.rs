/*!
  Capacity sizes as people write them.

  Memory sizes tend to be given as powers of two, often off by one so that the top
  address still fits in the address register (`2^15-1`), or with a binary suffix
  (`32K`). This module reads such expressions:

  ```text
  expr   := term (('+' | '-') term)*
  term   := power | hex | decimal suffix?
  power  := decimal '^' decimal
  hex    := '0x' hexdigits
  suffix := 'K' | 'M'
  ```

  `K` and `M` are binary: 1024 and 1024². Spaces are allowed around operators.
*/

use std::convert::TryFrom;

use nom::{
  branch::alt,
  bytes::complete::tag_no_case,
  character::complete::{
    char as one_char,
    digit1,
    hex_digit1,
    one_of,
    space0
  },
  combinator::{all_consuming, map, opt},
  multi::many0,
  sequence::{
    delimited,
    pair,
    preceded,
    separated_pair
  },
  IResult
};

use crate::error::{Error, Result};

// A parsed term, or `None` if its value does not fit in a `u64`. Overflow is kept
// apart from syntax errors so the two can be reported differently.
type Term = Option<u64>;

fn decimal(input: &str) -> IResult<&str, Term> {
  map(digit1, |digits: &str| digits.parse::<u64>().ok())(input)
}

fn power(input: &str) -> IResult<&str, Term> {
  map(
    separated_pair(decimal, delimited(space0, one_char('^'), space0), decimal),
    |(base, exponent): (Term, Term)| {
      let exponent = u32::try_from(exponent?).ok()?;
      base?.checked_pow(exponent)
    }
  )(input)
}

fn hex(input: &str) -> IResult<&str, Term> {
  map(
    preceded(tag_no_case("0x"), hex_digit1),
    |digits: &str| u64::from_str_radix(digits, 16).ok()
  )(input)
}

fn scaled(input: &str) -> IResult<&str, Term> {
  map(
    pair(decimal, opt(one_of("kKmM"))),
    |(value, suffix): (Term, Option<char>)| {
      let scale: u64 = match suffix {
        Some('k') | Some('K') => 1 << 10,
        Some('m') | Some('M') => 1 << 20,
        _                     => 1
      };
      value?.checked_mul(scale)
    }
  )(input)
}

fn term(input: &str) -> IResult<&str, Term> {
  // `power` and `hex` both start with digits, so they are tried before `scaled`.
  alt((power, hex, scaled))(input)
}

fn expression(input: &str) -> IResult<&str, (Term, Vec<(char, Term)>)> {
  pair(
    term,
    many0(pair(delimited(space0, one_of("+-"), space0), term))
  )(input)
}

/// Evaluates a capacity expression such as `2^15-1`, `0x8000` or `32K`.
pub fn parse_capacity(text: &str) -> Result<u64> {
  let invalid  = || Error::InvalidCapacity { text: text.to_string() };
  let overflow = || Error::CapacityOverflow { expression: text.to_string() };

  let (_rest, (first, rest)) =
    all_consuming(delimited(space0, expression, space0))(text).map_err(|_| invalid())?;

  let mut total = first.ok_or_else(overflow)?;
  for (operator, term) in rest {
    let term = term.ok_or_else(overflow)?;
    total = match operator {
      '+' => total.checked_add(term),
      _   => total.checked_sub(term)
    }.ok_or_else(overflow)?;
  }

  log::debug!("capacity {:?} = {}", text, total);
  Ok(total)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_numbers(){
    assert_eq!(parse_capacity("30000").unwrap(), 30_000);
    assert_eq!(parse_capacity("  1 ").unwrap(), 1);
    assert_eq!(parse_capacity("0").unwrap(), 0);
  }

  #[test]
  fn hexadecimal(){
    assert_eq!(parse_capacity("0x8000").unwrap(), 0x8000);
    assert_eq!(parse_capacity("0X7fff").unwrap(), 0x7FFF);
  }

  #[test]
  fn suffixes(){
    assert_eq!(parse_capacity("32K").unwrap(), 32 * 1024);
    assert_eq!(parse_capacity("1m").unwrap(), 1 << 20);
  }

  #[test]
  fn powers_and_offsets(){
    assert_eq!(parse_capacity("2^15").unwrap(), 32_768);
    assert_eq!(parse_capacity("2^15-1").unwrap(), 32_767);
    assert_eq!(parse_capacity("2 ^ 15 - 1").unwrap(), 32_767);
    assert_eq!(parse_capacity("32K + 0x10 - 1").unwrap(), 32 * 1024 + 15);
  }

  #[test]
  fn malformed(){
    for text in &["", "abc", "2^", "1e3", "--1", "32 K", "0x", "1 +"] {
      match parse_capacity(text) {
        Err(Error::InvalidCapacity { .. }) => {},
        other => panic!("{:?} should be invalid, got {:?}", text, other),
      }
    }
  }

  #[test]
  fn out_of_range(){
    for text in &["2^64", "18446744073709551616", "17592186044416M", "0 - 1", "0xFFFFFFFFFFFFFFFF + 1"] {
      match parse_capacity(text) {
        Err(Error::CapacityOverflow { .. }) => {},
        other => panic!("{:?} should overflow, got {:?}", text, other),
      }
    }
  }
}
