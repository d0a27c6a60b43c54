//! Built-in programs for exercising an interpreter core.

use strum_macros::{Display as StrumDisplay, EnumString, EnumIter};

/// Prints "Hello World!\n". Uses nested loops and both pointer directions, so it
/// exercises every instruction except `,`.
pub const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

/// Computes 2 * 3 into the second cell with a single loop.
pub const NESTED_LOOP: &str = "++[>+++<-]";

#[derive(StrumDisplay, EnumString, EnumIter, Clone, Copy, Eq, PartialEq, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum Demo {
  Hello,
  Nested,
}

impl Demo {
  pub fn source(&self) -> &'static str {
    match self {
      Demo::Hello  => HELLO_WORLD,
      Demo::Nested => NESTED_LOOP,
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;
  use strum::IntoEnumIterator;

  #[test]
  fn names(){
    assert_eq!(Demo::from_str("hello").ok(), Some(Demo::Hello));
    assert_eq!(Demo::from_str("nested").ok(), Some(Demo::Nested));
    assert!(Demo::from_str("fizzbuzz").is_err());
    let names: Vec<String> = Demo::iter().map(|d| d.to_string()).collect();
    assert_eq!(names, vec!["hello", "nested"]);
  }

  #[test]
  fn brackets_balance(){
    for demo in Demo::iter() {
      let depth = demo.source().chars().try_fold(0i32, |depth, c| {
        let depth = match c {
          '[' => depth + 1,
          ']' => depth - 1,
          _   => depth,
        };
        if depth < 0 { None } else { Some(depth) }
      });
      assert_eq!(depth, Some(0), "{} is unbalanced", demo);
    }
  }
}
