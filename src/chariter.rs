use std::str::Chars;

/// A `Chars` that remembers where it is. Lines and columns count from 1, columns
/// count characters rather than bytes.
#[derive(Debug, Clone)]
pub struct CharIter<'d> {
  chars   :  Chars<'d>,
  row     :  usize,
  column  :  usize
}

impl<'d> Iterator for CharIter<'d>{
  type Item = char;

  fn next(&mut self) -> Option<char>{
    let c = self.chars.next()?;
    match c {
      '\n' => {
        self.row    += 1;
        self.column  = 1;
      },
      _ => self.column += 1
    }
    Some(c)
  }
}

impl<'d> CharIter<'d>{

  pub fn new(text: &'d str) -> Self{
    CharIter{
      chars   :  text.chars(),
      row     :  1,
      column  :  1
    }
  }

  /// The `(line, column)` of the character the next call to `next()` returns.
  pub fn location(&self) -> (usize, usize) {
    (self.row, self.column)
  }
}
