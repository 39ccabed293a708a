use crate::error::Error;
use crate::record::strip_newline;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based, counts every physical line
    pub number: usize,
    pub text: String,
}

pub struct LineReader<R> {
    reader: R,
    number: usize,
    buf: String,
}
impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader {
            reader,
            number: 0,
            buf: String::new(),
        }
    }
}
impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.number += 1;
                Some(Ok(Line {
                    number: self.number,
                    text: strip_newline(&self.buf).to_string(),
                }))
            }
            Err(source) => Some(Err(Error::Read {
                line_number: self.number + 1,
                source,
            })),
        }
    }
}
