use std::io::{self, BufRead, Lines};

/// One corpus record: an identifier line followed by its text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub text: String,
}

/// Reads documents from a line-paired source.
///
/// Lines are consumed two at a time. A trailing identifier with no text line
/// after it is dropped without being reported. Both `\n` and `\r\n`
/// terminators are removed, so identifiers from CRLF corpora carry no
/// trailing `\r`.
pub struct DocumentReader<R> {
    lines: Lines<R>,
}

impl<R: BufRead> DocumentReader<R> {
    pub fn new(reader: R) -> Self {
        DocumentReader { lines: reader.lines() }
    }
}

impl<R: BufRead> Iterator for DocumentReader<R> {
    type Item = io::Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        let text = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        Some(Ok(Document { id, text }))
    }
}
