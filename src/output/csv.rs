//! CSV encoding and decoding
//!
//! [`CsvFormatter`] quotes a field when it contains the delimiter, a quote or
//! a record separator, doubling embedded quotes. [`CsvRecordReader`] reads the
//! same dialect back, including quoted fields that span lines.

use std::io::BufRead;

/// CSV record formatter
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    delimiter: char,
}

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self { delimiter: ',' }
    }

    /// Escape CSV value if needed
    pub fn escape_csv_value(&self, value: &str) -> String {
        if value.contains(self.delimiter)
            || value.contains('"')
            || value.contains('\n')
            || value.contains('\r')
        {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }

    /// Format one record, terminated by `\n`
    pub fn format_record<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut line = values
            .iter()
            .map(|v| self.escape_csv_value(v.as_ref()))
            .collect::<Vec<_>>()
            .join(&self.delimiter.to_string());
        line.push('\n');
        line
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Streaming CSV record reader
///
/// Yields one `Vec<String>` per record. A leading UTF-8 byte order mark is
/// ignored. Lines end in `\n` or `\r\n`.
pub struct CsvRecordReader<R: BufRead> {
    reader: R,
    delimiter: char,
    at_start: bool,
}

impl<R: BufRead> CsvRecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            delimiter: ',',
            at_start: true,
        }
    }

    fn read_record(&mut self) -> std::io::Result<Option<Vec<String>>> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut read_any = false;

        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                if !read_any {
                    return Ok(None);
                }
                if in_quotes {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "unterminated quoted field",
                    ));
                }
                fields.push(field);
                return Ok(Some(fields));
            }
            read_any = true;

            if self.at_start {
                self.at_start = false;
                if let Some(stripped) = line.strip_prefix('\u{feff}') {
                    line = stripped.to_string();
                }
            }

            let mut chars = line.chars().peekable();
            while let Some(c) = chars.next() {
                if in_quotes {
                    if c == '"' {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            field.push('"');
                        } else {
                            in_quotes = false;
                        }
                    } else {
                        field.push(c);
                    }
                    continue;
                }

                match c {
                    '"' if field.is_empty() => in_quotes = true,
                    '\n' => {
                        fields.push(field);
                        return Ok(Some(fields));
                    }
                    '\r' if chars.peek() == Some(&'\n') => {}
                    c if c == self.delimiter => fields.push(std::mem::take(&mut field)),
                    c => field.push(c),
                }
            }

            // Final line without a terminator
            if !in_quotes {
                fields.push(field);
                return Ok(Some(fields));
            }
        }
    }
}

impl<R: BufRead> Iterator for CsvRecordReader<R> {
    type Item = std::io::Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
