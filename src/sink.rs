use crate::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Receives the (x, y) samples of a run, in order
pub trait SampleSink {
    fn accept(&mut self, x: f64, y: f64) -> Result<(), Error>;
}

/// Writes samples as two whitespace-separated columns in scientific notation
///
/// Each line reads `x y` with 16 fractional digits, e.g.
///
/// ```text
/// 1.1000000000000001e+00 2.1000000210000001e+00
/// ```
pub struct TextSink<W: Write> {
    writer: W,
}

impl TextSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::CreateSink {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(TextSink::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        TextSink { writer }
    }

    /// Flushes the buffered lines and returns the underlying writer
    pub fn finish(mut self) -> Result<W, Error> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> SampleSink for TextSink<W> {
    fn accept(&mut self, x: f64, y: f64) -> Result<(), Error> {
        writeln!(self.writer, "{} {}", format_scientific(x), format_scientific(y))?;
        Ok(())
    }
}

/// Formats a number like C's `%.16le`
///
/// One leading digit, 16 fractional digits, and an exponent with an explicit sign and at
/// least two digits. Non-finite values are written as `nan`, `-nan`, `inf` and `-inf`.
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let formatted = format!("{:.16e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}

// tests /////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
