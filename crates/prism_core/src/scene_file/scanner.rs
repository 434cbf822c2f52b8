//! Token scanner for the scene file format.
//!
//! Numbers are read the way a formatted C reader would: leading whitespace
//! (newlines included) is skipped, then the longest numeric prefix is taken.
//! After a group of numbers the caller discards the rest of the line, which
//! is how trailing comments work in scene files.

/// Cursor over scene file text.
pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            line: 1,
        }
    }

    /// 1-based line number of the cursor.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) {
        if self.peek() == Some(b'\n') {
            self.line += 1;
        }
        self.pos += 1;
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_whitespace()) {
            self.bump();
        }
    }

    fn skip_digits(&self, mut end: usize) -> usize {
        while matches!(self.input.get(end), Some(c) if c.is_ascii_digit()) {
            end += 1;
        }
        end
    }

    fn skip_sign(&self, end: usize) -> usize {
        match self.input.get(end) {
            Some(b'+') | Some(b'-') => end + 1,
            _ => end,
        }
    }

    /// Parse `input[pos..end]`, advancing past it on success.
    fn take<T: std::str::FromStr>(&mut self, end: usize) -> Option<T> {
        let text = std::str::from_utf8(&self.input[self.pos..end]).ok()?;
        let value = text.parse().ok()?;
        self.pos = end;
        Some(value)
    }

    /// Read an integer. The cursor does not move past a non-integer token.
    pub(crate) fn read_int(&mut self) -> Option<i64> {
        self.skip_whitespace();

        let start = self.skip_sign(self.pos);
        let end = self.skip_digits(start);
        if end == start {
            return None;
        }
        self.take(end)
    }

    /// Read a floating point number (`12`, `-0.5`, `.25`, `1e-3`, ...).
    /// The cursor does not move past a non-numeric token.
    pub(crate) fn read_float(&mut self) -> Option<f32> {
        self.skip_whitespace();

        let start = self.skip_sign(self.pos);
        let int_end = self.skip_digits(start);
        let mut end = int_end;
        let mut mantissa_digits = int_end - start;

        if self.input.get(end) == Some(&b'.') {
            let frac_end = self.skip_digits(end + 1);
            mantissa_digits += frac_end - (end + 1);
            end = frac_end;
        }
        if mantissa_digits == 0 {
            return None;
        }

        // Exponent only counts if digits follow it
        if matches!(self.input.get(end), Some(b'e') | Some(b'E')) {
            let exp_start = self.skip_sign(end + 1);
            let exp_end = self.skip_digits(exp_start);
            if exp_end > exp_start {
                end = exp_end;
            }
        }

        self.take(end)
    }

    /// Read up to `N` floats, stopping at the first failure. Returns the
    /// values and how many were read.
    pub(crate) fn read_floats<const N: usize>(&mut self) -> ([f32; N], usize) {
        let mut values = [0.0; N];
        for (count, slot) in values.iter_mut().enumerate() {
            match self.read_float() {
                Some(value) => *slot = value,
                None => return (values, count),
            }
        }
        (values, N)
    }

    /// Discard everything up to and including the next newline.
    pub(crate) fn consume_line(&mut self) {
        while let Some(c) = self.peek() {
            self.bump();
            if c == b'\n' {
                break;
            }
        }
    }
}
