use crate::num::number::{write_f64_into, write_integer_into};
use crate::text::string::escape_string_into;
use crate::Indent;

pub(crate) struct Writer {
    buffer: String,
    indent_unit: Option<String>,
    indent_cache: Vec<String>,
}

impl Writer {
    pub fn new(indent: Option<Indent>) -> Self {
        Self {
            buffer: String::new(),
            indent_unit: indent.map(|indent| " ".repeat(indent.get_spaces())),
            indent_cache: vec![String::new()],
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn finish_bytes(self) -> Vec<u8> {
        self.buffer.into_bytes()
    }

    pub fn is_pretty(&self) -> bool {
        self.indent_unit.is_some()
    }

    pub fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    pub fn write_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn write_quoted_string(&mut self, s: &str) {
        self.buffer.push('"');
        escape_string_into(&mut self.buffer, s);
        self.buffer.push('"');
    }

    pub fn write_integer<I: itoa::Integer>(&mut self, value: I) {
        write_integer_into(&mut self.buffer, value);
    }

    pub fn write_f64(&mut self, value: f64) {
        write_f64_into(&mut self.buffer, value);
    }

    pub fn write_key(&mut self, key: &str) {
        self.write_quoted_string(key);
        self.buffer.push(':');
        if self.is_pretty() {
            self.buffer.push(' ');
        }
    }

    /// Newline plus indentation in pretty mode; nothing when compact.
    pub fn write_break(&mut self, depth: usize) {
        if !self.is_pretty() {
            return;
        }
        self.buffer.push('\n');
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer.push_str(&self.indent_cache[depth]);
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        let unit = self.indent_unit.as_deref().unwrap_or("");
        while self.indent_cache.len() <= depth {
            let next = match self.indent_cache.last() {
                Some(prev) => {
                    let mut s = String::with_capacity(prev.len() + unit.len());
                    s.push_str(prev);
                    s.push_str(unit);
                    s
                }
                None => String::new(),
            };
            self.indent_cache.push(next);
        }
    }
}
