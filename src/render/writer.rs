/// An indentation-aware text sink for generated Swift.
pub struct SwiftWriter {
    output: String,
    level: usize,
}

const INDENT: &str = "    ";

impl SwiftWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            level: 0,
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.level {
                self.output.push_str(INDENT);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Writes `header {` and indents what follows.
    pub fn open(&mut self, header: impl AsRef<str>) {
        self.line(format!("{} {{", header.as_ref()));
        self.level += 1;
    }

    /// Indents what follows, e.g. after a line that already ended in `{`.
    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Dedents and writes the closing brace.
    pub fn close(&mut self) {
        self.dedent();
        self.line("}");
    }

    /// Writes `head{open}`, the items one per line separated by commas, and
    /// `{close}tail`. With no items, writes `head{open}{close}tail` on one line.
    pub fn list(&mut self, head: &str, delimiters: (&str, &str), items: &[String], tail: &str) {
        let (open, close) = delimiters;
        if items.is_empty() {
            self.line(format!("{}{}{}{}", head, open, close, tail));
            return;
        }
        self.line(format!("{}{}", head, open));
        self.level += 1;
        let last = items.len() - 1;
        for (i, item) in items.iter().enumerate() {
            if i == last {
                self.line(item);
            } else {
                self.line(format!("{},", item));
            }
        }
        self.level -= 1;
        self.line(format!("{}{}", close, tail));
    }

    /// A constructor call `Type(label: value, ...)` spread over several lines.
    pub fn call(&mut self, head: &str, arguments: &[String], tail: &str) {
        self.list(head, ("(", ")"), arguments, tail);
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl Default for SwiftWriter {
    fn default() -> Self {
        Self::new()
    }
}
