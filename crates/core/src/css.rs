//! CSS text output: selector escaping and rule/keyframes formatting.

use catwind_tokens::Keyframes;

/// Escape a class name for use after `.` in a selector.
pub fn escape_class(class: &str) -> String {
    let mut out = String::with_capacity(class.len() + 4);
    for ch in class.chars() {
        if matches!(
            ch,
            ':' | '/' | '.' | '[' | ']' | '%' | '#' | '(' | ')' | ',' | '!'
        ) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// `animationTimingFunction` → `animation-timing-function`. Names already in
/// kebab case pass through.
pub fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Accumulates rules into a stylesheet string.
#[derive(Debug, Default)]
pub struct CssWriter {
    out: String,
    minify: bool,
}

impl CssWriter {
    pub fn new(minify: bool) -> Self {
        Self {
            out: String::new(),
            minify,
        }
    }

    pub fn rule(&mut self, selector: &str, declarations: &[(&str, String)]) {
        self.block(selector, 0, |w| {
            for (property, value) in declarations {
                w.declaration(property, value, 1);
            }
        });
    }

    pub fn keyframes(&mut self, name: &str, frames: &Keyframes) {
        self.block(&format!("@keyframes {name}"), 0, |w| {
            for (stop, declarations) in frames.stops() {
                w.block(&stop.to_string(), 1, |w| {
                    for (property, value) in declarations {
                        w.declaration(&kebab_case(property), value, 2);
                    }
                });
            }
        });
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn indent(&mut self, depth: usize) {
        if !self.minify {
            for _ in 0..depth {
                self.out.push_str("  ");
            }
        }
    }

    fn block(&mut self, header: &str, depth: usize, body: impl FnOnce(&mut Self)) {
        self.indent(depth);
        self.out.push_str(header);
        self.out.push_str(if self.minify { "{" } else { " {\n" });
        body(self);
        self.indent(depth);
        self.out.push('}');
        if !self.minify {
            self.out.push('\n');
        }
    }

    fn declaration(&mut self, property: &str, value: &str, depth: usize) {
        self.indent(depth);
        self.out.push_str(property);
        self.out.push(':');
        if !self.minify {
            self.out.push(' ');
        }
        self.out.push_str(value);
        self.out.push(';');
        if !self.minify {
            self.out.push('\n');
        }
    }
}
