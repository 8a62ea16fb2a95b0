//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use bconf_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .block_with_close("final class Foo {", "}", |b| {
///         b.line("static final int X = 1;")
///     })
///     .build();
///
/// assert_eq!(code, "final class Foo {\n    static final int X = 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    pub fn kotlin() -> Self {
        Self::new(Indent::KOTLIN)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add an indented block under `header`, followed by `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::java().line("int x = 1;").build();
        assert_eq!(code, "int x = 1;\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::java()
            .block_with_close("class A {", "}", |b| {
                b.block_with_close("private A() {", "}", |b| b)
            })
            .build();
        assert_eq!(code, "class A {\n    private A() {\n    }\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::java().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_conditional_and_each() {
        let code = CodeBuilder::java()
            .when(false, |b| b.line("package a;"))
            .when(true, |b| b.line("// Constants."))
            .each(["A", "B"], |b, name| b.line(&format!("int {};", name)))
            .build();
        assert_eq!(code, "// Constants.\nint A;\nint B;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let code = CodeBuilder::java()
            .indent()
            .line("a")
            .blank()
            .line("b")
            .build();
        assert_eq!(code, "    a\n\n    b\n");
    }
}
