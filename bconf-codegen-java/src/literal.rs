//! Java literal syntax.

use bconf_codegen::language::{LiteralRenderer, float_text, unicode_escape};

/// Renders values as Java literals.
///
/// Control characters use octal escapes: a `\u000a` escape would be
/// translated to a line break before the literal is lexed.
pub struct JavaLiterals;

impl LiteralRenderer for JavaLiterals {
    fn long(&self, value: i64) -> String {
        format!("{}L", value)
    }

    fn float(&self, value: f32) -> String {
        float_text(value, "f")
    }

    fn double(&self, value: f64) -> String {
        float_text(value, "")
    }

    fn char(&self, value: char) -> String {
        let mut out = String::from("'");
        escape_into(value, '\'', &mut out);
        out.push('\'');
        out
    }

    fn string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            escape_into(c, '"', &mut out);
        }
        out.push('"');
        out
    }
}

fn escape_into(c: char, quote: char, out: &mut String) {
    match c {
        '\\' => out.push_str("\\\\"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        '\u{8}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{c}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
        c if c.is_ascii() => out.push(c),
        c => out.push_str(&unicode_escape(c)),
    }
}
