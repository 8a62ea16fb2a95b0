//! Kotlin literal syntax.

use bconf_codegen::language::{LiteralRenderer, float_text, unicode_escape};

/// Renders values as Kotlin literals.
pub struct KotlinLiterals;

impl LiteralRenderer for KotlinLiterals {
    fn long(&self, value: i64) -> String {
        // -9223372036854775808L overflows before negation
        if value == i64::MIN {
            "-9223372036854775807L - 1L".to_string()
        } else {
            format!("{}L", value)
        }
    }

    fn float(&self, value: f32) -> String {
        float_text(value, "f")
    }

    fn double(&self, value: f64) -> String {
        float_text(value, "")
    }

    fn char(&self, value: char) -> String {
        let mut out = String::from("'");
        escape_into(value, Quote::Char, &mut out);
        out.push('\'');
        out
    }

    fn string(&self, value: &str) -> String {
        let mut out = String::with_capacity(value.len() + 2);
        out.push('"');
        for c in value.chars() {
            escape_into(c, Quote::String, &mut out);
        }
        out.push('"');
        out
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    Char,
    String,
}

fn escape_into(c: char, quote: Quote, out: &mut String) {
    match (c, quote) {
        ('\\', _) => out.push_str("\\\\"),
        ('\'', Quote::Char) => out.push_str("\\'"),
        ('"', Quote::String) => out.push_str("\\\""),
        ('$', Quote::String) => out.push_str("\\$"),
        ('\u{8}', _) => out.push_str("\\b"),
        ('\t', _) => out.push_str("\\t"),
        ('\n', _) => out.push_str("\\n"),
        ('\r', _) => out.push_str("\\r"),
        (c, _) if c.is_ascii() && !c.is_ascii_control() => out.push(c),
        (c, _) => out.push_str(&unicode_escape(c)),
    }
}
