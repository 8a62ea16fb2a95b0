//! Literal rendering shared by the JVM generators.

use bconf_ir::FieldValue;

/// Renders typed values as source literals of one language.
///
/// [`LiteralRenderer::render`] is the single dispatch point; a new
/// [`FieldValue`] variant fails to compile until every renderer handles it.
pub trait LiteralRenderer {
    fn boolean(&self, value: bool) -> String {
        value.to_string()
    }

    fn byte(&self, value: i8) -> String {
        value.to_string()
    }

    fn short(&self, value: i16) -> String {
        value.to_string()
    }

    fn int(&self, value: i32) -> String {
        value.to_string()
    }

    fn long(&self, value: i64) -> String;

    fn float(&self, value: f32) -> String;

    fn double(&self, value: f64) -> String;

    fn char(&self, value: char) -> String;

    fn string(&self, value: &str) -> String;

    /// Render any value as a literal.
    fn render(&self, value: &FieldValue) -> String {
        match value {
            FieldValue::Boolean(v) => self.boolean(*v),
            FieldValue::Byte(v) => self.byte(*v),
            FieldValue::Short(v) => self.short(*v),
            FieldValue::Int32(v) => self.int(*v),
            FieldValue::Int64(v) => self.long(*v),
            FieldValue::Float32(v) => self.float(*v),
            FieldValue::Float64(v) => self.double(*v),
            FieldValue::Char(v) => self.char(*v),
            FieldValue::String(v) => self.string(v),
        }
    }
}

/// Literal text for a floating-point value, with `suffix` appended to
/// every number (`f` for single precision).
///
/// Finite values use the shortest text that parses back to the same value,
/// which always contains a `.` or an exponent. NaN and the infinities are
/// written as constant divisions so the literal names no type a generated
/// class or field could shadow.
pub fn float_text<T>(value: T, suffix: &str) -> String
where
    T: Into<f64> + std::fmt::Debug + Copy,
{
    let wide: f64 = value.into();
    if wide.is_nan() {
        format!("0.0{s} / 0.0{s}", s = suffix)
    } else if wide == f64::INFINITY {
        format!("1.0{s} / 0.0{s}", s = suffix)
    } else if wide == f64::NEG_INFINITY {
        format!("-1.0{s} / 0.0{s}", s = suffix)
    } else {
        format!("{:?}{}", value, suffix)
    }
}

/// `\uXXXX` escape for `c`, as a surrogate pair outside the BMP.
pub fn unicode_escape(c: char) -> String {
    let mut units = [0u16; 2];
    c.encode_utf16(&mut units)
        .iter()
        .map(|unit| format!("\\u{:04x}", unit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_text_shortest_round_trip() {
        assert_eq!(float_text(1555.5f32, "f"), "1555.5f");
        assert_eq!(float_text(0.1f32, "f"), "0.1f");
        assert_eq!(float_text(1.0f32, "f"), "1.0f");
        assert_eq!(float_text(1e20f32, "f"), "1e20f");
        assert_eq!(float_text(1910181.7f64, ""), "1910181.7");
        assert_eq!(float_text(-0.0f64, ""), "-0.0");
        assert_eq!(float_text(5e-324f64, ""), "5e-324");
    }

    #[test]
    fn test_float_text_non_finite() {
        assert_eq!(float_text(f32::NAN, "f"), "0.0f / 0.0f");
        assert_eq!(float_text(f32::INFINITY, "f"), "1.0f / 0.0f");
        assert_eq!(float_text(f64::NEG_INFINITY, ""), "-1.0 / 0.0");
    }

    #[test]
    fn test_float_text_parses_back() {
        for value in [0.1f64, 1.0 / 3.0, 123456789.123, 2.5e-8, f64::MAX, f64::MIN_POSITIVE] {
            let text = float_text(value, "");
            assert_eq!(text.parse::<f64>().unwrap(), value);
            assert!(text.contains('.') || text.contains('e'), "{text}");
        }
    }

    #[test]
    fn test_unicode_escape() {
        assert_eq!(unicode_escape('é'), "\\u00e9");
        assert_eq!(unicode_escape('\u{7f}'), "\\u007f");
        assert_eq!(unicode_escape('😀'), "\\ud83d\\ude00");
    }
}
