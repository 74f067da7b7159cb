//! Literal and template lowering.
//!
//! The source keeps literals as raw text. Here they are normalized:
//! - numbers become decimal text, with `_` separators removed
//! - string bodies are copied through, since both languages share their
//!   escape syntax; single-quoted bodies also escape their bare `"`
//! - template text has its unescaped `"` and raw line breaks escaped for a
//!   double-quoted target string

use tsluau_core::LoweringResult;
use tsluau_luau::{BinaryOperator, Expression, format_number};
use tsluau_syntax::LiteralKind;
use tsluau_syntax::ast::TemplateExpr;

use crate::Transformer;

pub(crate) fn lower_literal(kind: &LiteralKind<'_>) -> LoweringResult<Expression> {
    Ok(match *kind {
        LiteralKind::Bool(value) => Expression::boolean(value),
        LiteralKind::Numeric(raw) => Expression::number(numeric_text(raw)),
        LiteralKind::String(raw) => Expression::string(string_body(raw)),
        LiteralKind::NoSubstitutionTemplate(raw) => {
            Expression::string(sanitize_template(strip_delimiters(raw)))
        }
    })
}

/// Drop the opening and closing delimiter of a raw literal.
fn strip_delimiters(raw: &str) -> &str {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}

/// Body of a raw string literal, ready for a double-quoted target string.
///
/// Bare `"` in a single-quoted literal gains a backslash. Escapes are copied
/// through unchanged.
fn string_body(raw: &str) -> String {
    let body = strip_delimiters(raw);
    if !raw.starts_with('\'') {
        return body.to_string();
    }
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}

/// Decimal text for a raw numeric literal.
///
/// `0x`, `0o` and `0b` prefixes are converted to base 10 and `_` separators
/// are removed. Decimal literals are otherwise kept as written.
pub fn numeric_text(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| *c != '_').collect();

    let radix = match cleaned.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return cleaned,
    };

    let digits = &cleaned[2..];
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    match value {
        Some(value) if !digits.is_empty() => format_number(value),
        _ => cleaned,
    }
}

/// Escape template text for a double-quoted target string.
///
/// Unescaped `"` gains a backslash, raw line breaks are continued with a
/// backslash, and `` \` `` / `\$` lose theirs. Other escapes pass through.
pub fn sanitize_template(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('`' | '$')) => out.push(escaped),
                // line continuation
                Some('\n') => {}
                Some('\r') => {
                    chars.next_if_eq(&'\n');
                }
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            '"' => out.push_str("\\\""),
            '\r' => {
                out.push_str("\\\r");
                if chars.next_if_eq(&'\n').is_some() {
                    out.push('\n');
                }
            }
            '\n' => out.push_str("\\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a decoded string value as a double-quoted target string body.
///
/// Other control characters become three-digit `\ddd` byte escapes, so a
/// following digit is never read as part of the escape.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let mut buf = [0; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("\\{byte:03}"));
                }
            }
            c => out.push(c),
        }
    }
    out
}

/// Lower `` `head${e0}lit0${e1}lit1` `` into a `..` chain.
///
/// Non-string substitutions are wrapped in `tostring(...)` and empty text
/// segments are left out.
pub(crate) fn lower_template(
    transformer: &mut Transformer<'_>,
    template: &TemplateExpr<'_>,
) -> LoweringResult<Expression> {
    let types = transformer.services().types;
    let values = transformer.ensure_transform_order(
        template
            .spans
            .iter()
            .map(|span| move |t: &mut Transformer<'_>| t.lower_expression(span.expr)),
    )?;

    let mut segments = Vec::with_capacity(template.spans.len() * 2 + 1);
    if !template.head.is_empty() {
        segments.push(Expression::string(sanitize_template(template.head)));
    }
    for (span, value) in template.spans.iter().zip(values) {
        if types.resolve_type(span.expr).is_string() {
            segments.push(value);
        } else {
            segments.push(Expression::call(Expression::id("tostring"), vec![value]));
        }
        if !span.literal.is_empty() {
            segments.push(Expression::string(sanitize_template(span.literal)));
        }
    }

    let mut segments = segments.into_iter();
    let Some(first) = segments.next() else {
        return Ok(Expression::string(""));
    };
    Ok(segments.fold(first, |chain, segment| {
        Expression::binary(chain, BinaryOperator::DotDot, segment)
    }))
}
