//! Placeholder merge into static dashboard documents.
//!
//! A publish target declares named insertion points as plain `const`
//! assignments, e.g. `const PROJECTS_DATA = {...};`. The merge rewrites
//! exactly the expression span of one named assignment and leaves every
//! other byte of the document untouched. Span termination is found with a
//! string- and bracket-aware scan, so `;` or `}` inside a JSON string
//! literal can never truncate the span.

use serde::Serialize;

use crate::error::PublishError;

/// Serializes `value` as compact JSON (no insignificant whitespace).
///
/// Combined with `BTreeMap`-keyed payload types this makes repeated runs
/// on unchanged data produce byte-identical documents, which keeps diffs
/// in version control readable.
///
/// # Errors
///
/// Returns [`PublishError::Json`] if `value` cannot be serialized.
pub fn to_compact_json<T: Serialize>(value: &T) -> Result<String, PublishError> {
    Ok(serde_json::to_string(value)?)
}

/// Replaces the expression of the first `const <name> = <expr>;`
/// assignment in `document` with `payload`.
///
/// Everything before the expression and everything from the terminating
/// `;` onward is preserved byte-for-byte.
///
/// # Errors
///
/// - [`PublishError::PlaceholderMissing`] if no such assignment exists.
/// - [`PublishError::UnterminatedSpan`] if the assignment never reaches a
///   terminating `;` at bracket depth zero outside string literals.
pub fn merge_assignment(
    document: &str,
    name: &str,
    payload: &str,
) -> Result<String, PublishError> {
    let anchor = format!("const {name} = ");
    let anchor_pos = document
        .find(&anchor)
        .ok_or_else(|| PublishError::PlaceholderMissing {
            name: name.to_owned(),
        })?;

    let expr_start = anchor_pos + anchor.len();
    let expr_len =
        scan_expression_end(&document[expr_start..]).ok_or_else(|| PublishError::UnterminatedSpan {
            name: name.to_owned(),
        })?;

    let mut merged = String::with_capacity(document.len() - expr_len + payload.len());
    merged.push_str(&document[..expr_start]);
    merged.push_str(payload);
    merged.push_str(&document[expr_start + expr_len..]);
    Ok(merged)
}

/// Returns the byte length of the expression ending at the first `;` that
/// sits at bracket depth zero outside any string literal, or `None` if no
/// such terminator exists.
///
/// Byte-wise scanning is safe here: every delimiter is ASCII, and ASCII
/// bytes never occur inside multi-byte UTF-8 sequences.
fn scan_expression_end(s: &str) -> Option<usize> {
    #[derive(PartialEq)]
    enum Str {
        None,
        Single,
        Double,
        Backtick,
    }

    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut in_string = Str::None;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string != Str::None {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else {
                let closes = match in_string {
                    Str::Single => b == b'\'',
                    Str::Double => b == b'"',
                    Str::Backtick => b == b'`',
                    Str::None => false,
                };
                if closes {
                    in_string = Str::None;
                }
            }
            continue;
        }

        match b {
            b'\'' => in_string = Str::Single,
            b'"' => in_string = Str::Double,
            b'`' => in_string = Str::Backtick,
            b'{' | b'[' | b'(' => depth += 1,
            b'}' | b']' | b')' => depth = depth.saturating_sub(1),
            b';' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
