//! Text normalization ahead of header scanning and move resolution.
//!
//! Comment and variation stripping is deliberately non-nesting: a `{` span ends
//! at the first `}`, a `(` span at the first `)`. Nested variations therefore
//! leave their tail behind, e.g. `(a (b) c)` normalizes to ` c)`.

use std::sync::LazyLock;

use regex::Regex;

static BRACE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("brace comment regex"));
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";[^\n]*").expect("line comment regex"));
static VARIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("variation regex"));

/// Unify line endings, strip comments and side variations, trim.
///
/// Never fails; `normalize(normalize(x)) == normalize(x)` for any input.
pub fn normalize(raw: &str) -> String {
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");

    let text = BRACE_COMMENT.replace_all(&text, "");
    let text = LINE_COMMENT.replace_all(&text, "");
    let text = VARIATION.replace_all(&text, "");

    text.trim().to_string()
}
