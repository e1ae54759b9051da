//! Quoted-printable soft line folding.

/// Maximum physical line length, soft-break marker included.
const MAX_LINE_CHARS: usize = 75;

/// Content budget of a line that carries a trailing `=` soft break.
const CONTINUED_LINE_BUDGET: usize = MAX_LINE_CHARS - 1;

/// Folds an escaped quoted-printable string into physical lines joined
/// by `=` + CRLF soft breaks.
///
/// An `=XX` triplet moves to the next line whole, never split across a
/// fold boundary. A string that already fits on one line is returned
/// unchanged, without a trailing marker.
#[must_use]
pub fn fold_encoded(escaped: &str) -> String {
    if escaped.len() <= MAX_LINE_CHARS {
        return escaped.to_string();
    }

    let mut out =
        String::with_capacity(escaped.len() + escaped.len() / CONTINUED_LINE_BUDGET * 3);
    let mut line_len = 0;
    let mut rest = escaped;

    while !rest.is_empty() {
        // Escaped text is pure ASCII; a `=` always opens a triplet.
        let unit_len = if rest.starts_with('=') {
            3.min(rest.len())
        } else {
            1
        };

        if line_len + unit_len > CONTINUED_LINE_BUDGET {
            out.push_str("=\r\n");
            line_len = 0;
        }

        let (unit, tail) = rest.split_at(unit_len);
        out.push_str(unit);
        line_len += unit_len;
        rest = tail;
    }

    out
}
