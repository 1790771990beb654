pub struct TruncationResult {
    pub text: String,
    pub chars_before: usize,
    pub truncated: bool,
}

/// Truncate `text` to at most `budget` characters, cutting only at `". "`
/// boundaries.
///
/// Under budget the input comes back unchanged, byte-for-byte. Over budget
/// the string is split on the literal delimiter `". "`, units are kept in
/// order while `chars(unit) + 2` still fits, and the kept units are rejoined
/// with a single trailing period. When the very first unit alone exceeds the
/// budget the result is exactly `"."` — nothing accumulated, trailing period
/// appended. That literal output is part of the contract.
///
/// This is a naive delimiter split, not sentence-boundary detection: it
/// mis-splits at abbreviations and decimal numbers. Budget counts Unicode
/// scalar values, not bytes.
pub fn truncate_to_budget(text: &str, budget: usize) -> TruncationResult {
    let chars_before = text.chars().count();
    if chars_before <= budget {
        return TruncationResult {
            text: text.to_string(),
            chars_before,
            truncated: false,
        };
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut used = 0;
    for unit in text.split(". ") {
        // Charge the delimiter alongside the unit, same as the rejoin emits.
        let unit_len = unit.chars().count() + 2;
        if used + unit_len > budget {
            break;
        }
        kept.push(unit);
        used += unit_len;
    }

    let mut out = kept.join(". ");
    out.push('.');

    TruncationResult {
        text: out,
        chars_before,
        truncated: true,
    }
}
