/// Derived identity for grouping plants that were cultivated together.
///
/// Pure function of (tent, planted date, plant name). Plants archived
/// independently still land in the same cycle when these inputs match.
/// The normalization is deliberately lossy: distinct inputs that differ
/// only in punctuation collapse to the same key.
pub fn grow_cycle_key(tent: Option<&str>, planted_date: Option<&str>, name: &str) -> String {
    let tent = non_empty_or(tent, "unknown");
    let planted = non_empty_or(planted_date, "unknown");

    let raw = format!("{tent}_{planted}_{name}");
    raw.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

fn non_empty_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback,
    }
}
