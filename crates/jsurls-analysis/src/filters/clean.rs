//! Text cleanup applied to candidates before junk checks and output.

/// Truncate at the first closing bracket with no matching opener.
///
/// `https://github.com/repo)` becomes `https://github.com/repo`. Openers
/// left unclosed at the end are kept.
pub fn clean_unbalanced_brackets(text: &str) -> &str {
    let mut stack: Vec<char> = Vec::new();
    for (index, ch) in text.char_indices() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let opener = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.last() == Some(&opener) {
                    stack.pop();
                } else {
                    return &text[..index];
                }
            }
            _ => {}
        }
    }
    text
}

/// Strip sentence punctuation (`.` and `,`) trailing a URL.
///
/// Only text that actually ends in `.` or `,` is touched, so `file.html`
/// and `LICENSE-2.0` pass through unchanged.
pub fn clean_trailing_sentence_punctuation(text: &str) -> &str {
    if !text.ends_with(['.', ',']) {
        return text;
    }
    text.trim_end_matches(['.', ','])
}

/// Collapse two or more back-to-back placeholders into one:
/// `/spaces/FUZZFUZZ` becomes `/spaces/FUZZ`.
pub fn consolidate_adjacent_placeholders(text: &str, placeholder: &str) -> String {
    if placeholder.is_empty() || !text.contains(placeholder) {
        return text.to_string();
    }
    let doubled = format!("{placeholder}{placeholder}");
    let mut out = text.to_string();
    while out.contains(&doubled) {
        out = out.replace(&doubled, placeholder);
    }
    out
}

/// Consolidation used for concatenation results: placeholder runs collapse,
/// then a `FUZZ/FUZZ` pair produced by two unknown operands becomes one
/// placeholder.
pub fn collapse_placeholder_runs(text: &str, placeholder: &str) -> String {
    if placeholder.is_empty() || !text.contains(placeholder) {
        return text.to_string();
    }
    let slashed = format!("{placeholder}/{placeholder}");
    let collapsed = consolidate_adjacent_placeholders(text, placeholder);
    let joined = collapsed.replace(&slashed, placeholder);
    consolidate_adjacent_placeholders(&joined, placeholder)
}
