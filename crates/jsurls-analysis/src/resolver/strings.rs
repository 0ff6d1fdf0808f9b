//! String literal decoding.

use tree_sitter::Node;

use crate::parsers::node_text;

/// Value of a `string` literal node: quotes stripped, escapes decoded.
pub fn string_value(node: Node<'_>, source: &str) -> String {
    decode_js_string(strip_quotes(node_text(node, source)))
}

fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && matches!(first, b'"' | b'\'' | b'`') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Decode JavaScript escape sequences. Unknown escapes keep their text.
pub fn decode_js_string(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c != '\\' || i + 1 >= chars.len() {
            out.push(c);
            i += 1;
            continue;
        }
        let next = chars[i + 1];
        match next {
            'n' => push_simple(&mut out, &mut i, '\n'),
            't' => push_simple(&mut out, &mut i, '\t'),
            'r' => push_simple(&mut out, &mut i, '\r'),
            'b' => push_simple(&mut out, &mut i, '\u{8}'),
            'f' => push_simple(&mut out, &mut i, '\u{c}'),
            'v' => push_simple(&mut out, &mut i, '\u{b}'),
            '\\' | '\'' | '"' | '`' | '/' => push_simple(&mut out, &mut i, next),
            'x' => match hex_value(&chars, i + 2, 2) {
                Some(ch) => {
                    out.push(ch);
                    i += 4;
                }
                None => push_raw(&mut out, &mut i, &chars),
            },
            'u' if chars.get(i + 2) == Some(&'{') => {
                let close = chars[i + 3..].iter().position(|&c| c == '}');
                let decoded = close.filter(|&len| len > 0).and_then(|len| {
                    let digits = &chars[i + 3..i + 3 + len];
                    if !digits.iter().all(char::is_ascii_hexdigit) {
                        return None;
                    }
                    let digits: String = digits.iter().collect();
                    u32::from_str_radix(&digits, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .map(|ch| (ch, len))
                });
                match decoded {
                    Some((ch, len)) => {
                        out.push(ch);
                        i += 4 + len;
                    }
                    None => push_raw(&mut out, &mut i, &chars),
                }
            }
            'u' => match hex_value(&chars, i + 2, 4) {
                Some(ch) => {
                    out.push(ch);
                    i += 6;
                }
                None => push_raw(&mut out, &mut i, &chars),
            },
            '0'..='7' => {
                let digits: String = chars[i + 1..]
                    .iter()
                    .take(3)
                    .take_while(|c| c.is_digit(8))
                    .collect();
                match u32::from_str_radix(&digits, 8).ok().and_then(char::from_u32) {
                    Some(ch) => {
                        out.push(ch);
                        i += 1 + digits.len();
                    }
                    None => push_raw(&mut out, &mut i, &chars),
                }
            }
            _ => push_raw(&mut out, &mut i, &chars),
        }
    }
    out
}

fn push_simple(out: &mut String, i: &mut usize, ch: char) {
    out.push(ch);
    *i += 2;
}

fn push_raw(out: &mut String, i: &mut usize, chars: &[char]) {
    out.push(chars[*i]);
    out.push(chars[*i + 1]);
    *i += 2;
}

fn hex_value(chars: &[char], start: usize, len: usize) -> Option<char> {
    let digits = chars.get(start..start + len)?;
    if !digits.iter().all(char::is_ascii_hexdigit) {
        return None;
    }
    let digits: String = digits.iter().collect();
    u32::from_str_radix(&digits, 16).ok().and_then(char::from_u32)
}
