//! Entity decoding for navigation markup, and the matching escapes used by the serializer.
//!
//! Decoding covers the handful of named entities documentation generators emit
//! (`&amp;`, `&lt;`, `&gt;`, `&quot;`, `&apos;`, `&nbsp;`) plus semicolon-terminated numeric
//! entities. Anything else passes through unchanged.

const NAMED: &[(&[u8], char)] = &[
    (b"&amp;", '&'),
    (b"&lt;", '<'),
    (b"&gt;", '>'),
    (b"&quot;", '"'),
    (b"&apos;", '\''),
    (b"&nbsp;", '\u{00A0}'),
];

const MAX_HEX_DIGITS: usize = 6; // 0x10FFFF
const MAX_DEC_DIGITS: usize = 7; // 1114111

/// Returns the index of the terminating `;` when `bytes[start..]` holds a bounded digit run.
fn scan_digits(bytes: &[u8], start: usize, hex: bool) -> Option<usize> {
    let max = if hex { MAX_HEX_DIGITS } else { MAX_DEC_DIGITS };
    let run = bytes[start..]
        .iter()
        .take(max + 1)
        .take_while(|b| if hex { b.is_ascii_hexdigit() } else { b.is_ascii_digit() })
        .count();
    if run == 0 || run > max {
        return None;
    }
    (bytes.get(start + run) == Some(&b';')).then_some(start + run)
}

/// Decodes one numeric entity starting at `bytes[i] == b'&'`.
/// Returns the decoded char (if valid) and the index after the consumed sequence.
fn decode_numeric(s: &str, i: usize) -> Option<(Option<char>, usize)> {
    let bytes = s.as_bytes();
    let hex = matches!(bytes.get(i + 2), Some(b'x' | b'X'));
    let digits_start = if hex { i + 3 } else { i + 2 };
    let end = scan_digits(bytes, digits_start, hex)?;
    let digits = &s[digits_start..end];
    let value = if hex {
        u32::from_str_radix(digits, 16).ok()
    } else {
        digits.parse::<u32>().ok()
    };
    Some((value.and_then(char::from_u32), end + 1))
}

pub(crate) fn decode_entities(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut copy_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'&' {
            i += 1;
            continue;
        }
        out.push_str(&s[copy_start..i]);

        if let Some((pat, ch)) = NAMED
            .iter()
            .find(|(pat, _)| bytes[i..].starts_with(pat))
        {
            out.push(*ch);
            i += pat.len();
        } else if bytes.get(i + 1) == Some(&b'#') {
            match decode_numeric(s, i) {
                Some((Some(ch), next)) => {
                    out.push(ch);
                    i = next;
                }
                // Well-formed but not a scalar value: keep the sequence verbatim.
                Some((None, next)) => {
                    out.push_str(&s[i..next]);
                    i = next;
                }
                None => {
                    out.push('&');
                    i += 1;
                }
            }
        } else {
            out.push('&');
            i += 1;
        }
        copy_start = i;
    }

    out.push_str(&s[copy_start..]);
    out
}

pub(crate) fn escape_text(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}

pub(crate) fn escape_attr(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{00A0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
}
