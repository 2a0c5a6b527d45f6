const OPEN: char = '(';
const CLOSE: char = ')';

/// A string split around its parenthesized groups.
///
/// `non_paren` always holds one more element than `paren`, so the source is
/// `non_paren[0] (paren[0]) non_paren[1] ... (paren[k-1]) non_paren[k]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParenSegments<'a> {
    pub non_paren: Vec<&'a str>,
    pub paren: Vec<&'a str>,
}

impl<'a> ParenSegments<'a> {
    pub fn paren_count(&self) -> usize {
        self.paren.len()
    }

    /// Rebuild the original string with literal parentheses
    pub fn join(&self) -> String {
        let mut joined = String::new();
        for (i, text) in self.non_paren.iter().enumerate() {
            if i > 0 {
                joined.push(OPEN);
                joined.push_str(self.paren[i - 1]);
                joined.push(CLOSE);
            }
            joined.push_str(text);
        }
        joined
    }
}

/// Split `text` on `(...)` groups.
///
/// A group body holds at least one character and ends at the first `)` after
/// it; bodies never cross a line break. A `(` that cannot start a group is
/// kept as plain text. Groups do not nest and there is no escaping.
pub fn segment(text: &str) -> ParenSegments<'_> {
    let mut non_paren = Vec::new();
    let mut paren = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(OPEN) {
        let open = cursor + offset;
        let body_start = open + OPEN.len_utf8();

        match group_body_len(&text[body_start..]) {
            Some(body_len) => {
                let body_end = body_start + body_len;
                non_paren.push(&text[plain_start..open]);
                paren.push(&text[body_start..body_end]);
                plain_start = body_end + CLOSE.len_utf8();
                cursor = plain_start;
            }
            None => cursor = body_start,
        }
    }

    non_paren.push(&text[plain_start..]);

    ParenSegments { non_paren, paren }
}

/// Byte length of the group body at the start of `rest`, if it is closed
fn group_body_len(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();

    let (_, first) = chars.next()?;
    if is_line_terminator(first) {
        return None;
    }

    for (idx, c) in chars {
        if c == CLOSE {
            return Some(idx);
        }
        if is_line_terminator(c) {
            return None;
        }
    }

    None
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
