//! Find-all text search

/// Search options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Match case exactly
    pub case_sensitive: bool,
}

impl SearchOptions {
    /// Case-sensitive search
    pub fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

/// A single match in the searched text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
}

/// Find every non-overlapping occurrence of `needle`, left to right
///
/// Case-insensitive matching folds characters one to one, so offsets always
/// refer to the original text.
pub fn find_all(haystack: &str, needle: &str, options: SearchOptions) -> Vec<Match> {
    if needle.is_empty() {
        return Vec::new();
    }

    let fold = |c: char| -> char {
        if options.case_sensitive {
            c
        } else {
            fold_char(c)
        }
    };

    let hay: Vec<(usize, char)> = haystack.char_indices().collect();
    let pattern: Vec<char> = needle.chars().map(fold).collect();

    let mut matches = Vec::new();
    let mut line = 1;
    let mut line_start = 0;
    let mut i = 0;

    while i + pattern.len() <= hay.len() {
        let found = pattern
            .iter()
            .zip(&hay[i..])
            .all(|(p, (_, c))| *p == fold(*c));

        if found {
            let start = hay[i].0;
            let last = i + pattern.len() - 1;
            let end = hay[last].0 + hay[last].1.len_utf8();
            matches.push(Match {
                start,
                end,
                line,
                column: i - line_start + 1,
            });
            for (_, c) in &hay[i..=last] {
                if *c == '\n' {
                    line += 1;
                }
            }
            if let Some(pos) = hay[i..=last].iter().rposition(|(_, c)| *c == '\n') {
                line_start = i + pos + 1;
            }
            i = last + 1;
        } else {
            if hay[i].1 == '\n' {
                line += 1;
                line_start = i + 1;
            }
            i += 1;
        }
    }

    matches
}

/// Simple lowercase fold that keeps one char per char
fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
