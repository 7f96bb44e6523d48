//! Plain-text layout helpers that ignore ANSI escape sequences.

/// Number of characters a line occupies on screen, escape sequences excluded.
pub(crate) fn visible_width(line: &str) -> usize {
    strip_ansi(line).chars().count()
}

/// Pads `line` with spaces to `width` visible characters.
pub(crate) fn pad(line: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(line));
    format!("{line}{}", " ".repeat(fill))
}

/// Places `left` and `right` side by side when both fit in `width`,
/// otherwise stacks them with a blank line in between.
///
/// Lines are never cut; every input line appears exactly once.
pub(crate) fn columns(left: &[String], right: &[String], width: usize, gutter: usize) -> Vec<String> {
    let left_width = left.iter().map(|l| visible_width(l)).max().unwrap_or(0);
    let right_width = right.iter().map(|l| visible_width(l)).max().unwrap_or(0);

    if left_width + gutter + right_width > width {
        let mut lines = left.to_vec();
        lines.push(String::new());
        lines.extend_from_slice(right);
        return lines;
    }

    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let l = left.get(i).map(String::as_str).unwrap_or("");
            match right.get(i) {
                Some(r) => format!("{}{r}", pad(l, left_width + gutter)),
                None => l.to_string(),
            }
        })
        .collect()
}

/// Removes ANSI escape sequences, leaving what the terminal would show.
pub fn strip_ansi(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // CSI: ESC '[' parameters final-byte
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
