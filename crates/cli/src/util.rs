use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns taken by `s`. Wide (CJK) chars count 2, combining marks 0.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `width` display columns, marking the cut with `..`.
pub(crate) fn truncate_display(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width < 3 {
        return s
            .chars()
            .scan(0, |used, ch| {
                *used += ch.width().unwrap_or(0);
                (*used <= width).then_some(ch)
            })
            .collect();
    }

    let budget = width - 2;
    let mut used = 0;
    let mut end_byte = 0;
    for (i, ch) in s.char_indices() {
        let cw = ch.width().unwrap_or(0);
        if used + cw > budget {
            break;
        }
        used += cw;
        end_byte = i + ch.len_utf8();
    }
    format!("{}..", &s[..end_byte])
}

/// Fit `s` into exactly `width` display columns: truncate, then right-pad.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let fitted = truncate_display(s, width);
    let pad = width.saturating_sub(display_width(&fitted));
    format!("{}{}", fitted, " ".repeat(pad))
}
