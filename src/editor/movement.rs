//! Grapheme-aware cursor arithmetic for the text area.

use unicode_segmentation::UnicodeSegmentation;

/// Byte offset of the grapheme boundary before `pos`.
pub(super) fn prev_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .grapheme_indices(true)
        .next_back()
        .map_or(0, |(i, _)| i)
}

/// Byte offset of the grapheme boundary after `pos`.
pub(super) fn next_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .graphemes(true)
        .next()
        .map_or(pos, |g| pos + g.len())
}

/// Start of the line containing `pos`.
pub(super) fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map_or(0, |i| i + 1)
}

/// End of the line containing `pos`, before its newline.
pub(super) fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map_or(text.len(), |i| pos + i)
}

fn column(text: &str, pos: usize) -> usize {
    text[line_start(text, pos)..pos].graphemes(true).count()
}

// Offset `col` graphemes into the line starting at `start`, clamped to its end.
fn at_column(text: &str, start: usize, col: usize) -> usize {
    let end = line_end(text, start);
    text[start..end]
        .grapheme_indices(true)
        .nth(col)
        .map_or(end, |(i, _)| start + i)
}

/// Same column on the previous line, or `pos` on the first line.
pub(super) fn line_up(text: &str, pos: usize) -> usize {
    let start = line_start(text, pos);
    if start == 0 {
        return pos;
    }
    let prev_start = line_start(text, start - 1);
    at_column(text, prev_start, column(text, pos))
}

/// Same column on the next line, or `pos` on the last line.
pub(super) fn line_down(text: &str, pos: usize) -> usize {
    let end = line_end(text, pos);
    if end == text.len() {
        return pos;
    }
    at_column(text, end + 1, column(text, pos))
}
