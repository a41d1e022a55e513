use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Border plus one column of padding on each side
const BOX_CHROME: u16 = 4;

/// Draws `result` inside a bordered box `box_width` columns wide and returns
/// the box row by row.
pub fn render_result_box(result: &str, box_width: u16) -> Vec<String> {
    let inner_width = box_width.saturating_sub(BOX_CHROME).max(1);
    // ratatui drops control characters, tabs included
    let visible: String = result
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    let lines: Vec<Line<'static>> = wrap_result(&visible, inner_width as usize)
        .into_iter()
        .map(Line::from)
        .collect();

    let height = lines.len() as u16 + 2;
    let area = Rect::new(0, 0, inner_width + BOX_CHROME, height);
    let mut buf = Buffer::empty(area);

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Plain)
                .padding(Padding::horizontal(1)),
        )
        .render(area, &mut buf);

    buffer_to_lines(&buf)
}

/// Splits `result` into lines no wider than `max_width`.
///
/// Fits on one line when it can, otherwise wraps greedily on spaces. A word
/// wider than the box is cut into box-wide pieces.
pub fn wrap_result(result: &str, max_width: usize) -> Vec<String> {
    if result.width() <= max_width {
        return vec![result.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in result.split(' ') {
        let joined_width = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if joined_width <= max_width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        let mut pieces = split_to_width(word, max_width);
        current = pieces.pop().unwrap_or_default();
        lines.extend(pieces);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn split_to_width(word: &str, max_width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for ch in word.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if piece_width + ch_width > max_width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += ch_width;
    }

    pieces.push(piece);
    pieces
}

/// Reads a buffer back as text, one string per row.
fn buffer_to_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut row = String::new();
            let mut hidden = 0;
            for x in area.left()..area.right() {
                // Cells covered by a wide character hold filler
                if hidden > 0 {
                    hidden -= 1;
                    continue;
                }
                let symbol = buf[(x, y)].symbol();
                hidden = symbol.width().saturating_sub(1);
                row.push_str(symbol);
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_result_single_line() {
        assert_eq!(wrap_result("~AH~Bi", 56), vec!["~AH~Bi"]);
    }

    #[test]
    fn test_wrap_on_spaces() {
        assert_eq!(
            wrap_result("aaaa bbbb cccc", 9),
            vec!["aaaa bbbb", "cccc"]
        );
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        assert_eq!(
            wrap_result("abcdefghij xy", 4),
            vec!["abcd", "efgh", "ij", "xy"]
        );
    }

    #[test]
    fn test_wrap_empty_result() {
        assert_eq!(wrap_result("", 10), vec![""]);
    }

    #[test]
    fn test_box_layout() {
        let rows = render_result_box("~AH~Bi", 12);
        assert_eq!(
            rows,
            vec![
                "┌──────────┐".to_string(),
                "│ ~AH~Bi   │".to_string(),
                "└──────────┘".to_string(),
            ]
        );
    }

    #[test]
    fn test_box_shows_tab_as_space() {
        let rows = render_result_box("~Aa\t~Bb", 14);
        assert_eq!(rows[1], "│ ~Aa ~Bb    │");
    }

    #[test]
    fn test_box_rows_have_constant_width() {
        let result = "~W1H~W2e~W1l~W2l~W1o ~W2W~W1o~W2r~W1l~W2d! ".repeat(3);
        let rows = render_result_box(&result, 60);
        assert!(rows.len() > 3);
        for row in &rows {
            assert_eq!(row.width(), 60, "row {:?}", row);
        }
    }

    #[test]
    fn test_box_keeps_every_piece_of_a_long_word() {
        let word = "x".repeat(20);
        let rows = render_result_box(&word, 12);
        let inside: String = rows[1..rows.len() - 1]
            .iter()
            .map(|row| row.trim_matches('│').trim())
            .collect();
        assert_eq!(inside, word);
    }
}
