use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen split used by every frame: a one-line header, the sentence, the
/// result block and control row, and a footer of key hints.
pub struct AppLayout {
    pub header: Rect,
    pub sentence: Rect,
    pub result: Rect,
    pub controls: Rect,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(5),
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let body = centered_columns(90, area);
        Self {
            header: vertical[0],
            sentence: clip_x(vertical[1], body),
            result: clip_x(vertical[2], body),
            controls: clip_x(vertical[3], body),
            footer: vertical[4],
        }
    }
}

fn centered_columns(percent_x: u16, area: Rect) -> Rect {
    const MIN_WIDTH: u16 = 40;
    let requested = area.width.saturating_mul(percent_x.min(100)) / 100;
    let width = requested.max(MIN_WIDTH).min(area.width);
    let left = area.x.saturating_add(area.width.saturating_sub(width) / 2);
    Rect::new(left, area.y, width, area.height)
}

fn clip_x(row: Rect, columns: Rect) -> Rect {
    Rect::new(columns.x, row.y, columns.width, row.height)
}

pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let prefix = " ";
    let separator = "  ";
    let mut out: Vec<String> = Vec::new();
    let mut current = prefix.to_string();
    let mut has_hint = false;

    for hint in hints {
        if hint.is_empty() {
            continue;
        }
        let candidate = if has_hint {
            format!("{current}{separator}{hint}")
        } else {
            format!("{current}{hint}")
        };
        if candidate.chars().count() <= width {
            current = candidate;
            has_hint = true;
        } else {
            if has_hint {
                out.push(current);
            }
            current = format!("{prefix}{hint}");
            has_hint = true;
        }
    }

    if has_hint {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_rows_stack_in_order() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.header.y, 0);
        assert!(layout.sentence.y < layout.result.y);
        assert!(layout.result.y < layout.controls.y);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.sentence.width, 90);
        assert_eq!(layout.sentence.x, 5);
    }

    #[test]
    fn test_narrow_terminal_uses_full_width() {
        let layout = AppLayout::new(Rect::new(0, 0, 30, 20));
        assert_eq!(layout.sentence.x, 0);
        assert_eq!(layout.sentence.width, 30);
    }

    #[test]
    fn test_pack_hint_lines_wraps() {
        let lines = pack_hint_lines(&["[Enter] Start", "[Esc] Quit"], 20);
        assert_eq!(lines, vec![" [Enter] Start", " [Esc] Quit"]);

        let lines = pack_hint_lines(&["[Enter] Start", "[Esc] Quit"], 80);
        assert_eq!(lines, vec![" [Enter] Start  [Esc] Quit"]);
    }

    #[test]
    fn test_pack_hint_lines_empty() {
        assert!(pack_hint_lines(&[], 80).is_empty());
        assert!(pack_hint_lines(&["x"], 0).is_empty());
    }
}
