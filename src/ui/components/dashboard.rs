use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::result::SessionResult;
use crate::ui::theme::Theme;

/// Result block shown once a round has ended.
pub struct Dashboard<'a> {
    pub result: &'a SessionResult,
    pub theme: &'a Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(result: &'a SessionResult, theme: &'a Theme) -> Self {
        Self { result, theme }
    }
}

pub fn wpm_text(result: &SessionResult) -> String {
    format!("{:.2}", result.wpm)
}

pub fn accuracy_text(result: &SessionResult) -> String {
    format!("{:.2}%", result.accuracy)
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Result ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));

        let value_style = Style::default()
            .fg(colors.accent())
            .add_modifier(Modifier::BOLD);

        let acc_color = if self.result.accuracy >= 95.0 {
            colors.success()
        } else if self.result.accuracy >= 85.0 {
            colors.warning()
        } else {
            colors.error()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("  Words per minute: ", Style::default().fg(colors.fg())),
                Span::styled(wpm_text(self.result), value_style),
            ]),
            Line::from(vec![
                Span::styled("  Accuracy: ", Style::default().fg(colors.fg())),
                Span::styled(
                    accuracy_text(self.result),
                    Style::default().fg(acc_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  ({}/{} correct)",
                        self.result.correct, self.result.total_chars
                    ),
                    Style::default().fg(colors.text_pending()),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Time: ", Style::default().fg(colors.fg())),
                Span::styled(
                    format!("{:.1}s", self.result.elapsed_secs),
                    Style::default().fg(colors.fg()),
                ),
                Span::styled(
                    format!(
                        "  finished {}",
                        self.result
                            .finished_at
                            .with_timezone(&chrono::Local)
                            .format("%H:%M:%S")
                    ),
                    Style::default().fg(colors.text_pending()),
                ),
            ]),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
