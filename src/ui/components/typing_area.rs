use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::input::CharStatus;
use crate::session::state::Session;
use crate::ui::theme::Theme;

pub struct TypingArea<'a> {
    session: &'a Session,
    theme: &'a Theme,
    loading: bool,
}

impl<'a> TypingArea<'a> {
    pub fn new(session: &'a Session, theme: &'a Theme, loading: bool) -> Self {
        Self {
            session,
            theme,
            loading,
        }
    }

    fn char_style(&self, idx: usize) -> Style {
        let colors = &self.theme.colors;
        match self.session.char_status(idx) {
            CharStatus::Correct => Style::default().fg(colors.text_correct()),
            CharStatus::Incorrect(_) => Style::default()
                .fg(colors.text_incorrect())
                .bg(colors.text_incorrect_bg())
                .add_modifier(Modifier::UNDERLINED),
            CharStatus::Pending
                if self.session.is_running() && idx == self.session.typed.len() =>
            {
                Style::default()
                    .fg(colors.text_cursor_fg())
                    .bg(colors.text_cursor_bg())
            }
            CharStatus::Pending => Style::default().fg(colors.text_pending()),
        }
    }

    fn sentence_line(&self) -> Line<'static> {
        let spans: Vec<Span> = self
            .session
            .sentence
            .iter()
            .enumerate()
            .map(|(idx, ch)| Span::styled(ch.to_string(), self.char_style(idx)))
            .collect();
        Line::from(spans)
    }

    fn placeholder_line(&self) -> Line<'static> {
        let text = if self.loading {
            "Fetching words..."
        } else {
            "Press Enter to start a round."
        };
        Line::from(Span::styled(
            text,
            Style::default().fg(self.theme.colors.text_pending()),
        ))
    }
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        // A pending restart keeps the finished sentence on screen until the
        // new one arrives.
        let line = if self.session.has_started() {
            self.sentence_line()
        } else {
            self.placeholder_line()
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        Paragraph::new(line)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
