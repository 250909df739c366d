use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::state::Session;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Start,
    Restart,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "Start",
            Control::Restart => "Restart",
        }
    }
}

/// Start only before the first round, Restart only after one ends. Neither
/// is offered while a sentence is being fetched.
pub fn visible_control(session: &Session, loading: bool) -> Option<Control> {
    if loading {
        None
    } else if !session.has_started() {
        Some(Control::Start)
    } else if session.has_ended() {
        Some(Control::Restart)
    } else {
        None
    }
}

pub struct Controls<'a> {
    control: Option<Control>,
    theme: &'a Theme,
}

impl<'a> Controls<'a> {
    pub fn new(control: Option<Control>, theme: &'a Theme) -> Self {
        Self { control, theme }
    }
}

impl Widget for Controls<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(control) = self.control else {
            return;
        };
        let colors = &self.theme.colors;

        let label = format!(" {} ", control.label());
        let width = (label.chars().count() as u16 + 2).min(area.width);
        let button = Rect::new(
            area.x + area.width.saturating_sub(width) / 2,
            area.y,
            width,
            area.height.min(3),
        );

        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::default().fg(colors.accent())))
        .render(button, buf);
    }
}
