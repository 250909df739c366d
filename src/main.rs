use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use typespeed::app::App;
use typespeed::config::Config;
use typespeed::event::EventHandler;
use typespeed::generator::word_api::RemoteWordSource;
use typespeed::logging;
use typespeed::ui::components::controls::{Control, Controls};
use typespeed::ui::components::dashboard::Dashboard;
use typespeed::ui::components::typing_area::TypingArea;
use typespeed::ui::layout::{AppLayout, pack_hint_lines};
use typespeed::ui::theme::Theme;

#[derive(Parser)]
#[command(name = "typespeed", version, about = "Terminal typing speed test")]
struct Cli {
    #[arg(short, long, help = "Number of words per round")]
    words: Option<usize>,

    #[arg(short, long, help = "Word service endpoint (without the ?number= query)")]
    url: Option<String>,

    #[arg(long, help = "Seconds to wait for the word service")]
    timeout: Option<u64>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(long, help = "Write the effective settings to the config file")]
    save_config: bool,

    #[arg(long, help = "List available themes and exit")]
    list_themes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    // Logging failures are not fatal.
    let log_path = logging::init().unwrap_or_else(|err| {
        eprintln!("Logging disabled: {err}");
        None
    });

    let mut config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("Falling back to default config: {err:#}");
        Config::default()
    });
    if let Some(words) = cli.words {
        config.word_count = words.max(1);
    }
    if let Some(url) = cli.url {
        config.word_api_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config.fetch_timeout_secs = timeout;
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.save_config {
        config.save()?;
        tracing::info!("Saved config to {}", Config::config_path().display());
    }

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        tracing::warn!("Unknown theme {:?}, using default", config.theme);
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));

    let word_source = Arc::new(RemoteWordSource::from_config(&config));
    tracing::info!(url = word_source.url(), "word source configured");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));
    let mut app = App::new(config, theme, word_source, events.sender());

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!("Exited with error: {err:?}");
        eprintln!("Error: {err:?}");
        if let Some(path) = log_path {
            eprintln!("See {}", path.display());
        }
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        app.handle_event(events.next()?);

        if app.should_quit {
            return Ok(());
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);

    render_header(frame, app, layout.header);

    let typing = TypingArea::new(&app.session, app.theme, app.is_loading());
    frame.render_widget(typing, layout.sentence);

    if let Some(result) = app.visible_result() {
        frame.render_widget(Dashboard::new(result, app.theme), layout.result);
    }

    frame.render_widget(Controls::new(app.visible_control(), app.theme), layout.controls);

    let hints: Vec<&str> = match app.visible_control() {
        Some(Control::Start) => vec!["[Enter] Start", "[Esc] Quit"],
        Some(Control::Restart) => vec!["[Enter] Restart", "[Esc] Quit"],
        None => vec!["[Esc] Quit"],
    };
    let lines: Vec<Line> = pack_hint_lines(&hints, layout.footer.width as usize)
        .into_iter()
        .take(1)
        .map(|line| Line::from(Span::styled(line, Style::default().fg(colors.text_pending()))))
        .collect();
    frame.render_widget(Paragraph::new(lines), layout.footer);
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let colors = &app.theme.colors;
    let session = &app.session;

    let status = if app.is_loading() {
        " Fetching words...".to_string()
    } else if session.is_running() {
        format!(
            " {}/{} chars ({:.0}%) | {:.1}s",
            session.typed.len(),
            session.sentence.len(),
            session.progress() * 100.0,
            session.elapsed(Instant::now()).as_secs_f64(),
        )
    } else if session.has_ended() {
        " Round complete".to_string()
    } else {
        String::new()
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Typing Speed Test ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            status,
            Style::default()
                .fg(colors.text_pending())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_themes_flag() {
        let cli = Cli::try_parse_from(["typespeed", "--list-themes"]).unwrap();
        assert!(cli.list_themes);
        assert!(!cli.save_config);

        let cli = Cli::try_parse_from(["typespeed", "-w", "3"]).unwrap();
        assert!(!cli.list_themes);
        assert_eq!(cli.words, Some(3));
    }
}
