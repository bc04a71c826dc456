use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    DefaultTerminal, Frame,
};

use rataudio_indicator::{IndicatorConfig, LevelIndicator, DEFAULT_MAXIMUM_LEVEL};

fn main() -> Result<()> {
    color_eyre::install()?;
    let terminal = ratatui::init();
    let result = run(terminal);
    ratatui::restore();
    result
}

fn generate_levels(steps: usize) -> Vec<u32> {
    (0..steps)
        .map(|i| {
            let phase = i as f32 / steps as f32 * std::f32::consts::TAU;
            let normalized = phase.sin() * 0.5 + 0.5;
            (normalized * DEFAULT_MAXIMUM_LEVEL as f32) as u32
        })
        .collect()
}

fn run(mut terminal: DefaultTerminal) -> Result<()> {
    const UPDATE_INTERVAL: Duration = Duration::from_millis(20);
    let mut last_time = std::time::Instant::now();

    let levels = generate_levels(100);
    let mut index = 0;

    let mut curve = LevelIndicator::new();
    let mut linear = LevelIndicator::from_config(IndicatorConfig {
        logarithmic: true,
        ..Default::default()
    })?;
    curve.set_marker_level(DEFAULT_MAXIMUM_LEVEL / 2);
    linear.set_marker_level(DEFAULT_MAXIMUM_LEVEL / 2);
    linear.set_active(true);

    terminal.draw(|frame| draw(frame, &curve, &linear))?;

    loop {
        if last_time.elapsed() >= UPDATE_INTERVAL {
            let jitter = rand::random_range(0..1000);
            let level = levels[index].saturating_add(jitter);
            curve.set_current_level(level);
            linear.set_current_level(level);
            index = (index + 1) % levels.len();
            last_time = std::time::Instant::now();
        }

        let curve_dirty = curve.redraw_mut().take();
        let linear_dirty = linear.redraw_mut().take();
        if curve_dirty || linear_dirty {
            terminal.draw(|frame| draw(frame, &curve, &linear))?;
        }

        match handle_input()? {
            Command::Quit => break Ok(()),
            Command::ToggleActive => {
                curve.set_active(!curve.is_active());
                terminal.draw(|frame| draw(frame, &curve, &linear))?;
            }
            Command::Reset => {
                curve.reset();
                linear.reset();
                linear.set_logarithmic(true);
            }
            Command::Noop => {}
        }
    }
}

fn draw(frame: &mut Frame, curve: &LevelIndicator, linear: &LevelIndicator) {
    let area = Rect::new(0, 1, frame.area().width, 3);
    let p = Paragraph::new("Rataudio Indicator Demo (q: quit, a: toggle active, r: reset)")
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);
    frame.render_widget(p, area);

    frame.render_widget(Paragraph::new("curve"), Rect::new(10, 6, 20, 1));
    frame.render_widget(curve, Rect::new(10, 7, 60, 3));

    frame.render_widget(Paragraph::new("linear"), Rect::new(10, 12, 20, 1));
    frame.render_widget(linear, Rect::new(10, 13, 60, 3));
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Noop,
    Quit,
    ToggleActive,
    Reset,
}

fn handle_input() -> Result<Command> {
    if !event::poll(Duration::from_secs_f64(1.0 / 60.0))? {
        return Ok(Command::Noop);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') => Ok(Command::Quit),
            KeyCode::Char('a') => Ok(Command::ToggleActive),
            KeyCode::Char('r') => Ok(Command::Reset),
            _ => Ok(Command::Noop),
        },
        _ => Ok(Command::Noop),
    }
}
