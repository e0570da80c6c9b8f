use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

use crate::ledger::CategoryTotals;
use crate::models::Category;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

/// Height, in chart units, of the tallest bar.
pub(crate) const CANVAS_HEIGHT: u64 = 300;

const BAR_GAP: u16 = 1;

/// Scale used when every total is zero and there is no tallest bar.
pub(crate) const FALLBACK_SCALE: f64 = 1.0;

/// Layout of one bar, computed before anything is drawn.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BarSpec {
    pub(crate) category: Category,
    pub(crate) amount: f64,
    pub(crate) height: u64,
    pub(crate) color: Color,
}

pub(crate) fn scale_factor(totals: &CategoryTotals) -> f64 {
    let max = totals.max();
    if max > 0.0 {
        CANVAS_HEIGHT as f64 / max
    } else {
        FALLBACK_SCALE
    }
}

/// One bar per category in fixed order, linearly scaled so the tallest
/// is exactly `CANVAS_HEIGHT`.
pub(crate) fn bar_layout(totals: &CategoryTotals) -> Vec<BarSpec> {
    let scale = scale_factor(totals);
    totals
        .iter()
        .enumerate()
        .map(|(i, (category, amount))| BarSpec {
            category,
            amount,
            height: (amount * scale).round().max(0.0) as u64,
            color: theme::palette_color(i),
        })
        .collect()
}

pub(crate) fn render(f: &mut Frame, area: Rect, totals: &CategoryTotals) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" Expense Chart ", theme::title_style()));
    let inner = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    // Values get their own row above the bars; BarChart skips them on
    // zero-height bars and on bars narrower than the text.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let specs = bar_layout(totals);
    let slots = specs.len().max(1) as u16;
    let bar_width = (inner.width / slots).saturating_sub(BAR_GAP).max(1);

    let bars: Vec<Bar> = specs
        .iter()
        .map(|spec| {
            Bar::default()
                .value(spec.height)
                .text_value(String::new())
                .label(Line::from(truncate(
                    spec.category.as_str(),
                    bar_width as usize,
                )))
                .style(Style::default().fg(spec.color))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .max(CANVAS_HEIGHT);

    render_values(f, rows[0], &specs, bar_width);
    f.render_widget(chart, rows[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Total: {}", format_amount(totals.grand_total())),
            theme::value_style(),
        ),
        Span::styled("   Press any key to return", theme::dim_style()),
    ]));
    f.render_widget(footer, chunks[1]);
}

/// One centered value per bar, lined up with the bar slots below.
fn render_values(f: &mut Frame, area: Rect, specs: &[BarSpec], bar_width: u16) {
    let slot = bar_width + BAR_GAP;
    for (i, spec) in specs.iter().enumerate() {
        let x = area.x.saturating_add((i as u16).saturating_mul(slot));
        if x >= area.right() {
            break;
        }
        let text = format!("{:.2}", spec.amount);
        let wanted = if text.chars().count() <= bar_width as usize {
            bar_width
        } else {
            slot
        };
        let width = wanted.min(area.right() - x);
        let value = Paragraph::new(Span::styled(
            truncate(&text, width as usize),
            theme::value_style().fg(spec.color),
        ))
        .centered();
        f.render_widget(value, Rect::new(x, area.y, width, 1));
    }
}

/// Draw the chart full-screen and wait for a key press.
pub(crate) fn show(totals: &CategoryTotals) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_chart(&mut terminal, totals);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_chart(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    totals: &CategoryTotals,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, f.area(), totals))?;
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
