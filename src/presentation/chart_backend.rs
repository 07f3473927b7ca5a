// Draw seam over the terminal charting widgets
use crate::domain::chart::{Cell, ChartKind, ChartView};
use chrono::Timelike;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Minimal draw interface so the renderer transforms stay testable
/// without touching a terminal.
pub trait ChartBackend {
    fn draw(&self, view: &ChartView, frame: &mut Frame, area: Rect);
}

pub struct RatatuiChartBackend;

impl ChartBackend for RatatuiChartBackend {
    fn draw(&self, view: &ChartView, frame: &mut Frame, area: Rect) {
        match view.kind {
            ChartKind::Column => draw_column(view, frame, area),
            ChartKind::Timeline => draw_timeline(view, frame, area),
            ChartKind::Proportion => draw_proportion(view, frame, area),
        }
    }
}

fn bar_value(cell: &Cell) -> u64 {
    match cell {
        Cell::Number(n) => n.max(0.0) as u64,
        // Time-of-day height; a wrapped >24h duration keeps its wrapped
        // height, consistent with its wrapped label.
        Cell::DateTime(dt) => u64::from(dt.time().num_seconds_from_midnight()),
        Cell::Label(_) => 0,
    }
}

fn day_fraction(cell: &Cell) -> f64 {
    match cell {
        Cell::DateTime(dt) => f64::from(dt.time().num_seconds_from_midnight()) / SECONDS_PER_DAY,
        _ => 0.0,
    }
}

/// Column offset and width of a timeline span inside `width` columns.
/// A span never collapses below one column, so even a very short day
/// stays visible.
fn span_columns(start_frac: f64, end_frac: f64, width: u16) -> (u16, u16) {
    let width = f64::from(width);
    let offset = (start_frac.clamp(0.0, 1.0) * width) as u16;
    let len = ((end_frac - start_frac).max(0.0) * width).round().max(1.0) as u16;
    (offset, len)
}

fn draw_column(view: &ChartView, frame: &mut Frame, area: Rect) {
    let bars: Vec<Bar> = view
        .table
        .rows
        .iter()
        .filter(|row| row.len() >= 2)
        .map(|row| {
            Bar::default()
                .label(Line::from(row[0].formatted()))
                .value(bar_value(&row[1]))
                .text_value(row[1].formatted())
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

fn draw_timeline(view: &ChartView, frame: &mut Frame, area: Rect) {
    // Label column, span lane, then the formatted start/end pair.
    let lane_width = area.width.saturating_sub(24).max(10);

    let mut lines = Vec::new();
    for row in view.table.rows.iter().filter(|row| row.len() >= 3) {
        let (offset, len) = span_columns(day_fraction(&row[1]), day_fraction(&row[2]), lane_width);
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<4}", row[0].formatted()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(offset as usize)),
            Span::styled(
                "█".repeat(len as usize),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(" ".repeat((lane_width.saturating_sub(offset + len)) as usize)),
            Span::raw(format!(
                " {} - {}",
                row[1].formatted(),
                row[2].formatted()
            )),
        ]));
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

fn draw_proportion(view: &ChartView, frame: &mut Frame, area: Rect) {
    let total: f64 = view
        .table
        .rows
        .iter()
        .filter_map(|row| match row.get(1) {
            Some(Cell::Number(n)) => Some(*n),
            _ => None,
        })
        .sum();

    let lane_width = usize::from(area.width.saturating_sub(20).max(10));

    let mut lines = Vec::new();
    for row in view.table.rows.iter().filter(|row| row.len() >= 2) {
        let value = match row[1] {
            Cell::Number(n) => n,
            _ => continue,
        };
        let share = if total > 0.0 { value / total } else { 0.0 };
        let filled = (share * lane_width as f64).round() as usize;
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<4}", row[0].formatted()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
            Span::raw(" ".repeat(lane_width.saturating_sub(filled))),
            Span::raw(format!(" {:>5.1}%", share * 100.0)),
        ]));
    }

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}
