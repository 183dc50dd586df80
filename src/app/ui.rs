use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use crate::{app::plot::PlotData, models::View};

pub fn render(frame: &mut Frame, plot: &PlotData) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(plot.title().as_str())
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    if plot.points().is_empty() {
        let empty_message = Paragraph::new("No exchange rates to display.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, chunks[1]);
    } else {
        match plot.view() {
            View::Hist => render_histogram(frame, chunks[1], plot),
            View::Timeline => render_timeline(frame, chunks[1], plot),
        }
    }

    let help = Paragraph::new("Press q, Esc or Enter to close")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2]);
}

fn render_histogram(frame: &mut Frame, area: Rect, plot: &PlotData) {
    let histogram = match plot.histogram() {
        Ok(histogram) => histogram,
        Err(e) => {
            let message = Paragraph::new(e.to_string())
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, area);
            return;
        }
    };

    let bars: Vec<Bar> = histogram
        .edges()
        .iter()
        .zip(histogram.counts())
        .map(|(edge, count)| {
            Bar::default()
                .value(*count)
                .label(Line::from(format!("{:.2}", edge)))
        })
        .collect();

    let bin_count = bars.len().max(1) as u16;
    let bar_width = (area.width.saturating_sub(2) / bin_count)
        .saturating_sub(1)
        .max(1);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(format!("{} by {}", plot.y_label(), plot.x_label()))
                .borders(Borders::ALL),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Yellow))
        .value_style(Style::default().fg(Color::Black).bg(Color::Yellow));

    frame.render_widget(chart, area);
}

fn render_timeline(frame: &mut Frame, area: Rect, plot: &PlotData) {
    let data: Vec<(f64, f64)> = plot
        .values()
        .into_iter()
        .enumerate()
        .map(|(i, value)| (i as f64, value))
        .collect();

    let (mut low, mut high) = data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, y)| {
            (lo.min(*y), hi.max(*y))
        });
    let padding = ((high - low) * 0.05).max(0.5);
    low -= padding;
    high += padding;

    let last = data.len().saturating_sub(1);
    let labels = plot.labels();
    let x_labels: Vec<String> = [0, last / 2, last]
        .iter()
        .map(|&i| labels.get(i).copied().unwrap_or_default().to_string())
        .collect();
    let y_labels = vec![
        format!("{:.2}", low),
        format!("{:.2}", (low + high) / 2.0),
        format!("{:.2}", high),
    ];

    let dataset = Dataset::default()
        .name(plot.y_label().as_str())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title(plot.x_label().as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, (last as f64).max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(plot.y_label().as_str())
                .style(Style::default().fg(Color::Gray))
                .bounds([low, high])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
