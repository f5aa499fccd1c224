//! Trace chart widget: sample index against amplitude.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use wavetrace::trace::Trace;

/// Render the captured trace, with an optional comparison trace overlaid.
pub fn render_trace(frame: &mut Frame, area: Rect, trace: &Trace, overlay: Option<&Trace>) {
    let block = Block::default().title(" Trace ").borders(Borders::ALL);

    // One chart point per sample index.
    let data: Vec<(f64, f64)> = trace
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64, sample))
        .collect();

    let overlay_data: Option<Vec<(f64, f64)>> = overlay.map(|t| {
        t.samples()
            .iter()
            .enumerate()
            .map(|(i, &sample)| (i as f64, sample))
            .collect()
    });

    let mut datasets = vec![Dataset::default()
        .name(trace.waveform().name())
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data)];

    if let (Some(t), Some(points)) = (overlay, &overlay_data) {
        datasets.push(
            Dataset::default()
                .name(t.waveform().name())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Yellow))
                .data(points),
        );
    }

    let last_index = trace.len().saturating_sub(1).max(1) as f64;
    let x_labels = vec![
        "0".to_string(),
        format!("{}", trace.len() / 2),
        format!("{}", trace.len().saturating_sub(1)),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Sample")
                .bounds([0.0, last_index])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .title("Amplitude")
                .bounds([-1.0, 1.0])
                .labels(vec!["-1", "0", "+1"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
