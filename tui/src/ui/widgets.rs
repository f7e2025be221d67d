use ratatui::{
    layout::{Constraint, Rect},
    style::Modifier,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Cell, Chart, Dataset, GraphType, Paragraph, Row, Table, Wrap},
    Frame,
};
use regression_core::{
    metrics::EvaluationTable,
    panels::{CurvePanel, Fit, PLOT_BOUNDS},
    Flag, Panel, Param, Scene,
};

use crate::state::{
    model::{Control, Slider},
    session::ExplorerState,
};

use super::theme::Theme;

const TRACK_WIDTH: usize = 25;

fn block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()))
}

fn labels(lo: f64, hi: f64) -> Vec<Span<'static>> {
    [lo, (lo + hi) / 2., hi]
        .into_iter()
        .map(|v| Span::styled(format!("{v:.1}"), Theme::dim()))
        .collect()
}

/// Widens a degenerate `[lo, hi]` interval and adds a small margin to any other.
fn padded(lo: f64, hi: f64) -> [f64; 2] {
    if hi - lo <= f64::EPSILON {
        return [lo - 1., hi + 1.];
    }

    let margin = (hi - lo) * 0.05;
    [lo - margin, hi + margin]
}

pub fn sidebar(state: &ExplorerState) -> Paragraph<'static> {
    let focused = state.focused();
    let mut lines = Vec::new();

    for control in Control::ALL {
        if control == Control::Toggle(Flag::DataPoints) {
            lines.push(Line::from(Span::styled("Display", Theme::dim())));
        }

        let is_focused = control == focused;
        let (prefix, style) = if is_focused {
            ("▶ ", Theme::focused())
        } else {
            ("  ", Theme::text())
        };

        match control {
            Control::Slider(param) => {
                let slider = state.slider(param);
                lines.push(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("Parameter {param}"), style),
                ]));
                lines.push(slider_line(param, slider));
                lines.push(Line::from(""));
            }
            Control::Toggle(flag) => {
                let mark = if state.flags().get(flag) { "[x] " } else { "[ ] " };
                lines.push(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(mark, style),
                    Span::styled(flag.label(), style),
                ]));
            }
        }
    }

    Paragraph::new(lines)
        .block(block(" Control Parameters ".to_string()))
        .wrap(Wrap { trim: false })
}

fn slider_line(param: Param, slider: Slider) -> Line<'static> {
    let knob = slider.knob(TRACK_WIDTH);
    let track: String = (0..TRACK_WIDTH)
        .map(|i| if i == knob { '●' } else { '─' })
        .collect();

    let value_style = match param {
        Param::Intercept => Theme::intercept(),
        Param::Slope => Theme::slope(),
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled(track, Theme::dim()),
        Span::styled(format!(" {:>5.1}", slider.value()), value_style),
    ])
}

pub fn header(scene: &Scene) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("y = ", Theme::title()),
            Span::styled("a", Theme::intercept()),
            Span::styled(" + ", Theme::title()),
            Span::styled("b", Theme::slope()),
            Span::styled(" x", Theme::title()),
        ]),
        Line::from(vec![
            Span::styled("y = ", Theme::title()),
            Span::styled(format!("{:.1}", scene.model.a), Theme::intercept()),
            Span::styled(" + ", Theme::title()),
            Span::styled(format!("{:.1}", scene.model.b), Theme::slope()),
            Span::styled(" x", Theme::title()),
        ]),
    ];

    if scene.flags.ssr {
        lines.push(Line::from(vec![
            Span::styled("Sum of Squared Residuals (SSR): ", Theme::title()),
            Span::styled(format!("{:.2}", scene.train.ssr), Theme::ssr()),
        ]));
    }

    Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(block(" Interactive Linear Regression ".to_string()))
}

fn residual_segments(fit: &Fit) -> Vec<[(f64, f64); 2]> {
    fit.residuals
        .iter()
        .map(|r| [(r.x, r.y), (r.x, r.y_pred)])
        .collect()
}

/// Renders the fitted line together with the samples and their residuals.
pub fn render_main_plot(f: &mut Frame, area: Rect, scene: &Scene) {
    let flags = scene.flags;
    let (lo, hi) = PLOT_BOUNDS;
    let x_axis_line = [(lo, 0.), (hi, 0.)];
    let y_axis_line = [(0., lo), (0., hi)];

    let mut segments = Vec::new();
    if flags.ssr && flags.data_points {
        segments.extend(residual_segments(&scene.train));
    }
    if let (true, Some(test)) = (flags.ssr, &scene.test) {
        segments.extend(residual_segments(test));
    }

    let mut datasets = vec![
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::axes())
            .data(&x_axis_line),
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::axes())
            .data(&y_axis_line),
    ];

    datasets.extend(segments.iter().map(|segment| {
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::residuals())
            .data(segment)
    }));

    datasets.push(
        Dataset::default()
            .name("Interactive Line")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::line())
            .data(&scene.line),
    );

    if flags.data_points {
        datasets.push(
            Dataset::default()
                .name("Data Points (a=1, b=1, noise σ=1)")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Theme::points())
                .data(&scene.train.points),
        );
    }

    if let Some(test) = &scene.test {
        datasets.push(
            Dataset::default()
                .name("Test Points (a=1, b=1, noise σ=2)")
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Theme::test_points())
                .data(&test.points),
        );
    }

    let chart = Chart::new(datasets)
        .block(block(format!(" {} ", scene.plot_title())))
        .x_axis(
            Axis::default()
                .title(Span::styled("x", Theme::dim()))
                .bounds([lo, hi])
                .labels(labels(lo, hi)),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("y", Theme::dim()))
                .bounds([lo, hi])
                .labels(labels(lo, hi)),
        );

    f.render_widget(chart, area);
}

/// Renders a metric vs. parameter curve with the current parameter marked on it.
pub fn render_curve(f: &mut Frame, area: Rect, panel: Panel, data: &CurvePanel) {
    let points = data.curve.points();
    let axis = data.sweep.axis;

    let x_bounds = match (points.first(), points.last()) {
        (Some(&(first, _)), Some(&(last, _))) => padded(first, last),
        _ => padded(0., 0.),
    };
    let (m_lo, m_hi) = data.curve.metric_bounds().unwrap_or((0., 0.));
    let y_bounds = padded(m_lo, m_hi);

    let (param, _) = data.current;
    let current_line = [(param, y_bounds[0]), (param, y_bounds[1])];
    let current_point = [data.current];
    let minimum: Vec<(f64, f64)> = data.curve.min_point().into_iter().collect();

    let curve_style = match axis {
        Param::Slope => Theme::points(),
        Param::Intercept => Theme::line(),
    };

    let datasets = vec![
        Dataset::default()
            .name(data.sweep.metric.to_string())
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(curve_style)
            .data(points),
        Dataset::default()
            .name(format!("Current {} = {param:.1}", axis.symbol()))
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Theme::current())
            .data(&current_line),
        Dataset::default()
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Theme::current())
            .data(&current_point),
        Dataset::default()
            .name("Minimum")
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Theme::ssr())
            .data(&minimum),
    ];

    let chart = Chart::new(datasets)
        .block(block(format!(" {} ", panel.title())))
        .x_axis(
            Axis::default()
                .title(Span::styled(format!("Parameter {axis}"), Theme::dim()))
                .bounds(x_bounds)
                .labels(labels(x_bounds[0], x_bounds[1])),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(data.sweep.metric.label(), Theme::dim()))
                .bounds(y_bounds)
                .labels(labels(y_bounds[0], y_bounds[1])),
        );

    f.render_widget(chart, area);
}

pub fn metrics_table(table: &EvaluationTable) -> Table<'static> {
    let header = Row::new(vec!["Metric", "Train", "Test"])
        .style(Theme::title().add_modifier(Modifier::UNDERLINED));

    let rows = table.rows().map(|(name, train, test)| {
        let cell = |value: regression_core::MetricValue| {
            let style = if value.is_defined() {
                Theme::text()
            } else {
                Theme::muted()
            };
            Cell::from(format!("{value:.4}")).style(style)
        };

        Row::new(vec![Cell::from(name), cell(train), cell(test)])
    });

    Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block(format!(" {} ", Panel::Metrics.title())))
}

pub fn status(state: &ExplorerState) -> Paragraph<'static> {
    if let Some(err) = state.status() {
        return Paragraph::new(Span::styled(format!("error: {err}"), Theme::error()));
    }

    Paragraph::new(Line::from(vec![
        Span::styled("↑↓ / j k", Theme::dim()),
        Span::styled("  focus   ", Theme::muted()),
        Span::styled("←→ / h l", Theme::dim()),
        Span::styled("  ±0.1   ", Theme::muted()),
        Span::styled("H L", Theme::dim()),
        Span::styled("  ±1.0   ", Theme::muted()),
        Span::styled("space", Theme::dim()),
        Span::styled("  toggle   ", Theme::muted()),
        Span::styled("r", Theme::dim()),
        Span::styled("  reset   ", Theme::muted()),
        Span::styled("q", Theme::dim()),
        Span::styled("  quit", Theme::muted()),
    ]))
}
