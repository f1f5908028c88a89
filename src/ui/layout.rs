use {
    crate::live::feed::FeedPhase,
    crate::state::DashboardState,
    crate::ui::renderer::{format_pct, format_price, trend_arrow},
    ratatui::{
        layout::{Constraint, Layout as RatLayout, Rect},
        style::{Color, Modifier, Style},
        symbols,
        text::{Line, Span},
        widgets::{
            Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Row, Sparkline, Table,
        },
        Frame,
    },
};

/// Which live metric the sparkline shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveMetric {
    Volatility,
    HypeIndex,
}

impl LiveMetric {
    pub fn toggle(self) -> Self {
        match self {
            LiveMetric::Volatility => LiveMetric::HypeIndex,
            LiveMetric::HypeIndex => LiveMetric::Volatility,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LiveMetric::Volatility => "Volatility",
            LiveMetric::HypeIndex => "Hype Index",
        }
    }
}

/// Render the main UI layout
pub fn render_layout(f: &mut Frame, area: Rect, state: &DashboardState, metric: LiveMetric) {
    let chunks = RatLayout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Asset chart
            Constraint::Length(5),  // Live metrics
            Constraint::Length(10), // Scanner table
            Constraint::Length(3),  // Footer/Status
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_asset_chart(f, chunks[1], state);
    render_live_metrics(f, chunks[2], state, metric);
    render_scanner_table(f, chunks[3], state);
    render_footer(f, chunks[4], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![
            Span::styled(
                "rugwatch",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - Synthetic Market Risk Monitor"),
        ]),
        Line::from(vec![Span::raw(
            "←/→ switch asset | Tab switch metric | r regenerate | q quit",
        )]),
    ];

    let header = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(text).block(header), area);
}

/// Price and risk overlay for the selected asset.
///
/// Price is scaled onto the risk axis so both curves share one chart.
fn render_asset_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let asset = state.selected();
    let summary = state.selected_summary();
    let series = &asset.history;

    if series.is_empty() {
        f.render_widget(Block::default().borders(Borders::ALL).title("No data"), area);
        return;
    }

    let (min_price, max_price) = series.iter().fold((f64::MAX, f64::MIN), |(min, max), p| {
        (min.min(p.price), max.max(p.price))
    });
    let span = (max_price - min_price).max(f64::EPSILON);

    let price_points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, (p.price - min_price) / span * 100.0))
        .collect();
    let risk_points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.risk_score as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Price (scaled)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&price_points),
        Dataset::default()
            .name("Rug Pull Risk")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&risk_points),
    ];

    let latest_price = series[series.len() - 1].price;
    let title = format!(
        "{} [{}] {} - {}",
        asset.name,
        asset.tier.badge(),
        format_price(latest_price),
        summary.pattern.title,
    );

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .bounds([0.0, (series.len() - 1) as f64])
                .labels(vec![Span::raw("Jan"), Span::raw("May"), Span::raw("Sep")]),
        )
        .y_axis(
            Axis::default()
                .title("Risk")
                .bounds([0.0, 100.0])
                .labels(vec![Span::raw("0"), Span::raw("50"), Span::raw("100")]),
        );

    f.render_widget(chart, area);
}

fn render_live_metrics(f: &mut Frame, area: Rect, state: &DashboardState, metric: LiveMetric) {
    let feed = state.live();
    let totals = feed.totals();
    let directions = feed.directions();

    let data: Vec<u64> = feed
        .window()
        .iter()
        .map(|sample| match metric {
            LiveMetric::Volatility => sample.volatility as u64,
            LiveMetric::HypeIndex => sample.hype_index as u64,
        })
        .collect();

    let (total, arrow) = match metric {
        LiveMetric::Volatility => (totals.volatility, trend_arrow(directions.volatility)),
        LiveMetric::HypeIndex => (totals.hype_index, trend_arrow(directions.hype_index)),
    };

    let phase = match feed.phase() {
        FeedPhase::Priming => "priming",
        FeedPhase::Streaming => "streaming",
    };

    let title = format!(
        "Live Market Metrics - {} (total {} {}) [{}]",
        metric.label(),
        total,
        arrow,
        phase,
    );

    let sparkline = Sparkline::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    f.render_widget(sparkline, area);
}

fn render_scanner_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header = Row::new(vec![
        "Symbol",
        "Exchange",
        "Price 24h",
        "Volume 24h",
        "Mentions",
        "Risk",
    ])
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .scanner_top()
        .iter()
        .map(|reading| {
            let risk_color = if reading.risk_score > 70.0 {
                Color::Red
            } else if reading.risk_score > 30.0 {
                Color::Yellow
            } else {
                Color::Green
            };

            Row::new(vec![
                reading.symbol.to_string(),
                reading.exchange.to_string(),
                format_pct(reading.price_change_24h),
                format_pct(reading.volume_change_24h),
                reading.social_mentions.to_string(),
                format!("{:.2}", reading.risk_score),
            ])
            .style(Style::default().fg(risk_color))
        })
        .collect();

    let widths = [
        Constraint::Length(8),  // Symbol
        Constraint::Length(10), // Exchange
        Constraint::Length(12), // Price 24h
        Constraint::Length(12), // Volume 24h
        Constraint::Length(10), // Mentions
        Constraint::Length(8),  // Risk
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Live Activity Feed"),
    );

    f.render_widget(table, area);
}

fn render_footer(f: &mut Frame, area: Rect, state: &DashboardState) {
    let summary = state.selected_summary();
    let trend_word = if summary.trend.increasing {
        "Increasing"
    } else {
        "Decreasing"
    };

    let mut spans = vec![
        Span::styled("Risk trend: ", Style::default().fg(Color::Cyan)),
        Span::raw(format!(
            "{} by {} points",
            trend_word, summary.trend.magnitude
        )),
        Span::raw(" | "),
        Span::raw(format!(
            "{} ({}/100)",
            summary.risk_label, summary.latest_risk
        )),
        Span::raw(" | "),
        Span::styled("Scans: ", Style::default().fg(Color::Cyan)),
        Span::raw(state.scan_count().to_string()),
    ];

    if let (Some(pump), Some(dump)) = (summary.detection.pump_region, summary.detection.dump_region)
    {
        spans.push(Span::styled(
            format!(" | Pump: {} - {}", pump.start, pump.end),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::styled(
            format!(" | Dump: {} - {}", dump.start, dump.end),
            Style::default().fg(Color::Red),
        ));
    }

    if summary.high_fraud {
        spans.push(Span::styled(
            " | ⚠ High fraud potential",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let footer = Block::default().borders(Borders::ALL).title("Status");
    f.render_widget(Paragraph::new(vec![Line::from(spans)]).block(footer), area);
}
