//! Skipdeck - terminal skip selection step
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async catalog fetch

mod app;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::{AppActor, CatalogPhase};
use constants::GRID_COLUMNS;
use messages::ui_events::key_to_ui_event;
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use models::{format_price, tier_for_size, Location, Skip};
use network::NetworkActor;
use ui::{popup_title, sprite, steps_line, tier_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", constants::LOG_FILE);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx, Location::default());
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    let chosen = run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    // Restore the terminal before reporting the outcome
    drop(guard);

    if let Some(skip) = chosen {
        println!(
            "Selected: {} Yard Skip - {} day hire, {} - £{} inc. VAT",
            skip.size,
            skip.hire_period_days,
            skip.area,
            format_price(skip.total_price())
        );
    }

    Ok(())
}

/// Run the synchronous UI rendering loop. Returns the confirmed skip
/// when the user continues to the next step, or None on quit.
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<Option<Skip>> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, &current_state.phase, current_state.show_help)
                {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        return Ok(None);
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }

        if let Some(skip) = current_state.completed.take() {
            return Ok(Some(skip));
        }
    }
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    match &state.phase {
        CatalogPhase::Loading => draw_loading(f, area),
        CatalogPhase::Error(message) => draw_error(f, message, area),
        CatalogPhase::Ready => draw_catalog(f, state, area),
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_loading(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 20, area);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Loading skip options...",
            Style::default().fg(Color::Cyan),
        )),
    ];
    let loading = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(popup_title()));
    f.render_widget(loading, popup_area);
}

fn draw_error(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(60, 30, area);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Unable to Load Skips",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "r: try again   q: quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let error = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(popup_title()),
        );
    f.render_widget(error, popup_area);
}

fn draw_catalog(f: &mut Frame, state: &RenderState, area: Rect) {
    let has_summary = state.can_continue;
    let summary_height = if has_summary { 6 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),              // Wizard steps
            Constraint::Length(2),              // Title
            Constraint::Min(5),                 // Card grid / empty notice
            Constraint::Length(summary_height), // Summary panel
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    f.render_widget(Paragraph::new(steps_line()), chunks[0]);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Choose Your Skip Size",
            Style::default().bold(),
        )),
        Line::from(Span::styled(
            format!(
                "Skips available for {} ({})",
                state.location.area, state.location.postcode
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    f.render_widget(title, chunks[1]);

    if state.skips.is_empty() {
        draw_empty_notice(f, chunks[2]);
    } else {
        draw_skip_grid(f, state, chunks[2]);
    }

    if has_summary {
        if let Some(skip) = state
            .selected_id
            .and_then(|id| state.skips.iter().find(|s| s.id == id))
        {
            draw_summary(f, skip, chunks[3]);
        }
    }

    draw_status_bar(f, state, chunks[4]);
}

fn draw_empty_notice(f: &mut Frame, area: Rect) {
    let notice = Paragraph::new(vec![
        Line::from(""),
        Line::from("No skip options available for this location."),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    f.render_widget(notice, area);
}

fn draw_skip_grid(f: &mut Frame, state: &RenderState, area: Rect) {
    let rows = state.skips.chunks(GRID_COLUMNS).collect::<Vec<_>>();
    let row_constraints: Vec<Constraint> = rows
        .iter()
        .map(|_| Constraint::Length(12))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row, skips) in rows.iter().enumerate() {
        let col_constraints: Vec<Constraint> = (0..GRID_COLUMNS)
            .map(|_| Constraint::Ratio(1, GRID_COLUMNS as u32))
            .collect();
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(row_areas[row]);

        for (col, skip) in skips.iter().enumerate() {
            let is_selected = state.selected_id == Some(skip.id);
            draw_skip_card(f, skip, is_selected, col_areas[col]);
        }
    }
}

fn draw_skip_card(f: &mut Frame, skip: &Skip, is_selected: bool, area: Rect) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let yard_label = if skip.size == 1 { "Yard" } else { "Yards" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} {} ", skip.size, yard_label))
        .title_style(Style::default().fg(Color::Cyan).bold());

    let tier = tier_for_size(skip.size);
    let mut lines: Vec<Line> = sprite(tier)
        .iter()
        .map(|art| {
            Line::from(Span::styled(*art, Style::default().fg(tier_color(tier))))
                .alignment(Alignment::Center)
        })
        .collect();

    if skip.private_land_only() {
        lines.push(Line::from(Span::styled(
            "! Private Land Only",
            Style::default().fg(Color::Yellow).bold(),
        )));
    }

    let day_label = if skip.hire_period_days == 1 { "day" } else { "days" };
    lines.push(Line::from(vec![
        Span::styled("Hire period: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{} {}", skip.hire_period_days, day_label)),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Location:    ", Style::default().fg(Color::DarkGray)),
        Span::raw(skip.area.clone()),
    ]));
    if skip.allows_heavy_waste {
        lines.push(Line::from(vec![
            Span::styled("Heavy waste: ", Style::default().fg(Color::DarkGray)),
            Span::styled("allowed", Style::default().fg(Color::Green)),
        ]));
    }
    if let Some(transport) = skip.transport_cost {
        lines.push(Line::from(vec![
            Span::styled("Transport:   ", Style::default().fg(Color::DarkGray)),
            Span::raw(format!("£{}", format_price(transport))),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("£{}", format_price(skip.total_price())),
            Style::default().bold(),
        ),
        Span::styled(
            format!("  inc. VAT (£{})", format_price(skip.vat)),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    lines.push(Line::from(Span::styled(
        if is_selected { "[ Selected ]" } else { "[ Select ]" },
        if is_selected {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        },
    )));

    let card = Paragraph::new(lines).block(block);
    f.render_widget(card, area);
}

fn draw_summary(f: &mut Frame, skip: &Skip, area: Rect) {
    let day_label = if skip.hire_period_days == 1 { "day" } else { "days" };
    let mut detail = vec![Span::raw(format!(
        "{} {} hire period - {}",
        skip.hire_period_days, day_label, skip.area
    ))];
    if skip.private_land_only() {
        detail.push(Span::styled(
            "  ! Private land only",
            Style::default().fg(Color::Yellow),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            format!("Selected: {} Yard Skip", skip.size),
            Style::default().bold(),
        )),
        Line::from(detail),
        Line::from(vec![
            Span::styled(
                format!("£{}", format_price(skip.total_price())),
                Style::default().fg(Color::Green).bold(),
            ),
            Span::styled(" Including VAT", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::Cyan),
        )),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Your Selection "),
    );
    f.render_widget(panel, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.can_continue {
        " arrows:choose | Enter:continue | r:reload | ?:help | q:quit "
    } else {
        " r:reload | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 SKIPDECK - Keyboard Shortcuts

 NAVIGATION
   Left / Right / h / l   Previous / next skip
   Up / Down / k / j      Move a grid row
   Tab / Shift+Tab        Next / previous skip

 ACTIONS
   Enter / c              Continue with selection
   r                      Reload skip options

 GENERAL
   ?                      Toggle this help
   q / Ctrl+C             Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
