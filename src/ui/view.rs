use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        BarChart, Block, Borders, Cell, Clear, Gauge, List, ListItem, ListState, Paragraph, Row,
        Table, TableState, Tabs, Wrap,
    },
    Frame,
};

use crate::domain::{
    assessment::{AssessmentForm, AssessmentPhase, TOTAL_STEPS},
    chat_responder::QUICK_ACTIONS,
    chat_state::{ChatAuthor, ChatConversation},
    client::{format_currency, ClientRecord, ClientStatus, ScoreBand},
    client_list_state::{ClientListState, ClientListUiState},
    composer_state::{ComposerState, ComposerTab},
    dashboard::{DashboardFocus, DashboardState, RECENT_ACTIVITY, SHORTCUTS, STAT_CARDS},
    email_template::{assessment_link, EmailDraft},
    help::{HelpSection, HelpState, CONTACTS, FAQ, GETTING_STARTED, RESOURCES},
    login::{LoginField, LoginForm},
    report::NeedsReport,
    shell_state::{ActivePane, Screen, ShellState},
    text_width::truncate_to_width,
};

use super::{
    styles,
    text_field::{render_text_field, TextField},
};

const SIDEBAR_WIDTH: u16 = 20;
const COLLAPSED_SIDEBAR_WIDTH: u16 = 5;
const CHAT_WIDTH: u16 = 52;
const CHAT_HEIGHT: u16 = 20;
const TEMPLATE_PREVIEW_CHARS: usize = 100;

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    if state.screen() == &Screen::Login {
        render_login(frame, content_area, state.login());
    } else {
        let collapsed = state.layout().sidebar_collapsed(content_area.width);
        let sidebar_width = if collapsed {
            COLLAPSED_SIDEBAR_WIDTH
        } else {
            SIDEBAR_WIDTH
        };
        let [sidebar_area, main_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
            .areas(content_area);

        render_sidebar(frame, sidebar_area, state, collapsed);
        render_main(frame, main_area, state);

        if state.chat().is_open() {
            render_chat(frame, content_area, state.chat(), state.active_pane());
        }
    }

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

fn render_main(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    match state.screen() {
        Screen::Login => {}
        Screen::Dashboard => render_dashboard(frame, area, state.dashboard(), state.clients()),
        Screen::Clients => render_clients(frame, area, state.clients(), state.active_pane()),
        Screen::ClientDetail { client_id } => match state.clients().client(client_id) {
            Some(client) => render_client_detail(frame, area, client),
            None => render_message(frame, area, "Client", "Client not found."),
        },
        Screen::Assessment => match state.assessment() {
            Some(form) => render_assessment(frame, area, form),
            None => render_message(frame, area, "Assessment", "No assessment in progress."),
        },
        Screen::Report => match state.report() {
            Some(report) => render_report(frame, area, report),
            None => render_message(frame, area, "Report", "No report selected."),
        },
        Screen::Communication => render_communication(
            frame,
            area,
            state.composer(),
            state.active_pane() == ActivePane::ComposeSubject,
        ),
        Screen::Help => render_help(frame, area, state.help()),
    }
}

fn render_message(frame: &mut Frame<'_>, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(message.to_owned()).block(
        Block::default()
            .title(title.to_owned())
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(paragraph, area);
}

// =============================================================================
// Login
// =============================================================================

fn render_login(frame: &mut Frame<'_>, area: Rect, login: &LoginForm) {
    let card = centered(area, 56, 16);
    frame.render_widget(Clear, card);
    frame.render_widget(
        Block::default()
            .title("Everly · Agent Sign In")
            .borders(Borders::ALL)
            .border_style(styles::active_panel_border_style()),
        card,
    );

    let inner = inset(card);
    let [email_area, password_area, remember_area, error_area, hint_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(1),
        ])
        .areas(inner);

    render_text_field(
        frame,
        email_area,
        TextField {
            title: "Email",
            input: login.email(),
            focused: login.focus() == LoginField::Email,
            placeholder: "agent@example.com",
            display: None,
        },
    );
    render_text_field(
        frame,
        password_area,
        TextField {
            title: "Password",
            input: login.password(),
            focused: login.focus() == LoginField::Password,
            placeholder: "••••••••",
            display: Some(login.password_display()),
        },
    );

    let checkbox = if login.remember_me() { "[x]" } else { "[ ]" };
    let remember_style = if login.focus() == LoginField::RememberMe {
        styles::nav_item_style(true)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {checkbox} Remember me"),
            remember_style,
        ))),
        remember_area,
    );

    if let Some(error) = login.error() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {error}"),
                styles::error_style(),
            )),
            error_area,
        );
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            " Tab: next field | Enter: sign in | Ctrl-V: show password",
            styles::muted_style(),
        )),
        hint_area,
    );
}

// =============================================================================
// Navigation
// =============================================================================

fn render_sidebar(frame: &mut Frame<'_>, area: Rect, state: &ShellState, collapsed: bool) {
    let current = match state.screen() {
        Screen::Dashboard => "D",
        Screen::Communication => "M",
        Screen::Help => "H",
        _ => "L",
    };
    let entries = [
        ("Dashboard", "D"),
        ("Clients", "L"),
        ("Communication", "M"),
        ("Help", "H"),
    ];

    let items: Vec<ListItem<'static>> = entries
        .iter()
        .map(|(label, key)| {
            let text = if collapsed {
                (*key).to_owned()
            } else {
                format!("{label} ({key})")
            };
            let active = *key == current;
            ListItem::new(Line::from(Span::styled(text, styles::nav_item_style(active))))
        })
        .collect();

    let title = if collapsed { "" } else { "Everly" };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styles::inactive_panel_border_style()),
    );
    frame.render_widget(list, area);
}

// =============================================================================
// Dashboard
// =============================================================================

fn render_dashboard(
    frame: &mut Frame<'_>,
    area: Rect,
    dashboard: &DashboardState,
    clients: &ClientListState,
) {
    let [header_area, stats_area, lower_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(4),
        ])
        .areas(area);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled("Dashboard", styles::header_style())),
            Line::from(Span::styled(
                "Welcome back! Here's what's happening with your clients.",
                styles::muted_style(),
            )),
        ]),
        header_area,
    );

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(STAT_CARDS.map(|_| Constraint::Ratio(1, STAT_CARDS.len() as u32)))
        .split(stats_area);
    let stats_focused = dashboard.focus() == DashboardFocus::Stats;
    for (index, (card, card_area)) in STAT_CARDS.iter().zip(card_areas.iter()).enumerate() {
        let selected = stats_focused && index == dashboard.selected_stat();
        let border = if selected {
            styles::active_panel_border_style()
        } else {
            styles::inactive_panel_border_style()
        };
        let count = card.preset.count(clients.all_clients());
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(count.to_string(), styles::header_style()),
                    Span::styled(format!("  {}", card.trend), styles::muted_style()),
                ]),
                Line::from(card.description),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(card.label)
                    .borders(Borders::ALL)
                    .border_style(border),
            ),
            *card_area,
        );
    }

    let [activity_area, shortcuts_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
        .areas(lower_area);

    let activity: Vec<ListItem<'static>> = RECENT_ACTIVITY
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(item.title),
                Line::from(Span::styled(
                    format!("{} · {}", item.description, item.time),
                    styles::muted_style(),
                )),
            ])
        })
        .collect();
    frame.render_widget(
        List::new(activity).block(
            Block::default()
                .title("Recent Activity")
                .borders(Borders::ALL)
                .border_style(styles::inactive_panel_border_style()),
        ),
        activity_area,
    );

    let shortcuts: Vec<ListItem<'static>> = SHORTCUTS
        .iter()
        .map(|shortcut| {
            ListItem::new(vec![
                Line::from(shortcut.title),
                Line::from(Span::styled(shortcut.description, styles::muted_style())),
            ])
        })
        .collect();
    let shortcuts_focused = dashboard.focus() == DashboardFocus::Shortcuts;
    let border = if shortcuts_focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };
    let mut list_state = ListState::default();
    if shortcuts_focused {
        list_state.select(Some(dashboard.selected_shortcut()));
    }
    frame.render_stateful_widget(
        List::new(shortcuts)
            .block(
                Block::default()
                    .title("Quick Actions")
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .highlight_style(styles::selected_row_style()),
        shortcuts_area,
        &mut list_state,
    );
}

// =============================================================================
// Help
// =============================================================================

fn render_help(frame: &mut Frame<'_>, area: Rect, help: &HelpState) {
    let [tabs_area, body_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .areas(area);

    let selected = HelpSection::ALL
        .iter()
        .position(|section| *section == help.section())
        .unwrap_or_default();
    frame.render_widget(
        Tabs::new(HelpSection::ALL.iter().map(|section| section.title()))
            .select(selected)
            .highlight_style(styles::nav_item_style(true))
            .block(
                Block::default()
                    .title("Help & Support")
                    .borders(Borders::ALL),
            ),
        tabs_area,
    );

    let lines: Vec<Line<'static>> = match help.section() {
        HelpSection::GettingStarted => {
            let mut lines = vec![
                Line::from(
                    "Identify life insurance needs, generate personalized recommendations, \
                     and keep client communication in one place.",
                ),
                Line::default(),
                Line::from(Span::styled("Quick start", styles::header_style())),
            ];
            lines.extend(
                GETTING_STARTED
                    .iter()
                    .enumerate()
                    .map(|(index, step)| Line::from(format!("{}. {step}", index + 1))),
            );
            lines
        }
        HelpSection::Faq => FAQ
            .iter()
            .enumerate()
            .flat_map(|(index, item)| {
                let open = help.open_faq() == Some(index);
                let marker = if open { "v" } else { ">" };
                let style = if index == help.faq_cursor() {
                    styles::selected_row_style()
                } else {
                    Style::default()
                };
                let mut lines = vec![Line::from(Span::styled(
                    format!("{marker} {}", item.question),
                    style,
                ))];
                if open {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", item.answer),
                        styles::muted_style(),
                    )));
                }
                lines
            })
            .collect(),
        HelpSection::Resources => RESOURCES
            .iter()
            .flat_map(|(title, description, action)| {
                [
                    Line::from(Span::styled(*title, styles::header_style())),
                    Line::from(format!("{description} · {action}")),
                    Line::default(),
                ]
            })
            .collect(),
        HelpSection::Contact => CONTACTS
            .iter()
            .map(|(title, detail)| {
                Line::from(vec![
                    Span::styled(format!("{title}: "), styles::header_style()),
                    Span::raw(*detail),
                ])
            })
            .collect(),
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(help.section().title())
                    .borders(Borders::ALL)
                    .border_style(styles::active_panel_border_style()),
            ),
        body_area,
    );
}

// =============================================================================
// Client list
// =============================================================================

fn render_clients(
    frame: &mut Frame<'_>,
    area: Rect,
    clients: &ClientListState,
    active_pane: ActivePane,
) {
    let [search_area, filter_area, table_area, summary_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

    render_text_field(
        frame,
        search_area,
        TextField {
            title: "Search",
            input: clients.search_input(),
            focused: active_pane == ActivePane::Search,
            placeholder: "Press '/' to search by name or email",
            display: None,
        },
    );

    frame.render_widget(
        Paragraph::new(filter_lines(clients)).wrap(Wrap { trim: true }),
        filter_area,
    );

    let border_style = if active_pane == ActivePane::Main {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };
    let title = format!("Clients ({})", clients.all_clients().len());

    match clients.ui_state() {
        ClientListUiState::NoMatches => {
            let message = Paragraph::new("No clients match the current search and filters.")
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(border_style),
                );
            frame.render_widget(message, table_area);
        }
        ClientListUiState::Ready => {
            let query = clients.query();
            let header = Row::new(
                [
                    "Client",
                    "Protection Score",
                    "Coverage Gap",
                    "Status",
                    "Last Contact",
                ]
                .into_iter()
                .map(|label| {
                    let marker = if label == query.sort_field().label() {
                        format!("{label} {}", query.sort_direction().arrow())
                    } else {
                        label.to_owned()
                    };
                    Cell::from(marker)
                }),
            )
            .style(styles::header_style());

            let rows: Vec<Row<'static>> = clients
                .page()
                .clients
                .iter()
                .map(client_row)
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Length(26),
                    Constraint::Length(18),
                    Constraint::Length(14),
                    Constraint::Length(20),
                    Constraint::Min(10),
                ],
            )
            .header(header)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .row_highlight_style(styles::selected_row_style());

            let mut table_state = TableState::default().with_selected(clients.selected_index());
            frame.render_stateful_widget(table, table_area, &mut table_state);
        }
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            pagination_label(clients),
            styles::muted_style(),
        )),
        summary_area,
    );
}

fn client_row(client: &ClientRecord) -> Row<'static> {
    let band = client.score_band();

    Row::new(vec![
        Cell::from(truncate_to_width(&client.name, 24).into_owned()),
        Cell::from(Span::styled(
            format!("{:>3}%", client.protection_score),
            styles::score_band_style(band),
        )),
        Cell::from(Span::styled(
            format_currency(client.coverage_gap),
            styles::coverage_gap_style(client.coverage_gap),
        )),
        Cell::from(Span::styled(
            client.status.label(),
            styles::status_badge_style(client.status),
        )),
        Cell::from(Span::styled(
            truncate_to_width(&client.last_contact, 36).into_owned(),
            styles::muted_style(),
        )),
    ])
}

fn filter_lines(clients: &ClientListState) -> Vec<Line<'static>> {
    let query = clients.query();

    let mut status_spans = vec![Span::styled("Status ", styles::header_style())];
    for (index, status) in ClientStatus::ALL.iter().enumerate() {
        let checked = query.status_filters().contains(status);
        status_spans.push(Span::styled(
            format!("{}[{}]{} ", index + 1, if checked { "x" } else { " " }, status.label()),
            if checked {
                styles::status_badge_style(*status)
            } else {
                styles::muted_style()
            },
        ));
    }

    let mut score_spans = vec![Span::styled("Score  ", styles::header_style())];
    for (key, band) in ["l", "m", "h"].iter().zip(ScoreBand::ALL) {
        let checked = query.score_filters().contains(&band);
        score_spans.push(Span::styled(
            format!("{key}[{}]{} ", if checked { "x" } else { " " }, band.label()),
            if checked {
                styles::score_band_style(band)
            } else {
                styles::muted_style()
            },
        ));
    }

    vec![Line::from(status_spans), Line::from(score_spans)]
}

fn pagination_label(clients: &ClientListState) -> String {
    let page = clients.page();
    if page.total_pages > 1 {
        format!(
            "{} | page {} of {}",
            page.summary(),
            page.page,
            page.total_pages
        )
    } else {
        page.summary()
    }
}

// =============================================================================
// Client detail
// =============================================================================

fn render_client_detail(frame: &mut Frame<'_>, area: Rect, client: &ClientRecord) {
    let [info_area, gauge_area, actions_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(area);

    let label = |text: &'static str| Span::styled(format!("{text:<20}"), styles::muted_style());
    let lines = vec![
        Line::from(vec![label("Email"), Span::raw(client.email.clone())]),
        Line::from(vec![label("Phone"), Span::raw(client.phone.clone())]),
        Line::from(vec![
            label("Status"),
            Span::styled(client.status.label(), styles::status_badge_style(client.status)),
        ]),
        Line::from(vec![
            label("Coverage gap"),
            Span::styled(
                format_currency(client.coverage_gap),
                styles::coverage_gap_style(client.coverage_gap),
            ),
        ]),
        Line::from(vec![label("Last contact"), Span::raw(client.last_contact.clone())]),
        Line::from(vec![label("Report"), Span::raw(client.report_status.label())]),
        Line::from(vec![
            label("Application"),
            Span::raw(client.application_status.label()),
        ]),
        Line::from(vec![
            label("Assessment link"),
            Span::styled(assessment_link(&client.id), styles::muted_style()),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(client.name.clone())
                .borders(Borders::ALL)
                .border_style(styles::active_panel_border_style()),
        ),
        info_area,
    );

    let band = client.score_band();
    frame.render_widget(
        Gauge::default()
            .block(
                Block::default()
                    .title(format!("Protection Score · {}", band.label()))
                    .borders(Borders::ALL),
            )
            .gauge_style(styles::score_band_style(band))
            .percent(u16::from(client.protection_score.min(100))),
        gauge_area,
    );

    let mut actions = vec![
        action_line("s", "Send assessment email", true),
        action_line("y", "Copy assessment link", true),
        action_line("o", "Open assessment link in browser", true),
        action_line("t", "Start assessment with client", true),
        action_line("r", "View report", client.can_view_report()),
        action_line("f", "Send follow-up reminder", true),
        action_line("e", "Advance status", true),
    ];
    actions.push(Line::from(Span::styled(
        "Esc: back to clients",
        styles::muted_style(),
    )));
    frame.render_widget(
        Paragraph::new(actions).block(Block::default().title("Actions").borders(Borders::ALL)),
        actions_area,
    );
}

fn action_line(key: &'static str, label: &'static str, enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default()
    } else {
        styles::muted_style().add_modifier(Modifier::CROSSED_OUT)
    };
    Line::from(vec![
        Span::styled(format!("[{key}] "), styles::input_prompt_style()),
        Span::styled(label, style),
    ])
}

// =============================================================================
// Assessment
// =============================================================================

fn render_assessment(frame: &mut Frame<'_>, area: Rect, form: &AssessmentForm) {
    let [progress_area, body_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .areas(area);

    frame.render_widget(
        Gauge::default()
            .block(
                Block::default()
                    .title("Life Insurance Needs Assessment")
                    .borders(Borders::ALL),
            )
            .gauge_style(styles::input_prompt_style())
            .percent(form.progress_percent())
            .label(format!("Step {} of {TOTAL_STEPS}", form.step())),
        progress_area,
    );

    match form.phase() {
        AssessmentPhase::Processing(sequence) => {
            let completed = sequence.completed_phases();
            let lines: Vec<Line<'static>> = sequence
                .phases()
                .iter()
                .enumerate()
                .map(|(index, label)| {
                    let (marker, style) = if index < completed {
                        ("✓", styles::score_band_style(ScoreBand::High))
                    } else if Some(index) == sequence.current_phase() {
                        ("…", styles::notice_style())
                    } else {
                        (" ", styles::muted_style())
                    };
                    Line::from(Span::styled(format!(" {marker} {label}"), style))
                })
                .collect();
            frame.render_widget(
                Paragraph::new(lines).block(
                    Block::default()
                        .title("Processing your assessment")
                        .borders(Borders::ALL),
                ),
                body_area,
            );
        }
        AssessmentPhase::Finished => {
            render_message(frame, body_area, "Assessment", "Assessment complete.");
        }
        AssessmentPhase::Editing if form.questions().is_empty() => {
            let mut lines: Vec<Line<'static>> = form
                .profile()
                .rows()
                .into_iter()
                .map(|(label, value)| {
                    Line::from(vec![
                        Span::styled(format!("{label:<26}"), styles::muted_style()),
                        Span::raw(value),
                    ])
                })
                .collect();
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Enter: submit assessment | b: back | Esc: cancel",
                styles::muted_style(),
            )));
            frame.render_widget(
                Paragraph::new(lines).block(
                    Block::default()
                        .title("Financial Review")
                        .borders(Borders::ALL)
                        .border_style(styles::active_panel_border_style()),
                ),
                body_area,
            );
        }
        AssessmentPhase::Editing => {
            let mut lines = Vec::new();
            for (index, question) in form.questions().iter().enumerate() {
                let focused = index == form.focused_question();
                let prompt_style = if focused {
                    styles::nav_item_style(true)
                } else {
                    styles::header_style()
                };
                lines.push(Line::from(Span::styled(
                    format!("{}. {}", index + 1, question.prompt),
                    prompt_style,
                )));
                for (option_index, option) in question.options.iter().enumerate() {
                    let chosen = form.answer(index) == Some(option_index);
                    let marker = if chosen { "(•)" } else { "( )" };
                    lines.push(Line::from(format!(
                        "   {marker} {} {option}",
                        option_index + 1
                    )));
                }
                lines.push(Line::default());
            }
            let title = if form.step() == 1 {
                "Insurance Preferences"
            } else {
                "Financial Goals"
            };
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .block(
                        Block::default()
                            .title(title)
                            .borders(Borders::ALL)
                            .border_style(styles::active_panel_border_style()),
                    ),
                body_area,
            );
        }
    }
}

// =============================================================================
// Report
// =============================================================================

fn render_report(frame: &mut Frame<'_>, area: Rect, report: &NeedsReport) {
    let [summary_area, charts_area, recommendation_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(5),
        ])
        .areas(area);

    let [score_area, figures_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .areas(summary_area);

    let band = ScoreBand::for_score(report.protection_score);
    frame.render_widget(
        Gauge::default()
            .block(
                Block::default()
                    .title(format!("{} · Protection Score", report.client_name))
                    .borders(Borders::ALL),
            )
            .gauge_style(styles::score_band_style(band))
            .percent(u16::from(report.protection_score.min(100))),
        score_area,
    );

    let figures = vec![
        Line::from(format!(
            "Current coverage      {}",
            format_currency(report.current_coverage)
        )),
        Line::from(Span::styled(
            format!("Coverage gap          {}", format_currency(report.coverage_gap)),
            styles::coverage_gap_style(report.coverage_gap),
        )),
        Line::from(format!(
            "Recommended coverage  {}",
            format_currency(report.recommended_coverage)
        )),
    ];
    frame.render_widget(
        Paragraph::new(figures).block(Block::default().title("Summary").borders(Borders::ALL)),
        figures_area,
    );

    let [breakdown_area, timeline_area, portfolio_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .areas(charts_area);

    let breakdown: Vec<(&str, u64)> = report
        .coverage_breakdown
        .iter()
        .map(|slice| (short_label(slice.label), thousands(slice.amount)))
        .collect();
    frame.render_widget(
        BarChart::default()
            .block(
                Block::default()
                    .title("Coverage ($k)")
                    .borders(Borders::ALL),
            )
            .data(breakdown.as_slice())
            .bar_width(8)
            .bar_gap(2),
        breakdown_area,
    );

    let timeline: Vec<(&str, u64)> = report
        .timeline
        .iter()
        .map(|point| (point.year, thousands(point.need)))
        .collect();
    frame.render_widget(
        BarChart::default()
            .block(
                Block::default()
                    .title("Coverage need by year ($k)")
                    .borders(Borders::ALL),
            )
            .data(timeline.as_slice())
            .bar_width(5)
            .bar_gap(1),
        timeline_area,
    );

    let portfolio: Vec<Line<'static>> = report
        .portfolio
        .iter()
        .map(|slice| {
            let filled = usize::from(slice.percentage) / 5;
            Line::from(vec![
                Span::styled(format!("{:<15}", slice.category), styles::muted_style()),
                Span::raw(format!("{:<21}", "█".repeat(filled))),
                Span::raw(format!("{:>3}%", slice.percentage)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(portfolio).block(
            Block::default()
                .title("Portfolio")
                .borders(Borders::ALL),
        ),
        portfolio_area,
    );

    let recommendation = &report.recommendation;
    let lines = vec![
        Line::from(Span::styled(recommendation.name, styles::header_style())),
        Line::from(format!(
            "{} coverage over {} years, about ${}/month",
            format_currency(recommendation.coverage_amount),
            recommendation.term_years,
            recommendation.monthly_premium
        )),
        Line::from(Span::styled(recommendation.rationale, styles::muted_style())),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title("Recommendation · Esc: back")
                .borders(Borders::ALL),
        ),
        recommendation_area,
    );
}

fn short_label(label: &str) -> &str {
    label.split_whitespace().next().unwrap_or(label)
}

fn thousands(amount: u64) -> u64 {
    amount / 1_000
}

// =============================================================================
// Communication
// =============================================================================

fn render_communication(
    frame: &mut Frame<'_>,
    area: Rect,
    composer: &ComposerState,
    editing_subject: bool,
) {
    let [tabs_area, body_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .areas(area);

    let selected = match composer.tab() {
        ComposerTab::Templates => 0,
        ComposerTab::Compose => 1,
    };
    frame.render_widget(
        Tabs::new(vec!["Templates", "Compose"])
            .select(selected)
            .highlight_style(styles::nav_item_style(true))
            .block(
                Block::default()
                    .title("Client Communication")
                    .borders(Borders::ALL),
            ),
        tabs_area,
    );

    match composer.tab() {
        ComposerTab::Templates => {
            let items: Vec<ListItem<'static>> = composer
                .templates()
                .iter()
                .map(|template| {
                    ListItem::new(vec![
                        Line::from(Span::styled(template.title, styles::header_style())),
                        Line::from(Span::styled(
                            format!(
                                "Used {} times · last used {}",
                                template.usage, template.last_used
                            ),
                            styles::muted_style(),
                        )),
                        Line::from(EmailDraft::preview(
                            &template.body.replace('\n', " "),
                            TEMPLATE_PREVIEW_CHARS,
                        )),
                        Line::default(),
                    ])
                })
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .title("Templates · Enter: use")
                        .borders(Borders::ALL)
                        .border_style(styles::active_panel_border_style()),
                )
                .highlight_style(styles::selected_row_style());
            let mut list_state = ListState::default();
            list_state.select(Some(composer.highlighted_template()));
            frame.render_stateful_widget(list, body_area, &mut list_state);
        }
        ComposerTab::Compose => {
            let draft = composer.draft();
            let [to_area, subject_area, message_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Min(3),
                ])
                .areas(body_area);

            let recipient = draft.recipient.as_deref().unwrap_or("(no client selected)");
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled("To: ", styles::muted_style()),
                    Span::raw(recipient.to_owned()),
                ])),
                to_area,
            );
            render_text_field(
                frame,
                subject_area,
                TextField {
                    title: "Subject",
                    input: composer.subject_input(),
                    focused: editing_subject,
                    placeholder: "Press 's' to edit the subject",
                    display: None,
                },
            );
            let body = if draft.body.is_empty() {
                "Pick a template to start composing.".to_owned()
            } else {
                draft.body.clone()
            };
            frame.render_widget(
                Paragraph::new(body).wrap(Wrap { trim: false }).block(
                    Block::default()
                        .title("Message · Ctrl-S: send")
                        .borders(Borders::ALL)
                        .border_style(styles::active_panel_border_style()),
                ),
                message_area,
            );
        }
    }
}

// =============================================================================
// Assistant chat
// =============================================================================

fn render_chat(
    frame: &mut Frame<'_>,
    area: Rect,
    chat: &ChatConversation,
    active_pane: ActivePane,
) {
    let height = if chat.is_minimized() { 3 } else { CHAT_HEIGHT };
    let width = CHAT_WIDTH.min(area.width);
    let height = height.min(area.height);
    let popup = Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    );
    frame.render_widget(Clear, popup);

    let focused = active_pane == ActivePane::Chat;
    let border_style = if focused {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };
    let title = if chat.is_typing() {
        "Evie · typing..."
    } else {
        "Evie · AI Assistant"
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if chat.is_minimized() {
        frame.render_widget(
            Paragraph::new(Span::styled("Press '?' to expand", styles::muted_style()))
                .block(block),
            popup,
        );
        return;
    }

    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [messages_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(inner);

    let mut lines = chat_lines(chat);
    if chat.messages().len() == 1 {
        lines.push(Line::from(Span::styled(
            "Quick actions (Tab with empty input):",
            styles::muted_style(),
        )));
        for prompt in QUICK_ACTIONS {
            lines.push(Line::from(Span::styled(
                format!("  · {prompt}"),
                styles::muted_style(),
            )));
        }
    }

    // Keep the newest messages in view.
    let visible = usize::from(messages_area.height);
    let scroll = lines.len().saturating_sub(visible);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0)),
        messages_area,
    );

    render_text_field(
        frame,
        input_area,
        TextField {
            title: "",
            input: chat.input(),
            focused,
            placeholder: "Ask Evie anything...",
            display: None,
        },
    );
}

fn chat_lines(chat: &ChatConversation) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in chat.messages() {
        let (author, style) = match message.author {
            ChatAuthor::Agent => ("You", styles::chat_agent_style()),
            ChatAuthor::Assistant => ("Evie", styles::chat_assistant_style()),
        };
        lines.push(Line::from(vec![
            Span::styled(
                message.sent_at.format("%H:%M ").to_string(),
                styles::muted_style(),
            ),
            Span::styled(author, style),
        ]));
        for text_line in message.text.lines() {
            lines.push(Line::from(text_line.to_owned()));
        }
    }
    if chat.is_typing() {
        lines.push(Line::from(Span::styled("Evie is typing...", styles::muted_style())));
    }
    lines
}

// =============================================================================
// Status line and helpers
// =============================================================================

fn status_line(state: &ShellState) -> Line<'static> {
    let agent = state
        .session()
        .map(|session| session.email.clone())
        .unwrap_or_else(|| "signed out".to_owned());
    let prefix = format!("{} | {agent} | ", state.screen().title());

    if let Some(notice) = state.notice() {
        return Line::from(vec![
            Span::raw(prefix),
            Span::styled(notice.to_owned(), styles::notice_style()),
        ]);
    }

    let hint = match (state.active_pane(), state.screen()) {
        (ActivePane::Search, _) => "type to filter | Enter/Esc: done",
        (ActivePane::ComposeSubject, _) => "type the subject | Enter/Esc: done",
        (ActivePane::Chat, _) => "Enter: send | Tab: quick action | Esc: minimize | Ctrl-X: close",
        (ActivePane::Main, Screen::Login) => "Ctrl-C: quit",
        (ActivePane::Main, Screen::Dashboard) => {
            "j/k: move | Tab: cards/actions | Enter: open | D/L/M/H: go to | ?: Evie | q: quit"
        }
        (ActivePane::Main, Screen::Help) => {
            "Tab/h/l: topic | j/k: question | Enter: expand | Esc: dashboard | q: quit"
        }
        (ActivePane::Main, Screen::Clients) => {
            "j/k: move | Enter: open | /: search | s/S: sort | 1-6, l/m/h: filter | n/p: page | ?: Evie | q: quit"
        }
        (ActivePane::Main, Screen::ClientDetail { .. }) => "Esc: back | ?: Evie | Ctrl-L: sign out",
        (ActivePane::Main, Screen::Assessment) => {
            "j/k: question | Space/1-3: answer | n: next | b: back | Esc: cancel"
        }
        (ActivePane::Main, Screen::Report) => "Esc: back | ?: Evie | q: quit",
        (ActivePane::Main, Screen::Communication) => {
            "Tab: switch | j/k: template | Enter: use | s: subject | Ctrl-S: send | Esc: back"
        }
    };

    Line::from(vec![
        Span::raw(prefix),
        Span::styled(hint, styles::muted_style()),
    ])
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{
        domain::{login::AgentSession, shell_state::LayoutPolicy},
        test_support::sample_clients,
    };

    fn state() -> ShellState {
        ShellState::new(
            sample_clients(),
            Duration::ZERO,
            LayoutPolicy { compact_width: 120 },
        )
    }

    fn signed_in() -> ShellState {
        let mut state = state();
        state.sign_in(AgentSession {
            email: "agent@everly.com".to_owned(),
            remember_me: false,
        });
        state.set_screen(Screen::Clients);
        state
    }

    fn line_to_string(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn draw(state: &ShellState, width: u16, height: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal
            .draw(|frame| render(frame, state))
            .expect("frame must render");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn status_line_prefers_notice() {
        let mut state = signed_in();
        state.set_notice("Email sent to client");

        let line = line_to_string(&status_line(&state));

        assert!(line.contains("agent@everly.com"));
        assert!(line.ends_with("Email sent to client"));
    }

    #[test]
    fn status_line_shows_search_hint_while_searching() {
        let mut state = signed_in();
        state.set_active_pane(ActivePane::Search);

        let line = line_to_string(&status_line(&state));

        assert!(line.contains("type to filter"));
    }

    #[test]
    fn client_table_renders_first_page() {
        let state = signed_in();

        let screen = draw(&state, 140, 30);

        assert!(screen.contains("David Martinez"));
        assert!(screen.contains("Showing 1-7 of 7 clients"));
        assert!(screen.contains("Communication"));
    }

    #[test]
    fn narrow_terminal_collapses_sidebar() {
        let state = signed_in();

        let screen = draw(&state, 100, 30);

        assert!(!screen.contains("Communication"));
    }

    #[test]
    fn dashboard_counts_clients_per_card() {
        let mut state = signed_in();
        state.set_screen(Screen::Dashboard);

        let screen = draw(&state, 160, 30);

        assert!(screen.contains("Total Clients"));
        assert!(screen.contains("Follow-ups Due"));
        assert!(screen.contains("Recent Activity"));
        assert!(screen.contains("Review Sales Scripts"));
    }

    #[test]
    fn help_faq_shows_only_the_open_answer() {
        let mut state = signed_in();
        state.set_screen(Screen::Help);
        state.help_mut().next_section();
        state.help_mut().toggle_faq();

        let screen = draw(&state, 140, 30);

        assert!(screen.contains("How do I send an assessment to a client?"));
        assert!(screen.contains("emails them a form"));
        assert!(!screen.contains("Lower scores indicate"));
    }

    #[test]
    fn login_screen_masks_password() {
        let mut state = state();
        state.login_mut().focus_next();
        if let Some(input) = state.login_mut().focused_input_mut() {
            input.set_text("hunter2");
        }

        let screen = draw(&state, 100, 30);

        assert!(screen.contains("Agent Sign In"));
        assert!(!screen.contains("hunter2"));
    }

    #[test]
    fn report_screen_renders_recommendation() {
        let mut state = signed_in();
        state.show_report(NeedsReport::sample("2", "Sarah Johnson"));

        let screen = draw(&state, 140, 40);

        assert!(screen.contains("20-Year Term Life Insurance"));
    }

    #[test]
    fn short_label_keeps_first_word() {
        assert_eq!(short_label("Recommended Coverage"), "Recommended");
        assert_eq!(thousands(700_000), 700);
    }
}
