//! Non-interactive commands that print to stdout and exit.

use std::fmt::Write as _;

use crate::domain::{
    chat_responder,
    client::{format_currency, ClientRecord, ClientStatus, ScoreBand},
    client_query::{query_clients, ClientPage, QueryState, SortDirection, SortField},
    text_width::fit_to_width,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientsRequest {
    pub search: Option<String>,
    pub statuses: Vec<ClientStatus>,
    pub scores: Vec<ScoreBand>,
    pub sort: SortField,
    pub descending: bool,
    pub page: usize,
}

impl Default for ClientsRequest {
    fn default() -> Self {
        Self {
            search: None,
            statuses: Vec::new(),
            scores: Vec::new(),
            sort: SortField::Name,
            descending: false,
            page: 1,
        }
    }
}

impl ClientsRequest {
    pub fn to_query(&self) -> QueryState {
        let mut query = QueryState::default();
        if let Some(search) = &self.search {
            query.set_search_term(search.as_str());
        }
        for status in &self.statuses {
            if !query.status_filters().contains(status) {
                query.toggle_status_filter(*status);
            }
        }
        for band in &self.scores {
            if !query.score_filters().contains(band) {
                query.toggle_score_filter(*band);
            }
        }
        let direction = if self.descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        query.set_sort(self.sort, direction);
        query.set_page(self.page);
        query
    }
}

pub fn run_clients(clients: &[ClientRecord], request: &ClientsRequest) -> ClientPage {
    let page = query_clients(clients, &request.to_query());
    tracing::debug!(
        total = page.total_count,
        page = page.page,
        rows = page.clients.len(),
        "client query evaluated"
    );
    page
}

const COLUMNS: [(&str, usize); 5] = [
    ("CLIENT", 18),
    ("EMAIL", 26),
    ("SCORE", 6),
    ("GAP", 10),
    ("STATUS", 20),
];

pub fn render_client_page(page: &ClientPage) -> String {
    let mut out = String::new();

    let header: Vec<String> = COLUMNS
        .iter()
        .map(|(title, width)| pad(title, *width))
        .collect();
    let _ = writeln!(out, "{}LAST CONTACT", header.concat());

    for client in &page.clients {
        let cells = [
            client.name.clone(),
            client.email.clone(),
            format!("{}%", client.protection_score),
            format_currency(client.coverage_gap),
            client.status.label().to_owned(),
        ];
        let row: String = cells
            .iter()
            .zip(COLUMNS)
            .map(|(cell, (_, width))| pad(cell, width))
            .collect();
        let _ = writeln!(out, "{row}{}", client.last_contact);
    }

    let _ = write!(out, "{}", page.summary());
    if page.total_pages > 1 {
        let _ = write!(out, " (page {} of {})", page.page, page.total_pages);
    }
    out.push('\n');
    out
}

pub fn ask(text: &str) -> String {
    let (topic, reply) = chat_responder::respond_to(text);
    tracing::debug!(topic = topic.as_label(), "assistant answered");
    reply
}

/// One table column: the cell plus a separating space.
fn pad(text: &str, width: usize) -> String {
    let mut cell = fit_to_width(text, width.saturating_sub(1));
    cell.push(' ');
    cell
}
