use super::{
    client::{ClientRecord, ClientStatus},
    client_query::{query_clients, ClientPage, QueryState},
    text_input_state::TextInputState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientListUiState {
    Ready,
    /// Filters exclude every client on this page.
    NoMatches,
}

/// Client table view: the session's directory, query parameters, and the
/// derived page with a row selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientListState {
    clients: Vec<ClientRecord>,
    query: QueryState,
    page: ClientPage,
    selected_index: Option<usize>,
    search_input: TextInputState,
}

impl ClientListState {
    pub fn new(clients: Vec<ClientRecord>) -> Self {
        let query = QueryState::default();
        let page = query_clients(&clients, &query);
        let selected_index = resolve_selection_index(&page.clients, None);

        Self {
            clients,
            query,
            page,
            selected_index,
            search_input: TextInputState::with_max_length(120),
        }
    }

    pub fn ui_state(&self) -> ClientListUiState {
        if self.page.clients.is_empty() {
            ClientListUiState::NoMatches
        } else {
            ClientListUiState::Ready
        }
    }

    pub fn all_clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn page(&self) -> &ClientPage {
        &self.page
    }

    pub fn search_input(&self) -> &TextInputState {
        &self.search_input
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_client(&self) -> Option<&ClientRecord> {
        self.selected_index
            .and_then(|index| self.page.clients.get(index))
    }

    pub fn client(&self, client_id: &str) -> Option<&ClientRecord> {
        self.clients.iter().find(|client| client.id == client_id)
    }

    /// Applies a query change and re-derives the page.
    pub fn update_query(&mut self, change: impl FnOnce(&mut QueryState)) {
        change(&mut self.query);
        self.refresh();
    }

    /// Starts over from a fresh query narrowed to `statuses`.
    pub fn apply_status_preset(&mut self, statuses: &[ClientStatus]) {
        self.search_input.clear();
        self.query = QueryState::default();
        for status in statuses {
            self.query.toggle_status_filter(*status);
        }
        self.refresh();
    }

    pub fn next_page(&mut self) {
        let total_pages = self.page.total_pages;
        self.update_query(|query| query.next_page(total_pages));
    }

    pub fn previous_page(&mut self) {
        self.update_query(QueryState::previous_page);
    }

    /// Edits the search box and filters live as the agent types.
    pub fn edit_search(&mut self, edit: impl FnOnce(&mut TextInputState)) {
        edit(&mut self.search_input);
        let term = self.search_input.text().to_owned();
        self.update_query(|query| query.set_search_term(term));
    }

    /// Session-local status change; nothing is persisted.
    pub fn set_status(&mut self, client_id: &str, status: ClientStatus) -> bool {
        let Some(client) = self.clients.iter_mut().find(|c| c.id == client_id) else {
            return false;
        };
        client.status = status;
        self.refresh();
        true
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.page.clients.len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }

    fn refresh(&mut self) {
        let previous_id = self.selected_client().map(|client| client.id.clone());
        self.page = query_clients(&self.clients, &self.query);
        self.selected_index = resolve_selection_index(&self.page.clients, previous_id.as_deref());
    }
}

fn resolve_selection_index(clients: &[ClientRecord], previous_id: Option<&str>) -> Option<usize> {
    if clients.is_empty() {
        return None;
    }

    previous_id
        .and_then(|id| clients.iter().position(|client| client.id == id))
        .or(Some(0))
}
