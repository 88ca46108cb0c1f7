//! Filter, sort and paginate pipeline over the in-memory client directory.

use std::{cmp::Ordering, collections::BTreeSet, fmt, str::FromStr};

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use super::client::{ClientRecord, ClientStatus, ParseEnumError, ScoreBand};

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    ProtectionScore,
    CoverageGap,
    LastContact,
    Status,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        Self::Name,
        Self::ProtectionScore,
        Self::CoverageGap,
        Self::LastContact,
        Self::Status,
    ];

    pub fn as_slug(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::ProtectionScore => "protection-score",
            Self::CoverageGap => "coverage-gap",
            Self::LastContact => "last-contact",
            Self::Status => "status",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Client",
            Self::ProtectionScore => "Protection Score",
            Self::CoverageGap => "Coverage Gap",
            Self::LastContact => "Last Contact",
            Self::Status => "Status",
        }
    }

    pub fn cycled(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|field| *field == self)
            .unwrap_or_default();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_slug())
    }
}

impl FromStr for SortField {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_slug() == value)
            .ok_or_else(|| {
                ParseEnumError::new("sort field", value, Self::ALL.iter().map(|f| f.as_slug()))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// View-owned query parameters for the client list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    search_term: String,
    /// Empty means every status passes.
    status_filters: BTreeSet<ClientStatus>,
    /// Empty means every band passes.
    score_filters: BTreeSet<ScoreBand>,
    sort_field: SortField,
    sort_direction: SortDirection,
    current_page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            status_filters: BTreeSet::new(),
            score_filters: BTreeSet::new(),
            sort_field: SortField::Name,
            sort_direction: SortDirection::Asc,
            current_page: 1,
        }
    }
}

impl QueryState {
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filters(&self) -> &BTreeSet<ClientStatus> {
        &self.status_filters
    }

    pub fn score_filters(&self) -> &BTreeSet<ScoreBand> {
        &self.score_filters
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Same field flips the direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.reversed();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    pub fn set_sort(&mut self, field: SortField, direction: SortDirection) {
        self.sort_field = field;
        self.sort_direction = direction;
    }

    pub fn toggle_status_filter(&mut self, status: ClientStatus) {
        if !self.status_filters.remove(&status) {
            self.status_filters.insert(status);
        }
        self.current_page = 1;
    }

    pub fn select_all_statuses(&mut self) {
        self.status_filters = ClientStatus::ALL.into_iter().collect();
        self.current_page = 1;
    }

    pub fn clear_statuses(&mut self) {
        self.status_filters.clear();
        self.current_page = 1;
    }

    pub fn toggle_score_filter(&mut self, band: ScoreBand) {
        if !self.score_filters.remove(&band) {
            self.score_filters.insert(band);
        }
        self.current_page = 1;
    }

    pub fn select_all_scores(&mut self) {
        self.score_filters = ScoreBand::ALL.into_iter().collect();
        self.current_page = 1;
    }

    pub fn clear_scores(&mut self) {
        self.score_filters.clear();
        self.current_page = 1;
    }

    /// Sets the page as given; out-of-range pages are not an error.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.current_page < total_pages {
            self.current_page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    fn matches(&self, client: &ClientRecord, needle: &str) -> bool {
        let matches_search = needle.is_empty()
            || client.name.to_lowercase().contains(needle)
            || client.email.to_lowercase().contains(needle);

        let matches_status =
            self.status_filters.is_empty() || self.status_filters.contains(&client.status);

        let matches_score = self.score_filters.is_empty()
            || self
                .score_filters
                .iter()
                .any(|band| band.contains(client.protection_score));

        matches_search && matches_status && matches_score
    }

    fn compare(&self, a: &ClientRecord, b: &ClientRecord) -> Ordering {
        let ordering = match self.sort_field {
            SortField::Name => locale_compare(&a.name, &b.name),
            SortField::LastContact => locale_compare(&a.last_contact, &b.last_contact),
            SortField::Status => locale_compare(a.status.as_slug(), b.status.as_slug()),
            SortField::ProtectionScore => a.protection_score.cmp(&b.protection_score),
            SortField::CoverageGap => a.coverage_gap.cmp(&b.coverage_gap),
        };
        self.sort_direction.apply(ordering)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPage {
    pub clients: Vec<ClientRecord>,
    /// Count after filtering, before pagination.
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl ClientPage {
    /// One-based inclusive bounds of the rows on this page, `None` when empty.
    pub fn showing_range(&self) -> Option<(usize, usize)> {
        if self.clients.is_empty() {
            return None;
        }
        let start = self.page.saturating_sub(1) * PAGE_SIZE + 1;
        Some((start, start + self.clients.len() - 1))
    }

    pub fn summary(&self) -> String {
        match self.showing_range() {
            Some((start, end)) => format!("Showing {start}-{end} of {} clients", self.total_count),
            None => format!("Showing 0 of {} clients", self.total_count),
        }
    }
}

/// Derives one display page from the full client set. Pure and total.
pub fn query_clients(clients: &[ClientRecord], state: &QueryState) -> ClientPage {
    let needle = state.search_term.to_lowercase();

    let mut filtered: Vec<&ClientRecord> = clients
        .iter()
        .filter(|client| state.matches(client, &needle))
        .collect();

    // `sort_by` is stable: equal keys keep their input order.
    filtered.sort_by(|a, b| state.compare(a, b));

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(PAGE_SIZE);
    let page = state.current_page.max(1);
    let start = (page - 1).saturating_mul(PAGE_SIZE);

    let clients = filtered
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    ClientPage {
        clients,
        total_count,
        total_pages,
        page,
    }
}

/// Collator-style comparison in three levels: base letters ignoring accents
/// and case, then accents (unaccented first), then case (lowercase first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_order(a, b))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.nfd()
        .zip(b.nfd())
        .find(|(left, right)| left != right)
        .map(|(left, right)| match (left.is_lowercase(), right.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => left.cmp(&right),
        })
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{ApplicationStatus, ReportStatus};

    fn client(id: &str, name: &str, score: u8) -> ClientRecord {
        ClientRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            email: format!("{}@email.com", name.to_lowercase().replace(' ', ".")),
            phone: "+1 (555) 000-0000".to_owned(),
            protection_score: score,
            coverage_gap: u64::from(100 - score) * 10_000,
            status: ClientStatus::NewLead,
            last_contact: "Never contacted".to_owned(),
            report_status: ReportStatus::NotStarted,
            application_status: ApplicationStatus::NotStarted,
        }
    }

    fn with_status(mut record: ClientRecord, status: ClientStatus) -> ClientRecord {
        record.status = status;
        record
    }

    fn names(page: &ClientPage) -> Vec<&str> {
        page.clients.iter().map(|c| c.name.as_str()).collect()
    }

    fn many(count: usize) -> Vec<ClientRecord> {
        (0..count)
            .map(|i| client(&i.to_string(), &format!("Client {i:02}"), 50))
            .collect()
    }

    #[test]
    fn empty_filters_keep_every_record() {
        let clients = vec![
            client("1", "John Smith", 45),
            client("2", "Sarah Johnson", 78),
            client("3", "Mike Chen", 92),
        ];

        let page = query_clients(&clients, &QueryState::default());

        assert_eq!(page.total_count, 3);
        assert_eq!(page.clients.len(), 3);
        assert_eq!(names(&page), vec!["John Smith", "Mike Chen", "Sarah Johnson"]);
    }

    #[test]
    fn search_matches_name_or_email_case_insensitively() {
        let mut john = client("1", "Johnny Appleseed", 45);
        john.email = "apple@email.com".to_owned();
        let mut by_email = client("2", "Sam Carter", 60);
        by_email.email = "john.smith@email.com".to_owned();
        let clients = vec![john, by_email, client("3", "Mike Chen", 92)];

        let mut state = QueryState::default();
        state.set_search_term("JOHN");
        let page = query_clients(&clients, &state);

        assert_eq!(names(&page), vec!["Johnny Appleseed", "Sam Carter"]);
    }

    #[test]
    fn search_is_plain_substring_not_tokenized() {
        let clients = vec![client("1", "John Smith", 45)];
        let mut state = QueryState::default();

        state.set_search_term("n sm");
        assert_eq!(query_clients(&clients, &state).total_count, 1);

        state.set_search_term("smith john");
        assert_eq!(query_clients(&clients, &state).total_count, 0);
    }

    #[test]
    fn status_filter_keeps_members_only() {
        let clients = vec![
            with_status(client("1", "A", 10), ClientStatus::NewLead),
            with_status(client("2", "B", 10), ClientStatus::Protected),
            with_status(client("3", "C", 10), ClientStatus::ReportReady),
        ];
        let mut state = QueryState::default();
        state.toggle_status_filter(ClientStatus::Protected);
        state.toggle_status_filter(ClientStatus::NewLead);

        let page = query_clients(&clients, &state);

        assert_eq!(names(&page), vec!["A", "B"]);
    }

    #[test]
    fn toggling_status_filter_twice_restores_match_all() {
        let clients = vec![client("1", "A", 10), client("2", "B", 90)];
        let mut state = QueryState::default();
        state.toggle_status_filter(ClientStatus::Protected);
        state.toggle_status_filter(ClientStatus::Protected);

        assert!(state.status_filters().is_empty());
        assert_eq!(query_clients(&clients, &state).total_count, 2);
    }

    #[test]
    fn score_filters_match_any_selected_band() {
        let clients = vec![
            client("1", "Low", 49),
            client("2", "Mid", 50),
            client("3", "Mid High", 79),
            client("4", "High", 80),
        ];
        let mut state = QueryState::default();
        state.toggle_score_filter(ScoreBand::Low);
        state.toggle_score_filter(ScoreBand::High);

        let page = query_clients(&clients, &state);

        assert_eq!(names(&page), vec!["High", "Low"]);
    }

    #[test]
    fn all_predicates_are_combined() {
        let clients = vec![
            with_status(client("1", "John Low", 20), ClientStatus::NewLead),
            with_status(client("2", "John High", 90), ClientStatus::NewLead),
            with_status(client("3", "Jane Low", 20), ClientStatus::NewLead),
            with_status(client("4", "John Other", 20), ClientStatus::Protected),
        ];
        let mut state = QueryState::default();
        state.set_search_term("john");
        state.toggle_status_filter(ClientStatus::NewLead);
        state.toggle_score_filter(ScoreBand::Low);

        let page = query_clients(&clients, &state);

        assert_eq!(names(&page), vec!["John Low"]);
    }

    #[test]
    fn sort_is_stable_for_equal_scores() {
        let clients = vec![
            client("1", "Zed", 60),
            client("2", "Amy", 30),
            client("3", "Bob", 60),
            client("4", "Cal", 60),
        ];
        let mut state = QueryState::default();
        state.set_sort(SortField::ProtectionScore, SortDirection::Asc);
        assert_eq!(
            names(&query_clients(&clients, &state)),
            vec!["Amy", "Zed", "Bob", "Cal"]
        );

        state.set_sort(SortField::ProtectionScore, SortDirection::Desc);
        assert_eq!(
            names(&query_clients(&clients, &state)),
            vec!["Zed", "Bob", "Cal", "Amy"]
        );
    }

    #[test]
    fn name_sort_uses_case_insensitive_order_and_reverses() {
        let clients = vec![
            client("1", "Bob", 10),
            client("2", "alice", 10),
            client("3", "Charlie", 10),
        ];
        let mut state = QueryState::default();

        let ascending = query_clients(&clients, &state);
        assert_eq!(names(&ascending), vec!["alice", "Bob", "Charlie"]);

        state.toggle_sort(SortField::Name);
        let descending = query_clients(&clients, &state);
        let mut reversed = names(&ascending);
        reversed.reverse();
        assert_eq!(names(&descending), reversed);
    }

    #[test]
    fn numeric_sort_compares_values_not_text() {
        let mut small = client("1", "Small", 10);
        small.coverage_gap = 9_000;
        let mut large = client("2", "Large", 10);
        large.coverage_gap = 100_000;
        let mut state = QueryState::default();
        state.set_sort(SortField::CoverageGap, SortDirection::Asc);

        let page = query_clients(&[large, small], &state);

        assert_eq!(names(&page), vec!["Small", "Large"]);
    }

    #[test]
    fn status_sort_orders_by_slug() {
        let clients = vec![
            with_status(client("1", "P", 10), ClientStatus::Protected),
            with_status(client("2", "A", 10), ClientStatus::AssessmentSent),
            with_status(client("3", "F", 10), ClientStatus::FollowUpNeeded),
        ];
        let mut state = QueryState::default();
        state.set_sort(SortField::Status, SortDirection::Asc);

        assert_eq!(names(&query_clients(&clients, &state)), vec!["A", "F", "P"]);
    }

    #[test]
    fn toggle_sort_flips_same_field_and_resets_for_new_field() {
        let mut state = QueryState::default();

        state.toggle_sort(SortField::Name);
        assert_eq!(state.sort_direction(), SortDirection::Desc);

        state.toggle_sort(SortField::CoverageGap);
        assert_eq!(state.sort_field(), SortField::CoverageGap);
        assert_eq!(state.sort_direction(), SortDirection::Asc);
    }

    #[test]
    fn pagination_splits_into_pages_of_ten() {
        let clients = many(23);
        let mut state = QueryState::default();

        let first = query_clients(&clients, &state);
        assert_eq!(first.clients.len(), 10);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total_count, 23);

        state.set_page(3);
        let last = query_clients(&clients, &state);
        assert_eq!(last.clients.len(), 3);
        assert_eq!(last.showing_range(), Some((21, 23)));

        state.set_page(4);
        let beyond = query_clients(&clients, &state);
        assert!(beyond.clients.is_empty());
        assert_eq!(beyond.total_count, 23);
        assert_eq!(beyond.summary(), "Showing 0 of 23 clients");
    }

    #[test]
    fn filter_change_resets_page() {
        let mut state = QueryState::default();
        state.set_page(3);

        state.toggle_score_filter(ScoreBand::High);

        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn page_navigation_clamps_to_bounds() {
        let mut state = QueryState::default();

        state.previous_page();
        assert_eq!(state.current_page(), 1);

        state.next_page(2);
        state.next_page(2);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn page_zero_summary_counts_from_the_first_row() {
        let page = ClientPage {
            clients: many(3),
            total_count: 3,
            total_pages: 1,
            page: 0,
        };

        assert_eq!(page.showing_range(), Some((1, 3)));
        assert_eq!(page.summary(), "Showing 1-3 of 3 clients");
    }

    #[test]
    fn repeated_queries_are_identical() {
        let clients = many(15);
        let mut state = QueryState::default();
        state.set_sort(SortField::LastContact, SortDirection::Desc);
        state.set_search_term("client 1");

        assert_eq!(query_clients(&clients, &state), query_clients(&clients, &state));
    }

    #[test]
    fn locale_compare_puts_lowercase_first_on_case_ties() {
        assert_eq!(locale_compare("alice", "Alice"), Ordering::Less);
        assert_eq!(locale_compare("Alice", "alice"), Ordering::Greater);
        assert_eq!(locale_compare("alice", "Bob"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn locale_compare_sorts_accented_letters_with_their_base() {
        assert_eq!(locale_compare("Émile", "Frank"), Ordering::Less);
        assert_eq!(locale_compare("éa", "eb"), Ordering::Less);
        assert_eq!(locale_compare("Zoë", "Zoey"), Ordering::Less);
        assert_eq!(locale_compare("e", "é"), Ordering::Less);
        assert_eq!(locale_compare("é", "É"), Ordering::Less);
    }

    #[test]
    fn name_sort_places_accented_names_in_alphabet_order() {
        let clients = vec![
            client("1", "Frank Ortiz", 10),
            client("2", "Émile Durand", 20),
            client("3", "Zack Young", 30),
            client("4", "Ángela Ruiz", 40),
        ];

        let page = query_clients(&clients, &QueryState::default());

        let names: Vec<&str> = page.clients.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Ángela Ruiz", "Émile Durand", "Frank Ortiz", "Zack Young"]
        );
    }
}
