use std::time::Duration;

use super::{
    assessment::AssessmentForm, chat_state::ChatConversation, client::ClientRecord,
    client_list_state::ClientListState, composer_state::ComposerState,
    dashboard::DashboardState, help::HelpState, login::AgentSession, login::LoginForm,
    report::NeedsReport,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Clients,
    ClientDetail { client_id: String },
    Assessment,
    Report,
    Communication,
    Help,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Clients => "Clients",
            Self::ClientDetail { .. } => "Client Detail",
            Self::Assessment => "Assessment",
            Self::Report => "Report",
            Self::Communication => "Communication",
            Self::Help => "Help & Support",
        }
    }
}

/// Where typed characters go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePane {
    #[default]
    Main,
    Search,
    Chat,
    ComposeSubject,
}

/// Terminal width below which the navigation sidebar collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub compact_width: u16,
}

impl LayoutPolicy {
    pub fn sidebar_collapsed(self, width: u16) -> bool {
        width < self.compact_width
    }
}

#[derive(Debug, Clone)]
pub struct ShellState {
    running: bool,
    screen: Screen,
    active_pane: ActivePane,
    session: Option<AgentSession>,
    login: LoginForm,
    dashboard: DashboardState,
    clients: ClientListState,
    chat: ChatConversation,
    assessment: Option<AssessmentForm>,
    report: Option<NeedsReport>,
    composer: ComposerState,
    help: HelpState,
    notice: Option<String>,
    layout: LayoutPolicy,
}

impl ShellState {
    pub fn new(
        clients: Vec<ClientRecord>,
        chat_reply_delay: Duration,
        layout: LayoutPolicy,
    ) -> Self {
        Self {
            running: true,
            screen: Screen::Login,
            active_pane: ActivePane::Main,
            session: None,
            login: LoginForm::default(),
            dashboard: DashboardState::default(),
            clients: ClientListState::new(clients),
            chat: ChatConversation::new(chat_reply_delay),
            assessment: None,
            report: None,
            composer: ComposerState::default(),
            help: HelpState::default(),
            notice: None,
            layout,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.active_pane = ActivePane::Main;
    }

    pub fn active_pane(&self) -> ActivePane {
        self.active_pane
    }

    pub fn set_active_pane(&mut self, pane: ActivePane) {
        self.active_pane = pane;
    }

    pub fn session(&self) -> Option<&AgentSession> {
        self.session.as_ref()
    }

    pub fn sign_in(&mut self, session: AgentSession) {
        self.session = Some(session);
        self.set_screen(Screen::Dashboard);
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.login = LoginForm::default();
        self.set_screen(Screen::Login);
    }

    pub fn login(&self) -> &LoginForm {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginForm {
        &mut self.login
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardState {
        &mut self.dashboard
    }

    pub fn clients(&self) -> &ClientListState {
        &self.clients
    }

    pub fn clients_mut(&mut self) -> &mut ClientListState {
        &mut self.clients
    }

    pub fn chat(&self) -> &ChatConversation {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatConversation {
        &mut self.chat
    }

    pub fn assessment(&self) -> Option<&AssessmentForm> {
        self.assessment.as_ref()
    }

    pub fn assessment_mut(&mut self) -> Option<&mut AssessmentForm> {
        self.assessment.as_mut()
    }

    pub fn start_assessment(&mut self, form: AssessmentForm) {
        self.assessment = Some(form);
        self.set_screen(Screen::Assessment);
    }

    pub fn report(&self) -> Option<&NeedsReport> {
        self.report.as_ref()
    }

    pub fn show_report(&mut self, report: NeedsReport) {
        self.report = Some(report);
        self.set_screen(Screen::Report);
    }

    pub fn composer(&self) -> &ComposerState {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut ComposerState {
        &mut self.composer
    }

    pub fn help(&self) -> &HelpState {
        &self.help
    }

    pub fn help_mut(&mut self) -> &mut HelpState {
        &mut self.help
    }

    /// One-line feedback shown in the status bar until replaced.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: impl Into<String>) {
        self.notice = Some(notice.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn layout(&self) -> LayoutPolicy {
        self.layout
    }
}
