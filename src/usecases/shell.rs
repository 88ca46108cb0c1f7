use std::time::Duration;

use anyhow::Result;

use crate::{
    domain::{
        assessment::{AssessmentForm, AssessmentPhase, TOTAL_STEPS},
        chat_responder::QUICK_ACTIONS,
        client::{ClientRecord, ClientStatus, ScoreBand},
        client_query::SortField,
        composer_state::ComposerTab,
        dashboard::ShortcutTarget,
        email_template::{assessment_link, ComposeIntent},
        events::{AppEvent, KeyInput},
        help::HelpSection,
        login::LoginField,
        report::NeedsReport,
        shell_state::{ActivePane, Screen, ShellState},
        text_input_state::TextInputState,
    },
    infra::{
        contracts::{ClipboardWriter, ExternalOpener},
        secrets::{mask_email, redact_text},
    },
};

use super::contracts::ShellOrchestrator;

pub struct DefaultShellOrchestrator<O, C>
where
    O: ExternalOpener,
    C: ClipboardWriter,
{
    state: ShellState,
    phase_duration: Duration,
    quick_action_cursor: usize,
    opener: O,
    clipboard: C,
}

impl<O, C> DefaultShellOrchestrator<O, C>
where
    O: ExternalOpener,
    C: ClipboardWriter,
{
    pub fn new(state: ShellState, phase_duration: Duration, opener: O, clipboard: C) -> Self {
        Self {
            state,
            phase_duration,
            quick_action_cursor: 0,
            opener,
            clipboard,
        }
    }

    fn handle_tick(&mut self, elapsed: Duration) {
        for topic in self.state.chat_mut().advance(elapsed) {
            tracing::debug!(topic = topic.as_label(), "assistant reply delivered");
        }

        let finished = self
            .state
            .assessment_mut()
            .is_some_and(|form| form.advance(elapsed));
        if finished {
            self.open_report_for_assessment();
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Result<()> {
        if key.ctrl && key.key == "l" && self.state.session().is_some() {
            tracing::info!("agent signed out");
            self.state.sign_out();
            return Ok(());
        }

        match self.state.active_pane() {
            ActivePane::Chat => {
                self.handle_chat_key(&key);
                return Ok(());
            }
            ActivePane::Search => {
                self.handle_search_key(&key);
                return Ok(());
            }
            ActivePane::ComposeSubject => {
                self.handle_subject_key(&key);
                return Ok(());
            }
            ActivePane::Main => {}
        }

        if self.state.screen() == &Screen::Login {
            self.handle_login_key(&key);
            return Ok(());
        }

        match key.as_char() {
            Some('q') => {
                self.state.stop();
                return Ok(());
            }
            Some('?') => {
                self.focus_chat();
                return Ok(());
            }
            Some(nav @ ('D' | 'L' | 'M' | 'H')) => {
                let screen = match nav {
                    'D' => Screen::Dashboard,
                    'L' => Screen::Clients,
                    'M' => Screen::Communication,
                    _ => Screen::Help,
                };
                self.state.clear_notice();
                self.state.set_screen(screen);
                return Ok(());
            }
            _ => {}
        }

        match self.state.screen().clone() {
            Screen::Login => {}
            Screen::Dashboard => self.handle_dashboard_key(&key),
            Screen::Clients => self.handle_clients_key(&key),
            Screen::ClientDetail { client_id } => self.handle_detail_key(&key, &client_id),
            Screen::Assessment => self.handle_assessment_key(&key),
            Screen::Report => self.handle_report_key(&key),
            Screen::Communication => self.handle_communication_key(&key),
            Screen::Help => self.handle_help_key(&key),
        }

        Ok(())
    }

    fn handle_login_key(&mut self, key: &KeyInput) {
        let login = self.state.login_mut();
        match (key.key.as_str(), key.ctrl) {
            ("tab", false) => login.focus_next(),
            ("v", true) => login.toggle_password_visible(),
            ("enter", false) => match login.submit() {
                Ok(session) => {
                    tracing::info!(
                        email = %mask_email(&session.email),
                        remember_me = session.remember_me,
                        "agent signed in"
                    );
                    self.state.sign_in(session);
                }
                Err(error) => {
                    tracing::debug!(reason = %error, "sign-in rejected");
                }
            },
            (" ", false) if login.focus() == LoginField::RememberMe => login.toggle_remember_me(),
            _ => {
                if let Some(input) = login.focused_input_mut() {
                    edit_text(input, key);
                }
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: &KeyInput) {
        let dashboard = self.state.dashboard_mut();
        match key.key.as_str() {
            "j" | "down" | "right" => dashboard.select_next(),
            "k" | "up" | "left" => dashboard.select_previous(),
            "tab" => dashboard.toggle_focus(),
            "enter" => {
                let target = dashboard.activate();
                self.open_shortcut(target);
            }
            _ => {}
        }
    }

    fn open_shortcut(&mut self, target: ShortcutTarget) {
        match target {
            ShortcutTarget::Directory(preset) => {
                self.state
                    .clients_mut()
                    .apply_status_preset(preset.statuses());
                tracing::debug!(preset = ?preset, "client list opened from dashboard");
                self.state.clear_notice();
                self.state.set_screen(Screen::Clients);
            }
            ShortcutTarget::Communication => {
                self.state.clear_notice();
                self.state.set_screen(Screen::Communication);
            }
            ShortcutTarget::Unavailable => {
                self.state.set_notice("This shortcut is not available yet");
            }
        }
    }

    fn handle_help_key(&mut self, key: &KeyInput) {
        let help = self.state.help_mut();
        match key.key.as_str() {
            "tab" | "right" | "l" => help.next_section(),
            "left" | "h" => help.previous_section(),
            "j" | "down" if help.section() == HelpSection::Faq => help.faq_next(),
            "k" | "up" if help.section() == HelpSection::Faq => help.faq_previous(),
            "enter" | " " if help.section() == HelpSection::Faq => help.toggle_faq(),
            "esc" => self.state.set_screen(Screen::Dashboard),
            _ => {}
        }
    }

    fn handle_clients_key(&mut self, key: &KeyInput) {
        let Some(ch) = key.as_char() else {
            match key.key.as_str() {
                "down" => self.state.clients_mut().select_next(),
                "up" => self.state.clients_mut().select_previous(),
                "right" => self.state.clients_mut().next_page(),
                "left" => self.state.clients_mut().previous_page(),
                "enter" => self.open_selected_client(),
                _ => {}
            }
            return;
        };

        let clients = self.state.clients_mut();
        match ch {
            'j' => clients.select_next(),
            'k' => clients.select_previous(),
            'n' => clients.next_page(),
            'p' => clients.previous_page(),
            '/' => self.state.set_active_pane(ActivePane::Search),
            's' => clients.update_query(|query| {
                let field = query.sort_field().cycled();
                query.toggle_sort(field);
            }),
            'S' => clients.update_query(|query| {
                let field = query.sort_field();
                query.toggle_sort(field);
            }),
            'a' => clients.update_query(|query| query.select_all_statuses()),
            'c' => clients.update_query(|query| query.clear_statuses()),
            'A' => clients.update_query(|query| query.select_all_scores()),
            'C' => clients.update_query(|query| query.clear_scores()),
            'l' => clients.update_query(|query| query.toggle_score_filter(ScoreBand::Low)),
            'm' => clients.update_query(|query| query.toggle_score_filter(ScoreBand::Medium)),
            'h' => clients.update_query(|query| query.toggle_score_filter(ScoreBand::High)),
            'e' => self.cycle_selected_status(),
            digit @ '1'..='6' => {
                let index = digit as usize - '1' as usize;
                if let Some(status) = ClientStatus::ALL.get(index).copied() {
                    clients.update_query(|query| query.toggle_status_filter(status));
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "enter" | "esc" | "tab" => self.state.set_active_pane(ActivePane::Main),
            _ => self
                .state
                .clients_mut()
                .edit_search(|input| edit_text(input, key)),
        }
    }

    fn handle_detail_key(&mut self, key: &KeyInput, client_id: &str) {
        let Some(client) = self.state.clients().client(client_id).cloned() else {
            self.state.set_screen(Screen::Clients);
            return;
        };

        match key.key.as_str() {
            "esc" | "backspace" => self.state.set_screen(Screen::Clients),
            "s" => self.compose_for(ComposeIntent::Assessment, &client),
            "f" => self.compose_for(ComposeIntent::FollowUpReminder, &client),
            "y" => {
                let link = assessment_link(&client.id);
                match self.clipboard.write_text(&link) {
                    Ok(()) => {
                        tracing::info!(client_id = %client.id, "assessment link copied");
                        self.state.set_notice(format!("Copied {link}"));
                    }
                    Err(error) => {
                        tracing::warn!(error = ?error, "assessment link copy failed");
                        self.state.set_notice("Could not copy the link to the clipboard");
                    }
                }
            }
            "o" => {
                let link = assessment_link(&client.id);
                match self.opener.open(&link) {
                    Ok(()) => {
                        tracing::info!(client_id = %client.id, "assessment link opened");
                        self.state.set_notice(format!("Opened {link}"));
                    }
                    Err(error) => {
                        tracing::warn!(error = ?error, "assessment link open failed");
                        self.state.set_notice(format!("Could not open {link}"));
                    }
                }
            }
            "t" => {
                tracing::info!(client_id = %client.id, "assessment wizard started");
                self.state.clear_notice();
                self.state.start_assessment(AssessmentForm::new(client.id));
            }
            "r" => {
                if client.can_view_report() {
                    self.state
                        .show_report(NeedsReport::sample(&client.id, &client.name));
                } else {
                    self.state
                        .set_notice(format!("No report available for {}", client.name));
                }
            }
            "e" => {
                let next = client.status.cycled();
                self.state.clients_mut().set_status(&client.id, next);
                self.state
                    .set_notice(format!("{} marked as {}", client.name, next.label()));
            }
            _ => {}
        }
    }

    fn handle_assessment_key(&mut self, key: &KeyInput) {
        let phase_duration = self.phase_duration;
        let Some(form) = self.state.assessment_mut() else {
            self.state.set_screen(Screen::Clients);
            return;
        };
        if matches!(form.phase(), AssessmentPhase::Finished) {
            self.open_report_for_assessment();
            return;
        }
        if *form.phase() != AssessmentPhase::Editing {
            return;
        }

        let mut notice = None;
        let mut finished = false;
        match key.key.as_str() {
            "j" | "down" | "tab" => form.focus_next(),
            "k" | "up" => form.focus_previous(),
            " " => form.cycle_answer(),
            "b" | "left" => {
                form.previous();
            }
            "n" | "right" | "enter" => {
                if form.step() == TOTAL_STEPS {
                    if key.key == "enter" && form.submit(phase_duration) {
                        tracing::info!(client_id = %form.client_id(), "assessment submitted");
                        finished = *form.phase() == AssessmentPhase::Finished;
                    }
                } else if !form.next() {
                    notice = Some("Answer every question to continue");
                }
            }
            "esc" => {
                let client_id = form.client_id().to_owned();
                self.state.set_screen(Screen::ClientDetail { client_id });
                return;
            }
            digit if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
                let option = usize::from(digit.as_bytes()[0] - b'0');
                if option > 0 {
                    let question = form.focused_question();
                    form.select_answer(question, option - 1);
                }
            }
            _ => {}
        }

        match notice {
            Some(text) => self.state.set_notice(text),
            None => self.state.clear_notice(),
        }
        if finished {
            self.open_report_for_assessment();
        }
    }

    fn handle_report_key(&mut self, key: &KeyInput) {
        if key.key != "esc" {
            return;
        }
        let target = match self.state.report() {
            Some(report) => Screen::ClientDetail {
                client_id: report.client_id.clone(),
            },
            None => Screen::Clients,
        };
        self.state.set_screen(target);
    }

    fn handle_communication_key(&mut self, key: &KeyInput) {
        if key.ctrl && key.key == "s" {
            self.send_draft();
            return;
        }

        let composer = self.state.composer_mut();
        match (composer.tab(), key.key.as_str()) {
            (_, "tab") => composer.toggle_tab(),
            (_, "esc") => self.state.set_screen(Screen::Clients),
            (ComposerTab::Templates, "j" | "down") => composer.highlight_next(),
            (ComposerTab::Templates, "k" | "up") => composer.highlight_previous(),
            (ComposerTab::Templates, "enter") => composer.use_highlighted(None),
            (ComposerTab::Compose, "s" | "enter") => {
                self.state.set_active_pane(ActivePane::ComposeSubject);
            }
            _ => {}
        }
    }

    fn handle_subject_key(&mut self, key: &KeyInput) {
        match key.key.as_str() {
            "enter" | "esc" | "tab" => self.state.set_active_pane(ActivePane::Main),
            _ => edit_text(self.state.composer_mut().subject_input_mut(), key),
        }
    }

    fn handle_chat_key(&mut self, key: &KeyInput) {
        let chat = self.state.chat_mut();
        match (key.key.as_str(), key.ctrl) {
            ("esc", false) => {
                chat.toggle_minimized();
                self.state.set_active_pane(ActivePane::Main);
            }
            ("x", true) => {
                chat.toggle_open();
                self.state.set_active_pane(ActivePane::Main);
            }
            ("enter", false) => {
                if let Some(pending) = chat.submit_input() {
                    tracing::debug!(
                        delay_ms = pending.remaining().as_millis(),
                        "assistant reply scheduled"
                    );
                }
            }
            ("tab", false) if chat.input().is_empty() => {
                let prompt = QUICK_ACTIONS[self.quick_action_cursor % QUICK_ACTIONS.len()];
                self.quick_action_cursor = self.quick_action_cursor.wrapping_add(1);
                chat.input_mut().set_text(prompt);
            }
            _ => edit_text(chat.input_mut(), key),
        }
    }

    fn focus_chat(&mut self) {
        let chat = self.state.chat_mut();
        if !chat.is_open() {
            chat.toggle_open();
        } else if chat.is_minimized() {
            chat.toggle_minimized();
        }
        self.state.set_active_pane(ActivePane::Chat);
    }

    fn open_selected_client(&mut self) {
        if let Some(client_id) = self
            .state
            .clients()
            .selected_client()
            .map(|client| client.id.clone())
        {
            self.state.clear_notice();
            self.state.set_screen(Screen::ClientDetail { client_id });
        }
    }

    fn cycle_selected_status(&mut self) {
        let Some((client_id, next)) = self
            .state
            .clients()
            .selected_client()
            .map(|client| (client.id.clone(), client.status.cycled()))
        else {
            return;
        };
        self.state.clients_mut().set_status(&client_id, next);
        tracing::debug!(client_id = %client_id, status = next.as_slug(), "client status edited");
    }

    fn compose_for(&mut self, intent: ComposeIntent, client: &ClientRecord) {
        self.state.composer_mut().open_for(intent, client);
        self.state.clear_notice();
        self.state.set_screen(Screen::Communication);
    }

    fn send_draft(&mut self) {
        let Some(draft) = self.state.composer_mut().take_draft() else {
            self.state.set_notice("Pick a template before sending");
            return;
        };
        let recipient = draft.recipient.as_deref().unwrap_or("client");
        tracing::info!(
            template_id = draft.template_id.unwrap_or("custom"),
            recipient = %redact_text(recipient),
            subject = %draft.subject,
            "email handed off"
        );
        self.state.set_notice(format!("Email sent to {recipient}"));
    }

    fn open_report_for_assessment(&mut self) {
        let Some(client_id) = self
            .state
            .assessment()
            .map(|form| form.client_id().to_owned())
        else {
            return;
        };
        let name = self
            .state
            .clients()
            .client(&client_id)
            .map(|client| client.name.clone())
            .unwrap_or_default();

        tracing::info!(client_id = %client_id, "assessment processed");
        self.state
            .show_report(NeedsReport::sample(&client_id, &name));
    }
}

impl<O, C> ShellOrchestrator for DefaultShellOrchestrator<O, C>
where
    O: ExternalOpener,
    C: ClipboardWriter,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick(elapsed) => self.handle_tick(elapsed),
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key)?,
        }

        Ok(())
    }
}

/// Shared line-editing keys for every text field.
fn edit_text(input: &mut TextInputState, key: &KeyInput) {
    if let Some(ch) = key.as_char() {
        input.insert_char(ch);
        return;
    }
    match key.key.as_str() {
        "backspace" => input.delete_char_before(),
        "delete" => input.delete_char_at(),
        "left" => input.move_cursor_left(),
        "right" => input.move_cursor_right(),
        "home" => input.move_cursor_home(),
        "end" => input.move_cursor_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            chat_state::ChatAuthor, client_query::SortDirection, login::LoginError,
            shell_state::LayoutPolicy,
        },
        infra::stubs::{MemoryClipboard, RecordingOpener},
        test_support::sample_clients,
    };

    type TestOrchestrator = DefaultShellOrchestrator<RecordingOpener, MemoryClipboard>;

    fn orchestrator() -> TestOrchestrator {
        orchestrator_with_phase(Duration::from_millis(3000))
    }

    fn orchestrator_with_phase(phase_duration: Duration) -> TestOrchestrator {
        DefaultShellOrchestrator::new(
            ShellState::new(
                sample_clients(),
                Duration::from_millis(1500),
                LayoutPolicy { compact_width: 120 },
            ),
            phase_duration,
            RecordingOpener::default(),
            MemoryClipboard::default(),
        )
    }

    fn press(orchestrator: &mut TestOrchestrator, key: &str) {
        orchestrator
            .handle_event(AppEvent::InputKey(KeyInput::new(key, false)))
            .expect("key must be handled");
    }

    fn press_ctrl(orchestrator: &mut TestOrchestrator, key: &str) {
        orchestrator
            .handle_event(AppEvent::InputKey(KeyInput::new(key, true)))
            .expect("key must be handled");
    }

    fn type_text(orchestrator: &mut TestOrchestrator, text: &str) {
        for ch in text.chars() {
            press(orchestrator, &ch.to_string());
        }
    }

    fn tick(orchestrator: &mut TestOrchestrator, millis: u64) {
        orchestrator
            .handle_event(AppEvent::Tick(Duration::from_millis(millis)))
            .expect("tick must be handled");
    }

    /// Signed in and on the client list.
    fn signed_in() -> TestOrchestrator {
        let mut orchestrator = sign_in(orchestrator());
        press(&mut orchestrator, "L");
        orchestrator
    }

    fn sign_in(mut orchestrator: TestOrchestrator) -> TestOrchestrator {
        type_text(&mut orchestrator, "agent@everly.com");
        press(&mut orchestrator, "tab");
        type_text(&mut orchestrator, "secret");
        press(&mut orchestrator, "enter");
        orchestrator
    }

    fn answer_both_steps(orchestrator: &mut TestOrchestrator) {
        for _ in 0..2 {
            for _ in 0..4 {
                press(orchestrator, " ");
                press(orchestrator, "j");
            }
            press(orchestrator, "n");
        }
    }

    fn open_detail(orchestrator: &mut TestOrchestrator, client_id: &str) {
        orchestrator.state.set_screen(Screen::ClientDetail {
            client_id: client_id.to_owned(),
        });
    }

    #[test]
    fn stops_on_quit_event() {
        let mut orchestrator = orchestrator();

        orchestrator
            .handle_event(AppEvent::QuitRequested)
            .expect("event must be handled");

        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn q_is_text_on_the_login_screen() {
        let mut orchestrator = orchestrator();

        press(&mut orchestrator, "q");

        assert!(orchestrator.state().is_running());
        assert_eq!(orchestrator.state().login().email().text(), "q");
    }

    #[test]
    fn login_with_valid_credentials_opens_dashboard() {
        let orchestrator = sign_in(orchestrator());

        assert_eq!(orchestrator.state().screen(), &Screen::Dashboard);
        assert_eq!(
            orchestrator.state().session().map(|s| s.email.as_str()),
            Some("agent@everly.com")
        );
    }

    #[test]
    fn dashboard_stat_card_opens_filtered_client_list() {
        let mut orchestrator = sign_in(orchestrator());
        press(&mut orchestrator, "j");
        press(&mut orchestrator, "j");
        press(&mut orchestrator, "j");

        press(&mut orchestrator, "enter");

        let state = orchestrator.state();
        assert_eq!(state.screen(), &Screen::Clients);
        let names: Vec<_> = state
            .clients()
            .page()
            .clients
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Lisa Anderson", "Robert Wilson", "Sarah Johnson"]);
    }

    #[test]
    fn dashboard_shortcuts_lead_to_communication_or_a_notice() {
        let mut orchestrator = sign_in(orchestrator());
        press(&mut orchestrator, "tab");
        press(&mut orchestrator, "j");
        press(&mut orchestrator, "enter");
        assert_eq!(orchestrator.state().screen(), &Screen::Dashboard);
        assert!(orchestrator.state().notice().is_some());

        press(&mut orchestrator, "j");
        press(&mut orchestrator, "j");
        press(&mut orchestrator, "enter");
        assert_eq!(orchestrator.state().screen(), &Screen::Communication);
    }

    #[test]
    fn help_screen_expands_faq_answers() {
        let mut orchestrator = sign_in(orchestrator());
        press(&mut orchestrator, "H");
        assert_eq!(orchestrator.state().screen(), &Screen::Help);

        press(&mut orchestrator, "tab");
        press(&mut orchestrator, "j");
        press(&mut orchestrator, "enter");
        assert_eq!(orchestrator.state().help().section(), HelpSection::Faq);
        assert_eq!(orchestrator.state().help().open_faq(), Some(1));

        press(&mut orchestrator, "esc");
        assert_eq!(orchestrator.state().screen(), &Screen::Dashboard);
    }

    #[test]
    fn login_without_password_shows_error() {
        let mut orchestrator = orchestrator();
        type_text(&mut orchestrator, "agent@everly.com");

        press(&mut orchestrator, "enter");

        assert_eq!(orchestrator.state().screen(), &Screen::Login);
        assert_eq!(
            orchestrator.state().login().error(),
            Some(LoginError::MissingFields)
        );
    }

    #[test]
    fn ctrl_l_signs_out() {
        let mut orchestrator = signed_in();

        press_ctrl(&mut orchestrator, "l");

        assert_eq!(orchestrator.state().screen(), &Screen::Login);
        assert!(orchestrator.state().session().is_none());
    }

    #[test]
    fn key_contract_navigates_client_table_with_vim_keys() {
        let mut orchestrator = signed_in();

        press(&mut orchestrator, "j");
        assert_eq!(orchestrator.state().clients().selected_index(), Some(1));

        press(&mut orchestrator, "k");
        assert_eq!(orchestrator.state().clients().selected_index(), Some(0));
    }

    #[test]
    fn search_pane_captures_typed_text() {
        let mut orchestrator = signed_in();

        press(&mut orchestrator, "/");
        type_text(&mut orchestrator, "chen");
        press(&mut orchestrator, "enter");

        let page = orchestrator.state().clients().page();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.clients[0].name, "Mike Chen");
        assert_eq!(orchestrator.state().active_pane(), ActivePane::Main);

        press(&mut orchestrator, "q");
        assert!(!orchestrator.state().is_running());
    }

    #[test]
    fn sort_keys_cycle_field_and_flip_direction() {
        let mut orchestrator = signed_in();

        press(&mut orchestrator, "s");
        let query = orchestrator.state().clients().query();
        assert_eq!(query.sort_field(), SortField::Name.cycled());
        assert_eq!(query.sort_direction(), SortDirection::Asc);

        press(&mut orchestrator, "S");
        assert_eq!(
            orchestrator.state().clients().query().sort_direction(),
            SortDirection::Desc
        );
    }

    #[test]
    fn digit_keys_toggle_status_filters() {
        let mut orchestrator = signed_in();
        let index = ClientStatus::ALL
            .iter()
            .position(|status| *status == ClientStatus::Protected)
            .expect("protected is a status");

        press(&mut orchestrator, &(index + 1).to_string());

        let query = orchestrator.state().clients().query();
        assert!(query.status_filters().contains(&ClientStatus::Protected));
        assert_eq!(orchestrator.state().clients().page().total_count, 2);
    }

    #[test]
    fn enter_opens_selected_client_detail() {
        let mut orchestrator = signed_in();

        press(&mut orchestrator, "enter");

        assert_eq!(
            orchestrator.state().screen(),
            &Screen::ClientDetail {
                client_id: "7".to_owned()
            }
        );
    }

    #[test]
    fn detail_copy_and_open_use_the_assessment_link() {
        let mut orchestrator = signed_in();
        open_detail(&mut orchestrator, "4");

        press(&mut orchestrator, "y");
        press(&mut orchestrator, "o");

        let link = "https://everly-agent-platform.com/assessment/4";
        assert_eq!(orchestrator.clipboard.contents.as_deref(), Some(link));
        assert_eq!(*orchestrator.opener.opened.borrow(), vec![link.to_owned()]);
    }

    #[test]
    fn detail_send_assessment_opens_composer_with_link() {
        let mut orchestrator = signed_in();
        open_detail(&mut orchestrator, "1");

        press(&mut orchestrator, "s");

        assert_eq!(orchestrator.state().screen(), &Screen::Communication);
        let draft = orchestrator.state().composer().draft();
        assert_eq!(draft.recipient.as_deref(), Some("john.smith@email.com"));
        assert!(draft.body.contains("Dear John Smith"));
        assert!(draft
            .body
            .ends_with("Assessment Link: https://everly-agent-platform.com/assessment/1"));
    }

    #[test]
    fn report_requires_completed_report_and_unprotected_client() {
        let mut orchestrator = signed_in();

        open_detail(&mut orchestrator, "3");
        press(&mut orchestrator, "r");
        assert_ne!(orchestrator.state().screen(), &Screen::Report);
        assert!(orchestrator.state().notice().is_some());

        open_detail(&mut orchestrator, "2");
        press(&mut orchestrator, "r");
        assert_eq!(orchestrator.state().screen(), &Screen::Report);
        assert_eq!(
            orchestrator.state().report().map(|r| r.client_name.as_str()),
            Some("Sarah Johnson")
        );
    }

    #[test]
    fn assessment_submission_runs_phases_then_opens_report() {
        let mut orchestrator = signed_in();
        open_detail(&mut orchestrator, "4");
        press(&mut orchestrator, "t");
        assert_eq!(orchestrator.state().screen(), &Screen::Assessment);

        press(&mut orchestrator, "n");
        assert_eq!(orchestrator.state().assessment().map(|f| f.step()), Some(1));
        assert!(orchestrator.state().notice().is_some());

        answer_both_steps(&mut orchestrator);
        assert_eq!(orchestrator.state().assessment().map(|f| f.step()), Some(3));

        press(&mut orchestrator, "enter");
        tick(&mut orchestrator, 9_000);
        assert_eq!(orchestrator.state().screen(), &Screen::Assessment);

        tick(&mut orchestrator, 3_000);
        assert_eq!(orchestrator.state().screen(), &Screen::Report);
        assert_eq!(
            orchestrator.state().report().map(|r| r.client_id.as_str()),
            Some("4")
        );
    }

    #[test]
    fn zero_phase_duration_opens_report_on_submit() {
        let mut orchestrator = sign_in(orchestrator_with_phase(Duration::ZERO));
        open_detail(&mut orchestrator, "4");
        press(&mut orchestrator, "t");
        answer_both_steps(&mut orchestrator);

        press(&mut orchestrator, "enter");

        assert_eq!(orchestrator.state().screen(), &Screen::Report);
        assert_eq!(
            orchestrator.state().report().map(|r| r.client_id.as_str()),
            Some("4")
        );
    }

    #[test]
    fn finished_assessment_screen_moves_on_to_report() {
        let mut orchestrator = signed_in();
        open_detail(&mut orchestrator, "4");
        press(&mut orchestrator, "t");
        answer_both_steps(&mut orchestrator);
        press(&mut orchestrator, "enter");
        if let Some(form) = orchestrator.state.assessment_mut() {
            assert!(form.advance(Duration::from_secs(60)));
        }
        assert_eq!(orchestrator.state().screen(), &Screen::Assessment);

        press(&mut orchestrator, "esc");

        assert_eq!(orchestrator.state().screen(), &Screen::Report);
    }

    #[test]
    fn chat_reply_arrives_after_delay() {
        let mut orchestrator = signed_in();

        press(&mut orchestrator, "?");
        assert_eq!(orchestrator.state().active_pane(), ActivePane::Chat);
        type_text(&mut orchestrator, "How do I send an assessment?");
        press(&mut orchestrator, "enter");
        assert!(orchestrator.state().chat().is_typing());

        tick(&mut orchestrator, 1_000);
        assert!(orchestrator.state().chat().is_typing());
        tick(&mut orchestrator, 500);

        let last = orchestrator
            .state()
            .chat()
            .messages()
            .last()
            .expect("reply present");
        assert_eq!(last.author, ChatAuthor::Assistant);
        assert!(last.text.starts_with("To send an assessment"));
    }

    #[test]
    fn chat_question_sent_while_waiting_is_answered_after_the_first() {
        let mut orchestrator = signed_in();
        press(&mut orchestrator, "?");
        type_text(&mut orchestrator, "help");
        press(&mut orchestrator, "enter");
        tick(&mut orchestrator, 500);

        type_text(&mut orchestrator, "how is the score computed");
        press(&mut orchestrator, "enter");
        assert!(orchestrator.state().chat().input().is_empty());

        tick(&mut orchestrator, 1_000);
        assert!(orchestrator.state().chat().is_typing());
        tick(&mut orchestrator, 500);

        let chat = orchestrator.state().chat();
        assert!(!chat.is_typing());
        let authors: Vec<_> = chat.messages().iter().map(|m| m.author).collect();
        assert_eq!(
            authors,
            vec![
                ChatAuthor::Assistant,
                ChatAuthor::Agent,
                ChatAuthor::Agent,
                ChatAuthor::Assistant,
                ChatAuthor::Assistant,
            ]
        );
    }

    #[test]
    fn chat_tab_fills_quick_actions_in_order() {
        let mut orchestrator = signed_in();
        press(&mut orchestrator, "?");

        press(&mut orchestrator, "tab");

        assert_eq!(
            orchestrator.state().chat().input().text(),
            QUICK_ACTIONS[0]
        );
    }

    #[test]
    fn composer_send_requires_a_draft() {
        let mut orchestrator = signed_in();
        press(&mut orchestrator, "M");

        press_ctrl(&mut orchestrator, "s");
        assert_eq!(
            orchestrator.state().notice(),
            Some("Pick a template before sending")
        );

        press(&mut orchestrator, "enter");
        press_ctrl(&mut orchestrator, "s");
        assert_eq!(orchestrator.state().notice(), Some("Email sent to client"));
    }

    #[test]
    fn status_edit_cycles_selected_client() {
        let mut orchestrator = signed_in();
        let before = orchestrator
            .state()
            .clients()
            .selected_client()
            .map(|client| client.status)
            .expect("selection");

        press(&mut orchestrator, "e");

        let after = orchestrator
            .state()
            .clients()
            .client("7")
            .map(|client| client.status)
            .expect("client 7");
        assert_eq!(after, before.cycled());
    }
}
