use super::{
    client::ClientRecord,
    email_template::{ComposeIntent, EmailDraft, EmailTemplate, TEMPLATES},
    text_input_state::TextInputState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerTab {
    #[default]
    Templates,
    Compose,
}

/// Communication screen: template gallery plus the draft being written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposerState {
    tab: ComposerTab,
    highlighted_template: usize,
    draft: EmailDraft,
    subject_input: TextInputState,
}

impl ComposerState {
    pub fn tab(&self) -> ComposerTab {
        self.tab
    }

    pub fn templates(&self) -> &'static [EmailTemplate] {
        &TEMPLATES
    }

    pub fn highlighted_template(&self) -> usize {
        self.highlighted_template
    }

    pub fn draft(&self) -> &EmailDraft {
        &self.draft
    }

    pub fn subject_input(&self) -> &TextInputState {
        &self.subject_input
    }

    pub fn subject_input_mut(&mut self) -> &mut TextInputState {
        &mut self.subject_input
    }

    pub fn toggle_tab(&mut self) {
        self.tab = match self.tab {
            ComposerTab::Templates => ComposerTab::Compose,
            ComposerTab::Compose => ComposerTab::Templates,
        };
    }

    pub fn highlight_next(&mut self) {
        self.highlighted_template = (self.highlighted_template + 1).min(TEMPLATES.len() - 1);
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted_template = self.highlighted_template.saturating_sub(1);
    }

    /// Loads the highlighted template into the draft and switches to composing.
    pub fn use_highlighted(&mut self, client: Option<&ClientRecord>) {
        let Some(template) = TEMPLATES.get(self.highlighted_template) else {
            return;
        };
        self.load(EmailDraft::from_template(template, client));
    }

    /// Entry point from a client action: preselected template plus link.
    pub fn open_for(&mut self, intent: ComposeIntent, client: &ClientRecord) {
        self.load(EmailDraft::for_intent(intent, client));
    }

    /// Takes the finished draft, leaving an empty composer.
    pub fn take_draft(&mut self) -> Option<EmailDraft> {
        if self.draft.body.trim().is_empty() {
            return None;
        }
        let mut draft = std::mem::take(&mut self.draft);
        draft.subject = self.subject_input.take_text();
        self.tab = ComposerTab::Templates;
        Some(draft)
    }

    fn load(&mut self, draft: EmailDraft) {
        if let Some(index) = draft
            .template_id
            .and_then(|id| TEMPLATES.iter().position(|template| template.id == id))
        {
            self.highlighted_template = index;
        }
        self.subject_input.set_text(&draft.subject);
        self.draft = draft;
        self.tab = ComposerTab::Compose;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_clients;

    #[test]
    fn open_for_follow_up_highlights_reminder_and_composes() {
        let clients = sample_clients();
        let mut composer = ComposerState::default();

        composer.open_for(ComposeIntent::FollowUpReminder, &clients[4]);

        assert_eq!(composer.tab(), ComposerTab::Compose);
        assert_eq!(composer.highlighted_template(), 2);
        assert_eq!(
            composer.subject_input().text(),
            "Following up on your life insurance needs"
        );
        assert!(composer.draft().body.contains("/assessment/5"));
    }

    #[test]
    fn highlight_stays_within_template_list() {
        let mut composer = ComposerState::default();

        composer.highlight_previous();
        assert_eq!(composer.highlighted_template(), 0);
        for _ in 0..5 {
            composer.highlight_next();
        }
        assert_eq!(composer.highlighted_template(), 2);
    }

    #[test]
    fn take_draft_uses_edited_subject_and_resets() {
        let mut composer = ComposerState::default();
        composer.use_highlighted(None);
        composer.subject_input_mut().set_text("Quick question");

        let draft = composer.take_draft().expect("draft should be ready");

        assert_eq!(draft.subject, "Quick question");
        assert_eq!(composer.tab(), ComposerTab::Templates);
        assert!(composer.take_draft().is_none());
    }
}
