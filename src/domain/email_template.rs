//! Canned client emails and the drafts composed from them.

use super::client::ClientRecord;

const ASSESSMENT_URL_BASE: &str = "https://everly-agent-platform.com/assessment";
const CLIENT_NAME_PLACEHOLDER: &str = "[Client Name]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub subject: &'static str,
    pub body: &'static str,
    pub last_used: &'static str,
    pub usage: u32,
}

pub static TEMPLATES: [EmailTemplate; 3] = [
    EmailTemplate {
        id: "1",
        title: "Assessment Invitation",
        subject: "Life Insurance Needs Assessment - Next Steps",
        body: "Dear [Client Name],\n\n\
               I hope this email finds you well. I wanted to reach out regarding your life \
               insurance needs assessment.\n\n\
               Based on our initial conversation, I believe you would benefit from a \
               comprehensive analysis of your current coverage and future needs. I've prepared \
               a personalized assessment form that will help us determine the right coverage \
               amount and type for your situation.\n\n\
               Please take a few minutes to complete the assessment at your convenience. Once \
               you've finished, I'll review your responses and prepare a detailed report with \
               my recommendations.\n\n\
               If you have any questions or would prefer to discuss this over the phone, please \
               don't hesitate to reach out.\n\n\
               Best regards,\n[Your Name]",
        last_used: "2 days ago",
        usage: 15,
    },
    EmailTemplate {
        id: "2",
        title: "Report Delivery",
        subject: "Your Life Insurance Analysis Report is Ready",
        body: "Dear [Client Name],\n\n\
               I'm pleased to share your personalized life insurance analysis report. After \
               reviewing your assessment responses and current financial situation, I've \
               prepared comprehensive recommendations tailored specifically to your needs.\n\n\
               The report includes:\n\
               • Current coverage analysis\n\
               • Recommended coverage amount\n\
               • Product recommendations\n\
               • Premium estimates\n\
               • Next steps\n\n\
               I'd love to schedule a brief call to walk through the findings and answer any \
               questions you might have. Please let me know what time works best for you.\n\n\
               Best regards,\n[Your Name]",
        last_used: "1 week ago",
        usage: 8,
    },
    EmailTemplate {
        id: "3",
        title: "Follow-up Reminder",
        subject: "Following up on your life insurance needs",
        body: "Dear [Client Name],\n\n\
               I wanted to follow up on our recent discussion about your life insurance needs. \
               I know this is an important decision, and I'm here to help guide you through the \
               process.\n\n\
               If you've had a chance to review the report I sent, I'd love to hear your \
               thoughts and address any questions or concerns you might have. If you haven't had \
               a chance to look it over yet, no worries - I'm happy to schedule a call to \
               discuss it together.\n\n\
               Please let me know if there's anything I can clarify or if you'd like to move \
               forward with the application process.\n\n\
               Best regards,\n[Your Name]",
        last_used: "3 days ago",
        usage: 12,
    },
];

pub fn find_template(id: &str) -> Option<&'static EmailTemplate> {
    TEMPLATES.iter().find(|template| template.id == id)
}

pub fn assessment_link(client_id: &str) -> String {
    format!("{ASSESSMENT_URL_BASE}/{client_id}")
}

/// Why the composer was opened from a client action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeIntent {
    Assessment,
    FollowUpReminder,
}

impl ComposeIntent {
    fn template_id(self) -> &'static str {
        match self {
            Self::Assessment => "1",
            Self::FollowUpReminder => "3",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmailDraft {
    pub template_id: Option<&'static str>,
    pub recipient: Option<String>,
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    pub fn from_template(template: &'static EmailTemplate, client: Option<&ClientRecord>) -> Self {
        let body = match client {
            Some(client) => template.body.replace(CLIENT_NAME_PLACEHOLDER, &client.name),
            None => template.body.to_owned(),
        };

        Self {
            template_id: Some(template.id),
            recipient: client.map(|client| client.email.clone()),
            subject: template.subject.to_owned(),
            body,
        }
    }

    /// Preselects the intent's template and appends the client's assessment link.
    pub fn for_intent(intent: ComposeIntent, client: &ClientRecord) -> Self {
        let mut draft = find_template(intent.template_id())
            .map(|template| Self::from_template(template, Some(client)))
            .unwrap_or_default();
        draft.body.push_str("\n\nAssessment Link: ");
        draft.body.push_str(&assessment_link(&client.id));
        draft
    }

    /// First characters of a body for template cards.
    pub fn preview(body: &str, max_chars: usize) -> String {
        let mut preview: String = body.chars().take(max_chars).collect();
        if body.chars().count() > max_chars {
            preview.push_str("...");
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::{ApplicationStatus, ClientStatus, ReportStatus};

    fn client() -> ClientRecord {
        ClientRecord {
            id: "4".to_owned(),
            name: "Emily Davis".to_owned(),
            email: "emily.davis@email.com".to_owned(),
            phone: "+1 (555) 456-7890".to_owned(),
            protection_score: 23,
            coverage_gap: 750_000,
            status: ClientStatus::NewLead,
            last_contact: "Never contacted".to_owned(),
            report_status: ReportStatus::NotStarted,
            application_status: ApplicationStatus::NotStarted,
        }
    }

    #[test]
    fn assessment_intent_uses_invitation_and_appends_link() {
        let draft = EmailDraft::for_intent(ComposeIntent::Assessment, &client());

        assert_eq!(draft.template_id, Some("1"));
        assert_eq!(draft.subject, "Life Insurance Needs Assessment - Next Steps");
        assert!(draft.body.starts_with("Dear Emily Davis,"));
        assert!(draft
            .body
            .ends_with("Assessment Link: https://everly-agent-platform.com/assessment/4"));
        assert_eq!(draft.recipient.as_deref(), Some("emily.davis@email.com"));
    }

    #[test]
    fn follow_up_intent_uses_reminder_template() {
        let draft = EmailDraft::for_intent(ComposeIntent::FollowUpReminder, &client());

        assert_eq!(draft.template_id, Some("3"));
        assert!(draft.body.contains("Assessment Link: "));
    }

    #[test]
    fn template_without_client_keeps_placeholder() {
        let template = find_template("2").expect("report template");

        let draft = EmailDraft::from_template(template, None);

        assert!(draft.body.contains("[Client Name]"));
        assert!(draft.body.contains("• Premium estimates"));
        assert_eq!(draft.recipient, None);
    }

    #[test]
    fn preview_truncates_with_ellipsis() {
        assert_eq!(EmailDraft::preview("abcdef", 3), "abc...");
        assert_eq!(EmailDraft::preview("abc", 3), "abc");
    }

    #[test]
    fn unknown_template_id_is_none() {
        assert!(find_template("9").is_none());
    }
}
