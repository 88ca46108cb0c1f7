//! Keyword-rule responder behind the assistant chat widget.

/// Which rule produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTopic {
    SendAssessment,
    ProtectionScore,
    Reports,
    ClientManagement,
    Help,
    Fallback,
}

impl ChatTopic {
    pub fn as_label(self) -> &'static str {
        match self {
            Self::SendAssessment => "CHAT_SEND_ASSESSMENT",
            Self::ProtectionScore => "CHAT_PROTECTION_SCORE",
            Self::Reports => "CHAT_REPORTS",
            Self::ClientManagement => "CHAT_CLIENT_MANAGEMENT",
            Self::Help => "CHAT_HELP",
            Self::Fallback => "CHAT_FALLBACK",
        }
    }
}

struct ChatRule {
    topic: ChatTopic,
    triggers: &'static [&'static str],
    reply: &'static str,
}

impl ChatRule {
    fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|trigger| lowered.contains(trigger))
    }
}

// Evaluated top to bottom, first match wins.
const RULES: [ChatRule; 5] = [
    ChatRule {
        topic: ChatTopic::SendAssessment,
        triggers: &["assessment", "send"],
        reply: "To send an assessment, go to the Clients page, find your client, and click the \
                'Send Assessment' button. This will email them a form to complete their life \
                insurance needs analysis.",
    },
    ChatRule {
        topic: ChatTopic::ProtectionScore,
        triggers: &["protection score", "score"],
        reply: "A protection score is a percentage that indicates how well a client's current \
                life insurance coverage meets their needs. Scores below 60% indicate high need, \
                60-79% moderate need, and 80%+ adequate coverage.",
    },
    ChatRule {
        topic: ChatTopic::Reports,
        triggers: &["report", "generate"],
        reply: "Reports are automatically generated after a client completes their assessment \
                form. You can view and edit reports in the Reports section, then approve them \
                before sending to clients.",
    },
    ChatRule {
        topic: ChatTopic::ClientManagement,
        triggers: &["client", "manage"],
        reply: "You can manage clients in the Clients page. There you can view their protection \
                scores, send assessments, track communication history, and manage their life \
                insurance needs.",
    },
    ChatRule {
        topic: ChatTopic::Help,
        triggers: &["help", "how"],
        reply: "I'm here to help! You can ask me about:\n\
                • Sending assessments to clients\n\
                • Understanding protection scores\n\
                • Generating and reviewing reports\n\
                • Client management features\n\
                • Life insurance products\n\n\
                What would you like to know more about?",
    },
];

pub const GREETING: &str = "Hi! I'm Evie, your AI assistant. I can help you with questions \
                            about the platform, reports, or life insurance products. How can I \
                            assist you today?";

pub const QUICK_ACTIONS: [&str; 4] = [
    "How do I send an assessment?",
    "What is a protection score?",
    "How do I generate a report?",
    "Help with client management",
];

/// Returns the canned reply for `input`. Total: every input gets an answer.
pub fn respond(input: &str) -> String {
    respond_to(input).1
}

/// Like [`respond`], also naming the rule that answered.
pub fn respond_to(input: &str) -> (ChatTopic, String) {
    let lowered = input.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.matches(&lowered))
        .map(|rule| (rule.topic, rule.reply.to_owned()))
        .unwrap_or_else(|| (ChatTopic::Fallback, fallback_reply(input)))
}

fn fallback_reply(input: &str) -> String {
    format!(
        "I understand you're asking about: \"{input}\". I can help with questions about the \
         platform, life insurance products, client management, or reports. Could you be more \
         specific about what you'd like to know?"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_rule_wins_over_generic_how() {
        let (topic, reply) = respond_to("How do I send an assessment?");

        assert_eq!(topic, ChatTopic::SendAssessment);
        assert!(reply.starts_with("To send an assessment"));
    }

    #[test]
    fn protection_score_reply_names_both_band_boundaries() {
        let (topic, reply) = respond_to("What is a protection score?");

        assert_eq!(topic, ChatTopic::ProtectionScore);
        assert!(reply.contains("60"));
        assert!(reply.contains("80"));
    }

    #[test]
    fn fallback_echoes_original_input_verbatim() {
        let (topic, reply) = respond_to("xyz123");
        assert_eq!(topic, ChatTopic::Fallback);
        assert!(reply.contains("\"xyz123\""));

        let mixed_case = respond("Tell me About PREMIUMS");
        assert!(mixed_case.contains("Tell me About PREMIUMS"));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(respond_to("GENERATE it").0, ChatTopic::Reports);
        assert_eq!(respond_to("Manage my book").0, ChatTopic::ClientManagement);
    }

    #[test]
    fn help_rule_returns_multi_line_menu() {
        let (topic, reply) = respond_to("help");

        assert_eq!(topic, ChatTopic::Help);
        assert!(reply.lines().count() > 5);
        assert!(reply.contains("• Understanding protection scores"));
    }

    #[test]
    fn earlier_rules_shadow_later_ones() {
        // "score" (rule 2) beats "report" (rule 3).
        assert_eq!(
            respond_to("score on the report").0,
            ChatTopic::ProtectionScore
        );
        // "send" (rule 1) beats "client" (rule 4).
        assert_eq!(respond_to("send to client").0, ChatTopic::SendAssessment);
    }

    #[test]
    fn quick_actions_each_hit_a_specific_rule() {
        let topics: Vec<_> = QUICK_ACTIONS
            .iter()
            .map(|action| respond_to(action).0)
            .collect();

        assert_eq!(
            topics,
            vec![
                ChatTopic::SendAssessment,
                ChatTopic::ProtectionScore,
                ChatTopic::Reports,
                ChatTopic::ClientManagement,
            ]
        );
    }

    #[test]
    fn empty_input_falls_back() {
        assert_eq!(respond_to("").0, ChatTopic::Fallback);
    }
}
