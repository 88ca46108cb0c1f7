//! Help and support screen: topic sections and an expandable FAQ.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HelpSection {
    #[default]
    GettingStarted,
    Faq,
    Resources,
    Contact,
}

impl HelpSection {
    pub const ALL: [HelpSection; 4] = [
        Self::GettingStarted,
        Self::Faq,
        Self::Resources,
        Self::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::Faq => "FAQ",
            Self::Resources => "Resources",
            Self::Contact => "Contact Support",
        }
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQ: [FaqItem; 4] = [
    FaqItem {
        question: "How do I send an assessment to a client?",
        answer: "Go to the Clients page, find your client, and choose \"Send Assessment\". \
                 This emails them a form to complete their life insurance needs analysis.",
    },
    FaqItem {
        question: "What is a protection score?",
        answer: "A protection score is a percentage that indicates how well-covered a client \
                 is for life insurance needs. Lower scores indicate greater coverage gaps.",
    },
    FaqItem {
        question: "How do I approve a report?",
        answer: "Open the report viewer, review all details, make any necessary adjustments, \
                 and approve it when satisfied with the recommendations.",
    },
    FaqItem {
        question: "Can I edit assessment responses?",
        answer: "Yes, you can edit both basic form responses and advanced variables in the \
                 assessment form before generating the final report.",
    },
];

pub const GETTING_STARTED: [&str; 5] = [
    "Review your dashboard: look for clients with protection scores below 80%",
    "Send assessments to request additional information from clients",
    "Review the generated life insurance reports once assessments are complete",
    "Approve reports and discuss recommendations using the communication tools",
    "Track progress: monitor client status and follow up as needed",
];

/// Title, description and call to action.
pub const RESOURCES: [(&str, &str, &str); 4] = [
    ("User Guide", "Complete guide to using the Everly Agent Platform", "Download PDF"),
    ("Video Tutorials", "Step-by-step video guides for key features", "Watch Videos"),
    ("Product Knowledge", "Learn about Everly life insurance products", "View Guide"),
    ("Best Practices", "Tips for successful client conversations", "Read More"),
];

pub const CONTACTS: [(&str, &str); 3] = [
    ("Live Chat", "Chat with support team"),
    ("Phone Support", "Call 1-800-EVERLY"),
    ("Email Support", "support@everly.com"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpState {
    section: HelpSection,
    faq_cursor: usize,
    open_faq: Option<usize>,
}

impl HelpState {
    pub fn section(&self) -> HelpSection {
        self.section
    }

    pub fn faq_cursor(&self) -> usize {
        self.faq_cursor
    }

    pub fn open_faq(&self) -> Option<usize> {
        self.open_faq
    }

    pub fn next_section(&mut self) {
        let next = (self.section.index() + 1) % HelpSection::ALL.len();
        self.section = HelpSection::ALL[next];
    }

    pub fn previous_section(&mut self) {
        let count = HelpSection::ALL.len();
        self.section = HelpSection::ALL[(self.section.index() + count - 1) % count];
    }

    pub fn faq_next(&mut self) {
        self.faq_cursor = (self.faq_cursor + 1).min(FAQ.len() - 1);
    }

    pub fn faq_previous(&mut self) {
        self.faq_cursor = self.faq_cursor.saturating_sub(1);
    }

    /// Opens the question under the cursor, closing any other; a second
    /// toggle closes it again.
    pub fn toggle_faq(&mut self) {
        self.open_faq = match self.open_faq {
            Some(open) if open == self.faq_cursor => None,
            _ => Some(self.faq_cursor),
        };
    }
}
