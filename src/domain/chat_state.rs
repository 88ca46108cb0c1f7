use std::{collections::VecDeque, time::Duration};

use chrono::{DateTime, Local};

use super::{
    chat_responder::{self, ChatTopic, GREETING},
    staged::Delayed,
    text_input_state::TextInputState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    Agent,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
    pub sent_at: DateTime<Local>,
}

impl ChatMessage {
    fn new(author: ChatAuthor, text: impl Into<String>) -> Self {
        Self {
            author,
            text: text.into(),
            sent_at: Local::now(),
        }
    }
}

/// Agent question waiting for the assistant's typing pause to elapse.
pub type PendingReply = Delayed<String>;

/// Assistant widget state: transcript, input line, and replies in flight.
#[derive(Debug, Clone)]
pub struct ChatConversation {
    open: bool,
    minimized: bool,
    messages: Vec<ChatMessage>,
    input: TextInputState,
    /// Oldest first; each question keeps its own countdown.
    pending: VecDeque<PendingReply>,
    reply_delay: Duration,
}

impl ChatConversation {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            open: false,
            minimized: false,
            messages: vec![ChatMessage::new(ChatAuthor::Assistant, GREETING)],
            input: TextInputState::default(),
            pending: VecDeque::new(),
            reply_delay,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        self.minimized = false;
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextInputState {
        &mut self.input
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Sends the input line. Blank input stays in the field untouched.
    pub fn submit_input(&mut self) -> Option<&PendingReply> {
        if self.input.text().trim().is_empty() {
            return None;
        }
        let text = self.input.take_text();
        self.submit(&text)
    }

    /// Records the agent message and arms a delayed reply, returning it
    /// while it is still in flight. Blank input is ignored; questions sent
    /// while earlier replies are pending queue behind them.
    pub fn submit(&mut self, text: &str) -> Option<&PendingReply> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages
            .push(ChatMessage::new(ChatAuthor::Agent, text.to_owned()));
        self.pending
            .push_back(Delayed::new(text.to_owned(), self.reply_delay));
        self.resolve_due();
        self.pending.back()
    }

    /// Counts every typing pause down; returns the topics of replies that
    /// landed, in the order they were asked.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<ChatTopic> {
        for pending in &mut self.pending {
            pending.advance(elapsed);
        }
        self.resolve_due()
    }

    fn resolve_due(&mut self) -> Vec<ChatTopic> {
        let mut topics = Vec::new();
        while self.pending.front().is_some_and(Delayed::is_due) {
            let Some(question) = self.pending.pop_front() else {
                break;
            };
            let (topic, reply) = chat_responder::respond_to(&question.into_value());
            self.messages
                .push(ChatMessage::new(ChatAuthor::Assistant, reply));
            topics.push(topic);
        }
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(conversation: &ChatConversation) -> Vec<(ChatAuthor, &str)> {
        conversation
            .messages()
            .iter()
            .map(|message| (message.author, message.text.as_str()))
            .collect()
    }

    #[test]
    fn starts_closed_with_greeting() {
        let conversation = ChatConversation::new(Duration::from_millis(1500));

        assert!(!conversation.is_open());
        assert_eq!(texts(&conversation), vec![(ChatAuthor::Assistant, GREETING)]);
    }

    #[test]
    fn reply_lands_only_after_delay() {
        let mut conversation = ChatConversation::new(Duration::from_millis(1500));

        assert!(conversation.submit("What is a protection score?").is_some());
        assert!(conversation.is_typing());
        assert_eq!(conversation.messages().len(), 2);

        assert!(conversation.advance(Duration::from_millis(1000)).is_empty());
        assert_eq!(conversation.messages().len(), 2);

        assert_eq!(
            conversation.advance(Duration::from_millis(500)),
            vec![ChatTopic::ProtectionScore]
        );
        assert!(!conversation.is_typing());
        let last = conversation.messages().last().expect("reply");
        assert_eq!(last.author, ChatAuthor::Assistant);
        assert!(last.text.contains("60-79%"));
    }

    #[test]
    fn zero_delay_resolves_during_submit() {
        let mut conversation = ChatConversation::new(Duration::ZERO);

        assert!(conversation.submit("xyz123").is_none());

        assert!(!conversation.is_typing());
        assert_eq!(conversation.messages().len(), 3);
        assert!(conversation.messages()[2].text.contains("xyz123"));
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut conversation = ChatConversation::new(Duration::from_millis(10));

        assert!(conversation.submit("   ").is_none());
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn message_sent_while_typing_is_queued_and_answered() {
        let mut conversation = ChatConversation::new(Duration::from_millis(1500));
        conversation.submit("help");
        conversation.advance(Duration::from_millis(1000));
        conversation
            .input_mut()
            .set_text("what is a protection score");

        assert!(conversation.submit_input().is_some());
        assert!(conversation.input().is_empty());
        assert_eq!(conversation.messages().len(), 3);

        assert_eq!(
            conversation.advance(Duration::from_millis(500)),
            vec![ChatTopic::Help]
        );
        assert!(conversation.is_typing());
        assert_eq!(
            conversation.advance(Duration::from_millis(1000)),
            vec![ChatTopic::ProtectionScore]
        );

        let agent: Vec<_> = texts(&conversation)
            .into_iter()
            .filter(|(author, _)| *author == ChatAuthor::Agent)
            .map(|(_, text)| text)
            .collect();
        assert_eq!(agent, vec!["help", "what is a protection score"]);
        assert!(!conversation.is_typing());
    }

    #[test]
    fn blank_input_line_is_left_alone() {
        let mut conversation = ChatConversation::new(Duration::from_millis(10));
        conversation.input_mut().set_text("  ");

        assert!(conversation.submit_input().is_none());
        assert_eq!(conversation.input().text(), "  ");
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn submit_input_drains_the_input_line() {
        let mut conversation = ChatConversation::new(Duration::from_millis(10));
        conversation.input_mut().set_text("how do I send an assessment");

        conversation.submit_input();

        assert!(conversation.input().is_empty());
        assert_eq!(
            conversation.advance(Duration::from_millis(10)),
            vec![ChatTopic::SendAssessment]
        );
    }
}
