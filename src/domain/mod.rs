//! Domain layer: core entities and business rules.

pub mod assessment;
pub mod chat_responder;
pub mod chat_state;
pub mod client;
pub mod client_list_state;
pub mod client_query;
pub mod composer_state;
pub mod dashboard;
pub mod email_template;
pub mod events;
pub mod help;
pub mod login;
pub mod report;
pub mod shell_state;
pub mod staged;
pub mod text_input_state;
pub mod text_width;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
