//! Scrubbing for text that may leave the process: panic output and log fields.
//! Credentials are blanked, client contact details are masked.

use std::panic;

const REDACTED: &str = "[REDACTED]";
const PHONE: &str = "[PHONE]";

const SENSITIVE_MARKERS: [&str; 5] = ["password", "passcode", "secret", "token", "ssn"];

/// Fewest digits a run of number-like words needs to count as a phone number.
const PHONE_MIN_DIGITS: usize = 7;

pub fn redact_text(input: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut phone_run: Vec<&str> = Vec::new();

    for chunk in input.split_whitespace() {
        if is_phone_fragment(chunk) {
            phone_run.push(chunk);
            continue;
        }
        flush_phone_run(&mut phone_run, &mut out);
        out.push(redact_chunk(chunk));
    }
    flush_phone_run(&mut phone_run, &mut out);

    out.join(" ")
}

/// Keeps the first letter of the mailbox and the whole domain.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        _ => REDACTED.to_owned(),
    }
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        match panic_info.location() {
            Some(location) => eprintln!(
                "everly panic: {scrubbed} at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ),
            None => eprintln!("everly panic: {scrubbed}"),
        }
    }));
}

fn flush_phone_run(run: &mut Vec<&str>, out: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    let digits: usize = run
        .iter()
        .map(|chunk| chunk.chars().filter(char::is_ascii_digit).count())
        .sum();
    if digits >= PHONE_MIN_DIGITS {
        out.push(PHONE.to_owned());
    } else {
        out.extend(run.iter().map(|chunk| redact_chunk(chunk)));
    }
    run.clear();
}

fn is_phone_fragment(chunk: &str) -> bool {
    chunk.chars().any(|ch| ch.is_ascii_digit())
        && chunk
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '(' | ')' | '-' | '.'))
}

fn redact_chunk(chunk: &str) -> String {
    let lowered = chunk.to_ascii_lowercase();
    if SENSITIVE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
    {
        return REDACTED.to_owned();
    }

    let trimmed =
        chunk.trim_matches(|ch: char| matches!(ch, '"' | '\'' | ',' | '(' | ')' | '<' | '>'));
    if trimmed.contains('@') {
        return chunk.replacen(trimmed, &mask_email(trimmed), 1);
    }

    if looks_like_secret_value(chunk) {
        REDACTED.to_owned()
    } else {
        chunk.to_owned()
    }
}

fn looks_like_secret_value(value: &str) -> bool {
    let cleaned = value.trim_matches(|ch: char| !ch.is_ascii_alphanumeric());

    let has_mixed = cleaned.chars().any(|ch| ch.is_ascii_alphabetic())
        && cleaned.chars().any(|ch| ch.is_ascii_digit());

    cleaned.len() >= 6 && (cleaned.chars().all(|ch| ch.is_ascii_digit()) || has_mixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_text_scrubs_sensitive_fragments() {
        let input = "wrong password=superSecret99 token=abc123 pin 123456";
        let output = redact_text(input);

        assert!(!output.contains("superSecret99"));
        assert!(!output.contains("abc123"));
        assert!(!output.contains("123456"));
        assert!(output.contains("[REDACTED]"));
    }

    #[test]
    fn redact_text_keeps_ordinary_words() {
        assert_eq!(
            redact_text("client list failed to render"),
            "client list failed to render"
        );
    }

    #[test]
    fn redact_text_hides_login_password_echo() {
        let output = redact_text("login rejected password: hunter22");

        assert_eq!(output, "login rejected [REDACTED] [REDACTED]");
    }

    #[test]
    fn client_contact_details_are_masked() {
        let output =
            redact_text("email to \"john.smith@email.com\" failed, call +1 (555) 123-4567");

        assert_eq!(output, "email to \"j***@email.com\" failed, call [PHONE]");
    }

    #[test]
    fn short_numbers_are_not_phone_numbers() {
        assert_eq!(redact_text("page 2 of 3"), "page 2 of 3");
    }

    #[test]
    fn mask_email_rejects_addresses_without_a_domain() {
        assert_eq!(mask_email("sarah.johnson@email.com"), "s***@email.com");
        assert_eq!(mask_email("@email.com"), REDACTED);
        assert_eq!(mask_email("agent@localhost"), REDACTED);
    }
}
