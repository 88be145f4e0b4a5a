//! Deep-link construction for handing a plan to a client.
//!
//! Pure string building, no network: the dashboard renders these as
//! buttons that open the corresponding app.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

fn encode(text: &str) -> String {
    utf8_percent_encode(text, NON_ALPHANUMERIC).to_string()
}

/// Builds the opening line plus plan body sent to the client.
pub fn plan_message(client_username: &str, plan_text: &str) -> String {
    format!("Hi {client_username}, here is your new plan:\n\n{plan_text}")
}

/// WhatsApp deep link for a phone number, or `None` without one.
///
/// The wa.me scheme wants bare digits: the leading "+", spaces and any
/// other punctuation are dropped.
pub fn whatsapp_link(phone: &str, message: &str) -> Option<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("https://wa.me/{digits}?text={}", encode(message)))
}

/// Mailto link with encoded subject and body, or `None` for a
/// missing/implausible address.
pub fn mailto_link(email: &str, subject: &str, body: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return None;
    }
    Some(format!(
        "mailto:{email}?subject={}&body={}",
        encode(subject),
        encode(body)
    ))
}
