use std::sync::OnceLock;

use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex"))
}

fn mobile_regex() -> &'static Regex {
    static MOBILE: OnceLock<Regex> = OnceLock::new();
    MOBILE.get_or_init(|| Regex::new(r"^\d{10}$").expect("mobile regex"))
}

pub fn non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

pub fn is_mobile(value: &str) -> bool {
    mobile_regex().is_match(value)
}

pub fn parse_amount(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

/// Money fields arrive as free text; "valid" means it parses and is > 0.
pub fn is_positive_amount(value: &str) -> bool {
    parse_amount(value).map(|v| v > 0.0).unwrap_or(false)
}
