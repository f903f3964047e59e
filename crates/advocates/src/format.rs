//! Small formatting helpers shared by the terminal renderer

use crate::text;

/// Substitute `{key}` placeholders in a text template
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
  values.iter().fold(template.to_string(), |acc, (key, value)| acc.replace(&format!("{{{key}}}"), value))
}

/// "Page 2 of 5"
pub fn page_of(current: usize, total: usize) -> String {
  let (current, total) = (current.to_string(), total.to_string());
  fill(text::PAGE_OF, &[("current", current.as_str()), ("total", total.as_str())])
}

/// "12 years exp."
pub fn years_experience(years: &str) -> String {
  fill(text::YEARS_EXPERIENCE, &[("years", years)])
}

/// Format a ten digit phone number as `(555) 123-4567`; anything else is returned as is
pub fn format_phone_number(phone: &str) -> String {
  let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
  if digits.len() != 10 {
    return phone.to_string();
  }

  format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..])
}
