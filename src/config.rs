pub const COMPANY_NAME: &str = "GL Metal Works";
pub const COMPANY_LEGAL_NAME: &str = "GL Metal Works Ltd";
pub const PHONE: &str = "+357 99 123 456";
pub const PHONE_HREF: &str = "tel:+35799123456";
pub const EMAIL: &str = "info@glmetalworks.com";
pub const EMAIL_HREF: &str = "mailto:info@glmetalworks.com";
pub const LOCATION: &str = "Limassol, Cyprus";
pub const WORKING_HOURS: &str = "Mon - Fri: 8:00 - 17:00";
pub const FOUNDED_YEAR: i32 = 1990;

/// Milliseconds the contact form waits before confirming, standing in for
/// a real request until the quoting backend exists.
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1_000;
