use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Daily start time chosen for a placement
    /// - Valid: "10 AM", "10:30 pm", "12 a. m.", "22:00", "7"
    /// - Invalid: "AM", "10 XM", "10:3"
    pub static ref SELECTED_TIME_REGEX: Regex =
        Regex::new(r"(?i)^\s*(\d{1,2})(?::(\d{2}))?\s*(a\.?\s*m\.?|p\.?\s*m\.?)?\s*$").unwrap();

    /// Day-count of a pricing tier, with an optional day/week/month unit
    /// - Valid: "3 DÍAS", "1 DIA", "1 MES", "2 MESES", "2 SEMANAS", "15"
    /// - Invalid: "DÍAS", "3 AÑOS", "-1"
    pub static ref PRICING_DAYS_REGEX: Regex =
        Regex::new(r"(?i)^\s*(\d{1,4})\s*(d[ií]as?|mes(?:es)?|semanas?)?\s*$").unwrap();

    /// Daily hour count of a pricing tier
    /// - Valid: "10 H", "24 HORAS", "1 hora", "12"
    /// - Invalid: "H", "10 min"
    pub static ref PRICING_HOURS_REGEX: Regex =
        Regex::new(r"(?i)^\s*(\d{1,2})\s*(h|hrs?|horas?)?\s*$").unwrap();

    /// Clock time recorded with a transaction, 24-hour or 12-hour
    /// - Valid: "09:00", "14:05:33", "2:05 PM", "2:05:00 p. m."
    /// - Invalid: "9", "25", "09-00"
    pub static ref TRANSACTION_TIME_REGEX: Regex =
        Regex::new(r"(?i)^\s*(\d{1,2}):(\d{2})(?::(\d{2}))?\s*(a\.?\s*m\.?|p\.?\s*m\.?)?\s*$")
            .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_time_regex() {
        assert!(SELECTED_TIME_REGEX.is_match("10 AM"));
        assert!(SELECTED_TIME_REGEX.is_match("10:30 pm"));
        assert!(SELECTED_TIME_REGEX.is_match("12 a. m."));
        assert!(SELECTED_TIME_REGEX.is_match("22:00"));
        assert!(!SELECTED_TIME_REGEX.is_match("AM"));
        assert!(!SELECTED_TIME_REGEX.is_match("10 XM"));
        assert!(!SELECTED_TIME_REGEX.is_match(""));
    }

    #[test]
    fn test_pricing_days_regex() {
        assert!(PRICING_DAYS_REGEX.is_match("3 DÍAS"));
        assert!(PRICING_DAYS_REGEX.is_match("3 días"));
        assert!(PRICING_DAYS_REGEX.is_match("1 DIA"));
        assert!(PRICING_DAYS_REGEX.is_match("1 MES"));
        assert!(PRICING_DAYS_REGEX.is_match("2 MESES"));
        assert!(PRICING_DAYS_REGEX.is_match("15"));
        assert!(!PRICING_DAYS_REGEX.is_match("DÍAS"));
        assert!(!PRICING_DAYS_REGEX.is_match("3 AÑOS"));
        assert!(!PRICING_DAYS_REGEX.is_match("-1"));
    }

    #[test]
    fn test_pricing_hours_regex() {
        assert!(PRICING_HOURS_REGEX.is_match("10 H"));
        assert!(PRICING_HOURS_REGEX.is_match("24 HORAS"));
        assert!(PRICING_HOURS_REGEX.is_match("12"));
        assert!(!PRICING_HOURS_REGEX.is_match("H"));
        assert!(!PRICING_HOURS_REGEX.is_match("10 min"));
    }

    #[test]
    fn test_transaction_time_regex() {
        assert!(TRANSACTION_TIME_REGEX.is_match("09:00"));
        assert!(TRANSACTION_TIME_REGEX.is_match("14:05:33"));
        assert!(TRANSACTION_TIME_REGEX.is_match("2:05 PM"));
        assert!(TRANSACTION_TIME_REGEX.is_match("2:05:00 p. m."));
        assert!(!TRANSACTION_TIME_REGEX.is_match("9"));
        assert!(!TRANSACTION_TIME_REGEX.is_match("09-00"));
    }
}
