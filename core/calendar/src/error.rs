//! FILENAME: core/calendar/src/error.rs
//! PURPOSE: Error type for constructing calendar values.
//! CONTEXT: Date arithmetic itself is total over valid dates. These errors
//! only arise when a caller hands in something that is not a calendar date,
//! or when a shift would leave the representable range.

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    #[error("date out of supported range")]
    OutOfRange,

    #[error("cannot parse date: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = CalendarError::InvalidDate { year: 2021, month: 2, day: 30 };
        assert_eq!(err.to_string(), "invalid date: 2021-02-30");

        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
