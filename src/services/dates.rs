/// Every export filename is assumed to belong to this year. Two of the
/// three recognized shapes carry their own year digits and those are
/// ignored, not checked against this constant.
pub const ASSUMED_YEAR: &str = "2025";

/// Maps a CSV file stem to a `YYYY-MM-DD` date key, or `None` when the
/// stem matches no recognized shape (such files are excluded from the
/// import, silently). The result is used as-is for sorting and as the
/// persisted date key; no calendar validation happens here.
///
/// Recognized shapes:
/// - `10012025` (MMDDYYYY, trailing year digits discarded)
/// - `82125`    (MDDYY, single-digit months only)
/// - `8.19.25`  (M.D.Y, third segment ignored)
pub fn date_from_filename(stem: &str) -> Option<String> {
    if stem.len() == 8 && stem.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("{}-{}-{}", ASSUMED_YEAR, &stem[..2], &stem[2..4]));
    }

    if stem.len() == 5 && stem.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("{}-0{}-{}", ASSUMED_YEAR, &stem[..1], &stem[1..3]));
    }

    if stem.contains('.') {
        let mut segments = stem.split('.');
        let month = segments.next()?;
        let day = segments.next()?;
        return Some(format!("{}-{:0>2}-{:0>2}", ASSUMED_YEAR, month, day));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_digit_shape() {
        assert_eq!(date_from_filename("10012025"), Some("2025-10-01".into()));
        // trailing digits are dropped without being checked against the year
        assert_eq!(date_from_filename("09301999"), Some("2025-09-30".into()));
    }

    #[test]
    fn five_digit_shape() {
        assert_eq!(date_from_filename("82125"), Some("2025-08-21".into()));
        assert_eq!(date_from_filename("90125"), Some("2025-09-01".into()));
    }

    #[test]
    fn dotted_shape() {
        assert_eq!(date_from_filename("8.19.25"), Some("2025-08-19".into()));
        assert_eq!(date_from_filename("10.2.25"), Some("2025-10-02".into()));
    }

    #[test]
    fn unrecognized_shapes_yield_none() {
        assert_eq!(date_from_filename("notadate"), None);
        assert_eq!(date_from_filename("2025-08-19"), None);
        assert_eq!(date_from_filename("821"), None);
        assert_eq!(date_from_filename("8212025a"), None);
        assert_eq!(date_from_filename(""), None);
    }

    #[test]
    fn no_calendar_validation() {
        // month 13 passes straight through, matching the persisted key rule
        assert_eq!(date_from_filename("13012025"), Some("2025-13-01".into()));
    }
}
