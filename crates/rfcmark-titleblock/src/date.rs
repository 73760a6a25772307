//! `<date>` element.

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Publication date. Each part is optional and omitted from the output when
/// absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleDate {
    pub year: Option<i32>,
    /// 1 = January.
    pub month: Option<u8>,
    pub day: Option<u8>,
}

impl TitleDate {
    /// Build a date from raw calendar fields.
    ///
    /// Zero or negative values mean "not supplied". A month above 12 or a day
    /// above 31 is treated the same way.
    pub fn from_parts(year: i32, month: i32, day: i32) -> Self {
        Self {
            year: (year > 0).then_some(year),
            month: u8::try_from(month).ok().filter(|m| (1..=12).contains(m)),
            day: u8::try_from(day).ok().filter(|d| (1..=31).contains(d)),
        }
    }
}

/// Full English name of a month, 1 = January.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// Write a self-closing `<date/>` element followed by a blank line.
///
/// The month is spelled out. A month without a name is left out.
pub fn write_date(out: &mut String, date: &TitleDate) {
    out.push_str("<date");
    if let Some(year) = date.year {
        out.push_str(&format!(" year=\"{year}\""));
    }
    if let Some(name) = date.month.and_then(month_name) {
        out.push_str(&format!(" month=\"{name}\""));
    }
    if let Some(day) = date.day {
        out.push_str(&format!(" day=\"{day}\""));
    }
    out.push_str("/>\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(date: &TitleDate) -> String {
        let mut out = String::new();
        write_date(&mut out, date);
        out
    }

    #[test]
    fn test_write_date_full() {
        assert_eq!(
            render(&TitleDate::from_parts(2015, 8, 27)),
            "<date year=\"2015\" month=\"August\" day=\"27\"/>\n\n"
        );
    }

    #[test]
    fn test_write_date_without_day() {
        assert_eq!(
            render(&TitleDate::from_parts(1997, 4, 0)),
            "<date year=\"1997\" month=\"April\"/>\n\n"
        );
    }

    #[test]
    fn test_write_date_all_zero() {
        assert_eq!(render(&TitleDate::from_parts(0, 0, 0)), "<date/>\n\n");
        assert_eq!(render(&TitleDate::default()), "<date/>\n\n");
    }

    #[test]
    fn test_from_parts_negative_is_absent() {
        assert_eq!(TitleDate::from_parts(-1, -4, -2), TitleDate::default());
    }

    #[test]
    fn test_from_parts_out_of_range_month_and_day() {
        let date = TitleDate::from_parts(2020, 13, 32);
        assert_eq!(date.year, Some(2020));
        assert_eq!(date.month, None);
        assert_eq!(date.day, None);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_write_date_skips_unnamed_month() {
        let date = TitleDate {
            year: Some(2001),
            month: Some(14),
            day: Some(3),
        };
        assert_eq!(render(&date), "<date year=\"2001\" day=\"3\"/>\n\n");
    }
}
