//! Season buckets derived from the day of the year

use std::fmt;

use chrono::NaiveDate;

/// First day of the monsoon window (May 31 in a non-leap year)
pub const MONSOON_START: u16 = 151;
/// Last day of the monsoon window (August 31)
pub const MONSOON_END: u16 = 243;
/// First day of the post-monsoon window (September 1)
pub const POST_MONSOON_START: u16 = 244;
/// Last day of the post-monsoon window (November 30)
pub const POST_MONSOON_END: u16 = 334;

/// Season label attached to a dengue record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Season {
    Monsoon,
    PostMonsoon,
    Other,
}

impl Season {
    /// All seasons in reporting order
    pub const ALL: [Season; 3] = [Season::Monsoon, Season::PostMonsoon, Season::Other];

    /// Bucket a day of the year into a season
    #[must_use]
    pub fn from_day_of_year(day: u16) -> Self {
        match day {
            MONSOON_START..=MONSOON_END => Season::Monsoon,
            POST_MONSOON_START..=POST_MONSOON_END => Season::PostMonsoon,
            _ => Season::Other,
        }
    }

    /// Label written to the output table
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Season::Monsoon => "Monsoon",
            Season::PostMonsoon => "Post-Monsoon",
            Season::Other => "Other",
        }
    }

    /// Calendar span of the season, e.g. "Sep 01 - Nov 30"
    ///
    /// `Other` wraps around the year end and has no single span.
    #[must_use]
    pub fn calendar_span(self) -> Option<String> {
        let (start, end) = match self {
            Season::Monsoon => (MONSOON_START, MONSOON_END),
            Season::PostMonsoon => (POST_MONSOON_START, POST_MONSOON_END),
            Season::Other => return None,
        };
        // Spans are rendered against a non-leap year
        let first = NaiveDate::from_yo_opt(2023, u32::from(start))?;
        let last = NaiveDate::from_yo_opt(2023, u32::from(end))?;
        Some(format!("{} - {}", first.format("%b %d"), last.format("%b %d")))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
