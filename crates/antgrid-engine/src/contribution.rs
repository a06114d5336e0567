//! Contribution-calendar input data.
//!
//! The fetch itself lives outside this crate. What arrives here is a flat
//! list of `(x, y, level)` triples: `x` is the week column, `y` the
//! weekday row, `level` the activity quartile `0..=4`.

/// One day of contribution activity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContributionCell {
    /// Week column. Out-of-range values are dropped at seeding time.
    pub x: i64,
    /// Weekday row. Out-of-range values are dropped at seeding time.
    pub y: i64,
    /// Activity level. `<= 0` leaves the cell empty, `> 4` is capped at 4.
    pub level: i64,
    /// Calendar date, if the source provided one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub date: Option<String>,
    /// Raw contribution count for the day.
    #[cfg_attr(feature = "serde", serde(default))]
    pub count: u32,
}

impl ContributionCell {
    /// A bare triple with no date or count.
    pub fn new(x: i64, y: i64, level: i64) -> Self {
        Self {
            x,
            y,
            level,
            date: None,
            count: 0,
        }
    }
}

/// Activity quartile as reported by the GitHub GraphQL calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContributionLevel {
    /// `NONE`
    None,
    /// `FIRST_QUARTILE`
    FirstQuartile,
    /// `SECOND_QUARTILE`
    SecondQuartile,
    /// `THIRD_QUARTILE`
    ThirdQuartile,
    /// `FOURTH_QUARTILE`
    FourthQuartile,
}

impl ContributionLevel {
    /// Parse the GraphQL enum name. Unrecognised names count as no activity.
    pub fn from_graphql(name: &str) -> Self {
        match name {
            "FIRST_QUARTILE" => Self::FirstQuartile,
            "SECOND_QUARTILE" => Self::SecondQuartile,
            "THIRD_QUARTILE" => Self::ThirdQuartile,
            "FOURTH_QUARTILE" => Self::FourthQuartile,
            _ => Self::None,
        }
    }

    /// Numeric level `0..=4`.
    pub fn value(self) -> i64 {
        self as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graphql_names_map_to_levels() {
        assert_eq!(ContributionLevel::from_graphql("NONE").value(), 0);
        assert_eq!(ContributionLevel::from_graphql("FIRST_QUARTILE").value(), 1);
        assert_eq!(ContributionLevel::from_graphql("SECOND_QUARTILE").value(), 2);
        assert_eq!(ContributionLevel::from_graphql("THIRD_QUARTILE").value(), 3);
        assert_eq!(ContributionLevel::from_graphql("FOURTH_QUARTILE").value(), 4);
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(
            ContributionLevel::from_graphql("fourth_quartile"),
            ContributionLevel::None
        );
    }
}
