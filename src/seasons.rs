/// Seasons covered by the streak history, most recent first.
pub const SEASONS: &[&str] = &[
    "2025-26", "2024-25", "2023-24", "2022-23", "2021-22", "2020-21", "2019-20", "2018-19",
    "2017-18", "2016-17", "2015-16", "2014-15", "2013-14", "2012-13", "2011-12", "2010-11",
    "2009-10", "2008-09", "2007-08", "2006-07", "2005-06",
];

/// Ordered list of known seasons. Position 0 is the most recent season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonCatalog {
    seasons: Vec<String>,
}

impl Default for SeasonCatalog {
    fn default() -> Self {
        Self::new(SEASONS.iter().map(|s| s.to_string()))
    }
}

impl SeasonCatalog {
    pub fn new(seasons: impl IntoIterator<Item = String>) -> Self {
        let mut out: Vec<String> = Vec::new();
        for season in seasons {
            if !out.contains(&season) {
                out.push(season);
            }
        }
        Self { seasons: out }
    }

    pub fn position(&self, season: &str) -> Option<usize> {
        self.seasons.iter().position(|s| s == season)
    }

    pub fn contains(&self, season: &str) -> bool {
        self.position(season).is_some()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.seasons.iter().map(|s| s.as_str())
    }

    pub fn latest(&self) -> Option<&str> {
        self.seasons.first().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}

/// Two-digit label for chart axes: "2019-20" -> "19".
pub fn short_season_label(season: &str) -> &str {
    let start = season.split('-').next().unwrap_or(season);
    start
        .len()
        .checked_sub(2)
        .and_then(|from| start.get(from..))
        .unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_most_recent_first() {
        let catalog = SeasonCatalog::default();
        assert_eq!(catalog.len(), 21);
        assert_eq!(catalog.latest(), Some("2025-26"));
        assert_eq!(catalog.position("2024-25"), Some(1));
        assert_eq!(catalog.position("2005-06"), Some(20));
        assert_eq!(catalog.position("1999-00"), None);
    }

    #[test]
    fn catalog_drops_duplicates() {
        let catalog = SeasonCatalog::new(["a".to_string(), "b".to_string(), "a".to_string()]);
        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn short_label_uses_start_year() {
        assert_eq!(short_season_label("2019-20"), "19");
        assert_eq!(short_season_label("x"), "x");
    }
}
