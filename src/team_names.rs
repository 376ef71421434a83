use std::collections::HashMap;

use once_cell::sync::Lazy;

static SHORT_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Manchester United", "Man Utd"),
        ("Manchester City", "Man City"),
        ("Tottenham Hotspur", "Spurs"),
        ("Wolverhampton", "Wolves"),
        ("Brighton & Hove Albion", "Brighton"),
        ("West Ham United", "West Ham"),
        ("Newcastle United", "Newcastle"),
        ("Nottingham Forest", "Forest"),
        ("Sheffield United", "Sheff Utd"),
        ("Sheffield Wednesday", "Sheff Wed"),
        ("West Bromwich Albion", "West Brom"),
        ("AFC Bournemouth", "Bournemouth"),
        ("Queens Park Rangers", "QPR"),
        ("Huddersfield Town", "Huddersfield"),
        ("Leicester City", "Leicester"),
        ("Norwich City", "Norwich"),
        ("Swansea City", "Swansea"),
        ("Cardiff City", "Cardiff"),
        ("Stoke City", "Stoke"),
        ("Hull City", "Hull"),
        ("Ipswich Town", "Ipswich"),
        ("Luton Town", "Luton"),
        ("Birmingham City", "Birmingham"),
        ("Blackburn Rovers", "Blackburn"),
        ("Bolton Wanderers", "Bolton"),
        ("Wigan Athletic", "Wigan"),
        ("Charlton Athletic", "Charlton"),
        ("Leeds United", "Leeds"),
    ])
});

/// Compact display name for a club; unknown names come back unchanged.
pub fn short_name(team: &str) -> &str {
    SHORT_NAMES.get(team).copied().unwrap_or(team)
}
