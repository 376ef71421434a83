use crate::season_data::Venue;

/// Split a stored "own-opponent" score into its two textual parts.
/// A missing second part comes back empty.
pub fn split_score(score: &str) -> (&str, &str) {
    let mut parts = score.split('-');
    let own = parts.next().unwrap_or_default();
    let opponent = parts.next().unwrap_or_default();
    (own, opponent)
}

/// Orient a stored score so the home side's goals come first.
///
/// Home scores are already in that order. Away scores are stored from the away
/// team's perspective, so the two parts are swapped. Nothing is validated:
/// malformed strings come back as their (possibly swapped) textual parts.
pub fn format_display_score(score: &str, venue: Venue) -> String {
    if score.is_empty() {
        return String::new();
    }
    match venue {
        Venue::Home => score.to_string(),
        Venue::Away => {
            let (own, opponent) = split_score(score);
            format!("{opponent}-{own}")
        }
    }
}

/// Goals for and against from a stored score. Parts that are not unsigned
/// integers count as zero.
pub fn parse_goals(score: &str) -> (u32, u32) {
    if score.is_empty() {
        return (0, 0);
    }
    let (own, opponent) = split_score(score);
    (parse_goal_count(own), parse_goal_count(opponent))
}

fn parse_goal_count(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}
