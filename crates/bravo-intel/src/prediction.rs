/// Turns the expected days until the next sale into urgency text.
///
/// Both estimates must be known; otherwise the answer is "Hard to predict".
/// Each bucket's upper edge is inclusive, so exactly 3 days reads
/// "Expected back in ~3 days" and exactly 7 reads "Expected back within a week".
#[must_use]
pub fn prediction_text(expected_days: Option<i32>, days_since: Option<i32>) -> String {
    let (Some(expected), Some(_)) = (expected_days, days_since) else {
        return "Hard to predict".to_string();
    };

    match expected {
        i32::MIN..=0 => "Could be any day now".to_string(),
        1..=3 => format!("Expected back in ~{expected} days"),
        4..=7 => "Expected back within a week".to_string(),
        8..=14 => format!("Probably ~{expected} days away"),
        _ => format!("Check back in ~{expected} days"),
    }
}
