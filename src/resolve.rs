const TRACK_MARKER: &str = "spotify.com/track/";

/// Pulls a bare track ID out of whatever the user pasted. Full track URLs
/// carry the ID between the `/track/` segment and any query string; anything
/// else is assumed to already be an ID and passed through untouched.
pub fn extract_track_id(input: &str) -> &str {
    match input.split_once(TRACK_MARKER) {
        Some((_, rest)) => rest.split('?').next().unwrap_or(rest),
        None => input,
    }
}
