use regex::Regex;

/// Longest a video can run and still count as a Short.
pub const SHORT_MAX_SECONDS: u64 = 60;

lazy_static! {
    // ISO-8601 duration as the Data API reports it, each component optional
    static ref ISO_DURATION_RE: Regex =
        Regex::new(r"\APT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap();
}

/// e.g. PT1H2M3S -> 3723 seconds. Anything that doesn't look like an
/// ISO-8601 duration counts as zero.
pub fn duration_to_seconds(duration: &str) -> u64 {
    let caps = match ISO_DURATION_RE.captures(duration) {
        Some(caps) => caps,
        None => return 0,
    };
    let hours = caps.get(1).and_then(|m| m.as_str().parse::<u64>().ok()).unwrap_or(0);
    let minutes = caps.get(2).and_then(|m| m.as_str().parse::<u64>().ok()).unwrap_or(0);
    let seconds = caps.get(3).and_then(|m| m.as_str().parse::<u64>().ok()).unwrap_or(0);

    hours * 3600 + minutes * 60 + seconds
}

pub fn is_short(seconds: u64) -> bool {
    seconds <= SHORT_MAX_SECONDS
}
