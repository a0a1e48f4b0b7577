use std::fs;
use std::path::Path;
use failure::Error;
use itertools::Itertools;
use regex::Regex;

lazy_static! {
    // the three URL shapes that carry a video ID: watch?v=, /shorts/, youtu.be/
    static ref VIDEO_ID_RE: Regex =
        Regex::new(r"(?:v=|/shorts/|youtu\.be/)([A-Za-z0-9_-]{11})").unwrap();
    static ref HASHTAG_RE: Regex = Regex::new(r"#\w+").unwrap();
}

/// Pull the 11-character video ID out of a line of text, if any of the
/// recognized URL shapes appears in it.
pub fn extract_video_id(line: &str) -> Option<String> {
    VIDEO_ID_RE.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract IDs from raw lines, dropping lines with no recognizable URL
/// and duplicate IDs. First occurrence wins; first-seen order is kept.
pub fn collect_video_ids<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter()
        .filter_map(|line| extract_video_id(line.trim()))
        .unique()
        .collect()
}

pub fn read_video_ids(path: &Path) -> Result<Vec<String>, Error> {
    let contents = fs::read_to_string(path)?;
    Ok(collect_video_ids(contents.lines()))
}

/// All #tags in a description, space-joined in order of appearance.
pub fn extract_hashtags(description: &str) -> String {
    HASHTAG_RE.find_iter(description)
        .map(|m| m.as_str())
        .join(" ")
}
