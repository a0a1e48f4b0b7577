use std::fs::File;
use std::io;
use std::path::Path;
use csv::WriterBuilder;
use failure::Error;

use super::duration;
use super::extract;
use super::http::VideoItem;

// column order of the output file; keep in step with VideoRecord's fields
const HEADER: [&str; 10] = [
    "video_id",
    "title",
    "published_at",
    "views",
    "likes",
    "comments",
    "duration_seconds",
    "is_short",
    "hashtags",
    "video_url",
];

/// One output row, fields in HEADER order. Counters stay the API's
/// decimal strings; absent values serialize as empty cells.
#[derive(Debug, Serialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: Option<String>,
    pub published_at: Option<String>,
    pub views: Option<String>,
    pub likes: Option<String>,
    pub comments: Option<String>,
    pub duration_seconds: u64,
    pub is_short: bool,
    pub hashtags: String,
    pub video_url: String,
}

impl From<VideoItem> for VideoRecord {
    fn from(item: VideoItem) -> Self {
        let snippet = item.snippet.unwrap_or_default();
        let stats = item.statistics.unwrap_or_default();
        let content = item.content_details.unwrap_or_default();

        let duration_seconds = content.duration
            .as_ref()
            .map_or(0, |d| duration::duration_to_seconds(d));
        let hashtags = snippet.description
            .as_ref()
            .map_or_else(String::new, |d| extract::extract_hashtags(d));
        let video_url = format!("https://www.youtube.com/shorts/{}", item.id);

        VideoRecord {
            video_id: item.id,
            title: snippet.title,
            published_at: snippet.published_at,
            views: stats.view_count,
            likes: stats.like_count,
            comments: stats.comment_count,
            duration_seconds,
            is_short: duration::is_short(duration_seconds),
            hashtags,
            video_url,
        }
    }
}

/// Write the header row and one row per record, in the order given.
pub fn write_csv(path: &Path, records: &[VideoRecord]) -> Result<(), Error> {
    write_records(File::create(path)?, records)
}

fn write_records<W: io::Write>(wtr: W, records: &[VideoRecord]) -> Result<(), Error> {
    // the header row is written even when there are no records
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(wtr);
    writer.write_record(&HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ContentDetails, Snippet, Statistics};

    fn full_item() -> VideoItem {
        VideoItem {
            id: "dQw4w9WgXcQ".to_string(),
            snippet: Some(Snippet {
                title: Some("Video title".to_string()),
                description: Some("Check this out #fun #shorts!".to_string()),
                published_at: Some("2024-05-01T12:00:00Z".to_string()),
            }),
            statistics: Some(Statistics {
                view_count: Some("1234".to_string()),
                like_count: Some("56".to_string()),
                comment_count: Some("7".to_string()),
            }),
            content_details: Some(ContentDetails {
                duration: Some("PT59S".to_string()),
            }),
        }
    }

    fn bare_item(id: &str) -> VideoItem {
        VideoItem {
            id: id.to_string(),
            snippet: None,
            statistics: None,
            content_details: None,
        }
    }

    #[test]
    fn test_record_from_full_item() {
        let record = VideoRecord::from(full_item());
        assert_eq!(record.video_id, "dQw4w9WgXcQ");
        assert_eq!(record.title.as_deref(), Some("Video title"));
        assert_eq!(record.published_at.as_deref(), Some("2024-05-01T12:00:00Z"));
        assert_eq!(record.views.as_deref(), Some("1234"));
        assert_eq!(record.likes.as_deref(), Some("56"));
        assert_eq!(record.comments.as_deref(), Some("7"));
        assert_eq!(record.duration_seconds, 59);
        assert!(record.is_short);
        assert_eq!(record.hashtags, "#fun #shorts");
        assert_eq!(record.video_url, "https://www.youtube.com/shorts/dQw4w9WgXcQ");
    }

    #[test]
    fn test_record_from_bare_item_degrades_to_defaults() {
        let record = VideoRecord::from(bare_item("AAAAAAAAAAA"));
        assert_eq!(record.title, None);
        assert_eq!(record.views, None);
        assert_eq!(record.duration_seconds, 0);
        assert!(record.is_short);
        assert_eq!(record.hashtags, "");
    }

    #[test]
    fn test_long_video_is_not_short() {
        let mut item = full_item();
        item.content_details = Some(ContentDetails {
            duration: Some("PT1M1S".to_string()),
        });
        let record = VideoRecord::from(item);
        assert_eq!(record.duration_seconds, 61);
        assert!(!record.is_short);
    }

    #[test]
    fn test_csv_header_and_rows() {
        let records = vec![
            VideoRecord::from(full_item()),
            VideoRecord::from(bare_item("AAAAAAAAAAA")),
        ];
        let mut buf = Vec::new();
        write_records(&mut buf, &records).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "video_id,title,published_at,views,likes,comments,\
             duration_seconds,is_short,hashtags,video_url"
        );
        assert_eq!(
            lines.next().unwrap(),
            "dQw4w9WgXcQ,Video title,2024-05-01T12:00:00Z,1234,56,7,\
             59,true,#fun #shorts,https://www.youtube.com/shorts/dQw4w9WgXcQ"
        );
        // absent fields become empty cells, zero duration still flags short
        assert_eq!(
            lines.next().unwrap(),
            "AAAAAAAAAAA,,,,,,0,true,,https://www.youtube.com/shorts/AAAAAAAAAAA"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_result_still_writes_header() {
        // a valid run can return no items (e.g. every ID unknown upstream)
        let mut buf = Vec::new();
        write_records(&mut buf, &[]).unwrap();
        let out = String::from_utf8(buf).unwrap();

        let mut lines = out.lines();
        assert_eq!(
            lines.next().unwrap(),
            "video_id,title,published_at,views,likes,comments,\
             duration_seconds,is_short,hashtags,video_url"
        );
        assert_eq!(lines.next(), None);
    }
}
