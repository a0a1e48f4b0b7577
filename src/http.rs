use std::thread;
use std::time::Duration;
use failure::Error;
use reqwest::Client;
use reqwest::header::USER_AGENT;

use super::config::Conf;
use super::error::ExportError;

const VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";
const PART: &str = "snippet,statistics,contentDetails";

/// Upstream cap on the number of IDs per videos.list request.
pub const MAX_IDS_PER_REQUEST: usize = 50;

// videos.list response shape, reduced to the fields the export needs.
// Every block is optional; an item missing one still produces a record.
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: Option<Snippet>,
    pub statistics: Option<Statistics>,
    pub content_details: Option<ContentDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<String>,
}

// the API reports counters as decimal strings
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    pub duration: Option<String>,
}

/// Fetch metadata for all IDs, one request per batch of up to 50, in
/// order. Items come back concatenated in batch order, within a batch in
/// API response order. The first non-success response aborts the whole
/// fetch with the raw error body.
pub fn fetch_metadata(conf: &Conf, ids: &[String]) -> Result<Vec<VideoItem>, Error> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10)) // per read/write op
        .build()?;

    let mut items = Vec::new();
    for (i, batch) in ids.chunks(MAX_IDS_PER_REQUEST).enumerate() {
        // courtesy delay between successive requests
        if i > 0 {
            thread::sleep(Duration::from_millis(conf.params.request_delay_ms));
        }
        let page = fetch_batch(&client, conf, batch)?;
        items.extend(page.items);
    }
    Ok(items)
}

fn fetch_batch(client: &Client, conf: &Conf, batch: &[String]) -> Result<VideoListResponse, Error> {
    let ids = join_ids(batch);
    let mut resp = client.get(VIDEOS_ENDPOINT)
        .query(&[
            ("part", PART),
            ("id", ids.as_str()),
            ("key", conf.api_key.as_str()),
        ])
        .header(USER_AGENT, conf.params.user_agent.as_str())
        .send()?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        return Err(ExportError::new(format!(
            "metadata request failed ({}): {}", status, body
        )).into());
    }

    Ok(resp.json()?)
}

fn join_ids(batch: &[String]) -> String {
    batch.join(",")
}
