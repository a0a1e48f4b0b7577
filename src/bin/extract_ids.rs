extern crate yt_shorts_export;

use std::io::{self, BufRead};
use yt_shorts_export::extract::extract_video_id;

// Dry-run helper: print the video IDs an input file would contribute,
// without touching the API. Lines with no recognizable URL print nothing.
fn main() {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.unwrap();
        if let Some(id) = extract_video_id(&line) {
            println!("{}", id);
        }
    }
}
