extern crate yt_shorts_export;

use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

use yt_shorts_export::config::Args;
use yt_shorts_export::config::Rtd;
use yt_shorts_export::extract;
use yt_shorts_export::http;
use yt_shorts_export::output;
use yt_shorts_export::output::VideoRecord;

#[derive(StructOpt, Debug)]
#[structopt(name = "yt-shorts-export")]
/// Fetch YouTube video metadata and export Shorts candidates to CSV
struct Opt {
    /// Show extra information
    #[structopt(short = "v", long)]
    verbose: bool,

    /// File to read configuration from
    #[structopt(short = "c", long, parse(from_os_str))]
    conf: Option<PathBuf>,

    /// File containing one video URL per line
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// CSV file to write
    #[structopt(short = "o", long, default_value = "shorts.csv", parse(from_os_str))]
    output: PathBuf,
}

fn main() {
    let opt = Opt::from_args();

    let args = Args {
        flag_verbose: opt.verbose,
        flag_conf: opt.conf,
        input: opt.input,
        output: opt.output,
    };

    // get a run-time configuration data structure
    let rtd: Rtd = Rtd::from_args(args).unwrap_or_else(|err| {
        eprintln!("Error loading configuration: {}", err);
        process::exit(1);
    });

    println!("Using configuration: {}", rtd.paths.conf.display());
    if rtd.args.flag_verbose {
        println!("\n[parameters]\n{}", rtd.conf.params);
    }

    let ids = extract::read_video_ids(&rtd.args.input).unwrap_or_else(|err| {
        eprintln!("Error reading {}: {}", rtd.args.input.display(), err);
        process::exit(1);
    });
    if ids.is_empty() {
        eprintln!("No video IDs found in {}", rtd.args.input.display());
        process::exit(1);
    }
    if rtd.args.flag_verbose {
        println!("Found {} video IDs", ids.len());
    }

    let items = http::fetch_metadata(&rtd.conf, &ids).unwrap_or_else(|err| {
        eprintln!("Error fetching metadata: {}", err);
        process::exit(1);
    });

    let records: Vec<VideoRecord> = items.into_iter().map(VideoRecord::from).collect();

    output::write_csv(&rtd.args.output, &records).unwrap_or_else(|err| {
        eprintln!("Error writing {}: {}", rtd.args.output.display(), err);
        process::exit(1);
    });

    println!("Done, {} videos written to {}", records.len(), rtd.args.output.display());
}
