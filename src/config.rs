/*
 * Application configuration
 *
 */
use std::fs;
use std::fs::File;
use std::io::Write;
use toml;
use std::path::{Path, PathBuf};
use failure::Error;
use std::fmt;
use directories::{ProjectDirs, BaseDirs};

use super::error::ExportError;

// serde structures defining the configuration file structure
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    pub api_key: String,
    #[serde(rename = "parameters")]
    pub params: Parameters,
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub user_agent: String,
    pub request_delay_ms: u64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            request_delay_ms: 300,
        }
    }
}

impl Conf {
    // load configuration TOML from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let conf = fs::read_to_string(path.as_ref())?;
        let conf: Conf = toml::de::from_str(&conf)?;
        Ok(conf)
    }

    // write configuration to a file
    pub fn write(self, path: impl AsRef<Path>) -> Result<(), Error> {
        let mut file = File::create(path)?;
        file.write_all(toml::ser::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

impl Default for Conf {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            params: Parameters::default(),
        }
    }
}

// command-line arguments, as collected by the binary
#[derive(Default)]
pub struct Args {
    pub flag_verbose: bool,
    pub flag_conf: Option<PathBuf>,
    pub input: PathBuf,
    pub output: PathBuf,
}

// run time data structure. this is used to pass around runtime data
// where it's needed, including command line arguments, configuration
// file settings, and any parameters defined based on both of these
// sources
#[derive(Default)]
pub struct Rtd {
    // paths
    pub paths: Paths,
    // configuration file data
    pub conf: Conf,
    // command-line arguments
    pub args: Args,
}

#[derive(Default)]
pub struct Paths {
    pub conf: PathBuf,
}

impl Rtd {
    pub fn from_args(args: Args) -> Result<Self, Error> {
        let mut rtd = Rtd::default();

        // move command line arguments
        rtd.args = args;

        // get a config file path
        let dirs = ProjectDirs::from("org", "", "yt-shorts-export").unwrap();
        rtd.paths.conf = match rtd.args.flag_conf {
            // configuration file path specified as command line parameter
            Some(ref cp) => expand_tilde(cp),
            // default path
            _ => dirs.config_dir().join("config.toml")
        };

        // check if config directory exists, create it if it doesn't
        create_dir_if_missing(rtd.paths.conf.parent().unwrap())?;

        // create a default config if it doesn't exist
        if !rtd.paths.conf.exists() {
            eprintln!(
                "Configuration `{}` doesn't exist, creating default",
                rtd.paths.conf.to_str().unwrap()
            );
            eprintln!(
                "You should add your YouTube Data API key to this file"
            );
            Conf::default().write(&rtd.paths.conf)?;
        }

        // load config file
        rtd.conf = Conf::load(&rtd.paths.conf)?;

        if rtd.conf.api_key.is_empty() {
            return Err(ExportError::new(format!(
                "No API key configured, add one to {}",
                rtd.paths.conf.display()
            )).into());
        }

        Ok(rtd)
    }
}

// implementation of Display trait for printable configuration sections
// (the API key is not one of them)
macro_rules! impl_display {
    ($($t:ty),+) => {
        $(impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", toml::ser::to_string(self).unwrap())
            }
        })+
    }
}
impl_display!(Parameters);

fn create_dir_if_missing(dir: &Path) -> Result<bool, Error> {
    let pdir = dir.to_str().unwrap();
    let exists = pdir.is_empty() || dir.exists();
    if !exists {
        eprintln!("Directory `{}` doesn't exist, creating it", pdir);
        fs::create_dir_all(dir)?;
    }
    Ok(exists)
}

fn expand_tilde(path: &Path) -> PathBuf {
    match (BaseDirs::new(), path.strip_prefix("~")) {
        (Some(bd), Ok(stripped)) => bd.home_dir().join(stripped),
        _ => path.to_owned(),
    }
}
