extern crate csv;
extern crate directories;
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate lazy_static;
extern crate regex;
extern crate reqwest;
#[macro_use]
extern crate serde_derive;
extern crate toml;

pub mod config;
pub mod duration;
pub mod error;
pub mod extract;
pub mod http;
pub mod output;
