#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

extern crate chess_gallery;

mod console_view;
mod crawl_main;
mod network;

use std::path::PathBuf;

use anyhow::Context;
use chess_gallery::{GalleryConfig, PageKey};
use clap::{Command, arg, value_parser};


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config_arg = || {
        arg!(--config <config_file> "Path to a yaml-serialized GalleryConfig").required(false)
    };
    let matches = Command::new("Games gallery")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Games gallery console tool")
        .subcommand_required(true)
        .subcommand(
            Command::new("crawl")
                .about("Load month batches one after another, as scrolling the gallery would")
                .arg(config_arg())
                .arg(
                    arg!(--year <year> "First year to load (default: current)")
                        .value_parser(value_parser!(i32))
                        .requires("month")
                        .required(false),
                )
                .arg(
                    arg!(--month <month> "First month to load, 1-12 (default: current)")
                        .value_parser(value_parser!(i32).range(1..=12))
                        .requires("year")
                        .required(false),
                )
                .arg(
                    arg!(-'n' --pages <n> "Maximum number of batches to load")
                        .value_parser(value_parser!(u32).range(1..=1000))
                        .default_value("3"),
                )
                .arg(
                    arg!(--out <dir> "Directory to write fragments to (default: don't write)")
                        .value_parser(value_parser!(PathBuf))
                        .required(false),
                )
                .arg(arg!(
                    --walk "Continue with older months when the server reports no more games"
                )),
        )
        .subcommand(
            Command::new("url")
                .about("Print the API URL for a given month")
                .arg(config_arg())
                .arg(arg!(<year> "Year").value_parser(value_parser!(i32)))
                .arg(arg!(<month> "Month").value_parser(value_parser!(i32))),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("crawl", sub_matches)) => {
            let first_key = match (
                sub_matches.get_one::<i32>("year"),
                sub_matches.get_one::<i32>("month"),
            ) {
                (Some(&year), Some(&month)) => Some(PageKey::new(year, month)),
                _ => None,
            };
            crawl_main::run(crawl_main::CrawlConfig {
                gallery: read_config(sub_matches.get_one::<String>("config"))?,
                first_key,
                max_pages: *sub_matches.get_one::<u32>("pages").unwrap(),
                out_dir: sub_matches.get_one::<PathBuf>("out").cloned(),
                walk_months: sub_matches.get_flag("walk"),
            })
        }
        Some(("url", sub_matches)) => {
            let config = read_config(sub_matches.get_one::<String>("config"))?;
            let key = PageKey::new(
                *sub_matches.get_one::<i32>("year").unwrap(),
                *sub_matches.get_one::<i32>("month").unwrap(),
            );
            println!("{}", config.monthgames_url(key)?);
            Ok(())
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}

fn read_config(filename: Option<&String>) -> anyhow::Result<GalleryConfig> {
    let Some(filename) = filename else {
        return Ok(GalleryConfig::default());
    };
    let contents = std::fs::read_to_string(filename)
        .with_context(|| format!("Cannot read config file {filename}"))?;
    serde_yaml::from_str(&contents).with_context(|| format!("Cannot parse config file {filename}"))
}
