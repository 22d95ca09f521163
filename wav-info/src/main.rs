use std::{
    fs::{self, File},
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::Context;
use binrw::io::BufReader;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use pcmwav::PcmWav;

#[derive(Parser)]
#[command(version)]
/// Reports channel count, sample rate and duration for every wav file in a
/// directory tree
pub struct Args {
    /// Directory to scan for wav files
    directory: PathBuf,
}

fn main() {
    let env = Env::new().default_filter_or("info");
    env_logger::init_from_env(env);
    let args = Args::parse();
    if !args.directory.is_dir() {
        error!("{:?} is not a directory", args.directory);
        exit(1);
    }
    if let Err(e) = scan_dir(&args.directory) {
        error!("{e:#}");
        exit(1);
    }
}

fn scan_dir(dir: &Path) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("error reading directory {dir:?}"))? {
        let entry = entry?;
        let path = entry.path();
        // file_type doesn't follow symlinks, so a link cycle can't recurse
        // forever
        if entry.file_type()?.is_dir() {
            scan_dir(&path)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"))
        {
            report_file(&path);
        }
    }
    Ok(())
}

fn report_file(path: &Path) {
    let mut reader = match File::open(path) {
        Ok(f) => BufReader::new(f),
        Err(e) => {
            error!("could not open {path:?}: {e}");
            return;
        }
    };
    match PcmWav::parse_reader(&mut reader) {
        Ok(wav) => info!(
            "{}: {} channel(s), {} Hz, {:.2} seconds",
            path.display(),
            wav.fmt.num_channels,
            wav.fmt.sample_rate,
            wav.duration_seconds()
        ),
        Err(e) => error!("error reading {path:?}: {e}"),
    }
}
