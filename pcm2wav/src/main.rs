use std::{
    fs::{self, File},
    io::BufWriter,
    process::exit,
};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use pcmwav::{encoder::encode_pcm, DEFAULT_SAMPLE_RATE, NUM_CHANNELS};

#[derive(Parser, Debug)]
#[command(version)]
/// Packages raw 16-bit PCM data into a playable wav file
pub struct Args {
    /// Path to the raw PCM file to package
    pcm_path: String,
    /// Path to the output wav file
    #[arg(default_value = "output.wav")]
    wav_path: String,
    /// Sample rate of the PCM data in Hz
    #[arg(default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,
}

fn main() {
    let env = Env::new().default_filter_or("info");
    env_logger::init_from_env(env);
    // missing or malformed arguments exit with status 1, same as the other
    // failure paths; help and version output stay a success
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            exit(if e.use_stderr() { 1 } else { 0 });
        }
    };
    if let Err(e) = run(args) {
        error!("{e:#}");
        exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let payload = fs::read(&args.pcm_path)
        .with_context(|| format!("error reading input file {}", args.pcm_path))?;
    let payload_len = payload.len();
    info!(
        "packaging {} ({payload_len} bytes) at {} Hz",
        args.pcm_path, args.sample_rate
    );
    let wav = encode_pcm(payload, args.sample_rate)?;
    let mut out_file = BufWriter::new(
        File::create(&args.wav_path)
            .with_context(|| format!("error creating output file {}", args.wav_path))?,
    );
    if let Err(e) = wav.write_wav(&mut out_file) {
        // don't leave a truncated wav behind
        drop(out_file);
        let _ = fs::remove_file(&args.wav_path);
        return Err(e).with_context(|| format!("error writing output file {}", args.wav_path));
    }
    let channels = if NUM_CHANNELS == 1 { "mono" } else { "stereo" };
    println!(
        "wrote {payload_len} bytes of {channels} PCM at {} Hz to {}",
        args.sample_rate, args.wav_path
    );
    Ok(())
}
