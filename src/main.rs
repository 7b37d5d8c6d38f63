use std::{path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use radframe::{
    avec::{ByteCursor, Tag, reader::locate_with, scanner::DEFAULT_CHUNK_SIZE},
    record::{
        DecodeError, FieldSink, Fields, Record, TargetRecord, Trailer, decode, split_trailer,
    },
};

/// Print the radar target records carried in a framed capture.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Capture file to read.
    path: PathBuf,

    /// Tag of the module holding target records.
    #[arg(long, default_value = "MB", value_parser = parse_tag)]
    tag: Tag,

    /// Bytes read per chunk while scanning for the frame signature.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Treat the last payload byte as a trailer rather than record data.
    #[arg(long)]
    trailing_byte: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

fn parse_tag(s: &str) -> Result<Tag, radframe::sans::tag::TagError> {
    Tag::try_from(s)
}

/// Prints each field on its own line, labels aligned.
struct Printer;

impl Printer {
    fn line(&mut self, label: &str, value: impl std::fmt::Display) {
        println!("{:<30}\t{value}", format!("{label}:"));
    }
}

impl FieldSink for Printer {
    fn put_u8(&mut self, label: &'static str, value: u8) {
        self.line(label, value);
    }
    fn put_u16(&mut self, label: &'static str, value: u16) {
        self.line(label, value);
    }
    fn put_u32(&mut self, label: &'static str, value: u32) {
        self.line(label, value);
    }
    fn put_u64(&mut self, label: &'static str, value: u64) {
        self.line(label, value);
    }
    fn put_i8(&mut self, label: &'static str, value: i8) {
        self.line(label, value);
    }
    fn put_i16(&mut self, label: &'static str, value: i16) {
        self.line(label, value);
    }
    fn put_i32(&mut self, label: &'static str, value: i32) {
        self.line(label, value);
    }
    fn put_i64(&mut self, label: &'static str, value: i64) {
        self.line(label, value);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error occurred:\t{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut cursor = ByteCursor::open(&args.path)
        .with_context(|| format!("Failed to open {}", args.path.display()))?;

    let payload = locate_with(&mut cursor, args.tag, args.chunk_size)?;

    let trailer = if args.trailing_byte {
        Trailer::Byte
    } else {
        Trailer::Absent
    };

    let (data, trailer) = split_trailer(&payload, trailer)?;

    let targets = decode::<TargetRecord>(data).map_err(|err: DecodeError| {
        anyhow::Error::new(err).context(format!(
            "Record size: {}, payload size: {}, module payload size: {}",
            TargetRecord::SIZE,
            data.len(),
            payload.len(),
        ))
    })?;

    log::info!("Decoded {} targets from module {}.", targets.len(), args.tag);

    if let Some(trailer) = trailer {
        log::info!("Trailing byte: {trailer:#04X}.");
    }

    for target in &targets {
        target.publish(&mut Printer);
        println!("-------------------------------------");
    }

    Ok(())
}
