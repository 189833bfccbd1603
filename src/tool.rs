// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! CLI tool for hashing strings and reporting digest collisions

use clap::{ArgAction, CommandFactory, Parser};
use hash_array::util::{parse_prefixed_u32, DisplayDigest};
use hash_array::{CollisionDetector, Hash32, HashFunction, Observation, DEFAULT_DETECTOR_CAPACITY};
use humansize::{SizeFormatter, BINARY};
use rand::RngCore;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    prelude::*,
    registry::Registry,
};

macro_rules! die {
    ($fmt:literal, $($arg:tt)*) => {{
        eprintln!($fmt, $($arg)*);
        std::process::exit(1);
    }};

    ($msg:literal) => {{
        eprintln!($msg);
        std::process::exit(1);
    }};

    () => {{
        eprintln!("Program terminated unexpectedly");
        std::process::exit(1);
    }};
}

#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};

const MIB: usize = 1 << 20;

pub fn init_tracing(quiet: bool, verbose: u8) -> (bool, LevelFilter) {
    let is_verbose = !quiet && verbose > 0;

    let level_filter = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    // Bridge log crate macros to tracing (for library code that uses log::*)
    if tracing_log::LogTracer::init().is_err() {
        die!("INTERNAL ERROR: setting log tracer failed");
    }

    let registry = Registry::default();

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("HSH_LOG")
        .from_env_lossy();

    let subscriber = registry.with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact(),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        die!("INTERNAL ERROR: setting default tracing::subscriber failed");
    }

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing_panic::panic_hook(info);
        prev_hook(info); // daisy-chain to old panic hook
    }));

    (is_verbose, level_filter)
}

/// CLI tool for hashing strings and reporting digest collisions
#[derive(Parser, Debug)]
#[command(name = "hsh")]
#[command(version, about = "Hashes strings and reports digest collisions")]
#[command(disable_help_flag = true)]
struct ToolArgs {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Suppress all output except for errors. This overrides the -v flag.
    #[arg(short, long)]
    quiet: bool,

    /// Turn on verbose output. Supply -v multiple times to increase verbosity.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Hash seed: decimal, 0x-prefixed hex or 0-prefixed octal.
    /// Defaults to the seed of the hash function.
    #[arg(short, long, value_parser = parse_prefixed_u32, allow_negative_numbers = true)]
    seed: Option<u32>,

    /// Hash a random buffer of COUNT MiB and report the throughput
    #[arg(short, long, value_name = "COUNT", value_parser = parse_prefixed_u32)]
    benchmark: Option<u32>,

    /// Print digests in hexadecimal instead of decimal
    #[arg(short = 'h', long)]
    hex: bool,

    /// Hash function: djb2a, fnv1a, crc32 or murmur3
    #[arg(short, long, default_value_t, value_parser = str::parse::<HashFunction>)]
    algorithm: HashFunction,

    /// Strings to hash
    strings: Vec<String>,
}

fn run_benchmark(function: HashFunction, seed: u32, count: u32) {
    let Some(size) = (count as usize).checked_mul(MIB) else {
        die!("Benchmark size of {} MiB is too large", count);
    };

    debug!("filling {} with random bytes", SizeFormatter::new(size, BINARY));

    let mut buf = vec![0; size];
    rand::rng().fill_bytes(&mut buf);

    let start = Instant::now();
    let digest = function.hash32_with_seed(&buf, seed);
    let elapsed = start.elapsed().as_secs_f64();

    eprintln!(
        "benchmark hashing: {count} MiB ({})",
        DisplayDigest::new(digest, true)
    );
    eprintln!(
        "elapsed time: {elapsed:.6} ({:.2} MiB/sec)",
        f64::from(count) / elapsed
    );
}

fn print_digests<'a>(
    detector: &mut CollisionDetector<'a>,
    inputs: &'a [String],
    hex: bool,
) -> io::Result<()> {
    let mut stdout = io::stdout().lock();

    for input in inputs {
        let record = detector.observe(input.as_str());

        writeln!(stdout, "{} {input}", DisplayDigest::new(record.digest, hex))?;

        if let Observation::Collision { previous } = record.observation {
            writeln!(stdout, "! {previous} {input}")?;
        }
    }

    stdout.flush()
}

fn main() {
    let args = ToolArgs::parse();
    let (_, level_filter) = init_tracing(args.quiet, args.verbose);

    let cmd = ToolArgs::command();

    info!(
        "starting {} ({} {}), log level: {level_filter}",
        cmd.get_name(),
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let function = args.algorithm;
    let seed = args.seed.unwrap_or_else(|| function.default_seed());

    debug!("hashing with {function}, seed {seed:#010x}");

    if let Some(count) = args.benchmark.filter(|&count| count > 0) {
        run_benchmark(function, seed, count);
    }

    let mut detector = CollisionDetector::<DEFAULT_DETECTOR_CAPACITY>::new(function, seed);

    if let Err(e) = print_digests(&mut detector, &args.strings, args.hex) {
        die!("Error writing output: {}", e);
    }

    debug!("tracked {} distinct digests", detector.tracked_count());
}
