use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use eyre::{ensure, Result, WrapErr};
use structopt::StructOpt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const N_DAYS: u8 = 25;

const W_DAY: usize = 10;
const W_PART: usize = 16;

#[derive(Debug, StructOpt)]
#[structopt(name = "aoc2023", about = "Advent of Code 2023 solutions; puzzle input is read from stdin.")]
struct Args {
    #[structopt(help = "Day: 1 to 25.")]
    pub day: u8,
    #[structopt(long, short, help = "Part of the day: 1 or 2. If not selected, both parts are run.")]
    pub part: Option<u8>,
    #[structopt(long, short, help = "Print benchmark times instead of problem answers.")]
    pub bench: bool,
    #[structopt(
        long,
        short,
        requires("bench"),
        help = "Time in seconds allowed for timing each problem part. [default: 1.0]"
    )]
    pub seconds: Option<f64>,
    #[structopt(
        long,
        short,
        requires("bench"),
        help = "Fraction of time used for warmup before benching (0-0.5). [default: 0.2]"
    )]
    pub warmup: Option<f64>,
    #[structopt(long, short, parse(from_occurrences), help = "Log verbosity (-v info, -vv debug).")]
    pub verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aoc2023={}", level)));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_input() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    io::stdin().lock().read_to_end(&mut buf).wrap_err("failed to read puzzle input from stdin")?;
    buf.retain(|&c| c != b'\r');
    ensure!(buf.iter().any(|c| !c.is_ascii_whitespace()), "puzzle input on stdin is empty");
    if buf.last() != Some(&b'\n') {
        buf.push(b'\n');
    }
    Ok(buf)
}

fn run_one_raw(day: u8, part: u8, input: &[u8], times: usize) -> (Duration, String) {
    macro_rules! if_day {
        ($day:expr, $day_i:ident) => {
            if_day!($day, $day_i, 1, part1);
            if_day!($day, $day_i, 2, part2);
        };
        ($day:expr, $day_i:ident, $part:expr, $part_i:ident) => {
            if day == $day && part == $part {
                let t0 = Instant::now();
                let out = std::hint::black_box(aoc2023::$day_i::$part_i(input));
                for _ in 1..times {
                    let _ = std::hint::black_box(aoc2023::$day_i::$part_i(input));
                }
                let t1 = Instant::now();
                return (t1 - t0, out.to_string());
            }
        };
    }

    if_day!(1, day01);
    if_day!(2, day02);
    if_day!(3, day03);
    if_day!(4, day04);
    if_day!(5, day05);
    if_day!(6, day06);
    if_day!(7, day07);
    if_day!(8, day08);
    if_day!(9, day09);
    if_day!(10, day10);
    if_day!(11, day11);
    if_day!(12, day12);
    if_day!(13, day13);
    if_day!(14, day14);
    if_day!(15, day15);
    if_day!(16, day16);
    if_day!(17, day17);
    if_day!(18, day18);
    if_day!(19, day19);
    if_day!(20, day20);
    if_day!(21, day21);
    if_day!(22, day22);
    if_day!(23, day23);
    if_day!(24, day24);
    if_day!(25, day25);

    Default::default()
}

fn parts_of(part: Option<u8>) -> Vec<u8> {
    if let Some(part) = part {
        vec![part]
    } else {
        vec![1, 2]
    }
}

fn run_output(day: u8, part: Option<u8>, input: &[u8]) {
    for part in parts_of(part) {
        let (elapsed, out) = run_one_raw(day, part, input, 1);
        info!(day, part, elapsed = ?elapsed, "solved");
        println!("Part {}: {}", part, out);
    }
}

fn print_header(part: Option<u8>) {
    print!("{:<w$}", "day", w = W_DAY);
    if part.unwrap_or(1) == 1 {
        print!("{:<w$}", "part 1", w = W_PART);
    }
    if part.unwrap_or(2) == 2 {
        print!("{:<w$}", "part 2", w = W_PART);
    }
    println!();
    println!("{:-<w$}", "", w = W_DAY + W_PART * (2 - part.is_some() as usize));
}

fn print_day(day: u8) {
    print!("{:<w$}", format!("day {:02}", day), w = W_DAY);
}

fn bench_one(
    day: u8,
    part: u8,
    input: &[u8],
    seconds: f64,
    warmup: f64,
    fmt_pre: impl Fn(),
) -> Result<f64> {
    macro_rules! status {
        ($($arg:tt)*) => {
            print!("\r");
            fmt_pre();
            print!($($arg)*);
            io::stdout().flush()?;
        }
    }

    const SPINNER: &str = "↑↗→↘↓↙←↖";
    const N_CYCLES: usize = 2;
    let n_spinner = SPINNER.chars().count();
    let n_chunks = n_spinner * N_CYCLES;

    let (mut n_estimate, mut tm) = (1, 0.);
    while tm < 0.01 {
        tm = run_one_raw(day, part, input, n_estimate).0.as_secs_f64();
        n_estimate *= 2;
    }
    let n_total = (seconds / tm * (n_estimate as f64)).ceil() as usize;
    let n_bench = (((n_total as f64) * (1. - warmup) / (n_chunks as f64)).ceil() as usize).max(1);
    debug!(day, part, n_total, n_bench, "bench plan");

    // warmup
    let n_warmup = ((n_total as f64) * warmup).ceil().min((n_total as f64) - 1.).max(0.) as usize;
    status!(".");
    let _ = run_one_raw(day, part, input, n_warmup);

    // bench
    let mut tm_total = Duration::default();
    for (i, c) in SPINNER.chars().cycle().take(n_chunks).enumerate() {
        status!("{}", c);
        tm_total += run_one_raw(day, part, input, n_bench).0;
        debug!(chunk = i, elapsed = ?tm_total, "bench chunk done");
    }

    print!("\r");
    Ok(tm_total.as_secs_f64() / ((n_chunks * n_bench) as f64))
}

fn format_time(seconds: f64) -> String {
    let mics = seconds * 1e6;
    let prec = match mics {
        m if m < 10. => 2,
        m if m < 100. => 1,
        _ => 0,
    };
    format!("{:.p$} μs", mics, p = prec)
}

fn run_bench(day: u8, part: Option<u8>, input: &[u8], seconds: f64, warmup: f64) -> Result<()> {
    let parts = parts_of(part);
    print_header(part);
    let mut tms_day = vec![];
    for &part in &parts {
        let tm = bench_one(day, part, input, seconds, warmup, || {
            print_day(day);
            for &tm in &tms_day {
                print!("{:<w$}", format_time(tm), w = W_PART);
            }
        })?;
        info!(day, part, seconds = tm, "benched");
        tms_day.push(tm);
    }
    print_day(day);
    for &tm in &tms_day {
        print!("{:<w$}", format_time(tm), w = W_PART);
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let Args { day, part, bench, seconds, warmup, verbose } = Args::from_args_safe()?;
    init_logging(verbose);

    ensure!((1..=N_DAYS).contains(&day), "day must be 1..={}", N_DAYS);
    if let Some(part) = part {
        ensure!((1..=2).contains(&part), "part must be 1..=2");
    }

    let input = read_input()?;
    debug!(day, bytes = input.len(), lines = input.iter().filter(|&&c| c == b'\n').count(), "read input");

    if bench {
        let seconds = seconds.unwrap_or(1.0);
        ensure!(seconds > 0., "seconds must be a positive number");
        let warmup = warmup.unwrap_or(0.2);
        ensure!((0.0..=0.5).contains(&warmup), "warmup must be in [0.0; 0.5]");
        run_bench(day, part, &input, seconds, warmup)?;
    } else {
        run_output(day, part, &input);
    }

    Ok(())
}
