//! Runs every pattern over growing inputs, times it, samples the process RSS
//! and cross-checks the answer against a brute-force baseline on small sizes.
//!
//! Build with `--features probe`.

use std::env;
use std::io::{self, Write};
use std::process;
use std::time::Instant;

use algo_patterns::{
    binary_search, count_unique_values, group_by_key, is_anagram, max_sub_array_sum,
    sum_zero_pair,
};
use serde_json::{json, Value};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const SIZES: &[usize] = &[256, 1024, 4096, 16384, 65536, 262144, 1048576];
const DEFAULT_VERIFY_LIMIT: usize = 4096;

const USAGE: &str = "\
Usage: pattern_probe [--format csv|table|json] [--verify-limit N]

  --format        output format on stdout (default: csv)
  --verify-limit  largest input size checked by brute force (default: 4096)
  -h, --help      print this message";

/// Runs one pattern on an input of `len` elements; the flag asks for verification.
type Scenario = fn(usize, bool) -> Run;

const SCENARIOS: &[(&str, Scenario)] = &[
    ("binary_search", run_binary_search),
    ("anagram", run_anagram),
    ("group_by", run_group_by),
    ("sum_zero_pair", run_sum_zero_pair),
    ("count_unique", run_count_unique),
    ("max_window_sum", run_max_window_sum),
];

fn main() {
    let options = match Options::from_args(env::args().skip(1)) {
        Ok(Some(options)) => options,
        Ok(None) => {
            println!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("pattern_probe: {err}\n\n{USAGE}");
            process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut rows = Vec::with_capacity(SCENARIOS.len() * SIZES.len());
    for &(name, scenario) in SCENARIOS {
        for &len in SIZES {
            let row = measure(&mut sys, name, len, || {
                scenario(len, len <= options.verify_limit)
            });
            eprintln!(
                "{:<15} len={:<8} {:>9.4}s  {}",
                name,
                len,
                row.wall_s,
                row.run.check.label()
            );
            rows.push(row);
        }
    }

    let verified = rows
        .iter()
        .filter(|r| r.run.check != Check::Skipped)
        .count();
    let failed: Vec<&Row> = rows.iter().filter(|r| r.run.check.is_failure()).collect();
    eprintln!("{} runs, {verified} verified, {} failed", rows.len(), failed.len());
    for row in &failed {
        eprintln!(
            "  {} len={}: {}",
            row.scenario,
            row.len,
            row.run.check.detail().unwrap_or("")
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(err) = options.format.write(&mut out, &rows) {
        eprintln!("pattern_probe: cannot write report: {err}");
        process::exit(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Csv,
    Table,
    Json,
}

impl Format {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Format::Csv),
            "table" => Ok(Format::Table),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write<W: Write>(self, out: &mut W, rows: &[Row]) -> io::Result<()> {
        match self {
            Format::Csv => {
                writeln!(out, "scenario,len,result,wall_s,rss_delta_kib,status,detail")?;
                for r in rows {
                    writeln!(
                        out,
                        "{},{},{},{:.6},{},{},{}",
                        r.scenario,
                        r.len,
                        csv_field(&r.run.result),
                        r.wall_s,
                        r.rss_delta_kib,
                        r.run.check.label(),
                        csv_field(r.run.check.detail().unwrap_or(""))
                    )?;
                }
                Ok(())
            }
            Format::Table => {
                writeln!(
                    out,
                    "{:<15} {:>8} {:>10} {:>8} {:<8} result",
                    "scenario", "len", "wall_s", "rss_kib", "status"
                )?;
                for r in rows {
                    writeln!(
                        out,
                        "{:<15} {:>8} {:>10.4} {:>8} {:<8} {}",
                        r.scenario,
                        r.len,
                        r.wall_s,
                        r.rss_delta_kib,
                        r.run.check.label(),
                        r.run.result
                    )?;
                }
                Ok(())
            }
            Format::Json => {
                let report: Vec<Value> = rows.iter().map(Row::to_json).collect();
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)
            }
        }
    }
}

#[derive(Debug, PartialEq)]
struct Options {
    format: Format,
    verify_limit: usize,
}

impl Options {
    /// `Ok(None)` means help was requested.
    fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Option<Self>, String> {
        let mut options = Options {
            format: Format::Csv,
            verify_limit: DEFAULT_VERIFY_LIMIT,
        };
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let mut value = || {
                inline
                    .clone()
                    .or_else(|| args.next())
                    .ok_or_else(|| format!("{flag} expects a value"))
            };
            match flag.as_str() {
                "-h" | "--help" => return Ok(None),
                "--format" => options.format = Format::parse(&value()?)?,
                "--verify-limit" => {
                    let raw = value()?;
                    options.verify_limit = raw
                        .parse()
                        .map_err(|_| format!("invalid --verify-limit '{raw}'"))?;
                }
                _ => return Err(format!("unrecognized argument '{flag}'")),
            }
        }
        Ok(Some(options))
    }
}

/// Result of comparing an answer with its baseline.
#[derive(Debug, Clone, PartialEq)]
enum Check {
    Skipped,
    Passed,
    Failed(String),
}

impl Check {
    fn against<T: PartialEq + std::fmt::Debug>(
        verify: bool,
        got: &T,
        baseline: impl FnOnce() -> T,
    ) -> Self {
        if !verify {
            return Check::Skipped;
        }
        let expected = baseline();
        if *got == expected {
            Check::Passed
        } else {
            Check::Failed(format!("expected {expected:?}, got {got:?}"))
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Check::Skipped => "skipped",
            Check::Passed => "passed",
            Check::Failed(_) => "failed",
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            Check::Failed(detail) => Some(detail),
            _ => None,
        }
    }

    fn is_failure(&self) -> bool {
        matches!(self, Check::Failed(_))
    }
}

struct Run {
    result: String,
    check: Check,
}

struct Row {
    scenario: &'static str,
    len: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    run: Run,
}

impl Row {
    fn to_json(&self) -> Value {
        json!({
            "scenario": self.scenario,
            "len": self.len,
            "result": self.run.result,
            "wall_s": self.wall_s,
            "rss_delta_kib": self.rss_delta_kib,
            "status": self.run.check.label(),
            "detail": self.run.check.detail(),
        })
    }
}

fn measure(sys: &mut System, scenario: &'static str, len: usize, f: impl FnOnce() -> Run) -> Row {
    let before = rss_kib(sys);
    let started = Instant::now();
    let run = f();
    let wall_s = started.elapsed().as_secs_f64();
    Row {
        scenario,
        len,
        wall_s,
        rss_delta_kib: rss_kib(sys).saturating_sub(before),
        run,
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |p| p.memory() / 1024)
}

/// Quotes a CSV field when it contains a delimiter, quote or line break.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

fn run_binary_search(len: usize, verify: bool) -> Run {
    let sorted: Vec<i64> = (0..len as i64).map(|i| i * 2).collect();
    // Even targets hit, odd ones miss.
    let targets: Vec<i64> = (0..2 * len as i64).step_by(37).collect();
    let got: Vec<Option<usize>> = targets.iter().map(|t| binary_search(&sorted, t)).collect();
    let found = got.iter().flatten().count();
    let check = Check::against(verify, &got, || {
        targets
            .iter()
            .map(|t| sorted.iter().position(|v| v == t))
            .collect()
    });
    Run {
        result: format!("queries={} found={found}", targets.len()),
        check,
    }
}

fn run_anagram(len: usize, verify: bool) -> Run {
    let word = text(len, 0);
    let reversed: String = word.chars().rev().collect();
    let mut other = text(len, 1);
    other.replace_range(..1, "!");
    let got = (is_anagram(&word, &reversed), is_anagram(&word, &other));
    let check = Check::against(verify, &got, || {
        let base = sorted_chars(&word);
        (base == sorted_chars(&reversed), base == sorted_chars(&other))
    });
    Run {
        result: format!("reversed={} perturbed={}", got.0, got.1),
        check,
    }
}

fn run_group_by(len: usize, verify: bool) -> Run {
    const BUCKETS: usize = 17;
    let groups = group_by_key(0..len, |i| (i * 7) % BUCKETS);
    let got = (groups.len(), groups.item_count());
    // 7 is coprime with 17, so the first 17 items all land in distinct buckets.
    let check = Check::against(verify, &got, || (len.min(BUCKETS), len));
    Run {
        result: format!("groups={} items={}", got.0, got.1),
        check,
    }
}

fn run_sum_zero_pair(len: usize, verify: bool) -> Run {
    // Negatives are even and positives odd, so only the planted value can pair up.
    let half = len as i64 / 2;
    let mut sorted: Vec<i64> = (0..len as i64)
        .map(|i| if i < half { -2 * (len as i64 - i) } else { 2 * i + 1 })
        .collect();
    sorted[len / 4] = -(2 * half + 1);
    sorted.sort_unstable();
    let got = sum_zero_pair(&sorted);
    let check = Check::against(verify, &got.is_some(), || {
        sorted
            .iter()
            .enumerate()
            .any(|(i, a)| sorted[i + 1..].iter().any(|b| a + b == 0))
    });
    Run {
        result: format!("pair={got:?}"),
        check,
    }
}

fn run_count_unique(len: usize, verify: bool) -> Run {
    let sorted: Vec<u32> = (0..len as u32).map(|i| i / 3).collect();
    let got = count_unique_values(&sorted);
    let check = Check::against(verify, &got, || {
        let mut v = sorted.clone();
        v.dedup();
        v.len()
    });
    Run {
        result: format!("unique={got}"),
        check,
    }
}

fn run_max_window_sum(len: usize, verify: bool) -> Run {
    let values: Vec<i64> = (0..len as i64).map(|i| (i * 7919) % 2001 - 1000).collect();
    let window = (len / 16).max(1);
    let got = max_sub_array_sum(&values, window);
    let check = Check::against(verify, &got, || {
        values.windows(window).map(|w| w.iter().sum::<i64>()).max()
    });
    Run {
        result: format!("window={window} max={got:?}"),
        check,
    }
}

fn text(len: usize, offset: usize) -> String {
    const LETTERS: &[u8] = b"etaoinshrdlu";
    (0..len)
        .map(|i| LETTERS[(i * 5 + offset) % LETTERS.len()] as char)
        .collect()
}

fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}
