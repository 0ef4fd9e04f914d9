use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use patricia::PatriciaTrie;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Patricia workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the trie benchmarks against the std sets
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Build a trie from a word list and print it
    Render {
        /// File with one key per line
        words: PathBuf,

        /// File with keys to remove after loading
        #[arg(long)]
        remove: Option<PathBuf>,

        /// Order siblings structurally instead of by insertion
        #[arg(long, default_value_t = false)]
        sorted: bool,
    },
}

const IMPLEMENTATIONS: &[&str] = &["patricia", "std_btreeset", "std_hashset"];

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Render {
            words,
            remove,
            sorted,
        } => render(&words, remove.as_deref(), sorted)?,
    }

    Ok(())
}

fn read_keys(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content.lines().map(str::to_owned).collect())
}

fn render(words: &Path, remove: Option<&Path>, sorted: bool) -> Result<()> {
    let mut trie = PatriciaTrie::new();
    let keys = read_keys(words)?;
    let added = keys.iter().filter(|k| trie.add(k.as_str())).count();
    println!("Loaded {} keys ({} duplicates)", added, keys.len() - added);

    if let Some(path) = remove {
        let keys = read_keys(path)?;
        let removed = keys.iter().filter(|k| trie.remove(k.as_str())).count();
        println!("Removed {} keys ({} absent)", removed, keys.len() - removed);
    }

    trie.validate().context("Trie is structurally broken")?;

    if sorted {
        print!("{trie:#}");
    } else {
        print!("{trie}");
    }
    println!("{} keys in {} nodes", trie.size(), trie.node_count());
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running trie benchmarks...");

    // Build first to avoid measuring build time
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", "trie_benchmark", "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    let start = Instant::now();
    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.arg("bench").arg("--bench").arg("trie_benchmark");

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run trie_benchmark")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    collect_results(criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Trie Benchmark Report")?;

    // Header
    write!(file, "| Workload |")?;
    for name in IMPLEMENTATIONS {
        write!(file, " {} (Ops/s) | vs Patricia |", name)?;
    }
    writeln!(file)?;

    // Separator
    write!(file, "|---|")?;
    for _ in IMPLEMENTATIONS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    // Rows
    for (workload, by_impl) in &results {
        write!(file, "| {} |", workload)?;

        let patricia_ops = by_impl.get("patricia").copied().unwrap_or(0.0);

        for name in IMPLEMENTATIONS {
            if let Some(ops) = by_impl.get(*name) {
                let rel = if patricia_ops > 0.0 { ops / patricia_ops } else { 0.0 };
                write!(file, " {} | **{:.2}x** |", format_ops(*ops), rel)?;
            } else {
                write!(file, " N/A | - |")?;
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{:.0}", ops)
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}

fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results);
            continue;
        }
        if file_name(&path).as_deref() != Some("estimates.json") {
            continue;
        }

        // Structure: .../<workload>/<implementation>/new/estimates.json
        let Some(run_dir) = path.parent() else { continue };
        if file_name(run_dir).as_deref() != Some("new") {
            continue;
        }
        let Some(impl_dir) = run_dir.parent() else { continue };
        let Some(workload_dir) = impl_dir.parent() else { continue };
        let (Some(implementation), Some(workload)) = (file_name(impl_dir), file_name(workload_dir))
        else {
            continue;
        };
        if implementation == "report" || workload == "report" {
            continue;
        }

        // Throughput from benchmark.json
        let mut elements = 1.0;
        let mut is_throughput = false;
        if let Ok(content) = fs::read_to_string(run_dir.join("benchmark.json")) {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&content) {
                if let Some(t) = json.get("throughput").and_then(|t| t.get("Elements")) {
                    elements = t.as_f64().unwrap_or(1.0);
                    is_throughput = true;
                }
            }
        }

        let Ok(content) = fs::read_to_string(&path) else { continue };
        let Ok(estimates) = serde_json::from_str::<Estimates>(&content) else { continue };
        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            let metric = if is_throughput {
                (elements * 1e9) / time_ns
            } else {
                1e9 / time_ns
            };
            results
                .entry(workload)
                .or_default()
                .insert(implementation, metric);
        }
    }
}
