use anyhow::Result;
use chrono::{DateTime, Utc};
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;
use tickmark::cli;
use tickmark::config::Settings;
use tickmark::scanner::scan_corpus;
use tickmark::source::FsVault;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut root = ".".to_string();
    let mut config_path: Option<PathBuf> = None;
    let mut tag_overrides: Vec<String> = Vec::new();
    let mut scan_all = false;
    let mut show_done = false;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" | "help" => {
                cli::print_help();
                return Ok(());
            }
            "--root" | "-r" => {
                i += 1;
                root = args
                    .get(i)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("--root requires a path"))?;
            }
            "--config" | "-c" => {
                i += 1;
                let path = args
                    .get(i)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path"))?;
                config_path = Some(PathBuf::from(path));
            }
            "--tag" | "-t" => {
                i += 1;
                let tag = args
                    .get(i)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("--tag requires a name"))?;
                tag_overrides.push(tag);
            }
            "--all" | "-a" => scan_all = true,
            "--show-done" => show_done = true,
            "--verbose" | "-v" => verbose = true,
            other => {
                eprintln!("Unknown argument: {}", other);
                cli::print_help();
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let mut settings = match &config_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if !tag_overrides.is_empty() {
        settings.tag_names = tag_overrides.join("\n");
    }
    if scan_all {
        settings.tag_names = String::new();
    }
    if show_done {
        settings.visibility.show_done = true;
    }

    let vault = FsVault::open(root)?;
    let request = settings.scan_request(DateTime::<Utc>::UNIX_EPOCH);
    let corpus = scan_corpus(&vault, &request).await;

    let mut paths: Vec<_> = corpus.files.keys().cloned().collect();
    paths.sort();

    for path in &paths {
        let items = &corpus.files[path];
        if items.is_empty() {
            continue;
        }
        println!("{}:", path);
        for item in items {
            println!(
                "  {}[{}] {}",
                " ".repeat(item.spaces_indented),
                item.marker.token(),
                item.original_text
            );
        }
        println!();
    }

    let shown: usize = corpus.files.values().map(Vec::len).sum();
    println!(
        "{} item(s) across {} file(s)",
        shown,
        paths.iter().filter(|p| !corpus.files[*p].is_empty()).count()
    );

    Ok(())
}
