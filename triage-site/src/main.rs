mod error;
mod nav;
mod pages;
mod shell;

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use boardkit::prelude::*;
use serde::Deserialize;
use simplelog::{Config, LevelFilter, WriteLogger};

use error::SiteError;

#[derive(Debug, Deserialize)]
struct Meta {
    generated: Option<String>,
}

fn main() {
    let log_file = File::create("triage-site.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut args = std::env::args().skip(1);
    let data_dir = PathBuf::from(args.next().unwrap_or_else(|| "data".to_string()));
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "site".to_string()));

    if let Err(e) = run(&data_dir, &out_dir) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(data_dir: &Path, out_dir: &Path) -> Result<(), SiteError> {
    let prs = load_rows(&data_dir.join("prs.json"))?;
    let issues = load_rows(&data_dir.join("issues.json"))?;
    log::info!("loaded {} PRs and {} issues", prs.len(), issues.len());

    // meta.json is optional; without it the nav just drops its timestamp.
    let generated = match load_json::<Meta>(&data_dir.join("meta.json")) {
        Ok(meta) => meta.generated,
        Err(e) => {
            log::warn!("no usable meta.json: {e}");
            None
        }
    };
    let generated = generated.as_deref();

    write_page(out_dir, "index.html", pages::overview::overview(&prs, &issues, generated))?;
    write_page(out_dir, "health.html", pages::overview::health(&prs, generated))?;
    write_page(out_dir, "prs/ready.html", pages::prs::ready(&prs, generated))?;
    write_page(out_dir, "prs/failing.html", pages::prs::failing(&prs, generated))?;
    write_page(out_dir, "prs/huge.html", pages::prs::huge(&prs, generated))?;
    write_page(out_dir, "prs/all.html", pages::prs::all(&prs, generated))?;
    write_page(
        out_dir,
        "issues/trending.html",
        pages::issues::trending(&issues, generated),
    )?;
    write_page(
        out_dir,
        "assets/style.css",
        include_str!("../assets/style.css").to_string(),
    )?;

    log::info!("site written to {}", out_dir.display());
    Ok(())
}

fn write_page(out_dir: &Path, rel: &str, content: String) -> Result<(), SiteError> {
    let path = out_dir.join(rel);
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content.as_bytes())
    };
    write().map_err(|source| SiteError::Write {
        path: path.clone(),
        source,
    })
}
