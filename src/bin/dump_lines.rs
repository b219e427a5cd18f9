use std::fs;

use clap::Parser;
use pangyo_catering_api::{
    Config, Template, display::render_with_year, fetch, filter_lines, reconstruct,
};
use tracing_subscriber::EnvFilter;

/// Prints the raw and filtered lines of a menu PDF, then the parsed grid.
#[derive(Parser, Debug)]
struct Args {
    /// Local path or http(s) URL of the menu PDF.
    source: String,

    /// Show the ISO date for each day, resolved in this year.
    #[arg(long)]
    year: Option<i32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();
    let text = if args.source.starts_with("http://") || args.source.starts_with("https://") {
        let client = fetch::build_client(&Config::default())?;
        fetch::download_and_extract_text(&client, &args.source).await?
    } else {
        let bytes = fs::read(&args.source)?;
        fetch::extract_first_page(&bytes)?
    };

    let raw: Vec<&str> = text.lines().collect();
    println!("=== RAW LINES ===");
    for (i, line) in raw.iter().enumerate() {
        println!("{}: {:?}", i, line);
    }

    let filtered = filter_lines(&raw);
    println!("\n=== FILTERED LINES ===");
    for (i, line) in filtered.iter().enumerate() {
        println!("{}: {:?}", i, line);
    }

    println!("\n=== MENU ===");
    match reconstruct(&filtered, &Template::default()) {
        Ok(menu) => match args.year {
            Some(year) => print!("{}", render_with_year(&menu, year)),
            None => print!("{menu}"),
        },
        Err(err) => println!("{} ({})", err, err.code()),
    }

    Ok(())
}
