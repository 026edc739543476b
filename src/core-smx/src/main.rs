use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use core_smx::{
    DEFAULT_LIMIT, FileSink, SitemapConfig, SitemapDocument, SitemapEntry,
    common::max_concurrency::get_max_concurrency, decompress_to_string, generate_sitemap,
    parse_document, setup_logging,
};

#[derive(Parser)]
#[command(name = "core-sitemap")]
#[command(about = "The Core Sitemap Generation Toolkit", long_about = None)]
struct SitemapCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate sitemap chunk files and a sitemap index from a JSON file of URL records.
    Generate {
        /// JSON file holding the array of URL records.
        #[arg(short, long, value_parser = validate_input_file)]
        input: PathBuf,

        /// Absolute base URL under which the generated files will be served.
        #[arg(long, value_parser = validate_hostname)]
        hostname: String,

        /// Directory that receives the generated files.
        #[arg(short, long)]
        output: PathBuf,

        /// Maximum number of URL entries per sitemap file.
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Print dates without the time component in <lastmod> elements.
        #[arg(long)]
        date_only: bool,

        /// Also write a plain .xml sibling next to every .xml.gz artifact.
        #[arg(long)]
        keep_xml: bool,

        /// Maximum number of sitemap files persisted concurrently.
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Parse a generated sitemap or sitemap-index file and report its contents.
    Validate {
        /// The file to parse. A .gz file is decompressed first.
        #[arg(short, long, value_parser = validate_input_file)]
        file: PathBuf,
    },
}

fn validate_hostname(s: &str) -> Result<String, String> {
    url::Url::parse(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid URL: {}", e))
}

fn validate_input_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if !path.exists() {
        return Err(format!("Input path does not exist: {}", path.display()));
    }

    if !path.is_file() {
        return Err(format!("Input path is not a file: {}", path.display()));
    }

    let metadata =
        std::fs::metadata(&path).map_err(|e| format!("Cannot read input file metadata: {}", e))?;

    if metadata.len() == 0 {
        return Err(format!("Input file is empty: {}", path.display()));
    }

    Ok(path)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file, if it exists
    dotenvy::dotenv().ok();

    setup_logging("core_smx=info");

    let cli = SitemapCli::parse();

    match cli.command {
        Commands::Generate {
            input,
            hostname,
            output,
            limit,
            date_only,
            keep_xml,
            concurrency,
        } => {
            let entries = match read_entries(&input) {
                Ok(entries) => entries,
                Err(message) => {
                    println!("ERROR: {message}");
                    std::process::exit(1)
                }
            };

            let config = SitemapConfig::builder()
                .limit(limit)
                .hostname(hostname)
                .output_dir(output.clone())
                .lastmod_date_only(date_only)
                .keep_uncompressed(keep_xml)
                .concurrency(concurrency.unwrap_or_else(|| get_max_concurrency(None)))
                .build();

            let sink = FileSink::new(&output);

            match generate_sitemap(entries, &config, &sink).await {
                Ok(report) => println!(
                    "Wrote {} sitemap file(s) covering {} URL(s) to {}; index served from '{}'",
                    report.chunks,
                    report.entries,
                    output.display(),
                    report.index_url
                ),
                Err(e) => {
                    println!("ERROR: Sitemap generation failed: {e}");
                    std::process::exit(1)
                }
            }
        }

        Commands::Validate { file } => match read_document(&file) {
            Ok(SitemapDocument::UrlSet(entries)) => {
                println!("Valid sitemap file ({file:?}): {} URL(s)", entries.len())
            }
            Ok(SitemapDocument::Index(refs)) => {
                println!("Valid sitemap index ({file:?}): {} chunk reference(s)", refs.len())
            }
            Err(message) => {
                println!("Invalid sitemap file ({file:?}): {message}");
                std::process::exit(1)
            }
        },
    }
}

fn read_entries(path: &Path) -> Result<Vec<SitemapEntry>, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Cannot read file ({path:?}) due to: {e:?}"))?;
    serde_json::from_str(&content).map_err(|e| format!("Cannot parse URL records in {path:?}: {e}"))
}

fn read_document(path: &Path) -> Result<SitemapDocument, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Cannot read file ({path:?}) due to: {e:?}"))?;

    let xml = if path.extension().is_some_and(|ext| ext == "gz") {
        decompress_to_string(&bytes).map_err(|e| e.to_string())?
    } else {
        String::from_utf8(bytes).map_err(|e| e.to_string())?
    };

    parse_document(&xml).map_err(|e| e.to_string())
}
