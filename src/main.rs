use anyhow::Context;
use clap::Parser;

mod config;
mod error;
mod render;
mod resolve;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "datamix")]
#[command(about = "Resolve a data mixture against a path mapping", long_about = None)]
struct Cli {
    /// Mixture config: JSON object mapping dataset names to relative weights.
    mixture: String,

    /// Path mapping: JSON object mapping dataset names to storage locations.
    paths: String,

    /// Write the data path to this file instead of stdout.
    #[arg(short = 'o', long)]
    output: Option<String>,
}

fn load_payload(path: &str) -> Result<serde_json::Map<String, serde_json::Value>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("error loading {}", path))?;
    config::parse_document(&text).with_context(|| format!("error loading {}", path))
}

/// Run the pipeline up to the formatted line. Emission stays in `main` so
/// nothing is written if any stage fails.
fn build_data_path(mixture_path: &str, paths_path: &str) -> Result<String> {
    // 1) Load + preprocess both documents (variables, comments).
    let mix_payload = load_payload(mixture_path)?;
    let paths_payload = load_payload(paths_path)?;

    // 2) Type-check the payloads.
    let mix = config::MixSpec::from_entries(mix_payload)
        .with_context(|| format!("error validating {}", mixture_path))?;
    let paths = config::PathMap::from_entries(paths_payload)
        .with_context(|| format!("error validating {}", paths_path))?;

    // 3) A mapped dataset the mixture never samples usually means a typo
    //    in one of the two files. Not fatal.
    for dataset in paths.datasets() {
        if !mix.contains(dataset) {
            eprintln!("WARN: dataset \"{}\" is mapped but not in the mixture", dataset);
        }
    }

    // 4) Resolve + render.
    let resolved = resolve::resolve(&mix, &paths)?;
    Ok(render::format_data_path(&resolved))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let line = build_data_path(&cli.mixture, &cli.paths)?;

    match cli.output {
        Some(out) => {
            std::fs::write(&out, format!("{}\n", line))
                .with_context(|| format!("error writing {}", out))?;
            println!("Wrote {}", out);
        }
        None => println!("{}", line),
    }

    Ok(())
}
