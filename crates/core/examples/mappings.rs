use std::{fs, path::PathBuf};

use clap::Parser;
use map_preview::decode::DecodedMap;

#[derive(Parser, Debug)]
#[command(name = "mappings")]
#[command(about = "Dump the decoded, ordered mapping list of a sourcemap", long_about = None)]
struct Args {
    /// Path to the sourcemap JSON
    map: PathBuf,

    /// Source index within the map (lists sources when omitted)
    #[arg(long, short)]
    source: Option<u32>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let map_json = fs::read_to_string(&args.map)?;
    let decoded = DecodedMap::from_json(&map_json)?;

    let Some(source_index) = args.source else {
        for index in 0..decoded.source_count() {
            let name = decoded.source_name(index).unwrap_or("<unknown>");
            let contents = if decoded.source(index).is_ok() {
                "embedded contents"
            } else {
                "no contents"
            };
            println!("{index}: {name} ({contents})");
        }
        return Ok(());
    };

    for (index, m) in decoded.mappings_for_source(source_index).iter().enumerate() {
        println!(
            "#{index}: original {}:{} -> generated {}:{}",
            m.original_line, m.original_column, m.generated_line, m.generated_column
        );
    }
    Ok(())
}
