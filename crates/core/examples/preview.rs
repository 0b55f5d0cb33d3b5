use std::{fs, path::PathBuf};

use clap::Parser;
use map_preview::{EMPTY_SPAN_PLACEHOLDER, Preview, SourceFile, Snippet, decode::DecodedMap};

#[derive(Parser, Debug)]
#[command(name = "preview")]
#[command(about = "Render a source file segmented by its sourcemap, with an optional generated-code snippet", long_about = None)]
struct Args {
    /// Path to the sourcemap JSON
    map: PathBuf,

    /// Path to the generated output file
    generated: PathBuf,

    /// Source index within the map
    #[arg(long, short, default_value_t = 0)]
    source: u32,

    /// Read the original source from this file instead of the map's embedded contents
    #[arg(long)]
    source_file: Option<PathBuf>,

    /// Mapping index to select (prints its generated snippet under the matching line)
    #[arg(long)]
    select: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let map_json = fs::read_to_string(&args.map)?;
    let generated = fs::read_to_string(&args.generated)?;
    let decoded = DecodedMap::from_json(&map_json)?;

    let preview = match &args.source_file {
        Some(path) => {
            let name = decoded
                .source_name(args.source)
                .unwrap_or("<unknown>")
                .to_string();
            let content = fs::read_to_string(path)?;
            let mappings = decoded.mappings_for_source(args.source);
            Preview::new(SourceFile { name, content }, generated, mappings)
        }
        None => Preview::from_decoded(&decoded, args.source, generated)?,
    };

    let snippet = preview.snippet(args.select);
    render(&preview, snippet.as_ref());
    Ok(())
}

/// Text-mode stand-in for the visual presentation layer: numbered source lines with mapped
/// fragments bracketed as `[#index|text]`, and the snippet joined under its original line.
fn render(preview: &Preview, snippet: Option<&Snippet>) {
    let lines = preview.lines();
    let number_width = lines.len().to_string().len();

    for (line_no, fragments) in lines.iter().enumerate() {
        print!("{line_no:>number_width$} | ");
        for fragment in fragments {
            match &fragment.mapping {
                Some(mapping_ref) => print!("[#{}|{}]", mapping_ref.index, fragment.value),
                None => print!("{}", fragment.value),
            }
        }
        println!();

        if let Some(s) = snippet {
            if s.line as usize == line_no {
                let span = if s.span.is_empty() {
                    EMPTY_SPAN_PLACEHOLDER
                } else {
                    &s.span
                };
                println!("{:>number_width$} > {}<<{}>>{}", "", s.prefix, span, s.suffix);
            }
        }
    }
}
