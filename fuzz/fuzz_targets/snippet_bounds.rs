#![no_main]

use libfuzzer_sys::fuzz_target;
use map_preview::{CONTEXT_CHARS, Mapping, extract_snippet};

/// Derive a generated-position-ordered mapping list from the fuzz input.
fn synth_mappings(data: &[u8]) -> Vec<Mapping> {
    let mut mappings: Vec<Mapping> = data
        .chunks_exact(4)
        .take(64)
        .map(|c| Mapping {
            original_line: (c[0] & 0x0f) as u32,
            original_column: (c[1] & 0x3f) as u32,
            generated_line: (c[2] & 0x0f) as u32,
            generated_column: (c[3] & 0x3f) as u32,
        })
        .collect();
    mappings.sort_by_key(|m| m.generated_pos());
    mappings
}

fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 256 * 1024 {
        &data[..256 * 1024]
    } else {
        data
    };

    let (selector, rest) = match data.split_first() {
        Some(split) => split,
        None => return,
    };

    let generated = String::from_utf8_lossy(rest);
    let mappings = synth_mappings(rest);

    // Deliberately allow out-of-range selections; they must yield None, never a panic.
    let selected = Some(*selector as usize);

    let snippet = extract_snippet(&generated, &mappings, selected);

    if let Some(s) = &snippet {
        // Context windows are bounded; the span is not.
        assert!(s.prefix.chars().count() <= CONTEXT_CHARS);
        assert!(s.suffix.chars().count() <= CONTEXT_CHARS);
        // The snippet joins under the selected mapping's original line.
        assert_eq!(s.line, mappings[*selector as usize].original_line);
    }

    // Pure function: a second run must agree exactly.
    assert_eq!(snippet, extract_snippet(&generated, &mappings, selected));
    assert_eq!(extract_snippet(&generated, &mappings, None), None);
});
