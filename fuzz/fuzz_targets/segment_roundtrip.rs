#![no_main]

use libfuzzer_sys::fuzz_target;
use map_preview::{Mapping, segment};

/// Derive a mapping list from the fuzz input. Generated positions are arbitrary; original
/// positions are sorted so the segmenter's ordering invariant holds.
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
    mappings.sort_by_key(|m| m.original_pos());
    mappings
}

fuzz_target!(|data: &[u8]| {
    let data = if data.len() > 256 * 1024 {
        &data[..256 * 1024]
    } else {
        data
    };

    let content = String::from_utf8_lossy(data);
    let mappings = synth_mappings(data);

    let lines = segment(&content, &mappings);

    // One fragment list per line-feed-delimited line.
    assert_eq!(lines.len(), content.split('\n').count());

    // Lossless partition: per-line concatenation reproduces the line; no empty fragments.
    // Any panic here is a bug we want the fuzzer to catch.
    for (line, expected) in lines.iter().zip(content.split('\n')) {
        let joined: String = line.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(joined, expected);
        assert!(line.iter().all(|f| !f.value.is_empty()));
    }

    // Mapping tags always carry a valid index into the input list.
    for fragment in lines.iter().flatten() {
        if let Some(mapping_ref) = &fragment.mapping {
            assert_eq!(mappings[mapping_ref.index], mapping_ref.mapping);
        }
    }
});
