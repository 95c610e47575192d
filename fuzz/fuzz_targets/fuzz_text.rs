#![no_main]

use farsikit_common::text::{normalize, slugify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let normalized = normalize(text);
    assert_eq!(normalize(&normalized), normalized);

    let slug = slugify(text);
    assert!(
        slug.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    );
});
