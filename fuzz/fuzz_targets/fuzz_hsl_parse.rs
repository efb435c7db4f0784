#![no_main]

use huetheme_palette::{ColorRole, Hsl};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Decoding must never panic. Anything that decodes must re-encode to a
    // string that decodes to the same color.
    if let Ok(color) = text.parse::<Hsl>() {
        let printed = color.to_string();
        let reparsed: Hsl = printed.parse().expect("formatted color must parse");
        assert_eq!(reparsed.to_string(), printed);
        let _ = color.to_rgb();
    }

    if let Ok(role) = text.parse::<ColorRole>() {
        assert_eq!(role.key(), text);
    }
});
