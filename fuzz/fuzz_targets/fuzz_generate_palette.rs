#![no_main]

use arbitrary::Arbitrary;
use huetheme_palette::{ColorRole, PaletteOptions, adjust_lightness, generate_palette_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    hue: f64,
    extended_roles: bool,
    base: f64,
    amount: f64,
}

fuzz_target!(|input: Input| {
    let lightness = adjust_lightness(input.base, input.amount);
    if !lightness.is_nan() {
        assert!((0.0..=100.0).contains(&lightness));
    }

    let options = PaletteOptions {
        extended_roles: input.extended_roles,
    };
    let palette = generate_palette_with(input.hue, &options);
    let expected = if input.extended_roles {
        ColorRole::ALL.len()
    } else {
        ColorRole::CORE_COUNT
    };
    assert_eq!(palette.len(), expected);
    for (_, color) in palette.entries() {
        let _ = color.to_string();
    }
});
