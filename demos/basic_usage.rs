// ============================================================================
// Basic Usage Example
// ============================================================================

use resistor_codes::prelude::*;

fn main() -> Result<(), CodecError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Resistor Codes Example ===\n");

    // Encode a few values in both formats
    println!("Encoding values...");
    for ohms in [22.0, 470.0, 4700.0, 123_000.0, 2_200_000.0] {
        let three = encode(ohms, BandFormat::ThreeBand)?;
        let four = encode(ohms, BandFormat::FourBand)?;
        println!(
            "  {:>8}: {:<28} {}",
            display_string(ohms),
            three.names().join(" "),
            four.names().join(" ")
        );
    }

    // Decode a band sequence
    println!("\n=== Decoding ===");
    let ohms = decode(&["yellow", "violet"], "red")?;
    println!("  yellow violet red = {}", display_string(ohms));

    match decode(&["yellow", "purple"], "red") {
        Ok(ohms) => println!("  unexpected: {}", ohms),
        Err(err) => println!("  yellow purple red: {}", err),
    }

    // Card series for the renderer
    println!("\n=== Standard Card Series ===");
    let cards = CardSeries::generate(&CardSeriesConfig::e12_standard())?;
    for card in cards.iter().take(14) {
        let swatches: Vec<_> = card
            .four_band_colors()
            .iter()
            .map(|c| c.abbreviation())
            .collect();
        println!("  {:<16} {:<22} {}", card.file_stem(), card.label(), swatches.join(" "));
    }
    println!("  ... {} cards total", cards.len());

    Ok(())
}
