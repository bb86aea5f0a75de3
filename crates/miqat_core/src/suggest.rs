use miqat_types::CalculationMethod;

/// Country keywords checked in order; the first match wins.
const COUNTRY_RULES: &[(&[&str], CalculationMethod)] = &[
    (&["saudi", "arabia"], CalculationMethod::Makkah),
    (&["egypt"], CalculationMethod::Egypt),
    (&["united states", "usa", "america", "canada"], CalculationMethod::Isna),
    (&["pakistan"], CalculationMethod::Karachi),
    (&["iran"], CalculationMethod::Tehran),
    (&["turkey"], CalculationMethod::Turkey),
    (&["france"], CalculationMethod::France),
    (&["russia"], CalculationMethod::Russia),
    (&["kuwait"], CalculationMethod::Kuwait),
    (&["qatar"], CalculationMethod::Qatar),
    (&["uae", "emirates"], CalculationMethod::Gulf),
    (&["singapore"], CalculationMethod::Singapore),
    (&["malaysia"], CalculationMethod::Jakim),
    (&["indonesia"], CalculationMethod::Kemenag),
    (&["tunisia"], CalculationMethod::Tunisia),
    (&["algeria"], CalculationMethod::Algeria),
    (&["morocco", "maroc"], CalculationMethod::Morocco),
    (&["portugal"], CalculationMethod::Portugal),
];

/// Suggests the customary calculation method for a place name.
///
/// Matching is a case-insensitive substring test; city rules (Dubai,
/// Makkah/Mecca) take precedence over country rules. Defaults to MWL.
pub fn suggest_method(city: &str, country: &str) -> CalculationMethod {
    let city = city.trim().to_lowercase();
    let country = country.trim().to_lowercase();

    if city.contains("dubai") {
        return CalculationMethod::Dubai;
    }
    if city.contains("makkah") || city.contains("mecca") {
        return CalculationMethod::Makkah;
    }

    COUNTRY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| country.contains(k)))
        .map(|(_, method)| *method)
        .unwrap_or_default()
}
