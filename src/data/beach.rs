//! Static beach registry for Banderas Bay
//!
//! This module contains the fixed list of beaches with their coordinates,
//! exposure to NW and SW swell, usual risk season and zone of the bay.

use super::{Beach, Exposure, Zone};

/// Reference point for provider requests (centre of the bay)
pub const BAY_CENTER: (f64, f64) = (20.7000, -105.3500);

/// Static array of all beaches in the bay, ordered south to north
///
/// Registry order matters: when several beaches share the maximum risk
/// score, the first one in this list is reported as the bay-wide worst.
pub static BEACHES: [Beach; 9] = [
    Beach {
        id: "los-muertos",
        name: "Los Muertos",
        latitude: 20.6098,
        longitude: -105.2363,
        exposure_nw: Exposure::MuyAlta,
        exposure_sw: Exposure::Baja,
        risk_season: "Invierno (Nov-Abr)",
        zone: Zone::Sur,
    },
    Beach {
        id: "olas-altas",
        name: "Olas Altas",
        latitude: 20.6120,
        longitude: -105.2380,
        exposure_nw: Exposure::Alta,
        exposure_sw: Exposure::Baja,
        risk_season: "Invierno (Nov-Abr)",
        zone: Zone::Sur,
    },
    Beach {
        id: "malecon",
        name: "Malecón",
        latitude: 20.6155,
        longitude: -105.2395,
        exposure_nw: Exposure::Alta,
        exposure_sw: Exposure::Baja,
        risk_season: "Invierno (Nov-Abr)",
        zone: Zone::Sur,
    },
    Beach {
        id: "camarones",
        name: "Camarones",
        latitude: 20.6290,
        longitude: -105.2380,
        exposure_nw: Exposure::Media,
        exposure_sw: Exposure::Media,
        risk_season: "Todo el año",
        zone: Zone::Centro,
    },
    Beach {
        id: "nuevo-vallarta",
        name: "Nuevo Vallarta",
        latitude: 20.7000,
        longitude: -105.2900,
        exposure_nw: Exposure::Baja,
        exposure_sw: Exposure::Alta,
        risk_season: "Verano (May-Oct)",
        zone: Zone::Norte,
    },
    Beach {
        id: "bucerias",
        name: "Bucerías",
        latitude: 20.7530,
        longitude: -105.3340,
        exposure_nw: Exposure::Baja,
        exposure_sw: Exposure::MuyAlta,
        risk_season: "Verano (May-Oct)",
        zone: Zone::Norte,
    },
    Beach {
        id: "la-cruz",
        name: "La Cruz",
        latitude: 20.7380,
        longitude: -105.3700,
        exposure_nw: Exposure::Baja,
        exposure_sw: Exposure::Alta,
        risk_season: "Verano (May-Oct)",
        zone: Zone::Norte,
    },
    Beach {
        id: "sayulita",
        name: "Sayulita",
        latitude: 20.8690,
        longitude: -105.4410,
        exposure_nw: Exposure::Alta,
        exposure_sw: Exposure::Alta,
        risk_season: "Todo el año",
        zone: Zone::Norte,
    },
    Beach {
        id: "punta-mita",
        name: "Punta Mita",
        latitude: 20.7740,
        longitude: -105.5240,
        exposure_nw: Exposure::MuyAlta,
        exposure_sw: Exposure::Alta,
        risk_season: "Todo el año",
        zone: Zone::Norte,
    },
];

/// Get a beach by its ID
///
/// # Arguments
///
/// * `id` - The unique identifier for the beach (e.g., "los-muertos", "sayulita")
///
/// # Returns
///
/// Returns `Some(&Beach)` if found, `None` otherwise
///
/// # Example
///
/// ```
/// use pvflood::data::beach::get_beach_by_id;
///
/// if let Some(beach) = get_beach_by_id("sayulita") {
///     println!("Found: {}", beach.name);
/// }
/// ```
pub fn get_beach_by_id(id: &str) -> Option<&'static Beach> {
    BEACHES.iter().find(|beach| beach.id == id)
}

/// Find a beach by ID or by display name, ignoring case
///
/// Used for user input, where "Bucerías", "bucerias" and "BUCERIAS" should
/// all resolve. Accents in the display name must match.
pub fn find_beach(query: &str) -> Option<&'static Beach> {
    let query = query.trim();
    BEACHES.iter().find(|beach| {
        beach.id.eq_ignore_ascii_case(query) || beach.name.to_lowercase() == query.to_lowercase()
    })
}

/// Get all available beaches
///
/// # Example
///
/// ```
/// use pvflood::data::beach::all_beaches;
///
/// for beach in all_beaches() {
///     println!("{}: ({}, {})", beach.name, beach.latitude, beach.longitude);
/// }
/// ```
pub fn all_beaches() -> &'static [Beach] {
    &BEACHES
}
