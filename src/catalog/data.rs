//! Fixed geography of the suburban network: the flat station registry,
//! per-line routes, and the display polylines.

use super::{Line, Station};
use crate::shared::geo::Coordinate;

const STATIONS: &[(&str, &str, f64, f64)] = &[
    // Western line
    ("st-ccg", "Churchgate", 18.9322, 72.8264),
    ("st-mcl", "Mumbai Central", 18.9696, 72.8194),
    ("st-ddr-w", "Dadar (Western)", 19.0178, 72.8478),
    ("st-bnd", "Bandra", 19.0544, 72.8402),
    ("st-adh", "Andheri", 19.1136, 72.8697),
    ("st-bvi", "Borivali", 19.2310, 72.8566),
    ("st-vir", "Virar", 19.4700, 72.8100),
    // Central line
    ("st-csmt", "CSMT", 18.9400, 72.8353),
    ("st-byc", "Byculla", 18.9750, 72.8335),
    ("st-ddr-c", "Dadar (Central)", 19.0178, 72.8478),
    ("st-kur", "Kurla", 19.0657, 72.8910),
    ("st-thn", "Thane", 19.1911, 72.9707),
    ("st-kyn", "Kalyan", 19.2403, 73.1305),
    // Harbour line
    ("st-vdl", "Vadala Road", 19.0166, 72.8587),
    ("st-chb", "Chunabhatti", 19.0510, 72.8760),
    ("st-vsh", "Vashi", 19.0770, 72.9980),
    ("st-mnk", "Mankhurd", 19.0485, 72.9322),
    ("st-pvl", "Panvel", 18.9894, 73.1175),
];

const WESTERN_ROUTE: &[&str] = &[
    "st-ccg", "st-mcl", "st-ddr-w", "st-bnd", "st-adh", "st-bvi", "st-vir",
];

const CENTRAL_ROUTE: &[&str] = &[
    "st-csmt", "st-byc", "st-ddr-c", "st-kur", "st-thn", "st-kyn",
];

// Harbour stops are interleaved with the other lines in the flat registry,
// so the route is curated by id rather than sliced.
const HARBOUR_ROUTE: &[&str] = &[
    "st-csmt", "st-vdl", "st-chb", "st-kur", "st-mnk", "st-vsh", "st-pvl",
];

const WESTERN_TRACK: &[Coordinate] = &[
    Coordinate::new(18.9322, 72.8264), // Churchgate
    Coordinate::new(18.9696, 72.8194), // Mumbai Central
    Coordinate::new(19.0178, 72.8478), // Dadar
    Coordinate::new(19.0544, 72.8402), // Bandra
    Coordinate::new(19.1136, 72.8697), // Andheri
    Coordinate::new(19.2310, 72.8566), // Borivali
    Coordinate::new(19.4700, 72.8100), // Virar
];

const CENTRAL_TRACK: &[Coordinate] = &[
    Coordinate::new(18.9400, 72.8353), // CSMT
    Coordinate::new(18.9750, 72.8335), // Byculla
    Coordinate::new(19.0178, 72.8478), // Dadar
    Coordinate::new(19.0657, 72.8910), // Kurla
    Coordinate::new(19.1911, 72.9707), // Thane
    Coordinate::new(19.2403, 73.1305), // Kalyan
];

const HARBOUR_TRACK: &[Coordinate] = &[
    Coordinate::new(18.9400, 72.8353), // CSMT
    Coordinate::new(19.0166, 72.8587), // Vadala
    Coordinate::new(19.0510, 72.8760), // Chunabhatti
    Coordinate::new(19.0657, 72.8910), // Kurla
    Coordinate::new(19.0485, 72.9322), // Mankhurd
    Coordinate::new(19.0770, 72.9980), // Vashi
    Coordinate::new(18.9894, 73.1175), // Panvel
];

pub(super) fn stations() -> Vec<Station> {
    STATIONS
        .iter()
        .enumerate()
        .map(|(i, (id, name, latitude, longitude))| Station {
            index: i as u32,
            id: (*id).into(),
            name: (*name).into(),
            normalized_name: name.to_lowercase().into(),
            coordinate: Coordinate::new(*latitude, *longitude),
        })
        .collect()
}

pub(super) fn routes() -> [(Line, &'static [&'static str]); 3] {
    [
        (Line::Western, WESTERN_ROUTE),
        (Line::Central, CENTRAL_ROUTE),
        (Line::Harbour, HARBOUR_ROUTE),
    ]
}

pub(super) fn track(line: Line) -> &'static [Coordinate] {
    match line {
        Line::Western => WESTERN_TRACK,
        Line::Central => CENTRAL_TRACK,
        Line::Harbour => HARBOUR_TRACK,
    }
}
