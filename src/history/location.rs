//! Urban / coastal / rural classification of a coordinate at a given year.

use serde::Serialize;

use super::cities::{nearest_city, CityInfo, HistoricalType, SWEDISH_CITIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Urban,
    Coastal,
    Rural,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAnalysis {
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub nearest_city: Option<&'static CityInfo>,
    /// Kilometres, rounded to one decimal.
    pub distance_to_city: f64,
    pub city_existed_in_period: bool,
    pub historical_description: String,
}

impl LocationAnalysis {
    /// The nearest city, but only when the point is inside a city that
    /// already stood at the analysed year.
    pub fn existing_city(&self) -> Option<&'static CityInfo> {
        match (self.location_type, self.city_existed_in_period) {
            (LocationType::Urban, true) => self.nearest_city,
            _ => None,
        }
    }
}

const URBAN_RADIUS_KM: f64 = 5.0;
const FUTURE_SITE_RADIUS_KM: f64 = 2.0;

/// Rough boxes around the Swedish coastline.
const COAST_ZONES: &[(&str, fn(f64, f64) -> bool)] = &[
    ("västkusten", |lat, lng| lng < 12.5 && (55.5..=59.0).contains(&lat)),
    ("skåne", |lat, lng| lat < 56.5 && lng > 13.5 && lng < 15.0),
    ("blekinge_kalmar", |lat, lng| {
        (55.5..58.0).contains(&lat) && lng > 15.0 && lng < 17.0
    }),
    ("stockholms_skärgård", |lat, lng| (58.5..60.5).contains(&lat) && lng > 18.0),
    ("norrlandskusten", |lat, lng| lat >= 60.0 && lng > 17.0 && lng < 24.0),
    ("gotland", |lat, lng| {
        (56.9..=58.4).contains(&lat) && (18.0..=19.5).contains(&lng)
    }),
];

pub fn is_near_coast(lat: f64, lng: f64) -> bool {
    COAST_ZONES.iter().any(|(_, inside)| inside(lat, lng))
}

/// Narrative brackets: the first entry whose bound exceeds the year wins.
type Brackets = &'static [(i32, &'static str)];

const COASTAL_NARRATIVE: Brackets = &[
    (-8000, "Du befinner dig vid den forna Östersjökusten, där jägare-samlare fiskar och jagar säl."),
    (-4000, "Kusten här är rik på fisk och säl. Stenåldersmänniskor har lägerplatser längs stranden."),
    (800, "Ett kustsamhälle med fiskare och handelsmän. Båtar syns i viken."),
    (i32::MAX, "En livlig kust med handel och fiske."),
];

const RURAL_NARRATIVE: Brackets = &[
    (-4000, "Vild urskog så långt ögat når. Jägare och samlare rör sig genom landskapet."),
    (-1700, "Jordbruksbygd med små gårdar och betesmark. Röjda gläntor i skogen."),
    (800, "Jordbrukslandskap med byar och gårdar. Gravhögar syns på kullarna."),
    (i32::MAX, "Landsbygd med byar, gårdar och kyrkor."),
];

fn narrative(brackets: Brackets, year: i32) -> &'static str {
    brackets
        .iter()
        .find(|(below, _)| year < *below)
        .map(|(_, text)| *text)
        .unwrap_or(brackets[brackets.len() - 1].1)
}

pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} f.Kr.", year.unsigned_abs())
    } else {
        format!("{year} e.Kr.")
    }
}

fn urban_narrative(city: &CityInfo) -> String {
    match city.historical_type {
        HistoricalType::AncientSettlement => format!(
            "Du befinner dig vid {}, en av Skandinaviens äldsta bosättningar.",
            city.name
        ),
        HistoricalType::MedievalTown => {
            format!("Du befinner dig i {}, en medeltida handelsstad.", city.name)
        }
        _ => format!("Du befinner dig i {}.", city.name),
    }
}

fn future_site_narrative(city: &CityInfo, year: i32, coastal: bool) -> String {
    if year < -4000 {
        format!(
            "Här, där {} en dag kommer att grundas ({}), finns nu endast vildmark.",
            city.name,
            format_year(city.founded_year)
        )
    } else {
        format!(
            "Denna plats kommer senare att bli {} (grundat {}), men nu är det {}.",
            city.name,
            format_year(city.founded_year),
            if coastal {
                "en kustremsa med fiskelägen"
            } else {
                "glest befolkad bygd"
            }
        )
    }
}

/// Classifies the point against the settlement catalog and the coast boxes.
/// Total: every input, finite or not, yields one of the three types.
pub fn analyze_location_type(lat: f64, lng: f64, year_start: i32) -> LocationAnalysis {
    let nearest = nearest_city(SWEDISH_CITIES, lat, lng);
    let city_existed_in_period = nearest.is_some_and(|(city, _)| city.existed_in(year_start));
    let threshold = if city_existed_in_period {
        URBAN_RADIUS_KM
    } else {
        FUTURE_SITE_RADIUS_KM
    };

    let coastal = is_near_coast(lat, lng);
    let fallback_type = if coastal {
        LocationType::Coastal
    } else {
        LocationType::Rural
    };
    let fallback_narrative = || {
        let brackets = if coastal {
            COASTAL_NARRATIVE
        } else {
            RURAL_NARRATIVE
        };
        narrative(brackets, year_start).to_string()
    };

    let (location_type, historical_description) = match nearest {
        Some((city, distance)) if distance < threshold => {
            if city_existed_in_period {
                (LocationType::Urban, urban_narrative(city))
            } else {
                (fallback_type, future_site_narrative(city, year_start, coastal))
            }
        }
        _ => (fallback_type, fallback_narrative()),
    };

    let distance_to_city = nearest
        .map(|(_, distance)| (distance * 10.0).round() / 10.0)
        .unwrap_or(f64::INFINITY);

    LocationAnalysis {
        location_type,
        nearest_city: nearest.map(|(city, _)| city),
        distance_to_city,
        city_existed_in_period,
        historical_description,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CityEra {
    Modern,
    Industrial,
    EarlyModern,
    Medieval,
    Viking,
    Prehistoric,
}

impl CityEra {
    /// Checked in this order; the first era the year reaches and the city
    /// has a description for wins.
    const PRIORITY: [CityEra; 6] = [
        CityEra::Modern,
        CityEra::Industrial,
        CityEra::EarlyModern,
        CityEra::Medieval,
        CityEra::Viking,
        CityEra::Prehistoric,
    ];

    fn reached_by(self, year: i32) -> bool {
        match self {
            CityEra::Modern => year >= 1900,
            CityEra::Industrial => year >= 1800,
            CityEra::EarlyModern => year >= 1600,
            CityEra::Medieval => year >= 1000,
            CityEra::Viking => year >= 800,
            CityEra::Prehistoric => true,
        }
    }
}

const CITY_DESCRIPTIONS: &[(&str, &[(CityEra, &str)])] = &[
    (
        "Stockholm",
        &[
            (CityEra::Medieval, "Stockholms gamla stad med trähus, kyrkor och smala gränder. Handel vid Stortorget."),
            (CityEra::EarlyModern, "Stormaktstidens Stockholm med slottet under byggnad, Tyska kyrkan och livlig hamn."),
            (CityEra::Industrial, "Stockholms stenstad växer. Ångslupar på Strömmen, gaslyktor längs gatorna."),
            (CityEra::Modern, "Modern storstad med spårvagnar, bilar och höga stenhus."),
        ],
    ),
    (
        "Göteborg",
        &[
            (CityEra::EarlyModern, "Den nygrundade fästningsstaden Göteborg med vallar, kanaler och holländska köpmän."),
            (CityEra::Industrial, "Göteborgs hamn full av segelfartyg. Arbetarbostäder växer upp kring fabrikerna."),
            (CityEra::Modern, "Industristad med varv, hamnar och Liseberg."),
        ],
    ),
    (
        "Uppsala",
        &[
            (CityEra::Medieval, "Uppsala domkyrka reser sig över staden. Präster, studenter och pilgrimer i gatorna."),
            (CityEra::EarlyModern, "Universitetsstad med studentnationer och bokhandlar."),
            (CityEra::Industrial, "Universitetsstaden Uppsala med järnvägsstation och växande förort."),
            (CityEra::Modern, "Modern universitetsstad med cykelvägar och forskningscentra."),
        ],
    ),
    (
        "Visby",
        &[
            (CityEra::Medieval, "Hansastaden Visby i sin glans. Köpmän från hela Östersjön, ringmur under byggnad."),
            (CityEra::EarlyModern, "Visby efter Hansans fall - en mindre lantstad inom de mäktiga murarna."),
            (CityEra::Industrial, "Visby som badort och turistmål. Ruiner från storhetstiden."),
            (CityEra::Modern, "Världsarvsstad med välbevarad ringmur och sommargäster."),
        ],
    ),
    (
        "Birka",
        &[(CityEra::Viking, "Vikingatida handelsstad på Björkö. Köpmän, hantverkare, och skepp från fjärran länder.")],
    ),
    (
        "Gamla Uppsala",
        &[
            (CityEra::Prehistoric, "De mäktiga kungshögarna. Hednatempel och blot till de gamla gudarna."),
            (CityEra::Viking, "Svearikets religiösa centrum. Kungshögarna och det stora templet."),
            (CityEra::Medieval, "Det gamla Uppsala - nu i skuggan av nya Uppsala. Kyrkan står på den forna kultplatsen."),
        ],
    ),
    (
        "Sigtuna",
        &[
            (CityEra::Viking, "Sveriges första stad. Kyrkor byggs, mynt präglas, kristendomen breder ut sig."),
            (CityEra::Medieval, "Sigtuna som kungasäte och kyrkligt centrum. Kloster och stenkyrkor."),
        ],
    ),
    (
        "Lund",
        &[
            (CityEra::Medieval, "Ärkebiskopens stad. Domkyrkan, kloster och den nordiska kyrkans centrum."),
            (CityEra::EarlyModern, "Universitetet grundas. Studenter och professorer i de medeltida gatorna."),
            (CityEra::Modern, "Modern universitetsstad med bevarat medeltida centrum."),
        ],
    ),
];

fn generic_city_description(city: &CityInfo, year: i32) -> String {
    if year >= 1900 {
        format!("{} - en modern svensk stad.", city.name)
    } else if year >= 1800 {
        format!("{} under industrialiseringen.", city.name)
    } else if year >= 1600 {
        format!("{} under stormaktstiden.", city.name)
    } else if year >= 1000 {
        format!("Den medeltida staden {}.", city.name)
    } else {
        format!("{} som tidig bosättning.", city.name)
    }
}

/// What the city looked like at `year_start`, or that it did not yet exist.
pub fn city_description(city: &CityInfo, year_start: i32) -> String {
    if !city.existed_in(year_start) {
        return format!(
            "{} existerar inte än - grundas {}",
            city.name,
            format_year(city.founded_year)
        );
    }

    let Some((_, entries)) = CITY_DESCRIPTIONS.iter().find(|(name, _)| *name == city.name) else {
        return generic_city_description(city, year_start);
    };

    CityEra::PRIORITY
        .iter()
        .filter(|era| era.reached_by(year_start))
        .find_map(|era| entries.iter().find(|(e, _)| e == era).map(|(_, text)| *text))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} under denna tidsperiod.", city.name))
}
