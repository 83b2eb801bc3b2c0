//! Swedish settlements with approximate founding years.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoricalType {
    AncientSettlement,
    MedievalTown,
    EarlyModern,
    Industrial,
    Modern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfo {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    /// Negative before the common era.
    pub founded_year: i32,
    pub historical_type: HistoricalType,
    pub population: u32,
}

impl CityInfo {
    pub fn existed_in(&self, year: i32) -> bool {
        self.founded_year <= year
    }
}

const fn city(
    name: &'static str,
    lat: f64,
    lng: f64,
    founded_year: i32,
    historical_type: HistoricalType,
    population: u32,
) -> CityInfo {
    CityInfo {
        name,
        lat,
        lng,
        founded_year,
        historical_type,
        population,
    }
}

use HistoricalType::{AncientSettlement, EarlyModern, MedievalTown};

pub const SWEDISH_CITIES: &[CityInfo] = &[
    city("Stockholm", 59.3293, 18.0686, 1252, MedievalTown, 1_000_000),
    city("Göteborg", 57.7089, 11.9746, 1621, EarlyModern, 580_000),
    city("Malmö", 55.6050, 13.0038, 1275, MedievalTown, 350_000),
    city("Uppsala", 59.8586, 17.6389, 1164, MedievalTown, 170_000),
    city("Linköping", 58.4108, 15.6214, 1287, MedievalTown, 160_000),
    city("Västerås", 59.6099, 16.5448, 1000, AncientSettlement, 155_000),
    city("Örebro", 59.2753, 15.2134, 1200, MedievalTown, 150_000),
    city("Norrköping", 58.5877, 16.1924, 1350, MedievalTown, 140_000),
    city("Helsingborg", 56.0465, 12.6945, 1085, MedievalTown, 145_000),
    city("Jönköping", 57.7826, 14.1618, 1284, MedievalTown, 140_000),
    city("Lund", 55.7047, 13.1910, 990, AncientSettlement, 125_000),
    city("Umeå", 63.8258, 20.2630, 1622, EarlyModern, 130_000),
    city("Gävle", 60.6749, 17.1413, 1446, MedievalTown, 100_000),
    city("Borås", 57.7210, 12.9401, 1621, EarlyModern, 110_000),
    city("Sundsvall", 62.3908, 17.3069, 1621, EarlyModern, 100_000),
    city("Eskilstuna", 59.3666, 16.5077, 1659, EarlyModern, 105_000),
    city("Karlstad", 59.4022, 13.5115, 1584, EarlyModern, 95_000),
    city("Växjö", 56.8777, 14.8091, 1342, MedievalTown, 95_000),
    city("Halmstad", 56.6745, 12.8578, 1307, MedievalTown, 100_000),
    city("Luleå", 65.5848, 22.1547, 1621, EarlyModern, 80_000),
    city("Gamla Uppsala", 59.8979, 17.6330, -500, AncientSettlement, 5_000),
    city("Birka", 59.3333, 17.5500, 750, AncientSettlement, 100),
    city("Sigtuna", 59.6178, 17.7256, 970, AncientSettlement, 10_000),
    city("Visby", 57.6348, 18.2948, 900, AncientSettlement, 25_000),
    city("Kalmar", 56.6634, 16.3566, 1100, MedievalTown, 70_000),
    city("Skara", 58.3864, 13.4384, 1000, AncientSettlement, 20_000),
    city("Falun", 60.6065, 15.6355, 1641, EarlyModern, 60_000),
    city("Ystad", 55.4295, 13.8200, 1244, MedievalTown, 30_000),
    city("Trelleborg", 55.3758, 13.1566, 1257, MedievalTown, 45_000),
    city("Varberg", 57.1057, 12.2508, 1300, MedievalTown, 35_000),
    city("Karlskrona", 56.1612, 15.5869, 1680, EarlyModern, 65_000),
    city("Hudiksvall", 61.7271, 17.1053, 1582, EarlyModern, 40_000),
];

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Closest catalog entry and its distance; `None` only for an empty catalog
/// or non-finite coordinates.
pub fn nearest_city(cities: &'static [CityInfo], lat: f64, lng: f64) -> Option<(&'static CityInfo, f64)> {
    cities
        .iter()
        .map(|city| (city, haversine_km(lat, lng, city.lat, city.lng)))
        .filter(|(_, distance)| distance.is_finite())
        .min_by(|a, b| a.1.total_cmp(&b.1))
}
