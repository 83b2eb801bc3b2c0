//! Catalog of Scandinavian historical periods, from the retreat of the ice
//! to the mid twentieth century.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Prehistoric,
    Ancient,
    Medieval,
    EarlyModern,
    Modern,
}

impl Era {
    pub const ALL: [Era; 5] = [
        Era::Prehistoric,
        Era::Ancient,
        Era::Medieval,
        Era::EarlyModern,
        Era::Modern,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Era::Prehistoric => "Förhistorisk tid",
            Era::Ancient => "Forntiden",
            Era::Medieval => "Medeltiden",
            Era::EarlyModern => "Tidigmodern tid",
            Era::Modern => "Modern tid",
        }
    }

    /// Eras old enough for shoreline displacement to matter.
    pub fn is_geological(self) -> bool {
        matches!(self, Era::Prehistoric | Era::Ancient)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Landscape {
    pub rural: &'static str,
    pub coastal: &'static str,
    pub urban: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Features {
    pub buildings: &'static str,
    pub people: &'static str,
    pub animals: &'static str,
    pub vegetation: &'static str,
    pub technology: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimePeriod {
    pub id: &'static str,
    pub name: &'static str,
    pub era: Era,
    /// Calendar year, negative before the common era.
    pub year_start: i32,
    pub year_end: i32,
    pub year_label: &'static str,
    pub description: &'static str,
    pub landscape: Landscape,
    pub features: Features,
    pub color: &'static str,
}

impl TimePeriod {
    /// Approximate years before present of the period start.
    pub fn years_bp(&self) -> u32 {
        if self.year_start < 0 {
            self.year_start.unsigned_abs() + 2000
        } else {
            2000_i32.saturating_sub(self.year_start).max(0) as u32
        }
    }
}

pub const TIME_PERIODS: &[TimePeriod] = &[
    TimePeriod {
        id: "stone_early",
        name: "Äldre stenåldern",
        era: Era::Prehistoric,
        year_start: -10_000,
        year_end: -4_000,
        year_label: "10 000 - 4 000 f.Kr.",
        description: "Jägare och samlare. Isen har nyligen smält. Människor lever i små grupper och följer viltet.",
        landscape: Landscape {
            rural: "Vild urskog med tall och björk, sjöar och våtmarker, inga vägar eller byggnader",
            coastal: "Klippiga stränder, sälkolonier, fiskare i enkla kanoter av trä",
            urban: "Inga städer existerar - endast tillfälliga lägerplatser",
        },
        features: Features {
            buildings: "Tillfälliga hyddor av skinn och grenar, vindskydd",
            people: "Jägare klädda i djurhudar, små familjegrupper",
            animals: "Älg, ren, vildsvin, säl, varg, björn",
            vegetation: "Tall, björk, vide, bärbuskar, vass vid vatten",
            technology: "Stenverktyg, pilbågar, fiskeredskap av ben",
        },
        color: "#8B4513",
    },
    TimePeriod {
        id: "stone_middle",
        name: "Mellanneolitikum",
        era: Era::Prehistoric,
        year_start: -4_000,
        year_end: -2_500,
        year_label: "4 000 - 2 500 f.Kr.",
        description: "De första bönderna. Jordbruk och boskapsskötsel börjar. Megalitgravar byggs.",
        landscape: Landscape {
            rural: "Öppnare landskap, små åkrar, betesmarker, lövskog",
            coastal: "Skalbankar vid kusten, fiskelägen, enkla båtar",
            urban: "Inga städer - större byar med långhus",
        },
        features: Features {
            buildings: "Långhus av trä och lera, megalitgravar (dösar, gånggrifter)",
            people: "Bönder i enkla linnekläder, kvinnor med keramikkärl",
            animals: "Tamboskap (kor, får, getter), hundar, vilda djur i skogen",
            vegetation: "Odlade fält med korn, lövängar, ek och hassel",
            technology: "Slipade stenyxor, keramik, enkla plogar",
        },
        color: "#A0522D",
    },
    TimePeriod {
        id: "stone_late",
        name: "Yngre stenåldern",
        era: Era::Prehistoric,
        year_start: -2_500,
        year_end: -1_700,
        year_label: "2 500 - 1 700 f.Kr.",
        description: "Stridsyxekulturen. Mer hierarkiska samhällen. Handel över stora avstånd.",
        landscape: Landscape {
            rural: "Jordbrukslandskap med gårdar, gravhögar på kullar",
            coastal: "Handelsplatser vid kusten, större båtar",
            urban: "Inga städer - men större bosättningar",
        },
        features: Features {
            buildings: "Större gårdar, hövdingahus, gravhögar",
            people: "Hövdingar med stridsyxor, bondefamiljer, handelsmän",
            animals: "Hästar börjar användas, kor, får, hundar",
            vegetation: "Mer öppet odlingslandskap, ek och bok",
            technology: "Stridsyxor, bättre keramik, begynnande metallkunskap",
        },
        color: "#CD853F",
    },
    TimePeriod {
        id: "bronze",
        name: "Bronsåldern",
        era: Era::Ancient,
        year_start: -1_700,
        year_end: -500,
        year_label: "1 700 - 500 f.Kr.",
        description: "Brons används för vapen och smycken. Rika hövdingadömen. Hällristningar.",
        landscape: Landscape {
            rural: "Öppna betesmarker, gravrösen på höjder, hällristningar vid vatten",
            coastal: "Handelshamnar, bronsgjutning, skepp avbildade på hällar",
            urban: "Inga städer - men centralplatser för handel och kult",
        },
        features: Features {
            buildings: "Stora trähus, kultplatser, gravrösen av sten",
            people: "Hövdingar med bronssvärd, kvinnor med spiralsmycken, präster",
            animals: "Hästar (även för ridning), oxar för dragning, får, grisar",
            vegetation: "Öppnare landskap, ljunghedar, ekar på kullar",
            technology: "Bronssvärd, yxor, smycken, tvåhjuliga vagnar, skepp",
        },
        color: "#CD7F32",
    },
    TimePeriod {
        id: "iron_early",
        name: "Äldre järnåldern",
        era: Era::Ancient,
        year_start: -500,
        year_end: 400,
        year_label: "500 f.Kr. - 400 e.Kr.",
        description: "Järn ersätter brons. Romersk påverkan. Runor börjar användas.",
        landscape: Landscape {
            rural: "Välorganiserade gårdar, stensträngar, gravfält",
            coastal: "Handelsplatser, kontakt med romarriket",
            urban: "Inga städer - men stora gårdar och handelsplatser",
        },
        features: Features {
            buildings: "Långhus med eldstad, förrådsbodar, gravfält med högar",
            people: "Bönder, smeder, hövdingar med järnsvärd, trälar",
            animals: "Hästar, kor, grisar, får, höns, hundar",
            vegetation: "Jordbrukslandskap, ängar, mindre skog",
            technology: "Järnverktyg, vävstolar, runor, mynt (importerade)",
        },
        color: "#708090",
    },
    TimePeriod {
        id: "iron_late",
        name: "Vendeltid",
        era: Era::Ancient,
        year_start: 400,
        year_end: 800,
        year_label: "400 - 800 e.Kr.",
        description: "Strax före vikingatiden. Rika gravfynd. Hjälmar och svärd av hög kvalitet.",
        landscape: Landscape {
            rural: "Stormannagårdar, kultplatser, skeppssättningar",
            coastal: "Handelsplatser som Helgö, tidiga hamnar",
            urban: "Handelsplatser börjar likna små städer",
        },
        features: Features {
            buildings: "Hallbyggnader för hövdingar, smedjor, båtskjul",
            people: "Kungar och hövdingar i praktfulla kläder, skalder, smeder",
            animals: "Hästar (statussymbol), hundar, hökar för jakt",
            vegetation: "Odlingslandskap, heliga lundar",
            technology: "Praktfulla hjälmar, mönstervällda svärd, guldsmide",
        },
        color: "#4682B4",
    },
    TimePeriod {
        id: "viking",
        name: "Vikingatiden",
        era: Era::Medieval,
        year_start: 800,
        year_end: 1_050,
        year_label: "800 - 1050 e.Kr.",
        description: "Vikingar seglar över haven. Handel och plundring. Birka och Sigtuna grundas.",
        landscape: Landscape {
            rural: "Välorganiserade byar, runstenar vid vägar",
            coastal: "Hamnar med vikingaskepp, varv, handelsplatser",
            urban: "Birka, Sigtuna - tidiga handelsstäder med hus av trä",
        },
        features: Features {
            buildings: "Långhus, hovsalar, stavkyrkor (sent), bryggor",
            people: "Vikingar med yxor och sköldar, köpmän, trälar, völvor",
            animals: "Hästar, hundar, grisar, kor, höns, korpar (Odins fåglar)",
            vegetation: "Odlingslandskap, äng och hage, skog för skeppsbygge",
            technology: "Vikingaskepp, svärd, runstenar, silvermynt, vävnader",
        },
        color: "#2F4F4F",
    },
    TimePeriod {
        id: "medieval_early",
        name: "Tidig medeltid",
        era: Era::Medieval,
        year_start: 1_050,
        year_end: 1_300,
        year_label: "1050 - 1300 e.Kr.",
        description: "Kristendomen etableras. Kyrkor byggs i sten. Städer grundas.",
        landscape: Landscape {
            rural: "Byar med tegelgårdar, kyrkor i varje socken",
            coastal: "Fisklägen, Hansakontakter börjar",
            urban: "Stockholm grundas, stenkyrkor, torg och handelsgator",
        },
        features: Features {
            buildings: "Romanska stenkyrkor, kloster, enkla trähus, borgar",
            people: "Munkar och nunnor, riddare, bönder, köpmän, kungar",
            animals: "Hästar, oxar, får, getter, hundar, duvslag",
            vegetation: "Odlingslandskap, äng, klostergårdar med örtagårdar",
            technology: "Järnplogar, vattenkvarnar, stenkyrkor, pergament",
        },
        color: "#8B0000",
    },
    TimePeriod {
        id: "medieval_late",
        name: "Sen medeltid",
        era: Era::Medieval,
        year_start: 1_300,
        year_end: 1_500,
        year_label: "1300 - 1500 e.Kr.",
        description: "Hanseatisk handel. Digerdöden. Unionsstrid.",
        landscape: Landscape {
            rural: "Ödebyar efter pesten, skogsåterväxt",
            coastal: "Hansakontor, fiskhandel",
            urban: "Befästa städer, kyrkor, rådhus, köpmannahus",
        },
        features: Features {
            buildings: "Gotiska kyrkor, stenhus i städer, borgar",
            people: "Hansaköpmän, riddare, bönder, borgare, tiggarmunkar",
            animals: "Hästar, oxar, grisar, höns, hundar",
            vegetation: "Mer skog (efter pesten), odlingsmark",
            technology: "Armborst, krutvapen (sent), tryckpress (sent)",
        },
        color: "#800020",
    },
    TimePeriod {
        id: "early_modern",
        name: "Stormaktstiden",
        era: Era::EarlyModern,
        year_start: 1_611,
        year_end: 1_721,
        year_label: "1611 - 1721 e.Kr.",
        description: "Sverige är en stormakt. Barock. Gustav II Adolf och Karl XII.",
        landscape: Landscape {
            rural: "Reglerade byar, adelsgods, enkla torparstugor",
            coastal: "Örlogshamnar, varv, fästningar",
            urban: "Regelbundna rutnätsstäder, barockkyrkor, slott",
        },
        features: Features {
            buildings: "Barockslott, kyrkor med torn, korsvirkeshus, torp",
            people: "Soldater i uniformer, adelsmän med peruker, bönder, präster",
            animals: "Hästar (kavalleri), oxar, kor, höns",
            vegetation: "Odlingslandskap, trädgårdar i barockstil",
            technology: "Musköter, kanoner, segelskepp, tryckta böcker",
        },
        color: "#4169E1",
    },
    TimePeriod {
        id: "industrial",
        name: "1800-talet",
        era: Era::Modern,
        year_start: 1_800,
        year_end: 1_900,
        year_label: "1800 - 1900 e.Kr.",
        description: "Industrialisering. Emigration till Amerika. Järnvägen byggs.",
        landscape: Landscape {
            rural: "Skiftade byar, röda stugor, stenmurar",
            coastal: "Fisklägen, sommargäster börjar komma",
            urban: "Fabriker, arbetarbostäder, stationssamhällen",
        },
        features: Features {
            buildings: "Röda trästugor, fabriker, järnvägsstationer, kyrkor",
            people: "Fabriksarbetare, bönder, borgare i hög hatt, emigranter",
            animals: "Hästar för transport, kor, grisar, höns",
            vegetation: "Öppet jordbrukslandskap, björkalléer",
            technology: "Ånglok, telegrafer, fotografi, gaslyktor",
        },
        color: "#556B2F",
    },
    TimePeriod {
        id: "early_1900s",
        name: "Tidigt 1900-tal",
        era: Era::Modern,
        year_start: 1_900,
        year_end: 1_950,
        year_label: "1900 - 1950 e.Kr.",
        description: "Folkhemmet börjar byggas. Bilar dyker upp. Världskrigen.",
        landscape: Landscape {
            rural: "Jordbruk med traktorer börjar, landsbygden avfolkas",
            coastal: "Badorter, fiskeindustri",
            urban: "Funktionalism, spårvagnar, varuhus, biografer",
        },
        features: Features {
            buildings: "Funkishus, folkhemslägenheter, vattentorn, biografer",
            people: "Arbetare med keps, kvinnor i 20-talsklänningar, barn i skoluniform",
            animals: "Hästar (fortfarande vanliga), kor, hundar, katter",
            vegetation: "Trädgårdsstäder, kolonilotter, parker",
            technology: "Bilar (T-Ford), cyklar, radio, telefon, el i hemmen",
        },
        color: "#2E8B57",
    },
];

pub fn period_by_id(id: &str) -> Option<&'static TimePeriod> {
    TIME_PERIODS.iter().find(|period| period.id == id)
}

/// Like [`period_by_id`] but unknown ids resolve to the oldest period.
pub fn period_or_default(id: &str) -> &'static TimePeriod {
    period_by_id(id).unwrap_or(&TIME_PERIODS[0])
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraGroup {
    pub era: Era,
    pub display_name: &'static str,
    pub periods: Vec<&'static TimePeriod>,
}

/// Periods grouped by era, eras in chronological order, empty eras skipped.
pub fn periods_by_era() -> Vec<EraGroup> {
    Era::ALL
        .iter()
        .map(|&era| EraGroup {
            era,
            display_name: era.display_name(),
            periods: TIME_PERIODS.iter().filter(|p| p.era == era).collect(),
        })
        .filter(|group| !group.periods.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_chronological_and_disjoint() {
        for pair in TIME_PERIODS.windows(2) {
            assert!(pair[0].year_start < pair[1].year_start);
            assert!(pair[0].year_end <= pair[1].year_start, "{} overlaps {}", pair[0].id, pair[1].id);
        }
    }

    #[test]
    fn unknown_period_resolves_to_first() {
        assert_eq!(period_or_default("space_age").id, "stone_early");
        assert_eq!(period_or_default("viking").year_start, 800);
        assert!(period_by_id("space_age").is_none());
    }

    #[test]
    fn years_before_present() {
        assert_eq!(period_or_default("stone_early").years_bp(), 12_000);
        assert_eq!(period_or_default("bronze").years_bp(), 3_700);
        assert_eq!(period_or_default("iron_late").years_bp(), 1_600);
    }

    #[test]
    fn grouping_covers_every_period() {
        let groups = periods_by_era();
        assert_eq!(groups.len(), 5);
        assert_eq!(groups[0].display_name, "Förhistorisk tid");
        let total: usize = groups.iter().map(|g| g.periods.len()).sum();
        assert_eq!(total, TIME_PERIODS.len());
    }
}
