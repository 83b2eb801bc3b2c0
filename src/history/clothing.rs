//! Period-correct dress for people appearing in a generated scene.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodClothing {
    pub description: &'static str,
    pub hair: &'static str,
    pub accessories: &'static str,
}

/// `(first year no longer covered, clothing)`, oldest first.
const CLOTHING_BRACKETS: &[(i32, PeriodClothing)] = &[
    (
        -4000,
        PeriodClothing {
            description: "Simple animal hide clothing - deer or seal skin tunic, leather wrappings around legs and feet. Raw, untanned furs for warmth. No woven fabric.",
            hair: "Long, unkempt natural hair. Men may have beards. No elaborate styling, possibly tied back with leather thong.",
            accessories: "Bone or antler pendants, shell necklaces, leather pouches. Stone tools at belt. NO metal of any kind.",
        },
    ),
    (
        -1700,
        PeriodClothing {
            description: "Woven wool or linen tunics, reaching to knees. Leather belt. Simple leather shoes or sandals. Fur cloaks for warmth.",
            hair: "Shoulder-length hair, sometimes braided. Men with short beards. Simple bone or wooden hair pins.",
            accessories: "Amber beads, bone buttons, flint knife at belt. Pottery vessels. NO metal jewelry.",
        },
    ),
    (
        -500,
        PeriodClothing {
            description: "Wool tunics with woven patterns, bronze fibulae (brooches) to fasten cloaks. Women in long dresses with corded skirts. Leather belts with bronze buckles.",
            hair: "Elaborate hairstyles - women with hair nets, men with topknots or braids. Bronze hair rings.",
            accessories: "Bronze spiral arm rings, neck rings (torques), belt plates with sun symbols. Bronze daggers for high status.",
        },
    ),
    (
        400,
        PeriodClothing {
            description: "Wool and linen clothing. Men in trousers and tunics, women in long peplos-style dresses. Iron fibulae. Leather boots.",
            hair: "Suebian knot (hair tied on one side) for some men. Women with long braided hair. Red hair dye from plants.",
            accessories: "Iron and bronze jewelry, glass beads imported from Rome. Belt buckles, arm rings. Runic amulets.",
        },
    ),
    (
        1050,
        PeriodClothing {
            description: "Viking-age clothing: men in wool tunics over trousers, leather belts. Women in linen underdress with wool overdress (hangerock) fastened with oval brooches.",
            hair: "Men: long hair, often tied back, beards common. Women: long hair, often covered with linen cap or headscarf. Braids.",
            accessories: "Silver and bronze jewelry - Thor hammers, arm rings, bead necklaces. Decorated leather belts. Iron knives.",
        },
    ),
    (
        1300,
        PeriodClothing {
            description: "Medieval tunics reaching below knee for men, long dresses for women. Wool cloaks with hood (chaperon). Simple leather shoes.",
            hair: "Men: bowl-cut hair, clean-shaven faces becoming common. Women: hair covered by wimple or veil, only maidens show hair.",
            accessories: "Simple cross pendants, leather pouches, belt knives. Pilgrim badges. NO elaborate jewelry for common folk.",
        },
    ),
    (
        1500,
        PeriodClothing {
            description: "Fitted tunics (cotehardie) for men, long gowns with fitted bodices for women. Pointed shoes (poulaines). Wool and linen, some silk for wealthy.",
            hair: "Men: hair to ears or shoulders, some with fashionable forked beards. Women: elaborate headdresses (hennin), hair hidden.",
            accessories: "Belt pouches, rosary beads, decorative belt buckles. Brooches and rings for the wealthy.",
        },
    ),
    (
        1700,
        PeriodClothing {
            description: "Doublets and breeches for men, full skirts with bodices for women. Ruffs or falling collars. Leather boots for men, heeled shoes for women.",
            hair: "Men: longer hair becoming fashionable, mustaches and pointed beards. Women: hair styled up with curls, often decorated.",
            accessories: "Lace collars, decorative buttons, rapiers for gentlemen. Pearl jewelry, embroidered gloves.",
        },
    ),
    (
        1800,
        PeriodClothing {
            description: "Coat, waistcoat and breeches for men. Wide skirts with tight bodices for women. Elaborate silk and brocade for wealthy, simple wool for common.",
            hair: "Men: powdered wigs or natural hair tied back. Women: elaborate tall hairstyles, powdered. Tricorn hats for men.",
            accessories: "Snuff boxes, pocket watches, fans for ladies. Buckled shoes. Elaborate lace cuffs.",
        },
    ),
    (
        1900,
        PeriodClothing {
            description: "Men: dark suits, top hats, cravats. Women: long dresses with crinolines (early) or bustles (late), high collars. Cotton and wool.",
            hair: "Men: short hair, sideburns or full beards. Women: elaborate updos with curls, bonnets outdoors.",
            accessories: "Pocket watches with chains, walking canes for gentlemen. Parasols, jewelry, gloves for ladies.",
        },
    ),
];

const EARLY_1900S: PeriodClothing = PeriodClothing {
    description: "Men: three-piece suits, bowler or flat caps. Women: long skirts to early 1920s, then shorter. Wool coats, cotton shirts.",
    hair: "Men: short, neat hair, mustaches common. Women: Gibson Girl updos (early), then bob cuts (1920s).",
    accessories: "Wristwatches replacing pocket watches. Cloche hats for women. Simple jewelry.",
};

pub fn period_clothing(year_start: i32) -> PeriodClothing {
    CLOTHING_BRACKETS
        .iter()
        .find(|(until, _)| year_start < *until)
        .map(|(_, clothing)| *clothing)
        .unwrap_or(EARLY_1900S)
}
