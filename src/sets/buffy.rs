//! Buffy the Vampire Slayer.

use crate::catalog::{CardCatalog, CardClass};

use super::SetDefinition;

pub const DEFINITION: SetDefinition = SetDefinition {
    name: "buffy",
    catalog,
    default_base_rules: DEFAULT_BASE_RULES,
    default_house_rules: DEFAULT_HOUSE_RULES,
};

fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();

    for (index, name) in [
        (1, "The Master"),
        (2, "Glorificus"),
        (3, "The Mayor"),
        (4, "Angelus"),
        (5, "The First"),
    ] {
        catalog.add_group(CardClass::Masterminds, index, name);
    }

    for (index, name) in [
        (1, "Hellmouth Opening"),
        (2, "Convert to Evil"),
        (3, "Summon the Uber Vamps"),
        (4, "Twilight Terror"),
        (5, "Vile Agenda"),
        (6, "Road to Damnation"),
        (7, "Epic Struggle"),
        (8, "Darkness Falls"),
    ] {
        catalog.add_group(CardClass::Schemes, index, name);
    }

    for (index, name) in [
        (1, "Order of Aurelius"),
        (2, "Glory's Minions"),
        (3, "The Mayor's Minions"),
        (4, "Scourge of Europe"),
        (5, "The First's Minions"),
        (6, "Demons"),
        (7, "Harmony's Gang"),
    ] {
        catalog.add_group(CardClass::Villains, index, name);
    }

    for (index, name) in [
        (1, "Turok-han Vampires"),
        (2, "Vampire Initiate"),
        (3, "Shark Gangsters"),
        (4, "Harbingers Of Death"),
        (5, "Hellhounds"),
    ] {
        catalog.add_group(CardClass::Henchmen, index, name);
    }

    for (index, name) in [
        (1, "Buffy Summers"),
        (2, "Xander Harris"),
        (3, "Willow Rosenberg"),
        (4, "Rupert Giles"),
        (5, "Spike"),
        (6, "Anya Jenkins"),
        (7, "Angel"),
        (8, "Cordelia Chase"),
        (9, "Tara Maclay"),
        (10, "Daniel 'Oz' Osbourne"),
        (11, "Riley Finn"),
        (12, "Faith"),
        (13, "Jenny Calendar"),
        (14, "Buffybot"),
        (15, "The First Slayer"),
    ] {
        catalog.add_group(CardClass::Heroes, index, name);
    }

    catalog
}

const DEFAULT_BASE_RULES: &str = r#"{
    "player_counts": {
        "1": {
            "masterminds": 1,
            "villains": 1,
            "henchmen": 1,
            "heroes_in_villain_deck": 0,
            "enforcers": 0,
            "heroes": 3
        },
        "2": {
            "masterminds": 1,
            "villains": 2,
            "henchmen": 1,
            "heroes_in_villain_deck": 0,
            "enforcers": 0,
            "heroes": 5
        },
        "3": {
            "masterminds": 1,
            "villains": 3,
            "henchmen": 1,
            "heroes_in_villain_deck": 0,
            "enforcers": 0,
            "heroes": 5
        },
        "4": {
            "masterminds": 1,
            "villains": 3,
            "henchmen": 2,
            "heroes_in_villain_deck": 0,
            "enforcers": 0,
            "heroes": 5
        },
        "5": {
            "masterminds": 1,
            "villains": 4,
            "henchmen": 2,
            "heroes_in_villain_deck": 0,
            "enforcers": 0,
            "heroes": 6
        }
    },
    "blacklisted_schemes": {
        "1": [4]
    },
    "scheme_rules": {
        "2": {
            "heroes_in_villain_deck": {
                "diff": 1
            }
        },
        "3": {
            "henchmen": {
                "required": [1]
            }
        },
        "6": {
            "villains": {
                "diff": -1
            },
            "heroes_in_villain_deck": {
                "diff": 1,
                "exclusive": [3, 5, 7, 12]
            }
        }
    }
}
"#;

const DEFAULT_HOUSE_RULES: &str = "{}\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(CardClass::Masterminds), 5);
        assert_eq!(catalog.len(CardClass::Schemes), 8);
        assert_eq!(catalog.len(CardClass::Villains), 7);
        assert_eq!(catalog.len(CardClass::Henchmen), 5);
        assert_eq!(catalog.len(CardClass::Heroes), 15);
        assert_eq!(catalog.name_of(CardClass::Masterminds, 5), Some("The First"));
    }
}
