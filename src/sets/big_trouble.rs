//! Big Trouble in Little China.

use crate::catalog::{CardCatalog, CardClass};

use super::SetDefinition;

pub const DEFINITION: SetDefinition = SetDefinition {
    name: "big_trouble",
    catalog,
    default_base_rules: DEFAULT_BASE_RULES,
    default_house_rules: DEFAULT_HOUSE_RULES,
};

fn catalog() -> CardCatalog {
    let mut catalog = CardCatalog::new();

    for (index, name) in [
        (1, "Six Shooter"),
        (2, "Ching Dai"),
        (3, "David Lo Pan"),
        (4, "Sorcerous Lo Pan"),
    ] {
        catalog.add_group(CardClass::Masterminds, index, name);
    }

    for (index, name) in [
        (1, "Forge Crime Syndicate"),
        (2, "Rampage for Sacrifices"),
        (3, "Flood Chinatown in Mediocrity"),
        (4, "Kill Uncle Chu"),
        (5, "Corrupt True Heroes"),
        (6, "Assassination"),
        (7, "Destroy Chinatown's Dreams"),
        (8, "Fill the Hell of Upside Down Sinners"),
        (9, "Enforce Villainous Hierarchy"),
        (10, "Ruin San Fran"),
        (11, "Open the Hell Gates"),
        (12, "One and the Same Person, Jack"),
    ] {
        catalog.add_group(CardClass::Schemes, index, name);
    }

    for (index, name) in [
        (1, "Wing Kong Gang"),
        (2, "Monsters"),
        (3, "Wing Kong Exchange"),
        (4, "Warriors of Lo Pan"),
    ] {
        catalog.add_group(CardClass::Villains, index, name);
    }

    for (index, name) in [
        (1, "Lords of Death"),
        (2, "Ceremonial Warriors"),
        (3, "Wing Kong Thugs"),
    ] {
        catalog.add_group(CardClass::Henchmen, index, name);
    }

    for (index, name) in [
        (1, "Jack Burton"),
        (2, "Wang Chi"),
        (3, "Egg Shen"),
        (4, "Gracie Law"),
        (5, "Miao Yin"),
        (6, "Eddie"),
        (7, "Margo"),
        (8, "Pork Chop Express"),
        (9, "Henry Swanson"),
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
    "scheme_rules": {
        "5": {
            "heroes": {
                "diff": 1
            }
        },
        "9": {
            "enforcers": {
                "diff": 1
            }
        },
        "12": {
            "masterminds": {
                "diff": 1,
                "exclusive": [3, 4]
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
        assert_eq!(catalog.len(CardClass::Masterminds), 4);
        assert_eq!(catalog.len(CardClass::Schemes), 12);
        assert_eq!(catalog.len(CardClass::Villains), 4);
        assert_eq!(catalog.len(CardClass::Henchmen), 3);
        assert_eq!(catalog.len(CardClass::Heroes), 9);
        assert_eq!(
            catalog.name_of(CardClass::Schemes, 12),
            Some("One and the Same Person, Jack")
        );
    }
}
