//! Archetypes that ship with the crate.
//!
//! Each function returns the same [`ClassDefinition`] a definition file would
//! describe. [`all`] lists them in the order [`Registry::builtin`] registers
//! them.
//!
//! [`Registry::builtin`]: crate::registry::Registry::builtin

use crate::class::ClassDefinition;

/// Gutterborn Scum: a quick, sly survivor of the sewers.
pub fn gutterborn_scum() -> ClassDefinition {
    ClassDefinition::new("Gutterborn Scum")
        .with_description("Born in the filth beneath the city, trusting no one.")
        .with_stat("agi", 1)
        .with_stat("pre", 1)
        .with_stat("str", -1)
        .with_gear("Dagger")
        .with_gear("Lockpicks")
        .with_gear("Grappling hook")
        .with_ability("Can hide in shadows")
}

/// Fanged Deserter: brutish, strong, and not very bright.
pub fn fanged_deserter() -> ClassDefinition {
    ClassDefinition::new("Fanged Deserter")
        .with_description("Fled the last war with a stolen blade and sharpened teeth.")
        .with_stat("str", 2)
        .with_stat("agi", -1)
        .with_stat("pre", -1)
        .with_gear("Zweihänder")
        .with_gear("Rusty chainmail")
        .with_gear("Bear trap")
        .with_ability("Bite attack (d6) on a roll of 1-3")
}

/// Esoteric Hermit: frail keeper of forbidden scrolls.
pub fn esoteric_hermit() -> ClassDefinition {
    ClassDefinition::new("Esoteric Hermit")
        .with_description("Years alone in a cave taught things best left unlearned.")
        .with_stat("pre", 2)
        .with_stat("str", -2)
        .with_gear("Staff")
        .with_gear("Scroll of the unclean")
        .with_gear("Scroll of the unclean")
        .with_ability("Reads the unclean scrolls without a test")
}

/// Wretched Royalty: a fallen noble with one loyal servant.
pub fn wretched_royalty() -> ClassDefinition {
    ClassDefinition::new("Wretched Royalty")
        .with_description("The crown is gone. The manners remain.")
        .with_stat("pre", 1)
        .with_stat("tou", -1)
        .with_gear("Short sword")
        .with_gear("Ring of the fallen")
        .with_gear("Blunt knife")
        .with_ability("Commands a loyal, if reluctant, servant")
}

/// Heretical Priest: preaches a god nobody else remembers.
pub fn heretical_priest() -> ClassDefinition {
    ClassDefinition::new("Heretical Priest")
        .with_description("Excommunicated, still praying, still heard.")
        .with_stat("pre", 2)
        .with_stat("tou", -1)
        .with_gear("Mace")
        .with_gear("Sacred relic")
        .with_ability("Blessing restores d4 HP once per day")
}

/// Occult Herbmaster: brewer of dubious remedies.
pub fn occult_herbmaster() -> ClassDefinition {
    ClassDefinition::new("Occult Herbmaster")
        .with_description("Knows which roots heal and which ones whisper.")
        .with_stat("tou", 1)
        .with_stat("agi", 1)
        .with_stat("str", -1)
        .with_gear("Mortar")
        .with_gear("Pestle")
        .with_gear("Satchel of herbs")
        .with_ability("Brews two decoctions each dawn")
}

/// Every shipped archetype with its identifier, in registration order.
pub fn all() -> Vec<(&'static str, ClassDefinition)> {
    vec![
        ("scum", gutterborn_scum()),
        ("deserter", fanged_deserter()),
        ("hermit", esoteric_hermit()),
        ("royalty", wretched_royalty()),
        ("priest", heretical_priest()),
        ("herbmaster", occult_herbmaster()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_gear_and_abilities() {
        for (id, def) in all() {
            assert!(!def.gear.is_empty(), "{id} has no gear");
            assert!(!def.abilities.is_empty(), "{id} has no abilities");
        }
    }

    #[test]
    fn preset_ids_and_names_are_unique() {
        let presets = all();
        for (i, (id, def)) in presets.iter().enumerate() {
            for (other_id, other) in &presets[i + 1..] {
                assert_ne!(id, other_id);
                assert_ne!(def.name, other.name);
            }
        }
    }

    #[test]
    fn hermit_carries_two_scrolls() {
        let hermit = esoteric_hermit();
        let scrolls = hermit
            .gear
            .iter()
            .filter(|g| *g == "Scroll of the unclean")
            .count();
        assert_eq!(scrolls, 2);
    }

    #[test]
    fn scum_matches_reference_stats() {
        let scum = gutterborn_scum();
        assert_eq!(scum.stats.get("agi"), Some(&1));
        assert_eq!(scum.stats.get("pre"), Some(&1));
        assert_eq!(scum.stats.get("str"), Some(&-1));
        assert_eq!(scum.stats.len(), 3);
    }
}
