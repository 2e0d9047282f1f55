//! End-to-end tests for the built-in English rules

use pluralizer_core::Pluralizer;

/// Singular/plural pairs that convert cleanly in both directions
const PAIRS: &[(&str, &str)] = &[
    // Regular suffixes
    ("apple", "apples"),
    ("day", "days"),
    ("toy", "toys"),
    ("guy", "guys"),
    ("photo", "photos"),
    ("zoo", "zoos"),
    ("roof", "roofs"),
    ("kiss", "kisses"),
    ("dish", "dishes"),
    ("church", "churches"),
    ("box", "boxes"),
    ("bus", "buses"),
    ("status", "statuses"),
    ("alias", "aliases"),
    ("canoe", "canoes"),
    ("shoe", "shoes"),
    ("movie", "movies"),
    ("zombie", "zombies"),
    ("cookie", "cookies"),
    ("plateau", "plateaus"),
    ("hive", "hives"),
    // Consonant + y
    ("city", "cities"),
    ("soliloquy", "soliloquies"),
    ("money", "monies"),
    ("looey", "looies"),
    // f / fe -> ves
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("leaf", "leaves"),
    ("half", "halves"),
    ("wolf", "wolves"),
    ("elf", "elves"),
    ("calf", "calves"),
    ("thief", "thieves"),
    // Latin and Greek
    ("cactus", "cacti"),
    ("alumnus", "alumni"),
    ("alga", "algae"),
    ("datum", "data"),
    ("millennium", "millennia"),
    ("bacterium", "bacteria"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("analysis", "analyses"),
    ("thesis", "theses"),
    ("testis", "testes"),
    ("matrix", "matrices"),
    ("index", "indices"),
    ("vertex", "vertices"),
    ("seraph", "seraphim"),
    ("cherub", "cherubim"),
    ("genus", "genera"),
    ("schema", "schemata"),
    // Consonant + o
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("volcano", "volcanoes"),
    ("dingo", "dingoes"),
    // Irregular
    ("person", "people"),
    ("child", "children"),
    ("ox", "oxen"),
    ("man", "men"),
    ("woman", "women"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("mouse", "mice"),
    ("die", "dice"),
    ("quiz", "quizzes"),
    ("passerby", "passersby"),
    ("emu", "emus"),
    // Pronouns and verbs
    ("is", "are"),
    ("this", "these"),
    ("myself", "ourselves"),
    ("me", "us"),
];

const UNCOUNTABLES: &[&str] = &[
    "fish",
    "sheep",
    "software",
    "news",
    "series",
    "chassis",
    "you",
    "deer",
    "reindeer",
    "blowfish",
    "Chinese",
    "carnivorous",
    "smallpox",
    "measles",
    "pokemon",
    "Pokémon",
];

#[test]
fn test_plural_forms() {
    let pluralizer = Pluralizer::new();
    for (singular, plural) in PAIRS {
        assert_eq!(
            pluralizer.plural(singular),
            *plural,
            "plural of '{singular}'"
        );
    }
}

#[test]
fn test_singular_forms() {
    let pluralizer = Pluralizer::new();
    for (singular, plural) in PAIRS {
        assert_eq!(
            pluralizer.singular(plural),
            *singular,
            "singular of '{plural}'"
        );
    }
}

#[test]
fn test_already_converted_words_are_kept() {
    let pluralizer = Pluralizer::new();
    for (singular, plural) in PAIRS {
        assert_eq!(pluralizer.plural(plural), *plural, "plural of '{plural}'");
        assert_eq!(
            pluralizer.singular(singular),
            *singular,
            "singular of '{singular}'"
        );
    }
}

#[test]
fn test_is_plural_and_is_singular() {
    let pluralizer = Pluralizer::new();
    for (singular, plural) in PAIRS {
        assert!(pluralizer.is_plural(plural), "'{plural}' should be plural");
        assert!(
            !pluralizer.is_plural(singular),
            "'{singular}' should not be plural"
        );
        assert!(
            pluralizer.is_singular(singular),
            "'{singular}' should be singular"
        );
        assert!(
            !pluralizer.is_singular(plural),
            "'{plural}' should not be singular"
        );
    }
}

#[test]
fn test_uncountables_are_invariant() {
    let pluralizer = Pluralizer::new();
    for word in UNCOUNTABLES {
        assert_eq!(pluralizer.plural(word), *word, "plural of '{word}'");
        assert_eq!(pluralizer.singular(word), *word, "singular of '{word}'");
        assert!(pluralizer.is_plural(word), "'{word}' should be plural");
        assert!(pluralizer.is_singular(word), "'{word}' should be singular");
    }
}

#[test]
fn test_case_is_preserved() {
    let pluralizer = Pluralizer::new();

    assert_eq!(pluralizer.plural("apple"), "apples");
    assert_eq!(pluralizer.plural("Apple"), "Apples");
    assert_eq!(pluralizer.plural("APPLE"), "APPLES");

    assert_eq!(pluralizer.plural("Person"), "People");
    assert_eq!(pluralizer.plural("CHILD"), "CHILDREN");
    assert_eq!(pluralizer.plural("Matrix"), "Matrices");
    assert_eq!(pluralizer.plural("Mouse"), "Mice");
    assert_eq!(pluralizer.plural("KNIFE"), "KNIVES");
    assert_eq!(pluralizer.plural("WOLF"), "WOLVES");
    assert_eq!(pluralizer.plural("Wife"), "Wives");
    assert_eq!(pluralizer.plural("CITY"), "CITIES");

    assert_eq!(pluralizer.singular("PEOPLE"), "PERSON");
    assert_eq!(pluralizer.singular("People"), "Person");
    assert_eq!(pluralizer.singular("Cities"), "City");
    assert_eq!(pluralizer.singular("Boxes"), "Box");
    assert_eq!(pluralizer.singular("BOXES"), "BOX");
}

#[test]
fn test_mixed_case_words() {
    let pluralizer = Pluralizer::new();

    // Appended suffix takes the case of the last letter
    assert_eq!(pluralizer.plural("iPhone"), "iPhones");
    assert_eq!(pluralizer.plural("McDonald"), "McDonalds");
    assert_eq!(pluralizer.plural("fOO"), "fOOS");
}

#[test]
fn test_single_letter_pronoun() {
    let pluralizer = Pluralizer::new();
    assert_eq!(pluralizer.plural("I"), "WE");
    assert_eq!(pluralizer.singular("We"), "I");
    assert_eq!(pluralizer.singular("we"), "i");
}

#[test]
fn test_word_rule_for_thou() {
    let pluralizer = Pluralizer::new();
    assert_eq!(pluralizer.plural("thou"), "you");
    assert_eq!(pluralizer.plural("Thou"), "You");
    // "you" is uncountable, so there is no way back
    assert_eq!(pluralizer.singular("you"), "you");
}

#[test]
fn test_irregular_map_beats_pattern_rules() {
    let pluralizer = Pluralizer::new();
    // Pattern rules would produce "axi"; the irregular pair axe/axes wins
    assert_eq!(pluralizer.singular("axes"), "axe");
    assert_eq!(pluralizer.plural("axis"), "axes");
}

#[test]
fn test_non_ascii_endings_are_kept() {
    let pluralizer = Pluralizer::new();
    assert_eq!(pluralizer.plural("café"), "café");
    assert!(pluralizer.is_plural("café"));
}

#[test]
fn test_empty_word() {
    let pluralizer = Pluralizer::new();
    assert_eq!(pluralizer.plural(""), "");
    assert_eq!(pluralizer.singular(""), "");
    assert!(pluralizer.is_plural(""));
    assert!(pluralizer.is_singular(""));
}

#[test]
fn test_lossy_edge_cases() {
    let pluralizer = Pluralizer::new();

    assert_eq!(pluralizer.singular("s"), "");
    assert!(pluralizer.is_plural("s"));
    assert!(!pluralizer.is_singular("s"));

    assert_eq!(pluralizer.singular("species"), "specie");
    assert_eq!(pluralizer.singular("midlives"), "midlife");
}

#[test]
fn test_pluralize_by_count() {
    let pluralizer = Pluralizer::new();

    assert_eq!(pluralizer.pluralize("apple", Some(1), false), "apple");
    assert_eq!(pluralizer.pluralize("apple", Some(1), true), "1 apple");
    assert_eq!(pluralizer.pluralize("apple", Some(2), false), "apples");
    assert_eq!(pluralizer.pluralize("apple", Some(2), true), "2 apples");
    assert_eq!(pluralizer.pluralize("person", Some(5), true), "5 people");
    assert_eq!(pluralizer.pluralize("People", Some(1), true), "1 Person");
    assert_eq!(pluralizer.pluralize("sheep", Some(3), true), "3 sheep");
}
