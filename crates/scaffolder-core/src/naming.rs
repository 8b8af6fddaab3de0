//! Project name generation and normalization

use rand::seq::IndexedRandom;
use rand::Rng;

/// Default answer to the project name prompt
pub const DEFAULT_PROJECT_NAME: &str = "new-app";

const ADJECTIVES: &[&str] = &[
    "ample", "brave", "brisk", "calm", "clever", "cosmic", "crisp", "daring", "eager", "fancy",
    "fuzzy", "gentle", "golden", "happy", "hidden", "humble", "jolly", "keen", "lively",
    "lucky", "mellow", "merry", "misty", "nimble", "noble", "proud", "quiet", "rapid",
    "rustic", "shiny", "silent", "snappy", "sunny", "swift", "tidy", "vivid", "witty", "zesty",
];

const NOUNS: &[&str] = &[
    "anchor", "badger", "beacon", "canyon", "cedar", "comet", "crane", "delta", "ember",
    "falcon", "fern", "forest", "garden", "glacier", "harbor", "island", "lantern", "meadow",
    "meteor", "orchid", "otter", "panda", "pebble", "planet", "prairie", "river", "rocket",
    "sparrow", "summit", "thunder", "tiger", "valley", "willow", "walrus", "zephyr",
];

/// Characters that cannot appear in a file name on at least one common platform
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

const REPLACEMENT: char = '!';

/// Generate a fresh `<adjective>-<noun>` project name
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("new");
    let noun = NOUNS.choose(rng).copied().unwrap_or("app");
    format!("{}-{}", adjective, noun)
}

/// Turn arbitrary operator input into a safe file name
///
/// Reserved and control characters become `!`, runs of them collapse into one,
/// surrounding whitespace and trailing dots are dropped. `.` and `..` are
/// replaced outright. Returns `None` when nothing usable remains.
pub fn normalize_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed == "." || trimmed == ".." {
        return Some(REPLACEMENT.to_string());
    }

    let mut normalized = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if RESERVED.contains(&c) || c.is_control() {
            if !normalized.ends_with(REPLACEMENT) {
                normalized.push(REPLACEMENT);
            }
        } else {
            normalized.push(c);
        }
    }

    let normalized = normalized.trim_end_matches('.').trim_end();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_name_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let name = random_name(&mut rng);
        let (adjective, noun) = name.split_once('-').unwrap();
        assert!(ADJECTIVES.contains(&adjective));
        assert!(NOUNS.contains(&noun));
    }

    #[test]
    fn test_random_name_varies() {
        let mut rng = StdRng::seed_from_u64(42);
        let names: std::collections::HashSet<_> = (0..20).map(|_| random_name(&mut rng)).collect();
        assert!(names.len() > 1);
    }

    #[test]
    fn test_normalize_keeps_valid_names() {
        assert_eq!(normalize_name("demo-app").as_deref(), Some("demo-app"));
        assert_eq!(normalize_name("  spaced  ").as_deref(), Some("spaced"));
    }

    #[test]
    fn test_normalize_replaces_reserved_characters() {
        assert_eq!(normalize_name("a/b").as_deref(), Some("a!b"));
        assert_eq!(normalize_name("what?*").as_deref(), Some("what!"));
        assert_eq!(normalize_name("tab\there").as_deref(), Some("tab!here"));
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name("..."), None);
    }

    #[test]
    fn test_normalize_dot_paths() {
        assert_eq!(normalize_name(".").as_deref(), Some("!"));
        assert_eq!(normalize_name("..").as_deref(), Some("!"));
    }
}
