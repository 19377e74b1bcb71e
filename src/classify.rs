//! Project classification and name-derived artwork.
//!
//! Everything here is deterministic on the project name so regenerating the
//! site never churns badges or logo colors.

use serde::{Deserialize, Serialize};

use crate::github::Repo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Training,
    Project,
}

impl Default for Classification {
    fn default() -> Self {
        Classification::Project
    }
}

const TRAINING_KEYWORDS: [&str; 15] = [
    "tutorial", "course", "learning", "practice", "exercise", "training", "workshop", "lesson",
    "bootcamp", "skill", "learn", "study", "example", "sample", "demo",
];

/// Decide whether a repository looks like a real project or a training
/// exercise: keyword scan over name, description and topics, plus a
/// low-engagement-fork heuristic.
pub fn auto_classify(repo: &Repo) -> Classification {
    let name = repo.name.to_lowercase();
    let description = repo
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    if TRAINING_KEYWORDS.iter().any(|k| name.contains(k)) {
        return Classification::Training;
    }
    if TRAINING_KEYWORDS.iter().any(|k| description.contains(k)) {
        return Classification::Training;
    }
    for topic in &repo.topics {
        let topic = topic.to_lowercase();
        if TRAINING_KEYWORDS.iter().any(|k| topic.contains(k)) {
            return Classification::Training;
        }
    }

    if repo.fork && repo.stargazers_count == 0 && description.is_empty() {
        return Classification::Training;
    }

    Classification::Project
}

const ANIMALS: [&str; 86] = [
    "🦁", "🐯", "🐻", "🐼", "🐨", "🐵", "🐶", "🐺", "🦊", "🦝",
    "🐱", "🦁", "🐴", "🦄", "🦓", "🦌", "🐮", "🐷", "🐗", "🐭",
    "🐹", "🐰", "🐇", "🐿️", "🦔", "🦇", "🐻‍❄️", "🐨", "🐼", "🦥",
    "🦦", "🦨", "🦘", "🦡", "🐾", "🦃", "🐔", "🐓", "🐣", "🐤",
    "🐥", "🐦", "🐧", "🕊️", "🦅", "🦆", "🦢", "🦉", "🦤", "🪶",
    "🦩", "🦚", "🦜", "🐸", "🐊", "🐢", "🦎", "🐍", "🐲", "🐉",
    "🦕", "🦖", "🐳", "🐋", "🐬", "🦭", "🐟", "🐠", "🐡", "🦈",
    "🐙", "🐚", "🪸", "🐌", "🦋", "🐛", "🐝", "🪲", "🐞", "🦗",
    "🕷️", "🦂", "🦟", "🪰", "🪱", "🦠",
];

/// Pick a consistent animal emoji for a project name. Uses the classic
/// `(h << 5) - h + ch` string hash over 32 bits.
pub fn animal_badge(name: &str) -> &'static str {
    let mut hash: u32 = 0;
    for ch in name.chars() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(ch as u32);
    }
    ANIMALS[hash as usize % ANIMALS.len()]
}

/// Filename-safe slug: alphanumerics kept, everything else becomes `-`.
pub fn slug(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .to_lowercase()
}

/// Up to two uppercase initials for the logo artwork.
pub fn initials(name: &str) -> String {
    let spaced = name.replace('-', " ");
    let parts: Vec<&str> = spaced.split_whitespace().collect();
    match parts.len() {
        0 => name.chars().take(2).collect::<String>().to_uppercase(),
        1 => parts[0].chars().take(2).collect::<String>().to_uppercase(),
        _ => parts
            .iter()
            .take(2)
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase(),
    }
}

/// Deterministic hue-based color for a project name.
pub fn hue_color(name: &str) -> String {
    let mut hash: u32 = 0;
    for ch in name.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as u32);
    }
    format!("hsl({} 80% 50%)", hash % 360)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, description: Option<&str>, topics: &[&str], fork: bool, stars: u32) -> Repo {
        serde_json::from_str::<Repo>(&format!(r#"{{"name": "{name}"}}"#))
            .map(|mut r| {
                r.description = description.map(str::to_string);
                r.topics = topics.iter().map(|t| t.to_string()).collect();
                r.fork = fork;
                r.stargazers_count = stars;
                r
            })
            .unwrap()
    }

    #[test]
    fn test_keyword_in_name_classifies_as_training() {
        let r = repo("rust-tutorial", None, &[], false, 10);
        assert_eq!(auto_classify(&r), Classification::Training);
    }

    #[test]
    fn test_keyword_in_description_classifies_as_training() {
        let r = repo("sandbox", Some("A practice repo"), &[], false, 0);
        assert_eq!(auto_classify(&r), Classification::Training);
    }

    #[test]
    fn test_keyword_in_topic_classifies_as_training() {
        let r = repo("sandbox", Some("stuff"), &["Workshop"], false, 0);
        assert_eq!(auto_classify(&r), Classification::Training);
    }

    #[test]
    fn test_low_engagement_fork_is_training() {
        let r = repo("upstream-thing", None, &[], true, 0);
        assert_eq!(auto_classify(&r), Classification::Training);
    }

    #[test]
    fn test_starred_fork_stays_a_project() {
        let r = repo("upstream-thing", None, &[], true, 2);
        assert_eq!(auto_classify(&r), Classification::Project);
    }

    #[test]
    fn test_regular_repo_is_a_project() {
        let r = repo("site-generator", Some("Generates things"), &["web"], false, 5);
        assert_eq!(auto_classify(&r), Classification::Project);
    }

    #[test]
    fn test_animal_badge_is_deterministic() {
        assert_eq!(animal_badge("repofolio"), animal_badge("repofolio"));
        assert!(ANIMALS.contains(&animal_badge("")));
        assert!(ANIMALS.contains(&animal_badge("some-project")));
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("My Repo!"), "my-repo-");
        assert_eq!(slug("demo_site"), "demo-site");
        assert_eq!(slug("abc123"), "abc123");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("repo-folio"), "RF");
        assert_eq!(initials("single"), "SI");
        assert_eq!(initials("a b c"), "AB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_hue_color_shape() {
        let color = hue_color("repofolio");
        assert!(color.starts_with("hsl("));
        assert!(color.ends_with(" 80% 50%)"));
        assert_eq!(color, hue_color("repofolio"));
    }
}
