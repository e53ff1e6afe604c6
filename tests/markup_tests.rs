// Host-side checks of the static page against the markup contract the
// wasm layer relies on. The page must stay readable when the wasm bundle
// never mounts.

use paint_landing::constants::*;
use paint_landing::core::DifficultyTier;

const PAGE: &str = include_str!("../index.html");

fn body() -> &'static str {
    let start = PAGE.find("<body>").expect("page has a body");
    &PAGE[start..]
}

/// Opening tag of the card carrying `data-tier="level"` plus its content.
fn card_for(level: u8) -> (&'static str, &'static str) {
    let marker = format!("{}=\"{}\"", TIER_ATTRIBUTE, level);
    let at = PAGE.find(&marker).expect("tier card is embedded in markup");
    let tag_start = PAGE[..at].rfind('<').unwrap();
    let tag_end = at + PAGE[at..].find('>').unwrap();
    let card_end = at + PAGE[at..].find("</ul>").unwrap();
    (&PAGE[tag_start..=tag_end], &PAGE[tag_end..card_end])
}

#[test]
fn reveal_hiding_only_applies_once_tracking_runs() {
    let reveal_class = REVEAL_SELECTOR.trim_start_matches('.');
    let ready = format!(".{} ", REVEAL_READY_CLASS);
    let hiding: Vec<&str> = PAGE
        .lines()
        .map(str::trim)
        .filter(|l| l.contains(reveal_class) && l.contains("opacity: 0"))
        .collect();
    assert!(!hiding.is_empty());
    for rule in hiding {
        assert!(rule.starts_with(&ready), "unscoped hiding rule: {rule}");
    }
    // Only the wasm layer may turn hiding on.
    assert!(!body().contains(REVEAL_READY_CLASS));
}

#[test]
fn every_tier_card_is_in_static_markup() {
    for tier in DifficultyTier::ALL {
        let s = tier.spec();
        let (_, content) = card_for(s.level);
        for text in [s.icon, s.title, s.blurb, s.colors, s.regions, s.time_estimate] {
            assert!(content.contains(text), "{tier} card lacks `{text}`");
        }
        assert!(content.contains(&format!("Level {}", s.level)));
    }
}

#[test]
fn default_tier_card_is_prehighlighted() {
    for tier in DifficultyTier::ALL {
        let (tag, _) = card_for(tier.level());
        assert_eq!(
            tag.contains(SELECTED_CLASS),
            tier == DifficultyTier::default(),
            "{tier}: {tag}"
        );
    }
}

#[test]
fn effect_hooks_exist() {
    let b = body();
    assert!(b.contains(&format!("id=\"{}\"", ROOT_ID)));
    assert!(b.contains(&format!("id=\"{}\"", SPOTLIGHT_ID)));
    assert!(PAGE.contains(SPOTLIGHT_VAR_X) && PAGE.contains(SPOTLIGHT_VAR_Y));
}

#[test]
fn hero_copy_and_stats_are_present() {
    let b = body();
    assert!(b.contains("Perfect for artists of all skill levels."));
    for (number, label) in [
        ("AI-Powered", "Smart Segmentation"),
        ("Instant", "Processing Time"),
        ("3 Levels", "Difficulty Options"),
    ] {
        assert!(b.contains(&format!(
            "<div class=\"stat-number\">{number}</div><div class=\"stat-label\">{label}</div>"
        )));
    }
}
