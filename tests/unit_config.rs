// Unit tests for configuration loading and boundary clamping.

use tagmint::config::ExtractorConfig;

// ============================================================
// Range clamping
// ============================================================

#[test]
fn clamped_enforces_documented_ranges() {
    let config = ExtractorConfig {
        max_tags: 500,
        min_word_length: 1,
        min_word_frequency: 0,
        ..ExtractorConfig::default()
    }
    .clamped();
    assert_eq!(config.max_tags, 20);
    assert_eq!(config.min_word_length, 2);
    assert_eq!(config.min_word_frequency, 1);
}

#[test]
fn clamped_is_idempotent() {
    let once = ExtractorConfig {
        max_tags: 0,
        min_word_length: 99,
        min_word_frequency: 42,
        ..ExtractorConfig::default()
    }
    .clamped();
    assert_eq!(once.clamped(), once);
}

#[test]
fn clamped_does_not_touch_source_weights() {
    let mut config = ExtractorConfig::default();
    config.sources.excerpt.enabled = true;
    config.sources.title.repeat = 7;
    let clamped = config.clamped();
    assert_eq!(clamped.sources, config.sources);
}

// ============================================================
// Environment loading
// ============================================================

// All env manipulation lives in a single test: the test harness runs
// tests in parallel threads and these keys are process-global.
#[test]
fn from_env_reads_overrides_and_clamps() {
    std::env::set_var("TAGMINT_MAX_TAGS", "50");
    std::env::set_var("TAGMINT_MIN_WORD_LENGTH", "3");
    std::env::set_var("TAGMINT_MIN_WORD_FREQUENCY", "not-a-number");
    std::env::set_var("TAGMINT_CASE_SENSITIVE", "true");
    std::env::set_var("TAGMINT_ANALYZE_EXCERPT", "1");

    let config = ExtractorConfig::from_env();
    // Out-of-range values are clamped, unparseable ones fall back
    assert_eq!(config.max_tags, 20);
    assert_eq!(config.min_word_length, 3);
    assert_eq!(config.min_word_frequency, 2);
    assert!(config.case_sensitive);
    assert!(config.sources.excerpt.enabled);

    for key in [
        "TAGMINT_MAX_TAGS",
        "TAGMINT_MIN_WORD_LENGTH",
        "TAGMINT_MIN_WORD_FREQUENCY",
        "TAGMINT_CASE_SENSITIVE",
        "TAGMINT_ANALYZE_EXCERPT",
    ] {
        std::env::remove_var(key);
    }
}
