//! Alias ranking and display-name selection through the full pipeline.

use jsurls_analysis::aliases::{best_alias, AliasTier};
use jsurls_analysis::tables::{AliasCandidate, Confidence};
use jsurls_analysis::{extract_urls, ValueTables};
use jsurls_core::config::ExtractConfig;

fn templates(source: &str) -> Vec<String> {
    let config = ExtractConfig {
        include_templates: Some(true),
        ..Default::default()
    };
    extract_urls(source, &config).unwrap()
}

#[test]
fn test_compound_name_preferred_over_temporary() {
    let list = vec![
        AliasCandidate::new("tempValue", Confidence::High),
        AliasCandidate::new("contentId", Confidence::Low),
    ];
    assert_eq!(best_alias("v", &list), "contentId");
}

#[test]
fn test_tier_order() {
    assert!(AliasTier::Specific < AliasTier::Acceptable);
    assert!(AliasTier::Acceptable < AliasTier::VeryGeneric);
    assert!(AliasTier::VeryGeneric < AliasTier::Temporary);
    assert_eq!(AliasTier::of("spaceKey"), AliasTier::Specific);
    assert_eq!(AliasTier::of("slug"), AliasTier::Acceptable);
    assert_eq!(AliasTier::of("value"), AliasTier::VeryGeneric);
    assert_eq!(AliasTier::of("dummy"), AliasTier::Temporary);
}

#[test]
fn test_confidence_then_length_break_ties() {
    let list = vec![
        AliasCandidate::new("account", Confidence::Medium),
        AliasCandidate::new("workspace", Confidence::High),
    ];
    assert_eq!(best_alias("w", &list), "workspace");

    let list = vec![
        AliasCandidate::new("account", Confidence::High),
        AliasCandidate::new("org", Confidence::High),
    ];
    assert_eq!(best_alias("w", &list), "org");
}

#[test]
fn test_no_candidates_keeps_variable() {
    assert_eq!(best_alias("userHandle", &[]), "userHandle");
    assert!(ValueTables::new().aliases("anything").is_empty());
}

#[test]
fn test_object_literal_key_names_variable() {
    let out = templates("const body = { projectId: p }; post(`/projects/${p}/members`);");
    assert!(out.contains(&"/projects/{projectId}/members".to_string()), "{out:?}");
}

#[test]
fn test_form_data_append_names_variable() {
    let out = templates("const fd = new FormData(); fd.append('fileKey', k); upload(`/files/${k}`);");
    assert!(out.contains(&"/files/{fileKey}".to_string()), "{out:?}");
}

#[test]
fn test_concatenation_uses_aliases() {
    let out = templates("function open({ articleId: a }) { go('/articles/' + a + '/view'); }");
    assert!(out.contains(&"/articles/{articleId}/view".to_string()), "{out:?}");
}
