//! Skillset and skill loading tests.
//!
//! This module tests rebuilding skillsets from service payloads:
//! - Loading the definitions the service returns on GET (with annotations)
//! - Defaults for omitted description, context, inputs and outputs
//! - Rejection of malformed skill sequences
//!
//! # Invariants
//! - Skill order is preserved
//! - Loading a skillset's own wire format yields an equal skillset

mod common;

use azsearch_client::models::{SkillKind, TextSplitMode};
use azsearch_client::{Skill, SkillOutput, Skillset, WirePayload};
use common::*;
use serde_json::json;

#[test]
fn test_load_service_skillset() {
    let fixture = load_fixture("skillsets/cognitive_skillset.json");

    let skillset = Skillset::load(fixture).unwrap();

    assert_eq!(skillset.name(), "hotel-reviews-ss");
    assert_eq!(
        skillset.description(),
        "Language detection, page split and key phrases"
    );
    let types: Vec<&str> = skillset.skills().iter().map(Skill::type_name).collect();
    assert_eq!(
        types,
        [
            "LanguageDetectionSkill",
            "SplitSkill",
            "KeyPhraseExtractionSkill",
            "SentimentSkill"
        ]
    );

    match &skillset.skills()[2].kind {
        SkillKind::KeyPhraseExtraction(params) => assert_eq!(params.max_key_phrase_count, 10),
        other => panic!("unexpected kind: {other:?}"),
    }
    match &skillset.skills()[1].kind {
        SkillKind::Split(params) => {
            assert_eq!(params.text_split_mode, TextSplitMode::Pages);
            assert_eq!(params.maximum_page_length, Some(5000));
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert_eq!(
        skillset.skills()[0].outputs,
        vec![SkillOutput::new("languageCode", "language")]
    );
    match &skillset.skills()[3].kind {
        SkillKind::Sentiment(params) => assert_eq!(params.default_language_code, "en"),
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn test_load_skillset_with_null_skill_parameters() {
    let skillset = Skillset::load(json!({
        "name": "ss-nulls",
        "description": null,
        "skills": [
            {
                "@odata.type": "#Microsoft.Skills.Text.SplitSkill",
                "textSplitMode": "sentences",
                "maximumPageLength": null,
                "defaultLanguageCode": null,
            },
            {
                "@odata.type": "#Microsoft.Skills.Text.KeyPhraseExtractionSkill",
                "defaultLanguageCode": null,
                "maxKeyPhraseCount": null,
            },
        ]
    }))
    .unwrap();

    assert_eq!(skillset.description(), "");
    match &skillset.skills()[0].kind {
        SkillKind::Split(params) => {
            assert_eq!(params.text_split_mode, TextSplitMode::Sentences);
            assert_eq!(params.maximum_page_length, None);
            assert_eq!(params.default_language_code, "en");
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    match &skillset.skills()[1].kind {
        SkillKind::KeyPhraseExtraction(params) => {
            assert_eq!(params.default_language_code, "en");
            assert_eq!(params.max_key_phrase_count, 30);
        }
        other => panic!("unexpected kind: {other:?}"),
    }
}

#[test]
fn test_load_from_text_and_value_agree() {
    let fixture = load_fixture("skillsets/cognitive_skillset.json");

    let from_value = Skillset::load(fixture.clone()).unwrap();
    let from_text = Skillset::load(WirePayload::Text(fixture.to_string())).unwrap();

    assert_eq!(from_value, from_text);
}

#[test]
fn test_load_minimal_skillset_fills_defaults() {
    let skillset = Skillset::load(load_fixture("skillsets/minimal_skillset.json")).unwrap();

    assert_eq!(skillset.description(), "");
    let ocr = &skillset.skills()[0];
    assert_eq!(ocr.context, "/document/normalized_images/*");
    assert_eq!(ocr.outputs, vec![SkillOutput::new("text", "text")]);
    match &ocr.kind {
        SkillKind::Ocr(params) => {
            assert_eq!(params.detect_orientation, Some(true));
            assert_eq!(params.default_language_code, "en");
        }
        other => panic!("unexpected kind: {other:?}"),
    }

    let merge = &skillset.skills()[1];
    assert_eq!(merge.inputs, merge.kind.default_inputs());
}

#[test]
fn test_service_skillset_round_trip() {
    let skillset = Skillset::load(load_fixture("skillsets/cognitive_skillset.json")).unwrap();

    let reloaded = Skillset::load(skillset.to_wire_format().unwrap()).unwrap();

    assert_eq!(reloaded, skillset);
}

#[test]
fn test_wire_format_has_no_annotations_or_nulls() {
    let skillset = Skillset::load(load_fixture("skillsets/cognitive_skillset.json")).unwrap();

    let wire = skillset.to_wire_format().unwrap();

    assert!(!wire.contains_key("@odata.context"));
    assert!(!wire.contains_key("@odata.etag"));
    assert!(!wire["skills"][2].as_object().unwrap().contains_key("description"));
    assert!(!wire["skills"][0].as_object().unwrap().contains_key("defaultCountryHint"));
    assert_eq!(wire["skills"][3]["defaultLanguageCode"], "en");
}

#[test]
fn test_non_skill_element_is_configuration_error() {
    let err = Skillset::load(json!({
        "name": "ss1",
        "skills": [42]
    }))
    .unwrap_err();

    assert!(err.is_configuration_error());
    assert!(matches!(
        err,
        ClientError::Configuration(ConfigurationError::InvalidSkill { index: 0, .. })
    ));
}

#[test]
fn test_unknown_skill_type_in_skillset() {
    let err = Skillset::load(json!({
        "name": "ss1",
        "skills": [{"@odata.type": "#Microsoft.Skills.Custom.WebApiSkill", "uri": "https://x"}]
    }))
    .unwrap_err();

    assert!(matches!(err, ClientError::UnknownSkillType(_)));
}

#[test]
fn test_skills_must_be_array() {
    let err = Skillset::load(json!({"name": "ss1", "skills": {"a": 1}})).unwrap_err();
    assert!(matches!(err, ClientError::InvalidPayload(_)));
}

#[test]
fn test_invalid_json_text() {
    let err = Skillset::load("{\"name\": ").unwrap_err();
    assert!(matches!(err, ClientError::InvalidPayload(_)));
}

#[test]
fn test_empty_skillset_fails_before_network() {
    let err = Skillset::new("ss1", Vec::new(), None).unwrap_err();
    assert!(err.is_configuration_error());
}
