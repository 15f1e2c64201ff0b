//! Proptest strategies for the resource models.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use serde_json::Value;

use crate::models::{
    FieldMapping, Indexer, MergeParameters, Skill, SkillInput, SkillKind, SkillOutput, Skillset,
    SplitParameters, TextSplitMode,
};

/// Resource names accepted by the service: lowercase letters, digits, dashes.
pub fn resource_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,30}"
}

/// Enrichment tree paths such as `/document/content`.
pub fn enrichment_path() -> impl Strategy<Value = String> {
    vec("[a-z_]{1,12}", 0..4).prop_map(|segments| {
        let mut path = "/document".to_string();
        for segment in segments {
            path.push('/');
            path.push_str(&segment);
        }
        path
    })
}

pub fn skill_kind() -> impl Strategy<Value = SkillKind> {
    prop_oneof![
        Just(SkillKind::KeyPhraseExtraction(Default::default())),
        Just(SkillKind::LanguageDetection(Default::default())),
        Just(SkillKind::EntityRecognition(Default::default())),
        ("[ -~]{0,4}", "[ -~]{0,4}").prop_map(|(pre, post)| SkillKind::Merge(MergeParameters {
            insert_pre_tag: pre,
            insert_post_tag: post,
        })),
        (
            prop_oneof![Just(TextSplitMode::Pages), Just(TextSplitMode::Sentences)],
            option::of(1u32..50_000),
        )
            .prop_map(|(mode, max)| SkillKind::Split(SplitParameters {
                text_split_mode: mode,
                maximum_page_length: max,
                ..Default::default()
            })),
        Just(SkillKind::Sentiment(Default::default())),
        Just(SkillKind::ImageAnalysis(Default::default())),
        Just(SkillKind::Ocr(Default::default())),
        Just(SkillKind::Shaper(Default::default())),
    ]
}

pub fn skill() -> impl Strategy<Value = Skill> {
    (
        skill_kind(),
        option::of(resource_name()),
        option::of("[a-zA-Z ]{0,20}"),
        enrichment_path(),
        vec(("[a-zA-Z]{1,10}", enrichment_path()), 0..4),
        vec(("[a-zA-Z]{1,10}", "[a-zA-Z_]{1,10}"), 0..3),
    )
        .prop_map(|(kind, name, description, context, inputs, outputs)| {
            let mut skill = Skill::new(kind)
                .with_context(context)
                .with_inputs(
                    inputs
                        .into_iter()
                        .map(|(n, s)| SkillInput::new(n, s))
                        .collect(),
                )
                .with_outputs(
                    outputs
                        .into_iter()
                        .map(|(n, t)| SkillOutput::new(n, t))
                        .collect(),
                );
            skill.name = name;
            skill.description = description;
            skill
        })
}

pub fn skillset() -> impl Strategy<Value = Skillset> {
    (
        resource_name(),
        vec(skill(), 1..5),
        option::of("[a-zA-Z ]{1,20}"),
    )
        .prop_filter_map("valid skillset", |(name, skills, description)| {
            Skillset::new(name, skills, description).ok()
        })
}

pub fn indexer() -> impl Strategy<Value = Indexer> {
    (
        resource_name(),
        resource_name(),
        resource_name(),
        option::of(resource_name()),
        vec(("[a-zA-Z_]{1,12}", option::of("[a-zA-Z_]{1,12}")), 0..4),
        any::<bool>(),
        option::of(any::<i32>()),
    )
        .prop_map(
            |(name, data_source, target, skillset, mappings, disabled, batch_size)| {
                let mut indexer = Indexer::new(name, data_source, target).with_disabled(disabled);
                indexer.skillset_name = skillset;
                indexer.field_mappings = mappings
                    .into_iter()
                    .map(|(source, target)| match target {
                        Some(target) => FieldMapping::renamed(source, target),
                        None => FieldMapping::new(source),
                    })
                    .collect();
                if let Some(batch_size) = batch_size {
                    indexer = indexer.with_additional_parameter("batchSize", Value::from(batch_size));
                }
                indexer
            },
        )
}

/// Arbitrary JSON with nulls sprinkled at every level.
pub fn json_with_nulls() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}
