//! Enrichment skill models.
//!
//! Responsibilities:
//! - Model every predefined skill as a variant of [`SkillKind`], discriminated
//!   on the wire by `@odata.type`.
//! - Provide each variant's default parameters, context, inputs and outputs.
//! - Rebuild a skill from its wire representation ([`Skill::load`]).
//!
//! Does NOT handle:
//! - Custom (web API) skills. Only the registry in [`PREDEFINED_SKILLS`] is accepted.
//! - Validating enrichment paths such as `/document/content`.
//!
//! Invariants:
//! - [`PREDEFINED_SKILLS`], [`SkillKind::odata_type`] and the serde tags agree.
//! - Loading a skill's own wire format yields an equal skill.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::wire::{Loadable, WireFormat, WirePayload, json_kind};

/// Wire key of the skill discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// Registry of predefined skills: type name to wire discriminator.
pub const PREDEFINED_SKILLS: &[(&str, &str)] = &[
    (
        "KeyPhraseExtractionSkill",
        "#Microsoft.Skills.Text.KeyPhraseExtractionSkill",
    ),
    (
        "LanguageDetectionSkill",
        "#Microsoft.Skills.Text.LanguageDetectionSkill",
    ),
    (
        "EntityRecognitionSkill",
        "#Microsoft.Skills.Text.EntityRecognitionSkill",
    ),
    ("MergeSkill", "#Microsoft.Skills.Text.MergeSkill"),
    ("SplitSkill", "#Microsoft.Skills.Text.SplitSkill"),
    ("SentimentSkill", "#Microsoft.Skills.Text.SentimentSkill"),
    (
        "ImageAnalysisSkill",
        "#Microsoft.Skills.Vision.ImageAnalysisSkill",
    ),
    ("OcrSkill", "#Microsoft.Skills.Vision.OcrSkill"),
    ("ShaperSkill", "#Microsoft.Skills.Util.ShaperSkill"),
];

/// Look up the wire discriminator of a predefined skill type name.
pub fn predefined_skill_type(type_name: &str) -> Option<&'static str> {
    PREDEFINED_SKILLS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, odata_type)| *odata_type)
}

fn default_language_code() -> String {
    "en".to_string()
}

fn single_space() -> String {
    " ".to_string()
}

/// A named value fed into a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillInput {
    pub name: String,
    /// Enrichment tree path, e.g. `/document/content`.
    pub source: String,
}

impl SkillInput {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

impl WireFormat for SkillInput {}

/// A named value produced by a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillOutput {
    pub name: String,
    /// Node name written into the enrichment tree.
    pub target_name: String,
}

impl SkillOutput {
    pub fn new(name: impl Into<String>, target_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target_name: target_name.into(),
        }
    }
}

impl WireFormat for SkillOutput {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyPhraseExtractionParameters {
    pub default_language_code: String,
    pub max_key_phrase_count: u32,
}

impl Default for KeyPhraseExtractionParameters {
    fn default() -> Self {
        Self {
            default_language_code: default_language_code(),
            max_key_phrase_count: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LanguageDetectionParameters {
    pub default_country_hint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityRecognitionParameters {
    /// Entity categories to extract, e.g. `Person`, `Location`. Empty means all.
    pub categories: Vec<String>,
    pub default_language_code: String,
    pub minimum_precision: Option<f64>,
    pub include_typeless_entities: Option<bool>,
}

impl Default for EntityRecognitionParameters {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            default_language_code: default_language_code(),
            minimum_precision: None,
            include_typeless_entities: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeParameters {
    pub insert_pre_tag: String,
    pub insert_post_tag: String,
}

impl Default for MergeParameters {
    fn default() -> Self {
        Self {
            insert_pre_tag: single_space(),
            insert_post_tag: single_space(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSplitMode {
    #[default]
    Pages,
    Sentences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitParameters {
    pub text_split_mode: TextSplitMode,
    pub maximum_page_length: Option<u32>,
    pub default_language_code: String,
}

impl Default for SplitParameters {
    fn default() -> Self {
        Self {
            text_split_mode: TextSplitMode::Pages,
            maximum_page_length: None,
            default_language_code: default_language_code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SentimentParameters {
    pub default_language_code: String,
}

impl Default for SentimentParameters {
    fn default() -> Self {
        Self {
            default_language_code: default_language_code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageAnalysisParameters {
    pub default_language_code: String,
    /// e.g. `categories`, `tags`, `description`, `faces`.
    pub visual_features: Vec<String>,
    /// e.g. `celebrities`, `landmarks`.
    pub details: Vec<String>,
}

impl Default for ImageAnalysisParameters {
    fn default() -> Self {
        Self {
            default_language_code: default_language_code(),
            visual_features: Vec::new(),
            details: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OcrParameters {
    pub default_language_code: String,
    pub detect_orientation: Option<bool>,
}

impl Default for OcrParameters {
    fn default() -> Self {
        Self {
            default_language_code: default_language_code(),
            detect_orientation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShaperParameters {}

/// Skill variant and its variant-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@odata.type")]
pub enum SkillKind {
    #[serde(rename = "#Microsoft.Skills.Text.KeyPhraseExtractionSkill")]
    KeyPhraseExtraction(KeyPhraseExtractionParameters),
    #[serde(rename = "#Microsoft.Skills.Text.LanguageDetectionSkill")]
    LanguageDetection(LanguageDetectionParameters),
    #[serde(rename = "#Microsoft.Skills.Text.EntityRecognitionSkill")]
    EntityRecognition(EntityRecognitionParameters),
    #[serde(rename = "#Microsoft.Skills.Text.MergeSkill")]
    Merge(MergeParameters),
    #[serde(rename = "#Microsoft.Skills.Text.SplitSkill")]
    Split(SplitParameters),
    #[serde(rename = "#Microsoft.Skills.Text.SentimentSkill")]
    Sentiment(SentimentParameters),
    #[serde(rename = "#Microsoft.Skills.Vision.ImageAnalysisSkill")]
    ImageAnalysis(ImageAnalysisParameters),
    #[serde(rename = "#Microsoft.Skills.Vision.OcrSkill")]
    Ocr(OcrParameters),
    #[serde(rename = "#Microsoft.Skills.Util.ShaperSkill")]
    Shaper(ShaperParameters),
}

impl SkillKind {
    /// Every variant with default parameters, in registry order.
    pub fn all() -> [SkillKind; 9] {
        [
            Self::KeyPhraseExtraction(Default::default()),
            Self::LanguageDetection(Default::default()),
            Self::EntityRecognition(Default::default()),
            Self::Merge(Default::default()),
            Self::Split(Default::default()),
            Self::Sentiment(Default::default()),
            Self::ImageAnalysis(Default::default()),
            Self::Ocr(Default::default()),
            Self::Shaper(Default::default()),
        ]
    }

    /// Variant with default parameters for a registry type name.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|kind| kind.type_name() == type_name)
    }

    /// Variant with default parameters for a wire discriminator.
    pub fn from_odata_type(odata_type: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|kind| kind.odata_type() == odata_type)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::KeyPhraseExtraction(_) => "KeyPhraseExtractionSkill",
            Self::LanguageDetection(_) => "LanguageDetectionSkill",
            Self::EntityRecognition(_) => "EntityRecognitionSkill",
            Self::Merge(_) => "MergeSkill",
            Self::Split(_) => "SplitSkill",
            Self::Sentiment(_) => "SentimentSkill",
            Self::ImageAnalysis(_) => "ImageAnalysisSkill",
            Self::Ocr(_) => "OcrSkill",
            Self::Shaper(_) => "ShaperSkill",
        }
    }

    /// Wire discriminator (`@odata.type`).
    pub fn odata_type(&self) -> &'static str {
        match self {
            Self::KeyPhraseExtraction(_) => "#Microsoft.Skills.Text.KeyPhraseExtractionSkill",
            Self::LanguageDetection(_) => "#Microsoft.Skills.Text.LanguageDetectionSkill",
            Self::EntityRecognition(_) => "#Microsoft.Skills.Text.EntityRecognitionSkill",
            Self::Merge(_) => "#Microsoft.Skills.Text.MergeSkill",
            Self::Split(_) => "#Microsoft.Skills.Text.SplitSkill",
            Self::Sentiment(_) => "#Microsoft.Skills.Text.SentimentSkill",
            Self::ImageAnalysis(_) => "#Microsoft.Skills.Vision.ImageAnalysisSkill",
            Self::Ocr(_) => "#Microsoft.Skills.Vision.OcrSkill",
            Self::Shaper(_) => "#Microsoft.Skills.Util.ShaperSkill",
        }
    }

    pub fn default_context(&self) -> &'static str {
        match self {
            Self::KeyPhraseExtraction(_) => "/document/pages/*",
            Self::ImageAnalysis(_) | Self::Ocr(_) => "/document/normalized_images/*",
            Self::LanguageDetection(_)
            | Self::EntityRecognition(_)
            | Self::Merge(_)
            | Self::Split(_)
            | Self::Sentiment(_)
            | Self::Shaper(_) => "/document",
        }
    }

    pub fn default_inputs(&self) -> Vec<SkillInput> {
        let text_and_language = |text_source: &str| {
            vec![
                SkillInput::new("text", text_source),
                SkillInput::new("languageCode", "/document/languageCode"),
            ]
        };

        match self {
            Self::KeyPhraseExtraction(_) => text_and_language("/document/text"),
            Self::LanguageDetection(_) => vec![SkillInput::new("text", "/document/text")],
            Self::EntityRecognition(_) | Self::Split(_) | Self::Sentiment(_) => {
                text_and_language("/document/content")
            }
            Self::Merge(_) => vec![
                SkillInput::new("text", "/document/content"),
                SkillInput::new("itemsToInsert", "/document/normalized_images/*/text"),
                SkillInput::new("offsets", "/document/normalized_images/*/contentOffset"),
            ],
            Self::ImageAnalysis(_) | Self::Ocr(_) => {
                vec![SkillInput::new("image", "/document/normalized_images/*")]
            }
            Self::Shaper(_) => Vec::new(),
        }
    }

    pub fn default_outputs(&self) -> Vec<SkillOutput> {
        match self {
            Self::KeyPhraseExtraction(_) => vec![SkillOutput::new("keyPhrases", "keyPhrases")],
            Self::LanguageDetection(_) => {
                vec![SkillOutput::new("languageCode", "languageCode")]
            }
            Self::EntityRecognition(_) => vec![SkillOutput::new("entities", "entities")],
            Self::Merge(_) => vec![SkillOutput::new("mergedText", "merged_text")],
            Self::Split(_) => vec![SkillOutput::new("textItems", "pages")],
            Self::Sentiment(_) => vec![SkillOutput::new("score", "sentimentScore")],
            Self::ImageAnalysis(_) => vec![
                SkillOutput::new("tags", "imageTags"),
                SkillOutput::new("description", "imageDescription"),
            ],
            Self::Ocr(_) => vec![SkillOutput::new("text", "text")],
            Self::Shaper(_) => vec![SkillOutput::new("output", "output")],
        }
    }
}

/// One enrichment step of a skillset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(flatten)]
    pub kind: SkillKind,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Enrichment tree path the skill runs at, e.g. `/document`.
    pub context: String,
    pub inputs: Vec<SkillInput>,
    pub outputs: Vec<SkillOutput>,
}

impl Skill {
    /// Create a skill with the variant's default context, inputs and outputs.
    pub fn new(kind: SkillKind) -> Self {
        Self {
            name: None,
            description: None,
            context: kind.default_context().to_string(),
            inputs: kind.default_inputs(),
            outputs: kind.default_outputs(),
            kind,
        }
    }

    pub fn key_phrase_extraction() -> Self {
        Self::new(SkillKind::KeyPhraseExtraction(Default::default()))
    }

    pub fn language_detection() -> Self {
        Self::new(SkillKind::LanguageDetection(Default::default()))
    }

    pub fn entity_recognition() -> Self {
        Self::new(SkillKind::EntityRecognition(Default::default()))
    }

    pub fn merge() -> Self {
        Self::new(SkillKind::Merge(Default::default()))
    }

    pub fn split() -> Self {
        Self::new(SkillKind::Split(Default::default()))
    }

    pub fn sentiment() -> Self {
        Self::new(SkillKind::Sentiment(Default::default()))
    }

    pub fn image_analysis() -> Self {
        Self::new(SkillKind::ImageAnalysis(Default::default()))
    }

    pub fn ocr() -> Self {
        Self::new(SkillKind::Ocr(Default::default()))
    }

    pub fn shaper() -> Self {
        Self::new(SkillKind::Shaper(Default::default()))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<SkillInput>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<SkillOutput>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn odata_type(&self) -> &'static str {
        self.kind.odata_type()
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

impl WireFormat for Skill {}

impl Loadable for Skill {
    /// Rebuild a skill from its wire representation.
    ///
    /// Absent `context`, `inputs` and `outputs` take the variant's defaults.
    fn load(data: impl Into<WirePayload>) -> Result<Self> {
        let mut map = data.into().into_object()?;

        let odata_type = match map.get(ODATA_TYPE_KEY) {
            None => return Err(ClientError::MissingSkillType),
            Some(Value::String(odata_type)) => odata_type.clone(),
            Some(other) => {
                return Err(ClientError::InvalidPayload(format!(
                    "{ODATA_TYPE_KEY} must be a string, got {}",
                    json_kind(other)
                )));
            }
        };
        let defaults = SkillKind::from_odata_type(&odata_type)
            .ok_or(ClientError::UnknownSkillType(odata_type))?;

        if !map.contains_key("context") {
            map.insert("context".into(), defaults.default_context().into());
        }
        if !map.contains_key("inputs") {
            map.insert("inputs".into(), serde_json::to_value(defaults.default_inputs())?);
        }
        if !map.contains_key("outputs") {
            map.insert(
                "outputs".into(),
                serde_json::to_value(defaults.default_outputs())?,
            );
        }

        Ok(serde_json::from_value(Value::Object(map))?)
    }
}
