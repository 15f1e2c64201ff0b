//! Resource and value-object models for the search service REST API.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod datasource;
pub mod index;
pub mod indexer;
pub mod scoring_profile;
pub mod skills;
pub mod skillset;

pub use datasource::{DataContainer, DataSource, DataSourceCredentials, DataSourceType};
pub use index::{CorsOptions, Index, IndexField, Suggester, SuggesterSearchMode};
pub use indexer::{FieldMapping, FieldMappingFunction, Indexer, IndexerSchedule};
pub use scoring_profile::{
    DistanceParameters, FreshnessParameters, FunctionAggregation, Interpolation,
    MagnitudeParameters, ScoringFunctionParameters, ScoringProfile, ScoringProfileFunction,
    ScoringProfileText, TagParameters, TextWeight,
};
pub use skills::{
    EntityRecognitionParameters, ImageAnalysisParameters, KeyPhraseExtractionParameters,
    LanguageDetectionParameters, MergeParameters, ODATA_TYPE_KEY, OcrParameters,
    PREDEFINED_SKILLS, SentimentParameters, ShaperParameters, Skill, SkillInput, SkillKind,
    SkillOutput, SplitParameters, TextSplitMode, predefined_skill_type,
};
pub use skillset::Skillset;
