// src/models.rs
use crate::numbers;
use crate::resolution::Resolution;
use crate::vocab::*;
use serde::{Deserialize, Serialize};

/// One image-generation request, built in full by the caller.
///
/// Stylistic fields take open vocabularies, so any string is accepted;
/// nothing here is validated. See [`crate::services::advisor`] for the soft
/// checks that are logged before export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDocument {
    pub scene: String,
    pub subjects: Vec<Subject>,
    pub style: Style,
    pub lighting: Lighting,
    pub mood: Mood,
    pub composition: Composition,
    pub background: Background,
    pub camera: Camera,
    pub color_palette: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<Vec<String>>,
    pub resolution: Resolution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_overlays: Option<Vec<TextOverlay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<NegativePrompt>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "numbers::optional_whole"
    )]
    pub seed: Option<i64>,
    /// Conventionally 1-20.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f64>,
    /// Conventionally 20-100. Whole-valued floats are accepted.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "numbers::optional_whole"
    )]
    pub num_inference_steps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "type")]
    pub kind: SubjectType,
    pub description: String,
    pub pose: String,
    pub position: SubjectPosition,
    pub expression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_type: Option<EnvironmentType>,
    pub elements: Vec<String>,
    pub depth_of_field: DepthOfField,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub angle: CameraAngle,
    pub distance: ShotDistance,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens_type: Option<LensType>,
    pub focus: Focus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    pub content: String,
    pub position: OverlayPosition,
    pub style: String,
    pub font_family: String,
    pub font_color: String,
    /// Free-text size, e.g. `"large"` or `"24pt"`.
    pub size: String,
    /// Expected in [0, 1]; stored as given.
    pub opacity: f64,
    /// Degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// Things the backend should avoid, as one string or a list of terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NegativePrompt {
    Text(String),
    Terms(Vec<String>),
}
