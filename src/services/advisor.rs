// src/services/advisor.rs
//! Soft checks for the conventions a prompt document is expected to follow.
//!
//! Findings are reported, never enforced: the document is exported exactly
//! as the caller built it.
use crate::models::PromptDocument;
use crate::resolution::{Dimension, Dpi};
use std::fmt;
use std::ops::RangeInclusive;

const OPACITY_RANGE: RangeInclusive<f64> = 0.0..=1.0;
const ROTATION_RANGE: RangeInclusive<f64> = -180.0..=180.0;
const GUIDANCE_RANGE: RangeInclusive<f64> = 1.0..=20.0;
const STEPS_RANGE: RangeInclusive<u32> = 20..=100;

#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    pub field: String,
    pub message: String,
}

impl Advisory {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn advisories(doc: &PromptDocument) -> Vec<Advisory> {
    let mut found = Vec::new();

    if doc.subjects.is_empty() {
        found.push(Advisory::new("subjects", "no subjects listed"));
    }

    for (i, overlay) in doc.text_overlays.iter().flatten().enumerate() {
        if !OPACITY_RANGE.contains(&overlay.opacity) {
            found.push(Advisory::new(
                format!("text_overlays[{i}].opacity"),
                format!("{} is outside [0, 1]", overlay.opacity),
            ));
        }
        if let Some(rotation) = overlay.rotation {
            if !ROTATION_RANGE.contains(&rotation) {
                found.push(Advisory::new(
                    format!("text_overlays[{i}].rotation"),
                    format!("{rotation} degrees is outside [-180, 180]"),
                ));
            }
        }
    }

    if let Some(scale) = doc.guidance_scale {
        if !GUIDANCE_RANGE.contains(&scale) {
            found.push(Advisory::new(
                "guidance_scale",
                format!("{scale} is outside the usual 1-20"),
            ));
        }
    }

    if let Some(steps) = doc.num_inference_steps {
        if !STEPS_RANGE.contains(&steps) {
            found.push(Advisory::new(
                "num_inference_steps",
                format!("{steps} is outside the usual 20-100"),
            ));
        }
    }

    let res = &doc.resolution;
    for (field, dim) in [("resolution.width", &res.width), ("resolution.height", &res.height)] {
        if let Dimension::Label(label) = dim {
            if dim.pixels().is_none() {
                found.push(Advisory::new(field, format!("label {label:?} has no pixel count")));
            }
        }
    }
    if let Dpi::Label(label) = &res.dpi {
        if res.dpi.value().is_none() {
            found.push(Advisory::new("resolution.dpi", format!("label {label:?} has no numeric value")));
        }
    }
    if let Some(mismatch) = res.aspect_ratio_mismatch() {
        found.push(Advisory::new("resolution.aspect_ratio", mismatch));
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::example::smoothie_prompt;
    use crate::resolution::AspectRatio;

    #[test]
    fn clean_document_has_no_advisories() {
        let mut doc = smoothie_prompt();
        doc.resolution.width = "3840".into();
        doc.resolution.height = "2160".into();
        assert_eq!(advisories(&doc), Vec::new());
    }

    #[test]
    fn smoothie_resolution_mismatch_is_reported() {
        let found = advisories(&smoothie_prompt());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].field, "resolution.aspect_ratio");
    }

    #[test]
    fn opacity_bounds_are_inclusive() {
        let mut doc = smoothie_prompt();
        doc.resolution.aspect_ratio = AspectRatio::from("256:270");
        let overlays = doc.text_overlays.as_mut().expect("overlays");
        overlays[0].opacity = 0.0;
        overlays.push(overlays[0].clone());
        overlays[1].opacity = 1.0;
        assert_eq!(advisories(&doc), Vec::new());
    }

    #[test]
    fn out_of_range_values_are_flagged() {
        let mut doc = smoothie_prompt();
        doc.subjects.clear();
        doc.guidance_scale = Some(35.0);
        doc.num_inference_steps = Some(5);
        let overlays = doc.text_overlays.as_mut().expect("overlays");
        overlays[0].opacity = 1.5;
        overlays[0].rotation = Some(270.0);
        doc.resolution.dpi = "print".into();

        let fields: Vec<String> = advisories(&doc).into_iter().map(|a| a.field).collect();
        assert!(fields.contains(&"subjects".to_string()));
        assert!(fields.contains(&"text_overlays[0].opacity".to_string()));
        assert!(fields.contains(&"text_overlays[0].rotation".to_string()));
        assert!(fields.contains(&"guidance_scale".to_string()));
        assert!(fields.contains(&"num_inference_steps".to_string()));
        assert!(fields.contains(&"resolution.dpi".to_string()));
    }

    #[test]
    fn unparseable_width_label_is_flagged() {
        let mut doc = smoothie_prompt();
        doc.resolution.width = "ultra wide".into();
        let found = advisories(&doc);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].to_string(), "resolution.width: label \"ultra wide\" has no pixel count");
    }

    #[test]
    fn unparseable_dpi_label_is_quoted() {
        let mut doc = smoothie_prompt();
        doc.resolution.dpi = "retina".into();
        let found = advisories(&doc);
        let dpi = found
            .iter()
            .find(|a| a.field == "resolution.dpi")
            .expect("dpi advisory");
        assert_eq!(dpi.to_string(), "resolution.dpi: label \"retina\" has no numeric value");
    }
}
