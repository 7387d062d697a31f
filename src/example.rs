// src/example.rs
//! The prompt exported by the binary. Edit the literals here before a run.
use crate::models::*;
use crate::resolution::{AspectRatio, Dimension, Dpi, Resolution};
use crate::vocab::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn smoothie_prompt() -> PromptDocument {
    PromptDocument {
        scene: "A red smoothie on a premium kitchen countertop".to_string(),
        subjects: vec![Subject {
            kind: SubjectType::Beverage,
            description: "Tall glass of thick strawberry-raspberry smoothie with a paper straw, \
                          condensation beading on the glass"
                .to_string(),
            pose: "upright, slightly angled toward the camera".to_string(),
            position: SubjectPosition::Center,
            expression: "inviting".to_string(),
            accessories: Some(strings(&[
                "mint sprig garnish",
                "halved strawberry on the rim",
                "striped paper straw",
            ])),
        }],
        style: Style::ProductPhotography,
        lighting: Lighting::Softbox,
        mood: Mood::Fresh,
        composition: Composition::RuleOfThirds,
        background: Background {
            environment_type: Some(EnvironmentType::Indoor),
            elements: strings(&[
                "white marble countertop",
                "blurred modern kitchen",
                "scattered fresh berries",
                "wooden cutting board",
            ]),
            depth_of_field: DepthOfField::Shallow,
        },
        camera: Camera {
            angle: CameraAngle::from("slightly above eye level"),
            distance: ShotDistance::MediumCloseUp,
            lens_type: Some(LensType::Portrait85),
            focus: Focus::Selective,
        },
        color_palette: strings(&["#C0392B", "#F5F5F0", "#2E7D32", "#D7B899"]),
        props: Some(strings(&["linen napkin", "small bowl of raspberries"])),
        resolution: Resolution {
            width: Dimension::from("4096"),
            height: Dimension::from("4320"),
            aspect_ratio: AspectRatio::Widescreen,
            dpi: Dpi::from("300 (Standard Print)"),
            label: Some("Print hero shot".to_string()),
        },
        text_overlays: Some(vec![TextOverlay {
            content: "Berry Bliss".to_string(),
            position: OverlayPosition::TopRight,
            style: "bold sans-serif with soft drop shadow".to_string(),
            font_family: "Montserrat".to_string(),
            font_color: "#FFFFFF".to_string(),
            size: "large".to_string(),
            opacity: 0.9,
            rotation: Some(-5.0),
        }]),
        negative_prompt: Some(NegativePrompt::Terms(strings(&[
            "blurry",
            "watermark",
            "extra straws",
            "distorted glass",
        ]))),
        seed: Some(42),
        guidance_scale: Some(7.5),
        num_inference_steps: Some(50),
        model_identifier: Some("stable-diffusion-xl-1024-v1-0".to_string()),
    }
}
