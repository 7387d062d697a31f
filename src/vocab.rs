// src/vocab.rs
//! Open vocabularies for the stylistic fields of a prompt document.
//!
//! Each type lists the tags image backends commonly understand, plus an
//! `Other` variant carrying any string verbatim. Nothing here rejects input:
//! the known tags exist for tooling and autocomplete.

/// Declares an open enumeration: known tags plus `Other(String)`.
///
/// The serialized form is always the bare string. Equality and hashing go
/// through `as_str`, so `Other("cinematic".into())` equals the known tag.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $tag:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub enum $name {
            $( $variant, )+
            Other(String),
        }

        impl $name {
            pub const KNOWN: &'static [&'static str] = &[ $( $tag, )+ ];

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $tag, )+
                    $name::Other(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(&self.as_str())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $tag => $name::$variant, )+
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $tag => $name::$variant, )+
                    _ => $name::Other(value),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as ::serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

pub(crate) use open_enum;

open_enum! {
    /// Overall rendering style.
    Style {
        Photorealistic => "photorealistic",
        Cinematic => "cinematic",
        ProductPhotography => "product photography",
        Illustration => "illustration",
        DigitalArt => "digital art",
        OilPainting => "oil painting",
        Watercolor => "watercolor",
        Anime => "anime",
        ComicBook => "comic book",
        Render3d => "3d render",
        PixelArt => "pixel art",
        Sketch => "sketch",
        Minimalist => "minimalist",
        Surreal => "surreal",
        Vintage => "vintage",
    }
}

open_enum! {
    Lighting {
        NaturalDaylight => "natural daylight",
        GoldenHour => "golden hour",
        BlueHour => "blue hour",
        Studio => "studio lighting",
        Softbox => "softbox",
        Backlit => "backlit",
        RimLight => "rim light",
        Dramatic => "dramatic",
        LowKey => "low key",
        HighKey => "high key",
        Neon => "neon",
        Candlelight => "candlelight",
        Overcast => "overcast",
        Moonlight => "moonlight",
    }
}

open_enum! {
    Mood {
        Serene => "serene",
        Energetic => "energetic",
        Fresh => "fresh",
        Luxurious => "luxurious",
        Joyful => "joyful",
        Mysterious => "mysterious",
        Melancholic => "melancholic",
        Dramatic => "dramatic",
        Romantic => "romantic",
        Nostalgic => "nostalgic",
        Tense => "tense",
        Whimsical => "whimsical",
    }
}

open_enum! {
    /// Framing rule applied to the whole image.
    Composition {
        RuleOfThirds => "rule of thirds",
        Centered => "centered",
        Symmetrical => "symmetrical",
        LeadingLines => "leading lines",
        GoldenRatio => "golden ratio",
        Diagonal => "diagonal",
        FrameWithinFrame => "frame within frame",
        NegativeSpace => "negative space",
        FillTheFrame => "fill the frame",
        Layered => "layered",
    }
}

open_enum! {
    SubjectType {
        Person => "person",
        Character => "character",
        Animal => "animal",
        Product => "product",
        Food => "food",
        Beverage => "beverage",
        Vehicle => "vehicle",
        Building => "building",
        Plant => "plant",
        Object => "object",
        Landscape => "landscape",
    }
}

open_enum! {
    /// Where a subject sits in the frame.
    SubjectPosition {
        Center => "center",
        Left => "left",
        Right => "right",
        Foreground => "foreground",
        Midground => "midground",
        Background => "background",
        TopLeft => "top-left",
        TopRight => "top-right",
        BottomLeft => "bottom-left",
        BottomRight => "bottom-right",
    }
}

open_enum! {
    EnvironmentType {
        Indoor => "indoor",
        Outdoor => "outdoor",
        Studio => "studio",
        Urban => "urban",
        Nature => "nature",
        Abstract => "abstract",
        Underwater => "underwater",
        Space => "space",
        Fantasy => "fantasy",
    }
}

open_enum! {
    DepthOfField {
        Shallow => "shallow",
        Medium => "medium",
        Deep => "deep",
        Bokeh => "bokeh",
        TiltShift => "tilt-shift",
    }
}

open_enum! {
    CameraAngle {
        EyeLevel => "eye level",
        HighAngle => "high angle",
        LowAngle => "low angle",
        BirdsEye => "bird's eye view",
        WormsEye => "worm's eye view",
        DutchAngle => "dutch angle",
        OverTheShoulder => "over the shoulder",
        TopDown => "top down",
        ThreeQuarter => "three-quarter",
    }
}

open_enum! {
    /// Shot distance between camera and subject.
    ShotDistance {
        ExtremeCloseUp => "extreme close-up",
        CloseUp => "close-up",
        MediumCloseUp => "medium close-up",
        Medium => "medium shot",
        MediumWide => "medium wide shot",
        Wide => "wide shot",
        ExtremeWide => "extreme wide shot",
    }
}

open_enum! {
    LensType {
        WideAngle => "wide angle",
        Standard => "standard",
        Telephoto => "telephoto",
        Macro => "macro",
        Fisheye => "fisheye",
        Prime35 => "35mm",
        Prime50 => "50mm",
        Portrait85 => "85mm",
        TiltShift => "tilt-shift",
        Anamorphic => "anamorphic",
    }
}

open_enum! {
    Focus {
        Sharp => "sharp focus",
        Soft => "soft focus",
        Selective => "selective focus",
        Deep => "deep focus",
        Rack => "rack focus",
        MotionBlur => "motion blur",
    }
}

open_enum! {
    OverlayPosition {
        TopLeft => "top-left",
        TopCenter => "top-center",
        TopRight => "top-right",
        Center => "center",
        BottomLeft => "bottom-left",
        BottomCenter => "bottom-center",
        BottomRight => "bottom-right",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn known_tag_parses_to_named_variant() {
        assert_eq!(Style::from("photorealistic"), Style::Photorealistic);
        assert_eq!(CameraAngle::from("bird's eye view"), CameraAngle::BirdsEye);
        assert!(Lighting::from("golden hour").is_known());
    }

    #[test]
    fn unknown_string_is_kept_verbatim() {
        let mood = Mood::from("Bittersweet, slightly hazy");
        assert_eq!(mood, Mood::Other("Bittersweet, slightly hazy".to_string()));
        assert!(!mood.is_known());
        assert_eq!(mood.to_string(), "Bittersweet, slightly hazy");
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(Style::from("Cinematic"), Style::Other("Cinematic".to_string()));
    }

    #[test]
    fn other_holding_known_tag_equals_variant() {
        let a = Focus::Other("soft focus".to_string());
        assert_eq!(a, Focus::Soft);
        assert!(a.is_known());

        let set: HashSet<Focus> = [a, Focus::Soft].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serializes_as_bare_string() {
        let value = serde_json::to_value(ShotDistance::CloseUp).expect("serialize");
        assert_eq!(value, serde_json::json!("close-up"));

        let parsed: LensType = serde_json::from_value(serde_json::json!("tilt-shift"))
            .expect("deserialize lens");
        assert_eq!(parsed, LensType::TiltShift);

        let custom: LensType = serde_json::from_value(serde_json::json!("24-70mm zoom"))
            .expect("deserialize custom lens");
        assert_eq!(custom.as_str(), "24-70mm zoom");
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(serde_json::from_value::<Mood>(serde_json::json!(3)).is_err());
    }

    #[test]
    fn from_str_never_fails() {
        let position: OverlayPosition = "".parse().expect("infallible");
        assert_eq!(position, OverlayPosition::Other(String::new()));
    }

    #[test]
    fn vocabularies_have_no_duplicate_tags() {
        for known in [
            Style::KNOWN,
            Lighting::KNOWN,
            Mood::KNOWN,
            Composition::KNOWN,
            SubjectType::KNOWN,
            SubjectPosition::KNOWN,
            EnvironmentType::KNOWN,
            DepthOfField::KNOWN,
            CameraAngle::KNOWN,
            ShotDistance::KNOWN,
            LensType::KNOWN,
            Focus::KNOWN,
            OverlayPosition::KNOWN,
        ] {
            let unique: HashSet<&str> = known.iter().copied().collect();
            assert_eq!(unique.len(), known.len());
        }
    }
}
