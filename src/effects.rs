//! Decorative background effects, expressed as data.
//!
//! Particle presets serialize to the option object understood by tsParticles
//! and are handed to the client through a `data-particles` attribute.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Value<T> {
    pub value: T,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Enabled {
    pub enable: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Background {
    pub color: Value<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverEvent {
    pub enable: bool,
    pub mode: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Events {
    pub on_hover: HoverEvent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Repulse {
    pub distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Modes {
    pub repulse: Repulse,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Interactivity {
    pub events: Events,
    pub modes: Modes,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Links {
    pub enable: bool,
    pub color: &'static str,
    pub distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    pub enable: bool,
    pub speed: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_modes: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Density {
    pub enable: bool,
    pub area: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Number {
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<Density>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Size {
    Fixed(f64),
    Range { min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kinds: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Particles {
    pub color: Value<&'static str>,
    pub links: Links,
    #[serde(rename = "move")]
    pub motion: Motion,
    pub number: Number,
    pub opacity: Value<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    pub size: Value<Size>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    pub full_screen: Enabled,
    pub background: Background,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fps_limit: Option<u32>,
    pub detect_retina: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactivity: Option<Interactivity>,
    pub particles: Particles,
}

impl ParticleConfig {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

const TRANSPARENT: Background = Background {
    color: Value {
        value: "transparent",
    },
};

pub const HERO_PARTICLES: ParticleConfig = ParticleConfig {
    full_screen: Enabled { enable: false },
    background: TRANSPARENT,
    fps_limit: Some(60),
    detect_retina: true,
    interactivity: Some(Interactivity {
        events: Events {
            on_hover: HoverEvent {
                enable: true,
                mode: "repulse",
            },
            resize: None,
        },
        modes: Modes {
            repulse: Repulse {
                distance: 100.0,
                duration: None,
            },
        },
    }),
    particles: Particles {
        color: Value { value: "#ffffff" },
        links: Links {
            enable: true,
            color: "#aaa",
            distance: 140.0,
            opacity: None,
            width: None,
        },
        motion: Motion {
            enable: true,
            speed: 1.0,
            out_modes: None,
        },
        number: Number {
            value: 50,
            density: Some(Density {
                enable: true,
                area: 800,
            }),
        },
        opacity: Value { value: 0.15 },
        shape: None,
        size: Value {
            value: Size::Range { min: 1.0, max: 3.0 },
        },
    },
};

pub const ABOUT_PARTICLES: ParticleConfig = ParticleConfig {
    full_screen: Enabled { enable: false },
    background: TRANSPARENT,
    fps_limit: Some(60),
    detect_retina: true,
    interactivity: Some(Interactivity {
        events: Events {
            on_hover: HoverEvent {
                enable: true,
                mode: "repulse",
            },
            resize: Some(true),
        },
        modes: Modes {
            repulse: Repulse {
                distance: 100.0,
                duration: Some(0.4),
            },
        },
    }),
    particles: Particles {
        color: Value { value: "#ffffff" },
        links: Links {
            enable: true,
            color: "#a855f7",
            distance: 140.0,
            opacity: Some(0.3),
            width: Some(1.0),
        },
        motion: Motion {
            enable: true,
            speed: 1.5,
            out_modes: Some("out"),
        },
        number: Number {
            value: 60,
            density: Some(Density {
                enable: true,
                area: 900,
            }),
        },
        opacity: Value { value: 0.2 },
        shape: Some(Shape {
            kinds: &["circle", "triangle", "polygon"],
        }),
        size: Value {
            value: Size::Range { min: 1.0, max: 2.5 },
        },
    },
};

pub const PROJECT_PARTICLES: ParticleConfig = ParticleConfig {
    full_screen: Enabled { enable: false },
    background: TRANSPARENT,
    fps_limit: None,
    detect_retina: true,
    interactivity: None,
    particles: Particles {
        color: Value { value: "#ec4899" },
        links: Links {
            enable: true,
            color: "#a855f7",
            distance: 120.0,
            opacity: Some(0.2),
            width: None,
        },
        motion: Motion {
            enable: true,
            speed: 0.5,
            out_modes: None,
        },
        number: Number {
            value: 30,
            density: None,
        },
        opacity: Value { value: 0.2 },
        shape: None,
        size: Value {
            value: Size::Fixed(2.0),
        },
    },
};

/// A blurred colour blob drifting behind a section.
#[derive(Debug, Clone, Copy)]
pub struct Blob {
    /// Colour and placement classes.
    pub class: &'static str,
    pub duration_secs: u32,
    pub delay_secs: u32,
}

impl Blob {
    pub fn style(&self) -> String {
        format!(
            "animation-duration: {}s; animation-delay: {}s;",
            self.duration_secs, self.delay_secs
        )
    }
}

pub static COOL_BLOBS: [Blob; 2] = [
    Blob {
        class: "-top-[10%] -left-[10%] bg-blue-500",
        duration_secs: 35,
        delay_secs: 0,
    },
    Blob {
        class: "-bottom-[10%] -right-[10%] bg-teal-500",
        duration_secs: 30,
        delay_secs: 5,
    },
];

pub static WARM_BLOBS: [Blob; 2] = [
    Blob {
        class: "-top-[10%] -left-[10%] bg-pink-500",
        duration_secs: 30,
        delay_secs: 0,
    },
    Blob {
        class: "-bottom-[10%] -right-[10%] bg-purple-500",
        duration_secs: 25,
        delay_secs: 5,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hero_particles_json_shape() {
        let value: serde_json::Value =
            serde_json::from_str(&HERO_PARTICLES.to_json().unwrap()).unwrap();
        assert_eq!(value["fullScreen"]["enable"], json!(false));
        assert_eq!(value["fpsLimit"], json!(60));
        assert_eq!(
            value["interactivity"]["events"]["onHover"]["mode"],
            json!("repulse")
        );
        assert_eq!(value["particles"]["move"]["speed"], json!(1.0));
        assert_eq!(value["particles"]["size"]["value"], json!({"min": 1.0, "max": 3.0}));
        assert!(value["particles"].get("shape").is_none());
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let value = serde_json::to_value(PROJECT_PARTICLES).unwrap();
        assert!(value.get("interactivity").is_none());
        assert!(value.get("fpsLimit").is_none());
        assert_eq!(value["particles"]["size"]["value"], json!(2.0));
        assert!(value["particles"]["number"].get("density").is_none());
    }

    #[test]
    fn test_shape_kinds_serialize_as_type() {
        let value = serde_json::to_value(ABOUT_PARTICLES).unwrap();
        assert_eq!(
            value["particles"]["shape"]["type"],
            json!(["circle", "triangle", "polygon"])
        );
        assert_eq!(value["particles"]["move"]["outModes"], json!("out"));
    }

    #[test]
    fn test_blob_style() {
        assert_eq!(
            COOL_BLOBS[1].style(),
            "animation-duration: 30s; animation-delay: 5s;"
        );
    }
}
