use serde::{Deserialize, Serialize};

/// Rover enum matching the upstream path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Rover {
    #[default]
    Curiosity,
    Opportunity,
    Spirit,
    Perseverance,
}

impl Rover {
    pub const ALL: [Rover; 4] = [
        Rover::Curiosity,
        Rover::Opportunity,
        Rover::Spirit,
        Rover::Perseverance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rover::Curiosity => "curiosity",
            Rover::Opportunity => "opportunity",
            Rover::Spirit => "spirit",
            Rover::Perseverance => "perseverance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rover::Curiosity => "Curiosity",
            Rover::Opportunity => "Opportunity",
            Rover::Spirit => "Spirit",
            Rover::Perseverance => "Perseverance",
        }
    }

    /// Cameras selectable for this rover, `all` first
    pub fn cameras(&self) -> Vec<CameraOption> {
        let extra: &[CameraOption] = match self {
            Rover::Curiosity => CURIOSITY_CAMERAS,
            Rover::Opportunity | Rover::Spirit => MER_CAMERAS,
            Rover::Perseverance => PERSEVERANCE_CAMERAS,
        };
        COMMON_CAMERAS.iter().chain(extra).copied().collect()
    }

    /// Whether `code` is one of this rover's cameras (case-insensitive)
    pub fn has_camera(&self, code: &str) -> bool {
        self.cameras()
            .iter()
            .any(|cam| cam.code.eq_ignore_ascii_case(code))
    }

    pub fn facts(&self) -> &'static RoverFacts {
        match self {
            Rover::Curiosity => &ROVER_FACTS[0],
            Rover::Perseverance => &ROVER_FACTS[1],
            Rover::Opportunity => &ROVER_FACTS[2],
            Rover::Spirit => &ROVER_FACTS[3],
        }
    }
}

impl std::fmt::Display for Rover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Rover {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "curiosity" => Ok(Rover::Curiosity),
            "opportunity" => Ok(Rover::Opportunity),
            "spirit" => Ok(Rover::Spirit),
            "perseverance" => Ok(Rover::Perseverance),
            _ => Err(format!("Unknown rover: {}", s)),
        }
    }
}

/// Camera filter. `All` is the "all" sentinel and is never sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CameraSelection {
    #[default]
    All,
    Code(String),
}

impl CameraSelection {
    pub const ALL_SENTINEL: &'static str = "all";

    /// Value for the `camera` query parameter, if any
    pub fn as_query(&self) -> Option<&str> {
        match self {
            CameraSelection::All => None,
            CameraSelection::Code(code) => Some(code.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CameraSelection::All)
    }
}

impl From<&str> for CameraSelection {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            CameraSelection::All
        } else {
            CameraSelection::Code(value.to_uppercase())
        }
    }
}

impl From<String> for CameraSelection {
    fn from(value: String) -> Self {
        CameraSelection::from(value.as_str())
    }
}

impl From<CameraSelection> for String {
    fn from(value: CameraSelection) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for CameraSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CameraSelection::All => write!(f, "{}", Self::ALL_SENTINEL),
            CameraSelection::Code(code) => write!(f, "{}", code),
        }
    }
}

/// One entry of a rover's camera menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraOption {
    pub code: &'static str,
    pub label: &'static str,
}

const COMMON_CAMERAS: &[CameraOption] = &[
    CameraOption { code: "all", label: "All Cameras" },
    CameraOption { code: "FHAZ", label: "Front Hazard Avoidance Camera" },
    CameraOption { code: "RHAZ", label: "Rear Hazard Avoidance Camera" },
    CameraOption { code: "NAVCAM", label: "Navigation Camera" },
];

const CURIOSITY_CAMERAS: &[CameraOption] = &[
    CameraOption { code: "MAST", label: "Mast Camera" },
    CameraOption { code: "CHEMCAM", label: "Chemistry and Camera Complex" },
    CameraOption { code: "MAHLI", label: "Mars Hand Lens Imager" },
    CameraOption { code: "MARDI", label: "Mars Descent Imager" },
];

// Opportunity and Spirit (Mars Exploration Rovers)
const MER_CAMERAS: &[CameraOption] = &[
    CameraOption { code: "PANCAM", label: "Panoramic Camera" },
    CameraOption { code: "MINITES", label: "Miniature Thermal Emission Spectrometer" },
];

const PERSEVERANCE_CAMERAS: &[CameraOption] = &[
    CameraOption { code: "MCZ_LEFT", label: "Mastcam-Z Left" },
    CameraOption { code: "MCZ_RIGHT", label: "Mastcam-Z Right" },
    CameraOption { code: "FRONT_HAZCAM_LEFT_A", label: "Front Hazard Avoidance Camera Left" },
    CameraOption { code: "FRONT_HAZCAM_RIGHT_A", label: "Front Hazard Avoidance Camera Right" },
];

/// Static mission facts shown on the welcome screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverFacts {
    pub rover: Rover,
    pub launch: &'static str,
    pub landing: &'static str,
    pub active: bool,
    /// Indicative only; the manifest is authoritative
    pub max_sol: &'static str,
    pub total_photos: &'static str,
}

impl RoverFacts {
    pub fn status_text(&self) -> &'static str {
        if self.active { "Active" } else { "Mission Complete" }
    }
}

pub static ROVER_FACTS: [RoverFacts; 4] = [
    RoverFacts {
        rover: Rover::Curiosity,
        launch: "26 Nov 2011",
        landing: "6 Aug 2012",
        active: true,
        max_sol: "4000+",
        total_photos: "1,000,000+",
    },
    RoverFacts {
        rover: Rover::Perseverance,
        launch: "30 Jul 2020",
        landing: "18 Feb 2021",
        active: true,
        max_sol: "in progress",
        total_photos: "in progress",
    },
    RoverFacts {
        rover: Rover::Opportunity,
        launch: "7 Jul 2003",
        landing: "25 Jan 2004",
        active: false,
        max_sol: "5111",
        total_photos: "200,000+",
    },
    RoverFacts {
        rover: Rover::Spirit,
        launch: "10 Jun 2003",
        landing: "4 Jan 2004",
        active: false,
        max_sol: "2208",
        total_photos: "100,000+",
    },
];
