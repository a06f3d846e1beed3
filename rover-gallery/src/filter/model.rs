use chrono::NaiveDate;
use rover_common::{CameraSelection, Rover};
use serde::{Deserialize, Serialize};

/// Sol used for the very first query of a session
pub const DEFAULT_SOL: u32 = 1000;

/// The user's current query.
///
/// `sol` and `earth_date` are both stored raw: the dedicated [`FilterUpdate`]
/// constructors keep them mutually exclusive, `apply` itself does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub rover: Rover,

    #[serde(default)]
    pub camera: CameraSelection,

    #[serde(default = "default_sol")]
    pub sol: u32,

    #[serde(default)]
    pub earth_date: Option<NaiveDate>,

    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_sol() -> u32 {
    DEFAULT_SOL
}

fn default_page() -> u32 {
    1
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            rover: Rover::default(),
            camera: CameraSelection::All,
            sol: default_sol(),
            earth_date: None,
            page: default_page(),
        }
    }
}

impl Filter {
    /// Merge a partial update. No cross-field validation happens here.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(rover) = update.rover {
            self.rover = rover;
        }
        if let Some(camera) = update.camera {
            self.camera = camera;
        }
        if let Some(sol) = update.sol {
            self.sol = sol;
        }
        if let Some(earth_date) = update.earth_date {
            self.earth_date = earth_date;
        }
        if let Some(page) = update.page {
            self.page = page;
        }
    }
}

/// Partial filter update.
///
/// `earth_date` is a double option: `Some(None)` clears the date,
/// `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub rover: Option<Rover>,
    pub camera: Option<CameraSelection>,
    pub sol: Option<u32>,
    pub earth_date: Option<Option<NaiveDate>>,
    pub page: Option<u32>,
}

impl FilterUpdate {
    /// Switch rover; the camera menu changes with it, so fall back to all cameras
    pub fn rover(rover: Rover) -> Self {
        Self {
            rover: Some(rover),
            camera: Some(CameraSelection::All),
            page: Some(1),
            ..Default::default()
        }
    }

    pub fn camera(camera: CameraSelection) -> Self {
        Self {
            camera: Some(camera),
            page: Some(1),
            ..Default::default()
        }
    }

    /// Select by sol; clears any earth date
    pub fn sol(sol: u32) -> Self {
        Self {
            sol: Some(sol),
            earth_date: Some(None),
            page: Some(1),
            ..Default::default()
        }
    }

    /// Select by earth date; a date zeroes the sol, `None` only clears the date
    pub fn earth_date(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => Self {
                earth_date: Some(Some(date)),
                sol: Some(0),
                page: Some(1),
                ..Default::default()
            },
            None => Self {
                earth_date: Some(None),
                page: Some(1),
                ..Default::default()
            },
        }
    }

    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }
}
