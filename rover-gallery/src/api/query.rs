use rover_common::{CameraSelection, Rover};

use crate::filter::{Filter, TemporalSelector};

/// Everything one photo request needs, with the time axis already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoQuery {
    pub rover: Rover,
    pub camera: CameraSelection,
    pub selector: TemporalSelector,
    pub page: u32,
}

impl PhotoQuery {
    pub fn from_filter(filter: &Filter) -> Self {
        Self {
            rover: filter.rover,
            camera: filter.camera.clone(),
            selector: TemporalSelector::from_filter(filter),
            page: filter.page,
        }
    }

    /// Query parameters other than the API key, in request order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), self.selector.query_pair()];
        if let Some(camera) = self.camera.as_query() {
            params.push(("camera", camera.to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_params_sol_all_cameras() {
        let query = PhotoQuery::from_filter(&Filter::default());
        assert_eq!(
            query.params(),
            vec![("page", "1".to_string()), ("sol", "1000".to_string())]
        );
    }

    #[test]
    fn test_params_date_and_camera() {
        let filter = Filter {
            rover: Rover::Opportunity,
            camera: CameraSelection::from("pancam"),
            sol: 0,
            earth_date: NaiveDate::from_ymd_opt(2015, 6, 3),
            page: 2,
        };
        let query = PhotoQuery::from_filter(&filter);
        assert_eq!(query.rover, Rover::Opportunity);
        assert_eq!(
            query.params(),
            vec![
                ("page", "2".to_string()),
                ("earth_date", "2015-6-3".to_string()),
                ("camera", "PANCAM".to_string()),
            ]
        );
    }
}
