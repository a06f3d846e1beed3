///! Terminal rendering. Pure functions of the gallery state.

use rover_common::{Manifest, Photo, ROVER_FACTS, Rover};
use std::fmt::Write;

use crate::feed::GalleryState;
use crate::filter::{Filter, SelectorError, display_date, validate_selector};

pub fn render_welcome() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Mars Rover Photo Gallery ===");
    let _ = writeln!(
        out,
        "Browse real images taken by NASA's rovers on the surface of Mars, \
         organised by sol (Martian day, counted from landing) or by Earth date."
    );
    let _ = writeln!(out);
    out.push_str(&render_rovers());
    let _ = writeln!(out);
    let _ = writeln!(out, "Type 'start' to begin exploring, or 'help' for all commands.");
    out
}

pub fn render_rovers() -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<13} {:<12} {:<12} {:<17} {:<12} {}",
        "Rover", "Launch", "Landing", "Status", "Max sol", "Photos"
    );
    for facts in &ROVER_FACTS {
        let _ = writeln!(
            out,
            "{:<13} {:<12} {:<12} {:<17} {:<12} {}",
            facts.rover.label(),
            facts.launch,
            facts.landing,
            facts.status_text(),
            facts.max_sol,
            facts.total_photos
        );
    }
    out
}

pub fn render_cameras(rover: Rover) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cameras for {}:", rover.label());
    for cam in rover.cameras() {
        let _ = writeln!(out, "  {:<22} {}", cam.code, cam.label);
    }
    out
}

pub fn render_manifest(rover: Rover, manifest: Option<&Manifest>) -> String {
    let Some(manifest) = manifest else {
        return format!("Manifest for {} is unavailable right now.\n", rover.label());
    };

    let mut out = String::new();
    let _ = writeln!(out, "Mission manifest: {}", manifest.name);
    if let Some(status) = &manifest.status {
        let _ = writeln!(out, "  Status:       {}", status);
    }
    if let Some(launch) = &manifest.launch_date {
        let _ = writeln!(out, "  Launch:       {}", display_date(launch));
    }
    if let Some(landing) = &manifest.landing_date {
        let _ = writeln!(out, "  Landing:      {}", display_date(landing));
    }
    let _ = writeln!(out, "  Max sol:      {}", manifest.max_sol);
    if let Some(max_date) = &manifest.max_date {
        let _ = writeln!(out, "  Latest date:  {}", display_date(max_date));
    }
    let _ = writeln!(out, "  Total photos: {}", manifest.total_photos);
    out
}

/// Filter line: rover, time axis, camera
pub fn describe_filters(filters: &Filter) -> String {
    format!("Rover {} • {}", filters.rover, describe_selection(filters))
}

fn describe_selection(filters: &Filter) -> String {
    let when = match &filters.earth_date {
        Some(date) => format!("Earth date: {}", display_date(date)),
        None => format!("Sol: {}", filters.sol),
    };
    let camera = if filters.camera.is_all() {
        "All".to_string()
    } else {
        filters.camera.to_string()
    };
    format!("{} • Camera: {}", when, camera)
}

pub fn render_status(state: &GalleryState) -> String {
    let feed = &state.feed;
    let mut out = String::new();
    let _ = writeln!(out, "{} • Page: {}", describe_filters(&state.filters), state.filters.page);
    let _ = writeln!(
        out,
        "Photos: {} • Loading: {} • More: {} • No results: {}",
        feed.photos.len(),
        feed.loading,
        feed.has_more,
        feed.no_results
    );
    if let Some(error) = &feed.error {
        let _ = writeln!(out, "Error: {}", error);
    }
    out.push_str(&render_gate(&state.filters));
    out
}

/// Warnings shown while the search action is disabled
pub fn render_gate(filters: &Filter) -> String {
    match validate_selector(filters) {
        Ok(_) => String::new(),
        Err(SelectorError::BothSet) => {
            "Warning: fill in only Sol OR Earth date, not both.\n".to_string()
        }
        Err(SelectorError::NoneSet) => {
            "Info: fill in the Sol OR the Earth date to search.\n".to_string()
        }
    }
}

fn render_photo(out: &mut String, index: usize, photo: &Photo) {
    let _ = writeln!(
        out,
        "[{}] #{} {} • {} • Sol: {} • Date: {}",
        index + 1,
        photo.id,
        photo.rover.name,
        photo.camera.full_name,
        photo.sol,
        display_date(&photo.earth_date)
    );
    let _ = writeln!(out, "     {}", photo.img_src);
}

/// Main gallery view. At most `preview` photo rows are printed, newest last.
pub fn render_feed(state: &GalleryState, preview: usize) -> String {
    let feed = &state.feed;
    let mut out = render_gate(&state.filters);

    if let Some(error) = &feed.error {
        let _ = writeln!(out, "Error: {}", error);
        if error.contains("Sol") {
            let _ = writeln!(
                out,
                "Tip: check the rover's manifest ('manifest') for the latest sol available."
            );
        }
        let _ = writeln!(out, "Type 'retry' to try again.");
        return out;
    }

    if !feed.photos.is_empty() {
        let _ = writeln!(
            out,
            "Rover {} • {} • Photos found: {}",
            feed.photos[0].rover.name,
            describe_selection(&state.filters),
            feed.photos.len()
        );
    }

    if feed.no_results {
        if !feed.loading {
            let _ = writeln!(out, "No photos found for the selected filters.");
            let _ = writeln!(out, "Tip: adjust the sol, the Earth date or the camera.");
        }
        return out;
    }

    let skip = feed.photos.len().saturating_sub(preview);
    if skip > 0 {
        let _ = writeln!(out, "(showing the last {} of {})", feed.photos.len() - skip, feed.photos.len());
    }
    // (id, index) keys rows, duplicates across pages are kept
    for (index, photo) in feed.photos.iter().enumerate().skip(skip) {
        render_photo(&mut out, index, photo);
    }

    if feed.loading {
        let _ = writeln!(out, "Fetching photos from Mars...");
    } else if feed.photos.is_empty() {
        if !feed.first_access {
            let _ = writeln!(out, "Run a search to see the available photos.");
        }
    } else if feed.has_more {
        let _ = writeln!(out, "Type 'more' to load more photos.");
    } else {
        let _ = writeln!(out, "All available photos have been loaded!");
        let _ = writeln!(out, "Total of {} photos found.", feed.photos.len());
    }
    out
}
