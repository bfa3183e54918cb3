use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::query_state::QueryStateResolver;
use std::{fmt, str::FromStr};

pub const DEFAULT_PAGE_SIZE: u32 = 24;
pub const DEFAULT_RADIO_STATIONS_CATEGORY_ID: i64 = 206;
pub const DEFAULT_UPCOMING_SHOWS_CATEGORY_ID: i64 = 222;

/// The category-scoped archive listings served by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchivePage {
    RadioStations,
    UpcomingShows,
}

impl ArchivePage {
    pub const ALL: [Self; 2] = [Self::RadioStations, Self::UpcomingShows];

    pub fn slug(self) -> &'static str {
        match self {
            Self::RadioStations => "radio-stations",
            Self::UpcomingShows => "upcoming-shows",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::RadioStations => "Live Radio Stations",
            Self::UpcomingShows => "Upcoming Shows",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::RadioStations => "Streaming curated indie music 24/7, powered by artists",
            Self::UpcomingShows => "Discover our upcoming radio shows and events!",
        }
    }

    pub fn keyword_label(self) -> &'static str {
        match self {
            Self::RadioStations => "Search Channel",
            Self::UpcomingShows => "Search Show",
        }
    }

    /// Shows have not aired yet, so there is nothing to play.
    pub fn show_play_button(self) -> bool {
        matches!(self, Self::RadioStations)
    }
}

impl FromStr for ArchivePage {
    type Err = DomainError;

    fn from_str(slug: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == slug)
            .ok_or_else(|| DomainError::NotFound(format!("archive page {slug}")))
    }
}

impl fmt::Display for ArchivePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Page size and per-page category filters, injected from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSettings {
    pub page_size: u32,
    pub radio_stations_category_id: i64,
    pub upcoming_shows_category_id: i64,
}

impl Default for ArchiveSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            radio_stations_category_id: DEFAULT_RADIO_STATIONS_CATEGORY_ID,
            upcoming_shows_category_id: DEFAULT_UPCOMING_SHOWS_CATEGORY_ID,
        }
    }
}

impl ArchiveSettings {
    pub fn category_id(&self, page: ArchivePage) -> i64 {
        match page {
            ArchivePage::RadioStations => self.radio_stations_category_id,
            ArchivePage::UpcomingShows => self.upcoming_shows_category_id,
        }
    }

    pub fn resolver(&self, page: ArchivePage) -> QueryStateResolver {
        QueryStateResolver::new(self.page_size, [self.category_id(page)])
    }
}
