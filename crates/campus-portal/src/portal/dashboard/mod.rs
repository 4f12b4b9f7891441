//! Landing-page aggregation: active announcements, current courses, and the
//! next few assignment deadlines.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{Announcement, AnnouncementId, DashboardOverview, Priority};
pub use repository::AnnouncementBoard;
pub use router::dashboard_router;
pub use service::{DashboardError, DashboardService};
