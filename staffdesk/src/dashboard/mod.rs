pub mod busy;
pub mod controller;
pub mod notice;
pub mod screen;
pub mod stats;

pub use busy::{BusyFlag, BusyGuard};
pub use controller::{Dashboard, SubmitOutcome};
pub use notice::{Notice, NoticeLevel};
pub use screen::{FormMode, FormState, Screen};
pub use stats::DashboardStats;
