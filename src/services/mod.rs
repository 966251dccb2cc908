pub mod analysis_service;
pub mod intake_service;

pub use analysis_service::AnalysisService;
pub use intake_service::{DocumentKind, ExtractedText, IntakeService};
