pub mod analysis;
pub mod loaders;
pub mod upload;

pub use analysis::{Difficulty, DocumentAnalysis, QuizQuestion};
pub use loaders::load_disk_file;
pub use upload::{guess_mime_type, DiskFile, FileSource, InMemoryFile};
