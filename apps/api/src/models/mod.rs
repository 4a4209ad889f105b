pub mod de;
pub mod job;
pub mod resume;

pub use job::JobPosting;
pub use resume::ResumeProfile;
