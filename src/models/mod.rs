pub mod application;
pub mod applicant;
pub mod resume;
pub mod toast;
pub mod user;
pub mod vacancy;

pub use application::{ApplicationStatus, HrContact, JobApplication};
pub use applicant::{ApplicantReview, Verdict};
pub use resume::ResumeFile;
pub use toast::{Toast, ToastVariant, DEFAULT_TOAST_DURATION_MS};
pub use user::{Role, User};
pub use vacancy::{BusyType, OfferType, Vacancy, VacancyStatus};
