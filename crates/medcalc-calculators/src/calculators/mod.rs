pub mod anesthesiology;
pub mod cardiology;
pub mod dermatology;
pub mod emergency;
pub mod endocrinology;
pub mod gastroenterology;
pub mod geriatrics;
pub mod hematology;
pub mod infectious_disease;
pub mod neurology;
pub mod oncology;
pub mod ophthalmology;
pub mod pediatrics;
pub mod psychiatry;
pub mod pulmonology;
