pub mod articles;
pub mod assets;
pub mod auth;
pub mod awards;
pub mod certifications;
pub mod contact;
pub mod education;
pub mod email;
pub mod experience;
pub mod floating_message;
pub mod projects;
pub mod skills;
pub mod testimonials;
