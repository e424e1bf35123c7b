pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_table_skills;
mod m20260301_000002_create_table_projects;
mod m20260301_000003_create_table_experience;
mod m20260301_000004_create_table_education;
mod m20260301_000005_create_table_certifications;
mod m20260301_000006_create_table_awards;
mod m20260301_000007_create_table_articles;
mod m20260301_000008_create_table_testimonials;
mod m20260301_000009_create_table_contact_messages;
mod m20260301_000010_create_table_floating_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_table_skills::Migration),
            Box::new(m20260301_000002_create_table_projects::Migration),
            Box::new(m20260301_000003_create_table_experience::Migration),
            Box::new(m20260301_000004_create_table_education::Migration),
            Box::new(m20260301_000005_create_table_certifications::Migration),
            Box::new(m20260301_000006_create_table_awards::Migration),
            Box::new(m20260301_000007_create_table_articles::Migration),
            Box::new(m20260301_000008_create_table_testimonials::Migration),
            Box::new(m20260301_000009_create_table_contact_messages::Migration),
            Box::new(m20260301_000010_create_table_floating_messages::Migration),
        ]
    }
}
