use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experience::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experience::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Experience::Category)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experience::CompanyName)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experience::Role).string_len(150).not_null())
                    .col(ColumnDef::new(Experience::EmploymentType).string_len(50))
                    .col(ColumnDef::new(Experience::Location).string_len(150))
                    .col(
                        ColumnDef::new(Experience::Status)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experience::StartMonth)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experience::StartYear).integer().not_null())
                    .col(ColumnDef::new(Experience::EndMonth).string_len(20))
                    .col(ColumnDef::new(Experience::EndYear).integer())
                    .col(ColumnDef::new(Experience::Description).text())
                    .col(
                        ColumnDef::new(Experience::TechnologyIds)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experience::SkillTags)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experience::CompanyLogoUrl).text())
                    .col(ColumnDef::new(Experience::OfferLetterUrl).text())
                    .col(ColumnDef::new(Experience::CompletionCertificateUrl).text())
                    .col(
                        ColumnDef::new(Experience::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experience::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experience::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experience {
    Table,
    Id,
    Category,
    CompanyName,
    Role,
    EmploymentType,
    Location,
    Status,
    StartMonth,
    StartYear,
    EndMonth,
    EndYear,
    Description,
    TechnologyIds,
    SkillTags,
    CompanyLogoUrl,
    OfferLetterUrl,
    CompletionCertificateUrl,
    CreatedAt,
    UpdatedAt,
}
