use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certifications::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Certifications::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certifications::Organization)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certifications::CompletionMonth)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certifications::CompletionYear)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certifications::CredentialId).string_len(200))
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .col(ColumnDef::new(Certifications::Description).text())
                    .col(
                        ColumnDef::new(Certifications::Skills)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Certifications::Pinned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Certifications::CertificateUrl).text())
                    .col(ColumnDef::new(Certifications::ImageUrl).text())
                    .col(
                        ColumnDef::new(Certifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Certifications::UpdatedAt)
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
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Title,
    Organization,
    CompletionMonth,
    CompletionYear,
    CredentialId,
    CredentialUrl,
    Description,
    Skills,
    Pinned,
    CertificateUrl,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}
