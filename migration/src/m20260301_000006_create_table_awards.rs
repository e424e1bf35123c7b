use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Awards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Awards::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Awards::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Awards::Organization).string_len(150))
                    .col(
                        ColumnDef::new(Awards::AssociatedType)
                            .string_len(20)
                            .not_null()
                            .default("none"),
                    )
                    .col(ColumnDef::new(Awards::AssociatedId).uuid())
                    .col(ColumnDef::new(Awards::Description).text())
                    .col(ColumnDef::new(Awards::IssueMonth).string_len(20).not_null())
                    .col(ColumnDef::new(Awards::IssueYear).integer().not_null())
                    .col(ColumnDef::new(Awards::CertificateUrl).text())
                    .col(ColumnDef::new(Awards::ImageUrl).text())
                    .col(ColumnDef::new(Awards::CertificateLink).text())
                    .col(
                        ColumnDef::new(Awards::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Awards::SocialLinks).json_binary().not_null())
                    .col(
                        ColumnDef::new(Awards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Awards::UpdatedAt)
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
            .drop_table(Table::drop().table(Awards::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Awards {
    Table,
    Id,
    Title,
    Organization,
    AssociatedType,
    AssociatedId,
    Description,
    IssueMonth,
    IssueYear,
    CertificateUrl,
    ImageUrl,
    CertificateLink,
    Featured,
    SocialLinks,
    CreatedAt,
    UpdatedAt,
}
