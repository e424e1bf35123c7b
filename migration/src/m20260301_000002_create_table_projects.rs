use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(150).not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(ColumnDef::new(Projects::DetailedDescription).text())
                    .col(ColumnDef::new(Projects::Status).string_len(20).not_null())
                    .col(ColumnDef::new(Projects::CompletionMonth).string_len(20))
                    .col(ColumnDef::new(Projects::CompletionYear).integer())
                    .col(ColumnDef::new(Projects::ImageUrl).text().not_null())
                    .col(ColumnDef::new(Projects::SkillIds).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Links).json_binary().not_null())
                    .col(
                        ColumnDef::new(Projects::ShowOnHome)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_show_on_home
                ON projects (show_on_home);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    DetailedDescription,
    Status,
    CompletionMonth,
    CompletionYear,
    ImageUrl,
    SkillIds,
    Links,
    ShowOnHome,
    CreatedAt,
    UpdatedAt,
}
