use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profile table (singleton, seeded below)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Profile::Name).text().not_null())
                    .col(ColumnDef::new(Profile::Role).json_binary().not_null())
                    .col(ColumnDef::new(Profile::Semester).text().not_null())
                    .col(ColumnDef::new(Profile::University).text().not_null())
                    .col(ColumnDef::new(Profile::Year).text().not_null())
                    .col(ColumnDef::new(Profile::Bio).json_binary().not_null())
                    .col(ColumnDef::new(Profile::Email).text().not_null())
                    .col(ColumnDef::new(Profile::Location).text().not_null())
                    .col(ColumnDef::new(Profile::Avatar).text())
                    .col(ColumnDef::new(Profile::Social).json_binary().not_null())
                    .col(
                        ColumnDef::new(Profile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profile::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create projects table
        // =====================================================
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
                    .col(ColumnDef::new(Projects::FullDescription).text())
                    .col(ColumnDef::new(Projects::Image).text())
                    .col(ColumnDef::new(Projects::Gallery).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Category).text().not_null())
                    .col(ColumnDef::new(Projects::Tech).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Features).json_binary().not_null())
                    .col(ColumnDef::new(Projects::Challenges).text())
                    .col(ColumnDef::new(Projects::Solutions).text())
                    .col(ColumnDef::new(Projects::Github).text().not_null())
                    .col(ColumnDef::new(Projects::Demo).text().not_null())
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Projects::Size).text().not_null())
                    .col(
                        ColumnDef::new(Projects::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
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
            .create_index(
                Index::create()
                    .name("idx_projects_order_index")
                    .table(Projects::Table)
                    .col(Projects::OrderIndex)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create experiences table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Experiences::Title)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::Organization).text().not_null())
                    .col(ColumnDef::new(Experiences::Period).text().not_null())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(ColumnDef::new(Experiences::Skills).json_binary().not_null())
                    .col(
                        ColumnDef::new(Experiences::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_experiences_order_index")
                    .table(Experiences::Table)
                    .col(Experiences::OrderIndex)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create education table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Education::Degree).string_len(150).not_null())
                    .col(ColumnDef::new(Education::Institution).text().not_null())
                    .col(ColumnDef::new(Education::Period).text().not_null())
                    .col(ColumnDef::new(Education::Description).text().not_null())
                    .col(
                        ColumnDef::new(Education::Achievements)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Education::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Education::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_education_order_index")
                    .table(Education::Table)
                    .col(Education::OrderIndex)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create skills table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Level).integer().not_null())
                    .col(ColumnDef::new(Skills::Category).text().not_null())
                    .col(ColumnDef::new(Skills::Icon).text().not_null())
                    .col(
                        ColumnDef::new(Skills::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_skills_order_index")
                    .table(Skills::Table)
                    .col(Skills::OrderIndex)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create certificates table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Certificates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificates::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(
                        ColumnDef::new(Certificates::Name)
                            .string_len(150)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Certificates::Issuer).text().not_null())
                    .col(ColumnDef::new(Certificates::Date).text().not_null())
                    .col(ColumnDef::new(Certificates::Image).text())
                    .col(ColumnDef::new(Certificates::CredentialUrl).text())
                    .col(
                        ColumnDef::new(Certificates::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Certificates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_certificates_order_index")
                    .table(Certificates::Table)
                    .col(Certificates::OrderIndex)
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create highlights table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Highlights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Highlights::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Highlights::Icon).text().not_null())
                    .col(ColumnDef::new(Highlights::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Highlights::Description).text().not_null())
                    .col(
                        ColumnDef::new(Highlights::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Create stats table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Stats::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Stats::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Stats::Value).string_len(50).not_null())
                    .col(ColumnDef::new(Stats::Label).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Stats::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Seed the singleton profile row
        // =====================================================
        let insert = Query::insert()
            .into_table(Profile::Table)
            .columns([
                Profile::Name,
                Profile::Role,
                Profile::Semester,
                Profile::University,
                Profile::Year,
                Profile::Bio,
                Profile::Email,
                Profile::Location,
                Profile::Social,
            ])
            .values_panic([
                "Your Name".into(),
                Expr::cust("'[\"Web Developer\"]'::jsonb"),
                "1".into(),
                "Your University".into(),
                "2024".into(),
                Expr::cust("'[]'::jsonb"),
                "email@example.com".into(),
                "Indonesia".into(),
                Expr::cust("'{}'::jsonb"),
            ])
            .to_owned();

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stats::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Highlights::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Certificates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    Role,
    Semester,
    University,
    Year,
    Bio,
    Email,
    Location,
    Avatar,
    Social,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    FullDescription,
    Image,
    Gallery,
    Category,
    Tech,
    Features,
    Challenges,
    Solutions,
    Github,
    Demo,
    Featured,
    Size,
    OrderIndex,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Title,
    Organization,
    Period,
    Description,
    Skills,
    OrderIndex,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Degree,
    Institution,
    Period,
    Description,
    Achievements,
    OrderIndex,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
    Level,
    Category,
    Icon,
    OrderIndex,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Certificates {
    Table,
    Id,
    Name,
    Issuer,
    Date,
    Image,
    CredentialUrl,
    OrderIndex,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Highlights {
    Table,
    Id,
    Icon,
    Title,
    Description,
    OrderIndex,
}

#[derive(DeriveIden)]
enum Stats {
    Table,
    Id,
    Value,
    Label,
    OrderIndex,
}
