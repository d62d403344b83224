use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_settings_table::Migration),
            Box::new(m20250101_000002_create_franchises_table::Migration),
            Box::new(m20250101_000003_create_subscription_orders_table::Migration),
            Box::new(m20250101_000004_create_sub_orders_table::Migration),
            Box::new(m20250101_000005_create_delivery_dates_table::Migration),
        ]
    }
}

// Migration implementations

mod m20250101_000001_create_settings_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000001_create_settings_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Settings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Settings::Id)
                                .integer()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Settings::PauseCutoffTime)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Settings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Settings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Settings {
        Table,
        Id,
        PauseCutoffTime,
        UpdatedAt,
    }
}

mod m20250101_000002_create_franchises_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000002_create_franchises_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Franchises::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Franchises::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Franchises::Name).string().not_null())
                        .col(ColumnDef::new(Franchises::Polygon).json().not_null())
                        .col(
                            ColumnDef::new(Franchises::FreeDeliveryRadiusKm)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Franchises::ChargePerExtraKm)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Franchises::TotalDeliveryRadiusKm)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Franchises::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Franchises::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Franchises::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_franchises_is_active")
                        .table(Franchises::Table)
                        .col(Franchises::IsActive)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Franchises::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Franchises {
        Table,
        Id,
        Name,
        Polygon,
        FreeDeliveryRadiusKm,
        ChargePerExtraKm,
        TotalDeliveryRadiusKm,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000003_create_subscription_orders_table {

    use sea_orm_migration::prelude::*;

    use super::m20250101_000002_create_franchises_table::Franchises;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000003_create_subscription_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SubscriptionOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SubscriptionOrders::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::OrderNumber)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::CustomerId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::TotalAmount)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::DeliveryAddress)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::Latitude)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::Longitude)
                                .double()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::SubscriptionStatus)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::PaymentType)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::AssignedFranchiseId)
                                .uuid()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubscriptionOrders::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_subscription_orders_franchise_id")
                                .from(
                                    SubscriptionOrders::Table,
                                    SubscriptionOrders::AssignedFranchiseId,
                                )
                                .to(Franchises::Table, Franchises::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_subscription_orders_customer_id")
                        .table(SubscriptionOrders::Table)
                        .col(SubscriptionOrders::CustomerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_subscription_orders_franchise_id")
                        .table(SubscriptionOrders::Table)
                        .col(SubscriptionOrders::AssignedFranchiseId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_subscription_orders_status")
                        .table(SubscriptionOrders::Table)
                        .col(SubscriptionOrders::SubscriptionStatus)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SubscriptionOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SubscriptionOrders {
        Table,
        Id,
        OrderNumber,
        CustomerId,
        TotalAmount,
        DeliveryAddress,
        Latitude,
        Longitude,
        SubscriptionStatus,
        PaymentType,
        AssignedFranchiseId,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250101_000004_create_sub_orders_table {

    use sea_orm_migration::prelude::*;

    use super::m20250101_000003_create_subscription_orders_table::SubscriptionOrders;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000004_create_sub_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SubOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SubOrders::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubOrders::SubscriptionOrderId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SubOrders::ProductName).string().not_null())
                        .col(ColumnDef::new(SubOrders::Quantity).integer().not_null())
                        .col(ColumnDef::new(SubOrders::UnitPrice).decimal().not_null())
                        .col(
                            ColumnDef::new(SubOrders::WeekdayPattern)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(SubOrders::StartDate).string().not_null())
                        .col(
                            ColumnDef::new(SubOrders::RepeatMultiplier)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubOrders::RemainingDays)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(SubOrders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_sub_orders_subscription_order_id")
                                .from(SubOrders::Table, SubOrders::SubscriptionOrderId)
                                .to(SubscriptionOrders::Table, SubscriptionOrders::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sub_orders_subscription_order_id")
                        .table(SubOrders::Table)
                        .col(SubOrders::SubscriptionOrderId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SubOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum SubOrders {
        Table,
        Id,
        SubscriptionOrderId,
        ProductName,
        Quantity,
        UnitPrice,
        WeekdayPattern,
        StartDate,
        RepeatMultiplier,
        RemainingDays,
        CreatedAt,
    }
}

mod m20250101_000005_create_delivery_dates_table {

    use sea_orm_migration::prelude::*;

    use super::m20250101_000004_create_sub_orders_table::SubOrders;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000005_create_delivery_dates_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(DeliveryDates::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(DeliveryDates::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(DeliveryDates::SubOrderId).uuid().not_null())
                        .col(ColumnDef::new(DeliveryDates::Date).string().not_null())
                        .col(ColumnDef::new(DeliveryDates::Status).string().not_null())
                        .col(
                            ColumnDef::new(DeliveryDates::DeliveryPartnerId)
                                .uuid()
                                .null(),
                        )
                        .col(ColumnDef::new(DeliveryDates::Description).string().null())
                        .col(ColumnDef::new(DeliveryDates::DeliveryTime).string().null())
                        .col(ColumnDef::new(DeliveryDates::Rating).integer().null())
                        .col(
                            ColumnDef::new(DeliveryDates::DeliveryImage)
                                .string()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(DeliveryDates::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_delivery_dates_sub_order_id")
                                .from(DeliveryDates::Table, DeliveryDates::SubOrderId)
                                .to(SubOrders::Table, SubOrders::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // The pause path scans a sub-order's schedule by date.
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_delivery_dates_sub_order_id_date")
                        .table(DeliveryDates::Table)
                        .col(DeliveryDates::SubOrderId)
                        .col(DeliveryDates::Date)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(DeliveryDates::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum DeliveryDates {
        Table,
        Id,
        SubOrderId,
        Date,
        Status,
        DeliveryPartnerId,
        Description,
        DeliveryTime,
        Rating,
        DeliveryImage,
        CreatedAt,
    }
}
