use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::CompanyId).integer().not_null())
                    .col(
                        ColumnDef::new(Users::UserName)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::UserPassword).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create projects table
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::ProjectId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Projects::ProjectName).string().not_null())
                    .col(ColumnDef::new(Projects::StartDate).date().not_null())
                    .col(ColumnDef::new(Projects::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Projects::TotalEstimatedCost)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Projects::TotalAssignedEmployees)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Projects::IsComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Projects::ProjectDescription).text())
                    .to_owned(),
            )
            .await?;

        // Create subprojects table
        manager
            .create_table(
                Table::create()
                    .table(Subprojects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subprojects::SubprojectId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Subprojects::ProjectId).integer().not_null())
                    .col(
                        ColumnDef::new(Subprojects::SubprojectName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Subprojects::StartDate).date().not_null())
                    .col(ColumnDef::new(Subprojects::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Subprojects::TotalEstimatedCost)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Subprojects::TotalActualCost)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Subprojects::TotalAssignedEmployees)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Subprojects::IsComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Subprojects::SubprojectDescription).text())
                    .col(
                        ColumnDef::new(Subprojects::HoursAllocated)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Subprojects::Priority).string().not_null())
                    .col(
                        ColumnDef::new(Subprojects::TotalActualHours)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subprojects_project_id")
                            .from(Subprojects::Table, Subprojects::ProjectId)
                            .to(Projects::Table, Projects::ProjectId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tasks table
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::TaskId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::SubprojectId).integer().not_null())
                    .col(ColumnDef::new(Tasks::TaskName).string().not_null())
                    .col(ColumnDef::new(Tasks::StartDate).date().not_null())
                    .col(ColumnDef::new(Tasks::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Tasks::IsComplete)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tasks_subproject_id")
                            .from(Tasks::Table, Tasks::SubprojectId)
                            .to(Subprojects::Table, Subprojects::SubprojectId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subprojects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    UserId,
    CompanyId,
    UserName,
    UserPassword,
}

#[derive(Iden)]
enum Projects {
    Table,
    ProjectId,
    CompanyId,
    ProjectName,
    StartDate,
    EndDate,
    TotalEstimatedCost,
    TotalAssignedEmployees,
    IsComplete,
    ProjectDescription,
}

#[derive(Iden)]
enum Subprojects {
    Table,
    SubprojectId,
    ProjectId,
    SubprojectName,
    StartDate,
    EndDate,
    TotalEstimatedCost,
    TotalActualCost,
    TotalAssignedEmployees,
    IsComplete,
    SubprojectDescription,
    HoursAllocated,
    Priority,
    TotalActualHours,
}

#[derive(Iden)]
enum Tasks {
    Table,
    TaskId,
    SubprojectId,
    TaskName,
    StartDate,
    EndDate,
    IsComplete,
}
