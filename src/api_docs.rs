use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::company::list_companies,
        api::company::get_company,
        api::company::create_company,
        api::dashboard::get_dashboard,
        // Add other endpoints here as we document them
    ),
    components(
        schemas(
            crate::domain::Company,
            crate::domain::CompanyDraft,
            crate::domain::CompanyRef,
            crate::domain::Employee,
            crate::domain::EmployeeDraft,
            crate::models::employee::Position,
            crate::services::stats_service::DashboardSummary,
        )
    ),
    tags(
        (name = "staffmanager", description = "StaffManager API")
    )
)]
pub struct ApiDoc;
