//! OpenAPI document for the journal REST API.
//!
//! Served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, WellBeing};
use crate::inbound::http::journal::{EntryBody, EntryResponse, EntrySummaryResponse};
use crate::inbound::http::users::{CreateUserBody, ProfileBody, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gratitude journal API",
        description = "Users keep one journal each and record one gratitude entry per day.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::create_named_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::journal::list_entries,
        crate::inbound::http::journal::add_entry,
        crate::inbound::http::journal::get_entry,
        crate::inbound::http::journal::update_entry,
        crate::inbound::http::journal::delete_entry,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        WellBeing,
        UserResponse,
        CreateUserBody,
        ProfileBody,
        EntryResponse,
        EntrySummaryResponse,
        EntryBody,
    )),
    tags(
        (name = "users", description = "User accounts"),
        (name = "journal", description = "Journal entries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
