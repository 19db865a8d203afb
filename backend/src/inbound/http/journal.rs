//! Journal entry handlers.
//!
//! ```text
//! GET    /journal/{userName}
//! POST   /journal/{userName}          {"wellBeing":"GOOD","gratefulForToday":"coffee",...}
//! GET    /journal/entry/{journalEntryId}
//! PUT    /journal/entry/{journalEntryId}
//! DELETE /journal/entry/{journalEntryId}
//! ```
//!
//! The server stamps new entries with today's date; clients never send one.

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    EntryContent, EntryId, EntrySummary, Error, GratitudeNotes, JournalEntry, WellBeing,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Entry representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryResponse {
    /// Storage-assigned identifier.
    pub journal_entry_id: i64,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// How the author felt that day.
    pub well_being: WellBeing,
    /// Something the author was grateful for today.
    pub grateful_for_today: String,
    /// Why it mattered.
    pub grateful_for_today_description: String,
    /// Something the author is grateful for in life.
    pub grateful_for_in_life: String,
    /// Why it matters.
    pub grateful_for_in_life_description: String,
}

impl From<JournalEntry> for EntryResponse {
    fn from(entry: JournalEntry) -> Self {
        let id = entry.id().get();
        let date = entry.date();
        let EntryContent { well_being, notes } = entry.content().clone();
        Self {
            journal_entry_id: id,
            date,
            well_being,
            grateful_for_today: notes.grateful_for_today,
            grateful_for_today_description: notes.grateful_for_today_description,
            grateful_for_in_life: notes.grateful_for_in_life,
            grateful_for_in_life_description: notes.grateful_for_in_life_description,
        }
    }
}

/// Listing item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EntrySummaryResponse {
    /// Entry identifier.
    pub id: i64,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl From<EntrySummary> for EntrySummaryResponse {
    fn from(summary: EntrySummary) -> Self {
        Self {
            id: summary.id.get(),
            date: summary.date,
        }
    }
}

/// Body of entry create and update requests.
///
/// `wellBeing` is required; omitted text fields are stored empty.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EntryBody {
    /// Well-being level for the day.
    pub well_being: WellBeing,
    /// Gratitude for today.
    #[serde(default)]
    pub grateful_for_today: String,
    /// Description of today's gratitude.
    #[serde(default)]
    pub grateful_for_today_description: String,
    /// Gratitude in life.
    #[serde(default)]
    pub grateful_for_in_life: String,
    /// Description of the gratitude in life.
    #[serde(default)]
    pub grateful_for_in_life_description: String,
}

impl From<EntryBody> for EntryContent {
    fn from(body: EntryBody) -> Self {
        Self {
            well_being: body.well_being,
            notes: GratitudeNotes {
                grateful_for_today: body.grateful_for_today,
                grateful_for_today_description: body.grateful_for_today_description,
                grateful_for_in_life: body.grateful_for_in_life,
                grateful_for_in_life_description: body.grateful_for_in_life_description,
            },
        }
    }
}

/// List a user's entries, newest first.
#[utoipa::path(
    get,
    path = "/journal/{userName}",
    params(("userName" = String, Path, description = "Journal owner")),
    responses(
        (status = 200, description = "Entry summaries", body = [EntrySummaryResponse]),
        (status = 400, description = "Invalid user name", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["journal"],
    operation_id = "listEntries"
)]
#[get("/journal/{userName}")]
pub async fn list_entries(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<EntrySummaryResponse>>> {
    let summaries = state.journal.list_entries(&path.into_inner()).await?;
    Ok(web::Json(summaries.into_iter().map(Into::into).collect()))
}

/// Add today's entry.
#[utoipa::path(
    post,
    path = "/journal/{userName}",
    params(("userName" = String, Path, description = "Journal owner")),
    request_body = EntryBody,
    responses(
        (status = 201, description = "Entry created", body = EntryResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 409, description = "Entry already exists for today", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["journal"],
    operation_id = "addEntry"
)]
#[post("/journal/{userName}")]
pub async fn add_entry(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EntryBody>,
) -> ApiResult<HttpResponse> {
    let entry = state
        .journal
        .add_entry(&path.into_inner(), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(EntryResponse::from(entry)))
}

/// Fetch one entry.
#[utoipa::path(
    get,
    path = "/journal/entry/{journalEntryId}",
    params(("journalEntryId" = i64, Path, description = "Entry identifier")),
    responses(
        (status = 200, description = "Entry", body = EntryResponse),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Unknown entry", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["journal"],
    operation_id = "getEntry"
)]
#[get("/journal/entry/{journalEntryId}")]
pub async fn get_entry(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<EntryResponse>> {
    let entry = state.journal.get_entry(EntryId::new(path.into_inner())).await?;
    Ok(web::Json(entry.into()))
}

/// Replace an entry's rating and notes. The date is kept.
#[utoipa::path(
    put,
    path = "/journal/entry/{journalEntryId}",
    params(("journalEntryId" = i64, Path, description = "Entry identifier")),
    request_body = EntryBody,
    responses(
        (status = 200, description = "Entry updated", body = EntryResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Unknown entry", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["journal"],
    operation_id = "updateEntry"
)]
#[put("/journal/entry/{journalEntryId}")]
pub async fn update_entry(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<EntryBody>,
) -> ApiResult<web::Json<EntryResponse>> {
    let entry = state
        .journal
        .update_entry(EntryId::new(path.into_inner()), payload.into_inner().into())
        .await?;
    Ok(web::Json(entry.into()))
}

/// Delete an entry.
#[utoipa::path(
    delete,
    path = "/journal/entry/{journalEntryId}",
    params(("journalEntryId" = i64, Path, description = "Entry identifier")),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 400, description = "Malformed identifier", body = Error),
        (status = 404, description = "Unknown entry", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["journal"],
    operation_id = "deleteEntry"
)]
#[delete("/journal/entry/{journalEntryId}")]
pub async fn delete_entry(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.journal.delete_entry(EntryId::new(path.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JournalId;
    use crate::domain::ports::{MockJournalEntries, MockUserAccounts};
    use crate::inbound::http::configure;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};
    use serde_json::{Value, json};
    use std::sync::Arc;

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
    }

    fn stored(id: i64, date: NaiveDate, content: EntryContent) -> JournalEntry {
        JournalEntry::new(EntryId::new(id), JournalId::new(1), date, content)
    }

    fn good_day() -> Value {
        json!({
            "wellBeing": "GOOD",
            "gratefulForToday": "coffee",
            "gratefulForTodayDescription": "tasty",
            "gratefulForInLife": "family",
            "gratefulForInLifeDescription": "supportive"
        })
    }

    async fn call(
        journal: MockJournalEntries,
        req: actix_test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let state = HttpState::new(Arc::new(MockUserAccounts::new()), Arc::new(journal));
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        actix_test::call_service(&app, req.to_request()).await
    }

    #[rstest]
    #[actix_web::test]
    async fn add_entry_returns_created_entry(today: NaiveDate) {
        let mut journal = MockJournalEntries::new();
        journal
            .expect_add_entry()
            .withf(|user, content| {
                user == "alice1"
                    && content.well_being == WellBeing::Good
                    && content.notes.grateful_for_in_life == "family"
            })
            .return_once(move |_, content| Ok(stored(1, today, content)));

        let res = call(
            journal,
            actix_test::TestRequest::post()
                .uri("/journal/alice1")
                .set_json(good_day()),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body,
            json!({
                "journalEntryId": 1,
                "date": "2024-06-15",
                "wellBeing": "GOOD",
                "gratefulForToday": "coffee",
                "gratefulForTodayDescription": "tasty",
                "gratefulForInLife": "family",
                "gratefulForInLifeDescription": "supportive"
            })
        );
    }

    #[actix_web::test]
    async fn add_entry_defaults_missing_notes_to_empty() {
        let mut journal = MockJournalEntries::new();
        journal
            .expect_add_entry()
            .withf(|_, content| content.notes == GratitudeNotes::default())
            .return_once(|_, _| Err(Error::conflict("An entry already exists for 2024-06-15")));

        let res = call(
            journal,
            actix_test::TestRequest::post()
                .uri("/journal/alice1")
                .set_json(json!({"wellBeing": "NEUTRAL"})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[rstest]
    #[case(json!({"gratefulForToday": "coffee"}))]
    #[case(json!({"wellBeing": "ECSTATIC"}))]
    #[actix_web::test]
    async fn add_entry_rejects_bad_wellbeing(#[case] body: Value) {
        let mut journal = MockJournalEntries::new();
        journal.expect_add_entry().never();

        let res = call(
            journal,
            actix_test::TestRequest::post()
                .uri("/journal/alice1")
                .set_json(body),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_entries_returns_id_date_pairs(today: NaiveDate) {
        let yesterday = today.pred_opt().expect("valid date");
        let mut journal = MockJournalEntries::new();
        journal.expect_list_entries().return_once(move |_| {
            Ok(vec![
                EntrySummary {
                    id: EntryId::new(2),
                    date: today,
                },
                EntrySummary {
                    id: EntryId::new(1),
                    date: yesterday,
                },
            ])
        });

        let res = call(journal, actix_test::TestRequest::get().uri("/journal/alice1")).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body,
            json!([{"id": 2, "date": "2024-06-15"}, {"id": 1, "date": "2024-06-14"}])
        );
    }

    #[actix_web::test]
    async fn get_entry_reports_missing_entry() {
        let mut journal = MockJournalEntries::new();
        journal
            .expect_get_entry()
            .withf(|id| *id == EntryId::new(42))
            .return_once(|_| Err(Error::not_found("No entry exists for journalEntryId 42")));

        let res = call(journal, actix_test::TestRequest::get().uri("/journal/entry/42")).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["message"], "No entry exists for journalEntryId 42");
    }

    #[rstest]
    #[case(actix_test::TestRequest::get())]
    #[case(actix_test::TestRequest::delete())]
    #[actix_web::test]
    async fn malformed_entry_id_is_invalid_request(#[case] req: actix_test::TestRequest) {
        let res = call(MockJournalEntries::new(), req.uri("/journal/entry/abc")).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["details"]["code"], "invalid_path");
    }

    #[rstest]
    #[actix_web::test]
    async fn update_entry_returns_updated_entry(today: NaiveDate) {
        let mut journal = MockJournalEntries::new();
        journal
            .expect_update_entry()
            .withf(|id, content| *id == EntryId::new(7) && content.well_being == WellBeing::Fantastic)
            .return_once(move |id, content| Ok(stored(id.get(), today, content)));

        let res = call(
            journal,
            actix_test::TestRequest::put()
                .uri("/journal/entry/7")
                .set_json(json!({"wellBeing": "FANTASTIC", "gratefulForToday": "sun"})),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: EntryResponse = actix_test::read_body_json(res).await;
        assert_eq!(body.well_being, WellBeing::Fantastic);
        assert_eq!(body.grateful_for_today, "sun");
    }

    #[actix_web::test]
    async fn delete_entry_responds_no_content() {
        let mut journal = MockJournalEntries::new();
        journal.expect_delete_entry().return_once(|_| Ok(()));

        let res = call(journal, actix_test::TestRequest::delete().uri("/journal/entry/7")).await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }
}
