//! Journal service implementing [`JournalEntries`].
//!
//! "Today" is the server's local calendar date as reported by the injected
//! [`Clock`]. The admission check runs against the journal loaded at request
//! time; two concurrent adds for the same user and day can both pass it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{JournalEntries, JournalRepository, UserRepository};
use crate::domain::{
    EntryContent, EntryId, EntrySummary, Error, JournalEntry, JournalError, NewJournalEntry, User,
    UserName,
};

/// Journal service backed by user and journal repositories.
#[derive(Clone)]
pub struct JournalService<U, J> {
    users: Arc<U>,
    journals: Arc<J>,
    clock: Arc<dyn Clock>,
}

impl<U, J> JournalService<U, J> {
    /// Create a new service with the given repositories and clock.
    pub fn new(users: Arc<U>, journals: Arc<J>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            journals,
            clock,
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

impl<U, J> JournalService<U, J>
where
    U: UserRepository,
    J: JournalRepository,
{
    async fn owner(&self, user_name: &str) -> Result<User, JournalError> {
        let user_name = UserName::new(user_name)?;
        self.users
            .find_by_user_name(&user_name)
            .await?
            .ok_or_else(|| JournalError::user_not_found(user_name.as_str()))
    }

    async fn stored_entry(&self, id: EntryId) -> Result<JournalEntry, JournalError> {
        self.journals
            .find_entry(id)
            .await?
            .ok_or(JournalError::entry_not_found(id))
    }

    async fn list(&self, user_name: &str) -> Result<Vec<EntrySummary>, JournalError> {
        let owner = self.owner(user_name).await?;
        let journal = self.journals.load_journal(owner.journal_id()).await?;
        Ok(journal.summaries())
    }

    async fn add(&self, user_name: &str, content: EntryContent) -> Result<JournalEntry, JournalError> {
        let owner = self.owner(user_name).await?;
        let mut journal = self.journals.load_journal(owner.journal_id()).await?;
        let today = self.today();
        if journal.has_entry_on(today) {
            debug!(user_name, %today, "entry for today already present");
            return Err(JournalError::EntryAlreadyExists { date: today });
        }

        let id = self.journals.next_entry_id().await?;
        let entry = journal
            .add_entry(id, NewJournalEntry { date: today, content }, today)?
            .clone();
        self.journals.insert_entry(&entry).await?;
        info!(user_name, entry_id = %entry.id(), date = %entry.date(), "journal entry added");
        Ok(entry)
    }

    async fn update(&self, id: EntryId, content: EntryContent) -> Result<JournalEntry, JournalError> {
        let updated = self.stored_entry(id).await?.with_content(content);
        if !self.journals.update_entry(&updated).await? {
            return Err(JournalError::entry_not_found(id));
        }
        info!(entry_id = %id, "journal entry updated");
        Ok(updated)
    }

    async fn delete(&self, id: EntryId) -> Result<(), JournalError> {
        if !self.journals.delete_entry(id).await? {
            return Err(JournalError::entry_not_found(id));
        }
        info!(entry_id = %id, "journal entry deleted");
        Ok(())
    }
}

#[async_trait]
impl<U, J> JournalEntries for JournalService<U, J>
where
    U: UserRepository,
    J: JournalRepository,
{
    async fn list_entries(&self, user_name: &str) -> Result<Vec<EntrySummary>, Error> {
        Ok(self.list(user_name).await?)
    }

    async fn add_entry(&self, user_name: &str, content: EntryContent) -> Result<JournalEntry, Error> {
        Ok(self.add(user_name, content).await?)
    }

    async fn get_entry(&self, id: EntryId) -> Result<JournalEntry, Error> {
        Ok(self.stored_entry(id).await?)
    }

    async fn update_entry(&self, id: EntryId, content: EntryContent) -> Result<JournalEntry, Error> {
        Ok(self.update(id, content).await?)
    }

    async fn delete_entry(&self, id: EntryId) -> Result<(), Error> {
        Ok(self.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockJournalRepository, MockUserRepository};
    use crate::domain::{
        ErrorCode, GratitudeNotes, Journal, JournalId, PersonName, UserId, WellBeing,
    };
    use chrono::{DateTime, Local, TimeZone, Utc};
    use rstest::{fixture, rstest};

    struct FixtureClock {
        utc_now: DateTime<Utc>,
    }

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            self.utc_now.with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.utc_now
        }
    }

    #[fixture]
    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixtureClock {
            utc_now: Utc
                .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
                .single()
                .expect("valid fixture timestamp"),
        })
    }

    fn owner() -> User {
        User::new(
            UserId::new(1),
            JournalId::new(10),
            UserName::new("alice1").expect("valid user name"),
            PersonName::new("Alice").expect("valid first name"),
            PersonName::new("Smith").expect("valid last name"),
        )
    }

    fn content(level: WellBeing) -> EntryContent {
        EntryContent {
            well_being: level,
            notes: GratitudeNotes {
                grateful_for_today: "coffee".to_owned(),
                grateful_for_today_description: "tasty".to_owned(),
                grateful_for_in_life: "family".to_owned(),
                grateful_for_in_life_description: "supportive".to_owned(),
            },
        }
    }

    fn users_with_owner() -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_user_name()
            .returning(|_| Ok(Some(owner())));
        users
    }

    fn make_service(
        users: MockUserRepository,
        journals: MockJournalRepository,
        clock: Arc<dyn Clock>,
    ) -> JournalService<MockUserRepository, MockJournalRepository> {
        JournalService::new(Arc::new(users), Arc::new(journals), clock)
    }

    #[rstest]
    #[tokio::test]
    async fn add_stamps_today_and_binds_journal(clock: Arc<dyn Clock>) {
        let today = clock.local().date_naive();
        let mut journals = MockJournalRepository::new();
        journals
            .expect_load_journal()
            .return_once(|id| Ok(Journal::new(id)));
        journals
            .expect_next_entry_id()
            .return_once(|| Ok(EntryId::new(77)));
        journals
            .expect_insert_entry()
            .withf(move |entry| entry.date() == today && entry.journal_id() == JournalId::new(10))
            .times(1)
            .return_once(|_| Ok(()));

        let entry = make_service(users_with_owner(), journals, clock)
            .add_entry("alice1", content(WellBeing::Good))
            .await
            .expect("entry added");

        assert_eq!(entry.id(), EntryId::new(77));
        assert_eq!(entry.date(), today);
        assert_eq!(entry.content().well_being, WellBeing::Good);
    }

    #[rstest]
    #[tokio::test]
    async fn add_rejects_second_entry_for_today(clock: Arc<dyn Clock>) {
        let today = clock.local().date_naive();
        let mut journals = MockJournalRepository::new();
        journals.expect_load_journal().return_once(move |id| {
            Ok(Journal::from_entries(
                id,
                [JournalEntry::new(EntryId::new(1), id, today, content(WellBeing::Bad))],
            ))
        });
        journals.expect_next_entry_id().never();
        journals.expect_insert_entry().never();

        let error = make_service(users_with_owner(), journals, clock)
            .add_entry("alice1", content(WellBeing::Good))
            .await
            .expect_err("duplicate rejected");

        assert_eq!(error.code(), ErrorCode::Conflict);
        assert_eq!(
            error.message(),
            format!("An entry already exists for {today}")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn add_for_unknown_user_is_not_found(clock: Arc<dyn Clock>) {
        let mut users = MockUserRepository::new();
        users.expect_find_by_user_name().return_once(|_| Ok(None));
        let mut journals = MockJournalRepository::new();
        journals.expect_load_journal().never();

        let error = make_service(users, journals, clock)
            .add_entry("ghost1", content(WellBeing::Good))
            .await
            .expect_err("unknown user");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn list_rejects_invalid_user_name(clock: Arc<dyn Clock>) {
        let error = make_service(MockUserRepository::new(), MockJournalRepository::new(), clock)
            .list_entries("x")
            .await
            .expect_err("invalid name");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_newest_first(clock: Arc<dyn Clock>) {
        let today = clock.local().date_naive();
        let yesterday = today.pred_opt().expect("valid date");
        let mut journals = MockJournalRepository::new();
        journals.expect_load_journal().return_once(move |id| {
            Ok(Journal::from_entries(
                id,
                [
                    JournalEntry::new(EntryId::new(1), id, yesterday, content(WellBeing::Bad)),
                    JournalEntry::new(EntryId::new(2), id, today, content(WellBeing::Good)),
                ],
            ))
        });

        let summaries = make_service(users_with_owner(), journals, clock)
            .list_entries("alice1")
            .await
            .expect("listing");

        let ids: Vec<_> = summaries.iter().map(|s| s.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_keeps_date_and_owner(clock: Arc<dyn Clock>) {
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).expect("valid date");
        let mut journals = MockJournalRepository::new();
        journals.expect_find_entry().return_once(move |id| {
            Ok(Some(JournalEntry::new(
                id,
                JournalId::new(10),
                date,
                content(WellBeing::Bad),
            )))
        });
        journals
            .expect_update_entry()
            .withf(move |entry| entry.date() == date && entry.content().well_being == WellBeing::Fantastic)
            .return_once(|_| Ok(true));

        let entry = make_service(MockUserRepository::new(), journals, clock)
            .update_entry(EntryId::new(5), content(WellBeing::Fantastic))
            .await
            .expect("entry updated");
        assert_eq!(entry.date(), date);
        assert_eq!(entry.journal_id(), JournalId::new(10));
    }

    #[rstest]
    #[case::get("get")]
    #[case::update("update")]
    #[case::delete("delete")]
    #[tokio::test]
    async fn missing_entries_are_not_found(clock: Arc<dyn Clock>, #[case] operation: &str) {
        let mut journals = MockJournalRepository::new();
        journals.expect_find_entry().returning(|_| Ok(None));
        journals.expect_delete_entry().returning(|_| Ok(false));
        let service = make_service(MockUserRepository::new(), journals, clock);
        let id = EntryId::new(404);

        let error = match operation {
            "get" => service.get_entry(id).await.map(|_| ()),
            "update" => service
                .update_entry(id, content(WellBeing::Neutral))
                .await
                .map(|_| ()),
            _ => service.delete_entry(id).await,
        }
        .expect_err("missing entry");

        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "No entry exists for journalEntryId 404");
    }
}
