//! Diesel table definitions for the journal schema.
//!
//! Kept in step with `backend/migrations` by hand; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Journal owners. `user_name` carries a unique index.
    users (id) {
        id -> Int8,
        user_name -> Text,
        first_name -> Text,
        last_name -> Text,
    }
}

diesel::table! {
    /// One journal per user, created alongside the user row.
    journals (id) {
        id -> Int8,
        user_id -> Int8,
    }
}

diesel::table! {
    /// Dated gratitude entries.
    journal_entries (id) {
        id -> Int8,
        journal_id -> Int8,
        entry_date -> Date,
        well_being -> Varchar,
        grateful_for_today -> Text,
        grateful_for_today_description -> Text,
        grateful_for_in_life -> Text,
        grateful_for_in_life_description -> Text,
    }
}

diesel::joinable!(journals -> users (user_id));
diesel::joinable!(journal_entries -> journals (journal_id));

diesel::allow_tables_to_appear_in_same_query!(users, journals, journal_entries);
