//! Journal entry data model.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

macro_rules! storage_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Raw identifier value.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

storage_id! {
    /// Storage-assigned journal identifier.
    JournalId
}

storage_id! {
    /// Storage-assigned journal entry identifier.
    EntryId
}

/// Self-reported wellbeing, ordered from worst to best.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WellBeing {
    /// Lowest level.
    Awful,
    /// Bad day.
    Bad,
    /// Slightly below neutral.
    MildlyBad,
    /// Neither good nor bad.
    Neutral,
    /// Slightly above neutral.
    MildlyGood,
    /// Good day.
    Good,
    /// Highest level.
    Fantastic,
}

impl WellBeing {
    /// Every level in ascending order.
    pub const ALL: [Self; 7] = [
        Self::Awful,
        Self::Bad,
        Self::MildlyBad,
        Self::Neutral,
        Self::MildlyGood,
        Self::Good,
        Self::Fantastic,
    ];

    /// Stable textual form, shared by JSON and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Awful => "AWFUL",
            Self::Bad => "BAD",
            Self::MildlyBad => "MILDLY_BAD",
            Self::Neutral => "NEUTRAL",
            Self::MildlyGood => "MILDLY_GOOD",
            Self::Good => "GOOD",
            Self::Fantastic => "FANTASTIC",
        }
    }
}

impl fmt::Display for WellBeing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name a [`WellBeing`] level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown wellbeing level: {value}")]
pub struct UnknownWellBeing {
    value: String,
}

impl FromStr for WellBeing {
    type Err = UnknownWellBeing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownWellBeing {
                value: s.to_owned(),
            })
    }
}

/// The four free-text gratitude fields of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GratitudeNotes {
    /// What the author is grateful for today.
    pub grateful_for_today: String,
    /// Elaboration on `grateful_for_today`.
    pub grateful_for_today_description: String,
    /// What the author is grateful for in life.
    pub grateful_for_in_life: String,
    /// Elaboration on `grateful_for_in_life`.
    pub grateful_for_in_life_description: String,
}

/// Mutable content of an entry: the rating plus the notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContent {
    /// Wellbeing rating.
    pub well_being: WellBeing,
    /// Gratitude notes.
    pub notes: GratitudeNotes,
}

/// An entry awaiting admission into a journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJournalEntry {
    /// Calendar date the entry is for.
    pub date: NaiveDate,
    /// Entry content.
    pub content: EntryContent,
}

/// A persisted journal entry.
///
/// ## Invariants
/// - `journal_id` is set once at admission and never reassigned.
/// - `date` is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    id: EntryId,
    journal_id: JournalId,
    date: NaiveDate,
    content: EntryContent,
}

impl JournalEntry {
    /// Assemble an entry from persisted parts.
    #[must_use]
    pub const fn new(
        id: EntryId,
        journal_id: JournalId,
        date: NaiveDate,
        content: EntryContent,
    ) -> Self {
        Self {
            id,
            journal_id,
            date,
            content,
        }
    }

    /// Entry identifier.
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Owning journal.
    #[must_use]
    pub const fn journal_id(&self) -> JournalId {
        self.journal_id
    }

    /// Calendar date of the entry.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Rating and notes.
    #[must_use]
    pub const fn content(&self) -> &EntryContent {
        &self.content
    }

    /// Replace the rating and notes; identity, owner and date are kept.
    #[must_use]
    pub fn with_content(self, content: EntryContent) -> Self {
        Self { content, ..self }
    }

    /// Identifier and date pair for listings.
    #[must_use]
    pub const fn summary(&self) -> EntrySummary {
        EntrySummary {
            id: self.id,
            date: self.date,
        }
    }
}

/// `{id, date}` pair describing an entry in a journal listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrySummary {
    /// Entry identifier.
    pub id: EntryId,
    /// Entry date.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn levels_are_ordered_worst_to_best() {
        let mut shuffled = [
            WellBeing::Good,
            WellBeing::Awful,
            WellBeing::Fantastic,
            WellBeing::Neutral,
            WellBeing::MildlyBad,
            WellBeing::Bad,
            WellBeing::MildlyGood,
        ];
        shuffled.sort();
        assert_eq!(shuffled, WellBeing::ALL);
    }

    #[rstest]
    #[case(WellBeing::MildlyBad, "\"MILDLY_BAD\"")]
    #[case(WellBeing::Fantastic, "\"FANTASTIC\"")]
    fn serde_uses_screaming_snake_case(#[case] level: WellBeing, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&level).expect("serialises"), json);
        assert_eq!(level.as_str(), json.trim_matches('"'));
    }

    #[rstest]
    fn from_str_accepts_storage_form() {
        for level in WellBeing::ALL {
            assert_eq!(level.as_str().parse::<WellBeing>(), Ok(level));
        }
        assert!("good".parse::<WellBeing>().is_err());
    }

    #[rstest]
    fn with_content_preserves_identity() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        let entry = JournalEntry::new(
            EntryId::new(9),
            JournalId::new(2),
            date,
            EntryContent {
                well_being: WellBeing::Bad,
                notes: GratitudeNotes::default(),
            },
        );

        let updated = entry.with_content(EntryContent {
            well_being: WellBeing::Good,
            notes: GratitudeNotes {
                grateful_for_today: "coffee".to_owned(),
                ..GratitudeNotes::default()
            },
        });

        assert_eq!(updated.id(), EntryId::new(9));
        assert_eq!(updated.journal_id(), JournalId::new(2));
        assert_eq!(updated.date(), date);
        assert_eq!(updated.content().well_being, WellBeing::Good);
    }
}
