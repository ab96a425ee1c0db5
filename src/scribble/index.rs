//! # Display Indexes
//!
//! Stored notes are identified by UUIDs, which nobody wants to type. UI clients refer
//! to notes by their position in the current collections instead:
//!
//! | Notation | Meaning                         |
//! |----------|---------------------------------|
//! | `3`      | third active note (newest = 1)  |
//! | `d2`     | second trashed note             |
//! | `1-3`    | active notes 1, 2 and 3         |
//! | `d1-d4`  | trashed notes 1 through 4       |
//!
//! Indexes are only meaningful against the collections they were computed from. The
//! command layer resolves them to UUIDs up front, then the store works purely on ids,
//! so a batch like `delete 1 2` does not shift under its own feet.

use crate::model::Note;
use std::str::FromStr;

/// A user-facing index for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Active(usize),
    Trashed(usize),
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Active(i) => write!(f, "{}", i),
            DisplayIndex::Trashed(i) => write!(f, "d{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = s.strip_prefix('d') {
            if let Ok(n) = rest.parse() {
                return Ok(DisplayIndex::Trashed(n));
            }
        }
        if let Ok(n) = s.parse() {
            return Ok(DisplayIndex::Active(n));
        }
        Err(format!("Invalid index format: {}", s))
    }
}

/// A user input to select notes: one index, an inclusive range, or a search term.
///
/// Ranges stay unexpanded until they are resolved against the collections, so their
/// size is bounded by what actually exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NoteSelector {
    Index(DisplayIndex),
    Range(DisplayIndex, DisplayIndex),
    Title(String),
}

impl NoteSelector {
    /// True when `index` falls inside this selector's index or range.
    pub fn covers(&self, index: &DisplayIndex) -> bool {
        match (self, index) {
            (NoteSelector::Index(own), _) => own == index,
            (
                NoteSelector::Range(DisplayIndex::Active(s), DisplayIndex::Active(e)),
                DisplayIndex::Active(i),
            )
            | (
                NoteSelector::Range(DisplayIndex::Trashed(s), DisplayIndex::Trashed(e)),
                DisplayIndex::Trashed(i),
            ) => (*s..=*e).contains(i),
            _ => false,
        }
    }
}

impl std::fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteSelector::Index(idx) => write!(f, "{}", idx),
            NoteSelector::Range(start, end) => write!(f, "{}-{}", start, end),
            NoteSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

/// Pairs every note with its display index: active notes first, then trash, each in
/// collection order.
pub fn index_notes(active: &[Note], trash: &[Note]) -> Vec<DisplayNote> {
    let active = active.iter().enumerate().map(|(i, note)| DisplayNote {
        note: note.clone(),
        index: DisplayIndex::Active(i + 1),
    });
    let trash = trash.iter().enumerate().map(|(i, note)| DisplayNote {
        note: note.clone(),
        index: DisplayIndex::Trashed(i + 1),
    });
    active.chain(trash).collect()
}

/// Parses a single input string that may be either a single index or a range.
///
/// Range rules:
/// - Both endpoints must be the same kind (`3-5` or `d1-d3`)
/// - Start must be <= end
/// - Existence is checked later, during resolution
pub fn parse_index_or_range(s: &str) -> Result<NoteSelector, String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;
            return check_range(start, end);
        }
    }

    DisplayIndex::from_str(s).map(NoteSelector::Index)
}

fn check_range(start: DisplayIndex, end: DisplayIndex) -> Result<NoteSelector, String> {
    match (start, end) {
        (DisplayIndex::Active(s), DisplayIndex::Active(e))
        | (DisplayIndex::Trashed(s), DisplayIndex::Trashed(e))
            if s <= e =>
        {
            Ok(NoteSelector::Range(start, end))
        }
        (DisplayIndex::Active(_), DisplayIndex::Active(_))
        | (DisplayIndex::Trashed(_), DisplayIndex::Trashed(_)) => Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        )),
        _ => Err(format!(
            "Invalid range: cannot mix active and trashed indexes ({}-{})",
            start, end
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_indexes() {
        assert_eq!("3".parse(), Ok(DisplayIndex::Active(3)));
        assert_eq!("d2".parse(), Ok(DisplayIndex::Trashed(2)));
        assert!("x1".parse::<DisplayIndex>().is_err());
        assert!("d".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for idx in [DisplayIndex::Active(7), DisplayIndex::Trashed(4)] {
            assert_eq!(idx.to_string().parse(), Ok(idx));
        }
    }

    #[test]
    fn parses_ranges_without_expanding() {
        assert_eq!(
            parse_index_or_range("2-4").unwrap(),
            NoteSelector::Range(DisplayIndex::Active(2), DisplayIndex::Active(4))
        );
        assert_eq!(
            parse_index_or_range("d1-d2").unwrap(),
            NoteSelector::Range(DisplayIndex::Trashed(1), DisplayIndex::Trashed(2))
        );
        assert_eq!(
            parse_index_or_range("3").unwrap(),
            NoteSelector::Index(DisplayIndex::Active(3))
        );
    }

    #[test]
    fn huge_ranges_parse_in_constant_space() {
        let range = parse_index_or_range("1-18446744073709551615").unwrap();
        assert!(range.covers(&DisplayIndex::Active(1)));
        assert!(range.covers(&DisplayIndex::Active(usize::MAX)));
        assert!(!range.covers(&DisplayIndex::Trashed(1)));
    }

    #[test]
    fn range_covers_only_its_kind_and_bounds() {
        let range = NoteSelector::Range(DisplayIndex::Trashed(2), DisplayIndex::Trashed(3));
        assert!(!range.covers(&DisplayIndex::Trashed(1)));
        assert!(range.covers(&DisplayIndex::Trashed(2)));
        assert!(range.covers(&DisplayIndex::Trashed(3)));
        assert!(!range.covers(&DisplayIndex::Active(2)));
        assert!(!NoteSelector::Title("x".into()).covers(&DisplayIndex::Active(1)));
    }

    #[test]
    fn rejects_bad_ranges() {
        let err = parse_index_or_range("4-2").unwrap_err();
        assert!(err.contains("Invalid range"));
        let err = parse_index_or_range("1-d3").unwrap_err();
        assert!(err.contains("cannot mix"));
    }

    #[test]
    fn non_index_text_is_not_a_range() {
        assert!(parse_index_or_range("shopping-list").is_err());
        assert!(parse_index_or_range("-3").is_err());
    }

    #[test]
    fn indexes_active_then_trash() {
        let a = Note::new("A".into(), "".into());
        let b = Note::new("B".into(), "".into());
        let c = Note::new("C".into(), "".into());
        let indexed = index_notes(&[a.clone(), b], &[c.clone()]);

        assert_eq!(indexed.len(), 3);
        assert_eq!(indexed[0].index, DisplayIndex::Active(1));
        assert_eq!(indexed[0].note, a);
        assert_eq!(indexed[2].index, DisplayIndex::Trashed(1));
        assert_eq!(indexed[2].note, c);
    }
}
