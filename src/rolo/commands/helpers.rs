use crate::error::{Result, RoloError};
use crate::model::Contact;

/// Parse an id argument. Only strings of decimal digits are accepted;
/// anything else (signs, decimals, letters, empty) is `InvalidId`.
pub fn parse_id(raw: &str) -> Result<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RoloError::InvalidId(raw.to_string()));
    }
    raw.parse().map_err(|_| RoloError::InvalidId(raw.to_string()))
}

/// Lowest unused positive id. Relies on `contacts` being sorted ascending
/// by id, an invariant the store maintains on every add.
pub fn next_empty_id(contacts: &[Contact]) -> u32 {
    let mut candidate = 1;
    for contact in contacts {
        if candidate < contact.id {
            return candidate;
        }
        candidate = contact.id + 1;
    }
    candidate
}

/// Canonical form of a name for duplicate comparison: surrounding
/// whitespace trimmed, internal runs collapsed to one space, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn find_by_id(contacts: &[Contact], id: u32) -> Option<&Contact> {
    contacts.iter().find(|contact| contact.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: u32, name: &str) -> Contact {
        Contact::new(id, name.into(), format!("{}@x.io", id), "000".into())
    }

    #[test]
    fn next_id_fills_first_gap() {
        let contacts = vec![contact(1, "A"), contact(3, "B"), contact(4, "C")];
        assert_eq!(next_empty_id(&contacts), 2);
    }

    #[test]
    fn next_id_appends_after_max() {
        let contacts = vec![contact(1, "A"), contact(2, "B"), contact(3, "C")];
        assert_eq!(next_empty_id(&contacts), 4);
    }

    #[test]
    fn next_id_on_empty_store_is_one() {
        assert_eq!(next_empty_id(&[]), 1);
    }

    #[test]
    fn parse_id_accepts_digit_strings() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id("042").unwrap(), 42);
    }

    #[test]
    fn parse_id_rejects_everything_else() {
        for raw in ["abc", "1.5", "-1", "+2", "", " 3", "1e3"] {
            assert!(
                matches!(parse_id(raw), Err(RoloError::InvalidId(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn normalization_trims_collapses_and_lowercases() {
        assert_eq!(normalize_name(" Jane  Doe "), "jane doe");
        assert_eq!(normalize_name("JANE\tDOE"), "jane doe");
        assert_eq!(normalize_name("jane doe"), "jane doe");
    }

    #[test]
    fn find_by_id_scans_linearly() {
        let contacts = vec![contact(2, "B"), contact(5, "E")];
        assert_eq!(find_by_id(&contacts, 5).unwrap().name, "E");
        assert!(find_by_id(&contacts, 3).is_none());
    }
}
