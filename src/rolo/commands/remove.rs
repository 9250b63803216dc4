use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::model::Contact;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, raw_id: &str) -> Result<CmdResult> {
    let id = helpers::parse_id(raw_id)?;
    let contacts = store.load()?;
    if helpers::find_by_id(&contacts, id).is_none() {
        return Err(RoloError::NotFound(id));
    }

    // Filtering preserves the relative order of the survivors.
    let remaining: Vec<Contact> = contacts
        .into_iter()
        .filter(|contact| contact.id != id)
        .collect();
    store.save(&remaining)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact with id={} was successfully removed.",
        id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        InMemoryStore::with_contacts(vec![
            Contact::new(1, "Ann".into(), "a@x.io".into(), "111".into()),
            Contact::new(2, "Bob".into(), "b@x.io".into(), "222".into()),
            Contact::new(3, "Cy".into(), "c@x.io".into(), "333".into()),
        ])
    }

    #[test]
    fn removes_matching_contact_and_preserves_order() {
        let mut store = seeded_store();
        run(&mut store, "2").unwrap();

        let ids: Vec<u32> = store.load().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn unknown_id_fails_and_leaves_store_untouched() {
        let mut store = seeded_store();
        assert!(matches!(
            run(&mut store, "99"),
            Err(RoloError::NotFound(99))
        ));
        assert_eq!(store.load().unwrap().len(), 3);
    }

    #[test]
    fn non_digit_id_is_rejected_before_lookup() {
        let mut store = seeded_store();
        assert!(matches!(
            run(&mut store, "abc"),
            Err(RoloError::InvalidId(_))
        ));
    }

    #[test]
    fn reports_the_removed_id() {
        let mut store = seeded_store();
        let result = run(&mut store, "1").unwrap();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("id=1"));
    }
}
