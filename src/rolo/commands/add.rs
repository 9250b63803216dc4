use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::model::Contact;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    name: String,
    email: String,
    phone: String,
) -> Result<CmdResult> {
    let normalized = helpers::normalize_name(&name);
    if normalized.is_empty() {
        return Err(RoloError::EmptyName);
    }

    let mut contacts = store.load()?;
    // Both sides are normalized, so "  Jane  Doe" collides with "jane doe"
    // regardless of which spelling was stored first.
    if contacts
        .iter()
        .any(|contact| helpers::normalize_name(&contact.name) == normalized)
    {
        return Err(RoloError::DuplicateName(name));
    }

    let id = helpers::next_empty_id(&contacts);
    contacts.push(Contact::new(id, name, email, phone));
    contacts.sort_by_key(|contact| contact.id);
    store.save(&contacts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "A new contact with id={} was successfully added.",
        id
    )));
    Ok(result)
}
