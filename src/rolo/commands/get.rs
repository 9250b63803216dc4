use crate::commands::{helpers, CmdResult};
use crate::error::{Result, RoloError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, raw_id: &str) -> Result<CmdResult> {
    let id = helpers::parse_id(raw_id)?;
    let contacts = store.load()?;
    let contact = helpers::find_by_id(&contacts, id)
        .cloned()
        .ok_or(RoloError::NotFound(id))?;

    Ok(CmdResult::default()
        .with_listed_contacts(vec![contact])
        .with_title(format!("Contact with id={}", id)))
}
