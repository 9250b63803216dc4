use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let contacts = store.load()?;
    Ok(CmdResult::default()
        .with_listed_contacts(contacts)
        .with_title("List of contacts"))
}
