//! [`RemoteEntity`] implementation for the Week model.

use crate::model::{Week, WeekDraft, WeekId};
use resource_framework::RemoteEntity;

impl RemoteEntity for Week {
    type Id = WeekId;
    type Create = WeekDraft;
    type Update = WeekDraft;
    const LABEL: &'static str = "Week";
    const PLURAL: &'static str = "weeks";

    fn collection_path() -> String {
        "/weeks".to_string()
    }

    fn has_id(&self, id: &WeekId) -> bool {
        self.id == *id
    }

    // The API lists weeks on a separate route from the one it creates them on.
    fn list_path() -> String {
        "/weeks/all".to_string()
    }
}
