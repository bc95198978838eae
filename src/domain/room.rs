//! Room inventory entries, used for occupancy denominators and labels.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub number: String,
}

impl Room {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            number: number.into(),
        }
    }
}

impl Identifiable for Room {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Room {
    fn name(&self) -> &str {
        &self.number
    }
}

impl Displayable for Room {
    fn display_label(&self) -> String {
        format!("Room {}", self.number)
    }
}
