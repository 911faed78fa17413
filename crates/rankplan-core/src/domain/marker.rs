//! Timeline marker domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, MarkerId};
use crate::codec::tagged_date;

/// A standalone dated annotation on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: MarkerId,
    #[serde(with = "tagged_date")]
    pub date: DateTime<Utc>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

/// Data for creating a new marker.
#[derive(Debug, Clone)]
pub struct NewMarker {
    pub date: DateTime<Utc>,
    pub label: String,
    pub class_name: Option<String>,
}

/// Data for updating an existing marker.
#[derive(Debug, Clone, Default)]
pub struct MarkerUpdate {
    pub date: Option<DateTime<Utc>>,
    pub label: Option<String>,
    /// Use `Some(Some(class))` to set, `Some(None)` to clear, `None` to leave unchanged.
    pub class_name: Option<Option<String>>,
}

impl Entity for Marker {
    type Id = MarkerId;
    type New = NewMarker;
    type Update = MarkerUpdate;

    const COLLECTION: &'static str = "markers";

    fn id(&self) -> &MarkerId {
        &self.id
    }

    fn create(id: MarkerId, new: NewMarker) -> Self {
        Self {
            id,
            date: new.date,
            label: new.label,
            class_name: new.class_name,
        }
    }

    fn apply(&mut self, update: MarkerUpdate) {
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(label) = update.label {
            self.label = label;
        }
        if let Some(class_name) = update.class_name {
            self.class_name = class_name;
        }
    }
}
