use std::{fmt::Display, sync::Arc};

use crate::shared::{Searchable, geo::Coordinate};

/// One of the three rail corridors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    #[default]
    Western,
    Central,
    Harbour,
}

impl Line {
    pub const ALL: [Line; 3] = [Line::Western, Line::Central, Line::Harbour];
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Western => f.write_str("Western"),
            Line::Central => f.write_str("Central"),
            Line::Harbour => f.write_str("Harbour"),
        }
    }
}

/// Immutable station entry in the geography catalog.
#[derive(Debug, Default, Clone)]
pub struct Station {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    pub coordinate: Coordinate,
}

impl Searchable for Station {
    fn id(&self) -> &str {
        &self.id
    }

    fn haystack(&self) -> &str {
        &self.normalized_name
    }
}
