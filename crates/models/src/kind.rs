use std::fmt;

/// The four persisted collections. Also keys the id sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Owner,
    Pet,
    Appointment,
    Invoice,
}

impl EntityKind {
    /// File stem of the backing collection.
    pub const fn collection(self) -> &'static str {
        match self {
            EntityKind::Owner => "duenos",
            EntityKind::Pet => "mascotas",
            EntityKind::Appointment => "citas",
            EntityKind::Invoice => "facturas",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}
