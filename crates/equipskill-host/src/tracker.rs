use equipskill_types::DataTable;

/// Tracks which tables the unlock index depends on have loaded this cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataLoadTracker {
    skills: bool,
    system: bool,
}

impl DataLoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a load notification
    ///
    /// Returns `true` only for the notification that completes the
    /// skills/system pair. Repeats and unrelated tables return `false`.
    pub fn observe(&mut self, table: &DataTable) -> bool {
        let seen = match table {
            DataTable::Skills => &mut self.skills,
            DataTable::System => &mut self.system,
            DataTable::Other(_) => return false,
        };
        if *seen {
            return false;
        }
        *seen = true;
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.skills && self.system
    }

    /// Undo an observation whose table turned out to be unusable
    pub fn retract(&mut self, table: &DataTable) {
        match table {
            DataTable::Skills => self.skills = false,
            DataTable::System => self.system = false,
            DataTable::Other(_) => {}
        }
    }

    /// Forget everything ahead of a full reload
    pub fn begin_cycle(&mut self) {
        *self = Self::default();
    }
}
