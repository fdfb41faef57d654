//! Ordered record of every location event in a playthrough.
//!
//! Records are stored in a flat vector; "next" and "previous" are simply the
//! neighbouring indices. Each record carries the command that led *out* of it,
//! so the most recent record never has one.

use super::LocationId;

/// One visited-location entry in the history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventRecord {
    pub location: LocationId,
    pub description: String,
    /// Command that produced the following record. `None` on the last record.
    pub next_command: Option<String>,
}

impl EventRecord {
    pub fn new(location: LocationId, description: impl Into<String>) -> Self {
        Self {
            location,
            description: description.into(),
            next_command: None,
        }
    }
}

/// Flat export form of a record: `(location, description, outgoing command)`.
pub type EventTriple = (LocationId, String, Option<String>);

/// Append-only sequence of [`EventRecord`]s.
///
/// Invariant: when non-empty, exactly `len() - 1` records carry a
/// `next_command`, and the one that doesn't is the last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventHistory {
    records: Vec<EventRecord>,
}

impl EventHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the history to a single opening record.
    pub fn start(&mut self, location: LocationId, description: impl Into<String>) {
        self.records.clear();
        self.records.push(EventRecord::new(location, description));
    }

    /// Appends a record reached from the previous one via `command`.
    ///
    /// The previous last record receives `command` as its outgoing command.
    /// On an empty history this behaves like [`Self::start`] and `command` is
    /// dropped.
    pub fn append(
        &mut self,
        location: LocationId,
        description: impl Into<String>,
        command: impl Into<String>,
    ) {
        if let Some(last) = self.records.last_mut() {
            last.next_command = Some(command.into());
        }
        self.records.push(EventRecord::new(location, description));
    }

    /// Removes the most recent record, clearing the new last record's outgoing
    /// command. No-op on an empty history.
    pub fn remove_last(&mut self) -> Option<EventRecord> {
        let removed = self.records.pop()?;
        if let Some(last) = self.records.last_mut() {
            last.next_command = None;
        }
        Some(removed)
    }

    pub fn export_all(&self) -> Vec<EventTriple> {
        self.records
            .iter()
            .map(|record| {
                (
                    record.location,
                    record.description.clone(),
                    record.next_command.clone(),
                )
            })
            .collect()
    }

    /// Rebuilds the history from exported triples.
    ///
    /// The final record's outgoing command is dropped whatever was stored;
    /// any earlier record without one gets an empty command.
    pub fn replace_all(&mut self, triples: impl IntoIterator<Item = EventTriple>) {
        self.records = triples
            .into_iter()
            .map(|(location, description, next_command)| EventRecord {
                location,
                description,
                next_command: Some(next_command.unwrap_or_default()),
            })
            .collect();
        if let Some(last) = self.records.last_mut() {
            last.next_command = None;
        }
    }

    pub fn id_sequence(&self) -> Vec<LocationId> {
        self.records.iter().map(|record| record.location).collect()
    }

    /// Forward traversal; call `.rev()` for backward.
    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&EventRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&EventRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checks the single-open-tail invariant.
    pub fn is_consistent(&self) -> bool {
        let linked = self
            .records
            .iter()
            .filter(|record| record.next_command.is_some())
            .count();
        match self.records.last() {
            None => linked == 0,
            Some(last) => last.next_command.is_none() && linked == self.records.len() - 1,
        }
    }
}

impl<'a> IntoIterator for &'a EventHistory {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EventHistory {
        let mut history = EventHistory::new();
        history.start(LocationId(1), "one");
        history.append(LocationId(2), "two", "go east");
        history.append(LocationId(3), "three", "go north");
        history
    }

    #[test]
    fn id_sequence_follows_appends() {
        let history = sample();

        assert_eq!(
            history.id_sequence(),
            vec![LocationId(1), LocationId(2), LocationId(3)]
        );
        let commands: Vec<_> = history.iter().map(|r| r.next_command.as_deref()).collect();
        assert_eq!(commands, vec![Some("go east"), Some("go north"), None]);
        assert!(history.is_consistent());
    }

    #[test]
    fn first_append_ignores_incoming_command() {
        let mut history = EventHistory::new();
        history.append(LocationId(7), "start", "teleport");

        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().next_command, None);
        assert!(history.is_consistent());
    }

    #[test]
    fn every_append_links_the_previous_tail() {
        let mut history = EventHistory::new();
        history.start(LocationId(1), "one");
        history.append(LocationId(2), "two", "");
        history.append(LocationId(2), "two", "take mug");

        assert_eq!(history.len(), 3);
        assert!(history.is_consistent());
        assert_eq!(history.first().unwrap().next_command.as_deref(), Some(""));
    }

    #[test]
    fn replace_all_closes_gaps_in_the_chain() {
        let mut history = EventHistory::new();
        history.replace_all(vec![
            (LocationId(1), "one".to_string(), None),
            (LocationId(2), "two".to_string(), None),
        ]);

        assert_eq!(history.len(), 2);
        assert!(history.is_consistent());
    }

    #[test]
    fn start_discards_previous_records() {
        let mut history = sample();
        history.start(LocationId(9), "fresh");

        assert_eq!(history.id_sequence(), vec![LocationId(9)]);
        assert!(history.is_consistent());
    }

    #[test]
    fn backward_traversal_visits_in_reverse() {
        let history = sample();
        let backwards: Vec<_> = history.iter().rev().map(|r| r.location.0).collect();
        assert_eq!(backwards, vec![3, 2, 1]);
    }

    #[test]
    fn replace_all_drops_dangling_tail_command() {
        let mut history = EventHistory::new();
        history.replace_all(vec![
            (LocationId(1), "one".to_string(), Some("go east".to_string())),
            (LocationId(2), "two".to_string(), Some("stale".to_string())),
        ]);

        assert_eq!(history.last().unwrap().next_command, None);
        assert_eq!(
            history.first().unwrap().next_command.as_deref(),
            Some("go east")
        );
        assert!(history.is_consistent());
    }

    #[test]
    fn export_then_replace_reproduces_history() {
        let history = sample();
        let mut rebuilt = EventHistory::new();
        rebuilt.replace_all(history.export_all());
        assert_eq!(rebuilt, history);
    }

    #[test]
    fn remove_last_reopens_previous_tail() {
        let mut history = sample();

        let removed = history.remove_last().expect("record");
        assert_eq!(removed.location, LocationId(3));
        assert_eq!(history.last().unwrap().next_command, None);
        assert!(history.is_consistent());

        history.remove_last();
        history.remove_last();
        assert!(history.remove_last().is_none());
        assert!(history.is_empty());
        assert!(history.is_consistent());
    }
}
