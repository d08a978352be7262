use rand::Rng;
use crate::quiz_engine::{
    error::BankError,
    models::{EntryId, QuestionRecord},
};

/// The pool of questions not yet answered correctly.
///
/// Entries leave the bank only through [`QuestionBank::remove`]; the bank is
/// never refilled behind the caller's back, so `size() == 0` means exhausted.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    entries: Vec<(EntryId, QuestionRecord)>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the bank contents with `records`.
    ///
    /// Every record is validated first; on error the current contents are
    /// left as they were.
    pub fn load(&mut self, records: Vec<QuestionRecord>) -> Result<(), BankError> {
        if records.is_empty() {
            return Err(BankError::EmptyInput);
        }
        for (position, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|defect| BankError::InvalidRecord { position, defect })?;
        }

        // Every entry is replaced, so numbering restarts with the new contents.
        self.entries = records
            .into_iter()
            .enumerate()
            .map(|(i, record)| (EntryId(i as u64), record))
            .collect();
        Ok(())
    }

    /// Remaining (unanswered) records.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick one remaining record uniformly at random. Nothing is removed.
    pub fn pick_random<R: Rng>(&self, rng: &mut R) -> Result<(EntryId, &QuestionRecord), BankError> {
        if self.entries.is_empty() {
            return Err(BankError::EmptyBank);
        }
        let (id, record) = &self.entries[rng.gen_range(0..self.entries.len())];
        Ok((*id, record))
    }

    pub fn get(&self, id: EntryId) -> Option<&QuestionRecord> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, record)| record)
    }

    /// Delete the entry `id` and hand its record back.
    pub fn remove(&mut self, id: EntryId) -> Result<QuestionRecord, BankError> {
        let pos = self
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .ok_or(BankError::NotFound(id))?;
        Ok(self.entries.remove(pos).1)
    }

    /// Drop everything. Used when a session is reset.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &QuestionRecord)> {
        self.entries.iter().map(|(id, record)| (*id, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::RecordDefect;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn record(prompt: &str) -> QuestionRecord {
        QuestionRecord::new(prompt, ["a", "b", "c"], 1, "easy")
    }

    #[test]
    fn load_rejects_empty_input() {
        let mut bank = QuestionBank::new();
        assert_eq!(bank.load(Vec::new()), Err(BankError::EmptyInput));
    }

    #[test]
    fn load_reports_position_of_bad_record() {
        let mut bank = QuestionBank::new();
        let bad = QuestionRecord::new("bad", ["a"], 3, "hard");
        let err = bank.load(vec![record("ok"), bad]).unwrap_err();
        assert_eq!(
            err,
            BankError::InvalidRecord {
                position: 1,
                defect: RecordDefect::CorrectIndexOutOfRange { index: 3, choices: 1 },
            }
        );
        assert!(err.is_invalid_bank());
    }

    #[test]
    fn failed_load_keeps_previous_contents() {
        let mut bank = QuestionBank::new();
        bank.load(vec![record("P1"), record("P2")]).unwrap();
        let bad = QuestionRecord::new("bad", Vec::<String>::new(), 0, "");
        assert!(bank.load(vec![bad]).is_err());
        assert_eq!(bank.size(), 2);
    }

    #[test]
    fn load_replaces_contents() {
        let mut bank = QuestionBank::new();
        bank.load(vec![record("P1"), record("P2")]).unwrap();
        bank.load(vec![record("P3")]).unwrap();
        let prompts: Vec<&str> = bank.iter().map(|(_, r)| r.prompt.as_str()).collect();
        assert_eq!(prompts, ["P3"]);
    }

    #[test]
    fn pick_random_does_not_remove() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bank = QuestionBank::new();
        bank.load(vec![record("P1"), record("P2"), record("P3")]).unwrap();
        for _ in 0..20 {
            bank.pick_random(&mut rng).unwrap();
        }
        assert_eq!(bank.size(), 3);
    }

    #[test]
    fn pick_random_on_empty_bank_fails() {
        let mut rng = StdRng::seed_from_u64(7);
        let bank = QuestionBank::new();
        assert_eq!(bank.pick_random(&mut rng).unwrap_err(), BankError::EmptyBank);
    }

    #[test]
    fn pick_random_reaches_every_entry() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut bank = QuestionBank::new();
        bank.load(vec![record("P1"), record("P2"), record("P3")]).unwrap();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let (id, _) = bank.pick_random(&mut rng).unwrap();
            seen.insert(id);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn pick_random_is_deterministic_with_seed() {
        let mut bank = QuestionBank::new();
        bank.load((0..10).map(|i| record(&format!("P{i}"))).collect()).unwrap();
        let picks = |seed: u64| -> Vec<EntryId> {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..8).map(|_| bank.pick_random(&mut rng).unwrap().0).collect()
        };
        assert_eq!(picks(3), picks(3));
    }

    #[test]
    fn duplicate_records_are_removed_independently() {
        let mut bank = QuestionBank::new();
        bank.load(vec![record("same"), record("same")]).unwrap();
        let ids: Vec<EntryId> = bank.iter().map(|(id, _)| id).collect();
        assert_ne!(ids[0], ids[1]);

        bank.remove(ids[0]).unwrap();
        assert_eq!(bank.size(), 1);
        assert!(bank.get(ids[1]).is_some());
    }

    #[test]
    fn reload_numbers_entries_from_zero() {
        let mut bank = QuestionBank::new();
        for _ in 0..3 {
            bank.load(vec![record("P1"), record("P2")]).unwrap();
            let ids: Vec<EntryId> = bank.iter().map(|(id, _)| id).collect();
            assert_eq!(ids, [EntryId(0), EntryId(1)]);
        }
    }

    #[test]
    fn remove_unknown_entry_fails() {
        let mut bank = QuestionBank::new();
        bank.load(vec![record("P1")]).unwrap();
        let (id, _) = bank.iter().next().unwrap();
        bank.remove(id).unwrap();
        assert_eq!(bank.remove(id), Err(BankError::NotFound(id)));
        assert!(bank.is_empty());
    }
}
