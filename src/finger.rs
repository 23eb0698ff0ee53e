/// The finger (touch identifier) that owns the current touch drag.
///
/// Other fingers landing, moving or lifting while it is held are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerLock {
    owner: Option<i32>,
}

impl FingerLock {
    /// Take ownership for `id`. Fails while another finger holds the lock.
    pub fn claim(&mut self, id: i32) -> bool {
        if self.owner.is_some() {
            return false;
        }
        self.owner = Some(id);
        true
    }

    #[inline]
    pub fn owner(&self) -> Option<i32> {
        self.owner
    }

    /// The owner's entry among `(identifier, value)` pairs, if present.
    pub fn pick<T>(&self, touches: impl IntoIterator<Item = (i32, T)>) -> Option<T> {
        let owner = self.owner?;
        touches
            .into_iter()
            .find_map(|(id, value)| (id == owner).then_some(value))
    }

    /// Release the lock if the owner is among the `lifted` identifiers.
    pub fn lift(&mut self, lifted: impl IntoIterator<Item = i32>) -> bool {
        match self.owner {
            Some(owner) if lifted.into_iter().any(|id| id == owner) => {
                self.owner = None;
                true
            }
            _ => false,
        }
    }
}
