/// Visibility of the transient "drag me" message.
///
/// Every trigger hands out a new generation token; only the timer carrying the
/// latest token may hide the message, so re-triggering restarts the countdown.
#[derive(Clone, Copy, Debug, Default)]
pub struct Advisory {
    visible: bool,
    generation: u64,
}

impl Advisory {
    pub fn trigger(&mut self) -> u64 {
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Returns true if this call hid the message.
    pub fn expire(&mut self, token: u64) -> bool {
        if self.visible && token == self.generation {
            self.visible = false;
            return true;
        }
        false
    }

    #[cfg(test)]
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
