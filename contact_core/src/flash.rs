/// A value that is shown for a while and then cleared by a timer.
///
/// Every `show` bumps the generation, and an expiry only clears the value
/// when it carries the current generation, so a stale timer never removes a
/// newer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash<T> {
    value: Option<T>,
    generation: u64,
}

impl<T> Default for Flash<T> {
    fn default() -> Self {
        Self { value: None, generation: 0 }
    }
}

impl<T> Flash<T> {
    /// Returns the token the matching expiry must present.
    pub fn show(&mut self, value: T) -> u64 {
        self.generation += 1;
        self.value = Some(value);
        self.generation
    }

    pub fn expire(&mut self, token: u64) -> bool {
        if token == self.generation && self.value.is_some() {
            self.value = None;
            true
        } else {
            false
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_shown(&self) -> bool {
        self.value.is_some()
    }
}
