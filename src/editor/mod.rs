//! Application state owned by the editor shell.

/// Amount each counter step moves the counter box.
pub const COUNT_STEP: i32 = 5;

/// Editor state: a counter that positions the demo box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorStore {
    count: i32,
}

impl EditorStore {
    /// Store with an explicit starting count.
    #[must_use]
    pub fn with_count(count: i32) -> Self {
        Self { count }
    }

    /// Current counter value.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Step the counter up. Returns the new value.
    pub fn increment(&mut self) -> i32 {
        self.count = self.count.saturating_add(COUNT_STEP);
        self.count
    }

    /// Step the counter down. Returns the new value.
    pub fn decrement(&mut self) -> i32 {
        self.count = self.count.saturating_sub(COUNT_STEP);
        self.count
    }
}
