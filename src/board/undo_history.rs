/// A log of saved states with a cursor marking the current one. Entries past
/// the cursor are discarded as soon as a new state is recorded.
#[derive(Clone, Debug)]
pub struct UndoHistory<T> {
    states: Vec<T>,
    current: usize,
}

impl<T: Clone> UndoHistory<T> {
    pub fn new(initial: T) -> Self {
        Self {
            states: vec![initial],
            current: 0,
        }
    }

    /// Forgets everything and starts over from `initial`.
    pub fn reset(&mut self, initial: T) {
        self.states.clear();
        self.states.push(initial);
        self.current = 0;
    }

    pub fn record(&mut self, state: T) {
        self.states.truncate(self.current + 1);
        self.states.push(state);
        self.current += 1;
    }

    /// Steps the cursor back and returns the state it now points at, or `None`
    /// when already at the oldest state.
    pub fn undo(&mut self) -> Option<&T> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        self.states.get(self.current)
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }
}
