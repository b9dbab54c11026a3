use smallvec::SmallVec;

/// Staggered reveal of the letter lines.
///
/// Holds an ordered list of `(line, delay)` pairs sorted by delay. The frame
/// loop feeds elapsed time through `advance`, which reports every line whose
/// delay has passed since `start`. Each line is reported once per run.
#[derive(Clone, Debug, Default)]
pub struct RevealSchedule {
    entries: Vec<(usize, f32)>,
    next: usize,
    elapsed: f32,
    running: bool,
}

impl RevealSchedule {
    /// Line `i` appears `i * stagger_sec` after the start.
    pub fn staggered(line_count: usize, stagger_sec: f32) -> Self {
        let stagger = if stagger_sec.is_finite() {
            stagger_sec.max(0.0)
        } else {
            0.0
        };
        Self::from_delays((0..line_count).map(|i| (i, i as f32 * stagger)).collect())
    }

    pub fn from_delays(mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_by(|a, b| a.1.total_cmp(&b.1));
        Self {
            entries,
            next: 0,
            elapsed: 0.0,
            running: false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewind to the beginning and start running.
    pub fn start(&mut self) {
        self.next = 0;
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Stop and forget progress; `advance` reports nothing until restarted.
    pub fn stop(&mut self) {
        self.next = 0;
        self.elapsed = 0.0;
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.entries.len()
    }

    pub fn revealed_count(&self) -> usize {
        if self.running {
            self.next
        } else {
            0
        }
    }

    /// Advance by `dt_sec` and return the lines that became visible, in order.
    pub fn advance(&mut self, dt_sec: f32) -> SmallVec<[usize; 4]> {
        let mut due = SmallVec::new();
        if !self.running {
            return due;
        }
        self.elapsed += dt_sec.max(0.0);
        while let Some(&(line, delay)) = self.entries.get(self.next) {
            if delay > self.elapsed {
                break;
            }
            due.push(line);
            self.next += 1;
        }
        due
    }
}
