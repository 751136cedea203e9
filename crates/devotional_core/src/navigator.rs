use chrono::NaiveDate;
use tracing::debug;

/// Holds the date currently on screen and moves it one calendar day at a
/// time or straight to a picked date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    cursor: NaiveDate,
}

impl Navigator {
    pub fn new(today: NaiveDate) -> Self {
        Self { cursor: today }
    }

    pub fn init(&mut self, today: NaiveDate) {
        self.cursor = today;
    }

    pub fn current(&self) -> NaiveDate {
        self.cursor
    }

    /// Steps back one day. At the earliest representable date the cursor
    /// stays where it is.
    pub fn go_to_previous_day(&mut self) -> NaiveDate {
        if let Some(previous) = self.cursor.pred_opt() {
            self.cursor = previous;
        }
        debug!(cursor = %self.cursor, "navigated to previous day");
        self.cursor
    }

    pub fn go_to_next_day(&mut self) -> NaiveDate {
        if let Some(next) = self.cursor.succ_opt() {
            self.cursor = next;
        }
        debug!(cursor = %self.cursor, "navigated to next day");
        self.cursor
    }

    pub fn go_to_date(&mut self, date: NaiveDate) -> NaiveDate {
        self.cursor = date;
        debug!(cursor = %self.cursor, "navigated to picked date");
        self.cursor
    }
}
