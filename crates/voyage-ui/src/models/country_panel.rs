//! Country browser state: grid cursor, current selection and its snapshot.

use voyage_weather::{Country, CountrySnapshot, COUNTRIES};

/// Countries per row in the map grid
pub const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    Idle,
    Loading,
    Ready(CountrySnapshot),
}

#[derive(Debug, Clone)]
pub struct CountryPanel {
    cursor: usize,
    selected: Option<&'static Country>,
    state: LookupState,
}

impl Default for CountryPanel {
    fn default() -> Self {
        Self {
            cursor: 0,
            selected: None,
            state: LookupState::Idle,
        }
    }
}

impl CountryPanel {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn highlighted(&self) -> &'static Country {
        &COUNTRIES[self.cursor]
    }

    pub fn selected(&self) -> Option<&'static Country> {
        self.selected
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(COUNTRIES.len() - 1);
    }

    pub fn move_up(&mut self) {
        if self.cursor >= GRID_COLUMNS {
            self.cursor -= GRID_COLUMNS;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + GRID_COLUMNS < COUNTRIES.len() {
            self.cursor += GRID_COLUMNS;
        }
    }

    /// Mark the highlighted country as selected and enter the loading state.
    /// A lookup still pending for a previous selection is superseded.
    pub fn select_highlighted(&mut self) -> &'static Country {
        let country = self.highlighted();
        self.selected = Some(country);
        self.state = LookupState::Loading;
        country
    }

    /// Apply a finished lookup. Returns false when the result belongs to a
    /// country that is no longer selected, in which case it is dropped.
    pub fn apply(&mut self, code: &str, snapshot: CountrySnapshot) -> bool {
        match self.selected {
            Some(country) if country.code == code => {
                self.state = LookupState::Ready(snapshot);
                true
            }
            _ => false,
        }
    }
}
