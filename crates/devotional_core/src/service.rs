use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::{
    date_key,
    error::{DateKeyError, LoadError},
    navigator::Navigator,
    observer::RenderObserver,
    render::{self, DisplayModel},
    store::EntryStore,
};

/// Content backing the reader: either the loaded store, or the message from
/// a failed primary load.
#[derive(Debug)]
enum Content {
    Loaded(EntryStore),
    Failed(String),
}

/// Application state for one reading session. Owns the dataset and the view
/// cursor; every command moves the cursor and re-renders synchronously.
pub struct DevotionalService {
    content: Content,
    navigator: Navigator,
    view: DisplayModel,
    observer: Option<Box<dyn RenderObserver>>,
}

pub struct DevotionalServiceBuilder {
    today: Option<NaiveDate>,
    observer: Option<Box<dyn RenderObserver>>,
}

impl DevotionalServiceBuilder {
    pub fn new() -> Self {
        Self {
            today: None,
            observer: None,
        }
    }

    /// Overrides the starting date; defaults to the local calendar day.
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn RenderObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self, store: EntryStore) -> DevotionalService {
        self.finish(Content::Loaded(store))
    }

    /// Builds from the outcome of a load. A failed load still yields a
    /// working service whose view carries the error message.
    pub fn build_from(self, loaded: Result<EntryStore, LoadError>) -> DevotionalService {
        match loaded {
            Ok(store) => self.build(store),
            Err(err) => {
                tracing::error!(%err, "could not load devotional data");
                self.finish(Content::Failed(err.to_string()))
            }
        }
    }

    fn finish(self, content: Content) -> DevotionalService {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        info!(%today, "starting devotional session");
        let mut service = DevotionalService {
            view: DisplayModel::load_error(String::new(), today),
            content,
            navigator: Navigator::new(today),
            observer: self.observer,
        };
        service.init(today);
        service
    }
}

impl Default for DevotionalServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DevotionalService {
    pub fn builder() -> DevotionalServiceBuilder {
        DevotionalServiceBuilder::new()
    }

    pub fn init(&mut self, today: NaiveDate) {
        self.navigator.init(today);
        self.refresh();
    }

    pub fn on_previous(&mut self) {
        self.navigator.go_to_previous_day();
        self.refresh();
    }

    pub fn on_next(&mut self) {
        self.navigator.go_to_next_day();
        self.refresh();
    }

    pub fn on_date_selected(&mut self, date: NaiveDate) {
        self.navigator.go_to_date(date);
        self.refresh();
    }

    /// Applies text typed into the date picker. Unparseable text leaves the
    /// cursor and view untouched.
    pub fn on_picker_text(&mut self, text: &str) -> Result<(), DateKeyError> {
        let date = date_key::from_picker_text(text)?;
        self.on_date_selected(date);
        Ok(())
    }

    pub fn cursor(&self) -> NaiveDate {
        self.navigator.current()
    }

    pub fn current_view(&self) -> &DisplayModel {
        &self.view
    }

    pub fn store(&self) -> Option<&EntryStore> {
        match &self.content {
            Content::Loaded(store) => Some(store),
            Content::Failed(_) => None,
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.content {
            Content::Loaded(_) => None,
            Content::Failed(message) => Some(message),
        }
    }

    fn refresh(&mut self) {
        let date = self.navigator.current();
        self.view = match &self.content {
            Content::Loaded(store) => {
                let entry = store.find_by_date(date);
                let alternate = store.find_alternate(date);
                debug!(
                    %date,
                    found = entry.is_some(),
                    alternate = alternate.is_some(),
                    "rendering day"
                );
                render::render(entry, alternate, date)
            }
            Content::Failed(message) => DisplayModel::load_error(message.clone(), date),
        };
        if let Some(observer) = self.observer.as_mut() {
            observer.after_render(&self.view);
        }
    }
}
