//! Application driver: the event loop and screen routing.
//!
//! Every key press and store notification runs to completion before the
//! next event is taken, so the store only ever sees one writer at a time.

use std::io;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use log::{debug, error, info};

use staffdeck_lib::error::PrefsError;
use staffdeck_lib::notify::EventReceiver;
use staffdeck_lib::prefs::{PrefsProvider, ViewMode, keys};
use staffdeck_lib::store::{EmployeeStore, StoreEvent};

use crate::screens::{Action, FormScreen, ListScreen, NotFoundScreen, Route};
use crate::ui::Painter;

/// One wake-up of the event loop.
enum Tick {
    Input(Event),
    Store(StoreEvent),
    Page(u32),
    Closed,
}

pub struct App {
    store: EmployeeStore,
    prefs: PrefsProvider,
    route: Route,
    list: ListScreen,
    form: Option<FormScreen>,
    not_found: NotFoundScreen,
    store_rx: EventReceiver<StoreEvent>,
    page_rx: EventReceiver<u32>,
}

impl App {
    pub async fn new(mut store: EmployeeStore, prefs: PrefsProvider) -> Result<Self, PrefsError> {
        let view_mode = prefs.get_or(keys::VIEW_MODE, ViewMode::Table).await?;

        let store_rx = store.subscribe();
        let mut list = ListScreen::new(view_mode);
        let page_rx = list.subscribe_pager();
        list.refresh(store.len());

        Ok(Self {
            store,
            prefs,
            route: Route::List,
            list,
            form: None,
            not_found: NotFoundScreen,
            store_rx,
            page_rx,
        })
    }

    pub async fn run(mut self) -> io::Result<()> {
        let mut painter = Painter::new()?;
        let mut events = EventStream::new();
        info!("staffdeck started with {} employees", self.store.len());

        loop {
            self.draw(&mut painter)?;

            let tick = tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => Tick::Input(event),
                    Some(Err(err)) => {
                        error!("terminal event error: {err}");
                        Tick::Closed
                    }
                    None => Tick::Closed,
                },
                event = self.store_rx.recv() => event.map_or(Tick::Closed, Tick::Store),
                page = self.page_rx.recv() => page.map_or(Tick::Closed, Tick::Page),
            };

            match tick {
                Tick::Input(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    if !self.handle_key(&key).await {
                        break;
                    }
                }
                // Resizes and other terminal events just redraw.
                Tick::Input(_) => {}
                Tick::Store(event) => self.on_store_event(event),
                Tick::Page(page) => self.list.set_page(page, self.store.len()),
                Tick::Closed => break,
            }
        }

        info!("staffdeck shutting down");
        Ok(())
    }

    /// Dispatch a key to the active screen; returns false to quit.
    async fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return false;
        }

        let action = match self.route {
            Route::List => {
                self.list
                    .handle_key(key, &mut self.store, &self.prefs)
                    .await
            }
            Route::Add | Route::Edit(_) => match &mut self.form {
                Some(form) => form.handle_key(key, &mut self.store).await,
                None => Action::Navigate(Route::NotFound),
            },
            Route::NotFound => self.not_found.handle_key(key),
        };

        match action {
            Action::None => true,
            Action::Quit => false,
            Action::Navigate(route) => {
                self.navigate(route);
                true
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        debug!("navigate: {route:?}");
        self.route = match route {
            Route::List => {
                self.form = None;
                self.list.refresh(self.store.len());
                Route::List
            }
            Route::Add => {
                self.form = Some(FormScreen::add());
                Route::Add
            }
            Route::Edit(id) => match FormScreen::edit(&self.store, id) {
                Some(form) => {
                    self.form = Some(form);
                    Route::Edit(id)
                }
                // Unknown ids fall through to the catch-all screen.
                None => Route::NotFound,
            },
            Route::NotFound => Route::NotFound,
        };
    }

    fn on_store_event(&mut self, event: StoreEvent) {
        if event == StoreEvent::EmployeesChanged {
            self.list.refresh(self.store.len());
        }
    }

    fn draw(&self, painter: &mut Painter) -> io::Result<()> {
        painter.begin()?;
        match self.route {
            Route::List => self.list.draw(painter, &self.store)?,
            Route::Add | Route::Edit(_) => {
                if let Some(form) = &self.form {
                    form.draw(painter, &self.store)?;
                }
            }
            Route::NotFound => self.not_found.draw(painter, &self.store)?,
        }
        painter.finish()
    }
}
