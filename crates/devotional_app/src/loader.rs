//! Loads the devotional data off the UI thread. The app polls the channel
//! each frame until the one-shot result arrives.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use devotional_core::{EntryStore, LoadError};
use eframe::egui::Context;
use tracing::{debug, info};

pub struct StoreLoader {
    receiver: Receiver<Result<EntryStore, LoadError>>,
}

impl StoreLoader {
    pub fn spawn(ctx: Context, data_dir: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            info!(data_dir = %data_dir.display(), "loading devotional data");
            let result = EntryStore::load_dir(&data_dir);
            if sender.send(result).is_err() {
                debug!("reader closed before data finished loading");
            }
            ctx.request_repaint();
        });
        Self { receiver }
    }

    /// Returns the load result once it is available.
    pub fn poll(&self) -> Option<Result<EntryStore, LoadError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Read {
                path: PathBuf::from(devotional_core::store::PRIMARY_FILE),
                source: std::io::Error::other("loader thread exited without a result"),
            })),
        }
    }
}
