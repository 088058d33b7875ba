//! Dashboard page - owns all client state and performs the API calls
//!
//! Everything below this component is a pure view; state flows down as
//! snapshots and intents come back through callbacks. List fetches are
//! tagged with the filter active at dispatch so a slow response cannot
//! overwrite the result of a newer filter.

use crate::api;
use cloudsync_ui::display_types::ImageSource;
use cloudsync_ui::stores::{GalleryState, ImportNotice, ImporterState};
use cloudsync_ui::{GalleryView, ImportDialog, ImporterView};
use dioxus::prelude::*;
use tracing::{debug, error, info};

/// Delay between a queued import and the follow-up gallery refresh
const IMPORT_REFRESH_DELAY_MS: u64 = 2000;

#[component]
pub fn Dashboard() -> Element {
    let mut images = use_signal(Vec::new);
    let mut filter = use_signal(|| None::<ImageSource>);
    let mut folder_url = use_signal(String::new);
    let mut importing = use_signal(|| false);
    let mut notice = use_signal(|| None::<ImportNotice>);
    // Pending post-import refresh; replaced by newer imports, cancelled on drop
    let mut refresh_task = use_signal(|| None::<Task>);

    // Reads the listing scoped to `requested` and stores the result, unless
    // the filter moved on while the request was in flight. Fetch errors keep
    // the gallery's previous contents.
    let refresh_gallery = use_callback(move |requested: Option<ImageSource>| {
        spawn(async move {
            match api::fetch_images(requested).await {
                Ok(batch) => {
                    if *filter.peek() == requested {
                        images.set(batch);
                    } else {
                        debug!(?requested, "discarding stale image listing");
                    }
                }
                Err(err) => error!("failed to load images: {err}"),
            }
        });
    });

    // Mount and every filter change
    use_effect(move || {
        refresh_gallery.call(filter());
    });

    use_drop(move || {
        let pending = refresh_task.write().take();
        if let Some(task) = pending {
            task.cancel();
        }
    });

    let on_import = move |provider: ImageSource| {
        let url = folder_url.peek().clone();
        if provider.requires_folder_url() && url.trim().is_empty() {
            notice.set(Some(ImportNotice::Failed {
                message: format!(
                    "A folder URL is required for {} imports.",
                    provider.label()
                ),
            }));
            return;
        }

        importing.set(true);
        spawn(async move {
            match api::start_import(provider, &url).await {
                Ok(queued) => {
                    info!(
                        provider = provider.as_tag(),
                        task_id = %queued.task_id,
                        "import queued"
                    );
                    notice.set(Some(ImportNotice::Queued {
                        message: queued.message,
                    }));
                    folder_url.set(String::new());

                    // At most one refresh pending at a time
                    let superseded = refresh_task.write().take();
                    if let Some(task) = superseded {
                        task.cancel();
                    }
                    let task = spawn(async move {
                        sleep_ms(IMPORT_REFRESH_DELAY_MS).await;
                        refresh_task.set(None);
                        refresh_gallery.call(*filter.peek());
                    });
                    refresh_task.set(Some(task));
                }
                Err(err) => {
                    error!(provider = provider.as_tag(), "import failed: {err}");
                    notice.set(Some(ImportNotice::Failed {
                        message: format!("Import failed: {err}"),
                    }));
                }
            }
            importing.set(false);
        });
    };

    let importer_state = ImporterState {
        folder_url: folder_url(),
        importing: importing(),
    };
    let gallery_state = GalleryState {
        images: images(),
        filter: filter(),
    };

    rsx! {
        ImporterView {
            state: importer_state,
            on_folder_url_change: move |value| folder_url.set(value),
            on_import,
        }
        GalleryView {
            state: gallery_state,
            on_filter_change: move |selected| filter.set(selected),
        }
        if let Some(current) = notice() {
            ImportDialog {
                notice: current,
                on_dismiss: move |_| notice.set(None),
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
