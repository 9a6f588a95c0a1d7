use burrow_core::{DirListing, MediaKind, Operation, SelectionList};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

/// Top-level workflow pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Extract,
    Pca,
    Model,
    Viz,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Extract, Page::Pca, Page::Model, Page::Viz];

    pub fn label(self) -> &'static str {
        match self {
            Page::Extract => "Extract",
            Page::Pca => "PCA",
            Page::Model => "Model",
            Page::Viz => "Visualize",
        }
    }

    /// Operation tabs shown on this page, in display order.
    pub fn operations(self) -> &'static [Operation] {
        match self {
            Page::Extract => &[Operation::Extract, Operation::FindRoi, Operation::CopySlice],
            Page::Pca => &[Operation::TrainPca, Operation::ApplyPca],
            Page::Model => &[Operation::LearnModel, Operation::CountFrames],
            Page::Viz => &[],
        }
    }
}

/// Nested tab set on the Visualize page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphTab {
    #[default]
    Scalars,
    Transitions,
    Usages,
}

impl GraphTab {
    pub const ALL: [GraphTab; 3] = [GraphTab::Scalars, GraphTab::Transitions, GraphTab::Usages];

    pub fn label(self) -> &'static str {
        match self {
            GraphTab::Scalars => "Scalar Summary",
            GraphTab::Transitions => "Transition Graph",
            GraphTab::Usages => "Syllable Usages",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryItem {
    pub path: String,
    pub kind: MediaKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Gallery {
    pub title: String,
    pub items: Vec<GalleryItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

const TOAST_DISMISS_MS: i32 = 6_000;

#[derive(Clone, Copy)]
pub struct AppState {
    pub page: RwSignal<Page>,
    pub active_op: RwSignal<Operation>,
    pub graph_tab: RwSignal<GraphTab>,

    pub sidebar_open: RwSignal<bool>,
    pub listing: RwSignal<Option<DirListing>>,
    pub listing_loading: RwSignal<bool>,
    pub upload_count: RwSignal<usize>,

    pub batch_extract: RwSignal<bool>,
    pub model_scan: RwSignal<bool>,

    pub gallery: RwSignal<Option<Gallery>>,
    pub lightbox: RwSignal<Option<GalleryItem>>,
    pub flip_modal_open: RwSignal<bool>,

    pub toasts: RwSignal<Vec<Toast>>,
    pub next_toast_id: RwSignal<u64>,

    // One accumulator per operation
    pub sel_extract: RwSignal<SelectionList>,
    pub sel_find_roi: RwSignal<SelectionList>,
    pub sel_copy_slice: RwSignal<SelectionList>,
    pub sel_train_pca: RwSignal<SelectionList>,
    pub sel_apply_pca: RwSignal<SelectionList>,
    pub sel_learn_model: RwSignal<SelectionList>,
    pub sel_count_frames: RwSignal<SelectionList>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::Extract),
            active_op: RwSignal::new(Operation::Extract),
            graph_tab: RwSignal::new(GraphTab::Scalars),
            sidebar_open: RwSignal::new(false),
            listing: RwSignal::new(None),
            listing_loading: RwSignal::new(false),
            upload_count: RwSignal::new(0),
            batch_extract: RwSignal::new(false),
            model_scan: RwSignal::new(false),
            gallery: RwSignal::new(None),
            lightbox: RwSignal::new(None),
            flip_modal_open: RwSignal::new(false),
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: RwSignal::new(0),
            sel_extract: RwSignal::new(SelectionList::new()),
            sel_find_roi: RwSignal::new(SelectionList::new()),
            sel_copy_slice: RwSignal::new(SelectionList::new()),
            sel_train_pca: RwSignal::new(SelectionList::new()),
            sel_apply_pca: RwSignal::new(SelectionList::new()),
            sel_learn_model: RwSignal::new(SelectionList::new()),
            sel_count_frames: RwSignal::new(SelectionList::new()),
        }
    }

    /// Accumulator signal owned by one operation.
    pub fn selection(&self, op: Operation) -> RwSignal<SelectionList> {
        match op {
            Operation::Extract => self.sel_extract,
            Operation::FindRoi => self.sel_find_roi,
            Operation::CopySlice => self.sel_copy_slice,
            Operation::TrainPca => self.sel_train_pca,
            Operation::ApplyPca => self.sel_apply_pca,
            Operation::LearnModel => self.sel_learn_model,
            Operation::CountFrames => self.sel_count_frames,
        }
    }

    pub fn show_info_toast(&self, text: impl Into<String>) {
        self.push_toast(ToastKind::Info, text.into());
    }

    pub fn show_error_toast(&self, text: impl Into<String>) {
        self.push_toast(ToastKind::Error, text.into());
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn push_toast(&self, kind: ToastKind, text: String) {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, text }));

        let state = *self;
        spawn_local(async move {
            let promise = js_sys::Promise::new(&mut |resolve, _| {
                web_sys::window()
                    .unwrap()
                    .set_timeout_with_callback_and_timeout_and_arguments_0(
                        &resolve,
                        TOAST_DISMISS_MS,
                    )
                    .unwrap();
            });
            JsFuture::from(promise).await.ok();
            state.dismiss_toast(id);
        });
    }
}
