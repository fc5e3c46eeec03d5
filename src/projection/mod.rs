//! Pure derivation of what the list and the editor should show.

use crate::models::Note;
use crate::util::truncate_chars;

pub(crate) const PREVIEW_CHARS: usize = 80;
pub(crate) const UNTITLED_LABEL: &str = "Ghi chú mới";
pub(crate) const EMPTY_BODY_LABEL: &str = "Chưa có nội dung";
pub(crate) const NO_SELECTION_LABEL: &str = "Chọn ghi chú để chỉnh sửa";
pub(crate) const UPDATED_PREFIX: &str = "Cập nhật lần cuối";

/// Renders a note timestamp for the status label.
pub trait TimestampFormat {
    fn format(&self, updated_at_ms: i64) -> String;
}

/// Medium date + short time in the given BCP 47 locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleTimestampFormat {
    pub locale: String,
}

impl LocaleTimestampFormat {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl TimestampFormat for LocaleTimestampFormat {
    fn format(&self, updated_at_ms: i64) -> String {
        use wasm_bindgen::JsValue;

        let date = js_sys::Date::new(&JsValue::from_f64(updated_at_ms as f64));
        let options = js_sys::Object::new();
        let _ = js_sys::Reflect::set(&options, &"dateStyle".into(), &"medium".into());
        let _ = js_sys::Reflect::set(&options, &"timeStyle".into(), &"short".into());
        date.to_locale_string(&self.locale, &options).into()
    }
}

// No `Intl` off the browser: fixed UTC rendering, locale ignored.
#[cfg(not(target_arch = "wasm32"))]
impl TimestampFormat for LocaleTimestampFormat {
    fn format(&self, updated_at_ms: i64) -> String {
        match chrono::DateTime::from_timestamp_millis(updated_at_ms) {
            Some(dt) => dt.format("%H:%M %d/%m/%Y").to_string(),
            None => updated_at_ms.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteListEntry {
    pub id: String,
    pub title: String,
    pub preview: String,
    pub is_active: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum EditorMode {
    Enabled,
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorProjection {
    pub title: String,
    pub body: String,
    pub mode: EditorMode,
    pub status: String,
}

impl EditorProjection {
    pub fn is_enabled(&self) -> bool {
        self.mode == EditorMode::Enabled
    }
}

/// Everything the widget renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotesView {
    pub entries: Vec<NoteListEntry>,
    pub editor: EditorProjection,
    pub show_empty_state: bool,
}

/// Notes ordered most recently updated first; ties keep storage order.
pub fn display_order(notes: &[Note]) -> Vec<&Note> {
    let mut sorted: Vec<&Note> = notes.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted
}

pub fn project_list(notes: &[Note], active_id: Option<&str>) -> Vec<NoteListEntry> {
    display_order(notes)
        .into_iter()
        .map(|n| NoteListEntry {
            id: n.id.clone(),
            title: if n.title.is_empty() {
                UNTITLED_LABEL.to_string()
            } else {
                n.title.clone()
            },
            preview: if n.body.is_empty() {
                EMPTY_BODY_LABEL.to_string()
            } else {
                truncate_chars(&n.body, PREVIEW_CHARS).to_string()
            },
            is_active: active_id == Some(n.id.as_str()),
        })
        .collect()
}

pub fn project_editor(active: Option<&Note>, fmt: &dyn TimestampFormat) -> EditorProjection {
    match active {
        None => EditorProjection {
            title: String::new(),
            body: String::new(),
            mode: EditorMode::Disabled,
            status: NO_SELECTION_LABEL.to_string(),
        },
        Some(n) => EditorProjection {
            title: n.title.clone(),
            body: n.body.clone(),
            mode: EditorMode::Enabled,
            status: format!("{UPDATED_PREFIX}: {}", fmt.format(n.updated_at)),
        },
    }
}

/// `active` must already be resolved against `notes`.
pub fn project(notes: &[Note], active: Option<&Note>, fmt: &dyn TimestampFormat) -> NotesView {
    NotesView {
        entries: project_list(notes, active.map(|n| n.id.as_str())),
        editor: project_editor(active, fmt),
        show_empty_state: notes.is_empty(),
    }
}
