use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle,
    EmptyState, Input, Label, NoteCardPreview, NoteCardTitle, NoteList, Textarea,
};
use crate::projection::NoteListEntry;
use crate::state::{AppContext, AppState};
use leptos::html;
use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let state = app_state.0;

    let controller = state.controller;
    let fmt = state.timestamp_format.clone();
    let notes_view = Memo::new(move |_| controller.with(|c| c.view(&fmt)));

    let on_add = {
        let state = state.clone();
        move |_: web_sys::MouseEvent| state.apply(|c| c.add())
    };

    let on_delete = {
        let state = state.clone();
        move |_: web_sys::MouseEvent| state.apply(|c| c.delete_active())
    };

    let title_ref: NodeRef<html::Input> = NodeRef::new();
    let body_ref: NodeRef<html::Textarea> = NodeRef::new();

    // Both fields write title and body together, each read from its element.
    let on_title_input = {
        let state = state.clone();
        Callback::new(move |title: String| {
            let body = live_or_shown(body_ref.get_untracked().map(|el| el.value()), || {
                notes_view.with_untracked(|v| v.editor.body.clone())
            });
            state.apply(|c| c.edit(&title, &body));
        })
    };

    let on_body_input = {
        let state = state.clone();
        Callback::new(move |body: String| {
            let title = live_or_shown(title_ref.get_untracked().map(|el| el.value()), || {
                notes_view.with_untracked(|v| v.editor.title.clone())
            });
            state.apply(|c| c.edit(&title, &body));
        })
    };

    let editor_disabled = Signal::derive(move || notes_view.with(|v| !v.editor.is_enabled()));
    let title_value = Signal::derive(move || notes_view.with(|v| v.editor.title.clone()));
    let body_value = Signal::derive(move || notes_view.with(|v| v.editor.body.clone()));

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto grid w-full max-w-5xl gap-4 px-4 py-8 md:grid-cols-[18rem_1fr]">
                <Card>
                    <CardHeader>
                        <CardTitle class="text-sm">"Ghi chú"</CardTitle>
                        <Button
                            size=ButtonSize::Icon
                            variant=ButtonVariant::Outline
                            class="h-7 w-7"
                            attr:id="add-note"
                            attr:title="Thêm ghi chú"
                            on:click=on_add
                        >
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                width="16"
                                height="16"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                aria-hidden="true"
                            >
                                <path d="M5 12h14" />
                                <path d="M12 5v14" />
                            </svg>
                        </Button>
                    </CardHeader>

                    <CardContent>
                        <Show
                            when=move || notes_view.with(|v| v.show_empty_state)
                            fallback=move || {
                                let state = state.clone();
                                view! {
                                    <NoteList attr:id="note-list">
                                        {move || {
                                            notes_view
                                                .with(|v| v.entries.clone())
                                                .into_iter()
                                                .map(|entry| note_card(entry, state.clone()))
                                                .collect_view()
                                        }}
                                    </NoteList>
                                }
                            }
                        >
                            <EmptyState attr:id="empty-state">
                                "Chưa có ghi chú nào. Nhấn + để tạo ghi chú mới."
                            </EmptyState>
                        </Show>
                    </CardContent>
                </Card>

                <Card attr:data-state=move || notes_view.with(|v| v.editor.mode.to_string())>
                    <CardContent class="flex flex-col gap-4">
                        <div class="flex flex-col gap-2">
                            <Label html_for="note-title">"Tiêu đề"</Label>
                            <Input
                                id="note-title"
                                placeholder="Tiêu đề ghi chú"
                                value=title_value
                                disabled=editor_disabled
                                on_input=on_title_input
                                node_ref=title_ref
                            />
                        </div>

                        <div class="flex flex-col gap-2">
                            <Label html_for="note-body">"Nội dung"</Label>
                            <Textarea
                                id="note-body"
                                placeholder="Viết gì đó..."
                                value=body_value
                                disabled=editor_disabled
                                on_input=on_body_input
                                node_ref=body_ref
                            />
                        </div>
                    </CardContent>

                    <CardFooter class="justify-between border-t">
                        <p id="note-updated" class="text-xs text-muted-foreground">
                            {move || notes_view.with(|v| v.editor.status.clone())}
                        </p>
                        <Button
                            variant=ButtonVariant::Destructive
                            size=ButtonSize::Sm
                            attr:id="delete-note"
                            attr:disabled=move || editor_disabled.get()
                            on:click=on_delete
                        >
                            "Xóa"
                        </Button>
                    </CardFooter>
                </Card>
            </div>
        </div>
    }
}

fn note_card(entry: NoteListEntry, state: AppState) -> impl IntoView {
    let class = tw_merge!(
        "cursor-pointer rounded-md border px-3 py-2 transition-colors hover:bg-accent/50",
        if entry.is_active { "border-primary bg-accent" } else { "" }
    );
    let id = entry.id.clone();

    view! {
        <li
            class=class
            data-note-id=entry.id
            on:click=move |_: web_sys::MouseEvent| state.apply(|c| Ok(c.select(&id)))
        >
            <NoteCardTitle>{entry.title}</NoteCardTitle>
            <NoteCardPreview>{entry.preview}</NoteCardPreview>
        </li>
    }
}

/// The element's current value, or the projected one before it is mounted.
fn live_or_shown(live: Option<String>, shown: impl FnOnce() -> String) -> String {
    live.unwrap_or_else(shown)
}
