use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex items-center justify-between gap-2 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}
    clx! {CardFooter, footer, "flex items-center px-6 [.border-t]:pt-6", "gap-2"}

    clx! {NoteList, ul, "flex flex-col gap-2"}
    clx! {NoteCardTitle, p, "truncate text-sm font-medium"}
    clx! {NoteCardPreview, p, "line-clamp-2 text-xs text-muted-foreground"}
    clx! {EmptyState, div, "rounded-md border border-dashed px-4 py-6 text-center text-xs text-muted-foreground"}
}

pub use components::*;
