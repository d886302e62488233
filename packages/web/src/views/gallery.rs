//! Gallery curation: grid, create/edit form, visibility toggle, deletion.

use api::gallery::GalleryListParams;
use api::{GalleryCategory, GalleryItem, GalleryItemDraft, GalleryItemPatch};
use dioxus::prelude::*;
use ui::icons::{FaEye, FaEyeSlash, FaImage, FaMagnifyingGlass, FaPen, FaPlus, FaTrash};
use ui::{confirm, gallery_service, surface_error, Icon, Spinner};

#[component]
pub fn Gallery() -> Element {
    let mut search = use_signal(String::new);
    let mut category_filter = use_signal(|| Option::<GalleryCategory>::None);
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<GalleryItem>::None);
    let mut action_error = use_signal(|| Option::<String>::None);

    let mut data = use_resource(move || async move {
        gallery_service().all(&GalleryListParams::with_limit(100)).await
    });

    match &*data.read_unchecked() {
        None => rsx! {
            Spinner {}
        },
        Some(Err(e)) => {
            let message = surface_error(e);
            rsx! {
                div { class: "error-banner", "Failed to load gallery: {message}" }
            }
        }
        Some(Ok(page)) => {
            let term = search().to_lowercase();
            let filtered: Vec<GalleryItem> = page
                .gallery_items
                .iter()
                .filter(|item| {
                    let matches_search = item.title.to_lowercase().contains(&term)
                        || item.description.to_lowercase().contains(&term);
                    let matches_category = category_filter()
                        .map(|c| item.category == c)
                        .unwrap_or(true);
                    matches_search && matches_category
                })
                .cloned()
                .collect();
            let count = filtered.len();

            rsx! {
                div {
                    class: "page",

                    div {
                        class: "page-head page-head-split",
                        div {
                            class: "page-head",
                            Icon { icon: FaImage, width: 30, height: 30 }
                            div {
                                h1 { class: "page-title", "Gallery Management" }
                                p { class: "page-sub", "{count} items" }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| {
                                editing.set(None);
                                show_form.set(true);
                            },
                            Icon { icon: FaPlus, width: 14, height: 14 }
                            "Add New Item"
                        }
                    }

                    if let Some(err) = action_error() {
                        div { class: "error-banner", "{err}" }
                    }

                    div {
                        class: "toolbar",
                        div {
                            class: "search-box",
                            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                            input {
                                class: "search-input",
                                r#type: "text",
                                placeholder: "Search gallery items...",
                                value: search(),
                                oninput: move |evt: FormEvent| search.set(evt.value()),
                            }
                        }
                        select {
                            class: "filter-select",
                            onchange: move |evt: FormEvent| {
                                category_filter.set(GalleryCategory::parse(&evt.value()));
                            },
                            option { value: "all", selected: category_filter().is_none(), "All Categories" }
                            for category in GalleryCategory::ALL {
                                option {
                                    value: "{category.as_str()}",
                                    selected: category_filter() == Some(category),
                                    "{category.label()}"
                                }
                            }
                        }
                    }

                    div {
                        class: "gallery-grid",
                        if filtered.is_empty() {
                            div { class: "empty-state", "No gallery items found" }
                        } else {
                            for item in filtered {
                                GalleryCard {
                                    key: "{item.id}",
                                    item: item.clone(),
                                    on_edit: move |item: GalleryItem| {
                                        editing.set(Some(item));
                                        show_form.set(true);
                                    },
                                    on_toggle_active: move |(id, is_active): (String, bool)| {
                                        spawn(async move {
                                            // Only the flag travels; everything else stays as is
                                            let patch = GalleryItemPatch::active(is_active);
                                            match gallery_service().update(&id, &patch).await {
                                                Ok(_) => {
                                                    action_error.set(None);
                                                    data.restart();
                                                }
                                                Err(e) => action_error.set(Some(surface_error(&e))),
                                            }
                                        });
                                    },
                                    on_delete: move |id: String| {
                                        if !confirm("Are you sure you want to delete this gallery item?") {
                                            return;
                                        }
                                        spawn(async move {
                                            match gallery_service().delete(&id).await {
                                                Ok(()) => {
                                                    action_error.set(None);
                                                    data.restart();
                                                }
                                                Err(e) => action_error.set(Some(surface_error(&e))),
                                            }
                                        });
                                    },
                                }
                            }
                        }
                    }

                    if show_form() {
                        GalleryForm {
                            item: editing(),
                            on_close: move |_| {
                                show_form.set(false);
                                editing.set(None);
                            },
                            on_saved: move |_| {
                                show_form.set(false);
                                editing.set(None);
                                data.restart();
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GalleryCard(
    item: GalleryItem,
    on_edit: EventHandler<GalleryItem>,
    on_toggle_active: EventHandler<(String, bool)>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_item = item.clone();
    let toggle_id = item.id.clone();
    let delete_id = item.id.clone();
    let toggle_to = !item.is_active;

    rsx! {
        div {
            class: "gallery-card",
            div {
                class: "gallery-media",
                img {
                    src: "{item.image}",
                    alt: "{item.title}",
                    loading: "lazy",
                }
                div {
                    class: "gallery-actions",
                    button {
                        class: "icon-btn",
                        title: "Edit",
                        onclick: move |_| on_edit.call(edit_item.clone()),
                        Icon { icon: FaPen, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-btn",
                        title: if item.is_active { "Deactivate" } else { "Activate" },
                        onclick: move |_| on_toggle_active.call((toggle_id.clone(), toggle_to)),
                        if item.is_active {
                            Icon { icon: FaEye, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaEyeSlash, width: 14, height: 14 }
                        }
                    }
                    button {
                        class: "icon-btn icon-btn-danger",
                        title: "Delete",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
                if !item.is_active {
                    span { class: "inactive-flag", "Inactive" }
                }
            }
            div {
                class: "gallery-body",
                div {
                    class: "gallery-title-row",
                    h3 { class: "gallery-title", "{item.title}" }
                    span { class: "gallery-tag", "{item.category.label()}" }
                }
                p { class: "gallery-desc", "{item.description}" }
            }
        }
    }
}

#[component]
fn GalleryForm(
    item: Option<GalleryItem>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let editing_id = item.as_ref().map(|i| i.id.clone());
    let heading = if item.is_some() { "Edit Gallery Item" } else { "Add New Gallery Item" };
    let submit_label = if item.is_some() { "Update Item" } else { "Create Item" };

    let mut title = use_signal(|| item.as_ref().map(|i| i.title.clone()).unwrap_or_default());
    let mut description =
        use_signal(|| item.as_ref().map(|i| i.description.clone()).unwrap_or_default());
    let mut category = use_signal(|| {
        item.as_ref()
            .map(|i| i.category)
            .unwrap_or(GalleryCategory::Iot)
    });
    let mut image = use_signal(|| item.as_ref().map(|i| i.image.clone()).unwrap_or_default());
    let mut is_active = use_signal(|| item.as_ref().map(|i| i.is_active).unwrap_or(true));
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let editing_id = editing_id.clone();
        spawn(async move {
            error.set(None);
            saving.set(true);

            let svc = gallery_service();
            let result = match editing_id {
                Some(id) => svc
                    .update(
                        &id,
                        &GalleryItemPatch {
                            title: Some(title()),
                            description: Some(description()),
                            category: Some(category()),
                            image: Some(image()),
                            is_active: Some(is_active()),
                        },
                    )
                    .await
                    .map(drop),
                None => svc
                    .create(&GalleryItemDraft {
                        title: title(),
                        description: description(),
                        category: category(),
                        image: image(),
                        is_active: is_active(),
                    })
                    .await
                    .map(drop),
            };

            match result {
                Ok(()) => on_saved.call(()),
                Err(e) => {
                    saving.set(false);
                    error.set(Some(surface_error(&e)));
                }
            }
        });
    };

    let described = description().chars().count();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    class: "modal-head",
                    h2 { "{heading}" }
                }

                form {
                    class: "modal-body",
                    onsubmit: handle_submit,

                    if let Some(err) = error() {
                        div { class: "error-banner", "{err}" }
                    }

                    label {
                        class: "field",
                        span { class: "field-label", "Title *" }
                        input {
                            class: "text-input",
                            r#type: "text",
                            required: true,
                            maxlength: 100,
                            placeholder: "Enter title",
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                    }

                    label {
                        class: "field",
                        span { class: "field-label", "Description *" }
                        textarea {
                            class: "text-input",
                            required: true,
                            maxlength: 500,
                            rows: 4,
                            placeholder: "Enter description",
                            value: description(),
                            oninput: move |evt: FormEvent| description.set(evt.value()),
                        }
                        span { class: "char-count", "{described}/500 characters" }
                    }

                    label {
                        class: "field",
                        span { class: "field-label", "Category *" }
                        select {
                            class: "text-input",
                            onchange: move |evt: FormEvent| {
                                if let Some(c) = GalleryCategory::parse(&evt.value()) {
                                    category.set(c);
                                }
                            },
                            for c in GalleryCategory::ALL {
                                option {
                                    value: "{c.as_str()}",
                                    selected: category() == c,
                                    "{c.label()}"
                                }
                            }
                        }
                    }

                    label {
                        class: "field",
                        span { class: "field-label", "Image URL *" }
                        input {
                            class: "text-input",
                            r#type: "url",
                            required: true,
                            placeholder: "https://example.com/image.jpg",
                            value: image(),
                            oninput: move |evt: FormEvent| image.set(evt.value()),
                        }
                        if !image().is_empty() {
                            img { class: "image-preview", src: "{image()}", alt: "Preview" }
                        }
                    }

                    label {
                        class: "checkbox-row",
                        input {
                            r#type: "checkbox",
                            checked: is_active(),
                            onchange: move |evt: FormEvent| is_active.set(evt.checked()),
                        }
                        span { "Active (visible on public gallery)" }
                    }

                    div {
                        class: "modal-foot",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "{submit_label}" }
                        }
                    }
                }
            }
        }
    }
}
