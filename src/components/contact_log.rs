//! Contact Log Component
//!
//! Form for saving notes about a contact, and the most-recent-first list of
//! saved notes.

use chrono::Local;
use dashboard_core::Contact;
use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::format::contact_timestamp;
use crate::store::{store_update_contacts, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn ContactLog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_dashboard_store();
    let (name, set_name) = signal(String::new());
    let (notes, set_notes) = signal(String::new());

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let stamp = ctx.stamp();
        let (name_value, notes_value) = (name.get_untracked(), notes.get_untracked());
        if store_update_contacts(&store, |log| log.add_contact(&name_value, &notes_value, stamp, &ctx.toasts)) {
            log::info!("[CONTACTS] saved notes for {}", name_value.trim());
            set_name.set(String::new());
            set_notes.set(String::new());
        }
    };

    view! {
        <section class="contact-log">
            <div class="card">
                <h2 class="card-title">"News"</h2>
                <form class="contact-form" on:submit=save>
                    <label for="contact-name">"Contact Name"</label>
                    <input
                        id="contact-name"
                        type="text"
                        placeholder="Enter contact name"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label for="contact-notes">"Notes"</label>
                    <textarea
                        id="contact-notes"
                        rows="4"
                        placeholder="Enter your notes about this contact..."
                        prop:value=move || notes.get()
                        on:input=move |ev| set_notes.set(event_target_value(&ev))
                    />
                    <button type="submit" class="full-width">"Save News"</button>
                </form>
            </div>

            <Show when=move || store.contacts().with(|log| !log.is_empty())>
                <div class="card">
                    <h2 class="card-title">"Recent News"</h2>
                    <For
                        each=move || store.contacts().with(|log| log.contacts().to_vec())
                        key=|contact| contact.id
                        children=move |contact| view! { <ContactEntry contact=contact /> }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn ContactEntry(contact: Contact) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_dashboard_store();
    let id = contact.id;
    let when = contact_timestamp(&contact.date.with_timezone(&Local));

    let on_delete = Callback::new(move |_: ()| {
        if store_update_contacts(&store, |log| log.delete_contact(id, &ctx.toasts)) {
            log::info!("[CONTACTS] deleted {}", id);
        }
    });

    view! {
        <article class="contact-entry">
            <div class="contact-entry-header">
                <div>
                    <h3>{contact.name}</h3>
                    <p class="contact-date">{when}</p>
                </div>
                <DeleteConfirmButton button_class="ghost small" label="Delete" on_confirm=on_delete />
            </div>
            <p class="contact-notes">{contact.notes}</p>
        </article>
    }
}
