//! Admin panel shell: sidebar navigation, the signed-in user card, and the
//! logout action. Page content renders into the main column.

#[cfg(test)]
#[path = "admin_layout_test.rs"]
mod admin_layout_test;

use leptos::children::Children;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::toaster::show_toast;
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState};

/// Sidebar entries: label and target path.
const MENU: [(&str, &str); 5] = [
    ("Dashboard", "/admin/dashboard"),
    ("Add Hotel", "/admin/hotels/new"),
    ("Add Event", "/admin/events/new"),
    ("View Hotels", "/admin/hotels"),
    ("View Events", "/admin/events"),
];

/// Whether a sidebar entry matches the current path, including subpaths.
#[must_use]
pub fn is_active(current: &str, path: &str) -> bool {
    current == path || current.starts_with(&format!("{path}/"))
}

/// Admin shell around the routed admin pages.
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let pathname = use_location().pathname;
    let sidebar_open = RwSignal::new(false);

    let logout = move |_| {
        session.logout();
        show_toast(toasts, ToastKind::Success, "Logged out successfully");
        // The route guard notices the ended session and redirects.
    };

    view! {
        <div class="admin">
            <Show when=move || sidebar_open.get()>
                <div class="admin__overlay" on:click=move |_| sidebar_open.set(false)></div>
            </Show>

            <aside class=move || {
                if sidebar_open.get() {
                    "admin__sidebar admin__sidebar--open"
                } else {
                    "admin__sidebar"
                }
            }>
                <div class="admin__brand">
                    <h1>"Event" <span class="brand-accent">"Haven"</span></h1>
                    <p>"Admin Panel"</p>

                    {move || {
                        session.user().map(|user| {
                            view! {
                                <div class="admin__user">
                                    {user.avatar.clone().map(|avatar| {
                                        view! {
                                            <img
                                                class="admin__avatar"
                                                src=avatar
                                                alt=user.name.clone()
                                            />
                                        }
                                    })}
                                    <div class="admin__user-meta">
                                        <p class="admin__user-name">
                                            {if user.name.is_empty() {
                                                "Admin".to_owned()
                                            } else {
                                                user.name.clone()
                                            }}
                                        </p>
                                        <p class="admin__user-email">{user.email.clone()}</p>
                                    </div>
                                </div>
                            }
                        })
                    }}
                </div>

                <nav class="admin__nav">
                    {MENU
                        .into_iter()
                        .map(|(label, path)| {
                            view! {
                                <a
                                    href=path
                                    class=move || {
                                        if is_active(&pathname.get(), path) {
                                            "admin__link admin__link--active"
                                        } else {
                                            "admin__link"
                                        }
                                    }
                                    on:click=move |_| sidebar_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="admin__logout">
                    <button class="btn btn--danger" on:click=logout>
                        "Logout"
                    </button>
                </div>
            </aside>

            <main class="admin__main">
                <div class="admin__topbar">
                    <button class="btn" on:click=move |_| sidebar_open.set(true)>
                        "☰"
                    </button>
                    <h2>"Admin Panel"</h2>
                </div>
                <div class="admin__content">{children()}</div>
            </main>
        </div>
    }
}
