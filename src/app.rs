//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::{NavigateOptions, ParamSegment, StaticSegment, WildcardSegment};

use crate::components::admin_layout::AdminLayout;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toaster::Toaster;
use crate::config;
use crate::net::api::ApiClient;
use crate::pages::admin::dashboard::DashboardPage;
use crate::pages::admin::event_form::EventFormPage;
use crate::pages::admin::events_list::EventsListPage;
use crate::pages::admin::hotel_form::HotelFormPage;
use crate::pages::admin::hotels_list::HotelsListPage;
use crate::pages::home::HomePage;
use crate::pages::hotel_detail::HotelDetailPage;
use crate::pages::login::LoginPage;
use crate::pages::login_success::LoginSuccessPage;
use crate::state::session::Session;
use crate::state::toast::ToastState;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="EventHaven"/>
        <Router>
            <AppShell/>
        </Router>
    }
}

/// Context wiring and routes.
#[component]
fn AppShell() -> impl IntoView {
    let session = Session::new();
    let toasts = RwSignal::new(ToastState::default());

    // Transport-layer 401 hook: the token store is already cleared when
    // this runs; it resets the session and sends the user to login unless
    // they are already there.
    let api = ApiClient::with_unauthorized_hook(config::api_base(), move || {
        session.logout();
        redirect_to_login();
    });

    provide_context(session);
    provide_context(api.clone());
    provide_context(toasts);

    // Resolve the stored credential exactly once per page load.
    #[cfg(feature = "csr")]
    session.spawn_resolver(api.clone());

    view! {
        <Routes fallback=|| "Page not found.".into_view()>
            <Route path=StaticSegment("") view=HomePage/>
            <Route path=(StaticSegment("hotel"), ParamSegment("id")) view=HotelDetailPage/>
            <Route path=StaticSegment("login") view=LoginPage/>
            <Route path=StaticSegment("login-success") view=LoginSuccessPage/>
            <ParentRoute path=StaticSegment("admin") view=AdminSection>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("hotels") view=HotelsListPage/>
                <Route path=(StaticSegment("hotels"), StaticSegment("new")) view=HotelFormPage/>
                <Route path=(StaticSegment("hotels"), ParamSegment("id")) view=HotelFormPage/>
                <Route path=StaticSegment("events") view=EventsListPage/>
                <Route path=(StaticSegment("events"), StaticSegment("new")) view=EventFormPage/>
                <Route path=(StaticSegment("events"), ParamSegment("id")) view=EventFormPage/>
                <Route path=StaticSegment("") view=ToDashboard/>
                <Route path=WildcardSegment("any") view=ToDashboard/>
            </ParentRoute>
        </Routes>
        <Toaster/>
    }
}

/// Guarded admin shell around the nested admin routes.
#[component]
fn AdminSection() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <AdminLayout>
                <Outlet/>
            </AdminLayout>
        </ProtectedRoute>
    }
}

/// Hard redirect to the login entry point, skipped when already there.
/// Used by the 401 hook, which runs outside any router scope.
fn redirect_to_login() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            let at_login = location.pathname().map(|path| path == "/login").unwrap_or(false);
            if !at_login {
                let _ = location.set_href("/login");
            }
        }
    }
}

/// Index/unknown admin paths land on the dashboard.
#[component]
fn ToDashboard() -> impl IntoView {
    view! {
        <Redirect
            path="/admin/dashboard"
            options=NavigateOptions {
                replace: true,
                ..Default::default()
            }
        />
    }
}
