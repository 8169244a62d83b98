//! Root application component with routing, layout, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::{
    header::Header, notification_panel::NotificationDrawer, sidebar::Sidebar, toast_stack::ToastStack,
};
use crate::data::records::Records;
use crate::pages::{
    clients::ClientsPage, dashboard::DashboardPage, deliveries::DeliveriesPage, distributors::DistributorsPage,
    invoices::InvoicesPage, login::LoginPage, new_order::NewOrderPage, notifications::NotificationsPage,
    orders::OrdersPage, products::ProductsPage,
};
use crate::state::{session::SessionState, ui::UiState};
use crate::util::notify::provide_notifications;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let records = RwSignal::new(Records::seeded());

    provide_context(session);
    provide_context(ui);
    provide_context(records);
    provide_notifications();

    // Stored preferences only exist in the browser; apply them after hydration.
    Effect::new(move || {
        let prefs = crate::util::preferences::Preferences::load();
        let dark = crate::util::theme::read_preference();
        crate::util::theme::apply(dark);
        ui.update(|u| {
            u.dark_mode = dark;
            u.sidebar_collapsed = prefs.sidebar_collapsed;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/dairy-admin.css"/>
        <Title text="Dairy Admin"/>

        <Router>
            <Layout>
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("clients") view=ClientsPage/>
                    <Route path=StaticSegment("distributors") view=DistributorsPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route path=StaticSegment("orders") view=OrdersPage/>
                    <Route path=(StaticSegment("orders"), StaticSegment("new")) view=NewOrderPage/>
                    <Route path=StaticSegment("deliveries") view=DeliveriesPage/>
                    <Route path=StaticSegment("invoices") view=InvoicesPage/>
                    <Route path=StaticSegment("notifications") view=NotificationsPage/>
                </Routes>
            </Layout>
        </Router>
        <ToastStack/>
    }
}

/// Sidebar + header chrome around every page except `/login`.
#[component]
fn Layout(children: Children) -> impl IntoView {
    let location = use_location();
    let chrome = move || location.pathname.get() != "/login";

    view! {
        <div class="layout" class:layout--bare=move || !chrome()>
            <Show when=chrome>
                <Sidebar/>
            </Show>
            <div class="layout__main">
                <Show when=chrome>
                    <Header/>
                </Show>
                <main class="layout__content">{children()}</main>
            </div>
            <NotificationDrawer/>
        </div>
    }
}
