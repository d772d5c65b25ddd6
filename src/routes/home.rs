//! Landing page reached after a successful login. Intentionally minimal; the
//! signed-in line is driven by the restored session, not by any check.

use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

/// Renders the landing page shell with the signed-in email, when present.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_auth().session;

    view! {
        <AppShell>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Home"</h1>
            {move || {
                session
                    .get()
                    .map(|record| {
                        view! {
                            <p class="mt-4 text-gray-500 dark:text-gray-400">
                                "Signed in as "
                                <span class="font-medium text-gray-900 dark:text-gray-200">
                                    {record.email}
                                </span>
                            </p>
                        }
                    })
            }}
        </AppShell>
    }
}
