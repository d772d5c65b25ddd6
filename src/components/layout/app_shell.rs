//! Shared layout wrapper with the header, auth-aware navigation, and content
//! container. Navigation is client-side only; there is no server enforcing
//! anything behind these links.

use crate::app_lib::build_info;
use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Wraps routes with a header, main content container, and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated;

    let sign_out = {
        let auth = auth.clone();
        let navigate = use_navigate();
        move |_: leptos::ev::MouseEvent| {
            auth.sign_out();
            navigate(paths::LOGIN, Default::default());
        }
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-b border-gray-200 dark:border-gray-700 dark:bg-gray-900">
                <div class="max-w-screen-xl flex items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center space-x-2"
                    >
                        <span class="font-semibold whitespace-nowrap text-gray-900 dark:text-white">
                            "Accesso"
                        </span>
                    </A>
                    <nav class="font-medium text-sm">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <A
                                        href=paths::LOGIN
                                        {..}
                                        class="py-2 px-3 text-gray-900 rounded hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                                    >
                                        "Sign In"
                                    </A>
                                }
                            }
                        >
                            <button
                                type="button"
                                class="py-2 px-3 text-gray-900 rounded hover:text-blue-700 dark:text-white dark:hover:text-blue-500"
                                on:click=sign_out.clone()
                            >
                                "Sign Out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
            <footer class="py-4 text-center text-xs text-gray-400 dark:text-gray-500">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
