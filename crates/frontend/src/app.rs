use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::usecases::u101_check_email::CheckEmailPage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new(config.clone()));

    view! {
        <ConfigProvider>
            <Shell>
                <CheckEmailPage config=config />
            </Shell>
        </ConfigProvider>
    }
}

/// Shown instead of the app when the build was not configured
#[component]
pub fn ConfigErrorPage(message: String) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="config-error" role="alert">
                <h1 class="config-error__title">"Configuration error"</h1>
                <p class="config-error__text">{message}</p>
                <p class="config-error__hint">
                    "Rebuild the client with the prediction endpoint set."
                </p>
            </div>
        </div>
    }
}
