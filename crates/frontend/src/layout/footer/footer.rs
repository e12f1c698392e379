use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u101_check_email::model::fetch_model_status;
use contracts::enums::ModelChoice;
use contracts::usecases::u101_check_email::{ModelAvailability, ModelStatusResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const MODEL_HUB_URL: &str = "https://huggingface.co/lleratodev";

#[derive(Clone, Debug, PartialEq)]
pub enum ServiceStatus {
    Checking,
    Online(ModelStatusResponse),
    Offline,
    /// The endpoint has no status route next to it
    Unknown,
}

impl ServiceStatus {
    pub fn display_text(&self) -> &'static str {
        match self {
            ServiceStatus::Checking => "Service: Checking...",
            ServiceStatus::Online(_) => "Service: Online",
            ServiceStatus::Offline => "Service: Offline",
            ServiceStatus::Unknown => "Service: status unavailable",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ServiceStatus::Checking => "status-checking",
            ServiceStatus::Online(_) => "status-online",
            ServiceStatus::Offline => "status-offline",
            ServiceStatus::Unknown => "status-unknown",
        }
    }

    /// Only known once the service answered
    pub fn availability(&self, model: ModelChoice) -> Option<ModelAvailability> {
        match self {
            ServiceStatus::Online(status) => Some(status.availability(model)),
            _ => None,
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let status = ctx.service_status;

    let check_service = move || {
        status.set(ServiceStatus::Checking);
        let config = ctx.config.get_value();

        spawn_local(async move {
            let next = match fetch_model_status(&config).await {
                Ok(Some(models)) => {
                    log::info!("prediction service online: {:?}", models);
                    ServiceStatus::Online(models)
                }
                Ok(None) => {
                    log::debug!("no status route for {}", config.endpoint);
                    ServiceStatus::Unknown
                }
                Err(e) => {
                    log::warn!("status check failed: {}", e);
                    ServiceStatus::Offline
                }
            };
            status.set(next);
        });
    };

    // Check once on mount
    Effect::new(move |_| {
        check_service();
    });

    let model_badges = move || {
        ModelChoice::all()
            .into_iter()
            .filter_map(|model| {
                status.get().availability(model).map(|availability| {
                    let color = match availability {
                        ModelAvailability::Ready => BadgeColor::Success,
                        ModelAvailability::Unavailable => BadgeColor::Danger,
                    };
                    view! {
                        <Badge appearance=BadgeAppearance::Tint color=color>
                            {model.display_name()}
                        </Badge>
                    }
                })
            })
            .collect_view()
    };

    view! {
        <footer data-zone="footer" class="status-bar">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <span class=move || status.get().css_class()>
                        {move || status.get().display_text()}
                    </span>
                    {model_badges}
                </Flex>
                <a
                    class="status-bar__link"
                    href=MODEL_HUB_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Access the model on Hugging Face →"
                </a>
            </Flex>
        </footer>
    }
}
