use dioxus::prelude::*;

use ui::{ActivityLog, AuthProvider, ConfigProvider};
use views::{
    About, AddressCreate, AddressEdit, AddressTypeCreate, AddressTypeEdit, AddressTypes,
    Addresses, AppShell, Countries, CountryCreate, CountryEdit, GenderCreate, GenderEdit, Genders,
    NotFound, PersonCreate, PersonEdit, Persons, SettingsHome, SettingsLayout, StateCreate,
    StateEdit, States,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/persons")]
        Persons {},
        #[route("/persons/create")]
        PersonCreate {},
        #[route("/persons/:id/edit")]
        PersonEdit { id: i64 },
        #[route("/persons/:person_id/addresses")]
        Addresses { person_id: i64 },
        #[route("/persons/:person_id/addresses/create")]
        AddressCreate { person_id: i64 },
        #[route("/persons/:person_id/addresses/:address_id/edit")]
        AddressEdit { person_id: i64, address_id: i64 },
        #[nest("/settings")]
            #[layout(SettingsLayout)]
                #[route("/")]
                SettingsHome {},
                #[route("/country")]
                Countries {},
                #[route("/country/create")]
                CountryCreate {},
                #[route("/country/:id/edit")]
                CountryEdit { id: i64 },
                #[route("/country/:country_id/states")]
                States { country_id: i64 },
                #[route("/country/:country_id/states/create")]
                StateCreate { country_id: i64 },
                #[route("/country/:country_id/states/:state_id/edit")]
                StateEdit { country_id: i64, state_id: i64 },
                #[route("/gender")]
                Genders {},
                #[route("/gender/create")]
                GenderCreate {},
                #[route("/gender/:id/edit")]
                GenderEdit { id: i64 },
                #[route("/address-type")]
                AddressTypes {},
                #[route("/address-type/create")]
                AddressTypeCreate {},
                #[route("/address-type/:id/edit")]
                AddressTypeEdit { id: i64 },
            #[end_layout]
        #[end_nest]
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match api::settings::load() {
        Ok(settings) => tracing::info!(base_url = %settings.api.base_url, "Admin settings loaded"),
        Err(e) => tracing::warn!("Admin settings invalid, falling back to defaults: {}", e),
    }

    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ConfigProvider {
            AuthProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/persons`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Persons {});
    rsx! {}
}
