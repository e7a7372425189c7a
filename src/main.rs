mod app;
mod config;
mod confirm;
mod favorites;
mod input;
mod io;
mod locale;
mod message;
mod model;
mod probe;
mod router;
mod state;
mod subscription;
mod view;

use app::Michi;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("michi=info")))
        .init();

    iced::application(Michi::title, Michi::update, Michi::view)
        .subscription(Michi::subscription)
        .theme(Michi::theme)
        .window_size((1000.0, 640.0))
        .run_with(Michi::new)
}
