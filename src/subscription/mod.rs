mod keyboard;
mod watcher;

pub use keyboard::modifier_subscription;
pub use watcher::places_watcher;
