use crate::message::Message;
use iced::event::{self, Event};
use iced::keyboard;
use iced::Subscription;

/// Track the currently-held modifiers so a node click can tell whether the
/// alternate-pane modifier is down.
pub fn modifier_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _id| match event {
        Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        Event::Keyboard(keyboard::Event::KeyPressed { modifiers, .. })
        | Event::Keyboard(keyboard::Event::KeyReleased { modifiers, .. }) => {
            Some(Message::ModifiersChanged(modifiers))
        }
        _ => None,
    })
}
