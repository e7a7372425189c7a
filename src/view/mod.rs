// View composition for Michi, split out of app.rs:
// the sidebar panel, the pane area and the modal overlay.

mod modals;
mod panel;
mod panes;

use crate::app::Michi;
use crate::message::Message;
use iced::widget::column;
use iced::{Element, Length};

impl Michi {
    pub fn view(&self) -> Element<Message> {
        let toolbar = self.view_toolbar();
        let body = iced::widget::row![self.view_sidebar(), self.view_panes()]
            .spacing(2)
            .width(Length::Fill)
            .height(Length::Fill);
        let status = self.view_status_bar();

        let main_content = column![toolbar, body, status]
            .width(Length::Fill)
            .height(Length::Fill);

        match self.confirm.active() {
            Some(prompt) => self.view_with_prompt(main_content, prompt),
            None => main_content.into(),
        }
    }
}
