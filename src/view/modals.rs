use crate::app::Michi;
use crate::confirm::{Intent, Prompt};
use crate::message::Message;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length, Theme};

impl Michi {
    /// Overlay the one open confirmation prompt on top of the main view.
    /// The queue guarantees there is never more than one.
    pub(crate) fn view_with_prompt<'a>(
        &'a self,
        background: impl Into<Element<'a, Message>>,
        prompt: &'a Prompt,
    ) -> Element<'a, Message> {
        let buttons = match prompt.intent {
            Intent::Error => row![button(text(self.catalog.label("confirm.ok")).size(14))
                .on_press(Message::PromptAnswered(true))
                .style(button::primary)],
            Intent::Question => row![
                button(text(self.catalog.label("confirm.yes")).size(14))
                    .on_press(Message::PromptAnswered(true))
                    .style(button::primary),
                button(text(self.catalog.label("confirm.no")).size(14))
                    .on_press(Message::PromptAnswered(false))
                    .style(button::secondary),
            ]
            .spacing(8),
        };

        let dialog_content = column![
            text(&prompt.title).size(16),
            text(&prompt.body).size(14),
            buttons,
        ]
        .spacing(15)
        .padding(20);

        let dialog = container(dialog_content)
            .width(Length::Fixed(420.0))
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.base.color.into()),
                text_color: None,
                border: iced::Border {
                    color: theme.extended_palette().danger.strong.color,
                    width: 2.0,
                    radius: 8.0.into(),
                },
                shadow: iced::Shadow {
                    color: iced::Color::BLACK,
                    offset: iced::Vector::new(0.0, 4.0),
                    blur_radius: 16.0,
                },
            });

        iced::widget::stack![
            background.into(),
            container(dialog)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .style(|_theme: &Theme| container::Style {
                    background: Some(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5).into()),
                    ..Default::default()
                })
        ]
        .into()
    }
}
