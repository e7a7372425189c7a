use crate::app::Michi;
use crate::message::Message;
use crate::model::TreeGroup;
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Element, Length, Theme};

impl Michi {
    pub(crate) fn view_sidebar(&self) -> Element<Message> {
        let mut groups = Column::new().spacing(4).padding(6);
        for group in self.tree.groups() {
            groups = groups.push(self.view_group(group));
        }

        container(scrollable(groups).height(Length::Fill))
            .width(Length::Fixed(self.config.panel.width))
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.weak.color.into()),
                ..Default::default()
            })
            .into()
    }

    fn view_group<'a>(&'a self, group: &'a TreeGroup) -> Element<'a, Message> {
        let arrow = if group.expanded { "▼" } else { "▶" };
        let header = button(
            row![text(arrow).size(11), text(&group.label).size(14)].spacing(6),
        )
        .on_press(Message::GroupToggled(group.kind))
        .style(button::text)
        .width(Length::Fill)
        .padding([4.0, 6.0]);

        let mut section = column![header].spacing(1);
        if group.expanded {
            for node in &group.nodes {
                let label = row![text(node.icon.glyph()).size(14), text(&node.label).size(14)]
                    .spacing(8);
                section = section.push(
                    button(label)
                        .on_press(Message::NodeActivated(node.path.clone()))
                        .style(if node.selected {
                            button::primary
                        } else {
                            button::text
                        })
                        .width(Length::Fill)
                        .padding([3.0, 18.0]),
                );
            }
        }
        section.into()
    }
}
