use crate::app::Michi;
use crate::message::Message;
use crate::router::{PaneId, ViewHost};
use crate::state::PaneStatus;
use iced::widget::{button, column, container, row, scrollable, text, Column, Row};
use iced::{Element, Length, Theme};

impl Michi {
    pub(crate) fn view_toolbar(&self) -> Element<Message> {
        let split = button(text(self.catalog.label("toolbar.split")).size(13))
            .on_press(Message::SplitToggled)
            .style(if self.panes.is_split() {
                button::primary
            } else {
                button::secondary
            });
        let language = button(
            text(format!(
                "{} ({})",
                self.catalog.label("toolbar.language"),
                self.catalog.language().tag()
            ))
            .size(13),
        )
        .on_press(Message::LanguageToggled)
        .style(button::secondary);

        container(row![split, language].spacing(6))
            .width(Length::Fill)
            .padding(6)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.strong.color.into()),
                ..Default::default()
            })
            .into()
    }

    pub(crate) fn view_panes(&self) -> Element<Message> {
        let mut panes = Row::new().spacing(2).width(Length::Fill).height(Length::Fill);
        panes = panes.push(self.view_pane(PaneId::Primary));
        if self.panes.is_split() {
            panes = panes.push(self.view_pane(PaneId::Secondary));
        }
        panes.into()
    }

    fn view_pane(&self, id: PaneId) -> Element<Message> {
        let pane = self.panes.pane(id);
        let is_active = self.panes.active_pane() == id;

        let header = button(text(pane.path.display().to_string()).size(13))
            .on_press(Message::PaneClicked(id))
            .style(if is_active {
                button::primary
            } else {
                button::secondary
            })
            .width(Length::Fill);

        let mut listing = Column::new().spacing(1).padding(4);
        if pane.status == PaneStatus::Loading {
            listing = listing.push(text("Loading...").size(13));
        } else {
            for entry in &pane.entries {
                let icon = if entry.is_dir { "📁" } else { "📄" };
                let line = row![text(icon).size(13), text(&entry.name).size(13)].spacing(6);
                if entry.is_dir {
                    listing = listing.push(
                        button(line)
                            .on_press(Message::PaneEntryActivated(id, entry.path.clone()))
                            .style(button::text)
                            .width(Length::Fill)
                            .padding([1.0, 4.0]),
                    );
                } else {
                    listing = listing.push(container(line).padding([2.0, 8.0]));
                }
            }
        }

        column![header, scrollable(listing).height(Length::Fill)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub(crate) fn view_status_bar(&self) -> Element<Message> {
        let path_text = text(format!("  {}", self.panes.active_dir().display())).size(13);
        container(path_text)
            .width(Length::Fill)
            .padding(6)
            .style(|theme: &Theme| container::Style {
                background: Some(theme.extended_palette().background.strong.color.into()),
                ..Default::default()
            })
            .into()
    }
}
