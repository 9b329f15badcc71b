//! Sidebar friend list
use iced::widget::{button, column, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::data::{Friend, Standing};
use crate::state::Session;
use crate::Message;

/// One row per friend, in registry order
pub fn friend_list<'a>(session: &'a Session, currency: &str) -> Element<'a, Message> {
    if !session.has_friends() {
        return text("No friends yet. Add one below.").size(14).into();
    }

    Column::with_children(
        session
            .friends()
            .iter()
            .map(|friend| friend_row(friend, session.is_selected(friend.id), currency)),
    )
    .spacing(12)
    .into()
}

fn friend_row<'a>(friend: &'a Friend, is_selected: bool, currency: &str) -> Element<'a, Message> {
    let standing = friend.standing();
    let line = text(standing.describe(&friend.name, currency)).size(14);
    // Red when you owe, green when owed
    let line = match standing {
        Standing::YouOwe(_) => line.style(text::danger),
        Standing::OwesYou(_) => line.style(text::success),
        Standing::Even => line,
    };

    let toggle = button(text(if is_selected { "Close" } else { "Select" }))
        .on_press(Message::SelectFriend(friend.id))
        .padding([6, 14]);

    let name = text(friend.name.as_str()).size(if is_selected { 20 } else { 18 });

    row![column![name, line].spacing(4).width(Length::Fill), toggle]
        .spacing(16)
        .align_y(Alignment::Center)
        .into()
}
