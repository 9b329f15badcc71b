//! Add-friend and split-bill forms
use iced::widget::{button, column, radio, row, text, text_input};
use iced::{Element, Length};

use crate::state::add_friend::AddFriendForm;
use crate::state::data::{Friend, Payer};
use crate::state::split::BillSplitForm;
use crate::Message;

const LABEL_WIDTH: f32 = 180.0;

fn labeled<'a>(label: &'a str, field: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    row![text(label).width(Length::Fixed(LABEL_WIDTH)), field.into()]
        .spacing(12)
        .into()
}

pub fn add_friend_form(form: &AddFriendForm) -> Element<'_, Message> {
    column![
        labeled(
            "🤗 Friend",
            text_input("Name", &form.name)
                .on_input(Message::FriendNameChanged)
                .on_submit(Message::SubmitNewFriend),
        ),
        labeled(
            "📷 Image URL",
            text_input("https://...", &form.image)
                .on_input(Message::FriendImageChanged)
                .on_submit(Message::SubmitNewFriend),
        ),
        button("Add").on_press(Message::SubmitNewFriend).padding([6, 14]),
    ]
    .spacing(10)
    .into()
}

pub fn split_bill_form<'a>(friend: &'a Friend, form: &'a BillSplitForm) -> Element<'a, Message> {
    let friend_expense = form
        .friend_expense()
        .map(|amount| amount.normalize().to_string())
        .unwrap_or_default();

    column![
        text(format!("Split a bill with {}", friend.name)).size(24),
        labeled(
            "💰 Bill value",
            text_input("0", &form.bill_value).on_input(Message::BillValueChanged),
        ),
        labeled(
            "🧍 Your expense",
            text_input("0", &form.your_expense).on_input(Message::YourExpenseChanged),
        ),
        // Derived, so read-only
        row![
            text(format!("🧑‍🤝‍🧑 {}'s expense", friend.name)).width(Length::Fixed(LABEL_WIDTH)),
            text(friend_expense),
        ]
        .spacing(12),
        labeled(
            "🤑 Who is paying the bill?",
            row![
                radio("You", Payer::You, Some(form.payer), Message::PayerSelected),
                radio(friend.name.as_str(), Payer::Friend, Some(form.payer), Message::PayerSelected),
            ]
            .spacing(16),
        ),
        button("Split bill").on_press(Message::SubmitBillSplit).padding([6, 14]),
    ]
    .spacing(12)
    .into()
}
