use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Element, Length, Task, Theme};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use state::data::{FriendId, Payer};
use state::Session;

/// Main application state
struct SplitBill {
    /// Friends, selection and form state
    session: Session,
    /// Shown after each amount in the friend list
    currency: String,
    /// Outcome of the last submit, shown under the forms
    status: String,
}

/// Application messages (user intents)
#[derive(Debug, Clone)]
pub enum Message {
    /// Select/Close button on a friend row
    SelectFriend(FriendId),
    /// "Add friend" / "Close" button under the list
    ToggleAddFriend,
    FriendNameChanged(String),
    FriendImageChanged(String),
    SubmitNewFriend,
    BillValueChanged(String),
    YourExpenseChanged(String),
    PayerSelected(Payer),
    SubmitBillSplit,
}

impl SplitBill {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let session = Session::new(&config);

        tracing::info!("🧾 Split Bill started with {} friends", session.friends().len());

        (
            SplitBill {
                session,
                currency: config.currency_symbol,
                status: String::new(),
            },
            Task::none(),
        )
    }

    /// Route each intent to the session
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectFriend(id) => {
                self.session.select_friend(id);
                self.status.clear();
            }
            Message::ToggleAddFriend => {
                self.session.toggle_add_friend_panel();
                self.status.clear();
            }
            Message::FriendNameChanged(name) => self.session.set_friend_name(name),
            Message::FriendImageChanged(image) => self.session.set_friend_image(image),
            Message::SubmitNewFriend => {
                self.status = match self.session.submit_new_friend() {
                    Ok(_) => String::new(),
                    Err(err) => format!("⚠️ {}", err),
                };
            }
            Message::BillValueChanged(value) => self.session.set_bill_value(value),
            Message::YourExpenseChanged(value) => self.session.set_your_expense(value),
            Message::PayerSelected(payer) => self.session.set_payer(payer),
            Message::SubmitBillSplit => {
                self.status = match self.session.submit_bill_split() {
                    Ok(_) => "✅ Bill split".to_string(),
                    Err(err) => format!("⚠️ {}", err),
                };
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut sidebar: Column<Message> = column![ui::friends::friend_list(&self.session, &self.currency)]
            .spacing(24)
            .width(Length::FillPortion(2));

        if self.session.is_add_friend_open() {
            sidebar = sidebar.push(ui::forms::add_friend_form(self.session.add_friend_form()));
        }

        let toggle_label = if self.session.is_add_friend_open() { "Close" } else { "Add friend" };
        sidebar = sidebar.push(
            button(toggle_label)
                .on_press(Message::ToggleAddFriend)
                .padding([6, 14]),
        );

        let mut main_panel: Column<Message> = column![].spacing(20).width(Length::FillPortion(3));
        if let Some(friend) = self.session.selected_friend() {
            main_panel = main_panel.push(ui::forms::split_bill_form(friend, self.session.split_form()));
        }
        if !self.status.is_empty() {
            main_panel = main_panel.push(text(self.status.as_str()).size(14));
        }

        container(scrollable(row![sidebar, main_panel].spacing(40)))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(40)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("split_bill=info")),
        )
        .init();

    iced::application("Split Bill", SplitBill::update, SplitBill::view)
        .theme(SplitBill::theme)
        .centered()
        .run_with(SplitBill::new)
}
