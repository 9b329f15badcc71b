use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::add_friend::AddFriendForm;
use super::data::{Friend, FriendId, Payer};
use super::ids::{IdGenerator, RandomIds};
use super::registry::FriendRegistry;
use super::selection::Selection;
use super::split::BillSplitForm;
use crate::config::Config;
use crate::error::ValidationError;

/// The Session owns all state of one running app.
///
/// The view layer reads it and reports user intents through the methods
/// below; nothing else mutates it. A rejected intent leaves it unchanged.
pub struct Session {
    registry: FriendRegistry,
    selection: Selection,
    show_add_friend: bool,
    add_friend: AddFriendForm,
    split: BillSplitForm,
    ids: Box<dyn IdGenerator>,
}

impl Session {
    /// Start a session seeded from the config, with random friend ids
    pub fn new(config: &Config) -> Self {
        Self::with_ids(config, Box::new(RandomIds))
    }

    pub fn with_ids(config: &Config, ids: Box<dyn IdGenerator>) -> Self {
        let mut registry = FriendRegistry::new();
        for friend in &config.friends {
            if let Err(err) = registry.add(friend.clone()) {
                warn!("skipping seed friend {}: {}", friend.name, err);
            }
        }
        if registry.is_empty() {
            info!("starting with an empty friend list");
        }

        Self {
            registry,
            selection: Selection::None,
            show_add_friend: false,
            add_friend: AddFriendForm::new(config.default_image_url.as_str()),
            split: BillSplitForm::default(),
            ids,
        }
    }

    // ========== Intents ==========

    /// Select a friend for splitting, or deselect if already selected.
    /// Always closes the add-friend panel.
    pub fn select_friend(&mut self, id: FriendId) -> Selection {
        let previous = self.selection;
        let current = self.selection.select(id);
        self.show_add_friend = false;

        if previous != current {
            self.split.reset();
        }

        debug!(?current, "selection changed");
        current
    }

    /// Open or close the add-friend panel. Opening it clears the selection.
    pub fn toggle_add_friend_panel(&mut self) -> bool {
        self.show_add_friend = !self.show_add_friend;

        if self.show_add_friend {
            self.selection.clear();
            self.split.reset();
        }

        self.show_add_friend
    }

    /// Create a friend from the add-friend form and close the panel
    pub fn submit_new_friend(&mut self) -> Result<FriendId, ValidationError> {
        match self.add_friend.submit(&mut self.registry, self.ids.as_mut()) {
            Ok(id) => {
                self.show_add_friend = false;
                Ok(id)
            }
            Err(err) => {
                warn!("add friend rejected: {}", err);
                Err(err)
            }
        }
    }

    /// Apply the split form to the selected friend's balance.
    /// Returns the friend's new balance.
    pub fn submit_bill_split(&mut self) -> Result<Decimal, ValidationError> {
        let result = self.apply_split();
        if let Err(err) = &result {
            warn!("bill split rejected: {}", err);
        }
        result
    }

    fn apply_split(&mut self) -> Result<Decimal, ValidationError> {
        let id = self.selection.current_id().ok_or(ValidationError::NoFriendSelected)?;
        let delta = self.split.delta()?;

        let friend = self
            .registry
            .get_mut(id)
            .ok_or(ValidationError::NoFriendSelected)?;
        friend.apply(delta)?;
        let balance = friend.balance;

        info!(id, %delta, %balance, "💰 bill split");
        self.split.reset();
        Ok(balance)
    }

    pub fn set_friend_name(&mut self, name: String) {
        self.add_friend.set_name(name);
    }

    pub fn set_friend_image(&mut self, image: String) {
        self.add_friend.set_image(image);
    }

    pub fn set_bill_value(&mut self, value: String) {
        self.split.bill_value = value;
    }

    pub fn set_your_expense(&mut self, value: String) {
        self.split.your_expense = value;
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.split.payer = payer;
    }

    // ========== Rendered state ==========

    pub fn friends(&self) -> &[Friend] {
        self.registry.list()
    }

    pub fn has_friends(&self) -> bool {
        !self.registry.is_empty()
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selection.current(&self.registry)
    }

    pub fn is_selected(&self, id: FriendId) -> bool {
        self.selection.is_selected(id)
    }

    pub fn is_add_friend_open(&self) -> bool {
        self.show_add_friend
    }

    pub fn add_friend_form(&self) -> &AddFriendForm {
        &self.add_friend
    }

    pub fn split_form(&self) -> &BillSplitForm {
        &self.split
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("friends", &self.registry.len())
            .field("selection", &self.selection)
            .field("show_add_friend", &self.show_add_friend)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ids::SequentialIds;

    const CLARK: FriendId = 118836;
    const SARAH: FriendId = 933372;

    fn session() -> Session {
        Session::with_ids(&Config::default(), Box::new(SequentialIds::starting_at(1)))
    }

    fn balance_of(session: &Session, id: FriendId) -> Decimal {
        session
            .friends()
            .iter()
            .find(|f| f.id == id)
            .map(|f| f.balance)
            .unwrap()
    }

    fn fill_split(session: &mut Session, bill: &str, yours: &str, payer: Payer) {
        session.set_bill_value(bill.to_string());
        session.set_your_expense(yours.to_string());
        session.set_payer(payer);
    }

    #[test]
    fn test_seeded_from_config() {
        let session = session();
        assert_eq!(session.friends().len(), 3);
        assert!(session.selected_friend().is_none());
        assert!(!session.is_add_friend_open());
    }

    #[test]
    fn test_empty_seed() {
        let config = Config {
            friends: Vec::new(),
            ..Config::default()
        };
        let mut session = Session::with_ids(&config, Box::new(SequentialIds::starting_at(1)));
        assert!(!session.has_friends());

        session.set_friend_name("Dora".to_string());
        session.submit_new_friend().unwrap();
        assert!(session.has_friends());
    }

    #[test]
    fn test_duplicate_seed_skipped() {
        let mut config = Config::default();
        let dup = config.friends[0].clone();
        config.friends.push(dup);

        let session = Session::with_ids(&config, Box::new(SequentialIds::starting_at(1)));
        assert_eq!(session.friends().len(), 3);
    }

    #[test]
    fn test_select_toggles_and_closes_panel() {
        let mut session = session();
        session.toggle_add_friend_panel();
        assert!(session.is_add_friend_open());

        session.select_friend(CLARK);
        assert!(!session.is_add_friend_open());
        assert_eq!(session.selected_friend().map(|f| f.name.as_str()), Some("Clark"));

        session.select_friend(CLARK);
        assert!(session.selected_friend().is_none());
    }

    #[test]
    fn test_opening_panel_clears_selection() {
        let mut session = session();
        session.select_friend(SARAH);

        assert!(session.toggle_add_friend_panel());
        assert!(session.selected_friend().is_none());

        // Closing again does not bring the selection back
        assert!(!session.toggle_add_friend_panel());
        assert!(session.selected_friend().is_none());
    }

    #[test]
    fn test_switching_friend_resets_split_form() {
        let mut session = session();
        session.select_friend(CLARK);
        fill_split(&mut session, "50", "20", Payer::Friend);

        session.select_friend(SARAH);
        assert_eq!(session.split_form(), &BillSplitForm::default());
    }

    #[test]
    fn test_add_friend_flow() {
        let mut session = session();
        session.toggle_add_friend_panel();
        session.set_friend_name("Dora".to_string());

        let id = session.submit_new_friend().unwrap();

        assert_eq!(id, 1);
        assert_eq!(session.friends().len(), 4);
        assert_eq!(session.friends()[3].name, "Dora");
        assert_eq!(session.friends()[3].balance, Decimal::ZERO);
        assert!(!session.is_add_friend_open());
        assert_eq!(session.add_friend_form().name, "");
    }

    #[test]
    fn test_add_friend_rejected_keeps_panel_open() {
        let mut session = session();
        session.toggle_add_friend_panel();

        assert_eq!(session.submit_new_friend(), Err(ValidationError::EmptyName));
        assert!(session.is_add_friend_open());
        assert_eq!(session.friends().len(), 3);
    }

    #[test]
    fn test_split_end_to_end() {
        let mut session = session();
        session.select_friend(CLARK);
        fill_split(&mut session, "50", "20", Payer::You);

        let balance = session.submit_bill_split().unwrap();

        // -7 + (50 - 20)
        assert_eq!(balance, Decimal::from(23));
        assert_eq!(balance_of(&session, CLARK), Decimal::from(23));
        assert_eq!(session.split_form(), &BillSplitForm::default());
        assert!(session.is_selected(CLARK));
    }

    #[test]
    fn test_split_friend_paid() {
        let mut session = session();
        session.select_friend(SARAH);
        fill_split(&mut session, "100", "40", Payer::Friend);

        session.submit_bill_split().unwrap();

        assert_eq!(balance_of(&session, SARAH), Decimal::from(-20));
    }

    #[test]
    fn test_split_rejected_leaves_balance() {
        let mut session = session();
        session.select_friend(CLARK);
        fill_split(&mut session, "100", "140", Payer::You);

        assert_eq!(session.submit_bill_split(), Err(ValidationError::ExpenseExceedsBill));
        assert_eq!(balance_of(&session, CLARK), Decimal::from(-7));
        // Inputs are kept so the user can correct them
        assert_eq!(session.split_form().bill_value, "100");
    }

    #[test]
    fn test_split_overflowing_balance_rejected() {
        let mut session = session();
        session.select_friend(SARAH);
        let max = Decimal::MAX.to_string();
        fill_split(&mut session, &max, "0", Payer::You);

        assert_eq!(session.submit_bill_split(), Err(ValidationError::AmountOutOfRange));
        assert_eq!(balance_of(&session, SARAH), Decimal::from(20));
        assert_eq!(session.split_form().bill_value, max);
        assert!(session.is_selected(SARAH));
    }

    #[test]
    fn test_split_form_overflow_has_no_friend_expense() {
        let mut session = session();
        session.select_friend(SARAH);
        fill_split(&mut session, &Decimal::MAX.to_string(), "-1", Payer::You);

        assert_eq!(session.split_form().friend_expense(), None);
        assert_eq!(session.submit_bill_split(), Err(ValidationError::NegativeExpense));
    }

    #[test]
    fn test_split_without_selection() {
        let mut session = session();
        fill_split(&mut session, "50", "20", Payer::You);

        assert_eq!(session.submit_bill_split(), Err(ValidationError::NoFriendSelected));
    }
}
