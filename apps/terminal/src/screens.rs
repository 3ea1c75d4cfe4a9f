//! # Screens
//!
//! The text-menu user interface: one screen per counter operation, plus
//! the main menu that dispatches between them.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                            MAIN MENU                                │
//! │                                                                     │
//! │   1 ──► LOAN ITEM ───────────────┐                                  │
//! │   2 ──► RETURN ITEM ─────────────┤                                  │
//! │   3 ──► SEARCH FOR PATRON ──┐    │   every screen returns to the    │
//! │   4 ──► REGISTER PATRON ────┼────┼─► main menu when it finishes     │
//! │   5 ──► ACCESS MAKERSPACE ──┘    │   (search repeats until          │
//! │   6 ──► QUIT (save + exit)       │    cancelled)                    │
//! │                                  │                                  │
//! │         ◄────────────────────────┘                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each handler reads what it needs through [`Prompt`], asks `bat-core`
//! for the decision, applies any mutation to the [`Library`], and reports
//! the outcome as plain text. Refusals are messages, never errors.

use chrono::Local;
use tracing::info;

use bat_core::{loans, rules, MAX_PATRON_AGE, MIN_PATRON_AGE};
use bat_store::{search, Library, StoreConfig};

use crate::error::AppResult;
use crate::input::Prompt;

use std::io::{BufRead, Write};

// =============================================================================
// Screens
// =============================================================================

/// The screens of the terminal application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    LoanItem,
    ReturnItem,
    SearchForPatron,
    RegisterPatron,
    AccessMakerspace,
    Quit,
}

impl Screen {
    /// Banner heading shown when the screen opens.
    pub fn title(self) -> &'static str {
        match self {
            Screen::MainMenu => "MAIN MENU",
            Screen::LoanItem => "LOAN ITEM",
            Screen::ReturnItem => "RETURN ITEM",
            Screen::SearchForPatron => "SEARCH FOR PATRON",
            Screen::RegisterPatron => "REGISTER PATRON",
            Screen::AccessMakerspace => "ACCESS MAKERSPACE",
            Screen::Quit => "QUIT",
        }
    }
}

// =============================================================================
// The Application
// =============================================================================

/// The interactive session: a library, a prompt and the current screen.
#[derive(Debug)]
pub struct BatUi<R, W> {
    library: Library,
    prompt: Prompt<R, W>,
    screen: Screen,
}

impl<R: BufRead, W: Write> BatUi<R, W> {
    /// Starts a session on the main menu.
    pub fn new(library: Library, prompt: Prompt<R, W>) -> Self {
        BatUi {
            library,
            prompt,
            screen: Screen::MainMenu,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    /// Runs the session to completion, saving the data files on quit.
    pub fn run(&mut self, config: &StoreConfig) -> AppResult<()> {
        loop {
            self.screen = self.run_current_screen()?;
            if self.screen == Screen::Quit {
                self.library.save(config)?;
                self.prompt.say("Changes saved. Goodbye.")?;
                return Ok(());
            }
        }
    }

    /// Runs one screen and returns the screen to show next.
    pub fn run_current_screen(&mut self) -> AppResult<Screen> {
        self.prompt.say(&format!("\n=== {} ===", self.screen.title()))?;

        match self.screen {
            Screen::MainMenu => self.main_menu(),
            Screen::LoanItem => self.loan_item(),
            Screen::ReturnItem => self.return_item(),
            Screen::SearchForPatron => self.search_for_patron(),
            Screen::RegisterPatron => self.register_patron(),
            Screen::AccessMakerspace => self.access_makerspace(),
            Screen::Quit => Ok(Screen::Quit),
        }
    }

    // =========================================================================
    // Screen Handlers
    // =========================================================================

    fn main_menu(&mut self) -> AppResult<Screen> {
        self.prompt.say("1. Loan an item")?;
        self.prompt.say("2. Return an item")?;
        self.prompt.say("3. Search for a patron")?;
        self.prompt.say("4. Register a new patron")?;
        self.prompt.say("5. Access the makerspace")?;
        self.prompt.say("6. Quit")?;

        let choice = self.prompt.read_integer_range("Select an option: ", 1, 6)?;
        Ok(match choice {
            1 => Screen::LoanItem,
            2 => Screen::ReturnItem,
            3 => Screen::SearchForPatron,
            4 => Screen::RegisterPatron,
            5 => Screen::AccessMakerspace,
            _ => Screen::Quit,
        })
    }

    fn loan_item(&mut self) -> AppResult<Screen> {
        let Some(item_id) = self.read_item_id()? else {
            self.prompt.say("No item with that id.")?;
            return Ok(Screen::MainMenu);
        };

        // Snapshot what the confirmation needs before re-borrowing.
        let (summary, cap) = {
            // read_item_id verified the id exists.
            let item = search::item_by_id(item_id, &self.library.catalogue)
                .expect("item id was just verified");
            (item.to_string(), item.kind.max_loan_days())
        };

        self.prompt.say(&summary)?;
        if !self.prompt.read_bool("Loan this item? (y/n): ")? {
            return Ok(Screen::MainMenu);
        }

        let Some(cap) = cap else {
            self.prompt.say("Items of this type cannot be loaned.")?;
            return Ok(Screen::MainMenu);
        };

        let Some(patron_id) = self.identify_patron()? else {
            self.prompt.say("No matching patron found.")?;
            return Ok(Screen::MainMenu);
        };

        let days = self
            .prompt
            .read_integer_range("Loan duration in days: ", 1, cap)?;
        let today = Local::now().date_naive();

        let message = match self.library.loan_pair(patron_id, item_id) {
            Some((patron, item)) => {
                if loans::process_loan(patron, item, days, today) {
                    info!(patron = patron.id, item = item.id, days, "Loan processed");
                    match patron.loans.last() {
                        Some(loan) => format!("Loan recorded. {loan}"),
                        None => "Loan recorded.".to_string(),
                    }
                } else {
                    "This patron is not eligible to borrow this item.".to_string()
                }
            }
            None => "No matching patron found.".to_string(),
        };
        self.prompt.say(&message)?;

        Ok(Screen::MainMenu)
    }

    fn return_item(&mut self) -> AppResult<Screen> {
        let Some(patron_id) = self.identify_patron()? else {
            self.prompt.say("No matching patron found.")?;
            return Ok(Screen::MainMenu);
        };

        let summary = self
            .library
            .patrons
            .iter()
            .find(|p| p.id == patron_id)
            .map(|p| (p.to_string(), p.loans.is_empty()));
        let Some((summary, no_loans)) = summary else {
            return Ok(Screen::MainMenu);
        };

        self.prompt.say(&summary)?;
        if no_loans {
            return Ok(Screen::MainMenu);
        }

        // Re-prompt until an item this patron actually holds is named.
        loop {
            let item_id = self.prompt.read_integer("Enter the id of the item to return: ")?;
            let returned = u32::try_from(item_id)
                .ok()
                .and_then(|id| self.library.loan_pair(patron_id, id))
                .is_some_and(|(patron, item)| loans::process_return(patron, item));

            if returned {
                info!(patron = patron_id, item = item_id, "Return processed");
                self.prompt.say("Item returned.")?;
                return Ok(Screen::MainMenu);
            }
            self.prompt.say("That item is not on loan to this patron.")?;
        }
    }

    fn search_for_patron(&mut self) -> AppResult<Screen> {
        self.prompt.say("1. Search by name")?;
        self.prompt.say("2. Search by age")?;
        self.prompt.say("3. Back to main menu")?;

        let choice = self.prompt.read_integer_range("Select an option: ", 1, 3)?;
        let matches = match choice {
            1 => {
                let name = self.prompt.read_string("Enter the patron's name: ")?;
                search::patrons_by_name(&name, &self.library.patrons)
            }
            2 => {
                let age = self.prompt.read_integer("Enter the patron's age: ")?;
                search::patrons_by_age(age, &self.library.patrons)
            }
            _ => return Ok(Screen::MainMenu),
        };

        let report = if matches.is_empty() {
            "No patrons found.".to_string()
        } else {
            matches
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        };
        self.prompt.say(&report)?;

        Ok(Screen::SearchForPatron)
    }

    fn register_patron(&mut self) -> AppResult<Screen> {
        let name = self.prompt.read_string("Enter the patron's name: ")?;
        let age = self.prompt.read_integer_range(
            "Enter the patron's age: ",
            MIN_PATRON_AGE,
            MAX_PATRON_AGE,
        )?;

        let message = match self.library.register_patron(&name, age) {
            Ok(id) => format!("Registered patron {id}."),
            Err(err) => format!("Registration failed: {err}"),
        };
        self.prompt.say(&message)?;

        Ok(Screen::MainMenu)
    }

    fn access_makerspace(&mut self) -> AppResult<Screen> {
        let Some(patron_id) = self.identify_patron()? else {
            self.prompt.say("No matching patron found.")?;
            return Ok(Screen::MainMenu);
        };

        let allowed = self
            .library
            .patrons
            .iter()
            .find(|p| p.id == patron_id)
            .is_some_and(|p| {
                rules::can_use_makerspace(p.age, p.outstanding_fees, p.makerspace_training)
            });

        if allowed {
            info!(patron = patron_id, "Makerspace access granted");
            self.prompt.say("Access granted. Enjoy the makerspace.")?;
        } else {
            self.prompt.say("Access denied.")?;
        }

        Ok(Screen::MainMenu)
    }

    // =========================================================================
    // Shared Steps
    // =========================================================================

    /// Asks for an item id and checks the catalogue has it.
    fn read_item_id(&mut self) -> AppResult<Option<u32>> {
        let raw = self.prompt.read_integer("Enter the item id: ")?;
        let id = match u32::try_from(raw) {
            Ok(id) => id,
            Err(_) => return Ok(None),
        };
        Ok(search::item_by_id(id, &self.library.catalogue).map(|item| item.id))
    }

    /// Asks for a name and age and resolves them to a patron id.
    ///
    /// Name alone can be ambiguous; name plus age picks one patron.
    fn identify_patron(&mut self) -> AppResult<Option<u32>> {
        let name = self.prompt.read_string("Enter the patron's name: ")?;
        let age = self.prompt.read_integer("Enter the patron's age: ")?;
        Ok(search::patron_by_name_and_age(&name, age, &self.library.patrons).map(|p| p.id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bat_core::{BorrowableItem, ItemKind, Money, Patron};
    use std::io::Cursor;

    /// A session scripted from a string, over the standard fixture.
    fn session(input: &str) -> BatUi<Cursor<Vec<u8>>, Vec<u8>> {
        let prompt = Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        BatUi::new(fixture(), prompt)
    }

    fn fixture() -> Library {
        let mut hannah = Patron::new(2, "Hannah Taylor", 25);
        hannah.makerspace_training = true;
        hannah.gardening_tool_training = true;

        let mut marion = Patron::new(3, "Marion Woods", 95);
        marion.outstanding_fees = Money::from_cents(550);

        Library {
            patrons: vec![Patron::new(1, "Leon Kelly", 15), hannah, marion],
            catalogue: vec![
                BorrowableItem {
                    id: 101,
                    name: "Dictionary".to_string(),
                    kind: ItemKind::Book,
                    year: 2020,
                    number_owned: 3,
                    on_loan: 0,
                },
                BorrowableItem {
                    id: 102,
                    name: "Circular saw".to_string(),
                    kind: ItemKind::CarpentryTool,
                    year: 2019,
                    number_owned: 1,
                    on_loan: 0,
                },
            ],
        }
    }

    fn output(ui: BatUi<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(ui.prompt.into_writer()).unwrap()
    }

    // -------------------------------------------------------------------------
    // Main menu
    // -------------------------------------------------------------------------

    #[test]
    fn test_main_menu_routes_to_each_screen() {
        let routes = [
            ("1\n", Screen::LoanItem),
            ("2\n", Screen::ReturnItem),
            ("3\n", Screen::SearchForPatron),
            ("4\n", Screen::RegisterPatron),
            ("5\n", Screen::AccessMakerspace),
            ("6\n", Screen::Quit),
        ];
        for (input, expected) in routes {
            let mut ui = session(input);
            assert_eq!(ui.run_current_screen().unwrap(), expected);
        }
    }

    #[test]
    fn test_main_menu_reprompts_out_of_range_choice() {
        let mut ui = session("9\n0\n6\n");
        assert_eq!(ui.run_current_screen().unwrap(), Screen::Quit);
    }

    // -------------------------------------------------------------------------
    // Loan item
    // -------------------------------------------------------------------------

    #[test]
    fn test_loan_item_records_loan() {
        let mut ui = session("101\ny\nHannah Taylor\n25\n7\n");
        ui.screen = Screen::LoanItem;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert_eq!(ui.library.catalogue[0].on_loan, 1);

        let hannah = &ui.library.patrons[1];
        assert_eq!(hannah.loans.len(), 1);
        assert_eq!(hannah.loans[0].item_id, 101);

        assert!(output(ui).contains("Loan recorded."));
    }

    #[test]
    fn test_loan_item_unknown_item() {
        let mut ui = session("999\n");
        ui.screen = Screen::LoanItem;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert!(output(ui).contains("No item with that id."));
    }

    #[test]
    fn test_loan_item_declined_confirmation_changes_nothing() {
        let mut ui = session("101\nn\n");
        ui.screen = Screen::LoanItem;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert_eq!(ui.library.catalogue[0].on_loan, 0);
    }

    #[test]
    fn test_loan_item_refuses_ineligible_patron() {
        // Leon is a minor without carpentry training.
        let mut ui = session("102\ny\nLeon Kelly\n15\n7\n");
        ui.screen = Screen::LoanItem;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert_eq!(ui.library.catalogue[1].on_loan, 0);
        assert!(ui.library.patrons[0].loans.is_empty());
        assert!(output(ui).contains("not eligible"));
    }

    #[test]
    fn test_loan_item_caps_duration_at_item_maximum() {
        // 60 days is over the book cap; the prompt insists on 1..=55.
        let mut ui = session("101\ny\nHannah Taylor\n25\n60\n30\n");
        ui.screen = Screen::LoanItem;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert_eq!(ui.library.patrons[1].loans.len(), 1);
    }

    // -------------------------------------------------------------------------
    // Return item
    // -------------------------------------------------------------------------

    #[test]
    fn test_return_item_round_trip() {
        let mut ui = session("101\ny\nHannah Taylor\n25\n7\nHannah Taylor\n25\n101\n");
        ui.screen = Screen::LoanItem;
        ui.run_current_screen().unwrap();

        ui.screen = Screen::ReturnItem;
        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);

        assert_eq!(ui.library.catalogue[0].on_loan, 0);
        assert!(ui.library.patrons[1].loans.is_empty());
        assert!(output(ui).contains("Item returned."));
    }

    #[test]
    fn test_return_item_patron_without_loans() {
        let mut ui = session("Leon Kelly\n15\n");
        ui.screen = Screen::ReturnItem;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert!(output(ui).contains("No active loans"));
    }

    #[test]
    fn test_return_item_reprompts_for_item_not_held() {
        let mut ui = session("101\ny\nHannah Taylor\n25\n7\nHannah Taylor\n25\n102\n101\n");
        ui.screen = Screen::LoanItem;
        ui.run_current_screen().unwrap();

        ui.screen = Screen::ReturnItem;
        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert_eq!(ui.library.catalogue[0].on_loan, 0);
        assert!(output(ui).contains("not on loan to this patron"));
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_by_name_stays_on_search_screen() {
        let mut ui = session("1\nLeon Kelly\n");
        ui.screen = Screen::SearchForPatron;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::SearchForPatron);
        assert!(output(ui).contains("Patron 1: Leon Kelly (aged 15)"));
    }

    #[test]
    fn test_search_by_age_no_match() {
        let mut ui = session("2\n77\n");
        ui.screen = Screen::SearchForPatron;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::SearchForPatron);
        assert!(output(ui).contains("No patrons found."));
    }

    #[test]
    fn test_search_cancel_returns_to_main_menu() {
        let mut ui = session("3\n");
        ui.screen = Screen::SearchForPatron;
        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
    }

    // -------------------------------------------------------------------------
    // Register
    // -------------------------------------------------------------------------

    #[test]
    fn test_register_patron() {
        let mut ui = session("Er Jun Yet\n20\n");
        ui.screen = Screen::RegisterPatron;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert_eq!(ui.library.patrons.len(), 4);
        assert_eq!(ui.library.patrons[3].id, 4);
        assert!(output(ui).contains("Registered patron 4."));
    }

    #[test]
    fn test_register_patron_reprompts_out_of_range_age() {
        let mut ui = session("Er Jun Yet\n0\n200\n20\n");
        ui.screen = Screen::RegisterPatron;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert_eq!(ui.library.patrons.len(), 4);
    }

    #[test]
    fn test_register_patron_rejects_blank_name() {
        let mut ui = session("   \n20\n");
        ui.screen = Screen::RegisterPatron;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert_eq!(ui.library.patrons.len(), 3);
        assert!(output(ui).contains("Registration failed"));
    }

    // -------------------------------------------------------------------------
    // Makerspace
    // -------------------------------------------------------------------------

    #[test]
    fn test_makerspace_grants_adult_without_fees() {
        let mut ui = session("Hannah Taylor\n25\n");
        ui.screen = Screen::AccessMakerspace;

        assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
        assert!(output(ui).contains("Access granted"));
    }

    #[test]
    fn test_makerspace_denies_minor_and_debtor() {
        for input in ["Leon Kelly\n15\n", "Marion Woods\n95\n"] {
            let mut ui = session(input);
            ui.screen = Screen::AccessMakerspace;

            assert_eq!(ui.run_current_screen().unwrap(), Screen::MainMenu);
            assert!(output(ui).contains("Access denied."));
        }
    }

    // -------------------------------------------------------------------------
    // Quit
    // -------------------------------------------------------------------------

    #[test]
    fn test_run_saves_on_quit() {
        let dir = std::env::temp_dir().join(format!("bat-ui-{}-quit", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = StoreConfig::in_dir(&dir);

        let mut ui = session("6\n");
        ui.run(&config).unwrap();

        let saved = Library::load(&config).unwrap();
        assert_eq!(saved, fixture());
        assert!(output(ui).contains("Goodbye."));
    }
}
