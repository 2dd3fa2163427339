//! UI Components
//!
//! Reusable Leptos components.

mod answer_wizard;
mod choice_input;
mod delete_confirm_button;
mod favorite_links_modal;
mod free_text_input;
mod leagues_panel;
mod login_form;
mod modal;
mod nav_bar;
mod notification;
mod official_answers_modal;
mod ordering_input;
mod race_form;
mod race_list;
mod slider_input;

pub use answer_wizard::AnswerWizard;
pub use choice_input::ChoiceInput;
pub use delete_confirm_button::DeleteConfirmButton;
pub use favorite_links_modal::FavoriteLinksModal;
pub use free_text_input::FreeTextInput;
pub use leagues_panel::LeaguesPanel;
pub use login_form::LoginForm;
pub use modal::Modal;
pub use nav_bar::NavBar;
pub use notification::{NoticeModal, ToastList};
pub use official_answers_modal::OfficialAnswersModal;
pub use ordering_input::OrderingInput;
pub use race_form::RaceForm;
pub use race_list::RaceList;
pub use slider_input::SliderInput;
