pub mod modal_state;
pub mod picker_state;
pub mod ui_state;

pub use modal_state::ModalState;
pub use picker_state::PickerState;
pub use ui_state::UIState;
