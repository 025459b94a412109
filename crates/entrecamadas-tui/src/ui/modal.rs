/// Modal dialogs layered over the main screen
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    None,
    /// Waiting for the user to confirm deleting a message
    ConfirmDelete { id: String, title: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::None)
    }
}
