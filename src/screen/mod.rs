pub mod controller;
pub mod view;

pub use controller::{
    DeleteOutcome, FormMode, ListScreen, LoadState, ModalState, SubmitOutcome, UnmountHandle,
    DELETE_FAILED, DELETE_QUESTION, SUBMIT_FAILED,
};
pub use view::{ModalView, RowActions, RowView, ScreenView};
