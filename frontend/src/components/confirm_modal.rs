use yew::prelude::*;

use crate::components::modal::Modal;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub title: String,
    pub message: String,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/no confirmation dialog used by the delete flows. A failed delete
/// keeps it open with the error inline.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <Modal title={props.title.clone()} error={props.error.clone()} on_close={props.on_cancel.clone()}>
            <p>{&props.message}</p>
            <div class="modal-buttons">
                <button class="cancel-button" onclick={on_cancel} disabled={props.busy}>
                    {"Cancel"}
                </button>
                <button class="save-button" onclick={on_confirm} disabled={props.busy}>
                    {if props.busy { "Deleting…" } else { "Yes, Delete" }}
                </button>
            </div>
        </Modal>
    }
}
