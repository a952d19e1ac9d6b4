use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: Callback<()>,
    /// Error string from the last failed submit, shown inline so the
    /// modal can stay open for a retry.
    #[prop_or_default]
    pub error: Option<String>,
    pub children: Children,
}

/// Modal shell: backdrop click closes, clicks inside do not propagate out.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <div class="modal-overlay" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <h3>{&props.title}</h3>
                {if let Some(error) = &props.error {
                    html! { <p class="error-message">{error}</p> }
                } else {
                    html! {}
                }}
                {for props.children.iter()}
            </div>
        </div>
    }
}
