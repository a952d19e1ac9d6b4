use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>{"Horizon Hotels · book smart, stay better."}</p>
        </footer>
    }
}
