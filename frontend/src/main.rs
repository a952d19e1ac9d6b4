mod app;
mod components;
mod hooks;
mod pages;
mod routes;
mod services;

use app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
